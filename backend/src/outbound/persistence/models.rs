//! Internal Diesel row structs.
//!
//! Never exposed to the domain; repositories convert them on the way out.

use diesel::prelude::*;

use super::schema::{countries, country_visited, users};

/// Row read from the countries table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CountryRow {
    pub country_code: String,
    pub country_name: String,
}

/// Row read from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub color: String,
}

/// Insertable user; the id comes from the serial column.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

/// Changeset applied by an edit.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

/// Insertable visit row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = country_visited)]
pub(crate) struct NewVisitRow<'a> {
    pub user_id: i32,
    pub country_code: &'a str,
}
