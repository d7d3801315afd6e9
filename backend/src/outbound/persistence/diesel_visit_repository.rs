//! PostgreSQL-backed `VisitRepository`.
//!
//! Inserts use `ON CONFLICT DO NOTHING` and deletes are unconditional, so
//! the affected-row count alone says whether anything changed.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{VisitChange, VisitRepository, VisitRepositoryError};
use crate::domain::{Country, CountryCode, UserId};

use super::diesel_error_mapping::{StoreFailure, classify_diesel_error, classify_pool_error};
use super::models::{CountryRow, NewVisitRow};
use super::pool::DbPool;
use super::schema::{countries, country_visited};

/// Diesel implementation of the visit ledger storage.
#[derive(Clone)]
pub struct DieselVisitRepository {
    pool: DbPool,
}

impl DieselVisitRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(failure: StoreFailure) -> VisitRepositoryError {
    match failure {
        StoreFailure::Connection(message) => VisitRepositoryError::connection(message),
        StoreFailure::ForeignKeyViolation(constraint) => {
            VisitRepositoryError::missing_reference(constraint)
        }
        StoreFailure::UniqueViolation => VisitRepositoryError::query("unique violation"),
        StoreFailure::Query(message) => VisitRepositoryError::query(message),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> VisitRepositoryError {
    to_port_error(classify_diesel_error(error))
}

fn change_from_rows(affected: usize) -> VisitChange {
    if affected == 0 {
        VisitChange::Unchanged
    } else {
        VisitChange::Applied
    }
}

#[async_trait]
impl VisitRepository for DieselVisitRepository {
    async fn list_visited(&self, user_id: UserId) -> Result<Vec<Country>, VisitRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| to_port_error(classify_pool_error(err)))?;

        let rows: Vec<CountryRow> = country_visited::table
            .inner_join(countries::table)
            .filter(country_visited::user_id.eq(user_id.get()))
            .order(countries::country_name.asc())
            .select(CountryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|row| {
                Country::try_from_parts(row.country_code, row.country_name).map_err(|err| {
                    VisitRepositoryError::query(format!("invalid country row: {err}"))
                })
            })
            .collect()
    }

    async fn insert(
        &self,
        user_id: UserId,
        code: &CountryCode,
    ) -> Result<VisitChange, VisitRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| to_port_error(classify_pool_error(err)))?;

        let affected = diesel::insert_into(country_visited::table)
            .values(NewVisitRow {
                user_id: user_id.get(),
                country_code: code.as_ref(),
            })
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(change_from_rows(affected))
    }

    async fn delete(
        &self,
        user_id: UserId,
        code: &CountryCode,
    ) -> Result<VisitChange, VisitRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| to_port_error(classify_pool_error(err)))?;

        let affected = diesel::delete(
            country_visited::table
                .filter(country_visited::user_id.eq(user_id.get()))
                .filter(country_visited::country_code.eq(code.as_ref())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(change_from_rows(affected))
    }
}
