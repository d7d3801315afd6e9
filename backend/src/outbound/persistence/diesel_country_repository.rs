//! PostgreSQL-backed `CountryRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CountryRepository, CountryRepositoryError};
use crate::domain::{CountryCode, CountryName, PrefixQuery};

use super::diesel_error_mapping::{StoreFailure, classify_diesel_error, classify_pool_error};
use super::pool::DbPool;
use super::schema::countries;

diesel::define_sql_function! {
    /// SQL `LOWER`.
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Diesel implementation of the country reference lookups.
#[derive(Clone)]
pub struct DieselCountryRepository {
    pool: DbPool,
}

impl DieselCountryRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(failure: StoreFailure) -> CountryRepositoryError {
    match failure {
        StoreFailure::Connection(message) => CountryRepositoryError::connection(message),
        StoreFailure::Query(message) | StoreFailure::ForeignKeyViolation(message) => {
            CountryRepositoryError::query(message)
        }
        StoreFailure::UniqueViolation => CountryRepositoryError::query("unique violation"),
    }
}

fn map_diesel_error(error: diesel::result::Error) -> CountryRepositoryError {
    to_port_error(classify_diesel_error(error))
}

fn invalid_row(error: impl std::fmt::Display) -> CountryRepositoryError {
    CountryRepositoryError::query(format!("invalid country row: {error}"))
}

#[async_trait]
impl CountryRepository for DieselCountryRepository {
    async fn search_by_prefix(
        &self,
        query: &PrefixQuery,
        limit: usize,
    ) -> Result<Vec<CountryName>, CountryRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| to_port_error(classify_pool_error(err)))?;

        let names: Vec<String> = countries::table
            .filter(lower(countries::country_name).like(query.like_pattern()))
            .order(countries::country_name.asc())
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .select(countries::country_name)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        names
            .into_iter()
            .map(|name| CountryName::new(name).map_err(invalid_row))
            .collect()
    }

    async fn find_code_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CountryCode>, CountryRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| to_port_error(classify_pool_error(err)))?;

        let code: Option<String> = countries::table
            .filter(lower(countries::country_name).like(lower(name)))
            .select(countries::country_code)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        code.map(|code| CountryCode::new(code).map_err(invalid_row))
            .transpose()
    }
}
