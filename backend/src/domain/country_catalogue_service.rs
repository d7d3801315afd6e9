//! Country catalogue service.
//!
//! Wraps the country reference repository with the empty-query shortcut and
//! the "Invalid country name." failure.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CountryCatalogue, CountryRepository, CountryRepositoryError, INVALID_COUNTRY_MESSAGE,
};
use crate::domain::{CountryCode, CountryName, Error, PrefixQuery};

/// Service implementing [`CountryCatalogue`].
#[derive(Clone)]
pub struct CountryCatalogueService<R> {
    countries: Arc<R>,
}

impl<R> CountryCatalogueService<R> {
    /// Create a service over the given repository.
    pub fn new(countries: Arc<R>) -> Self {
        Self { countries }
    }
}

pub(crate) fn map_country_error(error: CountryRepositoryError) -> Error {
    match error {
        CountryRepositoryError::Connection { message } => {
            Error::internal(format!("country repository unavailable: {message}"))
        }
        CountryRepositoryError::Query { message } => {
            Error::internal(format!("country repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> CountryCatalogue for CountryCatalogueService<R>
where
    R: CountryRepository,
{
    async fn search_by_prefix(&self, query: &str, limit: usize) -> Result<Vec<CountryName>, Error> {
        let Some(query) = PrefixQuery::parse(Some(query)) else {
            return Ok(Vec::new());
        };
        self.countries
            .search_by_prefix(&query, limit)
            .await
            .map_err(map_country_error)
    }

    async fn resolve_code_by_name(&self, name: &str) -> Result<CountryCode, Error> {
        let code = self
            .countries
            .find_code_by_name(name)
            .await
            .map_err(map_country_error)?;
        code.ok_or_else(|| {
            debug!(%name, "country name did not resolve");
            Error::invalid_country(INVALID_COUNTRY_MESSAGE)
        })
    }
}
