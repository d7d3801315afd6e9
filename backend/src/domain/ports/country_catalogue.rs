//! Driving port for country search and name resolution.

use async_trait::async_trait;

use crate::domain::{CountryCode, CountryName, Error};

/// Message shown when a submitted name matches no country.
pub const INVALID_COUNTRY_MESSAGE: &str = "Invalid country name.";

/// Country lookups used by the autocomplete box and the visit form.
#[async_trait]
pub trait CountryCatalogue: Send + Sync {
    /// Up to `limit` names starting with `query`, ignoring case. An empty
    /// query yields an empty list without touching the store.
    async fn search_by_prefix(&self, query: &str, limit: usize) -> Result<Vec<CountryName>, Error>;

    /// Resolve a submitted name to its code, failing with
    /// [`crate::domain::ErrorCode::InvalidCountry`].
    async fn resolve_code_by_name(&self, name: &str) -> Result<CountryCode, Error>;
}
