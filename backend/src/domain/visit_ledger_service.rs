//! Visit ledger service.
//!
//! Duplicate and missing visits are detected by the store's conditional
//! writes; this service only turns [`VisitChange::Unchanged`] into the
//! matching recoverable error.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::country_catalogue_service::CountryCatalogueService;
use crate::domain::ports::{
    CountryCatalogue, CountryRepository, DUPLICATE_VISIT_MESSAGE, NOT_VISITED_MESSAGE,
    VisitChange, VisitLedger, VisitRepository, VisitRepositoryError,
};
use crate::domain::{CountryCode, Error, UserId, VisitAction, VisitedCountries};

/// Service implementing [`VisitLedger`].
#[derive(Clone)]
pub struct VisitLedgerService<C, V> {
    catalogue: CountryCatalogueService<C>,
    visits: Arc<V>,
}

impl<C, V> VisitLedgerService<C, V> {
    /// Create a service resolving names through `countries` and storing
    /// rows in `visits`.
    pub fn new(countries: Arc<C>, visits: Arc<V>) -> Self {
        Self {
            catalogue: CountryCatalogueService::new(countries),
            visits,
        }
    }
}

pub(crate) fn map_visit_error(error: VisitRepositoryError) -> Error {
    match error {
        VisitRepositoryError::Connection { message } => {
            Error::internal(format!("visit repository unavailable: {message}"))
        }
        VisitRepositoryError::Query { message } => {
            Error::internal(format!("visit repository error: {message}"))
        }
        VisitRepositoryError::MissingReference { message } => Error::not_found(message),
    }
}

#[async_trait]
impl<C, V> VisitLedger for VisitLedgerService<C, V>
where
    C: CountryRepository,
    V: VisitRepository,
{
    async fn list_visited(&self, user_id: UserId) -> Result<VisitedCountries, Error> {
        let rows = self
            .visits
            .list_visited(user_id)
            .await
            .map_err(map_visit_error)?;
        Ok(VisitedCountries::from_countries(rows))
    }

    async fn add_visit(&self, user_id: UserId, code: &CountryCode) -> Result<(), Error> {
        match self
            .visits
            .insert(user_id, code)
            .await
            .map_err(map_visit_error)?
        {
            VisitChange::Applied => {
                info!(user_id = user_id.get(), country = %code, "visit recorded");
                Ok(())
            }
            VisitChange::Unchanged => Err(Error::duplicate_visit(DUPLICATE_VISIT_MESSAGE)),
        }
    }

    async fn remove_visit(&self, user_id: UserId, code: &CountryCode) -> Result<(), Error> {
        match self
            .visits
            .delete(user_id, code)
            .await
            .map_err(map_visit_error)?
        {
            VisitChange::Applied => {
                info!(user_id = user_id.get(), country = %code, "visit removed");
                Ok(())
            }
            VisitChange::Unchanged => Err(Error::not_visited(NOT_VISITED_MESSAGE)),
        }
    }

    async fn apply_action(
        &self,
        user_id: UserId,
        country_name: &str,
        action: VisitAction,
    ) -> Result<(), Error> {
        let code = self.catalogue.resolve_code_by_name(country_name).await?;
        debug!(user_id = user_id.get(), country = %code, ?action, "applying visit action");
        match action {
            VisitAction::Add => self.add_visit(user_id, &code).await,
            VisitAction::Remove => self.remove_visit(user_id, &code).await,
        }
    }
}

#[cfg(test)]
#[path = "visit_ledger_service_tests.rs"]
mod tests;
