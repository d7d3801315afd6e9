//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{CountryCatalogue, SessionSelector, UserRegistry, VisitLedger};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub countries: Arc<dyn CountryCatalogue>,
    pub visits: Arc<dyn VisitLedger>,
    pub users: Arc<dyn UserRegistry>,
    pub session: Arc<dyn SessionSelector>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use travel_tracker::domain::ports::FixtureCountryRepository;
    /// use travel_tracker::domain::{
    ///     CountryCatalogueService, CurrentSelection, SessionSelectorService, UserRegistryService,
    ///     VisitLedgerService,
    /// };
    /// use travel_tracker::inbound::http::state::HttpState;
    /// use travel_tracker::test_support::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let selection = Arc::new(CurrentSelection::default());
    /// let state = HttpState::new(
    ///     Arc::new(CountryCatalogueService::new(Arc::new(FixtureCountryRepository))),
    ///     Arc::new(VisitLedgerService::new(Arc::clone(&store), Arc::clone(&store))),
    ///     Arc::new(UserRegistryService::new(Arc::clone(&store), Arc::clone(&selection))),
    ///     Arc::new(SessionSelectorService::new(Arc::clone(&store), store, selection)),
    /// );
    /// let _session = state.session.clone();
    /// ```
    pub fn new(
        countries: Arc<dyn CountryCatalogue>,
        visits: Arc<dyn VisitLedger>,
        users: Arc<dyn UserRegistry>,
        session: Arc<dyn SessionSelector>,
    ) -> Self {
        Self {
            countries,
            visits,
            users,
            session,
        }
    }
}
