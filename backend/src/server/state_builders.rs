//! Wiring of the Diesel repositories into the driving-port services.

use std::sync::Arc;

use actix_web::web;

use travel_tracker::domain::{
    CountryCatalogueService, CurrentSelection, SessionSelectorService, UserRegistryService,
    VisitLedgerService,
};
use travel_tracker::inbound::http::state::HttpState;
use travel_tracker::outbound::persistence::{
    DbPool, DieselCountryRepository, DieselUserRepository, DieselVisitRepository,
};

/// Build the shared HTTP state. Every service sees the same pool and the
/// same process-wide current-user selection.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let countries = Arc::new(DieselCountryRepository::new(pool.clone()));
    let visits = Arc::new(DieselVisitRepository::new(pool.clone()));
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let selection = Arc::new(CurrentSelection::default());

    web::Data::new(HttpState::new(
        Arc::new(CountryCatalogueService::new(Arc::clone(&countries))),
        Arc::new(VisitLedgerService::new(countries, Arc::clone(&visits))),
        Arc::new(UserRegistryService::new(
            Arc::clone(&users),
            Arc::clone(&selection),
        )),
        Arc::new(SessionSelectorService::new(users, visits, selection)),
    ))
}
