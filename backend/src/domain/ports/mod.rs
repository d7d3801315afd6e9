//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`CountryCatalogue`, `VisitLedger`, `UserRegistry`,
//! `SessionSelector`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod country_catalogue;
mod country_repository;
mod session_selector;
mod user_registry;
mod user_repository;
mod visit_ledger;
mod visit_repository;

pub use country_catalogue::{CountryCatalogue, INVALID_COUNTRY_MESSAGE};
#[cfg(test)]
pub use country_repository::MockCountryRepository;
pub(crate) use country_repository::sql_like;
pub use country_repository::{CountryRepository, CountryRepositoryError, FixtureCountryRepository};
pub use session_selector::SessionSelector;
pub use user_registry::{DUPLICATE_NAME_MESSAGE, UserRegistry};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use visit_ledger::{DUPLICATE_VISIT_MESSAGE, NOT_VISITED_MESSAGE, VisitLedger};
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
pub use visit_repository::{VisitChange, VisitRepository, VisitRepositoryError};
