//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed entities of the travel tracker, the
//! ports adapters plug into, and the services implementing the driving ports.
//! Types are immutable once validated and document their serde contracts in
//! their own Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - User, UserId, UserDraft: registry entries.
//! - Country, CountryCode, CountryName, PrefixQuery: reference data.
//! - VisitAction, VisitedCountries: the visit ledger view.
//! - CurrentSelection, CurrentUserInfo: the process-wide current user.
//! - `*Service`: implementations of the driving ports in [`ports`].

pub mod country;
pub mod error;
pub mod ports;
pub mod selection;
pub mod trace_id;
pub mod user;
pub mod visit;

mod country_catalogue_service;
mod session_selector_service;
mod user_registry_service;
mod visit_ledger_service;

pub use self::country::{
    Country, CountryCode, CountryName, CountryValidationError, DEFAULT_SEARCH_LIMIT, PrefixQuery,
};
pub use self::country_catalogue_service::CountryCatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::selection::{CurrentSelection, CurrentUserInfo};
pub use self::session_selector_service::SessionSelectorService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    DEFAULT_USER_COLOR, USER_COLOR_MAX, USER_NAME_MAX, User, UserColor, UserDraft, UserId,
    UserName, UserValidationError,
};
pub use self::user_registry_service::UserRegistryService;
pub use self::visit::{UnknownVisitAction, VisitAction, VisitedCountries};
pub use self::visit_ledger_service::VisitLedgerService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use travel_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such user"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
