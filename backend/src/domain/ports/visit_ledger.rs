//! Driving port for recording and listing visits.

use async_trait::async_trait;

use crate::domain::{CountryCode, Error, UserId, VisitAction, VisitedCountries};

/// Message shown when adding a country twice.
pub const DUPLICATE_VISIT_MESSAGE: &str = "Country already added.";
/// Message shown when removing a country that was never added.
pub const NOT_VISITED_MESSAGE: &str = "Country not visited.";

/// Visit use-cases.
#[async_trait]
pub trait VisitLedger: Send + Sync {
    /// Countries `user_id` has visited.
    async fn list_visited(&self, user_id: UserId) -> Result<VisitedCountries, Error>;

    /// Record a visit; [`crate::domain::ErrorCode::DuplicateVisit`] if it
    /// exists.
    async fn add_visit(&self, user_id: UserId, code: &CountryCode) -> Result<(), Error>;

    /// Forget a visit; [`crate::domain::ErrorCode::NotVisited`] if absent.
    async fn remove_visit(&self, user_id: UserId, code: &CountryCode) -> Result<(), Error>;

    /// Resolve `country_name` and add or remove the visit.
    async fn apply_action(
        &self,
        user_id: UserId,
        country_name: &str,
        action: VisitAction,
    ) -> Result<(), Error>;
}
