//! Port for the user ↔ country visit relation.

use async_trait::async_trait;

use crate::domain::{Country, CountryCode, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by visit repository adapters.
    pub enum VisitRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "visit repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "visit repository query failed: {message}",
        /// The user or the country referenced by the row does not exist.
        MissingReference { message: String } => "visit references a missing row: {message}",
    }
}

/// Whether a conditional write touched a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitChange {
    /// The row was inserted or deleted.
    Applied,
    /// The row already existed (insert) or was absent (delete).
    Unchanged,
}

/// Storage for visit rows.
///
/// Writes are single conditional statements, so "already visited" and
/// "not visited" are decided by the store, never by a cached snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Visited countries of `user_id` joined with their names, ordered by
    /// name.
    async fn list_visited(&self, user_id: UserId) -> Result<Vec<Country>, VisitRepositoryError>;

    /// Insert the pair unless it already exists.
    async fn insert(
        &self,
        user_id: UserId,
        code: &CountryCode,
    ) -> Result<VisitChange, VisitRepositoryError>;

    /// Delete the pair if it exists.
    async fn delete(
        &self,
        user_id: UserId,
        code: &CountryCode,
    ) -> Result<VisitChange, VisitRepositoryError>;
}
