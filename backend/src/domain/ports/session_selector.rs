//! Driving port for the process-wide current user.

use async_trait::async_trait;

use crate::domain::{CurrentUserInfo, Error, UserId};

/// Reads and switches the single current selection shared by all requests.
#[async_trait]
pub trait SessionSelector: Send + Sync {
    /// Compose the current user's view from fresh registry and ledger reads.
    async fn current(&self) -> Result<CurrentUserInfo, Error>;

    /// Point the selection at `user_id` without checking it exists.
    fn select(&self, user_id: UserId);

    /// The raw selected id.
    fn selected(&self) -> UserId;
}
