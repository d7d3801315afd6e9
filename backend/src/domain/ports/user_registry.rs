//! Driving port for managing registry users.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Message shown when a name is already in use.
pub const DUPLICATE_NAME_MESSAGE: &str = "Name already in use. Please provide a new name.";

/// Registry use-cases.
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// All users ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user, if registered.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;

    /// Register a user; [`crate::domain::ErrorCode::DuplicateName`] when the
    /// name is taken.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Rename or recolour a user.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Delete a user and their visits. Moves the current selection off the
    /// deleted user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
