//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The unique name constraint rejected the write.
        DuplicateName { name: String } => "user name {name:?} is already taken",
    }
}

/// Storage for registry users. Deleting a user removes their visits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id ascending.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a user and return it with its generated id.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Overwrite name and colour; `None` when no such user exists.
    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete a user; `false` when no such user existed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
