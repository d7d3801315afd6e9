//! User registry service.
//!
//! Owns the rule that deleting the selected user moves the selection to the
//! first remaining user, or to [`UserId::FALLBACK`] when nobody is left.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    DUPLICATE_NAME_MESSAGE, UserPersistenceError, UserRegistry, UserRepository,
};
use crate::domain::{CurrentSelection, Error, User, UserDraft, UserId};

/// Service implementing [`UserRegistry`].
#[derive(Clone)]
pub struct UserRegistryService<U> {
    users: Arc<U>,
    selection: Arc<CurrentSelection>,
}

impl<U> UserRegistryService<U> {
    /// Create a service over `users` that keeps `selection` valid on delete.
    pub fn new(users: Arc<U>, selection: Arc<CurrentSelection>) -> Self {
        Self { users, selection }
    }
}

pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateName { .. } => Error::duplicate_name(DUPLICATE_NAME_MESSAGE),
    }
}

#[async_trait]
impl<U> UserRegistry for UserRegistryService<U>
where
    U: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_error)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(id).await.map_err(map_user_error)
    }

    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self.users.insert(&draft).await.map_err(map_user_error)?;
        info!(user_id = user.id().get(), name = %user.name(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        self.users
            .update(id, &draft)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let removed = self.users.delete(id).await.map_err(map_user_error)?;
        if removed {
            info!(user_id = id.get(), "user deleted");
        }
        if self.selection.get() != id {
            return Ok(());
        }
        let fallback = self
            .users
            .list()
            .await
            .map_err(map_user_error)?
            .first()
            .map_or(UserId::FALLBACK, User::id);
        if self.selection.replace_if(id, fallback) {
            info!(from = id.get(), to = fallback.get(), "selection moved off deleted user");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_registry_service_tests.rs"]
mod tests;
