//! Session selector service.
//!
//! The current-user view is rebuilt from the store on every call. A pointer
//! left dangling by a delete elsewhere is re-pointed at the first user.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{SessionSelector, UserRepository, VisitRepository};
use crate::domain::user_registry_service::map_user_error;
use crate::domain::visit_ledger_service::map_visit_error;
use crate::domain::{CurrentSelection, CurrentUserInfo, Error, UserId, VisitedCountries};

/// Service implementing [`SessionSelector`].
#[derive(Clone)]
pub struct SessionSelectorService<U, V> {
    users: Arc<U>,
    visits: Arc<V>,
    selection: Arc<CurrentSelection>,
}

impl<U, V> SessionSelectorService<U, V> {
    /// Create a service reading `users` and `visits` for `selection`.
    pub fn new(users: Arc<U>, visits: Arc<V>, selection: Arc<CurrentSelection>) -> Self {
        Self {
            users,
            visits,
            selection,
        }
    }
}

#[async_trait]
impl<U, V> SessionSelector for SessionSelectorService<U, V>
where
    U: UserRepository,
    V: VisitRepository,
{
    async fn current(&self) -> Result<CurrentUserInfo, Error> {
        let selected = self.selection.get();
        let users = self.users.list().await.map_err(map_user_error)?;
        let user = match users.iter().find(|user| user.id() == selected) {
            Some(user) => user.clone(),
            None => {
                let Some(first) = users.first() else {
                    return Ok(CurrentUserInfo::empty());
                };
                if self.selection.replace_if(selected, first.id()) {
                    debug!(
                        dangling = selected.get(),
                        to = first.id().get(),
                        "re-pointed selection"
                    );
                } else {
                    // A concurrent select won; it is kept for the next call.
                    debug!(
                        dangling = selected.get(),
                        now = self.selection.get().get(),
                        "selection changed while re-pointing"
                    );
                }
                first.clone()
            }
        };
        let rows = self
            .visits
            .list_visited(user.id())
            .await
            .map_err(map_visit_error)?;
        Ok(CurrentUserInfo {
            user: Some(user),
            users,
            visited: VisitedCountries::from_countries(rows),
        })
    }

    fn select(&self, user_id: UserId) {
        debug!(user_id = user_id.get(), "selection switched");
        self.selection.set(user_id);
    }

    fn selected(&self) -> UserId {
        self.selection.get()
    }
}
