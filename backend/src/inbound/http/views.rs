//! JSON view models returned in place of rendered pages.
//!
//! Field names follow the page templates the front end expects
//! (`countryCode`, `countries`, `total`, `users`, `color`, `error`).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CurrentUserInfo, User};

/// A registry entry as shown in pickers and forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserView {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "teal")]
    pub color: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_string(),
            color: user.color().to_string(),
        }
    }
}

fn user_views(users: &[User]) -> Vec<UserView> {
    users.iter().map(UserView::from).collect()
}

/// Main map page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IndexView {
    /// Visited country codes of the current user.
    #[schema(example = json!(["FR"]))]
    pub country_code: Vec<String>,
    /// Visited country names, aligned with `countryCode`.
    #[schema(example = json!(["France"]))]
    pub countries: Vec<String>,
    pub total: usize,
    pub users: Vec<UserView>,
    /// Id of the current user; absent when the registry is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user_id: Option<i32>,
    #[schema(example = "teal")]
    pub color: String,
    /// Validation message from the last action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IndexView {
    /// Compose the page from the current-user snapshot.
    pub fn from_info(info: &CurrentUserInfo) -> Self {
        Self {
            country_code: info.visited.codes().iter().map(ToString::to_string).collect(),
            countries: info.visited.names().iter().map(ToString::to_string).collect(),
            total: info.visited.total(),
            users: user_views(&info.users),
            current_user_id: info.user.as_ref().map(|user| user.id().get()),
            color: info.color().to_string(),
            error: None,
        }
    }

    /// Attach a validation message.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

/// Payload of `GET /api/getData`, used to paint the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    #[schema(example = "teal")]
    pub color: String,
    #[schema(example = json!(["FR", "DE"]))]
    pub country_code: Vec<String>,
}

impl From<&CurrentUserInfo> for DataView {
    fn from(info: &CurrentUserInfo) -> Self {
        Self {
            color: info.color().to_string(),
            country_code: info.visited.codes().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Family management page: the user list plus an optional message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManageView {
    pub users: Vec<UserView>,
    pub error: Option<String>,
}

impl ManageView {
    /// The page for `users`, with `error` when re-rendering a failed submit.
    pub fn new(users: &[User], error: Option<String>) -> Self {
        Self {
            users: user_views(users),
            error,
        }
    }
}

/// Edit form for a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EditView {
    /// The user being edited; `null` when the id is unknown.
    pub user: Option<UserView>,
    pub error: Option<String>,
}

impl EditView {
    /// The form for `user`.
    pub fn new(user: Option<&User>, error: Option<String>) -> Self {
        Self {
            user: user.map(UserView::from),
            error,
        }
    }
}
