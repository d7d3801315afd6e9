//! Registry users: identifiers, names and display colours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum length, in characters, of a user name.
pub const USER_NAME_MAX: usize = 32;
/// Maximum length, in characters, of a colour tag.
pub const USER_COLOR_MAX: usize = 32;
/// Colour assigned when none is supplied.
pub const DEFAULT_USER_COLOR: &str = "teal";

/// Validation errors for user fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was not a positive integer.
    #[error("user id must be a positive integer")]
    InvalidId,
    /// The name was blank.
    #[error("user name must not be empty")]
    EmptyName,
    /// The name exceeded [`USER_NAME_MAX`].
    #[error("user name must be at most {max} characters")]
    NameTooLong { max: usize },
    /// The colour exceeded [`USER_COLOR_MAX`].
    #[error("colour must be at most {max} characters")]
    ColorTooLong { max: usize },
    /// The colour contained characters outside `[A-Za-z0-9#-]`.
    #[error("colour may only contain letters, digits, '#' or '-'")]
    ColorInvalidCharacters,
}

/// Store-generated user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Identifier the current selection falls back to when the registry is
    /// empty.
    pub const FALLBACK: Self = Self(1);

    /// Wrap a raw identifier read from the store.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(raw) if raw > 0 => Ok(Self(raw)),
            _ => Err(UserValidationError::InvalidId),
        }
    }
}

/// Unique, human readable user name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a name. Surrounding whitespace is dropped.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if trimmed.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display colour tag used to paint the user's visited countries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserColor(String);

impl UserColor {
    /// Validate a CSS colour keyword or hex literal.
    pub fn new(color: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = color.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        if trimmed.chars().count() > USER_COLOR_MAX {
            return Err(UserValidationError::ColorTooLong {
                max: USER_COLOR_MAX,
            });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '#' || c == '-')
        {
            return Err(UserValidationError::ColorInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Treat a missing form field the same as a blank one.
    pub fn from_optional(color: Option<String>) -> Result<Self, UserValidationError> {
        color.map_or_else(|| Ok(Self::default()), Self::new)
    }
}

impl Default for UserColor {
    fn default() -> Self {
        Self(DEFAULT_USER_COLOR.to_owned())
    }
}

impl AsRef<str> for UserColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserColor> for String {
    fn from(value: UserColor) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserColor {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A registered user.
///
/// ## Invariants
/// - `name` is unique across the registry (enforced by the store).
///
/// # Examples
/// ```
/// use travel_tracker::domain::{User, UserColor, UserId, UserName};
///
/// let user = User::new(UserId::new(1), UserName::new("Alice")?, UserColor::default());
/// assert_eq!(user.color().as_ref(), "teal");
/// # Ok::<(), travel_tracker::domain::UserValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    color: UserColor,
}

impl User {
    /// Assemble a user from validated parts.
    #[must_use]
    pub fn new(id: UserId, name: UserName, color: UserColor) -> Self {
        Self { id, name, color }
    }

    /// Fallible constructor from raw store values.
    pub fn try_from_parts(
        id: i32,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id),
            UserName::new(name)?,
            UserColor::new(color)?,
        ))
    }

    /// Store-generated identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique name.
    #[must_use]
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Display colour.
    #[must_use]
    pub fn color(&self) -> &UserColor {
        &self.color
    }
}

/// Name and colour submitted when creating or editing a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Requested name.
    pub name: UserName,
    /// Requested colour.
    pub color: UserColor,
}

impl UserDraft {
    /// Validate raw form input. A missing or blank colour becomes the default.
    pub fn try_from_form(
        name: impl Into<String>,
        color: Option<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: UserName::new(name)?,
            color: UserColor::from_optional(color)?,
        })
    }
}
