//! Country reference data.
//!
//! Countries are read-only: the store seeds them and nothing in the service
//! creates, edits or deletes one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of names returned by a prefix search.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Validation errors for country values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountryValidationError {
    /// The code was not two ASCII letters.
    #[error("country code must be two ASCII letters, got {code:?}")]
    InvalidCode { code: String },
    /// The name was blank.
    #[error("country name must not be empty")]
    EmptyName,
}

/// ISO 3166-1 alpha-2 code, stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate and normalise a two-letter code.
    pub fn new(code: impl Into<String>) -> Result<Self, CountryValidationError> {
        let raw = code.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CountryValidationError::InvalidCode { code: raw });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryName(String);

impl CountryName {
    /// Validate a non-empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, CountryValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CountryValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for CountryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CountryName> for String {
    fn from(value: CountryName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CountryName {
    type Error = CountryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A row of the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Primary key.
    pub code: CountryCode,
    /// Display name.
    pub name: CountryName,
}

impl Country {
    /// Fallible constructor from raw store values.
    pub fn try_from_parts(
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, CountryValidationError> {
        Ok(Self {
            code: CountryCode::new(code)?,
            name: CountryName::new(name)?,
        })
    }
}

/// Lowercased search term for autocomplete.
///
/// An empty term never reaches the store, so the type cannot hold one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixQuery(String);

impl PrefixQuery {
    /// Lowercase `raw`; `None` when it is missing or empty.
    ///
    /// # Examples
    /// ```
    /// use travel_tracker::domain::PrefixQuery;
    ///
    /// assert_eq!(PrefixQuery::parse(Some("FrA")).unwrap().as_ref(), "fra");
    /// assert!(PrefixQuery::parse(Some("")).is_none());
    /// assert!(PrefixQuery::parse(None).is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.filter(|term| !term.is_empty())
            .map(|term| Self(term.to_lowercase()))
    }

    /// `LIKE` pattern matching names that start with the term.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        format!("{}%", self.0)
    }
}

impl AsRef<str> for PrefixQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fr", "FR")]
    #[case(" de ", "DE")]
    fn code_is_normalised(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(CountryCode::new(raw).expect("valid code").as_ref(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("FRA")]
    #[case("F1")]
    fn code_rejects_malformed_input(#[case] raw: &str) {
        assert!(matches!(
            CountryCode::new(raw),
            Err(CountryValidationError::InvalidCode { .. })
        ));
    }

    #[rstest]
    fn name_rejects_blank() {
        assert_eq!(CountryName::new(" "), Err(CountryValidationError::EmptyName));
    }

    #[rstest]
    fn prefix_query_appends_wildcard() {
        let query = PrefixQuery::parse(Some("Ger")).expect("non-empty term");
        assert_eq!(query.like_pattern(), "ger%");
    }
}
