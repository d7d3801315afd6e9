//! Port for the read-only country reference table.

use async_trait::async_trait;

use crate::domain::{CountryCode, CountryName, PrefixQuery};

use super::define_port_error;

define_port_error! {
    /// Errors raised by country repository adapters.
    pub enum CountryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "country repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "country repository query failed: {message}",
    }
}

/// Lookup operations over the country reference table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Names whose lowercase form starts with `query`, alphabetical, at most
    /// `limit` of them.
    async fn search_by_prefix(
        &self,
        query: &PrefixQuery,
        limit: usize,
    ) -> Result<Vec<CountryName>, CountryRepositoryError>;

    /// Code of the first country whose lowercase name is `LIKE` the lowercase
    /// `name`. The name is used as the pattern verbatim, so `%` and `_` in it
    /// behave as wildcards.
    async fn find_code_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CountryCode>, CountryRepositoryError>;
}

/// A handful of countries held in memory, for tests and local wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCountryRepository;

impl FixtureCountryRepository {
    /// The fixture table, alphabetical.
    pub const COUNTRIES: &'static [(&'static str, &'static str)] = &[
        ("FR", "France"),
        ("PF", "French Polynesia"),
        ("DE", "Germany"),
        ("IT", "Italy"),
        ("JP", "Japan"),
        ("ES", "Spain"),
        ("GB", "United Kingdom"),
        ("US", "United States"),
    ];

    fn rows() -> impl Iterator<Item = (CountryCode, CountryName)> {
        Self::COUNTRIES.iter().filter_map(|(code, name)| {
            Some((CountryCode::new(*code).ok()?, CountryName::new(*name).ok()?))
        })
    }
}

/// Evaluate a SQL `LIKE` pattern (`%` and `_` wildcards, no escapes).
pub(crate) fn sql_like(text: &str, pattern: &str) -> bool {
    fn matches(text: &[char], pattern: &[char]) -> bool {
        match pattern.split_first() {
            None => text.is_empty(),
            Some(('%', rest)) => (0..=text.len()).any(|skip| {
                text.get(skip..).is_some_and(|tail| matches(tail, rest))
            }),
            Some((expected, rest)) => match text.split_first() {
                Some((actual, tail)) if *expected == '_' || expected == actual => {
                    matches(tail, rest)
                }
                _ => false,
            },
        }
    }
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    matches(&text, &pattern)
}

#[async_trait]
impl CountryRepository for FixtureCountryRepository {
    async fn search_by_prefix(
        &self,
        query: &PrefixQuery,
        limit: usize,
    ) -> Result<Vec<CountryName>, CountryRepositoryError> {
        let pattern = query.like_pattern();
        Ok(Self::rows()
            .filter(|(_, name)| sql_like(&name.as_ref().to_lowercase(), &pattern))
            .map(|(_, name)| name)
            .take(limit)
            .collect())
    }

    async fn find_code_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CountryCode>, CountryRepositoryError> {
        let pattern = name.to_lowercase();
        Ok(Self::rows()
            .find(|(_, candidate)| sql_like(&candidate.as_ref().to_lowercase(), &pattern))
            .map(|(code, _)| code))
    }
}
