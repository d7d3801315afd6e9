//! Visit ledger values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Country, CountryCode, CountryName};

/// Toggle requested by the map page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitAction {
    /// Record a visit.
    Add,
    /// Forget a visit.
    Remove,
}

/// Raised when an action string is neither `add` nor `remove`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown visit action {0:?}; expected \"add\" or \"remove\"")]
pub struct UnknownVisitAction(pub String);

impl FromStr for VisitAction {
    type Err = UnknownVisitAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            other => Err(UnknownVisitAction(other.to_owned())),
        }
    }
}

/// The countries one user has visited.
///
/// Codes and names are parallel: `names()[i]` is the name of `codes()[i]`.
/// A code appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedCountries {
    codes: Vec<CountryCode>,
    names: Vec<CountryName>,
}

impl VisitedCountries {
    /// Build from joined store rows, dropping repeated codes.
    #[must_use]
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let mut visited = Self::default();
        for Country { code, name } in countries {
            if !visited.contains(&code) {
                visited.codes.push(code);
                visited.names.push(name);
            }
        }
        visited
    }

    /// Visited country codes.
    #[must_use]
    pub fn codes(&self) -> &[CountryCode] {
        &self.codes
    }

    /// Visited country names, aligned with [`Self::codes`].
    #[must_use]
    pub fn names(&self) -> &[CountryName] {
        &self.names
    }

    /// Number of visited countries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.codes.len()
    }

    /// Whether `code` has been visited.
    #[must_use]
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.codes.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn country(code: &str, name: &str) -> Country {
        Country::try_from_parts(code, name).expect("valid country")
    }

    #[rstest]
    #[case("add", Ok(VisitAction::Add))]
    #[case("remove", Ok(VisitAction::Remove))]
    #[case("toggle", Err(UnknownVisitAction("toggle".to_owned())))]
    #[case("ADD", Err(UnknownVisitAction("ADD".to_owned())))]
    fn parses_action(#[case] raw: &str, #[case] expected: Result<VisitAction, UnknownVisitAction>) {
        assert_eq!(raw.parse::<VisitAction>(), expected);
    }

    #[rstest]
    fn keeps_codes_and_names_aligned_without_duplicates() {
        let visited = VisitedCountries::from_countries([
            country("FR", "France"),
            country("DE", "Germany"),
            country("FR", "France"),
        ]);

        let codes: Vec<&str> = visited.codes().iter().map(AsRef::as_ref).collect();
        let names: Vec<&str> = visited.names().iter().map(AsRef::as_ref).collect();
        assert_eq!(codes, ["FR", "DE"]);
        assert_eq!(names, ["France", "Germany"]);
        assert_eq!(visited.total(), 2);
    }
}
