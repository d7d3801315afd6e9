//! The process-wide "current user" pointer and the view derived from it.
//!
//! There is exactly one selection per process. Every request reads and writes
//! the same cell, so two clients switching users concurrently overwrite each
//! other (last writer wins). Nothing here isolates callers.

use std::sync::atomic::{AtomicI32, Ordering};

use super::{User, UserColor, UserId, VisitedCountries};

/// Shared mutable pointer to the active user.
///
/// Starts at [`UserId::FALLBACK`]. The cell is not validated against the
/// registry on write; readers re-resolve it.
///
/// # Examples
/// ```
/// use travel_tracker::domain::{CurrentSelection, UserId};
///
/// let selection = CurrentSelection::default();
/// assert_eq!(selection.get(), UserId::FALLBACK);
/// selection.set(UserId::new(4));
/// assert_eq!(selection.get(), UserId::new(4));
/// ```
#[derive(Debug)]
pub struct CurrentSelection {
    user_id: AtomicI32,
}

impl CurrentSelection {
    /// Start pointing at `user_id`.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id: AtomicI32::new(user_id.get()),
        }
    }

    /// The selected user id.
    #[must_use]
    pub fn get(&self) -> UserId {
        UserId::new(self.user_id.load(Ordering::Acquire))
    }

    /// Point at `user_id`.
    pub fn set(&self, user_id: UserId) {
        self.user_id.store(user_id.get(), Ordering::Release);
    }

    /// Point at `replacement` only if the cell still holds `expected`.
    ///
    /// Returns `true` when the swap happened.
    pub fn replace_if(&self, expected: UserId, replacement: UserId) -> bool {
        self.user_id
            .compare_exchange(
                expected.get(),
                replacement.get(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

impl Default for CurrentSelection {
    fn default() -> Self {
        Self::new(UserId::FALLBACK)
    }
}

/// Snapshot of the selected user composed for the map page.
///
/// Derived on demand from the registry and the ledger; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUserInfo {
    /// The selected user, `None` when the registry is empty.
    pub user: Option<User>,
    /// All registered users ordered by id.
    pub users: Vec<User>,
    /// Countries the selected user has visited.
    pub visited: VisitedCountries,
}

impl CurrentUserInfo {
    /// Info for an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            user: None,
            users: Vec::new(),
            visited: VisitedCountries::default(),
        }
    }

    /// Colour to paint with; the default tag when nobody is selected.
    #[must_use]
    pub fn color(&self) -> UserColor {
        self.user
            .as_ref()
            .map_or_else(UserColor::default, |user| user.color().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_if_only_swaps_expected_value() {
        let selection = CurrentSelection::new(UserId::new(3));

        assert!(!selection.replace_if(UserId::new(2), UserId::new(9)));
        assert_eq!(selection.get(), UserId::new(3));

        assert!(selection.replace_if(UserId::new(3), UserId::new(9)));
        assert_eq!(selection.get(), UserId::new(9));
    }

    #[test]
    fn empty_info_paints_default_colour() {
        assert_eq!(CurrentUserInfo::empty().color().as_ref(), "teal");
    }
}
