//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for `cfg(test)` and behind the `test-support` feature.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CountryRepository, CountryRepositoryError, FixtureCountryRepository, UserPersistenceError,
    UserRepository, VisitChange, VisitRepository, VisitRepositoryError,
};
use crate::domain::{
    Country, CountryCatalogueService, CountryCode, CountryName, CurrentSelection, PrefixQuery,
    SessionSelectorService, User, UserDraft, UserId, UserRegistryService, VisitLedgerService,
};
use crate::inbound::http::state::HttpState;

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    last_id: i32,
    visits: BTreeSet<(UserId, CountryCode)>,
}

/// In-memory stand-in for the PostgreSQL schema.
///
/// Behaves like the Diesel adapters: the fixture country table, unique user
/// names, serial ids, conditional visit writes and cascading user deletes.
///
/// # Examples
/// ```
/// use travel_tracker::test_support::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let alice = store.seed_user("Alice");
/// assert_eq!(alice.id().get(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// An empty registry over the fixture countries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user with the default colour, bypassing the ports.
    ///
    /// # Panics
    /// Panics when the name is invalid or already taken.
    #[must_use]
    pub fn seed_user(&self, name: &str) -> User {
        let draft = UserDraft::try_from_form(name, None).expect("valid seed user name");
        let mut state = self.state.lock().expect("store lock");
        insert_user(&mut state, &draft).expect("unique seed user name")
    }

    /// Number of stored visit rows across all users.
    ///
    /// # Panics
    /// Panics when the lock is poisoned.
    #[must_use]
    pub fn visit_count(&self) -> usize {
        self.state.lock().expect("store lock").visits.len()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        self.state
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }

    fn country(code: &CountryCode) -> Option<Country> {
        FixtureCountryRepository::COUNTRIES
            .iter()
            .find(|(candidate, _)| *candidate == code.as_ref())
            .and_then(|(code, name)| Country::try_from_parts(*code, *name).ok())
    }
}

fn insert_user(state: &mut StoreState, draft: &UserDraft) -> Result<User, UserPersistenceError> {
    if state.users.iter().any(|user| user.name() == &draft.name) {
        return Err(UserPersistenceError::duplicate_name(draft.name.as_ref()));
    }
    state.last_id += 1;
    let user = User::new(
        UserId::new(state.last_id),
        draft.name.clone(),
        draft.color.clone(),
    );
    state.users.push(user.clone());
    Ok(user)
}

#[async_trait]
impl CountryRepository for InMemoryStore {
    async fn search_by_prefix(
        &self,
        query: &PrefixQuery,
        limit: usize,
    ) -> Result<Vec<CountryName>, CountryRepositoryError> {
        FixtureCountryRepository.search_by_prefix(query, limit).await
    }

    async fn find_code_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CountryCode>, CountryRepositoryError> {
        FixtureCountryRepository.find_code_by_name(name).await
    }
}

#[async_trait]
impl VisitRepository for InMemoryStore {
    async fn list_visited(&self, user_id: UserId) -> Result<Vec<Country>, VisitRepositoryError> {
        let state = self.lock().map_err(VisitRepositoryError::query)?;
        let mut countries: Vec<Country> = state
            .visits
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .filter_map(|(_, code)| Self::country(code))
            .collect();
        countries.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(countries)
    }

    async fn insert(
        &self,
        user_id: UserId,
        code: &CountryCode,
    ) -> Result<VisitChange, VisitRepositoryError> {
        let mut state = self.lock().map_err(VisitRepositoryError::query)?;
        if !state.users.iter().any(|user| user.id() == user_id) {
            return Err(VisitRepositoryError::missing_reference(format!(
                "user {user_id} does not exist"
            )));
        }
        if Self::country(code).is_none() {
            return Err(VisitRepositoryError::missing_reference(format!(
                "country {code} does not exist"
            )));
        }
        Ok(if state.visits.insert((user_id, code.clone())) {
            VisitChange::Applied
        } else {
            VisitChange::Unchanged
        })
    }

    async fn delete(
        &self,
        user_id: UserId,
        code: &CountryCode,
    ) -> Result<VisitChange, VisitRepositoryError> {
        let mut state = self.lock().map_err(VisitRepositoryError::query)?;
        Ok(if state.visits.remove(&(user_id, code.clone())) {
            VisitChange::Applied
        } else {
            VisitChange::Unchanged
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::query)?;
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::query)?;
        insert_user(&mut state, draft)
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::query)?;
        if state
            .users
            .iter()
            .any(|user| user.id() != id && user.name() == &draft.name)
        {
            return Err(UserPersistenceError::duplicate_name(draft.name.as_ref()));
        }
        let Some(slot) = state.users.iter_mut().find(|user| user.id() == id) else {
            return Ok(None);
        };
        *slot = User::new(id, draft.name.clone(), draft.color.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::query)?;
        let before = state.users.len();
        state.users.retain(|user| user.id() != id);
        if state.users.len() == before {
            return Ok(false);
        }
        state.visits.retain(|(owner, _)| *owner != id);
        Ok(true)
    }
}

/// HTTP state wired to the real services over one [`InMemoryStore`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use travel_tracker::domain::CurrentSelection;
/// use travel_tracker::test_support::{InMemoryStore, in_memory_http_state};
///
/// let state = in_memory_http_state(
///     Arc::new(InMemoryStore::new()),
///     Arc::new(CurrentSelection::default()),
/// );
/// assert_eq!(state.session.selected().get(), 1);
/// ```
pub fn in_memory_http_state(
    store: Arc<InMemoryStore>,
    selection: Arc<CurrentSelection>,
) -> HttpState {
    HttpState::new(
        Arc::new(CountryCatalogueService::new(Arc::clone(&store))),
        Arc::new(VisitLedgerService::new(Arc::clone(&store), Arc::clone(&store))),
        Arc::new(UserRegistryService::new(
            Arc::clone(&store),
            Arc::clone(&selection),
        )),
        Arc::new(SessionSelectorService::new(
            Arc::clone(&store),
            store,
            selection,
        )),
    )
}
