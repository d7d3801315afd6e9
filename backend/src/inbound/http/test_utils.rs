//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use rstest::fixture;

use crate::domain::ports::VisitRepository;
use crate::domain::{CountryCode, CurrentSelection, UserId};
use crate::inbound::http::state::HttpState;
use crate::test_support::{InMemoryStore, in_memory_http_state};

/// Handler state over an in-memory store, with handles to inspect it.
pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub selection: Arc<CurrentSelection>,
    pub state: HttpState,
}

impl TestHarness {
    /// State wrapped for `App::app_data`.
    pub fn data(&self) -> web::Data<HttpState> {
        web::Data::new(self.state.clone())
    }

    /// Record a visit directly in the store.
    pub async fn visit(&self, user_id: UserId, code: &str) {
        let code = CountryCode::new(code).expect("valid code");
        VisitRepository::insert(self.store.as_ref(), user_id, &code)
            .await
            .expect("seed visit");
    }
}

#[fixture]
pub fn harness() -> TestHarness {
    let store = Arc::new(InMemoryStore::new());
    let selection = Arc::new(CurrentSelection::default());
    let state = in_memory_http_state(Arc::clone(&store), Arc::clone(&selection));
    TestHarness {
        store,
        selection,
        state,
    }
}
