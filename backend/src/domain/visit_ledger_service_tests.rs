//! Tests for the visit ledger service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::{Country, ErrorCode};
use crate::domain::ports::{FixtureCountryRepository, MockVisitRepository};
use crate::test_support::InMemoryStore;

type StoreLedger = VisitLedgerService<InMemoryStore, InMemoryStore>;

struct World {
    store: Arc<InMemoryStore>,
    ledger: StoreLedger,
    alice: UserId,
}

#[fixture]
fn world() -> World {
    let store = Arc::new(InMemoryStore::new());
    let alice = store.seed_user("Alice").id();
    let ledger = VisitLedgerService::new(Arc::clone(&store), Arc::clone(&store));
    World {
        store,
        ledger,
        alice,
    }
}

fn code(raw: &str) -> CountryCode {
    CountryCode::new(raw).expect("valid code")
}

fn codes(visited: &VisitedCountries) -> Vec<&str> {
    visited.codes().iter().map(AsRef::as_ref).collect()
}

#[rstest]
#[tokio::test]
async fn add_by_name_lists_code_and_name(world: World) {
    world
        .ledger
        .apply_action(world.alice, "France", VisitAction::Add)
        .await
        .expect("first add succeeds");

    let visited = world.ledger.list_visited(world.alice).await.expect("list");
    assert_eq!(codes(&visited), ["FR"]);
    assert_eq!(visited.names()[0].as_ref(), "France");

    let error = world
        .ledger
        .apply_action(world.alice, "France", VisitAction::Add)
        .await
        .expect_err("second add fails");
    assert_eq!(error.code(), ErrorCode::DuplicateVisit);
    assert_eq!(error.message(), DUPLICATE_VISIT_MESSAGE);
    assert_eq!(world.store.visit_count(), 1);
}

#[rstest]
#[tokio::test]
async fn add_then_remove_restores_the_visited_set(world: World) {
    world
        .ledger
        .add_visit(world.alice, &code("DE"))
        .await
        .expect("seed visit");
    let before = world.ledger.list_visited(world.alice).await.expect("list");

    world
        .ledger
        .add_visit(world.alice, &code("JP"))
        .await
        .expect("add");
    world
        .ledger
        .remove_visit(world.alice, &code("JP"))
        .await
        .expect("remove");

    let after = world.ledger.list_visited(world.alice).await.expect("list");
    assert_eq!(before, after);
}

#[rstest]
#[tokio::test]
async fn removing_unvisited_country_leaves_set_unchanged(world: World) {
    world
        .ledger
        .add_visit(world.alice, &code("IT"))
        .await
        .expect("seed visit");

    let error = world
        .ledger
        .apply_action(world.alice, "Spain", VisitAction::Remove)
        .await
        .expect_err("never visited");
    assert_eq!(error.code(), ErrorCode::NotVisited);
    assert_eq!(error.message(), NOT_VISITED_MESSAGE);

    let visited = world.ledger.list_visited(world.alice).await.expect("list");
    assert_eq!(codes(&visited), ["IT"]);
}

#[rstest]
#[tokio::test]
async fn unknown_country_name_is_rejected_before_any_write(world: World) {
    let error = world
        .ledger
        .apply_action(world.alice, "Narnia", VisitAction::Add)
        .await
        .expect_err("invalid country");
    assert_eq!(error.code(), ErrorCode::InvalidCountry);
    assert_eq!(world.store.visit_count(), 0);
}

#[rstest]
#[tokio::test]
async fn listing_is_ordered_by_name(world: World) {
    for raw in ["US", "DE", "FR"] {
        world
            .ledger
            .add_visit(world.alice, &code(raw))
            .await
            .expect("add");
    }

    let visited = world.ledger.list_visited(world.alice).await.expect("list");
    assert_eq!(codes(&visited), ["FR", "DE", "US"]);
}

#[tokio::test]
async fn listing_drops_duplicate_rows_from_the_store() {
    let mut visits = MockVisitRepository::new();
    visits.expect_list_visited().times(1).return_once(|_| {
        Ok(vec![
            Country::try_from_parts("FR", "France").expect("country"),
            Country::try_from_parts("FR", "France").expect("country"),
        ])
    });
    let ledger = VisitLedgerService::new(Arc::new(FixtureCountryRepository), Arc::new(visits));

    let visited = ledger.list_visited(UserId::FALLBACK).await.expect("list");
    assert_eq!(codes(&visited), ["FR"]);
}

#[rstest]
#[case(VisitRepositoryError::connection("pool timeout"), ErrorCode::InternalError)]
#[case(VisitRepositoryError::query("deadlock"), ErrorCode::InternalError)]
#[case(VisitRepositoryError::missing_reference("user 9"), ErrorCode::NotFound)]
#[tokio::test]
async fn store_failures_are_mapped(
    #[case] failure: VisitRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut visits = MockVisitRepository::new();
    visits
        .expect_insert()
        .times(1)
        .return_once(move |_, _| Err(failure));
    let ledger = VisitLedgerService::new(Arc::new(FixtureCountryRepository), Arc::new(visits));

    let error = ledger
        .add_visit(UserId::new(9), &code("FR"))
        .await
        .expect_err("store failure");
    assert_eq!(error.code(), expected);
}
