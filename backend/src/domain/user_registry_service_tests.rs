//! Tests for the user registry service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockUserRepository;
use crate::test_support::InMemoryStore;

struct Registry {
    store: Arc<InMemoryStore>,
    selection: Arc<CurrentSelection>,
    service: UserRegistryService<InMemoryStore>,
}

#[fixture]
fn registry() -> Registry {
    let store = Arc::new(InMemoryStore::new());
    let selection = Arc::new(CurrentSelection::default());
    let service = UserRegistryService::new(Arc::clone(&store), Arc::clone(&selection));
    Registry {
        store,
        selection,
        service,
    }
}

fn draft(name: &str) -> UserDraft {
    UserDraft::try_from_form(name, None).expect("valid draft")
}

#[rstest]
#[tokio::test]
async fn create_assigns_ids_and_default_colour(registry: Registry) {
    let alice = registry
        .service
        .create_user(draft("Alice"))
        .await
        .expect("create alice");
    let bob = registry
        .service
        .create_user(UserDraft::try_from_form("Bob", Some("#ff0000".to_owned())).expect("draft"))
        .await
        .expect("create bob");

    assert_eq!(alice.id(), UserId::new(1));
    assert_eq!(alice.color().as_ref(), "teal");
    assert_eq!(bob.color().as_ref(), "#ff0000");
    assert_eq!(
        registry.service.list_users().await.expect("list"),
        vec![alice, bob]
    );
}

#[rstest]
#[tokio::test]
async fn duplicate_name_leaves_registry_unchanged(registry: Registry) {
    registry
        .service
        .create_user(draft("Alice"))
        .await
        .expect("first create");

    let error = registry
        .service
        .create_user(draft("Alice"))
        .await
        .expect_err("second create");
    assert_eq!(error.code(), ErrorCode::DuplicateName);
    assert_eq!(error.message(), DUPLICATE_NAME_MESSAGE);
    assert_eq!(registry.service.list_users().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test]
async fn update_renames_and_recolours(registry: Registry) {
    let alice = registry.store.seed_user("Alice");

    let updated = registry
        .service
        .update_user(
            alice.id(),
            UserDraft::try_from_form("Alicia", Some("purple".to_owned())).expect("draft"),
        )
        .await
        .expect("update");

    assert_eq!(updated.name().as_ref(), "Alicia");
    assert_eq!(updated.color().as_ref(), "purple");
    assert_eq!(
        registry.service.find_user(alice.id()).await.expect("find"),
        Some(updated)
    );
}

#[rstest]
#[tokio::test]
async fn update_reports_missing_and_taken_names(registry: Registry) {
    let alice = registry.store.seed_user("Alice");
    registry.store.seed_user("Bob");

    let missing = registry
        .service
        .update_user(UserId::new(42), draft("Carol"))
        .await
        .expect_err("unknown user");
    assert_eq!(missing.code(), ErrorCode::NotFound);

    let taken = registry
        .service
        .update_user(alice.id(), draft("Bob"))
        .await
        .expect_err("name taken");
    assert_eq!(taken.code(), ErrorCode::DuplicateName);
}

#[rstest]
#[tokio::test]
async fn deleting_selected_user_falls_back_to_first_remaining(registry: Registry) {
    let alice = registry.store.seed_user("Alice");
    let bob = registry.store.seed_user("Bob");
    registry.selection.set(alice.id());

    registry
        .service
        .delete_user(alice.id())
        .await
        .expect("delete");

    assert_eq!(registry.selection.get(), bob.id());
}

#[rstest]
#[tokio::test]
async fn deleting_last_user_falls_back_to_default_id(registry: Registry) {
    registry.store.seed_user("Alice");
    let bob = registry.store.seed_user("Bob");
    registry.selection.set(bob.id());
    registry
        .service
        .delete_user(UserId::new(1))
        .await
        .expect("delete alice");
    assert_eq!(registry.selection.get(), bob.id());

    registry.service.delete_user(bob.id()).await.expect("delete bob");

    assert_eq!(registry.selection.get(), UserId::FALLBACK);
    assert!(registry.service.list_users().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn deleting_unknown_user_succeeds(registry: Registry) {
    registry.store.seed_user("Alice");

    registry
        .service
        .delete_user(UserId::new(77))
        .await
        .expect("no-op delete");

    assert_eq!(registry.service.list_users().await.expect("list").len(), 1);
    assert_eq!(registry.selection.get(), UserId::FALLBACK);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::InternalError)]
#[case(UserPersistenceError::query("bad sql"), ErrorCode::InternalError)]
#[tokio::test]
async fn store_failures_are_mapped(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut users = MockUserRepository::new();
    users.expect_list().times(1).return_once(move || Err(failure));
    let service = UserRegistryService::new(Arc::new(users), Arc::new(CurrentSelection::default()));

    let error = service.list_users().await.expect_err("store failure");
    assert_eq!(error.code(), expected);
}
