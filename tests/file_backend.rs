mod common;

use deck_store::domain::{DeckPatch, NewFlashcard};
use deck_store::{
    create_file_storage, create_noop_metrics, create_store_with_config, AppConfig, FileStorage,
    LocalStore, MetricsConfig, MetricsKind, StorageBackend, StorageConfig, DEMO_PASSWORD,
    DEMO_USERNAME,
};
use std::path::PathBuf;
use uuid::Uuid;

fn scratch_dir() -> PathBuf {
    // ---
    std::env::temp_dir().join(format!("deck-store-it-{}", Uuid::new_v4().simple()))
}

fn open_store(dir: &PathBuf) -> LocalStore {
    // ---
    common::init_tracing();

    let storage = create_file_storage(dir.clone()).expect("file storage");
    let metrics = create_noop_metrics().expect("noop metrics");
    LocalStore::new(storage, metrics)
}

#[tokio::test]
async fn test_state_survives_reopen() {
    // ---
    let dir = scratch_dir();

    let card_id = {
        let store = open_store(&dir);
        store.register("bob", "pw").await.unwrap();
        store.login("bob", "pw").await.unwrap();
        store
            .update_deck(
                "8",
                DeckPatch {
                    level: Some("Avancé".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        store
            .add_flashcard("8", NewFlashcard::new("Livre", "Книга (Kniga)"))
            .await
            .unwrap()
            .id
    };

    let reopened = open_store(&dir);
    assert!(reopened.is_authenticated().await.unwrap());
    assert!(reopened.login("bob", "pw").await.is_ok());

    let deck = reopened.get_deck_by_id("8").await.unwrap().unwrap();
    assert_eq!(deck.level, "Avancé");
    assert_eq!(deck.flashcard(&card_id).unwrap().answer, "Книга (Kniga)");
    assert_eq!(deck.flashcards.len(), 6);

    reopened.logout().await.unwrap();
    assert!(!open_store(&dir).is_authenticated().await.unwrap());

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_documents_use_expected_keys() {
    // ---
    let dir = scratch_dir();
    let store = open_store(&dir);

    store.login(DEMO_USERNAME, DEMO_PASSWORD).await.unwrap();

    assert!(dir.join("decks.json").is_file());
    assert!(dir.join("app_users.json").is_file());
    assert!(dir.join("authToken.json").is_file());

    let users: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("app_users.json")).unwrap())
            .unwrap();
    assert_eq!(
        users,
        serde_json::json!([{ "username": DEMO_USERNAME, "password": DEMO_PASSWORD }])
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_file_storage_creates_nested_root() {
    // ---
    let dir = scratch_dir().join("nested").join("data");
    let storage = FileStorage::open(&dir).unwrap();

    assert_eq!(storage.root(), dir.as_path());
    assert!(storage.root().is_dir());

    std::fs::remove_dir_all(dir.parent().and_then(|p| p.parent()).unwrap()).ok();
}

#[tokio::test]
async fn test_store_built_from_config() {
    // ---
    let dir = scratch_dir();
    let config = AppConfig {
        storage: StorageConfig {
            backend: StorageBackend::File {
                data_dir: dir.clone(),
            },
        },
        metrics: MetricsConfig {
            kind: MetricsKind::Noop,
        },
    };

    let store = create_store_with_config(&config).expect("store from config");
    assert_eq!(store.get_decks().await.unwrap().len(), 10);
    assert!(store.metrics_snapshot().is_empty());
    assert!(dir.join("decks.json").is_file());

    std::fs::remove_dir_all(&dir).ok();
}
