use super::*;
use records::{ActivityLevel, Gender, Goal, Role};

fn stored(email: &str) -> StoredUser {
    StoredUser {
        record: UserRecord {
            id: Uuid::new_v4(),
            role: Role::Client,
            first_name: "Ana".to_owned(),
            last_name: "Lee".to_owned(),
            email: email.to_owned(),
            age: 29,
            height_cm: 172,
            weight_kg: 63.5,
            goals: vec![Goal::LoseWeight],
            gender: Gender::Female,
            activity_level: ActivityLevel::ModeratelyActive,
            favorite_sport: "running".to_owned(),
        },
        password_hash: "sha256$abc".to_owned(),
    }
}

fn temp_data_dir() -> String {
    std::env::temp_dir()
        .join(format!("coachfit-store-{}", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned()
}

// =============================================================================
// MemoryStore
// =============================================================================

#[tokio::test]
async fn insert_then_find_by_email() {
    let store = MemoryStore::new();
    let user = stored("a@b.com");
    store.insert(user.clone()).await.unwrap();
    assert_eq!(store.find_by_email("a@b.com").await.unwrap(), Some(user));
}

#[tokio::test]
async fn insert_duplicate_email_is_rejected() {
    let store = MemoryStore::new();
    store.insert(stored("a@b.com")).await.unwrap();
    let err = store.insert(stored("a@b.com")).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmail));
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_replaces_matched_id() {
    let store = MemoryStore::new();
    let mut user = stored("a@b.com");
    store.insert(user.clone()).await.unwrap();
    user.record.first_name = "Anna".to_owned();
    store.update(user.clone()).await.unwrap();
    assert_eq!(
        store.find_by_id(user.record.id).await.unwrap().unwrap().record.first_name,
        "Anna"
    );
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let err = store.update(stored("a@b.com")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn replace_all_swaps_the_whole_list() {
    let store = MemoryStore::new();
    store.insert(stored("a@b.com")).await.unwrap();
    store
        .replace_all(vec![stored("x@y.com"), stored("z@w.com")])
        .await
        .unwrap();
    let list = store.list().await.unwrap();
    assert_eq!(list.len(), 2);
    assert!(store.find_by_email("a@b.com").await.unwrap().is_none());
}

// =============================================================================
// FileStore
// =============================================================================

#[tokio::test]
async fn file_store_starts_empty_in_fresh_dir() {
    let dir = temp_data_dir();
    let store = FileStore::open(&dir).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
    tokio::fs::remove_dir_all(&dir).await.ok();
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let dir = temp_data_dir();
    let user = stored("a@b.com");
    {
        let store = FileStore::open(&dir).await.unwrap();
        store.insert(user.clone()).await.unwrap();
    }
    let reopened = FileStore::open(&dir).await.unwrap();
    assert_eq!(reopened.list().await.unwrap(), vec![user]);
    tokio::fs::remove_dir_all(&dir).await.ok();
}

#[tokio::test]
async fn file_store_rejects_duplicate_email() {
    let dir = temp_data_dir();
    let store = FileStore::open(&dir).await.unwrap();
    store.insert(stored("a@b.com")).await.unwrap();
    let err = store.insert(stored("a@b.com")).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateEmail));
    tokio::fs::remove_dir_all(&dir).await.ok();
}

#[tokio::test]
async fn file_store_persists_updates() {
    let dir = temp_data_dir();
    let mut user = stored("a@b.com");
    {
        let store = FileStore::open(&dir).await.unwrap();
        store.insert(user.clone()).await.unwrap();
        user.record.favorite_sport = "boxing".to_owned();
        store.update(user.clone()).await.unwrap();
    }
    let reopened = FileStore::open(&dir).await.unwrap();
    assert_eq!(
        reopened.find_by_id(user.record.id).await.unwrap().unwrap().record.favorite_sport,
        "boxing"
    );
    tokio::fs::remove_dir_all(&dir).await.ok();
}
