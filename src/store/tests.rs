// src/store/tests.rs
// Favorites store behavior and persistence tests

use super::*;
use tempfile::TempDir;

fn store_at(dir: &TempDir) -> FavoritesStore {
    FavoritesStore::open(
        &dir.path().join("favorites.json"),
        DuplicatePolicy::Reject,
        false,
    )
    .unwrap()
}

// ═══════════════════════════════════════
// Add / list
// ═══════════════════════════════════════

#[tokio::test]
async fn test_add_then_list() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    let fav = store
        .add(ItemType::Person, 1, "main hero".to_string())
        .await
        .unwrap();
    assert_eq!(fav.item_type, ItemType::Person);
    assert_eq!(fav.item_id, 1);
    assert_eq!(fav.notes, "main hero");

    let all = store.list(None).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], fav);
}

#[tokio::test]
async fn test_add_rejects_zero_id() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    let err = store
        .add(ItemType::Person, 0, String::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HolocronError::Validation(_)));
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn test_add_duplicate_rejected_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store
        .add(ItemType::Person, 1, "first".to_string())
        .await
        .unwrap();
    let err = store
        .add(ItemType::Person, 1, "second".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, HolocronError::DuplicateEntry(_)));

    let all = store.list(None).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].notes, "first");
}

#[tokio::test]
async fn test_same_id_different_type_is_not_a_duplicate() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store.add(ItemType::Person, 1, String::new()).await.unwrap();
    store.add(ItemType::Planet, 1, String::new()).await.unwrap();
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_list_filtered_by_type() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store.add(ItemType::Person, 1, "Luke".to_string()).await.unwrap();
    store.add(ItemType::Person, 5, "Leia".to_string()).await.unwrap();
    store
        .add(ItemType::Planet, 1, "Tatooine".to_string())
        .await
        .unwrap();

    let people = store.list(Some(ItemType::Person)).await;
    assert_eq!(people.len(), 2);
    assert!(people.iter().all(|f| f.item_type == ItemType::Person));

    let films = store.list(Some(ItemType::Film)).await;
    assert!(films.is_empty());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    for id in [3, 1, 2] {
        store.add(ItemType::Starship, id, String::new()).await.unwrap();
    }

    let ids: Vec<u32> = store.list(None).await.iter().map(|f| f.item_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

// ═══════════════════════════════════════
// Duplicate policy: update
// ═══════════════════════════════════════

#[tokio::test]
async fn test_update_policy_replaces_notes_keeps_added_at() {
    let dir = TempDir::new().unwrap();
    let store = FavoritesStore::open(
        &dir.path().join("favorites.json"),
        DuplicatePolicy::Update,
        false,
    )
    .unwrap();

    let first = store
        .add(ItemType::Film, 4, "a new hope".to_string())
        .await
        .unwrap();
    let second = store
        .add(ItemType::Film, 4, "the original".to_string())
        .await
        .unwrap();

    assert_eq!(second.notes, "the original");
    assert_eq!(second.added_at, first.added_at);
    assert_eq!(store.len().await, 1);
}

// ═══════════════════════════════════════
// Remove
// ═══════════════════════════════════════

#[tokio::test]
async fn test_remove_then_remove_again() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store.add(ItemType::Person, 1, String::new()).await.unwrap();

    store.remove(ItemType::Person, 1).await.unwrap();
    assert_eq!(store.len().await, 0);

    let err = store.remove(ItemType::Person, 1).await.unwrap_err();
    assert!(matches!(err, HolocronError::NotFound(_)));
}

// ═══════════════════════════════════════
// Update notes
// ═══════════════════════════════════════

#[tokio::test]
async fn test_update_notes_changes_only_notes() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    let before = store
        .add(ItemType::Person, 1, "main hero".to_string())
        .await
        .unwrap();
    let after = store
        .update_notes(ItemType::Person, 1, "jedi hero".to_string())
        .await
        .unwrap();

    assert_eq!(after.notes, "jedi hero");
    assert_eq!(after.item_type, before.item_type);
    assert_eq!(after.item_id, before.item_id);
    assert_eq!(after.added_at, before.added_at);
}

#[tokio::test]
async fn test_update_notes_missing_entry() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    let err = store
        .update_notes(ItemType::Planet, 2, "x".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, HolocronError::NotFound(_)));
}

// ═══════════════════════════════════════
// Search
// ═══════════════════════════════════════

#[tokio::test]
async fn test_search_empty_query_matches_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store
        .add(ItemType::Person, 1, "anything".to_string())
        .await
        .unwrap();
    assert!(store.search("").await.is_empty());
    assert!(store.search("   ").await.is_empty());
}

#[tokio::test]
async fn test_search_case_insensitive_substring() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store
        .add(ItemType::Person, 1, "a true Jedi master".to_string())
        .await
        .unwrap();
    store
        .add(ItemType::Person, 4, "sith lord".to_string())
        .await
        .unwrap();

    let hits = store.search("jedi").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item_id, 1);
}

#[tokio::test]
async fn test_search_query_whitespace_is_significant() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store
        .add(ItemType::Person, 1, "jedi".to_string())
        .await
        .unwrap();
    store
        .add(ItemType::Person, 4, "jedi hunter".to_string())
        .await
        .unwrap();

    assert!(store.search("jedi ").await.iter().all(|f| f.item_id == 4));
    assert_eq!(store.search("jedi ").await.len(), 1);
    assert_eq!(store.search("jedi").await.len(), 2);
}

#[tokio::test]
async fn test_search_returns_list_order() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store
        .add(ItemType::Person, 2, "rebel pilot".to_string())
        .await
        .unwrap();
    store
        .add(ItemType::Person, 1, "rebel hero".to_string())
        .await
        .unwrap();

    let ids: Vec<u32> = store.search("rebel").await.iter().map(|f| f.item_id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_search_label_matching_opt_in() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    let plain = FavoritesStore::open(&path, DuplicatePolicy::Reject, false).unwrap();
    plain.add(ItemType::Person, 1, String::new()).await.unwrap();
    assert!(plain.search("person 1").await.is_empty());
    drop(plain);

    let labeled = FavoritesStore::open(&path, DuplicatePolicy::Reject, true).unwrap();
    let hits = labeled.search("person 1").await;
    assert_eq!(hits.len(), 1);
}

// ═══════════════════════════════════════
// Persistence
// ═══════════════════════════════════════

#[tokio::test]
async fn test_persistence_roundtrip_preserves_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    {
        let store = FavoritesStore::open(&path, DuplicatePolicy::Reject, false).unwrap();
        store.add(ItemType::Person, 1, "Luke".to_string()).await.unwrap();
        store
            .add(ItemType::Planet, 1, "Tatooine".to_string())
            .await
            .unwrap();
        store
            .add(ItemType::Starship, 9, "Death Star".to_string())
            .await
            .unwrap();
    }

    let reopened = FavoritesStore::open(&path, DuplicatePolicy::Reject, false).unwrap();
    let all = reopened.list(None).await;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].notes, "Luke");
    assert_eq!(all[1].notes, "Tatooine");
    assert_eq!(all[2].notes, "Death Star");
}

#[tokio::test]
async fn test_no_temp_file_left_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");

    let store = FavoritesStore::open(&path, DuplicatePolicy::Reject, false).unwrap();
    store.add(ItemType::Film, 1, String::new()).await.unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_failed_flush_rolls_back_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    let store = FavoritesStore::open(&path, DuplicatePolicy::Reject, false).unwrap();

    store
        .add(ItemType::Person, 1, "kept".to_string())
        .await
        .unwrap();

    // Make the atomic replace fail: a non-empty directory at the target
    // path cannot be renamed over.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("blocker"), "x").unwrap();

    let err = store
        .add(ItemType::Person, 2, "lost".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, HolocronError::Persistence(_)));

    // Memory stays at the last durable state
    assert_eq!(store.len().await, 1);
    let all = store.list(None).await;
    assert_eq!(all[0].item_id, 1);
    assert_eq!(all[0].notes, "kept");
}

#[tokio::test]
async fn test_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn test_corrupt_file_quarantined_and_empty_start() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    std::fs::write(&path, "{not valid json").unwrap();

    let store = FavoritesStore::open(&path, DuplicatePolicy::Reject, false).unwrap();
    assert_eq!(store.len().await, 0);

    let quarantine = path.with_extension("json.corrupt");
    assert!(quarantine.exists());
    assert_eq!(
        std::fs::read_to_string(quarantine).unwrap(),
        "{not valid json"
    );
}

#[tokio::test]
async fn test_blank_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    std::fs::write(&path, "\n").unwrap();

    let store = FavoritesStore::open(&path, DuplicatePolicy::Reject, false).unwrap();
    assert_eq!(store.len().await, 0);
}

// ═══════════════════════════════════════
// End-to-end scenario from the workshop
// ═══════════════════════════════════════

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);

    store
        .add(ItemType::Person, 1, "main hero".to_string())
        .await
        .unwrap();
    let all = store.list(None).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].notes, "main hero");

    assert!(matches!(
        store.add(ItemType::Person, 1, "x".to_string()).await,
        Err(HolocronError::DuplicateEntry(_))
    ));

    store
        .update_notes(ItemType::Person, 1, "jedi hero".to_string())
        .await
        .unwrap();
    assert_eq!(store.list(None).await[0].notes, "jedi hero");

    store.remove(ItemType::Person, 1).await.unwrap();
    assert!(store.list(None).await.is_empty());
}
