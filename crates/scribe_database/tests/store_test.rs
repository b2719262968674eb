//! Tests for the pooled async store.

mod common;

use common::{TempDatabase, generation};
use scribe_database::DatabaseGenerationStore;
use scribe_interface::GenerationStore;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_store_crud() {
    let db = TempDatabase::new();
    let store = DatabaseGenerationStore::connect(&db.url(), 4).unwrap();

    let saved = store
        .save(generation("Coffee", "Coffee wakes you up."))
        .await
        .unwrap();
    assert_eq!(saved.word_count, 4);
    assert_eq!(saved.character_count, 20);

    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(store.get(&saved.id).await.unwrap(), Some(saved.clone()));
    assert_eq!(store.list(50, 0).await.unwrap(), vec![saved.clone()]);
    assert_eq!(store.search("wakes", 50).await.unwrap(), vec![saved.clone()]);

    assert!(store.delete(&saved.id).await.unwrap());
    assert!(!store.delete(&saved.id).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_reopening_keeps_rows() {
    let db = TempDatabase::new();
    let id = {
        let store = DatabaseGenerationStore::connect(&db.url(), 2).unwrap();
        store.save(generation("Persisted", "Still here.")).await.unwrap().id
    };

    let store = DatabaseGenerationStore::connect(&db.url(), 2).unwrap();
    assert!(store.get(&id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_concurrent_saves_get_distinct_timestamps() {
    let db = TempDatabase::new();
    let store = Arc::new(DatabaseGenerationStore::connect(&db.url(), 4).unwrap());

    let mut handles = Vec::new();
    for i in 0..12 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .save(generation(&format!("topic {}", i), "concurrent body"))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let records = store.list(100, 0).await.unwrap();
    assert_eq!(records.len(), 12);
    assert_eq!(store.count().await.unwrap(), 12);

    let stamps: HashSet<_> = records.iter().map(|r| r.created_at).collect();
    assert_eq!(stamps.len(), 12);
    assert!(records.windows(2).all(|w| w[0].created_at > w[1].created_at));
}
