//! In-memory store
//!
//! Ordered sequence of records seeded once at startup. All routes are
//! read-only, so the sequence is never mutated after construction and
//! needs no locking.

use serde::de::DeserializeOwned;
use tokio::fs;

use super::{Record, Repository, StoreError};
use crate::logger;

/// In-memory record sequence with linear-scan lookup
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T> MemoryStore<T> {
    /// Store with no records
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Store pre-populated with the given records, in order
    pub fn with_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: DeserializeOwned> MemoryStore<T> {
    /// Seed a store from a JSON array file
    ///
    /// Seed data is optional: a missing or malformed file yields an empty
    /// store and a warning, never a startup failure.
    pub async fn from_seed_file(path: &str) -> Self {
        let raw = match fs::read(path).await {
            Ok(raw) => raw,
            Err(e) => {
                logger::log_warning(&format!("Seed file '{path}' not loaded: {e}"));
                return Self::empty();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(items) => Self::with_items(items),
            Err(e) => {
                logger::log_warning(&format!("Seed file '{path}' is not a valid record array: {e}"));
                Self::empty()
            }
        }
    }
}

impl<T: Record + Clone> Repository<T> for MemoryStore<T> {
    async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.items.iter().find(|item| item.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Post;

    fn sample_posts() -> Vec<Post> {
        vec![
            Post {
                id: "p1".to_string(),
                title: "First".to_string(),
                body: "first body".to_string(),
                author: None,
            },
            Post {
                id: "p2".to_string(),
                title: "Second".to_string(),
                body: "second body".to_string(),
                author: Some("ann".to_string()),
            },
        ]
    }

    #[tokio::test]
    async fn test_list_preserves_order() {
        let store = MemoryStore::with_items(sample_posts());
        let listed = store.list_all().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "p1");
        assert_eq!(listed[1].id, "p2");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryStore::with_items(sample_posts());
        let found = store.find_by_id("p2").await.unwrap();
        assert_eq!(found.unwrap().title, "Second");
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store = MemoryStore::with_items(sample_posts());
        assert!(store.find_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_store_lists_empty_array() {
        let store: MemoryStore<Post> = MemoryStore::empty();
        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_seed_file_yields_empty_store() {
        let store: MemoryStore<Post> =
            MemoryStore::from_seed_file("definitely/not/a/real/seed.json").await;
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_seed_file_round_trip() {
        let path = std::env::temp_dir().join("storefront-memory-seed-test.json");
        let json = serde_json::to_vec(&sample_posts()).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let store: MemoryStore<Post> =
            MemoryStore::from_seed_file(path.to_str().unwrap()).await;
        assert_eq!(store.len(), 2);

        let _ = tokio::fs::remove_file(&path).await;
    }
}
