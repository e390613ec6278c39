//! Persisted JSON collection
//!
//! A collection backed by a JSON array file on disk, the stand-in for an
//! external database. Every query re-reads the file, so records persist
//! across restarts and data-access faults surface at request time rather
//! than only at startup.

use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::PathBuf;
use tokio::fs;

use super::{Record, Repository, StoreError};
use crate::logger;

/// File-backed record collection
#[derive(Debug, Clone)]
pub struct JsonCollection<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonCollection<T> {
    /// Open a collection, probing the backing file once
    ///
    /// The probe only logs: the listener must start whether or not the
    /// collection is reachable, matching the connect-then-listen bootstrap
    /// with no readiness gating.
    pub async fn open(path: &str) -> Self {
        let collection = Self {
            path: PathBuf::from(path),
            _marker: PhantomData,
        };

        match collection.load().await {
            Ok(records) => logger::log_collection_opened(path, records.len()),
            Err(e) => logger::log_warning(&format!(
                "Product collection '{path}' unreachable at startup: {e}"
            )),
        }

        collection
    }

    /// Read and parse the whole backing file
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = fs::read(&self.path).await.map_err(StoreError::Io)?;
        serde_json::from_slice(&raw).map_err(StoreError::Parse)
    }
}

impl<T: Record + DeserializeOwned> Repository<T> for JsonCollection<T> {
    async fn list_all(&self) -> Result<Vec<T>, StoreError> {
        self.load().await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        let records = self.load().await?;
        Ok(records.into_iter().find(|record| record.id() == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Product;
    use std::path::Path;

    async fn write_collection(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, json).await.unwrap();
        path
    }

    async fn cleanup(path: &Path) {
        let _ = fs::remove_file(path).await;
    }

    const SAMPLE: &str = r#"[
        {"id": "SKU20050", "name": "Desk Lamp", "price": 24.99, "image": "/img/lamp.png"},
        {"id": "SKU20051", "name": "Notebook", "price": 3.50}
    ]"#;

    #[tokio::test]
    async fn test_list_all_preserves_file_order() {
        let path = write_collection("storefront-json-list-test.json", SAMPLE).await;
        let collection: JsonCollection<Product> =
            JsonCollection::open(path.to_str().unwrap()).await;

        let products = collection.list_all().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "SKU20050");
        assert_eq!(products[1].id, "SKU20051");

        cleanup(&path).await;
    }

    #[tokio::test]
    async fn test_find_by_id_returns_exact_record() {
        let path = write_collection("storefront-json-find-test.json", SAMPLE).await;
        let collection: JsonCollection<Product> =
            JsonCollection::open(path.to_str().unwrap()).await;

        let product = collection.find_by_id("SKU20051").await.unwrap().unwrap();
        assert_eq!(product.name, "Notebook");
        assert!(product.image.is_none());

        assert!(collection.find_by_id("SKU99999").await.unwrap().is_none());

        cleanup(&path).await;
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let collection: JsonCollection<Product> =
            JsonCollection::open("definitely/not/a/collection.json").await;
        match collection.list_all().await {
            Err(StoreError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let path =
            write_collection("storefront-json-malformed-test.json", "{not json array").await;
        let collection: JsonCollection<Product> =
            JsonCollection::open(path.to_str().unwrap()).await;
        match collection.list_all().await {
            Err(StoreError::Parse(_)) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
        cleanup(&path).await;
    }

    #[tokio::test]
    async fn test_query_sees_file_changes_without_restart() {
        let path = write_collection("storefront-json-reload-test.json", "[]").await;
        let collection: JsonCollection<Product> =
            JsonCollection::open(path.to_str().unwrap()).await;

        assert!(collection.list_all().await.unwrap().is_empty());

        fs::write(&path, SAMPLE).await.unwrap();
        assert_eq!(collection.list_all().await.unwrap().len(), 2);

        cleanup(&path).await;
    }
}
