//! In-memory object store for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::traits::ObjectStore;

#[derive(Debug, Clone)]
struct StoredObject {
    body: Vec<u8>,
    content_type: String,
}

/// In-memory `(bucket, key)` → object map.
///
/// Useful for tests and local development. Not suitable for production as
/// contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects across all buckets.
    pub fn object_count(&self) -> usize {
        self.objects.read().unwrap().len()
    }

    /// Read an object body back, if present.
    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .map(|object| object.body.clone())
    }

    /// Content type an object was written with, if present.
    pub fn content_type(&self, bucket: &str, key: &str) -> Option<String> {
        self.objects
            .read()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .map(|object| object.content_type.clone())
    }

    /// Seed an object directly, bypassing the trait.
    pub fn insert(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) {
        self.objects.write().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        self.objects
            .read()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .map(|object| object.body.clone())
            .ok_or_else(|| StoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        self.insert(bucket, key, body, content_type);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_of_missing_key_is_a_typed_not_found() {
        let store = MemoryStore::new();
        let err = store.get("bucket", "missing.pdf").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn put_overwrites_wholesale() {
        let store = MemoryStore::new();
        store
            .put("bucket", "key", b"first".to_vec(), "text/plain")
            .await
            .unwrap();
        store
            .put("bucket", "key", b"second".to_vec(), "application/json")
            .await
            .unwrap();

        assert_eq!(store.object_count(), 1);
        assert_eq!(store.object("bucket", "key").unwrap(), b"second");
        assert_eq!(
            store.content_type("bucket", "key").as_deref(),
            Some("application/json")
        );
    }
}
