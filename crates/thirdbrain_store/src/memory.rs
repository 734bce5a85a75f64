//! In-memory artifact store backend.

use crate::{ArtifactRecord, ArtifactStore, Fields};
use std::collections::{BTreeMap, HashMap};
use thirdbrain_error::{StoreError, StoreErrorKind, ThirdBrainResult};
use tokio::sync::RwLock;

type Collection = BTreeMap<String, ArtifactRecord>;

/// Artifact store held entirely in process memory.
///
/// The backing map sits behind one `RwLock`; every mutation takes the write
/// lock, which serializes concurrent merges to a record.
///
/// # Examples
///
/// ```no_run
/// use thirdbrain_store::{ArtifactRecord, ArtifactStore, MemoryStore};
///
/// # async fn example() -> thirdbrain_error::ThirdBrainResult<()> {
/// let store = MemoryStore::new();
/// store
///     .put("books", ArtifactRecord::new("Deep Work by Cal Newport"))
///     .await?;
/// let record = store.get("books", "Deep Work by Cal Newport").await?;
/// assert_eq!(record.key, "Deep Work by Cal Newport");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ArtifactStore for MemoryStore {
    #[tracing::instrument(skip(self, record), fields(key = %record.key))]
    async fn put(&self, collection: &str, record: ArtifactRecord) -> ThirdBrainResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(record.key.clone(), record);
        Ok(())
    }

    #[tracing::instrument(skip(self, record), fields(key = %record.key))]
    async fn insert_if_absent(
        &self,
        collection: &str,
        record: ArtifactRecord,
    ) -> ThirdBrainResult<bool> {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(collection.to_string()).or_default();
        if entries.contains_key(&record.key) {
            return Ok(false);
        }
        entries.insert(record.key.clone(), record);
        Ok(true)
    }

    async fn get(&self, collection: &str, key: &str) -> ThirdBrainResult<ArtifactRecord> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .and_then(|entries| entries.get(key))
            .cloned()
            .ok_or_else(|| StoreError::new(StoreErrorKind::NotFound(key.to_string())).into())
    }

    #[tracing::instrument(skip(self, updates), fields(fields = updates.len()))]
    async fn update(&self, collection: &str, key: &str, updates: Fields) -> ThirdBrainResult<()> {
        let mut collections = self.collections.write().await;
        let record = collections
            .get_mut(collection)
            .and_then(|entries| entries.get_mut(key))
            .ok_or_else(|| StoreError::new(StoreErrorKind::NotFound(key.to_string())))?;
        record.merge(updates);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, collection: &str, key: &str) -> ThirdBrainResult<()> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(collection)
            .and_then(|entries| entries.remove(key));
        match removed {
            Some(_) => Ok(()),
            None => Err(StoreError::new(StoreErrorKind::NotFound(key.to_string())).into()),
        }
    }

    async fn fetch_all(&self, collection: &str) -> ThirdBrainResult<Vec<ArtifactRecord>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|entries| entries.values().cloned().collect())
            .unwrap_or_default())
    }
}
