//! JSON-file artifact store backend.

use crate::{ArtifactRecord, ArtifactStore, Fields};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thirdbrain_error::{StoreError, StoreErrorKind, ThirdBrainResult};
use tokio::sync::Mutex;

type Collection = BTreeMap<String, ArtifactRecord>;

/// Artifact store persisted as one JSON document per collection.
///
/// Layout: `{base_path}/{collection}.json`, each file a map from key to
/// record. Writes go through a temp file + rename, and all mutations
/// serialize on one lock, so concurrent merges to a record cannot lose
/// fields.
pub struct JsonFileStore {
    base_path: PathBuf,
    write_guard: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> ThirdBrainResult<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path).map_err(|e| {
            StoreError::new(StoreErrorKind::Io(format!("{}: {}", base_path.display(), e)))
        })?;

        tracing::info!(path = %base_path.display(), "Opened JSON file store");
        Ok(Self {
            base_path,
            write_guard: Mutex::new(()),
        })
    }

    fn collection_path(&self, collection: &str) -> Result<PathBuf, StoreError> {
        if collection.is_empty()
            || collection
                .chars()
                .any(|c| !c.is_ascii_alphanumeric() && c != '_' && c != '-')
        {
            return Err(StoreError::new(StoreErrorKind::Io(format!(
                "invalid collection name: {collection}"
            ))));
        }
        Ok(self.base_path.join(format!("{collection}.json")))
    }

    async fn read_collection(&self, collection: &str) -> Result<Collection, StoreError> {
        let path = self.collection_path(collection)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Collection::new()),
            Err(e) => {
                return Err(StoreError::new(StoreErrorKind::Io(format!(
                    "{}: {}",
                    path.display(),
                    e
                ))));
            }
        };
        serde_json::from_str(&raw).map_err(|e| {
            StoreError::new(StoreErrorKind::Serialization(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })
    }

    async fn write_collection(
        &self,
        collection: &str,
        entries: &Collection,
    ) -> Result<(), StoreError> {
        let path = self.collection_path(collection)?;
        let raw = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::new(StoreErrorKind::Serialization(e.to_string())))?;

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, raw).await.map_err(|e| {
            StoreError::new(StoreErrorKind::Io(format!("{}: {}", temp_path.display(), e)))
        })?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StoreError::new(StoreErrorKind::Io(format!("{}: {}", path.display(), e)))
        })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ArtifactStore for JsonFileStore {
    #[tracing::instrument(skip(self, record), fields(key = %record.key))]
    async fn put(&self, collection: &str, record: ArtifactRecord) -> ThirdBrainResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut entries = self.read_collection(collection).await?;
        entries.insert(record.key.clone(), record);
        self.write_collection(collection, &entries).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, record), fields(key = %record.key))]
    async fn insert_if_absent(
        &self,
        collection: &str,
        record: ArtifactRecord,
    ) -> ThirdBrainResult<bool> {
        let _guard = self.write_guard.lock().await;
        let mut entries = self.read_collection(collection).await?;
        if entries.contains_key(&record.key) {
            return Ok(false);
        }
        entries.insert(record.key.clone(), record);
        self.write_collection(collection, &entries).await?;
        Ok(true)
    }

    async fn get(&self, collection: &str, key: &str) -> ThirdBrainResult<ArtifactRecord> {
        let entries = self.read_collection(collection).await?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::new(StoreErrorKind::NotFound(key.to_string())).into())
    }

    #[tracing::instrument(skip(self, updates), fields(fields = updates.len()))]
    async fn update(&self, collection: &str, key: &str, updates: Fields) -> ThirdBrainResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut entries = self.read_collection(collection).await?;
        let record = entries
            .get_mut(key)
            .ok_or_else(|| StoreError::new(StoreErrorKind::NotFound(key.to_string())))?;
        record.merge(updates);
        self.write_collection(collection, &entries).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, collection: &str, key: &str) -> ThirdBrainResult<()> {
        let _guard = self.write_guard.lock().await;
        let mut entries = self.read_collection(collection).await?;
        if entries.remove(key).is_none() {
            return Err(StoreError::new(StoreErrorKind::NotFound(key.to_string())).into());
        }
        self.write_collection(collection, &entries).await?;
        Ok(())
    }

    async fn fetch_all(&self, collection: &str) -> ThirdBrainResult<Vec<ArtifactRecord>> {
        let entries = self.read_collection(collection).await?;
        Ok(entries.into_values().collect())
    }
}
