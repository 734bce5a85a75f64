//! Artifact store trait definition.

use crate::{ArtifactRecord, Fields};
use thirdbrain_error::ThirdBrainResult;

/// Trait for key-value artifact persistence backends.
///
/// Keys are unique per collection. Backends serialize mutations per
/// collection, so two concurrent `update` calls touching different fields of
/// one record both land.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Insert or fully replace a record by key.
    async fn put(&self, collection: &str, record: ArtifactRecord) -> ThirdBrainResult<()>;

    /// Insert the record only when its key is free.
    ///
    /// Returns `true` when the record was inserted, `false` when the key was
    /// already taken. This is the uniqueness primitive subject selection
    /// relies on.
    async fn insert_if_absent(
        &self,
        collection: &str,
        record: ArtifactRecord,
    ) -> ThirdBrainResult<bool>;

    /// Fetch a full record.
    ///
    /// # Errors
    ///
    /// Returns `StoreErrorKind::NotFound` when the key is absent.
    async fn get(&self, collection: &str, key: &str) -> ThirdBrainResult<ArtifactRecord>;

    /// Merge fields into an existing record.
    ///
    /// Fields named in `updates` are replaced; all other fields are left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreErrorKind::NotFound` when the key is absent.
    async fn update(&self, collection: &str, key: &str, updates: Fields) -> ThirdBrainResult<()>;

    /// Remove a record.
    ///
    /// # Errors
    ///
    /// Returns `StoreErrorKind::NotFound` when the key is absent.
    async fn delete(&self, collection: &str, key: &str) -> ThirdBrainResult<()>;

    /// Every record in a collection, unordered and unbounded.
    ///
    /// Callers sort, filter, and paginate themselves.
    async fn fetch_all(&self, collection: &str) -> ThirdBrainResult<Vec<ArtifactRecord>>;
}
