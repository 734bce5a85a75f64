//! Vault trait definition.

use crate::VaultEntry;
use thirdbrain_error::ThirdBrainResult;

/// Trait for pluggable blob storage backends.
///
/// Paths are vault-relative, `/`-separated, without a leading slash:
/// `books/Deep Work by Cal Newport/Deep Work by Cal Newport.txt`.
#[async_trait::async_trait]
pub trait Vault: Send + Sync {
    /// Create a folder; an already-existing folder is success.
    async fn create_folder(&self, path: &str) -> ThirdBrainResult<()>;

    /// Check whether an entry exists at the path.
    async fn exists(&self, path: &str) -> ThirdBrainResult<bool>;

    /// Write a blob, creating parent folders as needed.
    async fn upload(&self, path: &str, data: &[u8]) -> ThirdBrainResult<()>;

    /// Read a blob.
    ///
    /// # Errors
    ///
    /// Returns `VaultErrorKind::NotFound` when no blob exists at the path.
    async fn download(&self, path: &str) -> ThirdBrainResult<Vec<u8>>;

    /// List entries under a folder in stable enumeration order.
    ///
    /// With `recursive`, nested folders and their files are included.
    async fn list_folder(&self, path: &str, recursive: bool) -> ThirdBrainResult<Vec<VaultEntry>>;

    /// Resolve a durable, publicly fetchable URL for a blob.
    ///
    /// Idempotent: when a link already exists for the path it is reused,
    /// never recreated, and repeated calls return equal URLs.
    async fn resolve_link(&self, path: &str) -> ThirdBrainResult<String>;

    /// Existing shareable links for a blob, oldest first.
    async fn list_links(&self, path: &str) -> ThirdBrainResult<Vec<String>>;

    /// Remove a blob, or a folder and everything under it.
    async fn delete(&self, path: &str) -> ThirdBrainResult<()>;
}
