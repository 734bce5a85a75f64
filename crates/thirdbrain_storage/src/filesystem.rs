//! Filesystem-based vault implementation.
//!
//! Mirrors the hierarchy a hosted blob store would hold (one folder per
//! subject under a collection root) on a local directory. Shareable links
//! are deterministic tokens derived from the blob path, recorded in a hidden
//! index file so resolution is stable across processes.

use crate::{EntryKind, Vault, VaultEntry};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thirdbrain_error::{ThirdBrainResult, VaultError, VaultErrorKind};
use tokio::sync::Mutex;

/// Name of the hidden link index file kept at the vault root.
const LINK_INDEX: &str = ".links.json";

/// Filesystem vault backend.
///
/// # Example Structure
///
/// ```text
/// /var/thirdbrain/vault/
/// ├── .links.json
/// ├── books/
/// │   └── Deep Work by Cal Newport/
/// │       ├── Deep Work by Cal Newport.txt
/// │       ├── Deep Work by Cal Newport_dalle_0.png
/// │       └── Deep Work by Cal Newport_stability_0.png
/// └── images/
///     └── Lighthouse/
///         └── ...
/// ```
pub struct FileSystemVault {
    base_path: PathBuf,
    links: Mutex<HashMap<String, String>>,
}

impl FileSystemVault {
    /// Create a new filesystem vault rooted at `base_path`.
    ///
    /// Creates the root directory if it doesn't exist and loads any
    /// persisted link index.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or the link index
    /// cannot be parsed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> ThirdBrainResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            VaultError::new(VaultErrorKind::FolderCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        let index_path = base_path.join(LINK_INDEX);
        let links = if index_path.exists() {
            let raw = std::fs::read_to_string(&index_path).map_err(|e| {
                VaultError::new(VaultErrorKind::FileRead(format!(
                    "{}: {}",
                    index_path.display(),
                    e
                )))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                VaultError::new(VaultErrorKind::FileRead(format!(
                    "{}: {}",
                    index_path.display(),
                    e
                )))
            })?
        } else {
            HashMap::new()
        };

        tracing::info!(path = %base_path.display(), "Opened filesystem vault");
        Ok(Self {
            base_path,
            links: Mutex::new(links),
        })
    }

    /// Validate a vault path and resolve it against the base directory.
    fn resolve(&self, path: &str) -> Result<PathBuf, VaultError> {
        if path.is_empty() {
            return Ok(self.base_path.clone());
        }
        for segment in path.split('/') {
            if segment.is_empty() || segment == ".." || segment.starts_with('.') {
                return Err(VaultError::new(VaultErrorKind::InvalidPath(
                    path.to_string(),
                )));
            }
        }
        Ok(self.base_path.join(path))
    }

    /// Deterministic link token for a blob path.
    fn link_token(path: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(path.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        digest[..16].to_string()
    }

    /// Write the link index atomically.
    async fn persist_links(&self, links: &HashMap<String, String>) -> Result<(), VaultError> {
        let index_path = self.base_path.join(LINK_INDEX);
        let temp_path = index_path.with_extension("tmp");
        let raw = serde_json::to_vec_pretty(links).map_err(|e| {
            VaultError::new(VaultErrorKind::LinkResolution(format!(
                "serialize link index: {}",
                e
            )))
        })?;

        tokio::fs::write(&temp_path, raw).await.map_err(|e| {
            VaultError::new(VaultErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &index_path).await.map_err(|e| {
            VaultError::new(VaultErrorKind::FileWrite(format!(
                "{}: {}",
                index_path.display(),
                e
            )))
        })?;
        Ok(())
    }

    /// Read one directory level, returning `(name, is_dir)` pairs in sorted
    /// order. Hidden entries (the link index) are skipped.
    async fn read_level(dir: &Path, prefix: &str) -> Result<Vec<(String, bool)>, VaultError> {
        let mut names = Vec::new();
        let mut reader = tokio::fs::read_dir(dir).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VaultError::new(VaultErrorKind::NotFound(prefix.to_string()))
            } else {
                VaultError::new(VaultErrorKind::FileRead(format!("{}: {}", dir.display(), e)))
            }
        })?;

        while let Some(entry) = reader.next_entry().await.map_err(|e| {
            VaultError::new(VaultErrorKind::FileRead(format!("{}: {}", dir.display(), e)))
        })? {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            let is_dir = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            names.push((name, is_dir));
        }

        // Stable enumeration order regardless of the filesystem.
        names.sort();
        Ok(names)
    }

    /// Collect entries under `dir`, sorted by path.
    async fn walk(
        &self,
        dir: &Path,
        prefix: &str,
        recursive: bool,
        out: &mut Vec<VaultEntry>,
    ) -> Result<(), VaultError> {
        // Explicit work list instead of recursion; async fns cannot recurse
        // without boxing.
        let mut pending = vec![(dir.to_path_buf(), prefix.to_string())];
        let mut first = true;

        while let Some((dir, prefix)) = pending.pop() {
            let names = match Self::read_level(&dir, &prefix).await {
                Ok(names) => names,
                // Only a missing root is an error; vanished subfolders are
                // skipped.
                Err(e) if first => return Err(e),
                Err(_) => continue,
            };
            first = false;

            for (name, is_dir) in names {
                let rel = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}/{}", prefix, name)
                };
                let kind = if is_dir { EntryKind::Folder } else { EntryKind::File };
                out.push(VaultEntry::new(rel.clone(), kind));
                if is_dir && recursive {
                    pending.push((dir.join(&name), rel));
                }
            }
        }

        // Folders sort immediately ahead of their contents, giving the
        // stable enumeration order callers rely on.
        out.sort();
        Ok(())
    }
}

#[async_trait::async_trait]
impl Vault for FileSystemVault {
    #[tracing::instrument(skip(self))]
    async fn create_folder(&self, path: &str) -> ThirdBrainResult<()> {
        let full = self.resolve(path)?;
        // create_dir_all treats an existing folder as success.
        tokio::fs::create_dir_all(&full).await.map_err(|e| {
            VaultError::new(VaultErrorKind::FolderCreation(format!(
                "{}: {}",
                full.display(),
                e
            )))
        })?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> ThirdBrainResult<bool> {
        let full = self.resolve(path)?;
        Ok(tokio::fs::try_exists(&full).await.unwrap_or(false))
    }

    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn upload(&self, path: &str, data: &[u8]) -> ThirdBrainResult<()> {
        let full = self.resolve(path)?;

        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                VaultError::new(VaultErrorKind::FolderCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity.
        let temp_path = full.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            VaultError::new(VaultErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &full).await.map_err(|e| {
            VaultError::new(VaultErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                full.display(),
                e
            )))
        })?;

        tracing::debug!(path, size = data.len(), "Uploaded blob");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn download(&self, path: &str) -> ThirdBrainResult<Vec<u8>> {
        let full = self.resolve(path)?;
        let data = tokio::fs::read(&full).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VaultError::new(VaultErrorKind::NotFound(path.to_string()))
            } else {
                VaultError::new(VaultErrorKind::FileRead(format!("{}: {}", full.display(), e)))
            }
        })?;
        Ok(data)
    }

    #[tracing::instrument(skip(self))]
    async fn list_folder(&self, path: &str, recursive: bool) -> ThirdBrainResult<Vec<VaultEntry>> {
        let full = self.resolve(path)?;
        let mut entries = Vec::new();
        self.walk(&full, path, recursive, &mut entries).await?;
        Ok(entries)
    }

    #[tracing::instrument(skip(self))]
    async fn resolve_link(&self, path: &str) -> ThirdBrainResult<String> {
        let full = self.resolve(path)?;
        if !tokio::fs::try_exists(&full).await.unwrap_or(false) {
            return Err(VaultError::new(VaultErrorKind::NotFound(path.to_string())).into());
        }

        let mut links = self.links.lock().await;
        if let Some(existing) = links.get(path) {
            // A link already exists; reuse it rather than erroring.
            tracing::debug!(path, "Reusing existing shareable link");
            return Ok(existing.clone());
        }

        let name = path.rsplit('/').next().unwrap_or(path);
        let url = format!("vault://{}/{}", Self::link_token(path), name);
        links.insert(path.to_string(), url.clone());
        self.persist_links(&links).await?;

        tracing::debug!(path, url = %url, "Created shareable link");
        Ok(url)
    }

    async fn list_links(&self, path: &str) -> ThirdBrainResult<Vec<String>> {
        let links = self.links.lock().await;
        Ok(links.get(path).cloned().into_iter().collect())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, path: &str) -> ThirdBrainResult<()> {
        let full = self.resolve(path)?;
        let metadata = tokio::fs::metadata(&full).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VaultError::new(VaultErrorKind::NotFound(path.to_string()))
            } else {
                VaultError::new(VaultErrorKind::FileRead(format!("{}: {}", full.display(), e)))
            }
        })?;

        let removal = if metadata.is_dir() {
            tokio::fs::remove_dir_all(&full).await
        } else {
            tokio::fs::remove_file(&full).await
        };
        removal.map_err(|e| {
            VaultError::new(VaultErrorKind::FileWrite(format!(
                "delete {}: {}",
                full.display(),
                e
            )))
        })?;

        // Links to removed blobs are dropped with them.
        let mut links = self.links.lock().await;
        let before = links.len();
        links.retain(|key, _| key != path && !key.starts_with(&format!("{}/", path)));
        if links.len() != before {
            self.persist_links(&links).await?;
        }

        tracing::info!(path, "Deleted vault entry");
        Ok(())
    }
}
