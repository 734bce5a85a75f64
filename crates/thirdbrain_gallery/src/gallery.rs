//! Import and listing operations.

use std::sync::Arc;
use thirdbrain_error::ThirdBrainResult;
use thirdbrain_storage::{EntryKind, Vault, VaultEntry};
use thirdbrain_store::{ArtifactRecord, ArtifactStore};

/// One renderable gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    /// Display title (record key)
    pub title: String,
    /// Author, when the title carries one
    pub author: Option<String>,
    /// Text body (summary or prompt)
    pub body: String,
    /// Image links in display order
    pub image_urls: Vec<String>,
}

/// Enumerates stored content and resolves displayable links.
pub struct ContentGallery {
    vault: Arc<dyn Vault>,
    store: Arc<dyn ArtifactStore>,
}

impl ContentGallery {
    /// Create a gallery over a vault and store.
    pub fn new(vault: Arc<dyn Vault>, store: Arc<dyn ArtifactStore>) -> Self {
        Self { vault, store }
    }

    /// Import vault content under `folder` into the store's `collection`.
    ///
    /// Walks child folders newest first (reverse enumeration order). For
    /// each title folder: image files get an idempotent share link, the
    /// text file body becomes the record's `content`, and the links land in
    /// `img_url` in file-enumeration order. Re-running converges on the
    /// same records. `limit` caps the number of titles processed per call.
    ///
    /// Returns the titles imported this call.
    #[tracing::instrument(skip(self))]
    pub async fn import(
        &self,
        folder: &str,
        collection: &str,
        limit: Option<usize>,
    ) -> ThirdBrainResult<Vec<String>> {
        let entries = self.vault.list_folder(folder, true).await?;

        let mut title_folders: Vec<&VaultEntry> = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Folder && e.parent() == folder)
            .collect();
        title_folders.reverse();
        if let Some(limit) = limit {
            title_folders.truncate(limit);
        }

        let mut imported = Vec::new();
        for title_folder in title_folders {
            let title = title_folder.name().replace('_', " ");

            let files: Vec<&VaultEntry> = entries
                .iter()
                .filter(|e| e.kind == EntryKind::File && e.parent() == title_folder.path)
                .collect();

            let mut image_urls = Vec::new();
            for image in files.iter().filter(|f| f.extension() == Some("png")) {
                // A link may already exist from the generation pass; resolve
                // reuses it rather than erroring.
                match self.vault.resolve_link(&image.path).await {
                    Ok(url) => image_urls.push(url),
                    Err(e) => {
                        tracing::warn!(path = %image.path, error = %e, "Skipping unlinkable image");
                    }
                }
            }

            let mut body = String::new();
            if let Some(text) = files.iter().find(|f| f.extension() == Some("txt")) {
                let bytes = self.vault.download(&text.path).await?;
                body = String::from_utf8_lossy(&bytes).into_owned();
            }

            let mut record = ArtifactRecord::new(&title)
                .with_field("content", body)
                .with_field("img_url", image_urls);
            if let Some(author) = parse_author(&title) {
                record.set_field("author", author);
            }

            let fields = record.fields.clone();
            let inserted = self.store.insert_if_absent(collection, record).await?;
            if !inserted {
                self.store.update(collection, &title, fields).await?;
            }

            tracing::debug!(title = %title, "Imported gallery entry");
            imported.push(title);
        }

        Ok(imported)
    }

    /// Read-only listing of a collection, newest first.
    pub async fn list(&self, collection: &str) -> ThirdBrainResult<Vec<GalleryEntry>> {
        let mut records = self.store.fetch_all(collection).await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(records
            .into_iter()
            .map(|record| GalleryEntry {
                author: record.text("author").map(str::to_string),
                body: record.text("content").unwrap_or_default().to_string(),
                image_urls: record
                    .list("img_url")
                    .map(<[String]>::to_vec)
                    .unwrap_or_default(),
                title: record.key,
            })
            .collect())
    }
}

/// Extract the author from a "Title by Author" title.
fn parse_author(title: &str) -> Option<String> {
    title
        .rsplit_once(" by ")
        .map(|(_, author)| author.trim().to_string())
        .filter(|author| !author.is_empty())
}
