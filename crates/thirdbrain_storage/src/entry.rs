//! Folder listing entry types.

use serde::{Deserialize, Serialize};

/// Whether a listing entry is a folder or a file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    /// A folder that may contain further entries
    Folder,
    /// A blob
    File,
}

/// One entry from a folder listing.
///
/// # Examples
///
/// ```
/// use thirdbrain_storage::{EntryKind, VaultEntry};
///
/// let entry = VaultEntry::new("books/Deep Work by Cal Newport/cover_dalle_0.png", EntryKind::File);
/// assert_eq!(entry.name(), "cover_dalle_0.png");
/// assert_eq!(entry.extension(), Some("png"));
/// assert_eq!(entry.parent(), "books/Deep Work by Cal Newport");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Vault-relative path, `/`-separated
    pub path: String,
    /// Folder or file
    pub kind: EntryKind,
}

impl VaultEntry {
    /// Create an entry.
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Final path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Path of the containing folder; empty for top-level entries.
    pub fn parent(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((parent, _)) => parent,
            None => "",
        }
    }

    /// Lowercased file extension, when present.
    pub fn extension(&self) -> Option<&str> {
        match self.kind {
            EntryKind::Folder => None,
            EntryKind::File => self.name().rsplit_once('.').map(|(_, ext)| ext),
        }
    }
}
