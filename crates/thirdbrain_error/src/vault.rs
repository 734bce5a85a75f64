//! Blob vault error types.

/// Kinds of vault errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VaultErrorKind {
    /// Failed to create a folder
    #[display("Failed to create folder: {}", _0)]
    FolderCreation(String),
    /// Failed to write a file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read a file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// No entry at the specified path
    #[display("Not found: {}", _0)]
    NotFound(String),
    /// Invalid vault path
    #[display("Invalid path: {}", _0)]
    InvalidPath(String),
    /// Failed to create or look up a shareable link
    #[display("Link resolution failed: {}", _0)]
    LinkResolution(String),
    /// Vault backend is unavailable
    #[display("Vault unavailable: {}", _0)]
    Unavailable(String),
}

/// Vault error with location tracking.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{VaultError, VaultErrorKind};
///
/// let err = VaultError::new(VaultErrorKind::NotFound("books/missing".to_string()));
/// assert!(format!("{}", err).contains("Not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Vault Error: {} at line {} in {}", kind, line, file)]
pub struct VaultError {
    /// The kind of error that occurred
    pub kind: VaultErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl VaultError {
    /// Create a new vault error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VaultErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
