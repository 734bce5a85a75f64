//! Artifact store error types.

/// Kinds of artifact store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// No record under the given key
    #[display("No record for key: {}", _0)]
    NotFound(String),
    /// Conditional insert rejected because the key is taken
    #[display("Key already exists: {}", _0)]
    KeyExists(String),
    /// Record could not be serialized or deserialized
    #[display("Serialization failed: {}", _0)]
    Serialization(String),
    /// Backing file could not be read or written
    #[display("Store I/O failed: {}", _0)]
    Io(String),
    /// A field held the wrong value shape for the requested view
    #[display("Invalid field '{}': {}", field, message)]
    InvalidField {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
    /// Credential hashing or verification failed
    #[display("Credential error: {}", _0)]
    Credential(String),
}

/// Artifact store error with location tracking.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NotFound("Atomic Habits".to_string()));
/// assert!(format!("{}", err).contains("No record"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the error is a missing-key condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, StoreErrorKind::NotFound(_))
    }
}
