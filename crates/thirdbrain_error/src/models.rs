//! Service adapter error types.

/// Kinds of errors produced by hosted-API adapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Required API key missing from the environment
    #[display("Missing API key: {}", _0)]
    MissingApiKey(String),
    /// Request failed before a response arrived
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Service returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Unexpected response: {}", _0)]
    UnexpectedResponse(String),
    /// Base64 or binary payload could not be decoded
    #[display("Decode failed: {}", _0)]
    Decode(String),
}

/// Service adapter error with location tracking.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Api {
///     status: 429,
///     message: "rate limited".to_string(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at line {} in {}", kind, line, file)]
pub struct ModelsError {
    /// The kind of error that occurred
    pub kind: ModelsErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new adapter error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
