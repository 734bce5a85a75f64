//! Retry error types.

/// Specific error conditions for the bounded-retry invoker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RetryErrorKind {
    /// Every attempt in the budget failed; carries the last failure's cause
    #[display("Exhausted {} attempts, last failure: {}", attempts, last)]
    Exhausted {
        /// Total attempts made before giving up
        attempts: u32,
        /// Message of the final failure
        last: String,
    },
    /// A single attempt exceeded its timeout
    #[display("Attempt timed out after {} seconds", _0)]
    AttemptTimeout(u64),
    /// Invalid retry configuration (zero attempts, etc.)
    #[display("Invalid retry configuration: {}", _0)]
    InvalidConfig(String),
}

/// Error type for retry operations.
///
/// The source behavior this replaces fell through silently once the attempt
/// budget ran out; here exhaustion is always an explicit error carrying the
/// last failure's cause.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{RetryError, RetryErrorKind};
///
/// let err = RetryError::new(RetryErrorKind::Exhausted {
///     attempts: 2,
///     last: "rate limited".to_string(),
/// });
/// assert!(format!("{}", err).contains("Exhausted 2 attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Retry Error: {} at line {} in {}", kind, line, file)]
pub struct RetryError {
    /// The specific error condition
    pub kind: RetryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RetryError {
    /// Create a new RetryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RetryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
