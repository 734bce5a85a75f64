//! Top-level error wrapper types.

use crate::{
    ConfigError, HttpError, JsonError, ModelsError, PipelineError, RetryError, StoreError,
    VaultError,
};

/// This is the foundation error enum aggregating the domain errors of the
/// Third Brain crates.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{ThirdBrainError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ThirdBrainError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ThirdBrainErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Bounded-retry invoker error
    #[from(RetryError)]
    Retry(RetryError),
    /// Blob vault error
    #[from(VaultError)]
    Vault(VaultError),
    /// Artifact store error
    #[from(StoreError)]
    Store(StoreError),
    /// Service adapter error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Generation pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Third Brain error with kind discrimination.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{ThirdBrainResult, ConfigError};
///
/// fn might_fail() -> ThirdBrainResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Third Brain Error: {}", _0)]
pub struct ThirdBrainError(Box<ThirdBrainErrorKind>);

impl ThirdBrainError {
    /// Create a new error from a kind.
    pub fn new(kind: ThirdBrainErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ThirdBrainErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ThirdBrainErrorKind
impl<T> From<T> for ThirdBrainError
where
    T: Into<ThirdBrainErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Third Brain operations.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{ThirdBrainResult, HttpError};
///
/// fn fetch_data() -> ThirdBrainResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type ThirdBrainResult<T> = std::result::Result<T, ThirdBrainError>;
