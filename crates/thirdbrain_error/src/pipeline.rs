//! Generation pipeline error types.

/// Specific error conditions for generation pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Subject selection kept colliding with the used set
    #[display("No fresh subject after {} requests", _0)]
    SubjectExhausted(u32),
    /// Text service returned an empty completion
    #[display("Empty completion for step: {}", _0)]
    EmptyCompletion(String),
    /// Completion could not be parsed as a playlist
    #[display("Playlist parse failed: {}", _0)]
    PlaylistParse(String),
    /// No track met the popularity threshold for any query
    #[display("No acceptable track for: {}", _0)]
    TrackNotFound(String),
    /// Subject or title was malformed for the requested operation
    #[display("Malformed subject: {}", _0)]
    MalformedSubject(String),
    /// Chapter or section referenced before it was written
    #[display("Unknown section: {}", _0)]
    UnknownSection(String),
    /// Chapter writing requested before an outline exists
    #[display("No outline recorded for: {}", _0)]
    MissingOutline(String),
}

/// Error type for generation pipeline operations.
///
/// # Examples
///
/// ```
/// use thirdbrain_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::SubjectExhausted(3));
/// assert!(format!("{}", err).contains("after 3 requests"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
