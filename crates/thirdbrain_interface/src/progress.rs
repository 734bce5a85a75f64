//! Progress reporting seam.
//!
//! Pipelines and the retry invoker narrate their steps ("Summarizing...",
//! "Attempt 1 failed...") to whatever surface the host application provides.
//! The default sink forwards to `tracing`.

use strum::Display;

/// Severity of a progress notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// A step has started or is ongoing
    Info,
    /// A step completed
    Success,
    /// A recoverable failure (an attempt failed and will be retried)
    Warning,
    /// An unrecoverable failure
    Error,
}

/// One progress notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// How serious the event is
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl ProgressEvent {
    /// Create an event.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Observability sink for pipeline and invoker progress.
///
/// Object-safe; pipelines hold `Arc<dyn ProgressSink>`.
pub trait ProgressSink: Send + Sync {
    /// Deliver one event to the surface.
    fn report(&self, event: ProgressEvent);

    /// Report an info-level event.
    fn info(&self, message: &str) {
        self.report(ProgressEvent::new(Severity::Info, message));
    }

    /// Report a success-level event.
    fn success(&self, message: &str) {
        self.report(ProgressEvent::new(Severity::Success, message));
    }

    /// Report a warning-level event.
    fn warn(&self, message: &str) {
        self.report(ProgressEvent::new(Severity::Warning, message));
    }

    /// Report an error-level event.
    fn error(&self, message: &str) {
        self.report(ProgressEvent::new(Severity::Error, message));
    }
}

/// Sink that forwards events to `tracing` at matching levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn report(&self, event: ProgressEvent) {
        match event.severity {
            Severity::Info | Severity::Success => {
                tracing::info!(status = %event.severity, "{}", event.message)
            }
            Severity::Warning => tracing::warn!("{}", event.message),
            Severity::Error => tracing::error!("{}", event.message),
        }
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _event: ProgressEvent) {}
}
