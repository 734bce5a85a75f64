//! The bounded-retry invoker.

use crate::RetryConfig;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use thirdbrain_error::{RetryError, RetryErrorKind};
use thirdbrain_interface::{ProgressSink, TracingSink};
use tokio_retry2::{Retry, RetryError as TransientError, strategy::FixedInterval};

/// Executes a single external call with a fixed retry budget.
///
/// Contract:
/// - the operation runs at most `attempts` times and at least once;
/// - the first success returns immediately, no further attempts;
/// - exactly `delay_secs` elapse between consecutive attempts;
/// - every failed attempt is reported to the progress sink;
/// - exhausting the budget yields an explicit error carrying the last
///   failure's cause, never a silent fallthrough.
///
/// # Examples
///
/// ```no_run
/// use thirdbrain_retry::{Invoker, RetryConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let invoker = Invoker::new(RetryConfig::default());
/// let completion: String = invoker
///     .invoke("summarize", || async { fetch_summary().await })
///     .await?;
/// # Ok(())
/// # }
/// # async fn fetch_summary() -> Result<String, std::io::Error> { Ok(String::new()) }
/// ```
#[derive(Clone)]
pub struct Invoker {
    config: RetryConfig,
    sink: Arc<dyn ProgressSink>,
}

impl std::fmt::Debug for Invoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invoker").field("config", &self.config).finish()
    }
}

impl Invoker {
    /// Create an invoker reporting progress through `tracing`.
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Create an invoker with an explicit progress sink.
    pub fn with_sink(config: RetryConfig, sink: Arc<dyn ProgressSink>) -> Self {
        Self { config, sink }
    }

    /// The configuration this invoker runs with.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `operation` under the retry budget.
    ///
    /// `label` names the step in failure notifications. All failures are
    /// treated alike: rate limits, network errors, and service errors all
    /// consume one attempt.
    ///
    /// # Errors
    ///
    /// Returns `RetryErrorKind::Exhausted` with the last failure's message
    /// once the budget is spent, or `InvalidConfig` for a zero budget.
    #[tracing::instrument(skip(self, operation), fields(attempts = self.config.attempts))]
    pub async fn invoke<T, E, F, Fut>(&self, label: &str, mut operation: F) -> Result<T, RetryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.config.validate()?;

        let attempts = self.config.attempts;
        let timeout = self.config.attempt_timeout();
        let strategy =
            FixedInterval::from_millis(self.config.delay_secs * 1000).take((attempts - 1) as usize);
        let counter = AtomicU32::new(0);

        let result = Retry::spawn(strategy, || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
            let fut = operation();
            async move {
                let outcome = match timeout {
                    Some(limit) => match tokio::time::timeout(limit, fut).await {
                        Ok(inner) => inner.map_err(|e| e.to_string()),
                        Err(_) => Err(format!("timed out after {} seconds", limit.as_secs())),
                    },
                    None => fut.await.map_err(|e| e.to_string()),
                };

                match outcome {
                    Ok(value) => Ok(value),
                    Err(message) => {
                        self.sink.warn(&format!(
                            "Attempt {} of {} failed: {}",
                            attempt, attempts, message
                        ));
                        tracing::warn!(attempt, error = %message, "attempt failed");
                        Err(TransientError::Transient {
                            err: message,
                            retry_after: None,
                        })
                    }
                }
            }
        })
        .await;

        result.map_err(|last| RetryError::new(RetryErrorKind::Exhausted { attempts, last }))
    }
}
