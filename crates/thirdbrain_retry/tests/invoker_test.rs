//! Tests for the bounded-retry invoker.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use thirdbrain_error::RetryErrorKind;
use thirdbrain_interface::{NullSink, ProgressEvent, ProgressSink, Severity};
use thirdbrain_retry::{Invoker, RetryConfig};

fn config(attempts: u32, delay_secs: u64) -> RetryConfig {
    RetryConfig {
        attempts,
        delay_secs,
        attempt_timeout_secs: None,
    }
}

#[tokio::test(start_paused = true)]
async fn first_success_short_circuits() {
    let invoker = Invoker::new(config(2, 10));
    let calls = AtomicU32::new(0);

    let started = tokio::time::Instant::now();
    let result: Result<u32, _> = invoker
        .invoke("step", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, std::io::Error>(42) }
        })
        .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // No delay is spent when the first attempt succeeds.
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn waits_fixed_delay_between_attempts() {
    let invoker = Invoker::with_sink(config(2, 10), Arc::new(NullSink));
    let calls = AtomicU32::new(0);

    let started = tokio::time::Instant::now();
    let result = invoker
        .invoke("step", || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if attempt == 1 {
                    Err(std::io::Error::other("rate limited"))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

    assert_eq!(result.unwrap(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(started.elapsed(), Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn exhaustion_is_an_explicit_error_with_last_cause() {
    let invoker = Invoker::with_sink(config(2, 10), Arc::new(NullSink));
    let calls = AtomicU32::new(0);

    let result: Result<u32, _> = invoker
        .invoke("step", || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err::<u32, _>(std::io::Error::other(format!("boom {attempt}"))) }
        })
        .await;

    // Attempt budget is honored exactly.
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let err = result.unwrap_err();
    match &err.kind {
        RetryErrorKind::Exhausted { attempts, last } => {
            assert_eq!(*attempts, 2);
            assert_eq!(last, "boom 2");
        }
        other => panic!("expected Exhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_attempt_budget_is_rejected() {
    let invoker = Invoker::new(config(0, 10));
    let result: Result<u32, _> = invoker
        .invoke("step", || async { Ok::<_, std::io::Error>(1) })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err.kind, RetryErrorKind::InvalidConfig(_)));
}

#[tokio::test(start_paused = true)]
async fn attempt_timeout_counts_as_a_failure() {
    let invoker = Invoker::with_sink(
        RetryConfig {
            attempts: 2,
            delay_secs: 10,
            attempt_timeout_secs: Some(5),
        },
        Arc::new(NullSink),
    );

    let result: Result<u32, _> = invoker
        .invoke("step", || async {
            tokio::time::sleep(Duration::from_secs(300)).await;
            Ok::<_, std::io::Error>(1)
        })
        .await;

    let err = result.unwrap_err();
    match &err.kind {
        RetryErrorKind::Exhausted { attempts, last } => {
            assert_eq!(*attempts, 2);
            assert!(last.contains("timed out after 5 seconds"));
        }
        other => panic!("expected Exhausted, got {other:?}"),
    }
}

/// Sink that records every event it receives.
#[derive(Default)]
struct RecordingSink {
    events: std::sync::Mutex<Vec<ProgressEvent>>,
}

impl ProgressSink for RecordingSink {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[tokio::test(start_paused = true)]
async fn each_failed_attempt_is_reported() {
    let sink = Arc::new(RecordingSink::default());
    let invoker = Invoker::with_sink(config(2, 10), sink.clone());

    let _: Result<u32, _> = invoker
        .invoke("step", || async {
            Err::<u32, _>(std::io::Error::other("down"))
        })
        .await;

    let events = sink.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.severity == Severity::Warning));
    assert!(events[0].message.contains("Attempt 1 of 2"));
    assert!(events[1].message.contains("Attempt 2 of 2"));
}

#[test]
fn bundled_defaults_match_observed_constants() {
    let config = RetryConfig::default();
    assert_eq!(config.attempts, 2);
    assert_eq!(config.delay_secs, 10);
    assert!(config.attempt_timeout_secs.is_none());
    assert!(config.validate().is_ok());
}
