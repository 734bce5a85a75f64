//! End-to-end tests for the book summary pipeline.

mod support;

use std::sync::Arc;
use support::{FakeImages, MemoryVault, ScriptedText};
use thirdbrain_core::{SubjectLedger, normalize_subject};
use thirdbrain_error::ThirdBrainErrorKind;
use thirdbrain_interface::NullSink;
use thirdbrain_pipeline::{ArtParams, BookSummarizer, PipelineContext, SubjectPicker};
use thirdbrain_store::{ArtifactStore, MemoryStore};

fn context(
    text: Arc<ScriptedText>,
    vault: Arc<MemoryVault>,
    store: Arc<MemoryStore>,
) -> Arc<PipelineContext> {
    let ctx = PipelineContext::new(
        text,
        Arc::new(FakeImages::new("dalle", 1)),
        Arc::new(FakeImages::new("stability", 2)),
        vault,
        store,
    )
    .with_sink(Arc::new(NullSink));
    Arc::new(ctx)
}

fn seeded_ledger() -> SubjectLedger {
    SubjectLedger::from_titles([
        "Atomic Habits by James Clear",
        "The 7 Habits of Highly Effective People by Stephen Covey",
    ])
}

#[tokio::test]
async fn empty_subject_runs_the_full_pipeline() {
    let text = Arc::new(ScriptedText::new([
        // Subject candidate collides with the seeded set, so a re-request
        // follows.
        "Atomic Habits by James Clear.",
        "Deep Work by Cal Newport",
        "Introduction: Deep Work argues that focus is the new currency...",
        "A solitary desk in a lighthouse above a stormy sea, warm lamplight",
    ]));
    let vault = Arc::new(MemoryVault::new());
    let store = Arc::new(MemoryStore::new());
    let ctx = context(text, vault.clone(), store.clone());

    let summarizer = BookSummarizer::new(ctx);
    let outcome = summarizer
        .run(None, &seeded_ledger(), &ArtParams::default())
        .await
        .unwrap();

    // The picked subject is fresh with respect to the used set.
    assert_eq!(outcome.subject, "Deep Work by Cal Newport");
    assert_ne!(
        normalize_subject(&outcome.subject),
        normalize_subject("Atomic Habits by James Clear")
    );
    assert!(!outcome.summary.is_empty());

    // One high-fidelity image plus two configured images, in production order.
    assert_eq!(outcome.asset_urls.len(), 3);
    assert!(outcome.asset_urls[0].contains("_dalle_0.png"));
    assert!(outcome.asset_urls[1].contains("_stability_0.png"));
    assert!(outcome.asset_urls[2].contains("_stability_1.png"));

    // The vault holds the summary text and the numbered images.
    let folder = "books/Deep Work by Cal Newport";
    assert!(
        vault
            .file(&format!("{folder}/Deep Work by Cal Newport.txt"))
            .is_some()
    );
    assert!(
        vault
            .file(&format!("{folder}/Deep Work by Cal Newport_stability_1.png"))
            .is_some()
    );

    // The record mirrors the outcome.
    let record = store.get("books", "Deep Work by Cal Newport").await.unwrap();
    assert_eq!(record.text("content"), Some(outcome.summary.as_str()));
    assert_eq!(record.text("author"), Some("Cal Newport"));
    assert_eq!(record.list("img_url").unwrap(), outcome.asset_urls.as_slice());
}

#[tokio::test]
async fn failed_uploads_are_absent_not_placeholders() {
    let text = Arc::new(ScriptedText::new([
        "Summary of the given book.",
        "A cover image prompt",
    ]));
    let vault = Arc::new(MemoryVault::new());
    // The second configured image fails to upload.
    vault.fail_uploads_containing("_stability_1");
    let store = Arc::new(MemoryStore::new());
    let ctx = context(text, vault, store.clone());

    let outcome = BookSummarizer::new(ctx)
        .run(
            Some("Deep Work by Cal Newport"),
            &SubjectLedger::new(),
            &ArtParams::default(),
        )
        .await
        .unwrap();

    // Three images were produced, one upload failed: exactly two locations
    // remain, still in production order.
    assert_eq!(outcome.artifacts.len(), 3);
    assert_eq!(outcome.asset_urls.len(), 2);
    assert!(outcome.asset_urls[0].contains("_dalle_0.png"));
    assert!(outcome.asset_urls[1].contains("_stability_0.png"));

    let record = store.get("books", "Deep Work by Cal Newport").await.unwrap();
    assert_eq!(record.list("img_url").unwrap().len(), 2);
}

#[tokio::test]
async fn one_failed_image_provider_narrows_the_outcome() {
    let text = Arc::new(ScriptedText::new([
        "Summary of the given book.",
        "A cover image prompt",
    ]));
    let vault = Arc::new(MemoryVault::new());
    let store = Arc::new(MemoryStore::new());

    let ctx = Arc::new(
        PipelineContext::new(
            text,
            Arc::new(FakeImages::new("dalle", 1)),
            Arc::new(FakeImages::failing("stability")),
            vault,
            store.clone(),
        )
        .with_sink(Arc::new(NullSink))
        .with_invoker(thirdbrain_retry::Invoker::new(
            thirdbrain_retry::RetryConfig {
                attempts: 1,
                delay_secs: 0,
                attempt_timeout_secs: None,
            },
        )),
    );

    let outcome = BookSummarizer::new(ctx)
        .run(
            Some("Deep Work by Cal Newport"),
            &SubjectLedger::new(),
            &ArtParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.asset_urls.len(), 1);
    assert!(outcome.asset_urls[0].contains("_dalle_0.png"));
}

#[tokio::test]
async fn regenerating_a_subject_updates_the_existing_record() {
    let vault = Arc::new(MemoryVault::new());
    let store = Arc::new(MemoryStore::new());

    let first = Arc::new(ScriptedText::new(["First summary.", "prompt one"]));
    BookSummarizer::new(context(first, vault.clone(), store.clone()))
        .run(Some("Grit by Angela Duckworth"), &SubjectLedger::new(), &ArtParams::default())
        .await
        .unwrap();

    let second = Arc::new(ScriptedText::new(["Second summary.", "prompt two"]));
    BookSummarizer::new(context(second, vault, store.clone()))
        .run(Some("Grit by Angela Duckworth"), &SubjectLedger::new(), &ArtParams::default())
        .await
        .unwrap();

    let records = store.fetch_all("books").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text("content"), Some("Second summary."));
}

#[tokio::test]
async fn subject_picker_rejects_all_collisions_with_terminal_error() {
    let text = Arc::new(ScriptedText::new([
        "Atomic Habits by James Clear",
        "\"Atomic Habits\" by James Clear",
        "atomic habits by james clear",
    ]));
    let ctx = context(text, Arc::new(MemoryVault::new()), Arc::new(MemoryStore::new()));

    let result = SubjectPicker::new(&ctx)
        .pick(&seeded_ledger())
        .await;

    let err = result.unwrap_err();
    match err.kind() {
        ThirdBrainErrorKind::Pipeline(e) => {
            assert!(matches!(
                e.kind,
                thirdbrain_error::PipelineErrorKind::SubjectExhausted(3)
            ));
        }
        other => panic!("expected pipeline error, got {other:?}"),
    }
}

#[tokio::test]
async fn used_subjects_read_back_from_vault_folders() {
    let text = Arc::new(ScriptedText::new(["Summary.", "prompt"]));
    let vault = Arc::new(MemoryVault::new());
    let store = Arc::new(MemoryStore::new());
    let ctx = context(text, vault, store);

    let summarizer = BookSummarizer::new(ctx);
    summarizer
        .run(Some("Deep Work by Cal Newport"), &SubjectLedger::new(), &ArtParams::default())
        .await
        .unwrap();

    let ledger = summarizer.used_subjects().await.unwrap();
    assert!(ledger.contains("Deep Work by Cal Newport"));
}
