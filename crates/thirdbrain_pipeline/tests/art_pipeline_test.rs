//! End-to-end tests for the artwork pipeline.

mod support;

use std::sync::Arc;
use support::{FakeImages, MemoryVault, ScriptedText};
use thirdbrain_interface::NullSink;
use thirdbrain_pipeline::{ArtGenerator, ArtParams, PipelineContext};
use thirdbrain_store::{ArtifactStore, MemoryStore};

#[tokio::test]
async fn art_run_persists_prompt_and_images() {
    let vault = Arc::new(MemoryVault::new());
    let store = Arc::new(MemoryStore::new());
    let ctx = PipelineContext::new(
        Arc::new(ScriptedText::new([
            "A neon-drenched alley at midnight, rain mirroring the signs",
        ])),
        Arc::new(FakeImages::new("dalle", 2)),
        Arc::new(FakeImages::new("stability", 2)),
        vault.clone(),
        store.clone(),
    )
    .with_sink(Arc::new(NullSink));

    let params = ArtParams {
        few_samples: 2,
        few_size: 512,
        ..ArtParams::default()
    };
    let outcome = ArtGenerator::new(Arc::new(ctx))
        .run("a rainy cyberpunk alley", "Neon Alley", &params)
        .await
        .unwrap();

    assert_eq!(outcome.name, "Neon Alley");
    assert_eq!(outcome.asset_urls.len(), 4);

    // The prompt file carries its label prefix.
    let body = vault.file("images/Neon Alley/Neon Alley.txt").unwrap();
    let body = String::from_utf8(body).unwrap();
    assert!(body.starts_with("Image prompt: "));
    assert!(body.contains("neon-drenched"));

    let record = store.get("images", "Neon Alley").await.unwrap();
    assert_eq!(record.list("img_url").unwrap().len(), 4);
    assert!(record.text("content").unwrap().contains("neon-drenched"));
}

#[tokio::test]
async fn used_names_come_from_the_images_folder() {
    let vault = Arc::new(MemoryVault::new());
    let store = Arc::new(MemoryStore::new());
    let ctx = PipelineContext::new(
        Arc::new(ScriptedText::new(["prompt text"])),
        Arc::new(FakeImages::new("dalle", 1)),
        Arc::new(FakeImages::new("stability", 1)),
        vault,
        store,
    )
    .with_sink(Arc::new(NullSink));

    let generator = ArtGenerator::new(Arc::new(ctx));
    generator
        .run("something", "First Piece", &ArtParams::default())
        .await
        .unwrap();

    let ledger = generator.used_names().await.unwrap();
    assert!(ledger.contains("First Piece"));
    assert!(!ledger.contains("Second Piece"));
}
