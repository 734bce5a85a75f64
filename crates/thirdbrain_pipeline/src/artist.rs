//! Artwork generation pipeline.

use crate::context::{ArtParams, PipelineContext};
use crate::persist::{gather_images, persist_bundle};
use crate::prompts;
use std::sync::Arc;
use thirdbrain_core::{GenerateRequestBuilder, ImageArtifact, SubjectLedger};
use thirdbrain_error::{PipelineError, PipelineErrorKind, ThirdBrainResult};
use thirdbrain_interface::{ProgressSink as _, TextGenerator as _};
use thirdbrain_storage::{EntryKind, Vault as _};
use thirdbrain_store::{ArtifactRecord, ArtifactStore as _};

/// Vault folder and store collection for generated artwork.
const COLLECTION: &str = "images";

/// Everything one artwork run produced.
#[derive(Debug, Clone)]
pub struct ArtOutcome {
    /// The piece name, also its folder and record key
    pub name: String,
    /// The derived art prompt
    pub prompt: String,
    /// Durable locations of the uploaded images, in production order
    pub asset_urls: Vec<String>,
    /// Decoded images for immediate display
    pub artifacts: Vec<ImageArtifact>,
}

/// Generates, persists, and records one art piece end-to-end.
pub struct ArtGenerator {
    ctx: Arc<PipelineContext>,
}

impl ArtGenerator {
    /// Create a generator over the shared context.
    pub fn new(ctx: Arc<PipelineContext>) -> Self {
        Self { ctx }
    }

    /// Piece names already generated, read from the vault's image folders.
    pub async fn used_names(&self) -> ThirdBrainResult<SubjectLedger> {
        let entries = self.ctx.vault.list_folder(COLLECTION, false).await;
        let mut ledger = SubjectLedger::new();
        if let Ok(entries) = entries {
            for entry in entries {
                if entry.kind == EntryKind::Folder {
                    ledger.insert(entry.name().replace('_', " "));
                }
            }
        }
        Ok(ledger)
    }

    /// Run the pipeline for a free-form description and piece name.
    ///
    /// # Errors
    ///
    /// Prompt derivation propagates retry exhaustion; image generation and
    /// per-asset persistence are best effort.
    #[tracing::instrument(skip(self, description, params))]
    pub async fn run(
        &self,
        description: &str,
        name: &str,
        params: &ArtParams,
    ) -> ThirdBrainResult<ArtOutcome> {
        let prompt = self.art_prompt(description).await?;
        self.ctx.sink.success(&prompt);

        let artifacts = gather_images(&self.ctx, &prompt, params).await;

        let folder = format!("{COLLECTION}/{name}");
        let body = format!("Image prompt: {prompt}");
        let asset_urls = persist_bundle(&self.ctx, &folder, name, Some(&body), &artifacts).await?;

        self.record(name, &prompt, &asset_urls).await?;
        self.ctx.sink.success("Art Generated!");

        Ok(ArtOutcome {
            name: name.to_string(),
            prompt,
            asset_urls,
            artifacts,
        })
    }

    async fn art_prompt(&self, description: &str) -> ThirdBrainResult<String> {
        self.ctx.sink.info("Creating prompt for the images...");
        let req = GenerateRequestBuilder::default()
            .messages(prompts::art_prompt(description))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("art prompt", || self.ctx.text.generate(&req))
            .await?;

        if response.content.trim().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyCompletion(
                "art prompt".to_string(),
            ))
            .into());
        }
        Ok(response.content)
    }

    async fn record(&self, name: &str, prompt: &str, asset_urls: &[String]) -> ThirdBrainResult<()> {
        self.ctx.sink.info("Saving to database");

        let record = ArtifactRecord::new(name)
            .with_field("content", prompt)
            .with_field("img_url", asset_urls.to_vec());
        let fields = record.fields.clone();

        let inserted = self.ctx.store.insert_if_absent(COLLECTION, record).await?;
        if !inserted {
            self.ctx.store.update(COLLECTION, name, fields).await?;
        }
        Ok(())
    }
}
