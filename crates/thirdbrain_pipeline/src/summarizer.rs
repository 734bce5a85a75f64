//! Book summary pipeline.

use crate::context::{ArtParams, PipelineContext};
use crate::persist::{gather_images, persist_bundle};
use crate::prompts;
use crate::subject::SubjectPicker;
use std::sync::Arc;
use thirdbrain_core::{GenerateRequestBuilder, ImageArtifact, SubjectLedger};
use thirdbrain_error::{PipelineError, PipelineErrorKind, ThirdBrainResult};
use thirdbrain_interface::{ProgressSink as _, TextGenerator as _};
use thirdbrain_storage::{EntryKind, Vault as _};
use thirdbrain_store::{ArtifactRecord, ArtifactStore as _};

/// Vault folder and store collection for book summaries.
const COLLECTION: &str = "books";

/// Everything one summary run produced.
#[derive(Debug, Clone)]
pub struct SummaryOutcome {
    /// The summarized book ("Title by Author")
    pub subject: String,
    /// The summary text
    pub summary: String,
    /// The derived cover-image prompt
    pub cover_prompt: String,
    /// Durable locations of the uploaded cover images, in production order
    pub asset_urls: Vec<String>,
    /// Decoded images for immediate display
    pub artifacts: Vec<ImageArtifact>,
}

/// Generates, persists, and records one book summary end-to-end.
pub struct BookSummarizer {
    ctx: Arc<PipelineContext>,
}

impl BookSummarizer {
    /// Create a summarizer over the shared context.
    pub fn new(ctx: Arc<PipelineContext>) -> Self {
        Self { ctx }
    }

    /// Titles already summarized, read from the vault's book folders.
    ///
    /// Underscores in folder names read back as spaces.
    pub async fn used_subjects(&self) -> ThirdBrainResult<SubjectLedger> {
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

    /// Run the pipeline.
    ///
    /// With `subject` empty or absent, a fresh subject is requested from the
    /// text service and checked against `ledger`; a caller-supplied subject
    /// is used verbatim.
    ///
    /// # Errors
    ///
    /// Text-generation steps propagate retry exhaustion; image generation
    /// and per-asset persistence are best effort and only narrow the
    /// outcome.
    #[tracing::instrument(skip(self, ledger, params))]
    pub async fn run(
        &self,
        subject: Option<&str>,
        ledger: &SubjectLedger,
        params: &ArtParams,
    ) -> ThirdBrainResult<SummaryOutcome> {
        self.ctx.sink.info("Summarization progress started...");

        let subject = match subject.filter(|s| !s.trim().is_empty()) {
            Some(given) => given.trim().to_string(),
            None => SubjectPicker::new(&self.ctx).pick(ledger).await?,
        };

        let summary = self.summarize(&subject).await?;
        self.ctx.sink.success("Book summarized!");

        // The image prompt sees title and summary together.
        let book_content = format!("{subject}\n\n{summary}");
        let cover_prompt = self.cover_prompt(&book_content).await?;
        self.ctx.sink.success("Image prompt created!");

        let artifacts = gather_images(&self.ctx, &cover_prompt, params).await;

        let folder = format!("{COLLECTION}/{subject}");
        let asset_urls =
            persist_bundle(&self.ctx, &folder, &subject, Some(&summary), &artifacts).await?;

        self.record(&subject, &summary, &asset_urls).await?;
        self.ctx.sink.success("Database updated!");

        Ok(SummaryOutcome {
            subject,
            summary,
            cover_prompt,
            asset_urls,
            artifacts,
        })
    }

    async fn summarize(&self, subject: &str) -> ThirdBrainResult<String> {
        self.ctx.sink.info("Summarizing...");
        let req = GenerateRequestBuilder::default()
            .messages(prompts::summarize_book(subject))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("summarize", || self.ctx.long_text.generate(&req))
            .await?;

        if response.content.trim().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyCompletion(
                "summarize".to_string(),
            ))
            .into());
        }
        Ok(response.content)
    }

    async fn cover_prompt(&self, book_content: &str) -> ThirdBrainResult<String> {
        self.ctx.sink.info("Creating prompt for the images...");
        let req = GenerateRequestBuilder::default()
            .messages(prompts::cover_prompt(book_content))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("cover prompt", || self.ctx.text.generate(&req))
            .await?;
        Ok(response.content)
    }

    async fn record(
        &self,
        subject: &str,
        summary: &str,
        asset_urls: &[String],
    ) -> ThirdBrainResult<()> {
        self.ctx.sink.info("Saving to database");

        let mut record = ArtifactRecord::new(subject)
            .with_field("content", summary)
            .with_field("img_url", asset_urls.to_vec());
        if let Some(author) = parse_author(subject) {
            record.set_field("author", author);
        }

        let fields = record.fields.clone();
        let inserted = self.ctx.store.insert_if_absent(COLLECTION, record).await?;
        if !inserted {
            // Regenerating an existing subject refreshes its fields.
            self.ctx.store.update(COLLECTION, subject, fields).await?;
        }
        Ok(())
    }
}

/// Extract the author from a "Title by Author" subject.
fn parse_author(subject: &str) -> Option<String> {
    subject
        .rsplit_once(" by ")
        .map(|(_, author)| author.trim().to_string())
        .filter(|author| !author.is_empty())
}
