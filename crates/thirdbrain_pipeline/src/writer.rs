//! E-book writing pipeline: title, outline, chapters, and section art.

use crate::context::{ArtParams, PipelineContext};
use crate::persist::{gather_images, persist_bundle};
use crate::prompts;
use std::sync::Arc;
use thirdbrain_core::{GenerateRequestBuilder, ImageArtifact, strip_punctuation};
use thirdbrain_error::{PipelineError, PipelineErrorKind, ThirdBrainResult};
use thirdbrain_interface::{ProgressSink as _, TextGenerator as _};
use thirdbrain_store::{ArtifactRecord, ArtifactStore as _, EbookRecord, Fields, Section};

/// Vault folder and store collection for e-books.
const COLLECTION: &str = "ebooks";

/// Which section of an e-book art is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EbookSection {
    /// The cover, drawn from the outline
    Cover,
    /// One chapter, drawn from its manuscript text
    Chapter(u32),
}

impl EbookSection {
    /// Display label, also the vault folder and field-name root.
    pub fn label(&self) -> String {
        match self {
            EbookSection::Cover => "Cover".to_string(),
            EbookSection::Chapter(number) => format!("Chapter {number}"),
        }
    }
}

/// Everything one section-art run produced.
#[derive(Debug, Clone)]
pub struct SectionArtOutcome {
    /// The section the art belongs to
    pub label: String,
    /// The derived image prompt
    pub prompt: String,
    /// Durable locations of the uploaded images, in production order
    pub asset_urls: Vec<String>,
    /// Decoded images for immediate display
    pub artifacts: Vec<ImageArtifact>,
}

/// Drives the multi-step e-book pipeline.
///
/// Steps are user-paced (a title today, chapters over the following weeks),
/// so every method loads current state from the artifact store rather than
/// holding it in memory.
pub struct EbookWriter {
    ctx: Arc<PipelineContext>,
}

impl EbookWriter {
    /// Create a writer over the shared context.
    pub fn new(ctx: Arc<PipelineContext>) -> Self {
        Self { ctx }
    }

    /// Titles of every e-book on record.
    pub async fn all_titles(&self) -> ThirdBrainResult<Vec<String>> {
        let mut records = self.ctx.store.fetch_all(COLLECTION).await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records.into_iter().map(|r| r.key).collect())
    }

    /// The typed view of one e-book.
    pub async fn load(&self, title: &str) -> ThirdBrainResult<EbookRecord> {
        let record = self.ctx.store.get(COLLECTION, title).await?;
        EbookRecord::from_record(&record)
    }

    /// Brainstorm a title for a topic and record it.
    ///
    /// The returned title has prompt decoration (quotes, colons, question
    /// marks) stripped, and a record keyed by it is created with the target
    /// audience attached.
    #[tracing::instrument(skip(self))]
    pub async fn new_ebook(&self, topic: &str, target_audience: &str) -> ThirdBrainResult<String> {
        self.ctx.sink.info("Brainstorming title options...");
        let req = GenerateRequestBuilder::default()
            .messages(prompts::ebook_title(topic, target_audience))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("ebook title", || self.ctx.text.generate(&req))
            .await?;

        let title = strip_punctuation(&response.content);
        if title.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyCompletion(
                "ebook title".to_string(),
            ))
            .into());
        }

        let record =
            ArtifactRecord::new(&title).with_field("target_audience", target_audience);
        let inserted = self.ctx.store.insert_if_absent(COLLECTION, record).await?;
        if !inserted {
            // A rare title collision keeps the existing book; only the
            // audience field refreshes.
            let mut updates = Fields::new();
            updates.insert("target_audience".to_string(), target_audience.into());
            self.ctx.store.update(COLLECTION, &title, updates).await?;
        }

        self.ctx.sink.success(&title);
        Ok(title)
    }

    /// Write the table of contents for a recorded title.
    ///
    /// # Errors
    ///
    /// Returns the store's not-found error when the title has no record.
    #[tracing::instrument(skip(self, topic, target_audience))]
    pub async fn outline(
        &self,
        title: &str,
        topic: &str,
        target_audience: &str,
    ) -> ThirdBrainResult<String> {
        self.ctx.sink.info("Writing book outline...");
        let req = GenerateRequestBuilder::default()
            .messages(prompts::ebook_outline(title, topic, target_audience))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("ebook outline", || self.ctx.text.generate(&req))
            .await?;

        let mut updates = Fields::new();
        updates.insert("outline".to_string(), response.content.clone().into());
        updates.insert("target_audience".to_string(), target_audience.into());
        self.ctx.store.update(COLLECTION, title, updates).await?;

        self.ctx.sink.success("Table of contents is ready!");
        Ok(response.content)
    }

    /// Write the next chapter from a section heading of the outline.
    ///
    /// Returns the chapter number and manuscript text.
    ///
    /// # Errors
    ///
    /// Returns `MissingOutline` when no outline is recorded for the title.
    #[tracing::instrument(skip(self, section_heading))]
    pub async fn write_chapter(
        &self,
        title: &str,
        section_heading: &str,
    ) -> ThirdBrainResult<(u32, String)> {
        let mut ebook = self.load(title).await?;
        let outline = ebook.outline.clone().ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::MissingOutline(title.to_string()))
        })?;
        let audience = ebook.target_audience.clone().unwrap_or_default();

        self.ctx.sink.info("Writing the chapter...");
        let req = GenerateRequestBuilder::default()
            .messages(prompts::ebook_chapter(&outline, section_heading, &audience))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("write chapter", || self.ctx.long_text.generate(&req))
            .await?;

        if response.content.trim().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyCompletion(
                "write chapter".to_string(),
            ))
            .into());
        }

        let number = ebook.next_chapter_number();
        ebook.chapters.push(thirdbrain_store::Chapter {
            number,
            text: response.content.clone(),
            art: Section::default(),
        });
        self.ctx
            .store
            .update(COLLECTION, title, ebook.to_fields())
            .await?;

        self.ctx.sink.success(&format!("Chapter {number} written!"));
        Ok((number, response.content))
    }

    /// Generate and attach artwork for the cover or one chapter.
    ///
    /// The image prompt derives from the outline (cover) or the chapter's
    /// manuscript text; images land under `ebooks/{title}/{label}/` and
    /// their links are merged into the record.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSection` for a chapter that has not been written and
    /// `MissingOutline` for a cover with no outline.
    #[tracing::instrument(skip(self, params))]
    pub async fn section_art(
        &self,
        title: &str,
        section: EbookSection,
        params: &ArtParams,
    ) -> ThirdBrainResult<SectionArtOutcome> {
        let mut ebook = self.load(title).await?;
        let label = section.label();

        let source_text = match section {
            EbookSection::Cover => ebook.outline.clone().ok_or_else(|| {
                PipelineError::new(PipelineErrorKind::MissingOutline(title.to_string()))
            })?,
            EbookSection::Chapter(number) => ebook
                .chapters
                .iter()
                .find(|c| c.number == number)
                .map(|c| c.text.clone())
                .ok_or_else(|| {
                    PipelineError::new(PipelineErrorKind::UnknownSection(label.clone()))
                })?,
        };

        let prompt = self.image_prompt(&source_text).await?;
        let artifacts = gather_images(&self.ctx, &prompt, params).await;

        let folder = format!("{COLLECTION}/{title}/{label}");
        let asset_urls = persist_bundle(&self.ctx, &folder, &label, None, &artifacts).await?;

        let art = Section {
            prompt: Some(prompt.clone()),
            asset_urls: asset_urls.clone(),
        };
        match section {
            EbookSection::Cover => ebook.cover = art,
            EbookSection::Chapter(number) => {
                if let Some(chapter) = ebook.chapters.iter_mut().find(|c| c.number == number) {
                    chapter.art = art;
                }
            }
        }
        self.ctx
            .store
            .update(COLLECTION, title, ebook.to_fields())
            .await?;

        self.ctx.sink.success(&format!("{label} art ready!"));
        Ok(SectionArtOutcome {
            label,
            prompt,
            asset_urls,
            artifacts,
        })
    }

    async fn image_prompt(&self, source_text: &str) -> ThirdBrainResult<String> {
        self.ctx.sink.info("Creating prompt for the images...");
        let req = GenerateRequestBuilder::default()
            .messages(prompts::art_prompt(source_text))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("image prompt", || self.ctx.text.generate(&req))
            .await?;
        Ok(response.content)
    }
}
