//! Third Brain - AI content-generation toolkit
//!
//! Third Brain orchestrates hosted generative services into four content
//! pipelines (book summaries, artwork, e-book manuscripts, and music
//! playlists), persisting results into a blob vault plus a key-value
//! artifact store and serving gallery views of everything generated.
//!
//! # Features
//!
//! - **Bounded retry**: every external call runs under a fixed attempt
//!   budget with a fixed delay and an explicit exhaustion error
//! - **Vendor-neutral seams**: pipelines depend on `TextGenerator`,
//!   `ImageGenerator`, and `MusicService` traits, not on any SDK
//! - **Partial-field persistence**: artifact records grow incrementally as
//!   chapters, prompts, and cover art accumulate
//! - **Idempotent galleries**: a batch import converges vault content into
//!   the store; listings are pure reads
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use thirdbrain::{
//!     ArtParams, BookSummarizer, FileSystemVault, JsonFileStore, OpenAiImageClient,
//!     OpenAiTextClient, PipelineContext, ServiceSettings, StabilityImageClient, SubjectLedger,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     dotenvy::dotenv().ok();
//!     let settings = ServiceSettings::load()?;
//!
//!     let ctx = PipelineContext::new(
//!         Arc::new(OpenAiTextClient::new(&settings.text)?),
//!         Arc::new(OpenAiImageClient::new(&settings.images)?),
//!         Arc::new(StabilityImageClient::new(&settings.stability)?),
//!         Arc::new(FileSystemVault::new("./vault")?),
//!         Arc::new(JsonFileStore::new("./store")?),
//!     );
//!
//!     let summarizer = BookSummarizer::new(Arc::new(ctx));
//!     let ledger = summarizer.used_subjects().await?;
//!     let outcome = summarizer.run(None, &ledger, &ArtParams::default()).await?;
//!     println!("{}\n\n{}", outcome.subject, outcome.summary);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Third Brain is organized as a workspace with focused crates:
//!
//! - `thirdbrain_core` - Core data types (messages, requests, subjects)
//! - `thirdbrain_interface` - Service adapter traits and the progress seam
//! - `thirdbrain_error` - Error types
//! - `thirdbrain_retry` - The bounded-retry invoker
//! - `thirdbrain_storage` - Blob vault abstraction and filesystem backend
//! - `thirdbrain_store` - Key-value artifact store with merge updates
//! - `thirdbrain_models` - Hosted-API adapters
//! - `thirdbrain_pipeline` - The generation pipelines
//! - `thirdbrain_gallery` - Import and listing of stored content
//!
//! This crate (`thirdbrain`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use thirdbrain_core::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, ImageArtifact, ImageRequest,
    ImageRequestBuilder, Message, Role, SubjectLedger, init_telemetry, normalize_subject,
    strip_punctuation,
};
pub use thirdbrain_error::{
    ThirdBrainError, ThirdBrainErrorKind, ThirdBrainResult,
};
pub use thirdbrain_gallery::{ContentGallery, GalleryEntry, caption_for, column_layout};
pub use thirdbrain_interface::{
    ImageGenerator, MusicService, NullSink, PlaylistRef, PlaylistSummary, ProgressEvent,
    ProgressSink, Severity, TextGenerator, TracingSink, TrackHit,
};
pub use thirdbrain_models::{
    ImagesSettings, MusicSettings, OpenAiImageClient, OpenAiTextClient, ServiceSettings,
    SpotifyClient, StabilityImageClient, StabilitySettings, TextSettings,
};
pub use thirdbrain_pipeline::{
    ArtGenerator, ArtOutcome, ArtParams, BookSummarizer, EbookSection, EbookWriter,
    PipelineContext, PlaylistEntry, PlaylistMixer, SectionArtOutcome, SubjectPicker,
    SummaryOutcome,
};
pub use thirdbrain_retry::{Invoker, RetryConfig};
pub use thirdbrain_storage::{EntryKind, FileSystemVault, Vault, VaultEntry};
pub use thirdbrain_store::{
    ArtifactRecord, ArtifactStore, Chapter, EbookRecord, FieldValue, Fields, JsonFileStore,
    MemoryStore, Section, UserRecord, UserRegistry,
};
