//! Generation pipelines for Third Brain.
//!
//! Every content type (book summary, artwork, e-book, playlist) follows
//! the same shape: build a structured prompt, call the generative service
//! through the bounded-retry invoker, post-process, persist to the vault and
//! the artifact store, and return the result for display. The pipelines here
//! are that shape instantiated per content type, sharing one
//! [`PipelineContext`] carrying the service adapters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artist;
mod context;
mod mixer;
mod persist;
mod prompts;
mod subject;
mod summarizer;
mod writer;

pub use artist::{ArtGenerator, ArtOutcome};
pub use context::{ArtParams, PipelineContext};
pub use mixer::{PlaylistEntry, PlaylistMixer};
pub use subject::SubjectPicker;
pub use summarizer::{BookSummarizer, SummaryOutcome};
pub use writer::{EbookSection, EbookWriter, SectionArtOutcome};
