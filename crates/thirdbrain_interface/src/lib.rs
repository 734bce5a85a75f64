//! Trait definitions for the external services Third Brain orchestrates.
//!
//! Every hosted API the pipelines call (text generation, image generation,
//! music streaming) is reached through a trait defined here, so pipelines
//! stay vendor-neutral and tests can substitute scripted fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod progress;
mod traits;
mod types;

pub use progress::{NullSink, ProgressEvent, ProgressSink, Severity, TracingSink};
pub use traits::{ImageGenerator, MusicService, TextGenerator};
pub use types::{PlaylistRef, PlaylistSummary, TrackHit};
