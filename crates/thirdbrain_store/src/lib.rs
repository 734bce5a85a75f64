//! Key-value artifact persistence for Third Brain.
//!
//! Generated content is recorded as [`ArtifactRecord`]s: a unique key plus
//! a mapping of named fields, grown incrementally as chapters, prompts, and
//! cover art accumulate. Updates are field-level merges, never full
//! overwrites, and every backend serializes writers per collection so
//! concurrent merges cannot drop fields.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ebook;
mod file;
mod memory;
mod record;
mod store;
mod users;

pub use ebook::{Chapter, EbookRecord, Section};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{ArtifactRecord, FieldValue, Fields};
pub use store::ArtifactStore;
pub use users::{UserRecord, UserRegistry};
