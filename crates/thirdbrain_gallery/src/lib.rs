//! Content gallery for Third Brain.
//!
//! Two explicit operations replace the source's dual-purpose render pass:
//! an idempotent [`ContentGallery::import`] that batch-copies vault content
//! into the artifact store, and a pure read-only [`ContentGallery::list`]
//! over the store. Pipelines call `import` once per generation; rendering
//! surfaces call `list` and never write.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gallery;
mod layout;

pub use gallery::{ContentGallery, GalleryEntry};
pub use layout::{caption_for, column_layout};
