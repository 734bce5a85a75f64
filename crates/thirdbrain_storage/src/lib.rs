//! Blob vault abstraction for Third Brain.
//!
//! Generated artifacts live in a hierarchical blob store: one folder per
//! subject, a text file plus numbered images inside. The [`Vault`] trait
//! covers the operations the pipelines and gallery need; the bundled
//! [`FileSystemVault`] serves development and tests, while remote backends
//! implement the same trait against their hosted APIs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entry;
mod filesystem;
mod vault;

pub use entry::{EntryKind, VaultEntry};
pub use filesystem::FileSystemVault;
pub use vault::Vault;
