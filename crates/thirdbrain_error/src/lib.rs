//! Error types for the Third Brain library.
//!
//! This crate provides the foundation error types used throughout the
//! Third Brain ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use thirdbrain_error::{ThirdBrainResult, HttpError};
//!
//! fn fetch_data() -> ThirdBrainResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod retry;
mod vault;
mod store;
mod models;
mod pipeline;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use retry::{RetryError, RetryErrorKind};
pub use vault::{VaultError, VaultErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use models::{ModelsError, ModelsErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use error::{ThirdBrainError, ThirdBrainErrorKind, ThirdBrainResult};
