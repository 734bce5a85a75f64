//! Core data types for the Third Brain content-generation library.
//!
//! This crate provides the foundation data types used across all Third Brain
//! interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod message;
mod request;
mod role;
mod subject;
mod telemetry;

pub use image::{ImageArtifact, ImageRequest, ImageRequestBuilder};
pub use message::{Message, MessageBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use subject::{SubjectLedger, normalize_subject, strip_punctuation};
pub use telemetry::init_telemetry;
