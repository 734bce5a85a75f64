//! Stability-style engines API adapter.

mod client;
mod dto;

pub use client::StabilityImageClient;
