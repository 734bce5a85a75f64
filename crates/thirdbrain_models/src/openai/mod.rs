//! OpenAI-style API adapters: chat completions and the image endpoint.

mod client;
mod dto;
mod images;

pub use client::OpenAiTextClient;
pub use images::OpenAiImageClient;
