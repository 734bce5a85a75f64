//! Hosted-API adapters for Third Brain.
//!
//! Each submodule wraps one vendor API behind the corresponding
//! `thirdbrain_interface` trait: an OpenAI-style chat-completion service, an
//! OpenAI-style image endpoint (the high-fidelity few-image provider), a
//! Stability-style engines endpoint (the configurable multi-image provider),
//! and a Spotify-style music service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;
mod settings;
mod spotify;
mod stability;

pub use openai::{OpenAiImageClient, OpenAiTextClient};
pub use settings::{
    ImagesSettings, MusicSettings, ServiceSettings, StabilitySettings, TextSettings,
};
pub use spotify::SpotifyClient;
pub use stability::StabilityImageClient;
