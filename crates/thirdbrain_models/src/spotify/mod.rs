//! Spotify-style music service adapter.

mod client;
mod dto;

pub use client::SpotifyClient;
