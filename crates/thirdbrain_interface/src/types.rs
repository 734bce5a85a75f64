//! Shared types for the music-service seam.

use serde::{Deserialize, Serialize};

/// One track returned by a search or recommendation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackHit {
    /// Provider track id
    pub id: String,
    /// Track title
    pub name: String,
    /// Primary artist name
    pub artist: String,
    /// Provider popularity score (0-100)
    pub popularity: u8,
}

/// A playlist handle on the music service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRef {
    /// Provider playlist id
    pub id: String,
    /// Playlist display name
    pub name: String,
    /// Public URL of the playlist, when the provider exposes one
    pub url: Option<String>,
}

/// Outcome of a playlist-generation pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// The created playlist
    pub playlist: PlaylistRef,
    /// Tracks added, in playlist order
    pub added: Vec<TrackHit>,
    /// Requested songs no acceptable track was found for
    pub skipped: Vec<String>,
}
