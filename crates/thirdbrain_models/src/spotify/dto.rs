//! Wire types for the Spotify-style API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thirdbrain_interface::{PlaylistRef, TrackHit};

/// Track search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

/// One page of tracks.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<WireTrack>,
}

/// One track object.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub artists: Vec<WireArtist>,
}

impl From<WireTrack> for TrackHit {
    fn from(track: WireTrack) -> Self {
        let artist = track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default();
        TrackHit {
            id: track.id,
            name: track.name,
            artist,
            popularity: track.popularity,
        }
    }
}

/// One artist object.
#[derive(Debug, Clone, Deserialize)]
pub struct WireArtist {
    pub name: String,
}

/// Current-user profile response.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub id: String,
}

/// Playlist creation request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

/// One playlist object.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}

impl From<WirePlaylist> for PlaylistRef {
    fn from(playlist: WirePlaylist) -> Self {
        let url = playlist.external_urls.get("spotify").cloned();
        PlaylistRef {
            id: playlist.id,
            name: playlist.name,
            url,
        }
    }
}

/// One page of playlists, with a follow link.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<WirePlaylist>,
    pub next: Option<String>,
}

/// Track append request body.
#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

/// Recommendations response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<WireTrack>,
}
