//! Spotify-style music service client.

use crate::settings::{MusicSettings, require_env};
use crate::spotify::dto::{
    AddTracksRequest, CreatePlaylistRequest, MeResponse, PlaylistPage, RecommendationsResponse,
    SearchResponse, WirePlaylist,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thirdbrain_error::{ModelsError, ModelsErrorKind, ThirdBrainResult};
use thirdbrain_interface::{MusicService, PlaylistRef, TrackHit};
use tracing::{debug, instrument};

/// Music service client speaking a Spotify-style web API.
///
/// Authentication happens upstream; the client carries a ready bearer token
/// (`SPOTIFY_ACCESS_TOKEN` when constructed from the environment).
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl SpotifyClient {
    /// Creates a client from service settings and the
    /// `SPOTIFY_ACCESS_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not set in the environment.
    #[instrument(skip_all)]
    pub fn new(settings: &MusicSettings) -> ThirdBrainResult<Self> {
        let access_token = require_env("SPOTIFY_ACCESS_TOKEN")?;
        Ok(Self::with_access_token(access_token, settings))
    }

    /// Creates a client with a specific bearer token.
    pub fn with_access_token(access_token: String, settings: &MusicSettings) -> Self {
        Self {
            client: Client::new(),
            access_token,
            base_url: settings.base_url.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ThirdBrainResult<T> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ModelsError::new(ModelsErrorKind::Api { status, message }).into());
        }

        response
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::UnexpectedResponse(e.to_string())).into())
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> ThirdBrainResult<T> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ModelsError::new(ModelsErrorKind::Api { status, message }).into());
        }

        response
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::UnexpectedResponse(e.to_string())).into())
    }

    async fn current_user_id(&self) -> ThirdBrainResult<String> {
        let me: MeResponse = self.get_json(&format!("{}/me", self.base_url)).await?;
        Ok(me.id)
    }
}

#[async_trait]
impl MusicService for SpotifyClient {
    #[instrument(skip(self))]
    async fn search_tracks(&self, query: &str, limit: u32) -> ThirdBrainResult<Vec<TrackHit>> {
        let url = format!(
            "{}/search?q={}&type=track&limit={}",
            self.base_url,
            urlencode(query),
            limit
        );
        let parsed: SearchResponse = self.get_json(&url).await?;
        Ok(parsed.tracks.items.into_iter().map(TrackHit::from).collect())
    }

    #[instrument(skip(self))]
    async fn create_playlist(&self, name: &str, public: bool) -> ThirdBrainResult<PlaylistRef> {
        let user_id = self.current_user_id().await?;
        let url = format!("{}/users/{}/playlists", self.base_url, user_id);
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            public,
        };
        let created: WirePlaylist = self.post_json(&url, &body).await?;
        debug!(playlist = %created.id, "Created playlist");
        Ok(created.into())
    }

    #[instrument(skip(self, track_ids), fields(count = track_ids.len()))]
    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> ThirdBrainResult<()> {
        let url = format!("{}/playlists/{}/tracks", self.base_url, playlist_id);
        let body = AddTracksRequest {
            uris: track_ids
                .iter()
                .map(|id| format!("spotify:track:{id}"))
                .collect(),
        };
        let _: serde_json::Value = self.post_json(&url, &body).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn current_user_playlists(&self) -> ThirdBrainResult<Vec<PlaylistRef>> {
        let mut playlists = Vec::new();
        let mut next = Some(format!("{}/me/playlists?limit=50", self.base_url));

        // Follow pagination until the service reports no further page.
        while let Some(url) = next {
            let page: PlaylistPage = self.get_json(&url).await?;
            playlists.extend(page.items.into_iter().map(PlaylistRef::from));
            next = page.next;
        }

        Ok(playlists)
    }

    #[instrument(skip(self))]
    async fn recommendations(&self, seed_track_id: &str) -> ThirdBrainResult<Vec<TrackHit>> {
        let url = format!(
            "{}/recommendations?seed_tracks={}",
            self.base_url,
            urlencode(seed_track_id)
        );
        let parsed: RecommendationsResponse = self.get_json(&url).await?;
        Ok(parsed.tracks.into_iter().map(TrackHit::from).collect())
    }
}

/// Percent-encode a query component.
fn urlencode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
