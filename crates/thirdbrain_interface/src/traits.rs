//! Trait definitions for generative and streaming service adapters.

use crate::{PlaylistRef, TrackHit};
use async_trait::async_trait;
use thirdbrain_core::{GenerateRequest, GenerateResponse, ImageArtifact, ImageRequest};
use thirdbrain_error::ThirdBrainResult;

/// Core trait for text-generation backends.
///
/// The pipelines depend only on this shape, an ordered sequence of
/// role-tagged messages in and one completion out, not on any specific vendor.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate one completion for a structured multi-turn prompt.
    async fn generate(&self, req: &GenerateRequest) -> ThirdBrainResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}

/// Trait for image-generation backends.
///
/// Two independently invoked flavors exist in practice: a high-fidelity
/// few-image service and a configurable multi-image service. Both fit this
/// trait; providers ignore request parameters they have no equivalent for.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one or more images for a text prompt.
    ///
    /// Returns decoded artifacts in production order.
    async fn generate_images(&self, req: &ImageRequest) -> ThirdBrainResult<Vec<ImageArtifact>>;

    /// Provider name, also used as the file-name label for persisted images.
    fn provider_name(&self) -> &'static str;

    /// Maximum number of images per request.
    fn max_samples(&self) -> u32 {
        10
    }
}

/// Trait for music-streaming backends.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// Search tracks by free-form query, best matches first.
    async fn search_tracks(&self, query: &str, limit: u32) -> ThirdBrainResult<Vec<TrackHit>>;

    /// Create a playlist for the current user.
    async fn create_playlist(&self, name: &str, public: bool) -> ThirdBrainResult<PlaylistRef>;

    /// Append tracks to an existing playlist.
    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> ThirdBrainResult<()>;

    /// List every playlist of the current user, following pagination.
    async fn current_user_playlists(&self) -> ThirdBrainResult<Vec<PlaylistRef>>;

    /// Recommend tracks seeded from one track.
    async fn recommendations(&self, seed_track_id: &str) -> ThirdBrainResult<Vec<TrackHit>>;
}
