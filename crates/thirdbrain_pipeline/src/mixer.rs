//! Playlist generation pipeline.

use crate::context::PipelineContext;
use crate::prompts;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thirdbrain_core::GenerateRequestBuilder;
use thirdbrain_error::{PipelineError, PipelineErrorKind, ThirdBrainResult};
use thirdbrain_interface::{
    MusicService, PlaylistRef, PlaylistSummary, ProgressSink as _, TextGenerator as _, TrackHit,
};

/// One requested song, as returned by the text service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Song title
    pub song: String,
    /// Artist name
    pub artist: String,
}

/// Generates a playlist from a description and materializes it on the music
/// service.
pub struct PlaylistMixer {
    ctx: Arc<PipelineContext>,
    music: Arc<dyn MusicService>,
}

impl PlaylistMixer {
    /// Create a mixer over the shared context and a music service.
    pub fn new(ctx: Arc<PipelineContext>, music: Arc<dyn MusicService>) -> Self {
        Self { ctx, music }
    }

    /// Ask the text service for `count` songs matching `description`.
    ///
    /// # Errors
    ///
    /// Returns `PlaylistParse` when the completion is not a JSON array of
    /// `{song, artist}` objects.
    #[tracing::instrument(skip(self))]
    pub async fn generate_entries(
        &self,
        description: &str,
        count: u32,
    ) -> ThirdBrainResult<Vec<PlaylistEntry>> {
        let req = GenerateRequestBuilder::default()
            .messages(prompts::playlist(description, count))
            .max_tokens(Some(400))
            .build()
            .expect("defaulted request builder cannot fail");

        let response = self
            .ctx
            .invoker
            .invoke("generate playlist", || self.ctx.text.generate(&req))
            .await?;

        let entries = parse_entries(&response.content)?;
        self.ctx.sink.success("Songs selected!");
        Ok(entries)
    }

    /// Run the pipeline end-to-end.
    ///
    /// Each requested song is searched with an advanced query
    /// (`artist:(A) track:(T)`) falling back to a basic one; the first hit
    /// meeting `popularity` is kept and songs with no acceptable hit are
    /// skipped. The collected tracks land in a new private playlist named
    /// `"{name} ({timestamp})"`.
    #[tracing::instrument(skip(self, description), fields(count))]
    pub async fn run(
        &self,
        description: &str,
        count: u32,
        name: &str,
        popularity: u8,
    ) -> ThirdBrainResult<PlaylistSummary> {
        let entries = self.generate_entries(description, count).await?;

        let mut added: Vec<TrackHit> = Vec::new();
        let mut skipped = Vec::new();

        for entry in &entries {
            match self.find_track(entry, popularity).await? {
                Some(hit) => {
                    self.ctx
                        .sink
                        .success(&format!("Found: {} [{}]", hit.name, hit.id));
                    added.push(hit);
                }
                None => {
                    self.ctx.sink.info(&format!(
                        "No good results for {} by {}. Skipping.",
                        entry.song, entry.artist
                    ));
                    skipped.push(format!("{} by {}", entry.song, entry.artist));
                }
            }
        }

        let stamped = format!("{} ({})", name, chrono::Local::now().format("%c"));
        let playlist = self.music.create_playlist(&stamped, false).await?;

        let track_ids: Vec<String> = added.iter().map(|hit| hit.id.clone()).collect();
        if !track_ids.is_empty() {
            self.music.add_tracks(&playlist.id, &track_ids).await?;
        }

        self.ctx
            .sink
            .success(&format!("Created playlist: {}", playlist.name));
        if let Some(url) = &playlist.url {
            self.ctx.sink.success(url);
        }

        Ok(PlaylistSummary {
            playlist,
            added,
            skipped,
        })
    }

    /// The current user's playlists, pagination followed by the adapter.
    pub async fn user_playlists(&self) -> ThirdBrainResult<Vec<PlaylistRef>> {
        self.music.current_user_playlists().await
    }

    /// Recommendations seeded from the best search hit for `track_name`.
    ///
    /// # Errors
    ///
    /// Returns `TrackNotFound` when the search comes back empty.
    #[tracing::instrument(skip(self))]
    pub async fn recommendations(&self, track_name: &str) -> ThirdBrainResult<Vec<TrackHit>> {
        let hits = self.music.search_tracks(track_name, 1).await?;
        let seed = hits.into_iter().next().ok_or_else(|| {
            PipelineError::new(PipelineErrorKind::TrackNotFound(track_name.to_string()))
        })?;
        self.music.recommendations(&seed.id).await
    }

    /// First acceptable hit for one requested song.
    async fn find_track(
        &self,
        entry: &PlaylistEntry,
        popularity: u8,
    ) -> ThirdBrainResult<Option<TrackHit>> {
        let advanced = format!("artist:({}) track:({})", entry.artist, entry.song);
        let basic = format!("{} {}", entry.song, entry.artist);

        for query in [advanced, basic] {
            self.ctx.sink.info(&format!("Searching: {query}"));
            let hits = self.music.search_tracks(&query, 10).await?;
            match hits.into_iter().next() {
                Some(hit) if hit.popularity >= popularity => return Ok(Some(hit)),
                _ => continue,
            }
        }
        Ok(None)
    }
}

/// Parse the completion into playlist entries.
///
/// Tolerates prose or code fences around the array by parsing the outermost
/// bracketed slice.
fn parse_entries(content: &str) -> ThirdBrainResult<Vec<PlaylistEntry>> {
    let start = content.find('[');
    let end = content.rfind(']');
    let slice = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => {
            return Err(PipelineError::new(PipelineErrorKind::PlaylistParse(
                "no JSON array in completion".to_string(),
            ))
            .into());
        }
    };

    serde_json::from_str(slice)
        .map_err(|e| PipelineError::new(PipelineErrorKind::PlaylistParse(e.to_string())).into())
}
