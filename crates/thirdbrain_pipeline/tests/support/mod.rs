//! Scripted fakes shared by the pipeline tests.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use thirdbrain_core::{GenerateRequest, GenerateResponse, ImageArtifact, ImageRequest};
use thirdbrain_error::{ModelsError, ModelsErrorKind, ThirdBrainResult, VaultError, VaultErrorKind};
use thirdbrain_interface::{
    ImageGenerator, MusicService, PlaylistRef, TextGenerator, TrackHit,
};
use thirdbrain_storage::{EntryKind, Vault, VaultEntry};

/// Text generator that replays a fixed sequence of completions.
pub struct ScriptedText {
    responses: Mutex<Vec<String>>,
    pub requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedText {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut responses: Vec<String> = responses.into_iter().map(Into::into).collect();
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedText {
    async fn generate(&self, req: &GenerateRequest) -> ThirdBrainResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let content = self
            .responses
            .lock()
            .unwrap()
            .pop()
            .expect("scripted text ran out of responses");
        Ok(GenerateResponse { content })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

/// Image generator producing `count` single-byte images per call.
pub struct FakeImages {
    provider: &'static str,
    count: u32,
    pub fail: bool,
}

impl FakeImages {
    pub fn new(provider: &'static str, count: u32) -> Self {
        Self {
            provider,
            count,
            fail: false,
        }
    }

    pub fn failing(provider: &'static str) -> Self {
        Self {
            provider,
            count: 0,
            fail: true,
        }
    }
}

#[async_trait]
impl ImageGenerator for FakeImages {
    async fn generate_images(&self, req: &ImageRequest) -> ThirdBrainResult<Vec<ImageArtifact>> {
        if self.fail {
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: 503,
                message: "image service down".to_string(),
            })
            .into());
        }
        Ok((0..req.samples.min(self.count))
            .map(|i| ImageArtifact::new(self.provider, "image/png", vec![i as u8]))
            .collect())
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }
}

/// In-memory vault with scriptable upload failures.
#[derive(Default)]
pub struct MemoryVault {
    files: Mutex<HashMap<String, Vec<u8>>>,
    folders: Mutex<HashSet<String>>,
    links: Mutex<HashMap<String, String>>,
    fail_upload_containing: Mutex<Vec<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make uploads whose path contains `marker` fail.
    pub fn fail_uploads_containing(&self, marker: impl Into<String>) {
        self.fail_upload_containing.lock().unwrap().push(marker.into());
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

#[async_trait]
impl Vault for MemoryVault {
    async fn create_folder(&self, path: &str) -> ThirdBrainResult<()> {
        self.folders.lock().unwrap().insert(path.to_string());
        Ok(())
    }

    async fn exists(&self, path: &str) -> ThirdBrainResult<bool> {
        Ok(self.files.lock().unwrap().contains_key(path)
            || self.folders.lock().unwrap().contains(path))
    }

    async fn upload(&self, path: &str, data: &[u8]) -> ThirdBrainResult<()> {
        let blocked = self
            .fail_upload_containing
            .lock()
            .unwrap()
            .iter()
            .any(|marker| path.contains(marker));
        if blocked {
            return Err(
                VaultError::new(VaultErrorKind::FileWrite(format!("{path}: disk full"))).into(),
            );
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn download(&self, path: &str) -> ThirdBrainResult<Vec<u8>> {
        self.file(path)
            .ok_or_else(|| VaultError::new(VaultErrorKind::NotFound(path.to_string())).into())
    }

    async fn list_folder(&self, path: &str, recursive: bool) -> ThirdBrainResult<Vec<VaultEntry>> {
        let prefix = format!("{path}/");
        let mut entries = Vec::new();

        for folder in self.folders.lock().unwrap().iter() {
            if let Some(rest) = folder.strip_prefix(&prefix) {
                if recursive || !rest.contains('/') {
                    entries.push(VaultEntry::new(folder.clone(), EntryKind::Folder));
                }
            }
        }
        for file in self.files.lock().unwrap().keys() {
            if let Some(rest) = file.strip_prefix(&prefix) {
                if recursive || !rest.contains('/') {
                    entries.push(VaultEntry::new(file.clone(), EntryKind::File));
                }
            }
        }

        entries.sort();
        Ok(entries)
    }

    async fn resolve_link(&self, path: &str) -> ThirdBrainResult<String> {
        if !self.files.lock().unwrap().contains_key(path) {
            return Err(VaultError::new(VaultErrorKind::NotFound(path.to_string())).into());
        }
        let mut links = self.links.lock().unwrap();
        if let Some(existing) = links.get(path) {
            return Ok(existing.clone());
        }
        let url = format!("vault://test/{path}");
        links.insert(path.to_string(), url.clone());
        Ok(url)
    }

    async fn list_links(&self, path: &str) -> ThirdBrainResult<Vec<String>> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .into_iter()
            .collect())
    }

    async fn delete(&self, path: &str) -> ThirdBrainResult<()> {
        self.files.lock().unwrap().remove(path);
        self.folders.lock().unwrap().remove(path);
        Ok(())
    }
}

/// Music service with canned search results and recorded writes.
#[derive(Default)]
pub struct FakeMusic {
    /// Hits returned per search call, consumed in order; empty means no hits.
    pub search_results: Mutex<Vec<Vec<TrackHit>>>,
    pub added: Mutex<Vec<(String, Vec<String>)>>,
    pub created: Mutex<Vec<String>>,
}

impl FakeMusic {
    pub fn new(search_results: Vec<Vec<TrackHit>>) -> Self {
        let mut search_results = search_results;
        search_results.reverse();
        Self {
            search_results: Mutex::new(search_results),
            ..Self::default()
        }
    }

    pub fn hit(id: &str, name: &str, artist: &str, popularity: u8) -> TrackHit {
        TrackHit {
            id: id.to_string(),
            name: name.to_string(),
            artist: artist.to_string(),
            popularity,
        }
    }
}

#[async_trait]
impl MusicService for FakeMusic {
    async fn search_tracks(&self, _query: &str, _limit: u32) -> ThirdBrainResult<Vec<TrackHit>> {
        Ok(self
            .search_results
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_default())
    }

    async fn create_playlist(&self, name: &str, _public: bool) -> ThirdBrainResult<PlaylistRef> {
        self.created.lock().unwrap().push(name.to_string());
        Ok(PlaylistRef {
            id: "playlist-1".to_string(),
            name: name.to_string(),
            url: Some("https://music.example/playlist-1".to_string()),
        })
    }

    async fn add_tracks(&self, playlist_id: &str, track_ids: &[String]) -> ThirdBrainResult<()> {
        self.added
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), track_ids.to_vec()));
        Ok(())
    }

    async fn current_user_playlists(&self) -> ThirdBrainResult<Vec<PlaylistRef>> {
        Ok(Vec::new())
    }

    async fn recommendations(&self, _seed_track_id: &str) -> ThirdBrainResult<Vec<TrackHit>> {
        Ok(vec![Self::hit("rec-1", "Recommended", "Someone", 80)])
    }
}
