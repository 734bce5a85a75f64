//! Stability-style text-to-image client (the configurable multi-image provider).

use crate::settings::{StabilitySettings, require_env};
use crate::stability::dto::{TextPrompt, TextToImageRequest, TextToImageResponse};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use thirdbrain_core::{ImageArtifact, ImageRequest};
use thirdbrain_error::{ModelsError, ModelsErrorKind, ThirdBrainResult};
use thirdbrain_interface::ImageGenerator;
use tracing::{debug, instrument};

/// Text-to-image client for a Stability-style engines API.
///
/// Honors the full parameter set of [`ImageRequest`]: sample count,
/// dimensions, step budget, guidance scale, and engine identifier.
#[derive(Debug, Clone)]
pub struct StabilityImageClient {
    client: Client,
    api_key: String,
    base_url: String,
    default_engine: String,
    clip_guidance_preset: String,
}

impl StabilityImageClient {
    /// Creates a client from service settings and the `STABILITY_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set in the environment.
    #[instrument(skip_all)]
    pub fn new(settings: &StabilitySettings) -> ThirdBrainResult<Self> {
        let api_key = require_env("STABILITY_API_KEY")?;
        Ok(Self::with_api_key(api_key, settings))
    }

    /// Creates a client with a specific API key.
    pub fn with_api_key(api_key: String, settings: &StabilitySettings) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: settings.base_url.clone(),
            default_engine: settings.engine.clone(),
            clip_guidance_preset: settings.clip_guidance_preset.clone(),
        }
    }
}

#[async_trait]
impl ImageGenerator for StabilityImageClient {
    #[instrument(skip(self, req), fields(samples = req.samples, engine = %req.engine))]
    async fn generate_images(&self, req: &ImageRequest) -> ThirdBrainResult<Vec<ImageArtifact>> {
        let engine = if req.engine.is_empty() {
            &self.default_engine
        } else {
            &req.engine
        };
        let url = format!("{}/v1/generation/{}/text-to-image", self.base_url, engine);
        let body = TextToImageRequest {
            text_prompts: vec![TextPrompt {
                text: req.prompt.clone(),
            }],
            cfg_scale: req.cfg_scale,
            clip_guidance_preset: self.clip_guidance_preset.clone(),
            height: req.height,
            width: req.width,
            samples: req.samples,
            steps: req.steps,
        };
        debug!(url = %url, "Sending text-to-image request");

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ModelsError::new(ModelsErrorKind::Api { status, message }).into());
        }

        let parsed: TextToImageResponse = response
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::UnexpectedResponse(e.to_string())))?;

        parsed
            .artifacts
            .into_iter()
            .map(|artifact| {
                let bytes = BASE64
                    .decode(artifact.base64.as_bytes())
                    .map_err(|e| ModelsError::new(ModelsErrorKind::Decode(e.to_string())))?;
                Ok(ImageArtifact::new(self.provider_name(), "image/png", bytes))
            })
            .collect()
    }

    fn provider_name(&self) -> &'static str {
        "stability"
    }
}
