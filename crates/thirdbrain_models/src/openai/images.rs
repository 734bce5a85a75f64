//! OpenAI-style image endpoint client (the high-fidelity few-image provider).

use crate::openai::dto::{ImageApiRequest, ImageApiResponse};
use crate::settings::{ImagesSettings, require_env};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use thirdbrain_core::{ImageArtifact, ImageRequest};
use thirdbrain_error::{ModelsError, ModelsErrorKind, ThirdBrainResult};
use thirdbrain_interface::ImageGenerator;
use tracing::{debug, instrument};

/// Image-generation client for an OpenAI-style images endpoint.
///
/// The endpoint takes only prompt, count, and square size; step and
/// guidance parameters of the request are ignored.
#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiImageClient {
    /// Creates a client from service settings and the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set in the environment.
    #[instrument(skip_all)]
    pub fn new(settings: &ImagesSettings) -> ThirdBrainResult<Self> {
        let api_key = require_env("OPENAI_API_KEY")?;
        Ok(Self::with_api_key(api_key, settings))
    }

    /// Creates a client with a specific API key.
    pub fn with_api_key(api_key: String, settings: &ImagesSettings) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: settings.base_url.clone(),
        }
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    #[instrument(skip(self, req), fields(samples = req.samples))]
    async fn generate_images(&self, req: &ImageRequest) -> ThirdBrainResult<Vec<ImageArtifact>> {
        let body = ImageApiRequest {
            prompt: req.prompt.clone(),
            n: req.samples.min(self.max_samples()),
            size: format!("{}x{}", req.width, req.height),
            // Image data instead of short-lived URLs.
            response_format: "b64_json".to_string(),
        };
        let url = format!("{}/images/generations", self.base_url);
        debug!(url = %url, "Sending image generation request");

        let response = self
            .client
            .post(&url)
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

        let parsed: ImageApiResponse = response
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::UnexpectedResponse(e.to_string())))?;

        parsed
            .data
            .into_iter()
            .map(|datum| {
                let bytes = BASE64
                    .decode(datum.b64_json.as_bytes())
                    .map_err(|e| ModelsError::new(ModelsErrorKind::Decode(e.to_string())))?;
                Ok(ImageArtifact::new(self.provider_name(), "image/png", bytes))
            })
            .collect()
    }

    fn provider_name(&self) -> &'static str {
        "dalle"
    }

    fn max_samples(&self) -> u32 {
        10
    }
}
