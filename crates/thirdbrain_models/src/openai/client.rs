//! OpenAI-style chat completion client.

use crate::openai::dto::{ChatRequest, ChatResponse};
use crate::settings::{TextSettings, require_env};
use async_trait::async_trait;
use reqwest::Client;
use thirdbrain_core::{GenerateRequest, GenerateResponse};
use thirdbrain_error::{ModelsError, ModelsErrorKind, ThirdBrainResult};
use thirdbrain_interface::TextGenerator;
use tracing::{debug, instrument};

/// Chat-completion client for an OpenAI-style API.
#[derive(Debug, Clone)]
pub struct OpenAiTextClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiTextClient {
    /// Creates a client from service settings and the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set in the environment.
    #[instrument(skip_all)]
    pub fn new(settings: &TextSettings) -> ThirdBrainResult<Self> {
        let api_key = require_env("OPENAI_API_KEY")?;
        Ok(Self::with_api_key(api_key, settings))
    }

    /// Creates a client with a specific API key.
    pub fn with_api_key(api_key: String, settings: &TextSettings) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
        }
    }

    /// Replace the default model (e.g. the long-context variant).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextClient {
    #[instrument(skip(self, req), fields(messages = req.messages.len()))]
    async fn generate(&self, req: &GenerateRequest) -> ThirdBrainResult<GenerateResponse> {
        let body = ChatRequest::from_request(req, &self.model);
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %body.model, "Sending chat completion request");

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

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::UnexpectedResponse(e.to_string())))?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            ModelsError::new(ModelsErrorKind::UnexpectedResponse(
                "no choices in completion".to_string(),
            ))
        })?;

        Ok(GenerateResponse {
            content: choice.message.content,
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
