//! Wire types for the OpenAI-style API.

use serde::{Deserialize, Serialize};
use thirdbrain_core::{GenerateRequest, Message, Role};

/// One wire-format message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    /// Lowercase role tag
    pub role: String,
    /// Message text
    pub content: String,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: message.content.clone(),
        }
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Build a wire request, falling back to `default_model` when the
    /// request names none.
    pub fn from_request(req: &GenerateRequest, default_model: &str) -> Self {
        Self {
            model: req
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
            messages: req.messages.iter().map(WireMessage::from).collect(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        }
    }
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: WireMessage,
}

/// Image generation request body.
#[derive(Debug, Clone, Serialize)]
pub struct ImageApiRequest {
    pub prompt: String,
    pub n: u32,
    pub size: String,
    pub response_format: String,
}

/// Image generation response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageApiResponse {
    pub data: Vec<ImageDatum>,
}

/// One base64-encoded image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDatum {
    pub b64_json: String,
}
