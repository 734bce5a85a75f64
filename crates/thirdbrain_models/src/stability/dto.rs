//! Wire types for the Stability-style engines API.

use serde::{Deserialize, Serialize};

/// One weighted text prompt.
#[derive(Debug, Clone, Serialize)]
pub struct TextPrompt {
    pub text: String,
}

/// Text-to-image request body.
#[derive(Debug, Clone, Serialize)]
pub struct TextToImageRequest {
    pub text_prompts: Vec<TextPrompt>,
    pub cfg_scale: f32,
    pub clip_guidance_preset: String,
    pub height: u32,
    pub width: u32,
    pub samples: u32,
    pub steps: u32,
}

/// Text-to-image response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TextToImageResponse {
    pub artifacts: Vec<Artifact>,
}

/// One generated artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    pub base64: String,
}
