//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic text generation request.
///
/// # Examples
///
/// ```
/// use thirdbrain_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest {
///     messages: vec![Message {
///         role: Role::User,
///         content: "Hello!".to_string(),
///     }],
///     max_tokens: Some(100),
///     temperature: Some(0.7),
///     model: Some("gpt-3.5-turbo".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(default)]
pub struct GenerateRequest {
    /// The ordered role-tagged messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    #[builder(setter(into, strip_option))]
    pub model: Option<String>,
}

/// One text completion from the text-generation service.
///
/// # Examples
///
/// ```
/// use thirdbrain_core::GenerateResponse;
///
/// let response = GenerateResponse {
///     content: "Hello! How can I help?".to_string(),
/// };
///
/// assert!(!response.content.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated completion text
    pub content: String,
}
