//! Tests that exercise the live chat API.
//!
//! Gated behind the `api` feature; requires OPENAI_API_KEY.

#![cfg(feature = "api")]

use thirdbrain_core::{GenerateRequestBuilder, Message};
use thirdbrain_interface::TextGenerator;
use thirdbrain_models::{OpenAiTextClient, ServiceSettings};

#[tokio::test]
async fn completes_a_simple_prompt() {
    dotenvy::dotenv().ok();
    let settings = ServiceSettings::load().unwrap();
    let client = OpenAiTextClient::new(&settings.text).unwrap();

    let request = GenerateRequestBuilder::default()
        .messages(vec![Message::user("Reply with the single word: pong")])
        .max_tokens(Some(10))
        .build()
        .unwrap();

    let response = client.generate(&request).await.unwrap();
    assert!(!response.content.is_empty());
}
