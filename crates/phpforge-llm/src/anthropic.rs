//! Anthropic Messages API.
//!
//! The system instruction is a top-level `system` field rather than a
//! message. Only a leading `text` content block is accepted as the answer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdapterConfig;
use crate::error::{ProviderError, Result};
use crate::http::{send_json, with_extra_headers};
use crate::prompt::SYSTEM_PROMPT;

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

pub(crate) fn build_request<'a>(config: &'a AdapterConfig, prompt: &'a str) -> MessagesRequest<'a> {
    MessagesRequest {
        model: &config.model,
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        system: SYSTEM_PROMPT,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    }
}

pub(crate) async fn complete(
    http: &reqwest::Client,
    config: &AdapterConfig,
    api_key: &str,
    prompt: &str,
) -> Result<String> {
    let url = config.endpoint("messages");
    debug!(provider = %config.id, model = %config.model, url = %url, "sending messages request");

    let req = http
        .post(&url)
        .header("x-api-key", api_key)
        .json(&build_request(config, prompt));
    let response: MessagesResponse = send_json(with_extra_headers(req, config), config).await?;

    match response.content.into_iter().next() {
        Some(ContentBlock { kind, text: Some(text) }) if kind == "text" => Ok(text),
        Some(block) => Err(ProviderError::InvalidResponse(format!(
            "unexpected first content block type '{}'",
            block.kind
        ))),
        None => Err(ProviderError::InvalidResponse("empty content".into())),
    }
}
