//! OpenAI-compatible chat completions.
//!
//! Used by `openai` and `openrouter`. The system instruction goes in as a
//! `system` message ahead of the user's request.

use tracing::debug;

use crate::config::AdapterConfig;
use crate::error::{ProviderError, Result};
use crate::http::{send_json, with_extra_headers};
use crate::prompt::SYSTEM_PROMPT;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

pub(crate) fn build_request(config: &AdapterConfig, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

/// Run one completion and return the first choice's text.
pub(crate) async fn complete(
    http: &reqwest::Client,
    config: &AdapterConfig,
    api_key: &str,
    prompt: &str,
) -> Result<String> {
    let url = config.endpoint("chat/completions");
    let request = build_request(config, prompt);

    debug!(provider = %config.id, model = %request.model, url = %url, "sending chat completion request");

    let req = http
        .post(&url)
        .bearer_auth(api_key)
        .json(&request);
    let response: ChatResponse = send_json(with_extra_headers(req, config), config).await?;

    response
        .first_text()
        .map(str::to_owned)
        .ok_or_else(|| ProviderError::InvalidResponse("no content in first choice".into()))
}
