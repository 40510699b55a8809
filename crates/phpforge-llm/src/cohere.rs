//! Cohere generate API.
//!
//! There is no system slot; the instruction is prepended to the prompt.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdapterConfig;
use crate::error::{ProviderError, Result};
use crate::http::{send_json, with_extra_headers};
use crate::prompt::combined_prompt;

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    text: String,
}

pub(crate) fn build_request<'a>(config: &'a AdapterConfig, prompt: &str) -> GenerateRequest<'a> {
    GenerateRequest {
        model: &config.model,
        prompt: combined_prompt(prompt),
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

pub(crate) async fn complete(
    http: &reqwest::Client,
    config: &AdapterConfig,
    api_key: &str,
    prompt: &str,
) -> Result<String> {
    let url = config.endpoint("generate");
    debug!(provider = %config.id, model = %config.model, url = %url, "sending generate request");

    let req = http
        .post(&url)
        .bearer_auth(api_key)
        .json(&build_request(config, prompt));
    let response: GenerateResponse = send_json(with_extra_headers(req, config), config).await?;

    response
        .generations
        .into_iter()
        .next()
        .map(|g| g.text)
        .ok_or_else(|| ProviderError::InvalidResponse("no generations".into()))
}
