//! Google Gemini `generateContent`.
//!
//! The key travels in the `x-goog-api-key` header. The answer text is the
//! concatenation of every part of the first candidate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AdapterConfig;
use crate::error::{ProviderError, Result};
use crate::http::{send_json, with_extra_headers};
use crate::prompt::SYSTEM_PROMPT;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

pub(crate) fn build_request<'a>(config: &AdapterConfig, prompt: &'a str) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: SYSTEM_PROMPT }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_tokens,
        },
    }
}

pub(crate) async fn complete(
    http: &reqwest::Client,
    config: &AdapterConfig,
    api_key: &str,
    prompt: &str,
) -> Result<String> {
    let url = config.endpoint(&format!("models/{}:generateContent", config.model));
    debug!(provider = %config.id, model = %config.model, url = %url, "sending generateContent request");

    let req = http
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&build_request(config, prompt));
    let response: GenerateContentResponse = send_json(with_extra_headers(req, config), config).await?;

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .ok_or_else(|| ProviderError::InvalidResponse("no candidates".into()))?;

    let text: String = parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        return Err(ProviderError::InvalidResponse("candidate has no text".into()));
    }
    Ok(text)
}
