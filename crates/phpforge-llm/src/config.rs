//! Adapter configuration and the builtin provider table.
//!
//! Each [`AdapterConfig`] describes how to reach one hosted provider: which
//! wire protocol it speaks, where, with which credential variables, and what
//! to return when the call fails. [`builtin_adapters`] lists the five
//! providers in registry order.

use std::collections::BTreeMap;
use std::time::Duration;

use phpforge_types::config::DEFAULT_TIMEOUT_SECS;
use phpforge_types::{ProviderOverride, SecretString};
use serde::{Deserialize, Serialize};

use crate::fallback::FallbackTemplate;

/// Default sampling temperature for every request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion budget for every request.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Request/response format spoken by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireProtocol {
    /// `POST {base}/chat/completions` with Bearer auth.
    OpenAiChat,
    /// `POST {base}/messages` with `x-api-key`.
    AnthropicMessages,
    /// `POST {base}/generate` with Bearer auth.
    CohereGenerate,
    /// `POST {base}/models/{model}:generateContent` with `x-goog-api-key`.
    GeminiGenerateContent,
}

/// Connection and behavior settings for one hosted adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Registry key (e.g. `"openai"`).
    pub id: String,

    /// Name shown in listings and progress messages.
    pub display_name: String,

    pub protocol: WireProtocol,

    /// API root without trailing slash (e.g. `"https://api.openai.com/v1"`).
    pub base_url: String,

    /// Environment variables checked for the key, in order.
    pub api_key_envs: Vec<String>,

    /// Explicit key from the config file. Wins over the environment.
    #[serde(default)]
    pub api_key: SecretString,

    pub model: String,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,

    /// Returned when the live call fails.
    pub fallback: FallbackTemplate,
}

impl AdapterConfig {
    fn builtin(
        id: &str,
        display_name: &str,
        protocol: WireProtocol,
        base_url: &str,
        key_var: &str,
        model: &str,
        fallback: FallbackTemplate,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            protocol,
            base_url: base_url.into(),
            api_key_envs: vec![key_var.into(), format!("VITE_{key_var}")],
            api_key: SecretString::default(),
            model: model.into(),
            headers: BTreeMap::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            fallback,
        }
    }

    fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Apply user settings from the config file.
    pub fn apply_override(&mut self, over: &ProviderOverride) {
        if let Some(key) = over.api_key.non_empty() {
            self.api_key = key.clone();
        }
        if let Some(model) = over.model.as_deref().filter(|m| !m.trim().is_empty()) {
            self.model = model.trim().to_owned();
        }
        if let Some(url) = &over.base_url {
            self.base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(secs) = over.timeout_secs {
            self.timeout_secs = secs;
        }
    }

    /// Request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `base_url` joined with `path`, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// The builtin adapters in registry order.
pub fn builtin_adapters() -> Vec<AdapterConfig> {
    vec![
        AdapterConfig::builtin(
            "openai",
            "OpenAI GPT-4",
            WireProtocol::OpenAiChat,
            "https://api.openai.com/v1",
            "OPENAI_API_KEY",
            "gpt-4-turbo-preview",
            FallbackTemplate::standard("Generated PHP application based on:"),
        ),
        AdapterConfig::builtin(
            "anthropic",
            "Claude 3.5 Sonnet",
            WireProtocol::AnthropicMessages,
            "https://api.anthropic.com/v1",
            "ANTHROPIC_API_KEY",
            "claude-3-5-sonnet-20241022",
            FallbackTemplate::minimal(
                "Claude-generated PHP application:",
                &["Advanced Architecture", "Security Features", "Modern Design"],
                "Deploy to PHP 8+ server with MySQL 8+",
            ),
        )
        .with_header("anthropic-version", "2023-06-01"),
        AdapterConfig::builtin(
            "cohere",
            "Cohere Command",
            WireProtocol::CohereGenerate,
            "https://api.cohere.ai/v1",
            "COHERE_API_KEY",
            "command",
            FallbackTemplate::minimal(
                "Cohere-generated application:",
                &["Intelligent Design", "Optimized Performance"],
                "Configure and deploy to web server",
            ),
        ),
        AdapterConfig::builtin(
            "google",
            "Google Gemini Pro",
            WireProtocol::GeminiGenerateContent,
            "https://generativelanguage.googleapis.com/v1beta",
            "GOOGLE_AI_API_KEY",
            "gemini-pro",
            FallbackTemplate::minimal(
                "Gemini-generated application:",
                &["AI-Optimized", "Scalable Architecture"],
                "Deploy with modern PHP stack",
            ),
        ),
        AdapterConfig::builtin(
            "openrouter",
            "OpenRouter (Multiple Models)",
            WireProtocol::OpenAiChat,
            "https://openrouter.ai/api/v1",
            "OPENROUTER_API_KEY",
            "anthropic/claude-3.5-sonnet",
            FallbackTemplate::extended("OpenRouter-generated PHP application based on:"),
        )
        .with_header("HTTP-Referer", "https://github.com/phpforge/phpforge")
        .with_header("X-Title", "PHPForge AI"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_and_ids() {
        let ids: Vec<String> = builtin_adapters().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["openai", "anthropic", "cohere", "google", "openrouter"]);
    }

    #[test]
    fn builtin_request_defaults() {
        for a in builtin_adapters() {
            assert_eq!(a.max_tokens, 4000, "{}", a.id);
            assert!((a.temperature - 0.7).abs() < f32::EPSILON, "{}", a.id);
            assert_eq!(a.timeout(), Duration::from_secs(120), "{}", a.id);
            assert!(a.api_key.is_empty());
            assert!(a.base_url.starts_with("https://"));
        }
    }

    #[test]
    fn vite_aliases_follow_plain_names() {
        let google = builtin_adapters().into_iter().find(|a| a.id == "google").unwrap();
        assert_eq!(google.api_key_envs, ["GOOGLE_AI_API_KEY", "VITE_GOOGLE_AI_API_KEY"]);
    }

    #[test]
    fn openrouter_attribution_headers() {
        let or = builtin_adapters().into_iter().find(|a| a.id == "openrouter").unwrap();
        assert_eq!(or.headers.get("X-Title").map(String::as_str), Some("PHPForge AI"));
        assert!(or.headers.contains_key("HTTP-Referer"));
        assert_eq!(or.model, "anthropic/claude-3.5-sonnet");
    }

    #[test]
    fn anthropic_version_header() {
        let a = builtin_adapters().into_iter().find(|a| a.id == "anthropic").unwrap();
        assert_eq!(a.headers.get("anthropic-version").map(String::as_str), Some("2023-06-01"));
        assert_eq!(a.protocol, WireProtocol::AnthropicMessages);
    }

    #[test]
    fn override_replaces_fields() {
        let mut cfg = builtin_adapters().remove(0);
        cfg.apply_override(&ProviderOverride {
            api_key: "sk-from-file".into(),
            model: Some("gpt-4o".into()),
            base_url: Some("http://127.0.0.1:9999/v1/".into()),
            timeout_secs: Some(7),
        });
        assert_eq!(cfg.api_key.expose(), "sk-from-file");
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.base_url, "http://127.0.0.1:9999/v1");
        assert_eq!(cfg.timeout(), Duration::from_secs(7));
        assert_eq!(cfg.endpoint("/chat/completions"), "http://127.0.0.1:9999/v1/chat/completions");
    }

    #[test]
    fn empty_override_keeps_defaults() {
        let mut cfg = builtin_adapters().remove(2);
        cfg.apply_override(&ProviderOverride::default());
        assert_eq!(cfg.model, "command");
        assert_eq!(cfg.base_url, "https://api.cohere.ai/v1");
        assert!(cfg.api_key.is_empty());
    }
}
