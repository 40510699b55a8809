//! Configuration schema.
//!
//! All fields are optional in JSON; a missing or empty config file yields
//! [`Config::default()`]. Both `snake_case` and `camelCase` keys are accepted
//! via `#[serde(alias)]`. Unknown fields are ignored.
//!
//! ```json
//! {
//!   "defaultProvider": "anthropic",
//!   "timeoutSecs": 90,
//!   "providers": {
//!     "openrouter": { "apiKey": "sk-or-...", "model": "openai/gpt-4o" }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};
use crate::secret::SecretString;

/// Default request timeout for a single generation call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred provider id at start-up (e.g. `"openrouter"`).
    #[serde(default, alias = "defaultProvider")]
    pub default_provider: Option<String>,

    /// Global request timeout in seconds.
    #[serde(default, alias = "timeoutSecs")]
    pub timeout_secs: Option<u64>,

    /// Per-provider overrides keyed by provider id.
    #[serde(default)]
    pub providers: HashMap<String, ProviderOverride>,
}

impl Config {
    /// Override for a provider id, if configured.
    pub fn provider(&self, id: &str) -> Option<&ProviderOverride> {
        self.providers.get(id)
    }

    /// Effective request timeout for a provider: provider override, then the
    /// global value, then [`DEFAULT_TIMEOUT_SECS`].
    pub fn timeout_for(&self, id: &str) -> Duration {
        let secs = self
            .provider(id)
            .and_then(|p| p.timeout_secs)
            .or(self.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Reject values that would make every request fail immediately.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(ForgeError::ConfigInvalid {
                reason: "timeout_secs must be positive".into(),
            });
        }
        for (id, p) in &self.providers {
            if p.timeout_secs == Some(0) {
                return Err(ForgeError::ConfigInvalid {
                    reason: format!("providers.{id}.timeout_secs must be positive"),
                });
            }
            if let Some(url) = &p.base_url
                && !(url.starts_with("http://") || url.starts_with("https://"))
            {
                return Err(ForgeError::ConfigInvalid {
                    reason: format!("providers.{id}.base_url must be an http(s) URL"),
                });
            }
        }
        Ok(())
    }
}

/// Settings that replace a builtin provider's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderOverride {
    /// Explicit API key; takes precedence over the environment variable.
    #[serde(default, alias = "apiKey")]
    pub api_key: SecretString,

    /// Model identifier sent to the provider.
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL of the provider API.
    #[serde(default, alias = "baseUrl")]
    pub base_url: Option<String>,

    /// Request timeout in seconds for this provider.
    #[serde(default, alias = "timeoutSecs")]
    pub timeout_secs: Option<u64>,
}
