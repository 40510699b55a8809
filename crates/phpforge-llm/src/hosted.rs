//! The hosted provider adapter.
//!
//! [`HostedProvider`] is the one [`Provider`] implementation for every
//! builtin backend. Its [`AdapterConfig`] picks the wire protocol; the
//! adapter owns credential lookup, the request deadline, fence stripping,
//! parsing and the fallback.

use std::sync::Arc;

use async_trait::async_trait;
use phpforge_platform::Environment;
use phpforge_types::{GeneratedProject, SecretString};
use tracing::{debug, warn};

use crate::config::{AdapterConfig, WireProtocol};
use crate::error::{ProviderError, Result};
use crate::provider::Provider;
use crate::response::parse_project;
use crate::{anthropic, cohere, gemini, openai_compat};

/// A provider reached over HTTPS.
///
/// # Construction
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use phpforge_llm::{builtin_adapters, HostedProvider};
/// use phpforge_platform::NativeEnvironment;
///
/// let config = builtin_adapters().remove(0);
/// let provider = HostedProvider::new(config, Arc::new(NativeEnvironment))?;
/// ```
pub struct HostedProvider {
    config: AdapterConfig,
    http: reqwest::Client,
    env: Arc<dyn Environment>,
}

impl HostedProvider {
    /// Create an adapter.
    ///
    /// Fails with [`ProviderError::NotConfigured`] when no credential is
    /// present. The key is looked up again on every call, so a rotated or
    /// removed key takes effect without rebuilding.
    pub fn new(config: AdapterConfig, env: Arc<dyn Environment>) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ProviderError::NotConfigured(format!(
                "{}: base_url is empty",
                config.id
            )));
        }
        if config.model.trim().is_empty() {
            return Err(ProviderError::NotConfigured(format!(
                "{}: model is empty",
                config.id
            )));
        }
        lookup_api_key(&config, env.as_ref())?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ProviderError::Http)?;
        Ok(Self { config, http, env })
    }

    /// Create an adapter with an explicit key that bypasses the environment.
    pub fn with_api_key(
        mut config: AdapterConfig,
        env: Arc<dyn Environment>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        config.api_key = SecretString::new(api_key);
        Self::new(config, env)
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    fn resolve_api_key(&self) -> Result<String> {
        lookup_api_key(&self.config, self.env.as_ref())
    }

    /// One attempt: request under the deadline, then parse.
    async fn try_generate(&self, prompt: &str) -> Result<GeneratedProject> {
        let api_key = self.resolve_api_key()?;
        let call = async {
            match self.config.protocol {
                WireProtocol::OpenAiChat => {
                    openai_compat::complete(&self.http, &self.config, &api_key, prompt).await
                }
                WireProtocol::AnthropicMessages => {
                    anthropic::complete(&self.http, &self.config, &api_key, prompt).await
                }
                WireProtocol::CohereGenerate => {
                    cohere::complete(&self.http, &self.config, &api_key, prompt).await
                }
                WireProtocol::GeminiGenerateContent => {
                    gemini::complete(&self.http, &self.config, &api_key, prompt).await
                }
            }
        };
        let text = tokio::time::timeout(self.config.timeout(), call)
            .await
            .map_err(|_| ProviderError::Timeout(self.config.timeout_secs))??;
        parse_project(&text)
    }
}

/// Resolve the API key: explicit key, then each environment variable.
fn lookup_api_key(config: &AdapterConfig, env: &dyn Environment) -> Result<String> {
    if let Some(key) = config.api_key.non_empty() {
        return Ok(key.expose().trim().to_owned());
    }
    let names: Vec<&str> = config.api_key_envs.iter().map(String::as_str).collect();
    env.first_of(&names)
        .map(|k| k.trim().to_owned())
        .ok_or_else(|| {
            ProviderError::NotConfigured(format!("set {}", config.api_key_envs.join(" or ")))
        })
}

#[async_trait]
impl Provider for HostedProvider {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn name(&self) -> &str {
        &self.config.display_name
    }

    fn is_configured(&self) -> bool {
        self.resolve_api_key().is_ok()
    }

    async fn generate_code(&self, prompt: &str) -> GeneratedProject {
        match self.try_generate(prompt).await {
            Ok(project) => {
                debug!(
                    provider = %self.config.id,
                    files = project.files.len(),
                    tables = project.database_schema.len(),
                    "project generated"
                );
                project
            }
            Err(e) => {
                warn!(provider = %self.config.id, error = %e, "generation failed, using fallback project");
                self.config.fallback.render(prompt)
            }
        }
    }
}

impl std::fmt::Debug for HostedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedProvider")
            .field("id", &self.config.id)
            .field("protocol", &self.config.protocol)
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .field("api_key", &self.config.api_key.non_empty().map(|_| "***"))
            .finish()
    }
}
