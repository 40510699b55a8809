//! Generation façade.
//!
//! [`Forge`] is the entry point the session and the CLI call. It refuses
//! work that cannot succeed (blank prompt, unconfigured provider) before any
//! network traffic and maps registry errors to user-facing text.

use std::sync::Arc;

use phpforge_llm::{ProviderError, ProviderRegistry};
use phpforge_types::{GeneratedProject, ProviderDescriptor};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors shown to the user when a generation cannot start.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The prompt is empty or whitespace.
    #[error("Please describe the application you want to generate.")]
    EmptyPrompt,

    /// The current provider has no credential.
    #[error(
        "Provider {provider} is not properly configured. Set its API key in the environment or the config file."
    )]
    NotConfigured {
        /// Display name of the provider.
        provider: String,
    },

    /// No adapter is registered under the current id.
    #[error("Provider {0} not available")]
    Unavailable(String),

    /// Another generation is still running on this session.
    #[error("A generation is already in progress.")]
    AlreadyGenerating,

    /// Any other provider-level failure.
    #[error("Generation failed: {0}")]
    Provider(ProviderError),
}

impl From<ProviderError> for GenerationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(provider) => GenerationError::NotConfigured { provider },
            ProviderError::Unavailable(id) => GenerationError::Unavailable(id),
            other => GenerationError::Provider(other),
        }
    }
}

/// Thin layer over an injected [`ProviderRegistry`].
#[derive(Debug, Clone)]
pub struct Forge {
    registry: Arc<ProviderRegistry>,
}

impl Forge {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    /// Generate a project for `prompt` with the current provider.
    ///
    /// The project is returned as produced; a provider-side failure has
    /// already been turned into that provider's fallback project.
    pub async fn generate_code(&self, prompt: &str) -> Result<GeneratedProject, GenerationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        if !self.registry.is_configured() {
            let err = match self.registry.current() {
                Some(p) => GenerationError::NotConfigured {
                    provider: p.name().to_owned(),
                },
                None => GenerationError::Unavailable(
                    self.registry.current_provider().unwrap_or_else(|| "none".into()),
                ),
            };
            warn!(error = %err, "generation refused");
            return Err(err);
        }

        debug!(provider = ?self.registry.current_provider(), chars = prompt.len(), "generation requested");
        Ok(self.registry.generate_code(prompt).await?)
    }

    pub fn available_providers(&self) -> Vec<ProviderDescriptor> {
        self.registry.available_providers()
    }

    pub fn current_provider(&self) -> Option<String> {
        self.registry.current_provider()
    }

    /// Display name of the current provider.
    pub fn current_provider_name(&self) -> Option<String> {
        self.registry.current().map(|p| p.name().to_owned())
    }

    pub fn select_provider(&self, id: &str) -> bool {
        self.registry.select_provider(id)
    }

    pub fn is_configured(&self) -> bool {
        self.registry.is_configured()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use phpforge_llm::Provider;

    use super::*;

    struct PanicsIfCalled;

    #[async_trait]
    impl Provider for PanicsIfCalled {
        fn id(&self) -> &str {
            "locked"
        }
        fn name(&self) -> &str {
            "Locked Provider"
        }
        fn is_configured(&self) -> bool {
            false
        }
        async fn generate_code(&self, _prompt: &str) -> GeneratedProject {
            panic!("unconfigured provider must not be invoked");
        }
    }

    struct Echo;

    #[async_trait]
    impl Provider for Echo {
        fn id(&self) -> &str {
            "echo"
        }
        fn name(&self) -> &str {
            "Echo"
        }
        fn is_configured(&self) -> bool {
            true
        }
        async fn generate_code(&self, prompt: &str) -> GeneratedProject {
            GeneratedProject {
                description: prompt.to_owned(),
                ..Default::default()
            }
        }
    }

    fn echo() -> Arc<dyn Provider> {
        Arc::new(Echo)
    }

    fn locked() -> Arc<dyn Provider> {
        Arc::new(PanicsIfCalled)
    }

    fn forge(providers: Vec<(&str, Arc<dyn Provider>)>) -> Forge {
        let registry = ProviderRegistry::from_factories(
            providers.into_iter().map(|(id, p)| (id.to_owned(), Ok(p))),
            None,
        );
        Forge::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn unconfigured_is_refused_before_invocation() {
        let f = forge(vec![("locked", locked())]);
        let err = f.generate_code("Create a blog").await.unwrap_err();
        assert!(matches!(err, GenerationError::NotConfigured { .. }));
        assert!(err.to_string().contains("Locked Provider"));
    }

    #[tokio::test]
    async fn blank_prompt_rejected() {
        let f = forge(vec![("echo", echo())]);
        assert!(matches!(
            f.generate_code("   ").await,
            Err(GenerationError::EmptyPrompt)
        ));
    }

    #[tokio::test]
    async fn no_providers_is_unavailable() {
        let f = forge(Vec::new());
        let err = f.generate_code("x").await.unwrap_err();
        assert_eq!(err.to_string(), "Provider none not available");
    }

    #[tokio::test]
    async fn success_passes_project_through() {
        let f = forge(vec![("echo", echo())]);
        let project = f.generate_code("  Create a blog ").await.unwrap();
        assert_eq!(project.description, "Create a blog");
    }

    #[test]
    fn pass_throughs() {
        let f = forge(vec![
            ("echo", echo()),
            ("locked", locked()),
        ]);
        assert_eq!(f.current_provider().as_deref(), Some("echo"));
        assert!(f.is_configured());
        assert!(f.select_provider("locked"));
        assert!(!f.is_configured());
        assert_eq!(f.current_provider_name().as_deref(), Some("Locked Provider"));
        assert!(!f.select_provider("missing"));
        assert_eq!(f.available_providers().len(), 2);
    }

    #[test]
    fn provider_errors_map_to_user_errors() {
        let e: GenerationError = ProviderError::Unavailable("cohere".into()).into();
        assert_eq!(e.to_string(), "Provider cohere not available");
        let e: GenerationError = ProviderError::Timeout(3).into();
        assert_eq!(e.to_string(), "Generation failed: timeout after 3s");
    }
}
