//! Provider registry: the set of constructed adapters plus the current
//! selection.
//!
//! The registry is an ordinary value owned by the application context and
//! shared by `Arc`. Adapters keep their construction order so listings are
//! stable; the current id sits behind a lock so a selection made on one task
//! is seen by the next generation on any other.

use std::sync::Arc;

use parking_lot::RwLock;
use phpforge_platform::Environment;
use phpforge_types::{Config, GeneratedProject, ProviderDescriptor};
use tracing::{debug, info, warn};

use crate::config::builtin_adapters;
use crate::error::{ProviderError, Result};
use crate::hosted::HostedProvider;
use crate::provider::Provider;

/// Id selected when nothing else is preferred.
pub const DEFAULT_PROVIDER_ID: &str = "openrouter";

/// Adapters keyed by id, in construction order, plus the current id.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use phpforge_llm::ProviderRegistry;
/// use phpforge_platform::NativeEnvironment;
///
/// let registry = ProviderRegistry::from_config(&config, Arc::new(NativeEnvironment));
/// if registry.select_provider("anthropic") && registry.is_configured() {
///     let project = registry.generate_code("Create a blog").await?;
/// }
/// ```
pub struct ProviderRegistry {
    providers: Vec<(String, Arc<dyn Provider>)>,
    current: RwLock<Option<String>>,
}

impl ProviderRegistry {
    /// Build from `(id, construction result)` pairs.
    ///
    /// Failed constructions are logged and left out. The current id is
    /// `preferred` if it was constructed, else the first constructed id, else
    /// none.
    pub fn from_factories<I>(factories: I, preferred: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (String, Result<Arc<dyn Provider>>)>,
    {
        let mut providers: Vec<(String, Arc<dyn Provider>)> = Vec::new();
        for (id, built) in factories {
            match built {
                Ok(provider) => {
                    if providers.iter().any(|(existing, _)| *existing == id) {
                        warn!(provider = %id, "duplicate provider id, keeping the first");
                        continue;
                    }
                    debug!(provider = %id, configured = provider.is_configured(), "provider registered");
                    providers.push((id, provider));
                }
                Err(e) => warn!(provider = %id, error = %e, "provider failed to initialize, skipping"),
            }
        }

        let preferred = preferred.unwrap_or(DEFAULT_PROVIDER_ID);
        let current = if providers.iter().any(|(id, _)| id == preferred) {
            Some(preferred.to_owned())
        } else {
            let first = providers.first().map(|(id, _)| id.clone());
            if let Some(ref id) = first {
                warn!(preferred = %preferred, using = %id, "preferred provider unavailable");
            }
            first
        };

        info!(
            providers = providers.len(),
            current = current.as_deref().unwrap_or("none"),
            "provider registry initialized"
        );

        Self {
            providers,
            current: RwLock::new(current),
        }
    }

    /// Build every builtin adapter with the user's overrides applied.
    ///
    /// Adapters without a credential fail to build and are left out, so the
    /// initial selection is always a provider that has a key.
    pub fn from_config(config: &Config, env: Arc<dyn Environment>) -> Self {
        let factories = builtin_adapters().into_iter().map(|mut adapter| {
            adapter.timeout_secs = config.timeout_for(&adapter.id).as_secs();
            if let Some(over) = config.provider(&adapter.id) {
                adapter.apply_override(over);
            }
            let id = adapter.id.clone();
            let built = HostedProvider::new(adapter, Arc::clone(&env))
                .map(|p| Arc::new(p) as Arc<dyn Provider>);
            (id, built)
        });
        Self::from_factories(factories, config.default_provider.as_deref())
    }

    /// Descriptors for every adapter, in construction order. `configured` is
    /// evaluated on each call.
    pub fn available_providers(&self) -> Vec<ProviderDescriptor> {
        self.providers
            .iter()
            .map(|(id, p)| ProviderDescriptor {
                id: id.clone(),
                display_name: p.name().to_owned(),
                configured: p.is_configured(),
            })
            .collect()
    }

    pub fn current_provider(&self) -> Option<String> {
        self.current.read().clone()
    }

    /// Switch to `id` if it is registered. Unknown ids leave the selection
    /// untouched and return `false`.
    pub fn select_provider(&self, id: &str) -> bool {
        if self.get(id).is_none() {
            debug!(provider = %id, "ignoring selection of unknown provider");
            return false;
        }
        *self.current.write() = Some(id.to_owned());
        info!(provider = %id, "provider selected");
        true
    }

    /// The current adapter, if any.
    pub fn current(&self) -> Option<Arc<dyn Provider>> {
        let current = self.current.read();
        current.as_deref().and_then(|id| self.get(id))
    }

    /// Whether the current adapter exists and has a credential.
    pub fn is_configured(&self) -> bool {
        self.current().is_some_and(|p| p.is_configured())
    }

    /// Generate with the current adapter.
    ///
    /// The adapter is not invoked when there is no current adapter or it
    /// lacks a credential.
    pub async fn generate_code(&self, prompt: &str) -> Result<GeneratedProject> {
        let provider = self.current().ok_or_else(|| {
            ProviderError::Unavailable(self.current_provider().unwrap_or_else(|| "none".into()))
        })?;
        if !provider.is_configured() {
            return Err(ProviderError::NotConfigured(provider.name().to_owned()));
        }
        debug!(provider = %provider.id(), "delegating generation");
        Ok(provider.generate_code(prompt).await)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, p)| Arc::clone(p))
    }

    pub fn ids(&self) -> Vec<String> {
        self.providers.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.ids())
            .field("current", &self.current_provider())
            .finish()
    }
}
