//! CLI command implementations for `phpforge`.
//!
//! Each subcommand is implemented in its own module:
//!
//! - [`providers`] -- Provider listing.
//! - [`generate`] -- Prompt and template generation, optional export.
//! - [`templates`] -- Starter templates and suggestions.
//! - [`schema`] -- DDL rendering for a saved project.
//! - [`status`] -- Configuration diagnostics.

pub mod generate;
pub mod providers;
pub mod schema;
pub mod status;
pub mod templates;

use std::path::Path;
use std::sync::Arc;

use phpforge_core::{Forge, ProjectSession};
use phpforge_llm::ProviderRegistry;
use phpforge_platform::NativeEnvironment;
use phpforge_types::Config;
use tracing::debug;

/// Load configuration from the given path override or via auto-discovery.
pub async fn load_config(config_override: Option<&Path>) -> anyhow::Result<Config> {
    phpforge_platform::load_config(&NativeEnvironment, config_override)
        .await
        .map_err(|e| anyhow::anyhow!("failed to load config: {e}"))
}

/// Build the provider registry for `config` against the process environment.
pub fn build_registry(config: &Config) -> Arc<ProviderRegistry> {
    Arc::new(ProviderRegistry::from_config(config, Arc::new(NativeEnvironment)))
}

/// Load config and wire up a session.
pub async fn build_session(config_override: Option<&Path>) -> anyhow::Result<ProjectSession> {
    let config = load_config(config_override).await?;
    let registry = build_registry(&config);
    debug!(
        providers = registry.len(),
        current = registry.current_provider().as_deref().unwrap_or("none"),
        "session ready"
    );
    Ok(ProjectSession::new(Forge::new(registry)))
}

/// Switch to `id`, or fail listing the valid ids.
pub fn select_provider(forge: &Forge, id: &str) -> anyhow::Result<()> {
    if forge.select_provider(id) {
        return Ok(());
    }
    let ids = forge.registry().ids().join(", ");
    anyhow::bail!("unknown provider '{id}' (available: {ids})")
}
