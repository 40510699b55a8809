//! Configuration file discovery and loading.
//!
//! The discovery order is:
//! 1. An explicit path (the CLI `--config` flag). Must exist.
//! 2. `PHPFORGE_CONFIG` environment variable.
//! 3. `~/.phpforge/config.json`
//! 4. If none found, [`Config::default()`].
//!
//! After the file is read, `PHPFORGE_DEFAULT_PROVIDER` (or the browser-era
//! `VITE_DEFAULT_AI_PROVIDER`) replaces `default_provider` when set.

use std::path::{Path, PathBuf};

use phpforge_types::{Config, ForgeError};
use tracing::{debug, info, warn};

use crate::env::Environment;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PHPFORGE_CONFIG";

/// Environment variables naming the preferred provider id, in priority order.
pub const DEFAULT_PROVIDER_VARS: [&str; 2] = ["PHPFORGE_DEFAULT_PROVIDER", "VITE_DEFAULT_AI_PROVIDER"];

/// Discover the config file path.
///
/// A path from `PHPFORGE_CONFIG` is returned as-is, even if it does not
/// exist; the loader reports that case. The home-directory candidate is only
/// returned when the file exists.
pub fn discover_config_path(env: &dyn Environment, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = env.get_non_empty(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(p));
    }
    let candidate = home_dir?.join(".phpforge").join("config.json");
    candidate.exists().then_some(candidate)
}

/// Load configuration using the discovery chain.
pub async fn load_config(
    env: &dyn Environment,
    config_override: Option<&Path>,
) -> Result<Config, ForgeError> {
    let mut config = match config_override {
        Some(path) => {
            if !path.exists() {
                return Err(ForgeError::ConfigInvalid {
                    reason: format!("config file not found: {}", path.display()),
                });
            }
            read_config_file(path).await?
        }
        None => match discover_config_path(env, dirs::home_dir()) {
            Some(path) if path.exists() => read_config_file(&path).await?,
            Some(path) => {
                warn!(path = %path.display(), "config path does not exist, using defaults");
                Config::default()
            }
            None => {
                info!("no config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config, env);
    config.validate()?;
    Ok(config)
}

/// Parse a config file. An empty file is treated as `{}`.
pub async fn read_config_file(path: &Path) -> Result<Config, ForgeError> {
    debug!(path = %path.display(), "loading config file");
    let contents = tokio::fs::read_to_string(path).await?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_json::from_str(&contents).map_err(|e| ForgeError::ConfigInvalid {
        reason: format!("failed to parse {}: {e}", path.display()),
    })
}

/// Apply environment-level settings on top of the file contents.
pub fn apply_env_overrides(config: &mut Config, env: &dyn Environment) {
    if let Some(id) = env.first_of(&DEFAULT_PROVIDER_VARS) {
        debug!(provider = %id, "preferred provider set from environment");
        config.default_provider = Some(id.trim().to_owned());
    }
}
