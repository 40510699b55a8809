//! `phpforge status` -- show configuration status and diagnostics.
//!
//! Prints the resolved config file, preferred provider, request timeout and
//! which credential variables each provider reads.
//!
//! # Example
//!
//! ```text
//! phpforge status
//! ```

use std::path::Path;

use phpforge_llm::{DEFAULT_PROVIDER_ID, builtin_adapters};
use phpforge_platform::NativeEnvironment;
use phpforge_platform::config_loader::discover_config_path;
use phpforge_types::config::DEFAULT_TIMEOUT_SECS;

use super::{build_registry, load_config};

pub async fn run(config_override: Option<&Path>) -> anyhow::Result<()> {
    println!("phpforge status");
    println!("===============");
    println!();

    let config_path = match config_override {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config_path(&NativeEnvironment, dirs::home_dir()),
    };
    match config_path {
        Some(ref path) if path.exists() => println!("Config: {}", path.display()),
        Some(ref path) => println!("Config: {} (missing, using defaults)", path.display()),
        None => {
            println!("Config: not found");
            println!("  Searched: ~/.phpforge/config.json");
            println!("  Set PHPFORGE_CONFIG env var to override");
        }
    }

    let config = load_config(config_override).await?;
    let registry = build_registry(&config);

    println!();
    println!(
        "Preferred provider: {}",
        config.default_provider.as_deref().unwrap_or(DEFAULT_PROVIDER_ID)
    );
    println!(
        "Current provider:   {}",
        registry.current_provider().as_deref().unwrap_or("none")
    );
    println!(
        "Default timeout:    {}s",
        config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    );

    println!();
    println!("Credentials:");
    for adapter in builtin_adapters() {
        let state = match registry.get(&adapter.id) {
            Some(p) if p.is_configured() => "configured",
            _ => "missing",
        };
        println!(
            "  {:<12} {:<11} {}",
            adapter.id,
            state,
            adapter.api_key_envs.join(", ")
        );
    }

    Ok(())
}
