//! `phpforge providers` -- list providers and credential status.
//!
//! # Example
//!
//! ```text
//! phpforge providers
//! phpforge providers --json
//! ```

use std::path::Path;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use phpforge_llm::builtin_adapters;
use phpforge_types::ProviderDescriptor;

use super::{build_registry, load_config};

/// Arguments for the `phpforge providers` subcommand.
#[derive(Args)]
pub struct ProvidersArgs {
    /// Print descriptors as JSON.
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ProvidersArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config).await?;
    let registry = build_registry(&config);
    let providers = registry.available_providers();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&providers)?);
        return Ok(());
    }

    if providers.is_empty() {
        println!("No providers configured. Set one of:");
        for adapter in builtin_adapters() {
            println!("  {:<12} {}", adapter.id, adapter.api_key_envs.join(", "));
        }
        return Ok(());
    }

    let current = registry.current_provider();
    println!("{}", render_table(&providers, current.as_deref()));
    Ok(())
}

fn render_table(providers: &[ProviderDescriptor], current: Option<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["ID", "NAME", "CONFIGURED", "CURRENT"]);
    for p in providers {
        let configured = if p.configured { "yes" } else { "no" };
        let marker = if current == Some(p.id.as_str()) { "*" } else { "" };
        table.add_row([p.id.as_str(), p.display_name.as_str(), configured, marker]);
    }
    table
}
