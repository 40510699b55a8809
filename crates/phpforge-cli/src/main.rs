//! `phpforge` -- CLI binary for AI-assisted PHP/MySQL project generation.
//!
//! Provides the following subcommands:
//!
//! - `phpforge providers` -- List providers and their credential status.
//! - `phpforge generate` -- Generate a project from a description.
//! - `phpforge template` -- Generate a project from a starter template.
//! - `phpforge templates` -- List starter templates and prompt suggestions.
//! - `phpforge schema` -- Render MySQL DDL for a saved project.
//! - `phpforge status` -- Show configuration status.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// AI-assisted PHP/MySQL project generator.
#[derive(Parser)]
#[command(name = "phpforge", about = "AI-assisted PHP/MySQL project generator", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (overrides auto-discovery).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List providers, their credential status and the current selection.
    Providers(commands::providers::ProvidersArgs),

    /// Generate a project from a natural-language description.
    Generate(commands::generate::GenerateArgs),

    /// Generate a project from a starter template.
    Template(commands::generate::TemplateArgs),

    /// List starter templates and prompt suggestions.
    Templates,

    /// Render MySQL DDL for a saved project JSON file.
    Schema(commands::schema::SchemaArgs),

    /// Show configuration status.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Providers(args) => commands::providers::run(args, config).await?,
        Commands::Generate(args) => commands::generate::run(args, config).await?,
        Commands::Template(args) => commands::generate::run_template(args, config).await?,
        Commands::Templates => commands::templates::run(),
        Commands::Schema(args) => commands::schema::run(args).await?,
        Commands::Status => commands::status::run(config).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_without_error() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_help_contains_binary_name() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("phpforge"));
    }

    #[test]
    fn cli_has_all_subcommands() {
        let cmd = Cli::command();
        let sub_names: Vec<&str> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        for name in ["providers", "generate", "template", "templates", "schema", "status"] {
            assert!(sub_names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn generate_joins_prompt_words() {
        let cli = Cli::try_parse_from([
            "phpforge", "generate", "Create", "a", "blog", "--provider", "openai", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.prompt_text(), "Create a blog");
                assert_eq!(args.output.provider.as_deref(), Some("openai"));
                assert!(args.output.json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["phpforge", "status", "-v", "-c", "/tmp/c.json"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
    }

    #[test]
    fn generate_requires_prompt() {
        assert!(Cli::try_parse_from(["phpforge", "generate"]).is_err());
    }
}
