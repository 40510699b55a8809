//! `phpforge schema` -- render MySQL DDL for a saved project.
//!
//! Reads a project JSON file (as printed by `phpforge generate --json`) and
//! prints the `CREATE TABLE` and foreign-key statements for its schema.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use phpforge_core::render_schema_sql;
use phpforge_types::GeneratedProject;

/// Arguments for the `phpforge schema` subcommand.
#[derive(Args)]
pub struct SchemaArgs {
    /// Path to a project JSON file.
    pub file: PathBuf,
}

pub async fn run(args: SchemaArgs) -> anyhow::Result<()> {
    let contents = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let project: GeneratedProject = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;
    print!("{}", render_schema_sql(&project.database_schema));
    Ok(())
}
