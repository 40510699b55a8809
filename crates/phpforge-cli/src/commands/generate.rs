//! `phpforge generate` and `phpforge template` -- run a generation.
//!
//! Progress lines go to stderr so `--json` output on stdout stays
//! machine-readable.
//!
//! # Example
//!
//! ```text
//! phpforge generate Create a blog with comments --out ./blog
//! phpforge template crm --provider anthropic --json
//! phpforge template blog --zip blog.zip
//! ```

use std::path::{Path, PathBuf};

use clap::Args;
use phpforge_core::{ProjectSession, resolve_template};
use phpforge_types::GeneratedProject;

use super::{build_session, select_provider};

/// Options shared by `generate` and `template`.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Provider id to use instead of the preferred one.
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Write the generated files under this directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also pack the generated files into this zip archive.
    #[arg(long, value_name = "FILE")]
    pub zip: Option<PathBuf>,

    /// Print the full project as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `phpforge generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Description of the application to build.
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl GenerateArgs {
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}

/// Arguments for the `phpforge template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template id (ecommerce, blog, crm, chat).
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn run(args: GenerateArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let prompt = args.prompt_text();
    generate(&prompt, &args.output, config).await
}

pub async fn run_template(args: TemplateArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let template = resolve_template(&args.id);
    if !template.id.eq_ignore_ascii_case(args.id.trim()) {
        eprintln!("Unknown template '{}', using '{}'", args.id, template.id);
    }
    generate(template.prompt, &args.output, config).await
}

async fn generate(prompt: &str, output: &OutputArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let session = build_session(config).await?;
    if let Some(id) = &output.provider {
        select_provider(session.forge(), id)?;
    }

    let result = session.generate(prompt).await;
    print_status(&session);
    let project = result?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&project)?);
    } else {
        print_summary(&project);
    }

    if let Some(dir) = &output.out {
        let written = session.export(dir).await?;
        eprintln!("Exported {} files to {}", written.len(), dir.display());
    }
    if let Some(path) = &output.zip {
        let entries = session.export_zip(path).await?;
        eprintln!("Archived {} files in {}", entries.len(), path.display());
    }
    Ok(())
}

fn print_status(session: &ProjectSession) {
    for line in session.snapshot().status {
        eprintln!("{line}");
    }
}

fn print_summary(project: &GeneratedProject) {
    println!("{}", project.description);

    if !project.features.is_empty() {
        println!();
        println!("Features:");
        for f in &project.features {
            println!("  - {f}");
        }
    }

    println!();
    println!("Files ({}):", project.files.len());
    for file in &project.files {
        println!("  {:<40} {}", file.path, file.file_type);
    }

    if !project.database_schema.is_empty() {
        println!();
        println!("Tables:");
        for table in &project.database_schema {
            println!("  {} ({} columns)", table.name, table.fields.len());
        }
    }

    if !project.instructions.is_empty() {
        println!();
        println!("Instructions:");
        for line in project.instructions.lines() {
            println!("  {line}");
        }
    }
}
