//! One user's working session: a façade plus the project on screen.
//!
//! A session runs at most one generation at a time. Progress is recorded in
//! the state's status log so any front end can replay it.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use phpforge_types::{ForgeError, GeneratedProject};
use tracing::{info, warn};

use crate::export::{export_project, export_zip};
use crate::forge::{Forge, GenerationError};
use crate::project::ProjectState;
use crate::templates::resolve_template;

/// First progress message of every generation.
pub const STATUS_ANALYZING: &str = "Analyzing requirements...";

/// Final progress message of a successful generation.
fn succeeded_status(files: usize) -> String {
    let noun = if files == 1 { "file" } else { "files" };
    format!("Generation succeeded: {files} {noun}")
}

/// Session state shared between the caller and in-flight generations.
#[derive(Debug)]
pub struct ProjectSession {
    forge: Forge,
    state: Mutex<ProjectState>,
    generating: AtomicBool,
}

/// Clears the in-flight flag when a generation ends, including on panic or
/// cancellation.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ProjectSession {
    pub fn new(forge: Forge) -> Self {
        Self {
            forge,
            state: Mutex::new(ProjectState::new()),
            generating: AtomicBool::new(false),
        }
    }

    pub fn forge(&self) -> &Forge {
        &self.forge
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ProjectState {
        self.state.lock().clone()
    }

    /// Run `f` with exclusive access to the state.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut ProjectState) -> R) -> R {
        f(&mut self.state.lock())
    }

    /// Generate a project and make it the session's current project.
    ///
    /// The status log is reset at the start of each run.
    /// Overlapping calls are rejected with
    /// [`GenerationError::AlreadyGenerating`]. On failure the previous
    /// project stays in place and the error text is appended to the status
    /// log.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedProject, GenerationError> {
        if self
            .generating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("generation already in progress, rejecting request");
            return Err(GenerationError::AlreadyGenerating);
        }
        let _in_flight = InFlight(&self.generating);

        let provider = self
            .forge
            .current_provider_name()
            .unwrap_or_else(|| "AI".to_owned());
        {
            let mut state = self.state.lock();
            state.status.clear();
            state.push_status(STATUS_ANALYZING);
            state.push_status(format!("Generating code with {provider}..."));
        }

        match self.forge.generate_code(prompt).await {
            Ok(project) => {
                info!(
                    provider = %provider,
                    files = project.files.len(),
                    tables = project.database_schema.len(),
                    "generation succeeded"
                );
                let mut state = self.state.lock();
                state.push_status(succeeded_status(project.files.len()));
                state.apply_project(project.clone());
                Ok(project)
            }
            Err(e) => {
                warn!(provider = %provider, error = %e, "generation failed");
                self.state.lock().push_status(e.to_string());
                Err(e)
            }
        }
    }

    /// Generate from a starter template. Unknown ids use the blog template.
    pub async fn load_template(&self, id: &str) -> Result<GeneratedProject, GenerationError> {
        let template = resolve_template(id);
        info!(template = template.id, "loading template");
        self.generate(template.prompt).await
    }

    /// Export the current project's files under `out_dir`.
    pub async fn export(&self, out_dir: &Path) -> Result<Vec<PathBuf>, ForgeError> {
        let (files, schema) = {
            let state = self.state.lock();
            (state.files.clone(), state.database_schema.clone())
        };
        export_project(&files, &schema, out_dir).await
    }

    /// Archive the current project's files into a zip at `zip_path`.
    pub async fn export_zip(&self, zip_path: &Path) -> Result<Vec<String>, ForgeError> {
        let (files, schema) = {
            let state = self.state.lock();
            (state.files.clone(), state.database_schema.clone())
        };
        export_zip(&files, &schema, zip_path).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use phpforge_llm::{Provider, ProviderRegistry};
    use phpforge_types::{FileType, GeneratedFile};
    use tokio::sync::Notify;

    use super::*;

    /// Blocks until released, then echoes the prompt.
    struct Gate {
        release: Notify,
    }

    #[async_trait]
    impl Provider for Gate {
        fn id(&self) -> &str {
            "gate"
        }
        fn name(&self) -> &str {
            "Gate"
        }
        fn is_configured(&self) -> bool {
            true
        }
        async fn generate_code(&self, prompt: &str) -> GeneratedProject {
            self.release.notified().await;
            GeneratedProject {
                description: prompt.to_owned(),
                files: vec![GeneratedFile::new("index.php", FileType::Php, "<?php")],
                ..Default::default()
            }
        }
    }

    fn session_with(provider: Arc<dyn Provider>) -> ProjectSession {
        let id = provider.id().to_owned();
        let registry = ProviderRegistry::from_factories([(id, Ok(provider))], None);
        ProjectSession::new(Forge::new(Arc::new(registry)))
    }

    #[tokio::test]
    async fn overlapping_generation_rejected() {
        let gate = Arc::new(Gate { release: Notify::new() });
        let session = Arc::new(session_with(gate.clone()));

        let first = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.generate("first").await })
        };
        while !session.is_generating() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let second = session.generate("second").await;
        assert!(matches!(second, Err(GenerationError::AlreadyGenerating)));

        gate.release.notify_one();
        let project = first.await.unwrap().unwrap();
        assert_eq!(project.description, "first");
        assert!(!session.is_generating());
        assert_eq!(session.snapshot().description, "first");
    }

    #[tokio::test]
    async fn progress_messages_in_order() {
        let gate = Arc::new(Gate { release: Notify::new() });
        gate.release.notify_one();
        let session = session_with(gate);
        session.generate("Create a blog").await.unwrap();
        assert_eq!(
            session.snapshot().status,
            [
                "Analyzing requirements...",
                "Generating code with Gate...",
                "Generation succeeded: 1 file",
            ]
        );
    }

    #[tokio::test]
    async fn status_log_reset_per_run() {
        let gate = Arc::new(Gate { release: Notify::new() });
        let session = session_with(gate.clone());
        gate.release.notify_one();
        session.generate("first").await.unwrap();
        gate.release.notify_one();
        session.generate("second").await.unwrap();
        let status = session.snapshot().status;
        assert_eq!(status.len(), 3);
        assert_eq!(status[0], STATUS_ANALYZING);
    }

    #[test]
    fn succeeded_status_pluralizes() {
        assert_eq!(succeeded_status(0), "Generation succeeded: 0 files");
        assert_eq!(succeeded_status(1), "Generation succeeded: 1 file");
        assert_eq!(succeeded_status(12), "Generation succeeded: 12 files");
    }

    #[tokio::test]
    async fn failure_recorded_and_state_kept() {
        let gate = Arc::new(Gate { release: Notify::new() });
        gate.release.notify_one();
        let session = session_with(gate);
        session.generate("first").await.unwrap();

        let err = session.generate("  ").await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyPrompt));
        let state = session.snapshot();
        assert_eq!(state.description, "first");
        assert_eq!(state.status.last().unwrap(), &err.to_string());
        assert!(!session.is_generating());
    }

    #[tokio::test]
    async fn template_prompt_is_sent() {
        let gate = Arc::new(Gate { release: Notify::new() });
        gate.release.notify_one();
        let session = session_with(gate);
        let project = session.load_template("unknown-id").await.unwrap();
        assert!(project.description.starts_with("Build a professional blog system"));
    }

    #[tokio::test]
    async fn export_without_project_refused() {
        let gate = Arc::new(Gate { release: Notify::new() });
        let session = session_with(gate);
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            session.export(dir.path()).await,
            Err(ForgeError::NothingToExport)
        ));
    }
}
