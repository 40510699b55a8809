//! Editable state of the project currently on screen.

use phpforge_types::{DatabaseTable, GeneratedFile, GeneratedProject};
use serde::{Deserialize, Serialize};

/// Which view of the active file is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Code,
    Preview,
}

/// The last generated project plus the user's selection and status log.
///
/// Files are identified by `path`; `name` is only for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub files: Vec<GeneratedFile>,
    pub active_path: Option<String>,
    pub active_tab: ActiveTab,
    pub database_schema: Vec<DatabaseTable>,
    pub description: String,
    pub features: Vec<String>,
    pub instructions: String,
    /// Progress and error messages, oldest first.
    pub status: Vec<String>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with `project`. The first file becomes active and
    /// the code tab is shown. The status log is kept.
    pub fn apply_project(&mut self, project: GeneratedProject) {
        self.active_path = project.files.first().map(|f| f.path.clone());
        self.active_tab = ActiveTab::Code;
        self.files = project.files;
        self.database_schema = project.database_schema;
        self.description = project.description;
        self.features = project.features;
        self.instructions = project.instructions;
    }

    /// Activate the file at `path`. Unknown paths are ignored.
    pub fn set_active_file(&mut self, path: &str) -> bool {
        if self.files.iter().any(|f| f.path == path) {
            self.active_path = Some(path.to_owned());
            true
        } else {
            false
        }
    }

    pub fn active_file(&self) -> Option<&GeneratedFile> {
        let path = self.active_path.as_deref()?;
        self.files.iter().find(|f| f.path == path)
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// Add a table, replacing one with the same name in place.
    pub fn add_database_table(&mut self, table: DatabaseTable) {
        match self.database_schema.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => *existing = table,
            None => self.database_schema.push(table),
        }
    }

    pub fn remove_database_table(&mut self, name: &str) -> bool {
        let before = self.database_schema.len();
        self.database_schema.retain(|t| t.name != name);
        self.database_schema.len() != before
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status.push(message.into());
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The current content as a project, e.g. for export or saving.
    pub fn to_project(&self) -> GeneratedProject {
        GeneratedProject {
            description: self.description.clone(),
            features: self.features.clone(),
            instructions: self.instructions.clone(),
            database_schema: self.database_schema.clone(),
            files: self.files.clone(),
        }
    }
}
