//! Application layer for phpforge.
//!
//! - [`forge`] -- [`Forge`] generation façade over an injected registry
//! - [`session`] -- [`ProjectSession`], single-flight generation plus state
//! - [`project`] -- [`ProjectState`], the project currently being edited
//! - [`templates`] -- starter templates and prompt suggestions
//! - [`sql`] -- MySQL DDL rendering for a generated schema
//! - [`export`] -- writing a project to a directory or a zip archive

pub mod export;
pub mod forge;
pub mod project;
pub mod session;
pub mod sql;
pub mod templates;

pub use export::{SCHEMA_FILE_PATH, export_project, export_zip};
pub use forge::{Forge, GenerationError};
pub use project::{ActiveTab, ProjectState};
pub use session::ProjectSession;
pub use sql::render_schema_sql;
pub use templates::{SUGGESTIONS, Suggestion, TEMPLATES, Template, resolve_template};
