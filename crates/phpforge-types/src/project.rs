//! Generated project model.
//!
//! A [`GeneratedProject`] is what a provider hands back for one prompt: a
//! description, a feature list, setup instructions, the database schema and
//! the source files. The JSON form uses camelCase keys (`databaseSchema`,
//! `autoIncrement`, `foreignKey`) because that is the shape the providers are
//! asked to produce.
//!
//! Deserialization is lenient. Model output is untrusted, so missing
//! collections default to empty, unknown file types become [`FileType::Txt`]
//! and a file without a `type` gets one inferred from its path.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A complete project produced by one generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProject {
    /// Short description of the application.
    #[serde(default)]
    pub description: String,

    /// Ordered list of headline features.
    #[serde(default)]
    pub features: Vec<String>,

    /// Setup and installation instructions.
    #[serde(default)]
    pub instructions: String,

    /// Tables the application expects.
    #[serde(default)]
    pub database_schema: Vec<DatabaseTable>,

    /// Source files, each placed at its `path` on export.
    #[serde(default)]
    pub files: Vec<GeneratedFile>,
}

impl GeneratedProject {
    /// Look up a file by its path (the canonical file key).
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&DatabaseTable> {
        self.database_schema.iter().find(|t| t.name == name)
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFile")]
pub struct GeneratedFile {
    /// Display name (not unique across directories).
    pub name: String,

    /// Relative path inside the exported project.
    pub path: String,

    /// Full file content.
    pub content: String,

    /// Language of the file.
    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl GeneratedFile {
    /// Create a file, deriving `name` from the last path segment.
    pub fn new(path: impl Into<String>, file_type: FileType, content: impl Into<String>) -> Self {
        let path = path.into();
        let name = file_name(&path).to_string();
        Self {
            name,
            path,
            content: content.into(),
            file_type,
        }
    }
}

#[derive(Deserialize)]
struct RawFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    content: String,
    #[serde(default, rename = "type")]
    file_type: Option<FileType>,
}

impl From<RawFile> for GeneratedFile {
    fn from(raw: RawFile) -> Self {
        let path = match (&raw.path, &raw.name) {
            (Some(p), _) if !p.is_empty() => p.clone(),
            (_, Some(n)) => n.clone(),
            _ => String::new(),
        };
        let name = match raw.name {
            Some(n) if !n.is_empty() => n,
            _ => file_name(&path).to_string(),
        };
        let file_type = raw.file_type.unwrap_or_else(|| FileType::from_path(&path));
        Self {
            name,
            path,
            content: raw.content,
            file_type,
        }
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// File language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    Php,
    Sql,
    Html,
    Css,
    Js,
    Json,
    Md,
    #[default]
    Txt,
}

impl FileType {
    /// All variants, in declaration order.
    pub const ALL: [FileType; 8] = [
        FileType::Php,
        FileType::Sql,
        FileType::Html,
        FileType::Css,
        FileType::Js,
        FileType::Json,
        FileType::Md,
        FileType::Txt,
    ];

    /// The lowercase tag used in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Php => "php",
            FileType::Sql => "sql",
            FileType::Html => "html",
            FileType::Css => "css",
            FileType::Js => "js",
            FileType::Json => "json",
            FileType::Md => "md",
            FileType::Txt => "txt",
        }
    }

    /// Parse a tag. Unknown tags map to [`FileType::Txt`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "php" => FileType::Php,
            "sql" => FileType::Sql,
            "html" | "htm" => FileType::Html,
            "css" => FileType::Css,
            "js" | "javascript" => FileType::Js,
            "json" => FileType::Json,
            "md" | "markdown" => FileType::Md,
            _ => FileType::Txt,
        }
    }

    /// Infer the type from a path's extension.
    pub fn from_path(path: &str) -> Self {
        match file_name(path).rsplit_once('.') {
            Some((_, ext)) => Self::from_tag(ext),
            None => FileType::Txt,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FileType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(FileType::from_tag(&tag))
    }
}

/// A database table in the generated schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTable {
    /// Table name.
    pub name: String,

    /// Column definitions, in order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl DatabaseTable {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style column append.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Names of the primary-key columns.
    pub fn primary_keys(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.primary)
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// One column definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Column name.
    pub name: String,

    /// Free-form SQL type (e.g. `VARCHAR(255)`).
    #[serde(rename = "type", default)]
    pub sql_type: String,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub primary: bool,

    #[serde(default)]
    pub auto_increment: bool,

    /// Referenced column as `"table.column"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
}

impl Field {
    /// A non-null, non-key column.
    pub fn column(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            ..Self::default()
        }
    }

    /// An `INT` auto-increment primary key.
    pub fn id(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: "INT".into(),
            nullable: false,
            primary: true,
            auto_increment: true,
            foreign_key: None,
        }
    }

    /// Attach a `"table.column"` reference.
    pub fn references(mut self, target: impl Into<String>) -> Self {
        self.foreign_key = Some(target.into());
        self
    }

    /// Split `foreign_key` into `(table, column)`.
    ///
    /// Returns `None` when absent or when the reference has no `.`.
    pub fn foreign_target(&self) -> Option<(&str, &str)> {
        let target = self.foreign_key.as_deref()?;
        let (table, column) = target.split_once('.')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table, column))
    }
}
