//! Writing a generated project to disk, as a directory tree or a zip
//! archive.

use std::io::{Cursor, Write};
use std::path::{Component, Path, PathBuf};

use phpforge_types::{DatabaseTable, ForgeError, GeneratedFile};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::sql::render_schema_sql;

/// Where the rendered DDL goes when the project does not ship its own.
pub const SCHEMA_FILE_PATH: &str = "database/schema.sql";

/// Write every file under `out_dir` at its relative `path`.
///
/// All paths are checked before anything is written; an absolute path or a
/// `..` component fails the whole export. When `schema` is non-empty and no
/// file already sits at [`SCHEMA_FILE_PATH`], the rendered DDL is added
/// there. Returns the written paths in order.
pub async fn export_project(
    files: &[GeneratedFile],
    schema: &[DatabaseTable],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ForgeError> {
    let plan = plan_export(files, schema)?;
    let mut written = Vec::with_capacity(plan.len());
    for (relative, content) in &plan {
        let target = out_dir.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, content).await?;
        debug!(path = %target.display(), bytes = content.len(), "file written");
        written.push(target);
    }

    info!(dir = %out_dir.display(), files = written.len(), "project exported");
    Ok(written)
}

/// Write the project as a deflated zip archive at `zip_path`.
///
/// Entries follow the same rules as [`export_project`]. Returns the entry
/// names in order.
pub async fn export_zip(
    files: &[GeneratedFile],
    schema: &[DatabaseTable],
    zip_path: &Path,
) -> Result<Vec<String>, ForgeError> {
    let plan = plan_export(files, schema)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::with_capacity(plan.len());
    for (relative, content) in &plan {
        let name = entry_name(relative);
        zip.start_file(name.as_str(), options).map_err(archive_error)?;
        zip.write_all(content.as_bytes())?;
        entries.push(name);
    }
    let bytes = zip.finish().map_err(archive_error)?.into_inner();

    if let Some(parent) = zip_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(zip_path, &bytes).await?;
    info!(archive = %zip_path.display(), entries = entries.len(), bytes = bytes.len(), "project archived");
    Ok(entries)
}

/// Validated `(relative path, content)` pairs, including the rendered DDL
/// when the project needs one.
fn plan_export(
    files: &[GeneratedFile],
    schema: &[DatabaseTable],
) -> Result<Vec<(PathBuf, String)>, ForgeError> {
    if files.is_empty() {
        return Err(ForgeError::NothingToExport);
    }

    let mut plan = Vec::with_capacity(files.len() + 1);
    for file in files {
        plan.push((safe_relative_path(&file.path)?, file.content.clone()));
    }
    if !schema.is_empty() && !files.iter().any(|f| f.path == SCHEMA_FILE_PATH) {
        plan.push((PathBuf::from(SCHEMA_FILE_PATH), render_schema_sql(schema)));
    }
    Ok(plan)
}

/// Zip entry names always use `/`.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn archive_error(err: zip::result::ZipError) -> ForgeError {
    ForgeError::Archive(err.to_string())
}

/// Validate a provider-supplied path and return it as a relative path.
pub fn safe_relative_path(path: &str) -> Result<PathBuf, ForgeError> {
    let invalid = || ForgeError::InvalidPath { path: path.to_owned() };
    let trimmed = path.trim();
    if trimmed.is_empty() || trimmed.starts_with('/') || trimmed.starts_with('\\') {
        return Err(invalid());
    }

    let mut out = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return Err(invalid()),
        }
    }
    if out.as_os_str().is_empty() {
        return Err(invalid());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use phpforge_types::{Field, FileType};

    use super::*;

    fn php(path: &str) -> GeneratedFile {
        GeneratedFile::new(path, FileType::Php, "<?php echo 1;")
    }

    #[test]
    fn relative_paths_accepted() {
        assert_eq!(
            safe_relative_path("app/./models/User.php").unwrap(),
            PathBuf::from("app/models/User.php")
        );
    }

    #[test]
    fn escaping_paths_rejected() {
        for bad in ["../etc/passwd", "a/../../b", "/etc/passwd", "\\windows", "", "  ", "."] {
            assert!(
                matches!(safe_relative_path(bad), Err(ForgeError::InvalidPath { .. })),
                "{bad:?} accepted"
            );
        }
    }

    #[tokio::test]
    async fn empty_project_refused() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_project(&[], &[], dir.path()).await.unwrap_err();
        assert_eq!(err.to_string(), "No files to export. Generate a project first.");
    }

    #[tokio::test]
    async fn writes_files_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let files = [php("public/index.php"), php("config/database.php")];
        let schema = [DatabaseTable::new("users").with_field(Field::id("id"))];

        let written = export_project(&files, &schema, dir.path()).await.unwrap();
        assert_eq!(written.len(), 3);
        let index = std::fs::read_to_string(dir.path().join("public/index.php")).unwrap();
        assert_eq!(index, "<?php echo 1;");
        let ddl = std::fs::read_to_string(dir.path().join(SCHEMA_FILE_PATH)).unwrap();
        assert!(ddl.contains("CREATE TABLE users"));
    }

    #[tokio::test]
    async fn existing_schema_file_kept() {
        let dir = tempfile::tempdir().unwrap();
        let files = [GeneratedFile::new(SCHEMA_FILE_PATH, FileType::Sql, "-- mine")];
        let schema = [DatabaseTable::new("users").with_field(Field::id("id"))];

        let written = export_project(&files, &schema, dir.path()).await.unwrap();
        assert_eq!(written.len(), 1);
        let ddl = std::fs::read_to_string(dir.path().join(SCHEMA_FILE_PATH)).unwrap();
        assert_eq!(ddl, "-- mine");
    }

    #[tokio::test]
    async fn no_schema_no_sql_file() {
        let dir = tempfile::tempdir().unwrap();
        export_project(&[php("index.php")], &[], dir.path()).await.unwrap();
        assert!(!dir.path().join(SCHEMA_FILE_PATH).exists());
    }

    #[tokio::test]
    async fn zip_holds_files_and_schema() {
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dist/blog.zip");
        let files = [php("public/index.php"), php("app/./Models/Post.php")];
        let schema = [DatabaseTable::new("posts").with_field(Field::id("id"))];

        let entries = export_zip(&files, &schema, &target).await.unwrap();
        assert_eq!(entries, ["public/index.php", "app/Models/Post.php", SCHEMA_FILE_PATH]);

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&target).unwrap()).unwrap();
        assert_eq!(archive.len(), 3);
        let mut index = String::new();
        archive
            .by_name("public/index.php")
            .unwrap()
            .read_to_string(&mut index)
            .unwrap();
        assert_eq!(index, "<?php echo 1;");
        let mut ddl = String::new();
        archive.by_name(SCHEMA_FILE_PATH).unwrap().read_to_string(&mut ddl).unwrap();
        assert!(ddl.contains("CREATE TABLE posts"));
    }

    #[tokio::test]
    async fn zip_refuses_bad_path_and_empty_project() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.zip");
        assert!(matches!(
            export_zip(&[], &[], &target).await,
            Err(ForgeError::NothingToExport)
        ));
        assert!(matches!(
            export_zip(&[php("/etc/passwd")], &[], &target).await,
            Err(ForgeError::InvalidPath { .. })
        ));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn bad_path_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let files = [php("ok.php"), php("../evil.php")];
        let err = export_project(&files, &[], dir.path()).await.unwrap_err();
        assert!(matches!(err, ForgeError::InvalidPath { .. }));
        assert!(!dir.path().join("ok.php").exists());
    }
}
