//! Canned projects returned when a live generation fails.
//!
//! Every adapter owns a [`FallbackTemplate`]. Rendering one against the
//! user's prompt always yields a well-formed [`GeneratedProject`] with the
//! prompt in its description and at least one file, so callers never have
//! to tell a fallback apart from a real result.

use phpforge_types::{DatabaseTable, Field, FileType, GeneratedFile, GeneratedProject};
use serde::{Deserialize, Serialize};

/// Which sample tables a fallback carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaSample {
    None,
    /// A single `users` table.
    Users,
    /// `users` plus `posts` referencing it.
    UsersAndPosts,
}

/// Which illustrative files a fallback carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileSample {
    /// A `README.md` restating the request.
    Readme,
    /// A minimal `public/index.php` front controller.
    FrontController,
    /// A routing `public/index.php` plus `config/database.php`.
    RouterWithDatabase,
}

/// Adapter-specific fallback content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackTemplate {
    /// Prepended to the prompt to form the description.
    pub description_prefix: String,
    pub features: Vec<String>,
    pub instructions: String,
    pub schema: SchemaSample,
    pub files: FileSample,
}

impl FallbackTemplate {
    /// Rich fallback: six features, two tables, router and database config.
    pub fn extended(description_prefix: &str) -> Self {
        Self {
            description_prefix: description_prefix.into(),
            features: strings(&[
                "MVC Architecture",
                "Database Integration",
                "User Authentication",
                "Responsive Design",
                "Security Features",
                "Admin Dashboard",
            ]),
            instructions: [
                "1. Extract all files to your web server directory",
                "2. Create a MySQL database",
                "3. Import the database schema from database/schema.sql",
                "4. Configure database connection in config/database.php",
                "5. Set up proper file permissions",
                "6. Access the application through your web browser",
            ]
            .join("\n"),
            schema: SchemaSample::UsersAndPosts,
            files: FileSample::RouterWithDatabase,
        }
    }

    /// Middle ground: three features, a `users` table, one entry point.
    pub fn standard(description_prefix: &str) -> Self {
        Self {
            description_prefix: description_prefix.into(),
            features: strings(&["MVC Architecture", "Database Integration", "Responsive Design"]),
            instructions: "Extract files and configure database connection in config/database.php"
                .into(),
            schema: SchemaSample::Users,
            files: FileSample::FrontController,
        }
    }

    /// Bare fallback: no schema, a README restating the request.
    pub fn minimal(description_prefix: &str, features: &[&str], instructions: &str) -> Self {
        Self {
            description_prefix: description_prefix.into(),
            features: strings(features),
            instructions: instructions.into(),
            schema: SchemaSample::None,
            files: FileSample::Readme,
        }
    }

    /// Build the project for `prompt`. Deterministic: same input, same output.
    pub fn render(&self, prompt: &str) -> GeneratedProject {
        let prompt = prompt.trim();
        let description = format!("{} {}", self.description_prefix.trim_end(), prompt);

        let database_schema = match self.schema {
            SchemaSample::None => Vec::new(),
            SchemaSample::Users => vec![users_table(false)],
            SchemaSample::UsersAndPosts => vec![users_table(true), posts_table()],
        };

        let files = match self.files {
            FileSample::Readme => vec![readme(prompt, &self.features, &self.instructions)],
            FileSample::FrontController => vec![GeneratedFile::new(
                "public/index.php",
                FileType::Php,
                FRONT_CONTROLLER_PHP,
            )],
            FileSample::RouterWithDatabase => vec![
                GeneratedFile::new("public/index.php", FileType::Php, ROUTER_PHP),
                GeneratedFile::new("config/database.php", FileType::Php, DATABASE_PHP),
            ],
        };

        GeneratedProject {
            description,
            features: self.features.clone(),
            instructions: self.instructions.clone(),
            database_schema,
            files,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn users_table(with_profile: bool) -> DatabaseTable {
    let mut table = DatabaseTable::new("users")
        .with_field(Field::id("id"))
        .with_field(Field::column("email", "VARCHAR(255)"))
        .with_field(Field::column("password", "VARCHAR(255)"));
    if with_profile {
        table = table
            .with_field(Field::column("name", "VARCHAR(100)"))
            .with_field(Field::column("role", r#"ENUM("user","admin")"#));
    }
    table.with_field(Field::column("created_at", "TIMESTAMP"))
}

fn posts_table() -> DatabaseTable {
    DatabaseTable::new("posts")
        .with_field(Field::id("id"))
        .with_field(Field::column("title", "VARCHAR(255)"))
        .with_field(Field::column("content", "TEXT"))
        .with_field(Field::column("user_id", "INT").references("users.id"))
        .with_field(Field::column("status", r#"ENUM("draft","published")"#))
        .with_field(Field::column("created_at", "TIMESTAMP"))
}

fn readme(prompt: &str, features: &[String], instructions: &str) -> GeneratedFile {
    let mut body = format!("# Generated PHP Application\n\n{prompt}\n\n## Features\n\n");
    for f in features {
        body.push_str("- ");
        body.push_str(f);
        body.push('\n');
    }
    body.push_str("\n## Setup\n\n");
    body.push_str(instructions);
    body.push('\n');
    GeneratedFile::new("README.md", FileType::Md, body)
}

const FRONT_CONTROLLER_PHP: &str = r#"<?php
require_once '../config/database.php';
require_once '../app/controllers/HomeController.php';

$controller = new HomeController();
$controller->index();
?>"#;

const ROUTER_PHP: &str = r#"<?php
session_start();
require_once '../config/database.php';
require_once '../app/controllers/HomeController.php';
require_once '../app/models/User.php';

// Simple routing
$request = $_SERVER['REQUEST_URI'];
$path = parse_url($request, PHP_URL_PATH);

switch ($path) {
    case '/':
    case '/home':
        $controller = new HomeController();
        $controller->index();
        break;
    case '/login':
        $controller = new AuthController();
        $controller->login();
        break;
    case '/register':
        $controller = new AuthController();
        $controller->register();
        break;
    default:
        http_response_code(404);
        echo "Page not found";
        break;
}
?>"#;

const DATABASE_PHP: &str = r#"<?php
class Database {
    private $host = 'localhost';
    private $db_name = 'phpforge_app';
    private $username = 'root';
    private $password = '';
    private $conn;

    public function getConnection() {
        $this->conn = null;
        try {
            $this->conn = new PDO(
                "mysql:host=" . $this->host . ";dbname=" . $this->db_name,
                $this->username,
                $this->password
            );
            $this->conn->setAttribute(PDO::ATTR_ERRMODE, PDO::ERRMODE_EXCEPTION);
        } catch(PDOException $exception) {
            echo "Connection error: " . $exception->getMessage();
        }
        return $this->conn;
    }
}
?>"#;
