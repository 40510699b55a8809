//! MySQL DDL for a generated schema.

use std::fmt::Write;

use phpforge_types::{DatabaseTable, Field};
use tracing::warn;

/// Render `CREATE TABLE` statements followed by foreign-key constraints.
///
/// Constraints come after every table so references resolve regardless of
/// table order. A `foreignKey` without a `table.column` shape is skipped.
pub fn render_schema_sql(tables: &[DatabaseTable]) -> String {
    let mut out = String::from("-- Database schema generated by phpforge\n");

    for table in tables {
        out.push('\n');
        render_table(&mut out, table);
    }

    let mut constraints = Vec::new();
    for table in tables {
        for field in &table.fields {
            let Some(target) = field.foreign_key.as_deref() else {
                continue;
            };
            match field.foreign_target() {
                Some((ref_table, ref_col)) => constraints.push(format!(
                    "ALTER TABLE {t} ADD CONSTRAINT fk_{t}_{c} FOREIGN KEY ({c}) REFERENCES {ref_table}({ref_col});",
                    t = table.name,
                    c = field.name,
                )),
                None => warn!(
                    table = %table.name,
                    field = %field.name,
                    foreign_key = %target,
                    "skipping malformed foreign key"
                ),
            }
        }
    }

    if !constraints.is_empty() {
        out.push('\n');
        for c in constraints {
            out.push_str(&c);
            out.push('\n');
        }
    }
    out
}

fn render_table(out: &mut String, table: &DatabaseTable) {
    let mut lines: Vec<String> = table.fields.iter().map(column_definition).collect();
    let pks = table.primary_keys();
    if !pks.is_empty() {
        lines.push(format!("PRIMARY KEY ({})", pks.join(", ")));
    }

    let _ = writeln!(out, "CREATE TABLE {} (", table.name);
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.iter().enumerate() {
        let sep = if i == last { "" } else { "," };
        let _ = writeln!(out, "    {line}{sep}");
    }
    out.push_str(");\n");
}

fn column_definition(field: &Field) -> String {
    let sql_type = if field.sql_type.trim().is_empty() {
        "TEXT"
    } else {
        field.sql_type.trim()
    };
    let mut def = format!("{} {sql_type}", field.name);
    if !field.nullable {
        def.push_str(" NOT NULL");
    }
    if field.auto_increment {
        def.push_str(" AUTO_INCREMENT");
    }
    def
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_schema() -> Vec<DatabaseTable> {
        vec![
            DatabaseTable::new("users")
                .with_field(Field::id("id"))
                .with_field(Field::column("email", "VARCHAR(255)")),
            DatabaseTable::new("posts")
                .with_field(Field::id("id"))
                .with_field(Field {
                    nullable: true,
                    ..Field::column("body", "TEXT")
                })
                .with_field(Field::column("user_id", "INT").references("users.id")),
        ]
    }

    #[test]
    fn create_table_statements() {
        let sql = render_schema_sql(&blog_schema());
        assert!(sql.starts_with("-- Database schema generated by phpforge\n"));
        assert!(sql.contains(
            "CREATE TABLE users (\n    id INT NOT NULL AUTO_INCREMENT,\n    email VARCHAR(255) NOT NULL,\n    PRIMARY KEY (id)\n);\n"
        ));
        assert!(sql.contains("    body TEXT,\n"));
    }

    #[test]
    fn foreign_keys_follow_tables() {
        let sql = render_schema_sql(&blog_schema());
        let fk = "ALTER TABLE posts ADD CONSTRAINT fk_posts_user_id FOREIGN KEY (user_id) REFERENCES users(id);";
        let fk_at = sql.find(fk).unwrap();
        assert!(fk_at > sql.rfind("CREATE TABLE").unwrap());
    }

    #[test]
    fn malformed_reference_skipped() {
        let tables = [DatabaseTable::new("t").with_field(Field::column("x", "INT").references("nowhere"))];
        let sql = render_schema_sql(&tables);
        assert!(!sql.contains("ALTER TABLE"));
        assert!(sql.contains("x INT NOT NULL\n"));
    }

    #[test]
    fn table_without_primary_key() {
        let tables = [DatabaseTable::new("log").with_field(Field::column("msg", ""))];
        let sql = render_schema_sql(&tables);
        assert!(sql.contains("CREATE TABLE log (\n    msg TEXT NOT NULL\n);"));
        assert!(!sql.contains("PRIMARY KEY"));
    }

    #[test]
    fn empty_schema_is_header_only() {
        assert_eq!(render_schema_sql(&[]), "-- Database schema generated by phpforge\n");
    }
}
