//! `phpforge templates` -- list starter templates and suggestions.

use comfy_table::{Table, presets::UTF8_FULL};
use phpforge_core::{SUGGESTIONS, TEMPLATES};

pub fn run() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["ID", "NAME", "DESCRIPTION"]);
    for t in &TEMPLATES {
        table.add_row([t.id, t.name, t.description]);
    }
    println!("{table}");

    println!();
    println!("Suggestions:");
    for s in &SUGGESTIONS {
        println!("  [{}] {}", s.category, s.text);
    }
}
