//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// Placeholder for fields an entry does not have.
const MISSING: &str = "-";

/// Fixed-width mask so the secret's length is not shown.
const MASK: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the tool banner.
pub fn banner() {
    println!();
    println!("{}", style("  VAULT OPENER").cyan().bold());
    println!("{}", style("  -- OFFLINE RECOVERY TOOL --").dim());
    println!();
}

/// Print the unlocked entries as a table.
pub fn print_entries(entries: &[Entry], mask_secrets: bool) {
    println!();
    println!(
        "{} {}",
        style("\u{1f513} VAULT UNLOCKED:").green().bold(),
        entry_count(entries.len())
    );

    if entries.is_empty() {
        info("The vault is empty.");
        return;
    }

    println!("{}", entries_table(entries, mask_secrets));
}

fn entry_count(n: usize) -> String {
    match n {
        1 => "1 entry found".to_string(),
        n => format!("{n} entries found"),
    }
}

fn entries_table(entries: &[Entry], mask_secrets: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Category", "Title", "User", "Secret", "Notes"]);

    for (idx, entry) in entries.iter().enumerate() {
        let secret = match &entry.secret {
            Some(_) if mask_secrets => MASK.to_string(),
            Some(s) => s.clone(),
            None => MISSING.to_string(),
        };

        table.add_row(vec![
            (idx + 1).to_string(),
            entry.category.to_uppercase(),
            field(&entry.title),
            field(&entry.username),
            secret,
            field(&entry.notes),
        ]);
    }

    table
}

fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| MISSING.to_string())
}
