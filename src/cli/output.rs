//! Status lines for humans. Everything here goes to stderr so stdout stays
//! clean for `--dry-run` and `list --json`.

use colored::{ColoredString, Colorize};

fn marked(mark: ColoredString, msg: &str) {
    eprintln!("{} {}", mark, msg);
}

pub fn success(msg: &str) {
    marked("✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    marked("!".yellow().bold(), msg);
}

pub fn info(msg: &str) {
    marked("›".cyan(), msg);
}

/// Section title above a block of [`field`] lines.
pub fn header(msg: &str) {
    eprintln!("{}", msg.bold().underline());
}

/// An indented `label: value` line under a [`header`] or list entry.
pub fn field(label: &str, value: &str) {
    eprintln!("   {} {}", format!("{}:", label).dimmed(), value);
}
