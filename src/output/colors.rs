use colored::{Color, Colorize};

use crate::models::LookupKind;

/// Chooses the display color for each kind of record
pub type KindStyle = fn(LookupKind) -> Color;

/// One distinct color per lookup kind
pub fn default_kind_color(kind: LookupKind) -> Color {
    match kind {
        LookupKind::Address => Color::Red,
        LookupKind::Mx => Color::Green,
        LookupKind::Reverse => Color::Blue,
        LookupKind::Spf => Color::Magenta,
        LookupKind::Dkim => Color::Cyan,
    }
}

/// Format a record line in its kind's color
pub fn format_record(line: &str, kind: LookupKind, style: KindStyle) -> String {
    line.color(style(kind)).to_string()
}

/// Format a boolean as check/cross symbol
pub fn format_check(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// Format a failed lookup message
pub fn format_failure(message: &str) -> String {
    format!("{} {}", format_check(false), message.yellow())
}

/// Format the reason a lookup did not run
pub fn format_skipped(reason: &str) -> String {
    format!("Skipped: {}", reason).dimmed().to_string()
}

/// Create a section header
pub fn section_header(title: &str) -> String {
    let line = "─".repeat(60);
    format!("{}\n{}\n", title.bold(), line.dimmed())
}

/// Create a main header with box drawing
pub fn main_header(title: &str) -> String {
    let line = "═".repeat(60);
    format!("\n{}\n{}\n", title.bold().cyan(), line.cyan())
}
