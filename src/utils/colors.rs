//! ANSI color helper utilities for terminal output.

use crate::models::search_record::RecordKind;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Colour used for the kind column of search results.
pub fn color_for_kind(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Employee => CYAN,
        RecordKind::Project => MAGENTA,
        RecordKind::Report => YELLOW,
    }
}

/// Grey out empty optional cells.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
