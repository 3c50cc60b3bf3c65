//! Styled one-line messages for the terminal.

use crate::models::toast::{Toast, ToastKind};
use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Info => BLUE,
            Level::Success => GREEN,
            Level::Warning => YELLOW,
            Level::Error => RED,
        }
    }
}

impl From<ToastKind> for Level {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Info => Level::Info,
            ToastKind::Success => Level::Success,
            ToastKind::Error => Level::Error,
        }
    }
}

fn line(level: Level, msg: &dyn fmt::Display) -> String {
    format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
}

// errors go to stderr, everything else to stdout
fn emit(level: Level, msg: &dyn fmt::Display) {
    match level {
        Level::Error => eprintln!("{}", line(level, msg)),
        _ => println!("{}", line(level, msg)),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Banner printed above the interactive session.
pub fn header<T: fmt::Display>(title: T) {
    let rule = "=".repeat(22);
    println!("{BLUE}{BOLD}{rule} {title}\n{RESET}");
}

/// Print a toast with the style of its kind.
pub fn toast(t: &Toast) {
    emit(Level::from(t.kind), &t.message);
}
