use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

const OP_MAX: usize = 60;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" | "clock_in" => Colour::Green,
        "logout" | "clock_out" => Colour::Red,
        "navigate" => Colour::Cyan,
        "leave_request" => Colour::Yellow,
        "report" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.ends_with("_failed") || other == "error" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the `log` table, one line per entry.
    pub fn render_log(pool: &DbPool) -> AppResult<Vec<String>> {
        let entries = load_log(&pool.conn)?;

        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(entries.len());
        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(e.date);

            let visible = truncate(&op_target(&e.operation, &e.target), OP_MAX);
            let color = color_for_operation(&e.operation);

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            lines.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(lines)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let lines = Self::render_log(pool)?;

        println!("📜 Internal log:\n");
        if lines.is_empty() {
            println!("(empty)");
        }
        for line in lines {
            println!("{}", line);
        }

        Ok(())
    }
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
