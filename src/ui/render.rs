//! Text rendering of the application state for the terminal front end.

use crate::core::app::AppState;
use crate::core::auth::LoginField;
use crate::core::clock::ClockSession;
use crate::core::search::ResultSurface;
use crate::models::search_record::SearchRecord;
use crate::utils::colors::{GREEN, GREY, RED, RESET, color_for_kind, colorize_optional};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// Search results as a table, with the focused row marked.
pub fn results_table(results: &[SearchRecord], focused: Option<usize>) -> String {
    let mut table = Table::new(vec![
        Column::new("", 1),
        Column::new("#", 2),
        Column::new("KIND", 8),
        Column::new("NAME", 12),
        Column::new("DEPARTMENT", 10),
        Column::new("ID", 4),
    ]);

    for (i, r) in results.iter().enumerate() {
        let kind = r.kind();
        table.add_row(vec![
            if focused == Some(i) { ">".into() } else { " ".into() },
            (i + 1).to_string(),
            format!("{}{} {}{}", color_for_kind(kind), kind.icon(), kind, RESET),
            bold(r.name()),
            colorize_optional(r.department().unwrap_or("-")),
            r.id().to_string(),
        ]);
    }

    table.render()
}

pub fn surface(surface: &ResultSurface, focused: Option<usize>) -> String {
    match surface {
        ResultSurface::Hidden => String::new(),
        ResultSurface::Empty => "No results found\n".to_string(),
        ResultSurface::Results(r) => results_table(r, focused),
    }
}

fn clock_line(clock: &ClockSession) -> String {
    match clock.work_start() {
        Some(since) => format!("{GREEN}Clocked In{RESET} since {}", since.format("%H:%M")),
        None => format!("{RED}Clocked Out{RESET}"),
    }
}

fn login_screen(state: &AppState) -> String {
    let mut out = String::new();
    out.push_str(&bold("TimeTracker Pro - Sign in"));
    out.push('\n');
    for field in [LoginField::Email, LoginField::Password] {
        if let Some(msg) = state.field_error(field) {
            out.push_str(&format!("  {RED}{}: {}{RESET}\n", field.as_str(), msg));
        }
    }
    out
}

fn main_app(state: &AppState) -> String {
    let view = state.router.current();
    let mut out = String::new();

    out.push_str(&bold(view.title()));
    out.push('\n');

    if let Some(user) = &state.session.user {
        out.push_str(&format!(
            "[{}] {} ({}) · {} · {}\n",
            user.initials(),
            user.name,
            user.role,
            clock_line(&state.session.clock),
            state.clock_display
        ));
    }

    out.push_str(&format!(
        "{GREY}view: {} · theme: {}{}{}{}{RESET}\n",
        view,
        state.session.theme,
        if state.sidebar_open { " · menu open" } else { "" },
        if state.user_menu_open { " · user menu open" } else { "" },
        state
            .active_tab
            .as_deref()
            .map(|t| format!(" · tab: {}", t))
            .unwrap_or_default(),
    ));

    if !state.query.is_empty() {
        out.push_str(&format!("search: {}\n", state.query));
    }
    out.push_str(&surface(&state.surface, state.focused));

    if state.leave_modal_open {
        out.push_str("[ Leave request form open ]\n");
    }

    out
}

/// Full screen for the current state.
pub fn screen(state: &AppState) -> String {
    if state.session.logged_in() {
        main_app(state)
    } else {
        login_screen(state)
    }
}
