//! Application state and the single reducer that drives it.
//!
//! `reduce` is a pure function: it takes the current state, one typed input
//! event and a context (clock reading, dataset, delays) and returns the next
//! state plus a list of effect intents. Executing those intents (rendering,
//! persisting the theme, arming timers, writing the internal log) is the job
//! of `core::runtime`.

use crate::core::auth::{self, FieldError, LoginField};
use crate::core::clock::{ClockSession, ClockTransition};
use crate::core::dispatcher::resolve_target;
use crate::core::router::ViewRouter;
use crate::core::scheduler::TimerTask;
use crate::core::search::{ResultSurface, surface_for};
use crate::core::session::SessionState;
use crate::data::Dataset;
use crate::errors::AppError;
use crate::models::leave::LeaveForm;
use crate::models::search_record::SearchRecord;
use crate::models::theme::{THEME_KEY, Theme};
use crate::models::toast::Toast;
use crate::models::view::ViewName;
use crate::utils::time::clock_display;
use chrono::{NaiveDateTime, NaiveTime};
use std::time::Duration;

/// Fixed delays of the simulated asynchronous operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub toast: Duration,
    pub leave_submit: Duration,
    pub report_generate: Duration,
    pub report_export: Duration,
    pub clock_tick: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast: Duration::from_millis(5000),
            leave_submit: Duration::from_millis(500),
            report_generate: Duration::from_millis(2000),
            report_export: Duration::from_millis(1500),
            clock_tick: Duration::from_millis(60_000),
        }
    }
}

pub struct Context<'a> {
    pub now: NaiveDateTime,
    pub data: &'a Dataset,
    pub timings: &'a Timings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    Enter,
}

/// Everything the presentation layer can tell the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LoginSubmit { email: String, password: String },
    Logout,
    QueryChanged(String),
    SearchFocused,
    ResultSelected(SearchRecord),
    NavSelected(ViewName),
    UserMenuToggle,
    UserMenuItem(Option<ViewName>),
    SidebarToggle,
    TabSelected(String),
    ClockToggle,
    ThemeToggle,
    SystemThemeChanged(Theme),
    ShowLeaveModal,
    HideLeaveModal,
    SubmitLeave(LeaveForm),
    GenerateReport {
        report_type: Option<String>,
        date_range: Option<String>,
    },
    ExportReport,
    DismissToast,
    OutsideClick,
    Key(Key),
    TimerFired(TimerTask),
}

impl Event {
    /// Events that only make sense while the main application is visible.
    fn needs_login(&self) -> bool {
        !matches!(
            self,
            Event::LoginSubmit { .. }
                | Event::ThemeToggle
                | Event::SystemThemeChanged(_)
                | Event::DismissToast
                | Event::Key(_)
                | Event::TimerFired(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,
    Persist {
        key: &'static str,
        value: String,
    },
    Schedule {
        delay: Duration,
        task: TimerTask,
    },
    Log {
        operation: &'static str,
        target: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub router: ViewRouter,
    pub query: String,
    pub surface: ResultSurface,
    /// Keyboard focus inside the shown results.
    pub focused: Option<usize>,
    pub field_errors: Vec<FieldError>,
    pub toast: Option<Toast>,
    pub leave_modal_open: bool,
    pub user_menu_open: bool,
    pub sidebar_open: bool,
    pub active_tab: Option<String>,
    pub clock_display: String,
    /// A theme preference is stored, so system changes are ignored.
    pub theme_pinned: bool,
}

pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl AppState {
    pub fn new(session: SessionState, theme_pinned: bool) -> Self {
        Self {
            session,
            router: ViewRouter::new(),
            query: String::new(),
            surface: ResultSurface::Hidden,
            focused: None,
            field_errors: Vec::new(),
            toast: None,
            leave_modal_open: false,
            user_menu_open: false,
            sidebar_open: false,
            active_tab: None,
            clock_display: String::new(),
            theme_pinned,
        }
    }

    pub fn field_error(&self, field: LoginField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Build the initial state: stored theme or system theme, optional demo
/// clock-in, and the first clock-display tick.
pub fn start(
    stored_theme: Option<Theme>,
    system_theme: Theme,
    demo_clock_start: Option<NaiveTime>,
    ctx: &Context,
) -> Transition {
    let theme = stored_theme.unwrap_or(system_theme);
    let clock = ClockSession::seeded(ctx.now, demo_clock_start);

    let mut state = AppState::new(SessionState::new(theme, clock), stored_theme.is_some());
    state.clock_display = clock_display(ctx.now.time());

    Transition {
        state,
        effects: vec![
            Effect::Schedule {
                delay: ctx.timings.clock_tick,
                task: TimerTask::ClockTick,
            },
            Effect::Render,
        ],
    }
}

struct Step<'c, 'd> {
    next: AppState,
    effects: Vec<Effect>,
    ctx: &'c Context<'d>,
}

impl Step<'_, '_> {
    fn toast(&mut self, toast: Toast) {
        self.next.toast = Some(toast);
        // Dismiss timers are never cancelled: an older one may hide a newer toast.
        self.effects.push(Effect::Schedule {
            delay: self.ctx.timings.toast,
            task: TimerTask::HideToast,
        });
    }

    fn schedule(&mut self, delay: Duration, task: TimerTask) {
        self.effects.push(Effect::Schedule { delay, task });
    }

    fn log(&mut self, operation: &'static str, target: impl Into<String>, message: impl Into<String>) {
        self.effects.push(Effect::Log {
            operation,
            target: target.into(),
            message: message.into(),
        });
    }

    fn hide_results(&mut self) {
        self.next.surface = ResultSurface::Hidden;
        self.next.focused = None;
    }

    fn close_leave_modal(&mut self) {
        self.next.leave_modal_open = false;
    }

    fn navigate(&mut self, view: ViewName) {
        if self.next.router.activate(view) {
            self.log("navigate", view.as_str(), view.title());
        }
    }

    /// Clear the query, hide the results and activate the target view in one
    /// transition.
    fn select_result(&mut self, record: &SearchRecord) {
        let target = resolve_target(record);
        self.next.query.clear();
        self.hide_results();
        self.navigate(target);
        self.toast(Toast::info(format!(
            "Navigated to {}: {}",
            record.kind(),
            record.name()
        )));
    }

    fn login(&mut self, email: &str, password: &str) {
        let email = email.trim();
        let password = password.trim();

        self.next.field_errors.clear();

        let errors = auth::validate_login(email, password);
        if !errors.is_empty() {
            self.next.field_errors = errors;
            return;
        }

        match auth::authenticate(&self.ctx.data.users, email, password) {
            Ok(user) => {
                self.log("login", &user.email, format!("{} logged in", user.name));
                self.next.session.login(user);
                self.next.router = ViewRouter::new();
                self.toast(Toast::success("Login successful! Welcome back."));
            }
            Err(e) => {
                let message = match e {
                    AppError::Authentication(m) => m,
                    other => other.to_string(),
                };
                self.log("login_failed", email, &message);
                self.next.field_errors.push(FieldError {
                    field: LoginField::Email,
                    message,
                });
            }
        }
    }

    fn logout(&mut self) {
        let who = self
            .next
            .session
            .user
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default();

        self.next.session.logout();
        self.next.field_errors.clear();
        self.next.query.clear();
        self.hide_results();
        self.next.user_menu_open = false;
        self.log("logout", who, "Session closed");
        self.toast(Toast::info("You have been logged out successfully."));
    }

    fn toggle_clock(&mut self) {
        let who = self
            .next
            .session
            .user
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default();

        match self.next.session.clock.toggle(self.ctx.now) {
            ClockTransition::ClockedIn { at } => {
                self.log("clock_in", who, format!("Clocked in at {}", at));
                self.toast(Toast::success("Clocked in successfully. Have a great day!"));
            }
            ClockTransition::ClockedOut { hours } => {
                self.log("clock_out", who, format!("Worked {}h", hours));
                self.toast(Toast::success(format!(
                    "Clocked out successfully. Total hours: {}h",
                    hours
                )));
            }
        }
    }

    fn toggle_theme(&mut self) {
        let theme = self.next.session.theme.toggled();
        self.next.session.theme = theme;
        self.next.theme_pinned = true;
        self.effects.push(Effect::Persist {
            key: THEME_KEY,
            value: theme.as_str().to_string(),
        });
        self.toast(Toast::info(format!("Switched to {} mode", theme)));
    }

    fn submit_leave(&mut self, form: &LeaveForm) {
        match form.validate() {
            Ok(req) => {
                let days = req.days();
                self.log(
                    "leave_request",
                    &req.leave_type,
                    format!("{} → {} ({} days)", req.start, req.end, days),
                );
                self.schedule(
                    self.ctx.timings.leave_submit,
                    TimerTask::LeaveSubmitted { days },
                );
            }
            Err(AppError::Validation(m)) => self.toast(Toast::error(m)),
            Err(e) => self.toast(Toast::error(e.to_string())),
        }
    }

    fn move_focus(&mut self, key: Key) {
        let len = self.next.surface.results().len();
        if len == 0 {
            return;
        }

        self.next.focused = Some(match (key, self.next.focused) {
            (Key::ArrowDown, Some(i)) if i + 1 < len => i + 1,
            (Key::ArrowDown, _) => 0,
            (Key::ArrowUp, Some(i)) if i > 0 => i - 1,
            _ => len - 1,
        });
    }

    fn escape(&mut self) {
        self.hide_results();
        self.next.user_menu_open = false;
        self.next.sidebar_open = false;
        self.close_leave_modal();
    }

    fn key(&mut self, key: Key) {
        match key {
            Key::Escape => self.escape(),
            Key::ArrowUp | Key::ArrowDown if !self.next.surface.is_hidden() => {
                self.move_focus(key)
            }
            Key::Enter if self.next.session.logged_in() => {
                let picked = self
                    .next
                    .focused
                    .and_then(|i| self.next.surface.results().get(i).cloned());
                if let Some(record) = picked {
                    self.select_result(&record);
                }
            }
            _ => {}
        }
    }

    fn timer(&mut self, task: &TimerTask) {
        match task {
            TimerTask::HideToast => self.next.toast = None,
            TimerTask::LeaveSubmitted { days } => {
                self.close_leave_modal();
                self.toast(Toast::success(format!(
                    "Leave request submitted successfully for {} days.",
                    days
                )));
            }
            TimerTask::ReportGenerated => {
                self.toast(Toast::success("Report generated successfully!"));
            }
            TimerTask::ReportExported => {
                self.toast(Toast::success("Report exported successfully!"));
            }
            TimerTask::ClockTick => {
                self.next.clock_display = clock_display(self.ctx.now.time());
                self.schedule(self.ctx.timings.clock_tick, TimerTask::ClockTick);
            }
        }
    }

    fn apply(&mut self, event: &Event) {
        match event {
            Event::LoginSubmit { email, password } => self.login(email, password),
            Event::Logout => self.logout(),
            Event::QueryChanged(q) => {
                self.next.query = q.clone();
                self.next.surface = surface_for(q, &self.ctx.data.index);
                self.next.focused = None;
            }
            Event::SearchFocused => {
                if self.next.surface.is_hidden() {
                    self.next.surface = surface_for(&self.next.query, &self.ctx.data.index);
                }
            }
            Event::ResultSelected(record) => self.select_result(record),
            Event::NavSelected(view) => {
                self.navigate(*view);
                self.next.sidebar_open = false;
            }
            Event::UserMenuToggle => self.next.user_menu_open = !self.next.user_menu_open,
            Event::UserMenuItem(view) => {
                if let Some(v) = view {
                    self.navigate(*v);
                }
                self.next.user_menu_open = false;
            }
            Event::SidebarToggle => self.next.sidebar_open = !self.next.sidebar_open,
            Event::TabSelected(tab) => self.next.active_tab = Some(tab.clone()),
            Event::ClockToggle => self.toggle_clock(),
            Event::ThemeToggle => self.toggle_theme(),
            Event::SystemThemeChanged(theme) => {
                if !self.next.theme_pinned {
                    self.next.session.theme = *theme;
                }
            }
            Event::ShowLeaveModal => self.next.leave_modal_open = true,
            Event::HideLeaveModal => self.close_leave_modal(),
            Event::SubmitLeave(form) => self.submit_leave(form),
            Event::GenerateReport {
                report_type,
                date_range,
            } => {
                let report_type = report_type.as_deref().unwrap_or("attendance");
                let date_range = date_range.as_deref().unwrap_or("this-week");
                self.log("report", report_type, date_range);
                self.toast(Toast::info(format!(
                    "Generating {} report for {}...",
                    report_type, date_range
                )));
                self.schedule(self.ctx.timings.report_generate, TimerTask::ReportGenerated);
            }
            Event::ExportReport => {
                self.log("export", "pdf", "Simulated export");
                self.toast(Toast::info("Exporting report to PDF..."));
                self.schedule(self.ctx.timings.report_export, TimerTask::ReportExported);
            }
            Event::DismissToast => self.next.toast = None,
            Event::OutsideClick => {
                self.hide_results();
                self.next.user_menu_open = false;
            }
            Event::Key(key) => self.key(*key),
            Event::TimerFired(task) => self.timer(task),
        }
    }
}

/// Apply one event. Events that need a session are ignored while logged out.
/// A `Render` intent is appended whenever the state changed.
pub fn reduce(state: &AppState, event: &Event, ctx: &Context) -> Transition {
    if event.needs_login() && !state.session.logged_in() {
        return Transition {
            state: state.clone(),
            effects: Vec::new(),
        };
    }

    let mut step = Step {
        next: state.clone(),
        effects: Vec::new(),
        ctx,
    };
    step.apply(event);

    let Step {
        next, mut effects, ..
    } = step;
    if next != *state {
        effects.push(Effect::Render);
    }

    Transition {
        state: next,
        effects,
    }
}
