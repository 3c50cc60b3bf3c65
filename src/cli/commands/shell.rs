//! Interactive session: each input line becomes one typed event.

use crate::config::Config;
use crate::core::app::{Event, Key};
use crate::core::runtime::{Output, Runtime};
use crate::data::Dataset;
use crate::db::log::OperationLog;
use crate::db::pool::DbPool;
use crate::db::prefs::PreferenceStore;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveForm;
use crate::models::theme::Theme;
use crate::models::view::ViewName;
use crate::ui::messages::{self, header};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

const HELP: &str = "\
Commands:
  login <email> <password>      sign in (demo password: password)
  logout                        sign out
  search [text]                 update the search query (empty clears it)
  focus                         focus the search box
  select <n>                    open the n-th search result
  open <kind> <id>              open a record by kind (employee|project|report) and id
  nav <view>                    dashboard | time-tracking | attendance | reports | team
  menu | user-menu              toggle the sidebar / user menu
  user-item [view]              pick a user-menu entry
  tab <id>                      select a tab
  clock                         clock in / clock out
  theme                         toggle light / dark
  system-theme <light|dark>     simulate a system preference change
  leave | leave-cancel          open / close the leave request form
  leave-submit <type> <start> <end>   submit a leave request (YYYY-MM-DD)
  report [type] [range]         generate a report
  export                        export the report to PDF
  dismiss | outside             close the toast / click outside
  key <esc|up|down|enter>       keyboard input
  wait <ms>                     let timers run
  show | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Event(Event),
    Select(usize),
    Open { kind: String, id: String },
    Wait(Duration),
    Show,
    Help,
    Quit,
}

fn arg<'a>(words: &[&'a str], i: usize, what: &str) -> AppResult<&'a str> {
    words
        .get(i)
        .copied()
        .ok_or_else(|| AppError::Validation(format!("missing {}", what)))
}

fn parse_key(s: &str) -> AppResult<Key> {
    match s.to_lowercase().as_str() {
        "esc" | "escape" => Ok(Key::Escape),
        "up" => Ok(Key::ArrowUp),
        "down" => Ok(Key::ArrowDown),
        "enter" | "space" => Ok(Key::Enter),
        other => Err(AppError::Validation(format!("unknown key '{}'", other))),
    }
}

fn opt(words: &[&str], i: usize) -> Option<String> {
    words.get(i).map(|s| s.to_string())
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> AppResult<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let words: Vec<&str> = rest.split_whitespace().collect();

    let parsed = match cmd.to_lowercase().as_str() {
        "login" => ShellCommand::Event(Event::LoginSubmit {
            email: words.first().copied().unwrap_or("").to_string(),
            password: words.get(1).copied().unwrap_or("").to_string(),
        }),
        "logout" => ShellCommand::Event(Event::Logout),
        // the query keeps its raw spacing; the search engine trims it
        "search" => ShellCommand::Event(Event::QueryChanged(rest.to_string())),
        "focus" => ShellCommand::Event(Event::SearchFocused),
        "select" => {
            let n = arg(&words, 0, "result number")?;
            let n = n
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| AppError::Validation(format!("invalid result number '{}'", n)))?;
            ShellCommand::Select(n)
        }
        "open" => ShellCommand::Open {
            kind: arg(&words, 0, "record kind")?.to_string(),
            id: arg(&words, 1, "record id")?.to_string(),
        },
        "nav" => ShellCommand::Event(Event::NavSelected(ViewName::parse(arg(
            &words, 0, "view",
        )?)?)),
        "menu" => ShellCommand::Event(Event::SidebarToggle),
        "user-menu" => ShellCommand::Event(Event::UserMenuToggle),
        "user-item" => ShellCommand::Event(Event::UserMenuItem(
            words.first().map(|v| ViewName::parse(v)).transpose()?,
        )),
        "tab" => ShellCommand::Event(Event::TabSelected(arg(&words, 0, "tab id")?.to_string())),
        "clock" => ShellCommand::Event(Event::ClockToggle),
        "theme" => ShellCommand::Event(Event::ThemeToggle),
        "system-theme" => ShellCommand::Event(Event::SystemThemeChanged(Theme::parse(arg(
            &words, 0, "theme",
        )?)?)),
        "leave" => ShellCommand::Event(Event::ShowLeaveModal),
        "leave-cancel" => ShellCommand::Event(Event::HideLeaveModal),
        "leave-submit" => ShellCommand::Event(Event::SubmitLeave(LeaveForm {
            leave_type: opt(&words, 0),
            start_date: opt(&words, 1),
            end_date: opt(&words, 2),
        })),
        "report" => ShellCommand::Event(Event::GenerateReport {
            report_type: opt(&words, 0),
            date_range: opt(&words, 1),
        }),
        "export" => ShellCommand::Event(Event::ExportReport),
        "dismiss" => ShellCommand::Event(Event::DismissToast),
        "outside" => ShellCommand::Event(Event::OutsideClick),
        "key" => ShellCommand::Event(Event::Key(parse_key(arg(&words, 0, "key")?)?)),
        "wait" => {
            let ms = arg(&words, 0, "milliseconds")?;
            let ms = ms
                .parse::<u64>()
                .map_err(|_| AppError::Validation(format!("invalid duration '{}'", ms)))?;
            ShellCommand::Wait(Duration::from_millis(ms))
        }
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(AppError::Validation(format!(
                "unknown command '{}' (type `help`)",
                other
            )));
        }
    };

    Ok(Some(parsed))
}

/// Print a batch of outputs; only the last screen of the batch is drawn.
fn emit(outputs: Vec<Output>) {
    let mut screen = None;
    for o in outputs {
        match o {
            Output::Screen(s) => screen = Some(s),
            Output::Toast(t) => messages::toast(&t),
            Output::Warning(w) => messages::warning(w),
            Output::Error(e) => messages::error(e),
        }
    }
    if let Some(s) = screen {
        print!("{}", s);
    }
}

/// Run one parsed command. Returns false when the session should end.
fn execute<S: PreferenceStore + OperationLog>(
    rt: &mut Runtime<S>,
    cmd: ShellCommand,
    started: Instant,
) -> bool {
    let now = || Local::now().naive_local();

    match cmd {
        ShellCommand::Event(event) => emit(rt.dispatch(event, now(), started.elapsed())),
        ShellCommand::Select(n) => {
            let picked = rt.state().surface.results().get(n - 1).cloned();
            match picked {
                Some(record) => emit(rt.dispatch(
                    Event::ResultSelected(record),
                    now(),
                    started.elapsed(),
                )),
                None => {
                    let err = AppError::Validation(format!("no search result #{}", n));
                    emit(vec![rt.report_error("select", &err)]);
                }
            }
        }
        ShellCommand::Open { kind, id } => {
            match rt.open(&kind, &id, now(), started.elapsed()) {
                Ok(out) => emit(out),
                Err(e) => emit(vec![rt.report_error("open", &e)]),
            }
        }
        ShellCommand::Wait(d) => {
            let until = started.elapsed() + d;
            // sleep timer by timer so each one fires at its own deadline
            while let Some(due) = rt.next_timer().filter(|due| *due <= until) {
                let elapsed = started.elapsed();
                if due > elapsed {
                    std::thread::sleep(due - elapsed);
                }
                emit(rt.advance(now(), started.elapsed()));
            }
            let elapsed = started.elapsed();
            if until > elapsed {
                std::thread::sleep(until - elapsed);
            }
        }
        ShellCommand::Show => print!("{}", crate::ui::render::screen(rt.state())),
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return false,
    }

    true
}

pub fn run_session<S, R>(mut rt: Runtime<S>, input: R, started: Instant) -> AppResult<()>
where
    S: PreferenceStore + OperationLog,
    R: BufRead,
{
    for line in input.lines() {
        let line = line?;
        emit(rt.advance(Local::now().naive_local(), started.elapsed()));

        match parse_line(&line) {
            Ok(Some(cmd)) => {
                if !execute(&mut rt, cmd, started) {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => emit(vec![rt.report_error("input", &e)]),
        }

        print!("> ");
        io::stdout().flush()?;
    }

    if rt.pending_timers() > 0 {
        messages::info(format!(
            "{} pending timer(s) dropped on exit",
            rt.pending_timers()
        ));
    }
    Ok(())
}

/// Handle the `shell` command.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_initialized(&cfg.database_path())?;
    let started = Instant::now();

    let (rt, out) = Runtime::boot(
        pool,
        Dataset::sample()?,
        cfg,
        Theme::system(),
        Local::now().naive_local(),
    )?;

    header("TimeTracker Pro");
    println!("Type `help` for the list of commands.\n");
    emit(out);
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    run_session(rt, stdin.lock(), started)
}
