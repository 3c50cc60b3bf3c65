use std::time::Duration;
use ttpro::cli::commands::shell::{ShellCommand, parse_line};
use ttpro::core::app::{Event, Key};
use ttpro::errors::AppError;
use ttpro::models::leave::LeaveForm;
use ttpro::models::view::ViewName;

#[test]
fn test_blank_lines_are_ignored() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   ").unwrap(), None);
}

#[test]
fn test_parse_event_commands() {
    assert_eq!(
        parse_line("login a@b.co password").unwrap(),
        Some(ShellCommand::Event(Event::LoginSubmit {
            email: "a@b.co".into(),
            password: "password".into()
        }))
    );
    assert_eq!(
        parse_line("search HR system").unwrap(),
        Some(ShellCommand::Event(Event::QueryChanged("HR system".into())))
    );
    assert_eq!(
        parse_line("search").unwrap(),
        Some(ShellCommand::Event(Event::QueryChanged(String::new())))
    );
    assert_eq!(
        parse_line("nav time-tracking").unwrap(),
        Some(ShellCommand::Event(Event::NavSelected(ViewName::TimeTracking)))
    );
    assert_eq!(
        parse_line("key esc").unwrap(),
        Some(ShellCommand::Event(Event::Key(Key::Escape)))
    );
    assert_eq!(
        parse_line("leave-submit vacation 2025-06-02").unwrap(),
        Some(ShellCommand::Event(Event::SubmitLeave(LeaveForm {
            leave_type: Some("vacation".into()),
            start_date: Some("2025-06-02".into()),
            end_date: None,
        })))
    );
}

#[test]
fn test_parse_control_commands() {
    assert_eq!(parse_line("select 2").unwrap(), Some(ShellCommand::Select(2)));
    assert_eq!(
        parse_line("open report leave").unwrap(),
        Some(ShellCommand::Open {
            kind: "report".into(),
            id: "leave".into()
        })
    );
    assert_eq!(
        parse_line("wait 250").unwrap(),
        Some(ShellCommand::Wait(Duration::from_millis(250)))
    );
    assert_eq!(parse_line("QUIT").unwrap(), Some(ShellCommand::Quit));
}

#[test]
fn test_bad_input_is_reported() {
    assert!(matches!(parse_line("select 0"), Err(AppError::Validation(_))));
    assert!(matches!(parse_line("nav settings"), Err(AppError::InvalidView(_))));
    assert!(matches!(parse_line("fly"), Err(AppError::Validation(_))));
    assert!(matches!(parse_line("open project"), Err(AppError::Validation(_))));
}
