use std::time::Duration;
use ttpro::core::app::Event;
use ttpro::core::runtime::Output;
use ttpro::core::scheduler::{Scheduler, TimerTask};
use ttpro::models::leave::LeaveForm;
use ttpro::models::toast::ToastKind;

mod common;
use common::{at, logged_in, ms, t0};

fn leave_form(kind: &str, start: &str, end: &str) -> LeaveForm {
    LeaveForm {
        leave_type: Some(kind.into()),
        start_date: Some(start.into()),
        end_date: Some(end.into()),
    }
}

fn toast_text(rt: &ttpro::core::runtime::Runtime<ttpro::db::prefs::MemoryStore>) -> Option<String> {
    rt.state().toast.as_ref().map(|t| t.message.clone())
}

#[test]
fn test_scheduler_fires_in_deadline_order() {
    let mut s = Scheduler::new();
    s.schedule(ms(0), ms(2000), TimerTask::ReportGenerated);
    s.schedule(ms(0), ms(500), TimerTask::LeaveSubmitted { days: 1 });
    s.schedule(ms(100), ms(400), TimerTask::HideToast);

    assert_eq!(s.next_due(), Some(ms(500)));
    assert!(s.due(ms(499)).is_empty());
    assert_eq!(
        s.due(ms(500)),
        vec![TimerTask::LeaveSubmitted { days: 1 }, TimerTask::HideToast]
    );
    assert_eq!(s.pending(), 1);
    assert_eq!(s.due(ms(10_000)), vec![TimerTask::ReportGenerated]);
    assert_eq!(s.pending(), 0);
}

#[test]
fn test_leave_request_completes_after_delay() {
    let mut rt = logged_in();

    rt.dispatch(Event::ShowLeaveModal, t0(), ms(0));
    rt.dispatch(
        Event::SubmitLeave(leave_form("vacation", "2025-06-02", "2025-06-06")),
        t0(),
        ms(0),
    );
    assert!(rt.state().leave_modal_open);

    assert!(rt.advance(t0(), ms(499)).is_empty());

    let out = rt.advance(t0(), ms(500));
    assert!(!rt.state().leave_modal_open);
    assert_eq!(
        toast_text(&rt).as_deref(),
        Some("Leave request submitted successfully for 5 days.")
    );
    assert!(out.iter().any(|o| matches!(o, Output::Toast(t) if t.kind == ToastKind::Success)));
}

#[test]
fn test_leave_days_are_inclusive() {
    let one = leave_form("sick", "2025-06-02", "2025-06-02").validate().unwrap();
    assert_eq!(one.days(), 1);

    let month = leave_form("vacation", "2025-02-01", "2025-02-28").validate().unwrap();
    assert_eq!(month.days(), 28);
}

#[test]
fn test_leave_missing_fields_is_an_error_toast() {
    let mut rt = logged_in();

    let form = LeaveForm {
        leave_type: Some("vacation".into()),
        start_date: Some("2025-06-02".into()),
        end_date: Some("  ".into()),
    };
    rt.dispatch(Event::SubmitLeave(form), t0(), ms(0));

    let toast = rt.state().toast.clone().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Please fill in all required fields.");

    rt.dispatch(
        Event::SubmitLeave(leave_form("vacation", "2025-13-40", "2025-06-06")),
        t0(),
        ms(0),
    );
    assert!(toast_text(&rt).unwrap().contains("2025-13-40"));
}

#[test]
fn test_overlapping_leave_submissions_both_complete() {
    let mut rt = logged_in();

    rt.dispatch(
        Event::SubmitLeave(leave_form("vacation", "2025-06-02", "2025-06-03")),
        t0(),
        ms(0),
    );
    rt.dispatch(
        Event::SubmitLeave(leave_form("vacation", "2025-06-02", "2025-06-04")),
        t0(),
        ms(100),
    );

    let toasts: Vec<String> = rt
        .advance(t0(), ms(600))
        .into_iter()
        .filter_map(|o| match o {
            Output::Toast(t) => Some(t.message),
            _ => None,
        })
        .collect();

    assert_eq!(
        toasts,
        vec![
            "Leave request submitted successfully for 2 days.",
            "Leave request submitted successfully for 3 days.",
        ]
    );
}

#[test]
fn test_report_generation_and_export_are_simulated() {
    let mut rt = logged_in();

    rt.dispatch(
        Event::GenerateReport {
            report_type: None,
            date_range: Some("this-month".into()),
        },
        t0(),
        ms(0),
    );
    assert_eq!(
        toast_text(&rt).as_deref(),
        Some("Generating attendance report for this-month...")
    );

    rt.advance(t0(), ms(1999));
    assert_eq!(
        toast_text(&rt).as_deref(),
        Some("Generating attendance report for this-month...")
    );
    rt.advance(t0(), ms(2000));
    assert_eq!(toast_text(&rt).as_deref(), Some("Report generated successfully!"));

    rt.dispatch(Event::ExportReport, t0(), ms(3000));
    assert_eq!(toast_text(&rt).as_deref(), Some("Exporting report to PDF..."));
    rt.advance(t0(), ms(4500));
    assert_eq!(toast_text(&rt).as_deref(), Some("Report exported successfully!"));
}

#[test]
fn test_earlier_dismiss_timer_hides_newer_toast() {
    let mut rt = logged_in();
    // let the login toast expire first
    rt.advance(t0(), ms(5000));
    assert_eq!(rt.state().toast, None);

    rt.dispatch(Event::ThemeToggle, t0(), ms(6000));
    rt.dispatch(Event::ThemeToggle, t0(), ms(9000));
    assert_eq!(toast_text(&rt).as_deref(), Some("Switched to light mode"));

    // the first toast's timer (due at 11000) also hides the second toast
    rt.advance(t0(), ms(11_000));
    assert_eq!(rt.state().toast, None);
}

#[test]
fn test_dismiss_toast_by_hand() {
    let mut rt = logged_in();
    assert!(rt.state().toast.is_some());
    rt.dispatch(Event::DismissToast, t0(), ms(0));
    assert_eq!(rt.state().toast, None);
}

#[test]
fn test_clock_display_ticks_every_minute() {
    let mut rt = logged_in();
    assert_eq!(rt.state().clock_display, "10:00 AM");

    rt.advance(at(60), ms(60_000));
    assert_eq!(rt.state().clock_display, "10:01 AM");

    rt.advance(at(3 * 3600 + 300), ms(120_000));
    assert_eq!(rt.state().clock_display, "1:05 PM");
}

#[test]
fn test_render_outputs_follow_state_changes() {
    let mut rt = logged_in();

    let out = rt.dispatch(Event::QueryChanged("leave".into()), t0(), ms(0));
    let screen = out
        .iter()
        .find_map(|o| match o {
            Output::Screen(s) => Some(s.clone()),
            _ => None,
        })
        .unwrap();
    assert!(screen.contains("Leave Summary"));
    assert!(screen.contains("Dashboard - TimeTracker Pro"));

    // same query again: nothing changes, nothing is drawn
    let out = rt.dispatch(Event::QueryChanged("leave".into()), t0(), ms(0));
    assert!(out.is_empty());
}

#[test]
fn test_late_clock_tick_rearms_from_its_deadline() {
    let mut rt = logged_in();
    assert_eq!(rt.next_timer(), Some(ms(5000)));
    rt.advance(at(5), ms(5000));
    assert_eq!(rt.next_timer(), Some(ms(60_000)));

    // handled 750 ms late
    rt.advance(at(61), ms(60_750));
    assert_eq!(rt.next_timer(), Some(ms(120_000)));
    assert_eq!(rt.state().clock_display, "10:01 AM");
}
