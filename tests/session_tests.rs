use std::time::Duration;
use ttpro::core::app::{self, Event};
use ttpro::core::auth::{LoginField, authenticate, is_valid_email, validate_login};
use ttpro::core::clock::{ClockSession, ClockTransition, worked_hours};
use ttpro::core::search::ResultSurface;
use ttpro::db::prefs::{MemoryStore, PreferenceStore};
use ttpro::errors::AppError;
use ttpro::models::theme::{THEME_KEY, Theme};
use ttpro::models::view::ViewName;

mod common;
use common::{at, boot, logged_in, login_event, sample, t0};

#[test]
fn test_login_field_validation() {
    let errors = validate_login("", "");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, LoginField::Email);
    assert_eq!(errors[0].message, "Email is required");
    assert_eq!(errors[1].message, "Password is required");

    let errors = validate_login("not-an-email", "x");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Please enter a valid email address");

    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.d"));
}

#[test]
fn test_authentication_stub() {
    let data = sample();

    let user = authenticate(&data.users, "Lisa.Chen@Company.com", "password").unwrap();
    assert_eq!(user.name, "Lisa Chen");
    assert_eq!(user.initials(), "LC");

    assert!(matches!(
        authenticate(&data.users, "lisa.chen@company.com", "hunter2"),
        Err(AppError::Authentication(_))
    ));
    assert!(matches!(
        authenticate(&data.users, "nobody@company.com", "password"),
        Err(AppError::Authentication(_))
    ));
}

#[test]
fn test_login_flow_sets_user_and_lands_on_dashboard() {
    let mut rt = boot(MemoryStore::default(), Theme::Light);
    let z = Duration::ZERO;

    rt.dispatch(
        Event::LoginSubmit {
            email: "  bad ".into(),
            password: "".into(),
        },
        t0(),
        z,
    );
    assert!(!rt.state().session.logged_in());
    assert_eq!(
        rt.state().field_error(LoginField::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        rt.state().field_error(LoginField::Password),
        Some("Password is required")
    );

    rt.dispatch(
        Event::LoginSubmit {
            email: "john.smith@company.com".into(),
            password: "secret".into(),
        },
        t0(),
        z,
    );
    assert_eq!(
        rt.state().field_error(LoginField::Email),
        Some("Invalid email or password. Use password \"password\" for demo.")
    );
    assert_eq!(rt.state().field_error(LoginField::Password), None);

    rt.dispatch(login_event("JOHN.SMITH@company.com"), t0(), z);
    let s = rt.state();
    assert!(s.session.logged_in());
    assert!(s.field_errors.is_empty());
    assert_eq!(s.router.current(), ViewName::Dashboard);
    assert_eq!(
        s.toast.as_ref().map(|t| t.message.as_str()),
        Some("Login successful! Welcome back.")
    );
    assert!(rt.store().log.iter().any(|(op, _, _)| op == "login_failed"));
}

#[test]
fn test_clock_round_trip_reports_hours() {
    let mut clock = ClockSession::default();

    assert_eq!(clock.toggle(t0()), ClockTransition::ClockedIn { at: t0() });
    assert_eq!(clock.work_start(), Some(t0()));

    assert_eq!(
        clock.toggle(at(3600)),
        ClockTransition::ClockedOut {
            hours: "1.00".into()
        }
    );
    assert!(!clock.is_clocked_in());
    assert_eq!(clock.work_start(), None);

    assert_eq!(worked_hours(t0(), at(5400)), "1.50");
    assert_eq!(worked_hours(t0(), at(60)), "0.02");
    assert_eq!(worked_hours(t0(), t0()), "0.00");
}

#[test]
fn test_clock_does_not_accumulate_sessions() {
    let mut clock = ClockSession::default();
    clock.toggle(t0());
    clock.toggle(at(3600));
    clock.toggle(at(7200));

    assert_eq!(
        clock.toggle(at(9000)),
        ClockTransition::ClockedOut {
            hours: "0.50".into()
        }
    );
}

#[test]
fn test_clock_toggle_through_reducer() {
    let mut rt = logged_in();

    rt.dispatch(Event::ClockToggle, t0(), Duration::ZERO);
    assert!(rt.state().session.clock.is_clocked_in());

    rt.dispatch(Event::ClockToggle, at(3600), Duration::from_secs(3600));
    assert_eq!(
        rt.state().toast.as_ref().map(|t| t.message.as_str()),
        Some("Clocked out successfully. Total hours: 1.00h")
    );
}

#[test]
fn test_demo_seed_clocks_in_at_configured_time() {
    let data = sample();
    let timings = Default::default();
    let ctx = common::ctx(&data, &timings, t0());

    let start = chrono::NaiveTime::from_hms_opt(9, 15, 0);
    let tr = app::start(None, Theme::Light, start, &ctx);

    assert_eq!(
        tr.state.session.clock.work_start(),
        Some(t0().date().and_hms_opt(9, 15, 0).unwrap())
    );
    assert_eq!(tr.state.clock_display, "10:00 AM");
    assert!(!tr.state.session.logged_in());
}

#[test]
fn test_logout_always_clocks_out() {
    let mut rt = logged_in();
    let z = Duration::ZERO;

    rt.dispatch(Event::ClockToggle, t0(), z);
    rt.dispatch(Event::QueryChanged("sarah".into()), t0(), z);
    rt.dispatch(Event::Logout, t0(), z);

    let s = rt.state();
    assert!(!s.session.logged_in());
    assert_eq!(s.session.clock, ClockSession::ClockedOut);
    assert_eq!(s.surface, ResultSurface::Hidden);
    assert_eq!(
        s.toast.as_ref().map(|t| t.message.as_str()),
        Some("You have been logged out successfully.")
    );
}

#[test]
fn test_theme_toggle_twice_restores_and_persists() {
    for start in [Theme::Light, Theme::Dark] {
        let mut rt = boot(MemoryStore::default(), start);

        rt.dispatch(Event::ThemeToggle, t0(), Duration::ZERO);
        assert_eq!(rt.state().session.theme, start.toggled());
        assert_eq!(
            rt.store().get(THEME_KEY).unwrap().as_deref(),
            Some(start.toggled().as_str())
        );

        rt.dispatch(Event::ThemeToggle, t0(), Duration::ZERO);
        assert_eq!(rt.state().session.theme, start);
        assert_eq!(
            rt.store().get(THEME_KEY).unwrap().as_deref(),
            Some(start.as_str())
        );
    }
}

#[test]
fn test_stored_theme_wins_over_system() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "dark").unwrap();

    let mut rt = boot(store, Theme::Light);
    assert_eq!(rt.state().session.theme, Theme::Dark);

    // a stored preference pins the theme
    rt.dispatch(Event::SystemThemeChanged(Theme::Light), t0(), Duration::ZERO);
    assert_eq!(rt.state().session.theme, Theme::Dark);
}

#[test]
fn test_system_theme_followed_until_user_toggles() {
    let mut rt = boot(MemoryStore::default(), Theme::Light);
    let z = Duration::ZERO;

    rt.dispatch(Event::SystemThemeChanged(Theme::Dark), t0(), z);
    assert_eq!(rt.state().session.theme, Theme::Dark);

    rt.dispatch(Event::ThemeToggle, t0(), z);
    rt.dispatch(Event::SystemThemeChanged(Theme::Dark), t0(), z);
    assert_eq!(rt.state().session.theme, Theme::Light);
}

#[test]
fn test_garbage_stored_theme_falls_back_to_system() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "sepia").unwrap();

    let rt = boot(store, Theme::Dark);
    assert_eq!(rt.state().session.theme, Theme::Dark);
}

#[test]
fn test_colorfgbg_detection() {
    assert_eq!(Theme::from_colorfgbg("15;0"), Some(Theme::Dark));
    assert_eq!(Theme::from_colorfgbg("0;15"), Some(Theme::Light));
    assert_eq!(Theme::from_colorfgbg("12;8"), Some(Theme::Dark));
    assert_eq!(Theme::from_colorfgbg("default"), None);
}
