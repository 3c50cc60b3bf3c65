#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use ttpro::config::Config;
use ttpro::core::app::{Context, Event, Timings};
use ttpro::core::runtime::Runtime;
use ttpro::data::Dataset;
use ttpro::db::prefs::MemoryStore;
use ttpro::models::theme::Theme;

pub fn tt() -> Command {
    cargo_bin_cmd!("ttpro")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttpro.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Monday 2 June 2025, 10:00 local time.
pub fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 2)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn at(secs: i64) -> NaiveDateTime {
    t0() + chrono::Duration::seconds(secs)
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn sample() -> Dataset {
    Dataset::sample().expect("sample dataset")
}

/// Config without the demo clock-in seed.
pub fn quiet_config() -> Config {
    Config {
        demo_clock_start: String::new(),
        ..Config::default()
    }
}

pub fn ctx<'a>(data: &'a Dataset, timings: &'a Timings, now: NaiveDateTime) -> Context<'a> {
    Context {
        now,
        data,
        timings,
    }
}

pub fn boot(store: MemoryStore, theme: Theme) -> Runtime<MemoryStore> {
    let (rt, _) = Runtime::boot(store, sample(), &quiet_config(), theme, t0()).expect("boot");
    rt
}

pub fn login_event(email: &str) -> Event {
    Event::LoginSubmit {
        email: email.to_string(),
        password: "password".to_string(),
    }
}

/// Runtime already logged in as Mike Davis.
pub fn logged_in() -> Runtime<MemoryStore> {
    let mut rt = boot(MemoryStore::default(), Theme::Light);
    rt.dispatch(login_event("mike.davis@company.com"), t0(), Duration::ZERO);
    assert!(rt.state().session.logged_in());
    rt
}
