//! Clock-in / clock-out session.

use chrono::{NaiveDateTime, NaiveTime};

/// The start timestamp lives inside `ClockedIn`, so a clocked-in session
/// without a start cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockSession {
    #[default]
    ClockedOut,
    ClockedIn { since: NaiveDateTime },
}

/// Outcome of a toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockTransition {
    ClockedIn { at: NaiveDateTime },
    /// Hours already rounded for display, e.g. "1.00".
    ClockedOut { hours: String },
}

impl ClockSession {
    pub fn is_clocked_in(&self) -> bool {
        matches!(self, ClockSession::ClockedIn { .. })
    }

    pub fn work_start(&self) -> Option<NaiveDateTime> {
        match self {
            ClockSession::ClockedIn { since } => Some(*since),
            ClockSession::ClockedOut => None,
        }
    }

    /// Demo seed: clocked in since `start` on the day of `now`.
    pub fn seeded(now: NaiveDateTime, start: Option<NaiveTime>) -> Self {
        match start {
            Some(t) => ClockSession::ClockedIn {
                since: now.date().and_time(t),
            },
            None => ClockSession::ClockedOut,
        }
    }

    /// Flip the session. Clocking out reports the hours since the last
    /// clock-in only; nothing accumulates across sessions.
    pub fn toggle(&mut self, now: NaiveDateTime) -> ClockTransition {
        match *self {
            ClockSession::ClockedIn { since } => {
                *self = ClockSession::ClockedOut;
                ClockTransition::ClockedOut {
                    hours: worked_hours(since, now),
                }
            }
            ClockSession::ClockedOut => {
                *self = ClockSession::ClockedIn { since: now };
                ClockTransition::ClockedIn { at: now }
            }
        }
    }
}

/// Elapsed hours between two instants, two decimals.
pub fn worked_hours(since: NaiveDateTime, now: NaiveDateTime) -> String {
    let ms = (now - since).num_milliseconds();
    format!("{:.2}", ms as f64 / 3_600_000.0)
}
