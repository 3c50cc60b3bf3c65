use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Top-level panels. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewName {
    Dashboard,
    TimeTracking,
    Attendance,
    Reports,
    Team,
}

impl ViewName {
    pub const ALL: [ViewName; 5] = [
        ViewName::Dashboard,
        ViewName::TimeTracking,
        ViewName::Attendance,
        ViewName::Reports,
        ViewName::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::Dashboard => "dashboard",
            ViewName::TimeTracking => "time-tracking",
            ViewName::Attendance => "attendance",
            ViewName::Reports => "reports",
            ViewName::Team => "team",
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim().to_lowercase();
        ViewName::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or(AppError::InvalidView(s))
    }

    /// Window title shown while the view is active.
    pub fn title(&self) -> &'static str {
        match self {
            ViewName::Dashboard => "Dashboard - TimeTracker Pro",
            ViewName::TimeTracking => "Time Tracking - TimeTracker Pro",
            ViewName::Attendance => "Attendance - TimeTracker Pro",
            ViewName::Reports => "Reports - TimeTracker Pro",
            ViewName::Team => "Team Overview - TimeTracker Pro",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
