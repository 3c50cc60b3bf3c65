use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Raw leave-request form as submitted by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub leave_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub leave_type: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn required(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl LeaveForm {
    pub fn validate(&self) -> AppResult<LeaveRequest> {
        let (Some(leave_type), Some(start), Some(end)) = (
            required(&self.leave_type),
            required(&self.start_date),
            required(&self.end_date),
        ) else {
            return Err(AppError::Validation(
                "Please fill in all required fields.".to_string(),
            ));
        };

        let start = parse_date(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
        let end = parse_date(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;

        Ok(LeaveRequest {
            leave_type: leave_type.to_string(),
            start,
            end,
        })
    }
}

impl LeaveRequest {
    /// Inclusive day count: the same start and end date is one day.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
