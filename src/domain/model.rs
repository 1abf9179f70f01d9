use crate::utils::error::{AgeError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A (year, month, day) triple under Gregorian conventions.
///
/// Fields are plain signed integers: a date read from the user may be out of
/// range until it has gone through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        // month() and day() are at most 12 and 31
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl FromStr for CalendarDate {
    type Err = AgeError;

    /// Parses an ISO `YYYY-MM-DD` date. Unlike typed-in birth dates this goes
    /// through chrono, so it must be a real calendar day.
    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self::from)
            .map_err(|e| AgeError::InvalidConfigValueError {
                field: "today".to_string(),
                value: s.to_string(),
                reason: format!("expected YYYY-MM-DD: {}", e),
            })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
