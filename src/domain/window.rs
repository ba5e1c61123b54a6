// src/domain/window.rs

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Widest trailing window accepted from config or a query string.
pub const MAX_WINDOW_DAYS: i64 = 36_500;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a sheet date or timestamp. Values without an offset are UTC.
pub fn parse_sheet_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Where a row landed relative to the trailing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    Included,
    ExcludedBadDate,
    ExcludedTooOld,
}

impl WindowClass {
    pub fn is_included(self) -> bool {
        self == WindowClass::Included
    }

    /// `None` for included rows, otherwise why the row was dropped.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            WindowClass::Included => None,
            WindowClass::ExcludedBadDate => Some("bad_date"),
            WindowClass::ExcludedTooOld => Some("too_old"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("days must be between 0 and 36500, got {0}")]
pub struct WindowRangeError(pub i64);

/// Trailing `days`-day window ending at a `now` fixed for the whole pass.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    now: DateTime<Utc>,
    days: i64,
    since: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(now: DateTime<Utc>, days: i64) -> Result<Self, WindowRangeError> {
        if !(0..=MAX_WINDOW_DAYS).contains(&days) {
            return Err(WindowRangeError(days));
        }
        let since = Duration::try_days(days)
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or(WindowRangeError(days))?;
        Ok(Self { now, days, since })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    /// Oldest instant still inside the window.
    pub fn since(&self) -> DateTime<Utc> {
        self.since
    }

    pub fn classify(&self, raw: &str) -> WindowClass {
        match parse_sheet_date(raw) {
            None => WindowClass::ExcludedBadDate,
            Some(d) if d < self.since() => WindowClass::ExcludedTooOld,
            Some(_) => WindowClass::Included,
        }
    }
}
