//! Calendar-month time window computation
//!
//! Turns a requested (month, year) into the inclusive UTC instants bounding
//! exactly that calendar month: day 1 at 00:00:00.000 through the last day
//! at 23:59:59.999. The last day is derived from the first day of the next
//! month, so leap years need no special handling.

use chrono::{DateTime, NaiveDate, Utc};

/// Window computation errors
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    /// Month outside 1-12
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year outside the accepted policy bounds
    #[error("invalid year: {year} (expected {min}-{max})")]
    InvalidYear {
        /// Requested year
        year: i32,
        /// Lower policy bound
        min: i32,
        /// Upper policy bound
        max: i32,
    },
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Inclusive UTC instants bounding one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// First instant of the month (00:00:00.000 UTC on day 1)
    pub start: DateTime<Utc>,
    /// Last instant of the month (23:59:59.999 UTC on the last day)
    pub end: DateTime<Utc>,
}

/// Accepted year range for statement exports
///
/// The bounds are policy, not arithmetic limits; callers can widen them
/// without touching the window computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    /// Earliest accepted year (inclusive)
    pub min_year: i32,
    /// Latest accepted year (inclusive)
    pub max_year: i32,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            min_year: 2020,
            max_year: 2100,
        }
    }
}

/// Compute the inclusive UTC time window covering one calendar month
///
/// # Arguments
/// * `month` - Calendar month (1-12)
/// * `year` - Calendar year, validated against `policy`
/// * `policy` - Accepted year bounds
///
/// # Errors
/// Returns [`WindowError::InvalidMonth`] or [`WindowError::InvalidYear`] on
/// out-of-range input.
pub fn month_window(month: u32, year: i32, policy: WindowPolicy) -> WindowResult<TimeWindow> {
    if !(1..=12).contains(&month) {
        return Err(WindowError::InvalidMonth(month));
    }
    if year < policy.min_year || year > policy.max_year {
        return Err(WindowError::InvalidYear {
            year,
            min: policy.min_year,
            max: policy.max_year,
        });
    }

    // SAFETY: month is 1-12 (validated above), day 1 is always valid.
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month 1-12, day 1");

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Last day of the month is the day before the first of the next month.
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid month 1-12, day 1")
        .pred_opt()
        .expect("first of a month always has a predecessor");

    // SAFETY: midnight and 23:59:59.999 are always valid times.
    let start = first
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let end = last
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("end of day is always valid")
        .and_utc();

    Ok(TimeWindow { start, end })
}
