//! Calendar rules for expense pricing
//!
//! Expense dates are plain `YYYY-MM-DD` calendar dates with no timezone or
//! time-of-day component, resolved under chrono's proleptic Gregorian
//! calendar. The weekend rule here is what makes meal surcharges
//! calendar-sensitive.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{ExpenseError, ExpenseResult};

/// Date format accepted by [`parse_date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The fixed date an expense is stamped with when the caller supplies none
///
/// 2016-01-04 is a Monday, so undated expenses always price at weekday
/// rates.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 1, 4).unwrap()
}

/// Parse a `YYYY-MM-DD` date string
///
/// Fails with [`ExpenseError::InvalidDateFormat`] when the string is not a
/// valid calendar date in that form.
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidDateFormat(s.to_string()))
}

/// Returns true exactly for Saturdays and Sundays
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
