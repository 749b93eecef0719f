//! Month-based calendar arithmetic.
//!
//! Only the year, month and day components are used; time of day never enters
//! into any calculation here.

use chrono::{Datelike, NaiveDate};

/// Format used for every date string stored on an agreement.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

/// Advances `date` by `months` calendar months (negative moves backwards).
///
/// Year overflow is carried and the day of month is clamped to the last day of
/// the target month, so `31-01-2024 + 1` gives `29-02-2024`.
///
/// Returns `None` only when the result falls outside the range `NaiveDate` can
/// represent.
pub fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let total_months = i64::from(date.month()) + months;
    let years_to_add = (total_months - 1).div_euclid(12);
    let new_month = ((total_months - 1).rem_euclid(12) + 1) as u32;
    let new_year = i32::try_from(i64::from(date.year()) + years_to_add).ok()?;

    let new_day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, new_day)
}

/// Signed whole-month difference `later - earlier`, ignoring the day of month.
///
/// A negative month component borrows one year, which leaves the total
/// unchanged but mirrors how the difference is split into years and months.
pub fn months_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    let mut years = i64::from(later.year()) - i64::from(earlier.year());
    let mut months = i64::from(later.month()) - i64::from(earlier.month());

    if months < 0 {
        years -= 1;
        months += 12;
    }

    years * 12 + months
}

/// Parses a `DD-MM-YYYY` date. Surrounding whitespace makes the value malformed.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.trim() != value {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Formats a date as `DD-MM-YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
