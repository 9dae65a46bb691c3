// Date utility functions
// Wall-clock helpers shared by the resolver and the progress calculators

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

pub fn start_of_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|date| date.and_time(chrono::NaiveTime::MIN))
}

/// Builds a calendar date the way a lenient host date constructor does:
/// days past the end of the month roll over into the following month.
pub fn lenient_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day.max(1)) - 1))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

/// Leap rule used for year progress. Century years are not special-cased.
pub fn is_simplified_leap_year(year: i32) -> bool {
    year % 4 == 0
}

/// Formats as `YYYY-MM-DD` with zero-padded month and day.
pub fn format_ymd(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
