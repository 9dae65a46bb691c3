//! Day, week, month and year progress calculators.
//!
//! Each calculator is a pure function of the wall-clock instant. Nothing is
//! clamped: the year row uses a divisible-by-four leap rule, so century
//! years like 2100 count 366 days.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::models::progress::{PeriodKind, PeriodProgress};
use crate::utils::date::{days_in_month, is_simplified_leap_year, start_of_year};

/// Hours left in the day. Minutes and seconds are ignored.
pub fn day_progress(now: NaiveDateTime) -> PeriodProgress {
    let hour = i64::from(now.hour());
    PeriodProgress {
        remaining: 24 - hour,
        percentage: hour as f64 / 24.0 * 100.0,
    }
}

/// Monday-to-Sunday week. Today counts as passed for the percentage but
/// not for the remaining days.
pub fn week_progress(now: NaiveDateTime) -> PeriodProgress {
    let passed = i64::from(now.weekday().num_days_from_monday());
    PeriodProgress {
        remaining: 6 - passed,
        percentage: (passed + 1) as f64 / 7.0 * 100.0,
    }
}

pub fn month_progress(now: NaiveDateTime) -> PeriodProgress {
    let total = i64::from(days_in_month(now.year(), now.month()));
    let passed = i64::from(now.day()) - 1;
    PeriodProgress {
        remaining: total - passed,
        percentage: passed as f64 / total as f64 * 100.0,
    }
}

pub fn year_progress(now: NaiveDateTime) -> PeriodProgress {
    let year = now.year();
    let total = 365 + i64::from(is_simplified_leap_year(year));
    // Whole days since Jan 1; `now` is never before it.
    let passed = start_of_year(year)
        .map(|start| (now - start).num_days())
        .unwrap_or_else(|| i64::from(now.ordinal0()));
    PeriodProgress {
        remaining: total - passed,
        percentage: passed as f64 / total as f64 * 100.0,
    }
}

pub fn progress(kind: PeriodKind, now: NaiveDateTime) -> PeriodProgress {
    match kind {
        PeriodKind::Day => day_progress(now),
        PeriodKind::Week => week_progress(now),
        PeriodKind::Month => month_progress(now),
        PeriodKind::Year => year_progress(now),
    }
}

/// All four periods in display order.
pub fn all_progress(now: NaiveDateTime) -> [(PeriodKind, PeriodProgress); 4] {
    PeriodKind::ALL.map(|kind| (kind, progress(kind, now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test_case(0, 24, 0.0; "midnight")]
    #[test_case(12, 12, 50.0; "noon")]
    #[test_case(23, 1, 95.83; "last hour")]
    fn test_day_progress(hour: u32, remaining: i64, percentage: f64) {
        let p = day_progress(at(2024, 3, 10, hour, 59));
        assert_eq!(p.remaining, remaining);
        assert!(close(p.percentage, percentage), "got {}", p.percentage);
    }

    #[test]
    fn test_week_progress_monday() {
        // 2024-03-11 is a Monday
        let p = week_progress(at(2024, 3, 11, 8, 0));
        assert_eq!(p.remaining, 6);
        assert!(close(p.percentage, 14.29));
    }

    #[test]
    fn test_week_progress_sunday() {
        let p = week_progress(at(2024, 3, 17, 8, 0));
        assert_eq!(p.remaining, 0);
        assert_eq!(p.percentage, 100.0);
    }

    #[test]
    fn test_month_progress_thirty_day_month() {
        let first = month_progress(at(2024, 4, 1, 0, 0));
        assert_eq!(first.remaining, 30);
        assert_eq!(first.percentage, 0.0);

        let last = month_progress(at(2024, 4, 30, 0, 0));
        assert_eq!(last.remaining, 1);
        assert!(close(last.percentage, 96.67));
    }

    #[test]
    fn test_month_progress_leap_february() {
        let p = month_progress(at(2024, 2, 29, 0, 0));
        assert_eq!(p.remaining, 1);
        assert!(close(p.percentage, 28.0 / 29.0 * 100.0));
    }

    #[test]
    fn test_year_progress_jan_first() {
        let p = year_progress(at(2024, 1, 1, 0, 0));
        assert_eq!(p.remaining, 366);
        assert_eq!(p.percentage, 0.0);
    }

    #[test]
    fn test_year_progress_dec_31() {
        let p = year_progress(at(2023, 12, 31, 18, 0));
        assert_eq!(p.remaining, 1);
        assert!(close(p.percentage, 364.0 / 365.0 * 100.0));
    }

    #[test]
    fn test_year_progress_keeps_simplified_leap_rule() {
        // 2100 is not a Gregorian leap year, so Dec 31 is day 364 of a
        // 366-day total under the simplified rule.
        let p = year_progress(at(2100, 12, 31, 0, 0));
        assert_eq!(p.remaining, 2);
    }

    #[test]
    fn test_all_progress_order() {
        let kinds: Vec<_> = all_progress(at(2024, 6, 1, 0, 0))
            .iter()
            .map(|(kind, _)| *kind)
            .collect();
        assert_eq!(kinds, PeriodKind::ALL.to_vec());
    }
}
