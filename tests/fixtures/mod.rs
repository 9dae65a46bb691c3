// Test fixtures - reusable test data
// Provides consistent instants and host pages across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use holiday_countdown::models::settings::WidgetSettings;
use holiday_countdown::services::render::MemoryPage;

/// Sample instants for testing
pub mod dates {
    use super::*;

    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    /// Jan 1, 2024 at midnight (New Year, leap year)
    pub fn new_year_2024() -> NaiveDateTime {
        at(2024, 1, 1, 0)
    }

    /// Dec 26, 2024, after the last holiday of the year
    pub fn boxing_day_2024() -> NaiveDateTime {
        at(2024, 12, 26, 10)
    }

    /// Monday Apr 1, 2024 at 18:00
    pub fn april_monday_2024() -> NaiveDateTime {
        at(2024, 4, 1, 18)
    }
}

/// A page carrying every target the default settings expect.
pub fn full_page() -> MemoryPage {
    MemoryPage::with_targets(WidgetSettings::default().targets.all())
}
