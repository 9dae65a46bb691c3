//! Next-holiday resolution.
//!
//! Scans the calendar in date order for the first holiday falling on or
//! after today, wrapping to next year's first holiday once the year's list
//! is exhausted.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::holiday::HolidayCalendar;
use crate::utils::date::lenient_date;

/// The upcoming holiday and the date it falls on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHoliday {
    pub name: String,
    pub date: NaiveDate,
}

impl ResolvedHoliday {
    /// Whole days from the date part of `now` until the holiday. Zero on
    /// the holiday itself.
    pub fn days_until(&self, now: NaiveDateTime) -> i64 {
        (self.date - now.date()).num_days()
    }
}

pub struct HolidayResolver<'a> {
    calendar: &'a HolidayCalendar,
}

impl<'a> HolidayResolver<'a> {
    pub fn new(calendar: &'a HolidayCalendar) -> Self {
        Self { calendar }
    }

    pub fn resolve(&self, now: NaiveDateTime) -> ResolvedHoliday {
        let today = now.date();
        let year = now.year();

        for entry in self.calendar.entries() {
            let Some(date) = lenient_date(year, entry.month, entry.day) else {
                continue;
            };
            if date >= today {
                return ResolvedHoliday {
                    name: entry.name.clone(),
                    date,
                };
            }
        }

        let first = self.calendar.first();
        // Validated entries always form a date; fall back to today only at
        // the edge of chrono's supported range.
        let date = lenient_date(year + 1, first.month, first.day).unwrap_or(today);
        ResolvedHoliday {
            name: first.name.clone(),
            date,
        }
    }
}
