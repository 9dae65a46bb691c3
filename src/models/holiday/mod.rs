//! Holiday table model.
//!
//! A holiday is a fixed `(month, day)` that recurs every year. The calendar
//! keeps entries in ascending date order so the resolver can stop at the
//! first upcoming one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One recurring holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// Month of the year, 1-12
    pub month: u32,
    /// Day of the month, 1-31
    pub day: u32,
    /// Display name
    pub name: String,
}

impl HolidayEntry {
    pub fn new(month: u32, day: u32, name: impl Into<String>) -> Self {
        Self {
            month,
            day,
            name: name.into(),
        }
    }

    fn sort_key(&self) -> (u32, u32) {
        (self.month, self.day)
    }
}

/// Validation errors for a holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayValidationError {
    #[error("Holiday list cannot be empty")]
    Empty,
    #[error("Holiday '{name}' has invalid month {month}")]
    InvalidMonth { name: String, month: u32 },
    #[error("Holiday '{name}' has invalid day {day}")]
    InvalidDay { name: String, day: u32 },
    #[error("Holiday at position {index} has an empty name")]
    EmptyName { index: usize },
    #[error("Holiday '{name}' ({month:02}-{day:02}) is out of order or duplicated")]
    OutOfOrder { name: String, month: u32, day: u32 },
}

/// Ordered, non-empty list of holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HolidayEntry>", into = "Vec<HolidayEntry>")]
pub struct HolidayCalendar {
    entries: Vec<HolidayEntry>,
}

impl HolidayCalendar {
    /// Validate and wrap a list of entries. Entries must be strictly
    /// ascending by `(month, day)`.
    pub fn new(entries: Vec<HolidayEntry>) -> Result<Self, HolidayValidationError> {
        if entries.is_empty() {
            return Err(HolidayValidationError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(HolidayValidationError::EmptyName { index });
            }
            if !(1..=12).contains(&entry.month) {
                return Err(HolidayValidationError::InvalidMonth {
                    name: entry.name.clone(),
                    month: entry.month,
                });
            }
            if !(1..=31).contains(&entry.day) {
                return Err(HolidayValidationError::InvalidDay {
                    name: entry.name.clone(),
                    day: entry.day,
                });
            }
        }

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].sort_key() >= pair[1].sort_key())
        {
            let entry = &pair[1];
            return Err(HolidayValidationError::OutOfOrder {
                name: entry.name.clone(),
                month: entry.month,
                day: entry.day,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    /// The earliest holiday of the year. Always present.
    pub fn first(&self) -> &HolidayEntry {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<HolidayEntry>> for HolidayCalendar {
    type Error = HolidayValidationError;

    fn try_from(entries: Vec<HolidayEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<HolidayCalendar> for Vec<HolidayEntry> {
    fn from(calendar: HolidayCalendar) -> Self {
        calendar.entries
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self {
            entries: default_holidays(),
        }
    }
}

/// Holidays that ship with the widget.
pub fn default_holidays() -> Vec<HolidayEntry> {
    vec![
        HolidayEntry::new(1, 1, "元旦"),
        HolidayEntry::new(2, 14, "情人节"),
        HolidayEntry::new(3, 8, "妇女节"),
        HolidayEntry::new(4, 5, "清明节"),
        HolidayEntry::new(5, 1, "劳动节"),
        HolidayEntry::new(5, 4, "青年节"),
        HolidayEntry::new(6, 1, "儿童节"),
        HolidayEntry::new(7, 1, "建党节"),
        HolidayEntry::new(8, 1, "建军节"),
        HolidayEntry::new(9, 10, "教师节"),
        HolidayEntry::new(10, 1, "国庆节"),
        HolidayEntry::new(12, 25, "圣诞节"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_holidays_are_valid() {
        let calendar = HolidayCalendar::new(default_holidays()).unwrap();
        assert_eq!(calendar.len(), 12);
        assert_eq!(calendar.first().name, "元旦");
        assert_eq!(calendar, HolidayCalendar::default());
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            HolidayCalendar::new(Vec::new()),
            Err(HolidayValidationError::Empty)
        );
    }

    #[test]
    fn test_unsorted_list_rejected() {
        let result = HolidayCalendar::new(vec![
            HolidayEntry::new(5, 1, "Labour"),
            HolidayEntry::new(1, 1, "New Year"),
        ]);
        assert!(matches!(
            result,
            Err(HolidayValidationError::OutOfOrder { month: 1, day: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_date_rejected() {
        let result = HolidayCalendar::new(vec![
            HolidayEntry::new(1, 1, "New Year"),
            HolidayEntry::new(1, 1, "Also New Year"),
        ]);
        assert!(matches!(result, Err(HolidayValidationError::OutOfOrder { .. })));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            HolidayCalendar::new(vec![HolidayEntry::new(13, 1, "Nope")]),
            Err(HolidayValidationError::InvalidMonth { month: 13, .. })
        ));
        assert!(matches!(
            HolidayCalendar::new(vec![HolidayEntry::new(2, 0, "Nope")]),
            Err(HolidayValidationError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            HolidayCalendar::new(vec![HolidayEntry::new(1, 1, "  ")]),
            Err(HolidayValidationError::EmptyName { index: 0 })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[{"month":3,"day":1,"name":"b"},{"month":2,"day":1,"name":"a"}]"#;
        let parsed: Result<HolidayCalendar, _> = serde_json::from_str(json);
        assert!(parsed.is_err());

        let json = r#"[{"month":2,"day":1,"name":"a"},{"month":3,"day":1,"name":"b"}]"#;
        let parsed: HolidayCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
