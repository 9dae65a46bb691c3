//! Period progress model.

use serde::{Deserialize, Serialize};

/// Calendar periods tracked by the progress rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    Month,
    Year,
}

impl PeriodKind {
    pub const ALL: [PeriodKind; 4] = [
        PeriodKind::Day,
        PeriodKind::Week,
        PeriodKind::Month,
        PeriodKind::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Day => "day",
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::Year => "year",
        }
    }
}

/// Elapsed share of a period. `remaining` is in hours for the day and in
/// days otherwise. `percentage` is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodProgress {
    pub remaining: i64,
    pub percentage: f64,
}

/// Display label and remaining-count unit for one period row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub label: String,
    pub unit: String,
}

impl PeriodConfig {
    pub fn new(label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
        }
    }
}

/// Labels for all four rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodLabels {
    pub day: PeriodConfig,
    pub week: PeriodConfig,
    pub month: PeriodConfig,
    pub year: PeriodConfig,
}

impl PeriodLabels {
    pub fn get(&self, kind: PeriodKind) -> &PeriodConfig {
        match kind {
            PeriodKind::Day => &self.day,
            PeriodKind::Week => &self.week,
            PeriodKind::Month => &self.month,
            PeriodKind::Year => &self.year,
        }
    }
}

impl Default for PeriodLabels {
    fn default() -> Self {
        Self {
            day: PeriodConfig::new("今日", "小时"),
            week: PeriodConfig::new("本周", "天"),
            month: PeriodConfig::new("本月", "天"),
            year: PeriodConfig::new("本年", "天"),
        }
    }
}
