// Settings module
// Widget configuration: holiday table, labels, target ids and cadence

use serde::{Deserialize, Serialize};

use crate::models::holiday::HolidayCalendar;
use crate::models::progress::PeriodLabels;

pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 600;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 86_400;

/// Identifiers of the four host slots the widget writes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderTargetIds {
    pub event_name: String,
    pub event_date: String,
    pub days_until: String,
    pub progress_container: String,
}

impl RenderTargetIds {
    pub fn all(&self) -> [&str; 4] {
        [
            &self.event_name,
            &self.event_date,
            &self.days_until,
            &self.progress_container,
        ]
    }
}

impl Default for RenderTargetIds {
    fn default() -> Self {
        Self {
            event_name: "eventName".to_string(),
            event_date: "eventDate".to_string(),
            days_until: "daysUntil".to_string(),
            progress_container: "countRight".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub refresh_interval_secs: u64,
    /// Percentage at or above which the percentage text is emphasized
    pub percentage_emphasis_threshold: f64,
    /// Percentage at or above which the remaining text is emphasized
    pub remaining_emphasis_threshold: f64,
    /// Prefix shown before the remaining count
    pub remaining_tip: String,
    pub holidays: HolidayCalendar,
    pub periods: PeriodLabels,
    pub targets: RenderTargetIds,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            percentage_emphasis_threshold: 46.0,
            remaining_emphasis_threshold: 60.0,
            remaining_tip: "还剩".to_string(),
            holidays: HolidayCalendar::default(),
            periods: PeriodLabels::default(),
            targets: RenderTargetIds::default(),
        }
    }
}

impl WidgetSettings {
    /// Check the values serde cannot check on its own. The holiday table
    /// validates itself on construction.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_REFRESH_INTERVAL_SECS).contains(&self.refresh_interval_secs) {
            return Err(format!(
                "Refresh interval must be between 1 and {} seconds",
                MAX_REFRESH_INTERVAL_SECS
            ));
        }

        for (name, value) in [
            ("percentage_emphasis_threshold", self.percentage_emphasis_threshold),
            ("remaining_emphasis_threshold", self.remaining_emphasis_threshold),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number", name));
            }
        }

        if self.targets.all().iter().any(|id| id.trim().is_empty()) {
            return Err("Render target ids cannot be blank".to_string());
        }

        Ok(())
    }
}
