//! Render step: computes the widget values and writes them into the host.
//!
//! A render only happens when all four targets exist on the host. A page
//! without them is treated as "widget not on this page" and reported as
//! [`RenderOutcome::Skipped`], never as an error.

mod host;
mod markup;

pub use host::{MemoryPage, RenderHost};
pub use markup::WIDGET_STYLES;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::progress::{PeriodKind, PeriodProgress};
use crate::models::settings::WidgetSettings;
use crate::services::holiday::HolidayResolver;
use crate::services::progress::all_progress;
use crate::utils::date::format_ymd;

use markup::{progress_row, Emphasis};

/// Values written by a successful render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSnapshot {
    pub holiday_name: String,
    /// `YYYY-MM-DD`
    pub holiday_date: String,
    pub days_until: i64,
    pub periods: Vec<PeriodSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSnapshot {
    pub kind: PeriodKind,
    pub label: String,
    pub unit: String,
    #[serde(flatten)]
    pub progress: PeriodProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenderOutcome {
    Rendered(WidgetSnapshot),
    /// One or more targets were absent; nothing was written.
    Skipped { missing: Vec<String> },
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }

    pub fn snapshot(&self) -> Option<&WidgetSnapshot> {
        match self {
            RenderOutcome::Rendered(snapshot) => Some(snapshot),
            RenderOutcome::Skipped { .. } => None,
        }
    }
}

/// Compute the widget values for `now` without touching a host.
pub fn compute_snapshot(settings: &WidgetSettings, now: NaiveDateTime) -> WidgetSnapshot {
    let holiday = HolidayResolver::new(&settings.holidays).resolve(now);

    let periods = all_progress(now)
        .into_iter()
        .map(|(kind, progress)| {
            let config = settings.periods.get(kind);
            PeriodSnapshot {
                kind,
                label: config.label.clone(),
                unit: config.unit.clone(),
                progress,
            }
        })
        .collect();

    WidgetSnapshot {
        days_until: holiday.days_until(now),
        holiday_date: format_ymd(holiday.date),
        holiday_name: holiday.name,
        periods,
    }
}

/// Markup for the progress container.
pub fn progress_markup(settings: &WidgetSettings, snapshot: &WidgetSnapshot) -> String {
    let emphasis = Emphasis {
        percentage_at: settings.percentage_emphasis_threshold,
        remaining_at: settings.remaining_emphasis_threshold,
    };

    snapshot
        .periods
        .iter()
        .map(|period| {
            progress_row(
                settings.periods.get(period.kind),
                &period.progress,
                &settings.remaining_tip,
                emphasis,
            )
        })
        .collect()
}

pub fn render<H: RenderHost + ?Sized>(
    host: &mut H,
    settings: &WidgetSettings,
    now: NaiveDateTime,
) -> RenderOutcome {
    let targets = &settings.targets;
    let missing: Vec<String> = targets
        .all()
        .iter()
        .filter(|id| !host.has_target(id))
        .map(|id| id.to_string())
        .collect();
    if !missing.is_empty() {
        return RenderOutcome::Skipped { missing };
    }

    let snapshot = compute_snapshot(settings, now);

    host.set_text(&targets.event_name, &snapshot.holiday_name);
    host.set_text(&targets.event_date, &snapshot.holiday_date);
    host.set_text(&targets.days_until, &snapshot.days_until.to_string());
    host.set_markup(
        &targets.progress_container,
        &progress_markup(settings, &snapshot),
    );

    RenderOutcome::Rendered(snapshot)
}
