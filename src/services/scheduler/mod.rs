//! Widget lifecycle: start, stop and the periodic re-render.
//!
//! The widget is either idle or has exactly one active timer. The timer is
//! an explicit [`TimerHandle`] handed out by [`CountdownWidget::start`];
//! starting again replaces the previous timer rather than stacking a second
//! one on top of it.

use std::time::Duration as StdDuration;

use chrono::{Duration, NaiveDateTime};

use crate::models::settings::{WidgetSettings, MAX_REFRESH_INTERVAL_SECS};
use crate::services::render::{render, RenderHost, RenderOutcome, WIDGET_STYLES};

/// Identifies one activation's periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Scheduled,
}

/// Page lifecycle signals the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    ContentLoaded,
    NavigationComplete,
    NavigationBegin,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTimer {
    handle: TimerHandle,
    next_due_at: NaiveDateTime,
}

pub struct CountdownWidget {
    settings: WidgetSettings,
    timer: Option<ActiveTimer>,
    next_timer_id: u64,
    last_outcome: Option<RenderOutcome>,
}

impl CountdownWidget {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            settings,
            timer: None,
            next_timer_id: 1,
            last_outcome: None,
        }
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    pub fn state(&self) -> WidgetState {
        if self.timer.is_some() {
            WidgetState::Scheduled
        } else {
            WidgetState::Idle
        }
    }

    pub fn active_handle(&self) -> Option<TimerHandle> {
        self.timer.map(|timer| timer.handle)
    }

    /// Outcome of the most recent render, if any.
    pub fn last_outcome(&self) -> Option<&RenderOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn refresh_interval(&self) -> Duration {
        let secs = self
            .settings
            .refresh_interval_secs
            .clamp(1, MAX_REFRESH_INTERVAL_SECS);
        Duration::seconds(secs as i64)
    }

    /// Activate the widget: styles once, one immediate render, then a
    /// periodic re-render. Any timer from an earlier activation is dropped.
    pub fn start<H: RenderHost + ?Sized>(&mut self, host: &mut H, now: NaiveDateTime) -> TimerHandle {
        if let Some(previous) = self.timer.take() {
            log::debug!("Replacing countdown timer {:?}", previous.handle);
        }

        host.inject_styles(WIDGET_STYLES);
        self.render_now(host, now);

        let handle = TimerHandle(self.next_timer_id);
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        self.timer = Some(ActiveTimer {
            handle,
            next_due_at: now + self.refresh_interval(),
        });

        log::info!(
            "Countdown widget started (timer {:?}, every {}s)",
            handle,
            self.refresh_interval().num_seconds()
        );
        handle
    }

    /// Cancel the timer behind `handle`. Returns false when the handle is
    /// stale or the widget is already idle.
    pub fn stop(&mut self, handle: TimerHandle) -> bool {
        match self.timer {
            Some(active) if active.handle == handle => {
                self.timer = None;
                log::info!("Countdown widget stopped (timer {:?})", handle);
                true
            }
            _ => false,
        }
    }

    /// Re-render if the active timer is due. Missed intervals are skipped,
    /// not replayed.
    pub fn tick<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
        now: NaiveDateTime,
    ) -> Option<RenderOutcome> {
        let interval = self.refresh_interval();
        let timer = self.timer.as_mut()?;
        if now < timer.next_due_at {
            return None;
        }

        while timer.next_due_at <= now {
            timer.next_due_at += interval;
        }
        log::debug!("Countdown tick at {}, next at {}", now, timer.next_due_at);

        Some(self.render_now(host, now))
    }

    /// Time until the next scheduled re-render, or `None` while idle.
    pub fn next_due_in(&self, now: NaiveDateTime) -> Option<StdDuration> {
        self.timer.map(|timer| {
            (timer.next_due_at - now)
                .to_std()
                .unwrap_or_else(|_| StdDuration::from_secs(0))
        })
    }

    /// Page loads and completed navigations restart the widget; a
    /// navigation that begins tears the timer down.
    pub fn handle_event<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: PageEvent,
        now: NaiveDateTime,
    ) -> Option<TimerHandle> {
        match event {
            PageEvent::ContentLoaded | PageEvent::NavigationComplete => Some(self.start(host, now)),
            PageEvent::NavigationBegin => {
                if let Some(handle) = self.active_handle() {
                    self.stop(handle);
                }
                None
            }
        }
    }

    fn render_now<H: RenderHost + ?Sized>(&mut self, host: &mut H, now: NaiveDateTime) -> RenderOutcome {
        let outcome = render(host, &self.settings, now);
        self.last_outcome = Some(outcome.clone());
        outcome
    }
}
