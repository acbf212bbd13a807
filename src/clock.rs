use std::time::{Duration, Instant};

use chrono::NaiveTime;

/// How often the displayed time is refreshed.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Something that can tell the current time of day.
pub trait TimeSource {
    fn now(&self) -> NaiveTime;
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// The text shown on the clock button and the tick schedule driving it.
#[derive(Debug, Clone)]
pub struct ClockFace {
    label: String,
    /// Start of the current tick period. Advances in whole ticks.
    tick_start: Instant,
}

impl ClockFace {
    pub fn new(source: &impl TimeSource, at: Instant) -> Self {
        Self {
            label: format_time(source.now()),
            tick_start: at,
        }
    }

    /// Advances the tick schedule and re-renders the label when the
    /// wall-clock second changed. Returns `true` if the label changed.
    pub fn tick(&mut self, source: &impl TimeSource, at: Instant) -> bool {
        let elapsed = at.saturating_duration_since(self.tick_start);
        if elapsed >= TICK_INTERVAL * 2 {
            // too far behind to catch up tick by tick
            self.tick_start = at;
        } else if elapsed >= TICK_INTERVAL {
            self.tick_start += TICK_INTERVAL;
        }

        let label = format_time(source.now());
        if label == self.label {
            return false;
        }
        self.label = label;
        tracing::trace!(label = %self.label, "clock ticked");
        true
    }

    /// Time left until the next scheduled tick.
    pub fn until_next_tick(&self, at: Instant) -> Duration {
        TICK_INTERVAL.saturating_sub(at.saturating_duration_since(self.tick_start))
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
