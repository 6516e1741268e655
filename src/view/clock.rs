//! One-second wall clock shown in the top bar.

use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

/// 24-hour local time, e.g. `17:04:09`.
pub fn wall_clock_text() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Repeating one-second tick owned by the view controller.
pub struct Clock {
    text: String,
    source: fn() -> String,
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new(now: Instant) -> Self {
        Self::with_source(now, wall_clock_text)
    }

    pub fn with_source(now: Instant, source: fn() -> String) -> Self {
        Self {
            text: source(),
            source,
            last_tick: Some(now),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Hours and minutes only, for the compact top bar.
    pub fn short_text(&self) -> &str {
        self.text.get(..5).unwrap_or(&self.text)
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Recompute the text if a full second has passed. Returns whether it ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_tick else {
            return false;
        };
        if now.saturating_duration_since(last) < TICK {
            return false;
        }
        self.text = (self.source)();
        self.last_tick = Some(now);
        true
    }

    /// Delay until the next tick, `None` once stopped.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.last_tick
            .map(|last| (last + TICK).saturating_duration_since(now))
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }
}
