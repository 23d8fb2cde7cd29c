//! Frame clock
//!
//! Sleeps until the next tick deadline and hands back a clamped delta-time.

use std::time::{Duration, Instant};

use crate::settings::SimConfig;

/// Monotonic time plus the ability to wait
pub trait TimeSource {
    /// Time since an arbitrary fixed origin
    fn now(&self) -> Duration;
    /// Block for at least `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock time backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Time that only moves when told to (sleeping advances it exactly)
#[derive(Debug, Clone, Default)]
pub struct ManualTime {
    now: Duration,
}

impl ManualTime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate work (or a stall) between ticks
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
    }
}

/// Fixed-interval tick limiter
#[derive(Debug)]
pub struct FrameClock<T: TimeSource = MonotonicTime> {
    source: T,
    last_tick: Duration,
    target: Duration,
    max_delta: f32,
}

impl<T: TimeSource> FrameClock<T> {
    /// The first tick measures from construction
    pub fn new(source: T, target: Duration, max_delta: f32) -> Self {
        let last_tick = source.now();
        Self {
            source,
            last_tick,
            target,
            max_delta,
        }
    }

    pub fn from_config(source: T, config: &SimConfig) -> Self {
        Self::new(source, config.target_frame_time(), config.max_delta_time)
    }

    /// Wait for the next deadline and return elapsed seconds, clamped
    pub fn tick(&mut self) -> f32 {
        let deadline = self.last_tick + self.target;
        let now = self.source.now();
        if now < deadline {
            self.source.sleep(deadline - now);
        }

        let now = self.source.now();
        let dt = now.saturating_sub(self.last_tick).as_secs_f32();
        self.last_tick = now;
        dt.min(self.max_delta)
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }
}
