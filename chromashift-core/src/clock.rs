//! Injectable time source for windowed statistics.
//!
//! The estimators window recent deaths by wall time, so the session takes
//! the clock as a type parameter instead of reading the system clock
//! directly. Tests drive [`ManualClock`] to make the windows deterministic.
use std::cell::Cell;
use std::time::Instant;

/// Monotonic, non-decreasing time source measured in seconds.
pub trait Clock {
    fn now(&self) -> f32;
}

/// Real clock backed by [`Instant`]; the zero point is construction time.
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f32 {
        self.epoch.elapsed().as_secs_f32()
    }
}

/// Hand-driven clock for deterministic tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f32>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `secs`; negative steps are ignored so the
    /// clock stays monotonic.
    pub fn advance(&self, secs: f32) {
        if secs > 0.0 {
            self.now.set(self.now.get() + secs);
        }
    }

    /// Jump to an absolute time, never backward.
    pub fn set(&self, secs: f32) {
        if secs > self.now.get() {
            self.now.set(secs);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f32 {
        self.now.get()
    }
}
