//! The blocking poll loop.
//!
//! The gate samples a [`Clock`], asks the engine for the current window and
//! either returns or sleeps one poll interval and tries again. The window is
//! recomputed on every tick, so a gate started long before its window still
//! lands in it.

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use timegate_core::{Window, WindowGenerator};

/// Source of the current time and of blocking waits.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Where an instant stands relative to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateStatus {
    /// The sampled instant, in the configured timezone.
    pub now: DateTime<Tz>,
    /// The window that instant belongs to or is waiting for.
    #[serde(flatten)]
    pub window: Window,
    /// Whether `now` lies inside the window.
    pub open: bool,
    /// Whether the window start has been reached.
    pub started: bool,
}

/// Blocks a caller until the allow-window opens.
#[derive(Debug)]
pub struct Gate<C: Clock> {
    generator: WindowGenerator,
    clock: C,
    poll_interval: Duration,
}

impl<C: Clock> Gate<C> {
    /// Creates a gate polling `clock` every `poll_interval`.
    pub fn new(generator: WindowGenerator, clock: C, poll_interval: Duration) -> Self {
        Self {
            generator,
            clock,
            poll_interval,
        }
    }

    /// Samples the clock once and reports the window state.
    pub fn status(&self) -> GateStatus {
        let now = self
            .clock
            .now()
            .with_timezone(&self.generator.config().timezone);
        let window = self.generator.window_for(&now);
        GateStatus {
            now,
            window,
            open: window.contains(&now),
            started: window.has_started(&now),
        }
    }

    /// Blocks until the clock reads a time inside the window.
    ///
    /// Returns the first sampled instant that was inside.
    pub fn wait_until_open(&self) -> DateTime<Tz> {
        loop {
            let status = self.status();
            if status.open {
                tracing::info!("Unblock the trigger.");
                return status.now;
            }
            tracing::info!(
                "Current time: {} Blocking the trigger until the start time {}",
                status.now,
                status.window.start
            );
            self.clock.sleep(self.poll_interval);
        }
    }
}
