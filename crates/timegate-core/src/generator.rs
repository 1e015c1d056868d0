//! Allow-window computation.
//!
//! [`WindowGenerator::window_for`] maps any instant to the allow-window it
//! belongs to, or to the next one if the instant falls on a day that is not
//! allowed or after the day's stop time.
//!
//! ## Localization
//!
//! Wall-clock readings are turned into instants with a fixed prefer-DST
//! policy so that repeated calls always agree:
//!
//! - ambiguous readings (clocks going back) take the summer interpretation,
//!   the one with the larger UTC offset, falling back to the earlier instant
//! - nonexistent readings (clocks going forward) take the offset in force
//!   after the gap, which lands before the transition in absolute time
//!
//! ## Calendar edges
//!
//! Near the ends of the representable range the next window may not exist.
//! The latest allowed window that does exist is returned instead, so the
//! result always falls on an allowed day.

use std::cmp::Ordering;

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::weekday::{Weekday, WeekdaySet};
use crate::window::Window;

/// Shift used to step over a spring-forward gap when localizing.
const GAP_SHIFT_HOURS: i64 = 6;

/// Dates scanned in either direction; one full week plus today.
const SCAN_DAYS: usize = 8;

/// Allow-window configuration.
///
/// The caller guarantees `start < stop`, a gap of at least
/// [`MIN_WINDOW_SECONDS`](crate::window::MIN_WINDOW_SECONDS) and a non-empty
/// day set. None of this is re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Days on which the window opens.
    pub days: WeekdaySet,
    /// Local time the window opens.
    pub start: NaiveTime,
    /// Local time the window closes.
    pub stop: NaiveTime,
    /// Timezone the times are read in.
    pub timezone: Tz,
}

impl Configuration {
    /// Creates a configuration from already validated parts.
    pub fn new(days: WeekdaySet, start: NaiveTime, stop: NaiveTime, timezone: Tz) -> Self {
        debug_assert!(!days.is_empty(), "at least one day must be allowed");
        debug_assert!(start < stop, "start must precede stop");
        Self {
            days,
            start,
            stop,
            timezone,
        }
    }
}

/// Computes allow-windows for a fixed configuration.
#[derive(Debug, Clone)]
pub struct WindowGenerator {
    config: Configuration,
}

impl WindowGenerator {
    /// Creates a generator that owns `config`.
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Returns the configuration this generator evaluates.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Returns the window `current` belongs to, or the next one.
    ///
    /// On an allowed day at or before the stop time this is today's window,
    /// even when `current` precedes the start time. Callers tell "not yet
    /// open" apart with [`Window::has_started`].
    ///
    /// # Panics
    /// Panics if the configuration allows no day at all.
    pub fn window_for<T: TimeZone>(&self, current: &DateTime<T>) -> Window {
        let local = self.local_reading(current);
        let today = local.date();
        let opens_today = self.is_allowed(today) && local.time() <= self.config.stop;

        let upcoming = today
            .iter_days()
            .skip(usize::from(!opens_today))
            .take(SCAN_DAYS)
            .filter(|date| self.is_allowed(*date))
            .find_map(|date| self.window_on(date));

        let window = upcoming.or_else(|| {
            today
                .iter_days()
                .rev()
                .take(SCAN_DAYS)
                .filter(|date| self.is_allowed(*date))
                .find_map(|date| self.window_on(date))
        });

        tracing::trace!(%local, ?window, "resolved window");
        match window {
            Some(window) => window,
            None => panic!("no allowed day in {}", self.config.days),
        }
    }

    /// Wall-clock reading of `current` in the configured timezone.
    ///
    /// Clamps to the ends of the naive range instead of overflowing.
    fn local_reading<T: TimeZone>(&self, current: &DateTime<T>) -> NaiveDateTime {
        let utc = current.naive_utc();
        let offset = self
            .config
            .timezone
            .offset_from_utc_datetime(&utc)
            .fix()
            .local_minus_utc();
        utc.checked_add_signed(Duration::seconds(i64::from(offset)))
            .unwrap_or(if offset > 0 {
                NaiveDateTime::MAX
            } else {
                NaiveDateTime::MIN
            })
    }

    fn is_allowed(&self, date: NaiveDate) -> bool {
        self.config
            .days
            .contains(Weekday::from_chrono(date.weekday()))
    }

    /// Builds the window for a given local date, if both ends are representable.
    fn window_on(&self, date: NaiveDate) -> Option<Window> {
        let tz = self.config.timezone;
        Some(Window::new(
            localize(tz, date.and_time(self.config.start))?,
            localize(tz, date.and_time(self.config.stop))?,
        ))
    }
}

/// Resolves a wall-clock reading in `tz` with the prefer-DST policy.
///
/// Returns `None` only when the instant falls outside the representable range.
pub fn localize(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(first, second) => Some(prefer_summer(first, second)),
        LocalResult::None => {
            let shift = Duration::hours(GAP_SHIFT_HOURS);
            localize(tz, naive.checked_add_signed(shift)?)?.checked_sub_signed(shift)
        }
    }
}

/// Picks the summer reading of an ambiguous pair: the larger UTC offset.
///
/// Offsets are compared in total rather than by their DST component, since
/// zones such as Europe/Dublin model winter as a negative DST offset.
fn prefer_summer(first: DateTime<Tz>, second: DateTime<Tz>) -> DateTime<Tz> {
    let offset = |dt: &DateTime<Tz>| dt.offset().fix().local_minus_utc();
    match offset(&first).cmp(&offset(&second)) {
        Ordering::Greater => first,
        Ordering::Less => second,
        Ordering::Equal => first.min(second),
    }
}
