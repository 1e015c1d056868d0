//! The allow-window value type.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

/// Narrowest window the outer layer accepts, in seconds.
///
/// Pollers must sample the clock more often than this or they can step
/// over a window entirely.
pub const MIN_WINDOW_SECONDS: i64 = 120;

/// A single occurrence of the allow-window.
///
/// Both ends lie on the same local calendar date in the configured timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    /// Instant the window opens.
    pub start: DateTime<Tz>,
    /// Instant the window closes (inclusive).
    pub stop: DateTime<Tz>,
}

impl Window {
    /// Creates a window from its two ends.
    pub fn new(start: DateTime<Tz>, stop: DateTime<Tz>) -> Self {
        Self { start, stop }
    }

    /// Returns true if `instant` lies within `[start, stop]`.
    pub fn contains<T: TimeZone>(&self, instant: &DateTime<T>) -> bool {
        self.has_started(instant) && *instant <= self.stop
    }

    /// Returns true once `instant` has reached the window start.
    pub fn has_started<T: TimeZone>(&self, instant: &DateTime<T>) -> bool {
        *instant >= self.start
    }

    /// Width of the window.
    pub fn duration(&self) -> chrono::Duration {
        self.stop.signed_duration_since(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use chrono_tz::Europe::London;

    fn window() -> Window {
        Window::new(
            London.with_ymd_and_hms(2020, 1, 6, 8, 0, 0).unwrap(),
            London.with_ymd_and_hms(2020, 1, 6, 16, 30, 0).unwrap(),
        )
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let window = window();
        assert!(window.contains(&window.start));
        assert!(window.contains(&window.stop));
        assert!(!window.contains(&(window.start - chrono::Duration::nanoseconds(1))));
        assert!(!window.contains(&(window.stop + chrono::Duration::nanoseconds(1))));
    }

    #[test]
    fn contains_compares_instants_across_zones() {
        let window = window();
        // London is on GMT in January, so 12:00 UTC is 12:00 local.
        let noon_utc = Utc.with_ymd_and_hms(2020, 1, 6, 12, 0, 0).unwrap();
        assert!(window.contains(&noon_utc));
        let late_utc = Utc.with_ymd_and_hms(2020, 1, 6, 16, 31, 0).unwrap();
        assert!(!window.contains(&late_utc));
    }

    #[test]
    fn has_started_separates_pending_from_open() {
        let window = window();
        let early = London.with_ymd_and_hms(2020, 1, 6, 7, 0, 0).unwrap();
        assert!(!window.has_started(&early));
        assert!(window.has_started(&window.stop));
    }

    #[test]
    fn duration_spans_start_to_stop() {
        assert_eq!(window().duration(), chrono::Duration::minutes(8 * 60 + 30));
    }

    #[test]
    fn window_serialization() {
        let json = serde_json::to_value(window()).unwrap();
        assert_eq!(json["start"], "2020-01-06T08:00:00Z");
        assert_eq!(json["stop"], "2020-01-06T16:30:00Z");
    }
}
