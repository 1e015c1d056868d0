//! Timegate Core - allow-window computation.
//!
//! Given a set of allowed weekdays, a daily start and stop time and a
//! timezone, this crate answers one question for any instant: which
//! allow-window does it belong to, or which one comes next?
//!
//! The engine is pure. It never reads the clock, sleeps or performs I/O, so
//! a [`WindowGenerator`] can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveTime, TimeZone};
//! use chrono_tz::Europe::London;
//! use timegate_core::{Configuration, WeekdaySet, WindowGenerator};
//!
//! let config = Configuration::new(
//!     WeekdaySet::parse_list("Monday,Tuesday").unwrap(),
//!     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
//!     London,
//! );
//! let generator = WindowGenerator::new(config);
//!
//! // Wednesday evening: the next window opens on Monday.
//! let now = London.with_ymd_and_hms(2020, 1, 8, 17, 31, 0).unwrap();
//! let window = generator.window_for(&now);
//! assert_eq!(window.start, London.with_ymd_and_hms(2020, 1, 13, 8, 0, 0).unwrap());
//! assert!(!window.contains(&now));
//! ```

pub mod error;
pub mod generator;
pub mod weekday;
pub mod window;

pub use error::{CoreError, Result};
pub use generator::{localize, Configuration, WindowGenerator};
pub use weekday::{Weekday, WeekdaySet};
pub use window::{Window, MIN_WINDOW_SECONDS};
