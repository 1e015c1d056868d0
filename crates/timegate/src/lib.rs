//! Timegate - hold a pipeline step until its allow-window opens.
//!
//! This crate is the outer layer around [`timegate_core`]:
//!
//! - Command-line parsing and validation ([`args`])
//! - The blocking poll loop ([`gate`])
//!
//! # Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use timegate::gate::{Gate, SystemClock};
//! use timegate_core::{Configuration, WeekdaySet, WindowGenerator};
//!
//! let config = Configuration::new(
//!     WeekdaySet::parse_list("Monday,Tuesday").unwrap(),
//!     chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
//!     chrono::NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
//!     chrono_tz::Europe::London,
//! );
//! let gate = Gate::new(WindowGenerator::new(config), SystemClock, Duration::from_secs(60));
//! gate.wait_until_open();
//! ```

pub mod args;
pub mod gate;

pub use args::{Args, ConfigError, Settings};
pub use gate::{Clock, Gate, GateStatus, SystemClock};
