//! Command-line arguments and their validation.
//!
//! Flags arrive as raw strings and are turned into a [`Configuration`] here,
//! before the engine ever sees them. Anything the engine assumes (a known
//! timezone, start before stop, a two minute minimum window) is checked in
//! [`Args::into_settings`].

use std::time::Duration;

use chrono::NaiveTime;
use chrono_tz::Tz;
use clap::Parser;
use thiserror::Error;
use timegate_core::{Configuration, CoreError, WeekdaySet, MIN_WINDOW_SECONDS};

/// Wall-clock format accepted for start and stop times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Timegate - block until the current time is inside an allow-window
#[derive(Parser, Debug)]
#[command(name = "timegate", version, about)]
pub struct Args {
    /// Days on which the gate opens, e.g. Monday,Tuesday
    #[arg(short, long)]
    pub days: String,

    /// IANA timezone the start and stop times are read in
    #[arg(short, long, default_value = "Europe/London")]
    pub timezone: String,

    /// Time the gate opens, in %H:%M:%S format
    #[arg(short, long = "start-time", alias = "startTime", default_value = "08:00:00")]
    pub start_time: String,

    /// Time the gate closes, in %H:%M:%S format
    #[arg(short = 'e', long = "stop-time", alias = "stopTime", default_value = "16:30:00")]
    pub stop_time: String,

    /// Seconds to sleep between clock samples
    #[arg(long, default_value_t = 60)]
    pub poll_interval: u64,

    /// Print the current window as JSON and exit without blocking
    #[arg(long)]
    pub print_window: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Errors found while validating command-line input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A day name was not recognised.
    #[error(transparent)]
    InvalidWeekday(#[from] CoreError),

    /// A start or stop time did not match [`TIME_FORMAT`].
    #[error("The {field} has an invalid time format [{value}]. It should be in %H:%M:%S")]
    InvalidTime {
        /// Which flag was malformed.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The timezone is not in the tz database.
    #[error("{0} is not a valid timezone.")]
    InvalidTimezone(String),

    /// Start is at or after stop.
    #[error("The start time [{start}] cannot be greater than or equal to the stop time [{stop}]")]
    StartNotBeforeStop {
        /// Parsed start time.
        start: NaiveTime,
        /// Parsed stop time.
        stop: NaiveTime,
    },

    /// Start and stop are closer than the minimum window width.
    #[error("The start time [{start}] should be at least two minutes from the stop time [{stop}]")]
    WindowTooShort {
        /// Parsed start time.
        start: NaiveTime,
        /// Parsed stop time.
        stop: NaiveTime,
    },

    /// The poll interval could step over the narrowest possible window.
    #[error("The poll interval [{0}s] should be between 1 and {max} seconds", max = MIN_WINDOW_SECONDS - 1)]
    InvalidPollInterval(u64),
}

/// Validated settings for one run of the gate.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Engine configuration.
    pub config: Configuration,
    /// Delay between clock samples.
    pub poll_interval: Duration,
    /// Report the window instead of waiting for it.
    pub print_window: bool,
}

impl Args {
    /// Validates the raw flags, in the order they are reported to the user.
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let days = WeekdaySet::parse_list(&self.days)?;
        let timezone = parse_timezone(&self.timezone)?;
        let start = parse_time("start time", &self.start_time)?;
        let stop = parse_time("stop time", &self.stop_time)?;
        validate_window(start, stop)?;
        let poll_interval = validate_poll_interval(self.poll_interval)?;

        Ok(Settings {
            config: Configuration::new(days, start, stop, timezone),
            poll_interval,
            print_window: self.print_window,
        })
    }
}

/// Looks up an IANA timezone identifier.
pub fn parse_timezone(value: &str) -> Result<Tz, ConfigError> {
    value
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(value.to_string()))
}

/// Parses a wall-clock time in [`TIME_FORMAT`].
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ConfigError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Checks that `start` precedes `stop` by at least the minimum window width.
pub fn validate_window(start: NaiveTime, stop: NaiveTime) -> Result<(), ConfigError> {
    if start >= stop {
        return Err(ConfigError::StartNotBeforeStop { start, stop });
    }
    if (stop - start).num_seconds() < MIN_WINDOW_SECONDS {
        return Err(ConfigError::WindowTooShort { start, stop });
    }
    Ok(())
}

fn validate_poll_interval(seconds: u64) -> Result<Duration, ConfigError> {
    // Sub-second precision is lost here, so the cap is one second short.
    if seconds == 0 || seconds >= MIN_WINDOW_SECONDS as u64 {
        return Err(ConfigError::InvalidPollInterval(seconds));
    }
    Ok(Duration::from_secs(seconds))
}
