//! Weekday vocabulary and allow-day sets.
//!
//! Weekdays carry stable ordinals (Monday = 0 through Sunday = 6) and are
//! looked up by their full English name, ignoring case.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Days of the week, ordered Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days of the week in calendar order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Returns the ordinal of this day, 0 for Monday through 6 for Sunday.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case name of this day.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        }
    }

    /// Looks up a day by its full name, ignoring case.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidWeekday`] for anything other than the
    /// seven full day names. Abbreviations such as `Mon` are rejected.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::InvalidWeekday(name.to_string()))
    }

    /// Converts from chrono's Weekday.
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    /// Renders the accepted names as a bracketed list for error messages.
    pub(crate) fn name_list() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|day| day.name()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// The set of weekdays on which the allow-window opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdaySet {
    days: BTreeSet<Weekday>,
}

impl WeekdaySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list of day names, e.g. `Monday,tuesday`.
    ///
    /// Repeated names collapse into one entry.
    ///
    /// # Errors
    /// Fails on the first entry that is not a valid day name.
    pub fn parse_list(input: &str) -> Result<Self> {
        input.split(',').map(Weekday::from_name).collect()
    }

    /// Adds a day to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.days.insert(day);
    }

    /// Returns true if the day is allowed.
    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Returns true if no day is allowed.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of allowed days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Iterates the allowed days in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().copied()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Weekday::name).collect();
        f.write_str(&names.join(","))
    }
}
