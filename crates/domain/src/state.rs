//! State — one snapshot of the environment the rules look at.
//!
//! A [`State`] is immutable once constructed. The range-checked parts
//! (hour of day, month) are carried as value types so that a `State`
//! can never hold an out-of-range reading.

mod calendar;

pub use calendar::{HourOfDay, Month};

use serde::{Deserialize, Serialize};

/// Snapshot of temperature, time, month and occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    temperature: i32,
    time: HourOfDay,
    month: Month,
    occupied: bool,
}

impl State {
    /// Build a snapshot from already-validated parts.
    ///
    /// `temperature` is in degrees Fahrenheit and is not range checked.
    #[must_use]
    pub fn new(temperature: i32, time: HourOfDay, month: Month, occupied: bool) -> Self {
        Self {
            temperature,
            time,
            month,
            occupied,
        }
    }

    /// Temperature in degrees Fahrenheit.
    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Hour of day, `0..=23`.
    #[must_use]
    pub fn time(&self) -> u8 {
        self.time.get()
    }

    /// Month number, `0..=12`.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Whether someone is home.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "temperature={}°F time={} month={} occupied={}",
            self.temperature,
            self.time,
            self.month,
            if self.occupied { "yes" } else { "no" }
        )
    }
}
