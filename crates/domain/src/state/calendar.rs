//! Range-checked hour-of-day and month values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, parse_integer};

/// Hour of the day, `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const MAX: u8 = 23;

    /// The raw hour.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for HourOfDay {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|hour| *hour <= Self::MAX)
            .map(Self)
            .ok_or(ValidationError::TimeOutOfRange(value))
    }
}

impl FromStr for HourOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_integer::<i64>(s)?)
    }
}

impl From<HourOfDay> for u8 {
    fn from(hour: HourOfDay) -> Self {
        hour.0
    }
}

impl std::fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Month number, `0..=12`.
///
/// Zero is accepted alongside `1..=12`; the seasonal rules treat it as
/// part of the cold half of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Month(u8);

impl Month {
    pub const MAX: u8 = 12;

    /// The raw month number.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Month {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|month| *month <= Self::MAX)
            .map(Self)
            .ok_or(ValidationError::MonthOutOfRange(value))
    }
}

impl FromStr for Month {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_integer::<i64>(s)?)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
