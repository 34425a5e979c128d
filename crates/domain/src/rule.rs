//! Rule — a named, pure predicate deciding whether a device should run.
//!
//! Every rule looks at the `current` reading and the `previous` one. The
//! heater and air-conditioning rules require both readings to agree,
//! which keeps them from cycling on a single borderline sample.
//!
//! All comparisons are strict: a reading sitting exactly on a threshold
//! never activates a device.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::state::State;

/// Comfort temperature in degrees Fahrenheit shared by the blinds,
/// heater and air-conditioning rules.
pub const SET_POINT_F: i32 = 70;

/// Hours strictly between 9 and 18.
const DAYTIME: RangeInclusive<u8> = 10..=17;
/// Hours strictly between 18 and 22.
const EVENING: RangeInclusive<u8> = 19..=21;
/// Months strictly between 4 and 10.
const WARM_MONTHS: RangeInclusive<u8> = 5..=9;

/// The built-in device rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Open the blinds during the day when it is not too warm.
    Blinds,
    /// Heat during the cold half of the year while someone is home.
    Heater,
    /// Cool during the warm half of the year while someone is home.
    Ac,
    /// Light the home in the evening while someone is (or just was) home.
    Lights,
}

impl Rule {
    /// All rules in their canonical order.
    pub const ALL: [Rule; 4] = [Rule::Blinds, Rule::Heater, Rule::Ac, Rule::Lights];

    /// Device name shown to the user.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Blinds => "Blinds",
            Self::Heater => "Heater",
            Self::Ac => "AC",
            Self::Lights => "Lights",
        }
    }

    /// Status shown when the rule holds.
    #[must_use]
    pub fn active_label(self) -> &'static str {
        match self {
            Self::Blinds => "open",
            Self::Heater | Self::Ac => "running",
            Self::Lights => "on",
        }
    }

    /// Status shown when the rule does not hold.
    #[must_use]
    pub fn inactive_label(self) -> &'static str {
        match self {
            Self::Blinds => "closed",
            Self::Heater | Self::Ac | Self::Lights => "off",
        }
    }

    /// Status for the given outcome.
    #[must_use]
    pub fn label(self, active: bool) -> &'static str {
        if active {
            self.active_label()
        } else {
            self.inactive_label()
        }
    }

    /// One-line description of the condition.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Blinds => "open between 9 and 18 o'clock while below the set point",
            Self::Heater => {
                "run in the cold months while home and both readings are below the set point"
            }
            Self::Ac => {
                "run in the warm months while home and both readings are above the set point"
            }
            Self::Lights => {
                "turn on between 18 and 22 o'clock while someone is or just was home"
            }
        }
    }

    /// Evaluate the rule against a pair of readings.
    ///
    /// Pure: neither input is modified and the result depends only on them.
    #[must_use]
    pub fn is_active(self, current: &State, previous: &State) -> bool {
        match self {
            Self::Blinds => {
                DAYTIME.contains(&current.time()) && current.temperature() < SET_POINT_F
            }
            Self::Heater => {
                current.temperature() < SET_POINT_F
                    && previous.temperature() < SET_POINT_F
                    && is_cold_season(current.month())
                    && current.is_occupied()
            }
            Self::Ac => {
                current.temperature() > SET_POINT_F
                    && previous.temperature() > SET_POINT_F
                    && !is_cold_season(current.month())
                    && current.is_occupied()
            }
            // Lights stay on for one extra round after everyone leaves.
            Self::Lights => {
                (previous.is_occupied() || current.is_occupied())
                    && EVENING.contains(&current.time())
            }
        }
    }
}

/// Months `0..=4` and `10..=12` are the cold season.
fn is_cold_season(month: u8) -> bool {
    !WARM_MONTHS.contains(&month)
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
