//! Turns console answers into a validated [`State`].
//!
//! Time and month must be in range, and temperature must be an integer.
//! Anything else is rejected and the same question is asked again, as
//! often as the [`InputPolicy`] allows. A malformed number and a valid
//! but out-of-range number are treated the same way.

use std::num::NonZeroU32;

use homerules_domain::error::{HomeRulesError, ValidationError, parse_integer};
use homerules_domain::state::{HourOfDay, Month, State};

use crate::ports::Console;

pub const TIME_PROMPT: &str = "What is the current time? Input as a number from 0-23: ";
pub const MONTH_PROMPT: &str = "What is the current month? Input as a number from 0-12: ";
pub const TEMPERATURE_PROMPT: &str =
    "What is the current temperature? Input as a number in Fahrenheit: ";
pub const OCCUPANCY_PROMPT: &str = "Is someone home right now? Y/N";
pub const CONTINUE_PROMPT: &str = "Do you want to continue? Y/N";
pub const INVALID_INPUT: &str = "Invalid input, please try again.";

/// How many invalid answers a single question tolerates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputPolicy {
    max_attempts: Option<NonZeroU32>,
}

impl InputPolicy {
    /// Re-prompt forever.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Give up after `max_attempts` invalid answers to the same question.
    #[must_use]
    pub fn bounded(max_attempts: NonZeroU32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// Build from a raw count where `0` means unbounded.
    #[must_use]
    pub fn from_limit(limit: u32) -> Self {
        Self {
            max_attempts: NonZeroU32::new(limit),
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> Option<NonZeroU32> {
        self.max_attempts
    }

    fn is_exhausted(self, failures: u32) -> bool {
        self.max_attempts.is_some_and(|max| failures >= max.get())
    }
}

/// Ask `prompt` until `parse` accepts the answer.
///
/// Returns `Ok(None)` if the input closes before a valid answer arrives.
///
/// # Errors
///
/// Returns [`HomeRulesError::RetriesExhausted`] once the policy's limit of
/// invalid answers is reached, or a console error from the port.
pub fn ask_parsed<C, T, F>(
    console: &mut C,
    policy: InputPolicy,
    field: &'static str,
    prompt: &str,
    parse: F,
) -> Result<Option<T>, HomeRulesError>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    let mut failures: u32 = 0;
    loop {
        let Some(answer) = console.ask(prompt)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                failures = failures.saturating_add(1);
                tracing::debug!(field, %err, failures, "rejected input");
                if policy.is_exhausted(failures) {
                    return Err(HomeRulesError::RetriesExhausted {
                        field,
                        attempts: failures,
                    });
                }
                console.say(INVALID_INPUT)?;
            }
        }
    }
}

/// Ask a yes/no question. Only `y` (any case, surrounding whitespace
/// ignored) counts as yes.
///
/// # Errors
///
/// Returns a console error from the port.
pub fn ask_yes_no<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<Option<bool>, HomeRulesError> {
    Ok(console.ask(prompt)?.map(|answer| is_yes(&answer)))
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Collect one full reading: time, month, temperature, occupancy.
///
/// # Errors
///
/// Returns [`HomeRulesError::RetriesExhausted`] or a console error; see
/// [`ask_parsed`].
pub fn read_state<C: Console + ?Sized>(
    console: &mut C,
    policy: InputPolicy,
) -> Result<Option<State>, HomeRulesError> {
    let Some(time) = ask_parsed(console, policy, "time", TIME_PROMPT, str::parse::<HourOfDay>)?
    else {
        return Ok(None);
    };
    let Some(month) = ask_parsed(console, policy, "month", MONTH_PROMPT, str::parse::<Month>)?
    else {
        return Ok(None);
    };
    let Some(temperature) = ask_parsed(
        console,
        policy,
        "temperature",
        TEMPERATURE_PROMPT,
        parse_integer::<i32>,
    )?
    else {
        return Ok(None);
    };
    let Some(occupied) = ask_yes_no(console, OCCUPANCY_PROMPT)? else {
        return Ok(None);
    };
    Ok(Some(State::new(temperature, time, month, occupied)))
}
