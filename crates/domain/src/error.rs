//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeRulesError`] through an explicit `From` impl. A
//! [`ValidationError`] never escapes the input loop: the answer is
//! rejected and the question asked again.

/// Top-level error for the homerules workspace.
#[derive(Debug, thiserror::Error)]
pub enum HomeRulesError {
    /// The console adapter failed to read or write.
    #[error("console error")]
    Console(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A report could not be encoded for output.
    #[error("failed to encode report")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A bounded retry policy ran out of attempts for one prompt.
    #[error("gave up reading {field} after {attempts} invalid attempts")]
    RetriesExhausted {
        /// Which reading was being collected, e.g. `"time"`.
        field: &'static str,
        /// How many invalid answers were given.
        attempts: u32,
    },
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The input could not be parsed as an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Hour of day outside `0..=23`.
    #[error("time must be between 0 and 23, got {0}")]
    TimeOutOfRange(i64),

    /// Month outside `0..=12`.
    #[error("month must be between 0 and 12, got {0}")]
    MonthOutOfRange(i64),
}

/// Parse a trimmed integer, mapping failures to [`ValidationError::NotANumber`].
///
/// # Errors
///
/// Returns [`ValidationError::NotANumber`] when `input` is not an integer
/// that fits in `T`.
pub fn parse_integer<T: std::str::FromStr>(input: &str) -> Result<T, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))
}
