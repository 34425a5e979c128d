//! Console adapter error types.

use homerules_domain::error::HomeRulesError;

/// Errors specific to the console adapter.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading from or writing to the terminal failed.
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
}

impl From<ConsoleError> for HomeRulesError {
    fn from(err: ConsoleError) -> Self {
        HomeRulesError::Console(Box::new(err))
    }
}
