//! Console port — line-oriented dialogue with the user.

use homerules_domain::error::HomeRulesError;

/// Interactive text channel to the user.
///
/// Implementations decide how a prompt is shown (same line or its own
/// line); the application only hands over the text.
pub trait Console {
    /// Show `prompt` and read one line of input.
    ///
    /// Returns `Ok(None)` once the input has been closed.
    ///
    /// # Errors
    ///
    /// Returns [`HomeRulesError::Console`] when the underlying channel fails.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, HomeRulesError>;

    /// Print one line of output.
    ///
    /// # Errors
    ///
    /// Returns [`HomeRulesError::Console`] when the underlying channel fails.
    fn say(&mut self, line: &str) -> Result<(), HomeRulesError>;
}

impl<T: Console + ?Sized> Console for &mut T {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, HomeRulesError> {
        (**self).ask(prompt)
    }

    fn say(&mut self, line: &str) -> Result<(), HomeRulesError> {
        (**self).say(line)
    }
}
