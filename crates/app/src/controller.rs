//! Controller — the interactive evaluation loop.
//!
//! Each round walks through four phases:
//!
//! ```text
//! AwaitInput ──► Evaluate ──► Report ──► AskContinue ──┐
//!     ▲                                                │ "y"
//!     └────────────────────────────────────────────────┘
//! ```
//!
//! Any other answer to the continue prompt ends the session, as does the
//! input closing at any prompt.

use homerules_domain::error::HomeRulesError;
use homerules_domain::state::State;

use crate::input::{self, CONTINUE_PROMPT, InputPolicy};
use crate::ports::Console;
use crate::report::{self, ReportFormat};
use crate::session::{Round, Session};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The user declined to continue.
    UserStopped,
    /// The input stream closed.
    InputClosed,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserStopped => f.write_str("user stopped"),
            Self::InputClosed => f.write_str("input closed"),
        }
    }
}

/// Result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub reason: EndReason,
}

#[derive(Debug)]
enum Phase {
    AwaitInput,
    Evaluate(State),
    Report(Round),
    AskContinue,
    Done(EndReason),
}

/// Drives a [`Session`] through a [`Console`].
pub struct Controller<C> {
    console: C,
    session: Session,
    policy: InputPolicy,
    format: ReportFormat,
}

impl<C: Console> Controller<C> {
    /// Create a controller with unbounded re-prompting and text reports.
    pub fn new(console: C, session: Session) -> Self {
        Self {
            console,
            session,
            policy: InputPolicy::default(),
            format: ReportFormat::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run rounds until the user stops or the input closes.
    ///
    /// # Errors
    ///
    /// Returns [`HomeRulesError::RetriesExhausted`] when a bounded input
    /// policy gives up, or any console/encoding error raised on the way.
    #[tracing::instrument(skip(self), fields(format = ?self.format))]
    pub fn run(&mut self) -> Result<SessionSummary, HomeRulesError> {
        tracing::info!(rules = self.session.rules().len(), "session started");
        let mut phase = Phase::AwaitInput;
        loop {
            phase = match phase {
                Phase::AwaitInput => match input::read_state(&mut self.console, self.policy)? {
                    Some(state) => Phase::Evaluate(state),
                    None => Phase::Done(EndReason::InputClosed),
                },
                Phase::Evaluate(current) => Phase::Report(self.session.evaluate(current)),
                Phase::Report(round) => {
                    for line in report::render(&round, self.format)? {
                        self.console.say(&line)?;
                    }
                    Phase::AskContinue
                }
                Phase::AskContinue => match input::ask_yes_no(&mut self.console, CONTINUE_PROMPT)? {
                    Some(true) => Phase::AwaitInput,
                    Some(false) => Phase::Done(EndReason::UserStopped),
                    None => Phase::Done(EndReason::InputClosed),
                },
                Phase::Done(reason) => {
                    let summary = SessionSummary {
                        rounds: self.session.rounds(),
                        reason,
                    };
                    tracing::info!(rounds = summary.rounds, %reason, "session ended");
                    return Ok(summary);
                }
            };
        }
    }
}
