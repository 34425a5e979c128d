//! Session — the rule set plus the reading from the previous round.

use serde::Serialize;

use homerules_domain::evaluation::Evaluation;
use homerules_domain::registry::RuleSet;
use homerules_domain::state::State;

/// Evaluation state carried from one round to the next.
///
/// On the first round there is no earlier reading, so the current one
/// stands in as its own previous reading.
#[derive(Debug, Clone)]
pub struct Session {
    rules: RuleSet,
    previous: Option<State>,
    rounds: u32,
}

/// Everything produced by one evaluation round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    #[serde(skip)]
    pub number: u32,
    pub current: State,
    pub previous: State,
    pub devices: Evaluation,
}

impl Session {
    /// Start a session with no previous reading.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            previous: None,
            rounds: 0,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Reading from the last completed round, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&State> {
        self.previous.as_ref()
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Evaluate every rule against `current` and remember it as the
    /// previous reading for the next round.
    #[tracing::instrument(skip(self), fields(round = self.rounds + 1))]
    pub fn evaluate(&mut self, current: State) -> Round {
        let previous = self.previous.unwrap_or(current);
        let devices = self.rules.evaluate(&current, &previous);
        for outcome in &devices {
            tracing::debug!(
                device = outcome.rule().name(),
                active = outcome.is_active(),
                condition = outcome.rule().description(),
                "rule evaluated"
            );
        }
        self.previous = Some(current);
        self.rounds += 1;
        Round {
            number: self.rounds,
            current,
            previous,
            devices,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}
