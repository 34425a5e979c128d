//! The ordered list of rules a session evaluates.
//!
//! Built once at startup and handed to the session by value; there is no
//! process-wide registry.

use crate::evaluation::{Evaluation, RuleOutcome};
use crate::rule::Rule;
use crate::state::State;

/// Ordered collection of [`Rule`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The four built-in rules in report order: blinds, heater, AC, lights.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: Rule::ALL.to_vec(),
        }
    }

    /// A rule set holding exactly `rules`, in the given order.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate the rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules.iter().copied()
    }

    /// Evaluate every rule against `(current, previous)`, in registration order.
    #[must_use]
    pub fn evaluate(&self, current: &State, previous: &State) -> Evaluation {
        self.iter()
            .map(|rule| RuleOutcome::new(rule, rule.is_active(current, previous)))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
