//! Outcome of running a rule set against one reading.

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::rule::Rule;

/// Whether one rule held for a given pair of readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    rule: Rule,
    active: bool,
}

impl RuleOutcome {
    #[must_use]
    pub fn new(rule: Rule, active: bool) -> Self {
        Self { rule, active }
    }

    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The rule's active or inactive label, whichever applies.
    #[must_use]
    pub fn status(&self) -> &'static str {
        self.rule.label(self.active)
    }
}

impl std::fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Device ({}) is {}", self.rule.name(), self.status())
    }
}

impl Serialize for RuleOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("RuleOutcome", 3)?;
        s.serialize_field("device", self.rule.name())?;
        s.serialize_field("active", &self.active)?;
        s.serialize_field("status", self.status())?;
        s.end()
    }
}

/// Outcomes of every rule in a [`RuleSet`](crate::registry::RuleSet), in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Evaluation {
    outcomes: Vec<RuleOutcome>,
}

impl Evaluation {
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleOutcome> {
        self.outcomes.iter()
    }

    /// Look up the outcome for `rule`, if it was evaluated.
    #[must_use]
    pub fn get(&self, rule: Rule) -> Option<&RuleOutcome> {
        self.outcomes.iter().find(|o| o.rule == rule)
    }

}

impl FromIterator<RuleOutcome> for Evaluation {
    fn from_iter<I: IntoIterator<Item = RuleOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a RuleOutcome;
    type IntoIter = std::slice::Iter<'a, RuleOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
