//! Scripted console used by the unit tests of this crate.

use std::collections::VecDeque;

use homerules_domain::error::HomeRulesError;

use crate::ports::Console;

/// Replays canned answers and records everything shown to the user.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub lines: Vec<String>,
}

impl ScriptedConsole {
    pub fn with(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, HomeRulesError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn say(&mut self, line: &str) -> Result<(), HomeRulesError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
