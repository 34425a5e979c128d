//! # homerules — interactive home-automation rule evaluator
//!
//! Composition root that wires the console adapter into the evaluation loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging to stderr so stdout carries only the dialogue
//! - Construct the built-in rule set and a fresh session
//! - Run the controller over stdin/stdout until the user stops
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::IsTerminal;

use homerules_adapter_console::StdioConsole;
use homerules_app::controller::Controller;
use homerules_app::session::Session;
use homerules_domain::registry::RuleSet;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let session = Session::new(RuleSet::builtin());
    let summary = Controller::new(StdioConsole::stdio(), session)
        .with_policy(config.input_policy())
        .with_format(config.output.format)
        .run()?;

    tracing::debug!(rounds = summary.rounds, reason = %summary.reason, "exiting");
    Ok(())
}
