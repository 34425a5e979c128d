//! # homerules-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`Console` port** that a terminal adapter must implement
//! - Collect a validated [`State`](homerules_domain::state::State) from the
//!   console, re-prompting on invalid input under an [`input::InputPolicy`]
//! - Track the previous reading across rounds ([`session::Session`])
//! - Render each round as text or JSON ([`report`])
//! - Drive the `AwaitInput → Evaluate → Report → AskContinue` loop
//!   ([`controller::Controller`])
//!
//! ## Dependency rule
//! Depends on `homerules-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod input;
pub mod ports;
pub mod report;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
