//! # homerules-domain
//!
//! Pure domain model for the homerules rule evaluator.
//!
//! ## Responsibilities
//! - Define the **State** snapshot (temperature, hour of day, month, occupancy)
//! - Define validated value types for the hour of day and the month
//! - Define the built-in **Rules** (blinds, heater, air conditioning, lights)
//!   as pure predicates over a `(current, previous)` pair of states
//! - Define the ordered **RuleSet** and the result of evaluating it
//! - Contain all invariant enforcement (range checks, parsing)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! The console boundary is expressed as a trait in the `app` crate (port).

pub mod error;

pub mod evaluation;
pub mod registry;
pub mod rule;
pub mod state;
