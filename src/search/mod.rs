//! Turn decision.
//!
//! A single-ply reduction of the legal-action list to the action to play;
//! there is no lookahead.

pub mod selector;

pub use selector::{best_of_kind, select, Decision, DecisionMode, ScoredAction};
