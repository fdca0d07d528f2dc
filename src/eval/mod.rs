//! Action evaluation.
//!
//! Shade and cost models feed a per-kind heuristic that scores each legal
//! action for the current turn.

pub mod cost;
pub mod heuristic;
pub mod shade;

pub use cost::{CostProfile, COMPLETE_COST};
pub use heuristic::{complete_fitness, grow_fitness, score_action, seed_fitness, EvalContext};
pub use shade::{shade_on, SHADE_RANGE};
