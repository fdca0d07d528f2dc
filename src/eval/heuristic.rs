//! Heuristic action fitness.
//!
//! One formula per action kind; higher is better. `None` means the action is
//! not a candidate at all (too early, barren target, or an action that does
//! not match the tree snapshot).
//!
//! Design: everything here is a pure function of the board, the turn's tree
//! snapshot and the day. Lookups go through the fixed-size `TreeMap`, so no
//! scoring call allocates.

use tracing::warn;

use super::cost::CostProfile;
use super::shade::shade_on;
use crate::board::{Action, Board, CellIndex, TreeMap, MAX_TREE_SIZE};
use crate::config::Tuning;

/// Everything the scorer needs for one turn.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub board: &'a Board,
    pub trees: &'a TreeMap,
    pub costs: CostProfile,
    pub day: u32,
    pub tuning: &'a Tuning,
}

impl<'a> EvalContext<'a> {
    /// Builds the context, deriving the cost profile from `trees`.
    pub fn new(board: &'a Board, trees: &'a TreeMap, day: u32, tuning: &'a Tuning) -> Self {
        EvalContext {
            board,
            trees,
            costs: CostProfile::from_trees(trees),
            day,
            tuning,
        }
    }

    #[inline]
    fn shade(&self, cell: CellIndex) -> u32 {
        shade_on(self.board, self.trees, cell)
    }
}

/// Scores `action` with the formula for its kind. WAIT is never scored.
pub fn score_action(ctx: &EvalContext<'_>, action: &Action) -> Option<f64> {
    match *action {
        Action::Wait => None,
        Action::Seed { target, .. } => seed_fitness(ctx, target),
        Action::Grow { target } => grow_fitness(ctx, target),
        Action::Complete { target } => complete_fitness(ctx, target),
    }
}

/// `2 / (shade + 3 - richness / 8)`.
///
/// Disabled before `seed_min_day`. Barren and occupied targets are never
/// candidates.
pub fn seed_fitness(ctx: &EvalContext<'_>, target: CellIndex) -> Option<f64> {
    if ctx.day < ctx.tuning.seed_min_day {
        return None;
    }
    let cell = match ctx.board.cell(target) {
        Some(c) if !c.is_barren() => c,
        _ => return None,
    };
    if ctx.trees.is_occupied(target) {
        warn!(cell = target, "SEED onto an occupied cell, skipping");
        return None;
    }

    let shade = ctx.shade(target) as f64;
    Some(2.0 / (shade + 3.0 - cell.richness as f64 / 8.0))
}

/// `1 / (shade - richness + next_tier_count / 3 + 1)`.
///
/// The tier term uses integer division. A zero denominator yields positive
/// infinity and a negative one a negative fitness; both are left as they are
/// for the selector to rank.
pub fn grow_fitness(ctx: &EvalContext<'_>, target: CellIndex) -> Option<f64> {
    let tree = match ctx.trees.get(target) {
        Some(t) if t.can_grow() => t,
        _ => {
            warn!(cell = target, "GROW without a growable tree of mine, skipping");
            return None;
        }
    };

    let shade = ctx.shade(target) as i64;
    let richness = ctx.board.richness(target) as i64;
    let next_tier = (ctx.costs.count(tree.size + 1) / 3) as i64;
    let denominator = (shade - richness + next_tier) as f64 + 1.0;
    Some(1.0 / denominator)
}

/// `2 / max(floor, remaining_days / 5 - fully_grown / 2 + 3)`.
///
/// `fully_grown / 2` uses integer division. Defined for any day; the
/// selector only consults it before the end-game override takes over.
pub fn complete_fitness(ctx: &EvalContext<'_>, target: CellIndex) -> Option<f64> {
    if !ctx.trees.get(target).is_some_and(|t| t.can_complete()) {
        warn!(cell = target, "COMPLETE without a fully grown tree of mine, skipping");
        return None;
    }

    let remaining = ctx.tuning.final_day as i64 - ctx.day as i64;
    let grown = (ctx.costs.count(MAX_TREE_SIZE) / 2) as f64;
    let denominator = remaining as f64 / 5.0 - grown + 3.0;
    Some(2.0 / denominator.max(ctx.tuning.complete_denominator_floor))
}
