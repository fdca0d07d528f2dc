//! Action selection.
//!
//! Reduces the turn's legal actions to the one to play. From
//! `end_game_day` on, the first COMPLETE in the list is played outright.
//! Before that, the best SEED, GROW and COMPLETE are found independently and
//! the highest wins; if none scores, the first listed action is played.

use serde::Serialize;
use tracing::debug;

use crate::board::{Action, ActionKind};
use crate::engine::EngineError;
use crate::eval::{score_action, EvalContext};

/// Fitness used for a category with no candidate when comparing winners.
const INELIGIBLE: f64 = -1.0;

/// A legal action paired with its fitness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredAction {
    pub action: Action,
    pub fitness: f64,
}

/// How the chosen action was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    /// End-game override: first COMPLETE in the list.
    Harvest,
    /// Highest-scoring category winner.
    Scored,
    /// Nothing scored; first listed action.
    Fallback,
}

/// The outcome of one turn's selection, with the per-category winners that
/// led to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    pub mode: DecisionMode,
    pub seed: Option<ScoredAction>,
    pub grow: Option<ScoredAction>,
    pub complete: Option<ScoredAction>,
}

/// Finds the best-scoring action of `kind`.
///
/// Only fitness strictly above zero qualifies; on ties the earliest listed
/// action is kept.
pub fn best_of_kind(
    ctx: &EvalContext<'_>,
    actions: &[Action],
    kind: ActionKind,
) -> Option<ScoredAction> {
    let mut best: Option<ScoredAction> = None;
    let mut best_fitness = 0.0;
    for action in actions.iter().filter(|a| a.kind() == kind) {
        let Some(fitness) = score_action(ctx, action) else {
            continue;
        };
        if fitness > best_fitness {
            best_fitness = fitness;
            best = Some(ScoredAction {
                action: *action,
                fitness,
            });
        }
    }
    best
}

/// Chooses the action to play this turn.
///
/// Fails only if `actions` is empty.
pub fn select(ctx: &EvalContext<'_>, actions: &[Action]) -> Result<Decision, EngineError> {
    let first = *actions.first().ok_or(EngineError::NoLegalActions)?;

    if ctx.day >= ctx.tuning.end_game_day {
        if let Some(complete) = actions.iter().find(|a| a.kind() == ActionKind::Complete) {
            return Ok(Decision {
                action: *complete,
                mode: DecisionMode::Harvest,
                seed: None,
                grow: None,
                complete: None,
            });
        }
    }

    let seed = best_of_kind(ctx, actions, ActionKind::Seed);
    let mut grow = best_of_kind(ctx, actions, ActionKind::Grow);
    if ctx.costs.count(0) >= ctx.tuning.surplus_seed_threshold {
        if let Some(g) = grow.as_mut() {
            g.fitness += ctx.tuning.surplus_seed_grow_bonus;
        }
    }
    let complete = best_of_kind(ctx, actions, ActionKind::Complete);

    debug!(
        day = ctx.day,
        seed = ?seed.map(|s| s.fitness),
        grow = ?grow.map(|g| g.fitness),
        complete = ?complete.map(|c| c.fitness),
        "category winners"
    );

    let (action, mode) = match highest(seed, grow, complete) {
        Some(winner) => (winner.action, DecisionMode::Scored),
        None => (first, DecisionMode::Fallback),
    };

    Ok(Decision {
        action,
        mode,
        seed,
        grow,
        complete,
    })
}

/// Picks the strictly highest of the three category winners. Ties go to
/// SEED, then GROW, then COMPLETE.
fn highest(
    seed: Option<ScoredAction>,
    grow: Option<ScoredAction>,
    complete: Option<ScoredAction>,
) -> Option<ScoredAction> {
    if seed.is_none() && grow.is_none() && complete.is_none() {
        return None;
    }
    let fitness = |c: &Option<ScoredAction>| c.map_or(INELIGIBLE, |c| c.fitness);
    let (s, g, c) = (fitness(&seed), fitness(&grow), fitness(&complete));

    if s >= g {
        if s >= c {
            seed
        } else {
            complete
        }
    } else if g >= c {
        grow
    } else {
        complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, CellIndex, Tree, TreeMap};
    use crate::config::Tuning;

    fn map(board: &Board, list: &[(CellIndex, u8, bool)]) -> TreeMap {
        let trees: Vec<Tree> = list
            .iter()
            .map(|&(cell, size, is_mine)| Tree {
                cell,
                size,
                is_mine,
                is_dormant: false,
            })
            .collect();
        TreeMap::from_trees(board, &trees).unwrap()
    }

    fn seed(source: CellIndex, target: CellIndex) -> Action {
        Action::Seed { source, target }
    }

    #[test]
    fn empty_list_is_an_error() {
        let board = Board::standard();
        let trees = TreeMap::new();
        let tuning = Tuning::default();
        let ctx = EvalContext::new(&board, &trees, 5, &tuning);
        assert!(matches!(select(&ctx, &[]), Err(EngineError::NoLegalActions)));
    }

    #[test]
    fn only_wait_falls_back() {
        let board = Board::standard();
        let trees = TreeMap::new();
        let tuning = Tuning::default();
        let ctx = EvalContext::new(&board, &trees, 5, &tuning);
        let d = select(&ctx, &[Action::Wait]).unwrap();
        assert_eq!(d.action, Action::Wait);
        assert_eq!(d.mode, DecisionMode::Fallback);
    }

    #[test]
    fn fallback_is_first_listed() {
        let board = Board::standard();
        let trees = map(&board, &[(0, 1, true)]);
        let tuning = Tuning::default();
        // Day 1: seeding disabled, so nothing scores.
        let ctx = EvalContext::new(&board, &trees, 1, &tuning);
        let actions = [seed(0, 1), Action::Wait, seed(0, 2)];
        let d = select(&ctx, &actions).unwrap();
        assert_eq!(d.action, seed(0, 1));
        assert_eq!(d.mode, DecisionMode::Fallback);
        assert!(d.seed.is_none());
    }

    #[test]
    fn small_board_prefers_unshaded_seed() {
        let board = Board::hexagon(1);
        let tuning = Tuning::default();
        // Opponent size-1 tree on cell 4 shades cells 0, 3 and 5 but not 1.
        let trees = map(&board, &[(4, 1, false)]);
        let ctx = EvalContext::new(&board, &trees, 5, &tuning);
        let actions = [Action::Wait, seed(0, 3), seed(0, 1)];
        let d = select(&ctx, &actions).unwrap();
        assert_eq!(d.action, seed(0, 1));
        assert_eq!(d.mode, DecisionMode::Scored);
        let f = d.seed.unwrap().fitness;
        assert!((f - 2.0 / (3.0 - 3.0 / 8.0)).abs() < 1e-9);
    }

    #[test]
    fn seed_ties_keep_first() {
        let board = Board::hexagon(1);
        let trees = TreeMap::new();
        let tuning = Tuning::default();
        let ctx = EvalContext::new(&board, &trees, 5, &tuning);
        let actions = [Action::Wait, seed(0, 1), seed(0, 2)];
        let d = select(&ctx, &actions).unwrap();
        assert_eq!(d.action, seed(0, 1));
    }

    #[test]
    fn end_game_plays_first_complete() {
        let board = Board::standard();
        let tuning = Tuning::default();
        let trees = map(
            &board,
            &[(4, 3, true), (9, 3, true), (27, 0, true), (28, 0, true)],
        );
        let ctx = EvalContext::new(&board, &trees, 22, &tuning);
        let actions = [
            Action::Wait,
            Action::Grow { target: 27 },
            Action::Complete { target: 4 },
            Action::Grow { target: 28 },
            Action::Complete { target: 9 },
        ];
        // GROW 27 scores +inf here, yet the override wins.
        assert_eq!(best_of_kind(&ctx, &actions, ActionKind::Grow).unwrap().fitness, f64::INFINITY);
        let d = select(&ctx, &actions).unwrap();
        assert_eq!(d.action, Action::Complete { target: 4 });
        assert_eq!(d.mode, DecisionMode::Harvest);
    }

    #[test]
    fn end_game_without_complete_scores_normally() {
        let board = Board::standard();
        let tuning = Tuning::default();
        let trees = map(&board, &[(27, 0, true)]);
        let ctx = EvalContext::new(&board, &trees, 23, &tuning);
        let actions = [Action::Wait, Action::Grow { target: 27 }];
        let d = select(&ctx, &actions).unwrap();
        assert_eq!(d.action, Action::Grow { target: 27 });
        assert_eq!(d.mode, DecisionMode::Scored);
    }

    #[test]
    fn surplus_seeds_boost_grow() {
        let board = Board::standard();
        let tuning = Tuning::default();
        // Two seeds of mine; the one on 0 is shaded from four sides.
        let trees = map(
            &board,
            &[
                (0, 0, true),
                (30, 0, true),
                (1, 1, false),
                (2, 1, false),
                (3, 1, false),
                (4, 1, false),
            ],
        );
        let ctx = EvalContext::new(&board, &trees, 10, &tuning);
        let actions = [Action::Wait, Action::Grow { target: 0 }];
        let d = select(&ctx, &actions).unwrap();
        // 1 / (4 - 3 + 0 + 1) + 0.5
        assert!((d.grow.unwrap().fitness - 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_boost_with_one_seed() {
        let board = Board::standard();
        let tuning = Tuning::default();
        let trees = map(
            &board,
            &[(0, 0, true), (1, 1, false), (2, 1, false), (3, 1, false), (4, 1, false)],
        );
        let ctx = EvalContext::new(&board, &trees, 10, &tuning);
        let d = select(&ctx, &[Action::Wait, Action::Grow { target: 0 }]).unwrap();
        assert!((d.grow.unwrap().fitness - 0.5).abs() < 1e-9);
    }

    #[test]
    fn grow_beats_weaker_seed() {
        let board = Board::standard();
        let tuning = Tuning::default();
        // Seed onto ring-3 cell 20 (richness 1, shaded by the tree on 8):
        // 2 / 3.875. Grow the tree on 8 (richness 2, shaded twice): 1 / 1.
        let trees = map(&board, &[(8, 1, true), (1, 1, false), (2, 1, false)]);
        let ctx = EvalContext::new(&board, &trees, 10, &tuning);
        let actions = [Action::Wait, seed(8, 20), Action::Grow { target: 8 }];
        let d = select(&ctx, &actions).unwrap();
        assert_eq!(d.action, Action::Grow { target: 8 });
    }

    #[test]
    fn negative_grow_is_not_a_candidate() {
        let board = Board::standard();
        let tuning = Tuning::default();
        let trees = map(&board, &[(0, 1, true)]);
        let ctx = EvalContext::new(&board, &trees, 10, &tuning);
        // 0 - 3 + 0 + 1 = -2: fitness -0.5, never above the zero baseline.
        assert!(best_of_kind(&ctx, &[Action::Grow { target: 0 }], ActionKind::Grow).is_none());
    }

    #[test]
    fn complete_can_win_before_end_game() {
        let board = Board::standard();
        let tuning = Tuning::default();
        let list: Vec<(CellIndex, u8, bool)> = (19..37).map(|c| (c, 3, true)).collect();
        let trees = map(&board, &list);
        let ctx = EvalContext::new(&board, &trees, 20, &tuning);
        let actions = [Action::Wait, seed(19, 0), Action::Complete { target: 30 }];
        let d = select(&ctx, &actions).unwrap();
        assert_eq!(d.action, Action::Complete { target: 30 });
        assert_eq!(d.mode, DecisionMode::Scored);
    }

    #[test]
    fn tie_order_is_seed_grow_complete() {
        let a = ScoredAction {
            action: seed(0, 1),
            fitness: 0.5,
        };
        let b = ScoredAction {
            action: Action::Grow { target: 2 },
            fitness: 0.5,
        };
        let c = ScoredAction {
            action: Action::Complete { target: 3 },
            fitness: 0.5,
        };
        assert_eq!(highest(Some(a), Some(b), Some(c)), Some(a));
        assert_eq!(highest(None, Some(b), Some(c)), Some(b));
        assert_eq!(highest(None, None, Some(c)), Some(c));
        assert_eq!(highest(None, None, None), None);
    }
}
