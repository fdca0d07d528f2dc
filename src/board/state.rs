//! Per-turn match state.
//!
//! Everything here is rebuilt from the feed at the start of each turn and
//! dropped once the turn's action has been written.

use super::action::Action;
use super::tree::TreeMap;

/// One player's public resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub sun: u32,
    pub score: u32,
}

/// Scalar match state for the current turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchState {
    pub day: u32,
    pub nutrients: u32,
    pub me: PlayerState,
    pub opponent: PlayerState,
    pub opponent_is_waiting: bool,
}

/// Complete input for one decision: match state, trees, and legal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    pub state: MatchState,
    pub trees: TreeMap,
    pub actions: Vec<Action>,
}

impl TurnState {
    /// Convenience accessor for the current day.
    #[inline]
    pub fn day(&self) -> u32 {
        self.state.day
    }
}
