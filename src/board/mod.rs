//! Board representation and per-turn game-state types.
//!
//! Contains the static cell graph, the tree snapshot, the closed set of
//! actions, and the match state read from the feed every turn.

pub mod action;
pub mod cell;
pub mod error;
pub mod state;
pub mod tree;

pub use action::{Action, ActionKind};
pub use cell::{Board, Cell, CellIndex, Direction, ALL_DIRECTIONS, BOARD_CELLS, MAX_RICHNESS};
pub use error::BoardError;
pub use state::{MatchState, PlayerState, TurnState};
pub use tree::{Tree, TreeMap, MAX_TREE_SIZE, TREE_SIZES};
