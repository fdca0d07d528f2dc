//! The closed set of actions a player may take on a turn.
//!
//! Wire formatting lives in `protocol::notation`; this module only carries
//! the data.

use super::cell::CellIndex;

/// Action category, used to group candidates for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Wait,
    Seed,
    Grow,
    Complete,
}

/// A single legal action as supplied by the rules oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `WAIT`
    Wait,

    /// `SEED <source> <target>`
    Seed {
        source: CellIndex,
        target: CellIndex,
    },

    /// `GROW <target>`
    Grow { target: CellIndex },

    /// `COMPLETE <target>`
    Complete { target: CellIndex },
}

impl Action {
    /// Returns the category of this action.
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Wait => ActionKind::Wait,
            Action::Seed { .. } => ActionKind::Seed,
            Action::Grow { .. } => ActionKind::Grow,
            Action::Complete { .. } => ActionKind::Complete,
        }
    }

    /// Returns every cell the action refers to.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        let (a, b) = match *self {
            Action::Wait => (None, None),
            Action::Seed { source, target } => (Some(source), Some(target)),
            Action::Grow { target } | Action::Complete { target } => (Some(target), None),
        };
        a.into_iter().chain(b)
    }
}
