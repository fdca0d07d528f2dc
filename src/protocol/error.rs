//! Errors raised while reading the game feed.

use crate::board::BoardError;

/// A malformed setup or turn feed. Always fatal for the match.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEnd(&'static str),

    #[error("invalid {expected}: '{found}'")]
    InvalidNumber {
        expected: &'static str,
        found: String,
    },

    #[error("invalid neighbour index {0}")]
    InvalidNeighbour(i64),

    #[error("{count} trees listed for a board of {cells} cells")]
    TooManyTrees { count: usize, cells: usize },

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("unexpected token '{0}' after action")]
    TrailingToken(String),

    #[error("action '{action}' refers to cell {cell} outside the board")]
    ActionOffBoard { action: String, cell: usize },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}
