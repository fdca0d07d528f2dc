//! Validation errors for board topology and tree placement.

use super::cell::CellIndex;

/// Errors raised while building a board or placing trees on it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no cells")]
    Empty,

    #[error("board has {0} cells, at most {max} supported", max = super::cell::BOARD_CELLS)]
    TooManyCells(usize),

    #[error("cell listed at position {position} declares index {index}")]
    MisplacedCell { position: usize, index: CellIndex },

    #[error("cell {cell} has richness {richness}, expected 0..=3")]
    RichnessOutOfRange { cell: CellIndex, richness: u8 },

    #[error("cell index {0} is outside the board")]
    CellOutOfRange(CellIndex),

    #[error("neighbour link {from} -> {to} in direction {direction} is not reciprocated")]
    AsymmetricLink {
        from: CellIndex,
        to: CellIndex,
        direction: usize,
    },

    #[error("tree on cell {cell} has size {size}, expected 0..=3")]
    TreeSizeOutOfRange { cell: CellIndex, size: u8 },

    #[error("more than one tree on cell {0}")]
    DuplicateTree(CellIndex),
}
