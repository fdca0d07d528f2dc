//! Trees and the per-turn tree snapshot.

use super::cell::{Board, CellIndex, BOARD_CELLS};
use super::error::BoardError;

/// Largest tree size. Size 0 is a seed.
pub const MAX_TREE_SIZE: u8 = 3;

/// Number of size tiers, seeds included.
pub const TREE_SIZES: usize = MAX_TREE_SIZE as usize + 1;

/// A tree standing on one cell this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tree {
    pub cell: CellIndex,
    pub size: u8,
    pub is_mine: bool,
    pub is_dormant: bool,
}

impl Tree {
    /// Returns true if this is one of my trees that may still grow.
    #[inline]
    pub fn can_grow(&self) -> bool {
        self.is_mine && self.size < MAX_TREE_SIZE
    }

    /// Returns true if this is one of my fully grown trees.
    #[inline]
    pub fn can_complete(&self) -> bool {
        self.is_mine && self.size == MAX_TREE_SIZE
    }
}

/// Trees keyed by cell, one optional slot per cell.
///
/// Cell indices are dense and bounded by [`BOARD_CELLS`], so a fixed array
/// gives O(1) lookup with a deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeMap {
    slots: [Option<Tree>; BOARD_CELLS],
    len: usize,
}

impl Default for TreeMap {
    fn default() -> Self {
        TreeMap {
            slots: [None; BOARD_CELLS],
            len: 0,
        }
    }
}

impl TreeMap {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from the feed's tree list, validated against `board`.
    pub fn from_trees(board: &Board, trees: &[Tree]) -> Result<TreeMap, BoardError> {
        let mut map = TreeMap::new();
        for tree in trees {
            map.insert(board, *tree)?;
        }
        Ok(map)
    }

    /// Places a tree. At most one tree may stand on a cell.
    pub fn insert(&mut self, board: &Board, tree: Tree) -> Result<(), BoardError> {
        if !board.contains(tree.cell) {
            return Err(BoardError::CellOutOfRange(tree.cell));
        }
        if tree.size > MAX_TREE_SIZE {
            return Err(BoardError::TreeSizeOutOfRange {
                cell: tree.cell,
                size: tree.size,
            });
        }
        let slot = &mut self.slots[tree.cell];
        if slot.is_some() {
            return Err(BoardError::DuplicateTree(tree.cell));
        }
        *slot = Some(tree);
        self.len += 1;
        Ok(())
    }

    /// Returns the tree on `cell`, if any.
    #[inline]
    pub fn get(&self, cell: CellIndex) -> Option<&Tree> {
        self.slots.get(cell).and_then(|s| s.as_ref())
    }

    #[inline]
    pub fn is_occupied(&self, cell: CellIndex) -> bool {
        self.get(cell).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over trees in cell order.
    pub fn iter(&self) -> impl Iterator<Item = &Tree> {
        self.slots.iter().flatten()
    }

    /// Iterates over my trees in cell order.
    pub fn mine(&self) -> impl Iterator<Item = &Tree> {
        self.iter().filter(|t| t.is_mine)
    }
}
