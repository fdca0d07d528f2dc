//! Shade model.
//!
//! A tree of size `s` shades the `s` cells behind it along each direction.
//! A cell is shaded from a direction when, walking outward from it, the tree
//! at hop `j` has size at least `j`.

use crate::board::{Board, CellIndex, TreeMap, ALL_DIRECTIONS};

/// Farthest reach of any tree's shadow.
pub const SHADE_RANGE: u8 = 3;

/// Counts the directions (0..=6) from which a standing tree shades `cell`.
///
/// Trees of either owner count. Only shade cast by current sizes is
/// considered; growth that may happen later is ignored.
pub fn shade_on(board: &Board, trees: &TreeMap, cell: CellIndex) -> u32 {
    let mut shaded = 0;
    for dir in ALL_DIRECTIONS {
        let mut cur = cell;
        for hop in 1..=SHADE_RANGE {
            let Some(next) = board.neighbour(cur, dir) else {
                break;
            };
            if trees.get(next).is_some_and(|t| t.size >= hop) {
                shaded += 1;
                break;
            }
            cur = next;
        }
    }
    shaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Direction, Tree};

    fn trees(board: &Board, list: &[(CellIndex, u8, bool)]) -> TreeMap {
        let list: Vec<Tree> = list
            .iter()
            .map(|&(cell, size, is_mine)| Tree {
                cell,
                size,
                is_mine,
                is_dormant: false,
            })
            .collect();
        TreeMap::from_trees(board, &list).unwrap()
    }

    #[test]
    fn no_trees_no_shade() {
        let board = Board::standard();
        let empty = TreeMap::new();
        for cell in board.cells() {
            assert_eq!(shade_on(&board, &empty, cell.index), 0);
        }
    }

    #[test]
    fn adjacent_small_tree_shades() {
        let board = Board::standard();
        let map = trees(&board, &[(1, 1, true)]);
        assert_eq!(shade_on(&board, &map, 0), 1);
    }

    #[test]
    fn seeds_cast_no_shade() {
        let board = Board::standard();
        let map = trees(&board, &[(1, 0, true), (2, 0, false)]);
        assert_eq!(shade_on(&board, &map, 0), 0);
    }

    #[test]
    fn reach_depends_on_size() {
        let board = Board::standard();
        // Cells 0 -> 1 -> 7 -> 19 run east. A size-2 tree two hops away
        // shades, a size-1 tree two hops away does not.
        assert_eq!(board.neighbour(0, Direction::East), Some(1));
        assert_eq!(shade_on(&board, &trees(&board, &[(7, 2, false)]), 0), 1);
        assert_eq!(shade_on(&board, &trees(&board, &[(7, 1, false)]), 0), 0);
        assert_eq!(shade_on(&board, &trees(&board, &[(19, 3, true)]), 0), 1);
        assert_eq!(shade_on(&board, &trees(&board, &[(19, 2, true)]), 0), 0);
    }

    #[test]
    fn short_tree_does_not_block_the_ray() {
        let board = Board::standard();
        // A seed on cell 1 does not stop a size-3 tree on 19 from shading 0.
        let map = trees(&board, &[(1, 0, true), (19, 3, false)]);
        assert_eq!(shade_on(&board, &map, 0), 1);
    }

    #[test]
    fn each_direction_counts_once() {
        let board = Board::standard();
        let map = trees(&board, &[(1, 1, true), (7, 2, true), (19, 3, true)]);
        assert_eq!(shade_on(&board, &map, 0), 1);
    }

    #[test]
    fn surrounded_centre_is_fully_shaded() {
        let board = Board::standard();
        let ring: Vec<(CellIndex, u8, bool)> = (1..=6).map(|c| (c, 1, c % 2 == 0)).collect();
        let map = trees(&board, &ring);
        assert_eq!(shade_on(&board, &map, 0), 6);
    }

    #[test]
    fn edge_cells_stop_at_the_border() {
        let board = Board::standard();
        let map = trees(&board, &[(0, 3, true)]);
        // Cell 19 is three hops east of the centre; looking west it sees the
        // size-3 tree, looking east it runs off the board immediately.
        assert_eq!(shade_on(&board, &map, 19), 1);
    }

    #[test]
    fn tree_does_not_shade_its_own_cell() {
        let board = Board::standard();
        let map = trees(&board, &[(0, 3, true)]);
        assert_eq!(shade_on(&board, &map, 0), 0);
    }
}
