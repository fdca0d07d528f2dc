//! Setup and per-turn feed parsing.
//!
//! Setup (once): cell count, then per cell `index richness n0 n1 n2 n3 n4 n5`
//! where `-1` marks a missing neighbour.
//!
//! Turn: `day nutrients mySun myScore oppSun oppScore oppWaiting`, the tree
//! count followed by `cell size isMine isDormant` per tree, then the action
//! count followed by one action per line.

use std::io::BufRead;

use super::error::ProtocolError;
use super::notation::read_action;
use super::reader::TokenReader;
use crate::board::{
    Action, Board, BoardError, Cell, CellIndex, MatchState, PlayerState, Tree, TreeMap,
    TurnState, BOARD_CELLS,
};

/// Reads the board description sent before the first turn.
pub fn read_board<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Board, ProtocolError> {
    let count: usize = reader.number("cell count")?;
    if count > BOARD_CELLS {
        return Err(BoardError::TooManyCells(count).into());
    }

    let mut cells = Vec::with_capacity(count);
    for _ in 0..count {
        let index: CellIndex = reader.number("cell index")?;
        let richness: u8 = reader.number("cell richness")?;
        let mut neighbours = [None; 6];
        for slot in neighbours.iter_mut() {
            let raw: i64 = reader.number("neighbour index")?;
            *slot = match raw {
                -1 => None,
                n if n >= 0 => Some(n as CellIndex),
                n => return Err(ProtocolError::InvalidNeighbour(n)),
            };
        }
        cells.push(Cell {
            index,
            richness,
            neighbours,
        });
    }

    Ok(Board::new(cells)?)
}

/// Reads one turn.
///
/// Returns `Ok(None)` when the stream ends cleanly between turns; running
/// out of input part-way through a turn is an error.
pub fn read_turn<R: BufRead>(
    reader: &mut TokenReader<R>,
    board: &Board,
) -> Result<Option<TurnState>, ProtocolError> {
    if reader.at_end()? {
        return Ok(None);
    }

    let state = MatchState {
        day: reader.number("day")?,
        nutrients: reader.number("nutrients")?,
        me: PlayerState {
            sun: reader.number("my sun")?,
            score: reader.number("my score")?,
        },
        opponent: PlayerState {
            sun: reader.number("opponent sun")?,
            score: reader.number("opponent score")?,
        },
        opponent_is_waiting: reader.flag("opponent waiting flag")?,
    };

    let tree_count: usize = reader.number("tree count")?;
    if tree_count > board.len() {
        return Err(ProtocolError::TooManyTrees {
            count: tree_count,
            cells: board.len(),
        });
    }
    let mut trees = TreeMap::new();
    for _ in 0..tree_count {
        let tree = Tree {
            cell: reader.number("tree cell")?,
            size: reader.number("tree size")?,
            is_mine: reader.flag("tree owner flag")?,
            is_dormant: reader.flag("tree dormancy flag")?,
        };
        trees.insert(board, tree)?;
    }

    let action_count: usize = reader.number("action count")?;
    // The count is untrusted; the list grows as actions actually arrive.
    let mut actions = Vec::new();
    for _ in 0..action_count {
        let action = read_action(reader)?;
        check_on_board(&action, board)?;
        actions.push(action);
    }

    Ok(Some(TurnState {
        state,
        trees,
        actions,
    }))
}

fn check_on_board(action: &Action, board: &Board) -> Result<(), ProtocolError> {
    match action.cells().find(|c| !board.contains(*c)) {
        Some(cell) => Err(ProtocolError::ActionOffBoard {
            action: action.to_string(),
            cell,
        }),
        None => Ok(()),
    }
}
