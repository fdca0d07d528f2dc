//! Engine state management.
//!
//! Holds the board and tuning for the whole match and turns each turn's
//! state into exactly one action line. Nothing is carried from one turn to
//! the next.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::board::{Action, Board, TurnState};
use crate::config::Tuning;
use crate::eval::EvalContext;
use crate::protocol::{read_board, read_turn, ProtocolError, TokenReader};
use crate::search::{select, Decision};

/// Fatal errors for a match.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("legal-action list is empty")]
    NoLegalActions,

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("trace encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Per-match engine. The board is fixed at construction.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    tuning: Tuning,
}

impl Engine {
    /// Creates an engine for `board` with the given tuning.
    pub fn new(board: Board, tuning: Tuning) -> Self {
        Engine { board, tuning }
    }

    /// Reads the setup block from `reader` and builds an engine from it.
    pub fn from_setup<R: BufRead>(
        reader: &mut TokenReader<R>,
        tuning: Tuning,
    ) -> Result<Self, EngineError> {
        let board = read_board(reader)?;
        info!(cells = board.len(), "board loaded");
        Ok(Engine::new(board, tuning))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Evaluates one turn and returns the full decision.
    pub fn decide(&self, turn: &TurnState) -> Result<Decision, EngineError> {
        let ctx = EvalContext::new(&self.board, &turn.trees, turn.day(), &self.tuning);
        debug!(
            day = turn.day(),
            trees = turn.trees.len(),
            actions = turn.actions.len(),
            costs = ?ctx.costs,
            "evaluating turn"
        );
        select(&ctx, &turn.actions)
    }

    /// Decides one turn and writes the chosen action as a single line.
    pub fn play_turn<W: Write>(&self, turn: &TurnState, out: &mut W) -> Result<Action, EngineError> {
        let decision = self.decide(turn)?;
        info!(
            day = turn.day(),
            action = %decision.action,
            mode = ?decision.mode,
            "chosen action"
        );
        writeln!(out, "{}", decision.action)?;
        out.flush()?;
        Ok(decision.action)
    }

    /// Plays turns from `reader` until the input ends.
    ///
    /// Returns the number of turns played.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<usize, EngineError> {
        let mut turns = 0;
        while let Some(turn) = read_turn(reader, &self.board)? {
            self.play_turn(&turn, out)?;
            turns += 1;
        }
        info!(turns, "input closed");
        Ok(turns)
    }
}

/// Runs a whole match: setup followed by turns until end of input.
pub fn run_match<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    tuning: Tuning,
) -> Result<usize, EngineError> {
    let mut reader = TokenReader::new(input);
    let engine = Engine::from_setup(&mut reader, tuning)?;
    engine.run(&mut reader, out)
}
