//! Decision traces.
//!
//! Replays a recorded feed through the engine and emits one JSON object per
//! turn: the chosen action, how it was reached, and the category winners
//! with their cost and whether the current sun covers it.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::board::{Action, TurnState};
use crate::config::Tuning;
use crate::engine::{Engine, EngineError};
use crate::eval::CostProfile;
use crate::protocol::{read_turn, TokenReader};
use crate::search::{Decision, DecisionMode, ScoredAction};

/// A category winner annotated with its sun cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub scored: ScoredAction,
    pub cost: Option<u32>,
    pub affordable: bool,
}

/// One line of trace output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceRecord {
    pub turn: usize,
    pub day: u32,
    pub sun: u32,
    pub score: u32,
    pub action: Action,
    pub mode: DecisionMode,
    pub candidates: Vec<Candidate>,
}

/// Decides `turn` and builds its trace record.
pub fn trace_turn(
    engine: &Engine,
    index: usize,
    turn: &TurnState,
) -> Result<TraceRecord, EngineError> {
    let Decision {
        action,
        mode,
        seed,
        grow,
        complete,
    } = engine.decide(turn)?;

    let costs = CostProfile::from_trees(&turn.trees);
    let sun = turn.state.me.sun;
    let candidates = [seed, grow, complete]
        .into_iter()
        .flatten()
        .map(|scored| Candidate {
            cost: costs.cost_of(&scored.action, &turn.trees),
            affordable: costs.can_afford(&scored.action, &turn.trees, sun),
            scored,
        })
        .collect();

    Ok(TraceRecord {
        turn: index,
        day: turn.day(),
        sun,
        score: turn.state.me.score,
        action,
        mode,
        candidates,
    })
}

/// Reads a full feed from `input` and writes one JSON line per turn.
///
/// Returns the number of turns traced.
pub fn trace_match<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    tuning: Tuning,
) -> Result<usize, EngineError> {
    let mut reader = TokenReader::new(input);
    let engine = Engine::from_setup(&mut reader, tuning)?;
    let mut turns = 0;
    while let Some(turn) = read_turn(&mut reader, engine.board())? {
        let record = trace_turn(&engine, turns, &turn)?;
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        turns += 1;
    }
    out.flush()?;
    Ok(turns)
}
