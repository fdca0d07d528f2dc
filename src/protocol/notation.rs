//! Text notation for actions.
//!
//! Actions travel as one line each: `WAIT`, `SEED <source> <target>`,
//! `GROW <target>`, `COMPLETE <target>`. The chosen action is echoed back in
//! exactly the same form.

use std::fmt;
use std::io::{BufRead, Cursor};

use serde::{Serialize, Serializer};

use super::error::ProtocolError;
use super::reader::TokenReader;
use crate::board::action::Action;
use crate::board::cell::CellIndex;

const WAIT: &str = "WAIT";
const SEED: &str = "SEED";
const GROW: &str = "GROW";
const COMPLETE: &str = "COMPLETE";

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wait => f.write_str(WAIT),
            Action::Seed { source, target } => write!(f, "{} {} {}", SEED, source, target),
            Action::Grow { target } => write!(f, "{} {}", GROW, target),
            Action::Complete { target } => write!(f, "{} {}", COMPLETE, target),
        }
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reads one action from a token stream.
///
/// The keyword decides how many cell arguments follow.
pub fn read_action<R: BufRead>(reader: &mut TokenReader<R>) -> Result<Action, ProtocolError> {
    let keyword = reader.token("action keyword")?;
    match keyword.as_str() {
        WAIT => Ok(Action::Wait),
        SEED => {
            let source = reader.number::<CellIndex>("seed source cell")?;
            let target = reader.number::<CellIndex>("seed target cell")?;
            Ok(Action::Seed { source, target })
        }
        GROW => Ok(Action::Grow {
            target: reader.number("grow target cell")?,
        }),
        COMPLETE => Ok(Action::Complete {
            target: reader.number("complete target cell")?,
        }),
        _ => Err(ProtocolError::UnknownAction(keyword)),
    }
}

/// Parses a single action line such as `SEED 3 12`.
pub fn parse_action(s: &str) -> Result<Action, ProtocolError> {
    let mut reader = TokenReader::new(Cursor::new(s));
    let action = read_action(&mut reader)?;
    if !reader.at_end()? {
        return Err(ProtocolError::TrailingToken(reader.token("trailing token")?));
    }
    Ok(action)
}
