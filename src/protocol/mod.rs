//! Game feed handling.
//!
//! Reads the one-off board description and the per-turn state from a
//! line-oriented text stream, and formats the chosen action back out.

pub mod error;
pub mod feed;
pub mod notation;
pub mod reader;

pub use error::ProtocolError;
pub use feed::{read_board, read_turn};
pub use notation::{parse_action, read_action};
pub use reader::TokenReader;
