//! Arbor engine library.
//!
//! Exposes the board representation, the feed protocol, shade and cost
//! evaluation, action selection, and decision tracing for use by
//! integration tests and the binaries.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod search;
pub mod trace;
