//! Arbor -- a turn-based decision engine for the hexagonal tree-growing game.
//!
//! This binary reads the board setup and then one turn at a time from stdin,
//! and writes exactly one action line per turn to stdout. Diagnostics go to
//! stderr, filtered by `RUST_LOG`.
//!
//! Usage:
//!   arbor [--tuning FILE]

use std::env;
use std::io::{self, BufWriter};
use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use arbor::config::Tuning;
use arbor::engine::run_match;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let tuning = match parse_args(env::args().skip(1)) {
        Ok(t) => t,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: arbor [--tuning FILE]");
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = run_match(stdin.lock(), &mut out, tuning) {
        error!("{}", e);
        process::exit(1);
    }
}

/// Parses command-line arguments into the tuning to play with.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Tuning, String> {
    let mut tuning = Tuning::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tuning" => {
                let path = args.next().ok_or("--tuning needs a file argument")?;
                tuning = Tuning::load(&path).map_err(|e| e.to_string())?;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(tuning)
}
