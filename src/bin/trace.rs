//! Decision trace CLI.
//!
//! Replays a recorded feed (board setup followed by turns) through the
//! engine and writes one JSON object per turn.
//!
//! Usage:
//!   arbor-trace [OPTIONS] [FEED]
//!
//! Options:
//!   --tuning FILE   Tuning overrides as JSON (default: built-in values)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress summary output
//!
//! With no FEED the feed is read from stdin.

use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use arbor::config::Tuning;
use arbor::engine::EngineError;
use arbor::trace::trace_match;

struct Options {
    tuning: Tuning,
    feed: Option<String>,
    output: Option<String>,
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = match parse_args(env::args().skip(1)) {
        Ok(Some(o)) => o,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            process::exit(2);
        }
    };

    let start = Instant::now();
    match run(&options) {
        Ok(turns) => {
            if !options.quiet {
                eprintln!(
                    "Traced {} turns in {:.1}ms",
                    turns,
                    start.elapsed().as_secs_f64() * 1000.0
                );
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

fn run(options: &Options) -> Result<usize, EngineError> {
    let mut out: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let tuning = options.tuning.clone();
    match &options.feed {
        Some(path) => trace_match(BufReader::new(File::open(path)?), &mut out, tuning),
        None => trace_match(io::stdin().lock(), &mut out, tuning),
    }
}

/// Returns `Ok(None)` when help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Options>, String> {
    let mut options = Options {
        tuning: Tuning::default(),
        feed: None,
        output: None,
        quiet: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tuning" => {
                let path = args.next().ok_or("--tuning needs a file argument")?;
                options.tuning = Tuning::load(&path).map_err(|e| e.to_string())?;
            }
            "--output" => {
                options.output = Some(args.next().ok_or("--output needs a file argument")?);
            }
            "--quiet" => options.quiet = true,
            "--help" | "-h" => return Ok(None),
            other if other.starts_with("--") => {
                return Err(format!("Unknown argument: {}", other));
            }
            feed => {
                if options.feed.replace(feed.to_string()).is_some() {
                    return Err("only one feed file may be given".to_string());
                }
            }
        }
    }
    Ok(Some(options))
}

fn print_usage() {
    eprintln!("Usage: arbor-trace [OPTIONS] [FEED]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tuning FILE    Tuning overrides as JSON");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
