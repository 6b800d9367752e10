//! bulkline - line-oriented command batching CLI
//!
//! Reads tokens from stdin (one per line) and feeds them to a [`Batcher`]
//! wired with the built-in console and file observers:
//!
//! - `{` opens a dynamic scope, `}` closes one
//! - any other line is a command label
//! - input stops at EOF or an empty line
//!
//! Completed bulks are echoed to stdout (`bulk: a, b, c`) and persisted as
//! `bulk<stamp>.log` files in the output directory.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter for internal diagnostics (e.g. `bulkline=debug`)

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bulkline::{dispatch, Batcher, Config, ConsoleWriter, FileWriter, ObserverSet, Token};

/// Groups a stream of commands into ordered bulks.
#[derive(Parser, Debug)]
#[command(name = "bulkline")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of commands that completes a static block (must be >= 1)
    #[arg(value_name = "BLOCK_SIZE")]
    block_size: usize,

    /// Directory for bulk log files (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut observers = ObserverSet::new();
    observers.add(Box::new(ConsoleWriter));
    observers.add(Box::new(FileWriter::new(args.out_dir)));

    let mut batcher = match Batcher::with_observers(Config::new(args.block_size), observers) {
        Ok(batcher) => batcher,
        Err(err) => {
            eprintln!("{}", err.as_message());
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
        };
        if line.is_empty() {
            break;
        }
        if let Err(err) = dispatch(&mut batcher, Token::parse(&line)) {
            eprintln!("{}", err.as_message());
            return ExitCode::FAILURE;
        }
    }

    // Dropping the batcher runs the shutdown hook: a partial static block is
    // flushed, an unterminated dynamic scope is discarded.
    ExitCode::SUCCESS
}
