//! # Static Batching Example
//!
//! Feeds a flat stream of five commands through a batcher with
//! `block_size = 3`:
//!
//! - `[cmd1, cmd2, cmd3]` flushes the moment the third command lands
//! - `[cmd4, cmd5]` is flushed by the shutdown hook when the batcher drops
//!
//! ## Run
//! ```bash
//! cargo run --example static_blocks --features logging
//! ```

use bulkline::{dispatch, Batcher, Config, ConsoleWriter, FileWriter, ObserverSet, Token};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut observers = ObserverSet::new();
    observers.add(Box::new(ConsoleWriter));
    observers.add(Box::new(FileWriter::new(std::env::temp_dir())));

    let mut batcher = Batcher::with_observers(Config::new(3), observers)?;

    for line in ["cmd1", "cmd2", "cmd3", "cmd4", "cmd5"] {
        println!("[{line}]");
        dispatch(&mut batcher, Token::parse(line))?;
    }

    // Drop flushes the partial [cmd4, cmd5] block.
    Ok(())
}
