//! # Nested Scopes Example
//!
//! Mixes static batching with explicit, nested dynamic scopes
//! (`block_size = 3`):
//!
//! - `[cmd1, cmd2]` — partial static block, flushed early when `{` arrives
//! - `[cmd3, cmd4]` — first dynamic scope
//! - `[cmd5 ... cmd9]` — outer scope with a nested inner scope; one flush
//!   when the outermost `}` balances
//! - `[cmd10, cmd11]` — left open inside an unterminated scope and therefore
//!   **discarded** at shutdown (no `bulk:` line is printed for them)
//!
//! ## Run
//! ```bash
//! cargo run --example nested_scopes --features logging
//! ```

use bulkline::{dispatch, Batcher, Config, ConsoleWriter, FileWriter, ObserverSet, Token};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut observers = ObserverSet::new();
    observers.add(Box::new(ConsoleWriter));
    observers.add(Box::new(FileWriter::new(std::env::temp_dir())));

    let mut batcher = Batcher::with_observers(Config::new(3), observers)?;

    #[rustfmt::skip]
    let script = [
        "cmd1", "cmd2",
        "{",
            "cmd3", "cmd4",
        "}",
        "{",
            "cmd5", "cmd6",
            "{",
                "cmd7", "cmd8",
            "}",
            "cmd9",
        "}",
        "{",
            "cmd10", "cmd11",
    ];

    for line in script {
        println!("[{line}]");
        dispatch(&mut batcher, Token::parse(line))?;
    }

    // The trailing scope never closed: cmd10/cmd11 are discarded on drop.
    Ok(())
}
