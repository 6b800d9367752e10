//! # Console writer observer for debugging and demos.
//!
//! [`ConsoleWriter`] prints each flushed block to stdout in a one-line,
//! human-readable format. It ignores appends entirely.
//!
//! ## Output format
//! ```text
//! bulk: cmd1, cmd2, cmd3
//! ```
//!
//! ## Example
//! ```
//! use bulkline::{Batcher, Config, ConsoleWriter};
//!
//! let mut batcher = Batcher::new(Config::new(3)).unwrap();
//! batcher.add_observer(Box::new(ConsoleWriter));
//! // Flushed blocks are now echoed to stdout.
//! ```

use crate::commands::Block;
use crate::observers::Observe;

/// Simple stdout observer.
///
/// Enabled via the `logging` feature. Prints one line per flushed block for
/// debugging and demonstration purposes. Not intended for production use —
/// implement a custom [`Observe`] for structured output.
pub struct ConsoleWriter;

impl Observe for ConsoleWriter {
    fn on_command(&mut self, _block: &Block) {}

    fn on_flush(&mut self, block: &Block) {
        println!("{}", format_bulk(block));
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

/// Formats a block as `bulk: a, b, c`.
fn format_bulk(block: &Block) -> String {
    let mut line = String::from("bulk: ");
    for (i, label) in block.labels().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        line.push_str(label);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;

    #[test]
    fn test_format_joins_labels_with_commas() {
        let mut block = Block::new();
        block.push(Command::new("cmd1"));
        block.push(Command::new("cmd2"));
        block.push(Command::new("cmd3"));

        assert_eq!(format_bulk(&block), "bulk: cmd1, cmd2, cmd3");
    }

    #[test]
    fn test_format_single_command_has_no_separator() {
        let mut block = Block::new();
        block.push(Command::new("only"));

        assert_eq!(format_bulk(&block), "bulk: only");
    }
}
