//! # The command block.
//!
//! [`Block`] is the ordered, mutable buffer of commands accumulated since
//! the last flush. It is owned exclusively by the
//! [`Batcher`](crate::Batcher) and cleared by policy transitions, never
//! shared.
//!
//! ## Invariant
//! Contents reflect exactly the commands pushed since the last clear, in
//! push order. A cleared block has zero commands.

use crate::commands::Command;

/// Ordered buffer of [`Command`]s.
#[derive(Debug, Default, Clone)]
pub struct Block {
    commands: Vec<Command>,
}

impl Block {
    /// Creates an empty block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command to the end of the block. O(1) amortized.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Number of commands currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if the block holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Empties the block. No side effects beyond dropping the commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Lazy, restartable iterator over command labels in push order.
    ///
    /// Intended for observer consumption (formatting a flushed block).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(Command::label)
    }

    /// Runs every command's opaque effect in push order.
    ///
    /// Takes `&self`: running never mutates the block's contents, so a
    /// future failing effect cannot leave the buffer half-consumed.
    pub fn run(&self) {
        for command in &self.commands {
            command.run();
        }
    }
}
