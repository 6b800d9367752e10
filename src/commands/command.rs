//! # A single batched command.
//!
//! [`Command`] is a value object: an opaque payload identified by a label.
//! Its execution effect is deliberately a no-op at this layer — the core
//! guarantees ordering and batching, not semantic effects. The label is the
//! only thing observers ever format.

/// An immutable, opaque command identified by its label.
///
/// Created by the caller, owned (and eventually discarded) by a
/// [`Block`](crate::Block).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    label: String,
}

impl Command {
    /// Creates a command with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The identifying label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invokes the command's opaque effect.
    ///
    /// Currently a no-op. Takes `&self` so that a future effect can never
    /// mutate the command (or the block that owns it).
    pub fn run(&self) {}
}

impl From<&str> for Command {
    fn from(label: &str) -> Self {
        Command::new(label)
    }
}

impl From<String> for Command {
    fn from(label: String) -> Self {
        Command::new(label)
    }
}
