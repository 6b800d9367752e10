//! # Batching policy for the block lifecycle.
//!
//! [`BatchPolicy`] determines how the open block is bounded.
//!
//! - [`BatchPolicy::Static`] the block flushes once it reaches the configured size.
//! - [`BatchPolicy::Dynamic`] the block flushes when all opened scopes are closed;
//!   size is ignored and scopes may nest.
//!
//! Exactly one variant is active at any time. Transitions always start the
//! incoming variant fresh: entering either state clears the open block, and
//! a dynamic scope always begins at depth 1.
//!
//! ## Choosing the block boundary
//!
//! **Steady throughput** (volume-bounded batches):
//! ```text
//! BatchPolicy::Static           → flush every `block_size` commands
//! ```
//!
//! **Caller-delimited transactions** (explicit `{` ... `}` markers):
//! ```text
//! BatchPolicy::Dynamic { depth } → flush when the last scope closes,
//!                                  however many commands accumulated
//! ```

/// Policy controlling when the open block is flushed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Flush once the block reaches the configured static size (default).
    Static,
    /// Flush when `depth` returns to zero; block size is unbounded.
    ///   - `depth`: count of currently-open, unmatched scopes.
    ///   - A freshly entered scope starts at `depth = 1`.
    Dynamic {
        /// Number of opened scopes not yet matched by a close.
        depth: usize,
    },
}

impl BatchPolicy {
    /// A freshly opened dynamic scope (depth 1).
    #[must_use]
    pub fn dynamic() -> Self {
        BatchPolicy::Dynamic { depth: 1 }
    }

    /// Current nesting depth: 0 in [`BatchPolicy::Static`].
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            BatchPolicy::Static => 0,
            BatchPolicy::Dynamic { depth } => *depth,
        }
    }

    /// True while a dynamic scope is active.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, BatchPolicy::Dynamic { .. })
    }
}

impl Default for BatchPolicy {
    /// Returns [`BatchPolicy::Static`]: the machine starts size-bounded.
    fn default() -> Self {
        BatchPolicy::Static
    }
}
