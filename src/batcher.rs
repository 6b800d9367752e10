//! # Batcher: the block-lifecycle orchestrator.
//!
//! The [`Batcher`] owns the open [`Block`], the active [`BatchPolicy`], and
//! the [`ObserverSet`]. Every public operation delegates to the active
//! policy variant, which may mutate the block, notify observers, and replace
//! the policy itself.
//!
//! ## Transition table
//! ```text
//! state       │ open_scope              │ close_scope             │ add                       │ drop (shutdown)
//! ────────────┼─────────────────────────┼─────────────────────────┼───────────────────────────┼────────────────
//! Static      │ flush, enter Dynamic{1} │ Ok, no-op               │ push + notify_command;    │ flush
//!             │                         │                         │ at block_size: flush,     │
//!             │                         │                         │ enter fresh Static        │
//! Dynamic{0}  │ (unreachable normally)  │ Err(ScopeUnderflow),    │ push + notify_command     │ discard
//!             │                         │ state untouched         │ (size is ignored)         │
//! Dynamic{1}  │ depth ← 2               │ flush, enter Static     │ push + notify_command     │ discard
//! Dynamic{n}  │ depth ← n+1             │ depth ← n−1             │ push + notify_command     │ discard
//! ```
//!
//! Flush = notify `on_flush` with the full block, then run it; entering a
//! state clears the block. An **empty** block is never flushed and never
//! notified. Dynamic scopes opened mid-static-block take priority
//! immediately: the partial static block is flushed first, so no command is
//! silently carried across a policy change.
//!
//! ## Shutdown asymmetry
//! Dropping the batcher runs the active policy's shutdown hook exactly once:
//! a Static block is flushed, but a block left open inside a dynamic scope
//! is treated as an incomplete transaction and **discarded** without
//! notifying observers.
//!
//! ## Example
//! ```
//! use bulkline::{Batcher, Block, Config, Observe};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Recorder(Rc<RefCell<Vec<Vec<String>>>>);
//!
//! impl Observe for Recorder {
//!     fn on_command(&mut self, _block: &Block) {}
//!     fn on_flush(&mut self, block: &Block) {
//!         self.0.borrow_mut().push(block.labels().map(String::from).collect());
//!     }
//! }
//!
//! let flushes = Rc::new(RefCell::new(Vec::new()));
//! let mut batcher = Batcher::new(Config::new(2)).unwrap();
//! batcher.add_observer(Box::new(Recorder(Rc::clone(&flushes))));
//!
//! batcher.add("cmd1");
//! batcher.add("cmd2"); // static block full → flushed
//! batcher.open_scope();
//! batcher.add("cmd3");
//! batcher.add("cmd4");
//! batcher.add("cmd5"); // dynamic: no size limit
//! batcher.close_scope().unwrap(); // scope balanced → flushed
//! drop(batcher);
//!
//! assert_eq!(*flushes.borrow(), vec![
//!     vec!["cmd1".to_string(), "cmd2".to_string()],
//!     vec!["cmd3".to_string(), "cmd4".to_string(), "cmd5".to_string()],
//! ]);
//! ```

use tracing::debug;

use crate::commands::{Block, Command};
use crate::config::Config;
use crate::error::{ConfigError, ProtocolError};
use crate::observers::{Observe, ObserverSet};
use crate::policies::BatchPolicy;

/// Orchestrates the block lifecycle: batching policy, flushes, observers.
pub struct Batcher {
    /// The open block: commands accumulated since the last flush.
    block: Block,
    /// The active policy variant.
    policy: BatchPolicy,
    /// Fan-out for append/flush notifications.
    observers: ObserverSet,
    /// Commands per static block. Fixed at construction, always >= 1.
    block_size: usize,
    /// Shutdown hook guard: the hook runs at most once.
    finished: bool,
}

impl Batcher {
    /// Creates a batcher with no observers, starting in the Static policy
    /// with an empty block.
    ///
    /// # Errors
    /// [`ConfigError::ZeroBlockSize`] if `config.block_size == 0`.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_observers(config, ObserverSet::new())
    }

    /// Creates a batcher with the given observer set.
    ///
    /// # Errors
    /// [`ConfigError::ZeroBlockSize`] if `config.block_size == 0`.
    pub fn with_observers(config: Config, observers: ObserverSet) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self {
            block: Block::new(),
            policy: BatchPolicy::Static,
            observers,
            block_size: config.block_size,
            finished: false,
        })
    }

    /// Registers an additional observer at the end of the notification order.
    pub fn add_observer(&mut self, observer: Box<dyn Observe>) {
        self.observers.add(observer);
    }

    /// Replaces the whole observer set, taking ownership.
    pub fn set_observers(&mut self, observers: ObserverSet) {
        self.observers = observers;
    }

    /// Opens a dynamic scope.
    ///
    /// In Static, the current block (if any) is flushed first: scope markers
    /// take priority mid-block, and no command is carried across the policy
    /// change. In Dynamic, the nesting depth increases by one.
    pub fn open_scope(&mut self) {
        match self.policy {
            BatchPolicy::Static => {
                self.flush();
                self.enter(BatchPolicy::dynamic());
            }
            BatchPolicy::Dynamic { depth } => {
                self.policy = BatchPolicy::Dynamic { depth: depth + 1 };
            }
        }
    }

    /// Closes a dynamic scope.
    ///
    /// Closing the outermost scope flushes the accumulated dynamic block and
    /// returns control to Static. In Static this is a silent no-op: closing
    /// without a prior open is not an error there.
    ///
    /// # Errors
    /// [`ProtocolError::ScopeUnderflow`] if the dynamic nesting level is
    /// already at its floor of zero. The state machine remains exactly as it
    /// was.
    pub fn close_scope(&mut self) -> Result<(), ProtocolError> {
        match self.policy {
            BatchPolicy::Static => Ok(()),
            BatchPolicy::Dynamic { depth: 0 } => Err(ProtocolError::ScopeUnderflow),
            BatchPolicy::Dynamic { depth: 1 } => {
                self.flush();
                self.enter(BatchPolicy::Static);
                Ok(())
            }
            BatchPolicy::Dynamic { depth } => {
                self.policy = BatchPolicy::Dynamic { depth: depth - 1 };
                Ok(())
            }
        }
    }

    /// Appends a command to the open block and notifies observers.
    ///
    /// In Static, reaching `block_size` flushes the block and starts a fresh
    /// one. Dynamic blocks are unbounded by size: they only flush when their
    /// scope markers balance.
    pub fn add(&mut self, command: impl Into<Command>) {
        self.block.push(command.into());
        self.observers.notify_command(&self.block);

        if !self.policy.is_dynamic() && self.block.len() == self.block_size {
            self.flush();
            self.enter(BatchPolicy::Static);
        }
    }

    /// Commands buffered in the open block.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.block.len()
    }

    /// Current dynamic nesting depth (0 while Static).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.policy.depth()
    }

    /// The configured static block size.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Shuts the batcher down explicitly.
    ///
    /// Equivalent to dropping it: runs the active policy's shutdown hook
    /// (Static flushes, Dynamic discards) exactly once.
    pub fn finish(self) {}

    /// Notifies observers with the full block, then runs it.
    ///
    /// Empty blocks are never flushed: nothing is notified, nothing runs.
    /// Clearing is left to the subsequent state entry.
    fn flush(&mut self) {
        if self.block.is_empty() {
            return;
        }
        debug!(commands = self.block.len(), depth = self.policy.depth(), "flushing block");
        self.observers.notify_flush(&self.block);
        self.block.run();
    }

    /// Installs a fresh policy variant; entering a state clears the block.
    fn enter(&mut self, policy: BatchPolicy) {
        self.block.clear();
        self.policy = policy;
    }

    /// The per-variant shutdown hook, guarded to run at most once.
    fn finalize(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        match self.policy {
            BatchPolicy::Static => self.flush(),
            // An unterminated dynamic scope is an incomplete transaction:
            // its buffered commands are discarded without notification.
            BatchPolicy::Dynamic { depth } => {
                if !self.block.is_empty() {
                    debug!(commands = self.block.len(), depth, "discarding unterminated dynamic block");
                }
            }
        }
        self.block.clear();
    }
}

impl Drop for Batcher {
    /// Runs the active policy's shutdown hook on every exit path, exactly once.
    fn drop(&mut self) {
        self.finalize();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Shared journal of everything a recording observer saw.
    #[derive(Default)]
    struct Journal {
        flushes: Vec<Vec<String>>,
        adds: Vec<Vec<String>>,
    }

    /// Records each notification's block contents.
    struct Recorder {
        journal: Rc<RefCell<Journal>>,
    }

    impl Observe for Recorder {
        fn on_command(&mut self, block: &Block) {
            self.journal
                .borrow_mut()
                .adds
                .push(block.labels().map(String::from).collect());
        }
        fn on_flush(&mut self, block: &Block) {
            self.journal
                .borrow_mut()
                .flushes
                .push(block.labels().map(String::from).collect());
        }
    }

    fn recording_batcher(block_size: usize) -> (Batcher, Rc<RefCell<Journal>>) {
        let journal = Rc::new(RefCell::new(Journal::default()));
        let mut batcher = Batcher::new(Config::new(block_size)).unwrap();
        batcher.add_observer(Box::new(Recorder {
            journal: Rc::clone(&journal),
        }));
        (batcher, journal)
    }

    fn flushes(journal: &Rc<RefCell<Journal>>) -> Vec<Vec<String>> {
        journal.borrow().flushes.clone()
    }

    fn labels(cmds: &[&str]) -> Vec<String> {
        cmds.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_zero_block_size_is_rejected() {
        assert_eq!(
            Batcher::new(Config::new(0)).err(),
            Some(ConfigError::ZeroBlockSize)
        );
    }

    #[test]
    fn test_under_threshold_flushes_only_on_shutdown() {
        let (mut batcher, journal) = recording_batcher(5);
        batcher.add("cmd1");
        batcher.add("cmd2");
        assert!(flushes(&journal).is_empty(), "no flush below the threshold");
        assert_eq!(batcher.pending(), 2);

        drop(batcher);
        assert_eq!(flushes(&journal), vec![labels(&["cmd1", "cmd2"])]);
    }

    #[test]
    fn test_exact_multiples_flush_per_block_without_extra_shutdown_flush() {
        let (mut batcher, journal) = recording_batcher(2);
        for cmd in ["a", "b", "c", "d", "e", "f"] {
            batcher.add(cmd);
        }
        drop(batcher);

        assert_eq!(
            flushes(&journal),
            vec![labels(&["a", "b"]), labels(&["c", "d"]), labels(&["e", "f"])],
            "3 blocks of 2, and no empty shutdown flush"
        );
    }

    #[test]
    fn test_on_command_sees_block_after_each_append() {
        let (mut batcher, journal) = recording_batcher(10);
        batcher.add("a");
        batcher.add("b");

        assert_eq!(
            journal.borrow().adds,
            vec![labels(&["a"]), labels(&["a", "b"])]
        );
    }

    #[test]
    fn test_open_scope_flushes_partial_static_block() {
        let (mut batcher, journal) = recording_batcher(100);
        batcher.add("cmd1");
        batcher.add("cmd2");
        batcher.open_scope();

        assert_eq!(
            flushes(&journal),
            vec![labels(&["cmd1", "cmd2"])],
            "a partial static block flushes the instant a scope opens"
        );
        assert_eq!(batcher.depth(), 1);
        assert_eq!(batcher.pending(), 0, "dynamic scope starts with a cleared block");
    }

    #[test]
    fn test_open_scope_on_empty_static_block_notifies_nothing() {
        let (mut batcher, journal) = recording_batcher(3);
        batcher.open_scope();
        assert!(flushes(&journal).is_empty(), "an empty block is never flushed");
        assert_eq!(batcher.depth(), 1);
    }

    #[test]
    fn test_dynamic_block_ignores_static_threshold() {
        let (mut batcher, journal) = recording_batcher(2);
        batcher.open_scope();
        for cmd in ["a", "b", "c", "d", "e"] {
            batcher.add(cmd);
        }
        assert!(flushes(&journal).is_empty(), "dynamic blocks are size-unbounded");

        batcher.close_scope().unwrap();
        assert_eq!(flushes(&journal), vec![labels(&["a", "b", "c", "d", "e"])]);
    }

    #[test]
    fn test_nested_scopes_flush_once_at_outermost_close() {
        let (mut batcher, journal) = recording_batcher(2);
        batcher.open_scope();
        batcher.open_scope();
        batcher.open_scope();
        assert_eq!(batcher.depth(), 3);

        batcher.add("x");
        batcher.close_scope().unwrap();
        batcher.close_scope().unwrap();
        assert!(
            flushes(&journal).is_empty(),
            "inner closes must not flush while scopes remain open"
        );
        assert_eq!(batcher.depth(), 1);

        batcher.close_scope().unwrap();
        assert_eq!(flushes(&journal), vec![labels(&["x"])]);
        assert_eq!(batcher.depth(), 0, "control returns to Static");
    }

    #[test]
    fn test_close_scope_in_static_is_silent_noop() {
        let (mut batcher, journal) = recording_batcher(3);
        batcher.add("a");
        assert_eq!(batcher.close_scope(), Ok(()));
        assert_eq!(batcher.pending(), 1, "block untouched by the no-op close");
        assert!(flushes(&journal).is_empty());
    }

    #[test]
    fn test_scope_underflow_is_error_and_leaves_state_unchanged() {
        let (mut batcher, journal) = recording_batcher(3);
        batcher.open_scope();
        batcher.add("kept");
        // Force the floor case: normal transitions never leave depth at 0.
        batcher.policy = BatchPolicy::Dynamic { depth: 0 };

        assert_eq!(batcher.close_scope(), Err(ProtocolError::ScopeUnderflow));
        assert_eq!(batcher.policy, BatchPolicy::Dynamic { depth: 0 });
        assert_eq!(batcher.pending(), 1, "failed close must not touch the block");
        assert!(flushes(&journal).is_empty());

        // Valid operations still work afterwards.
        batcher.open_scope();
        batcher.add("more");
        batcher.close_scope().unwrap();
        assert_eq!(flushes(&journal), vec![labels(&["kept", "more"])]);
    }

    #[test]
    fn test_shutdown_inside_dynamic_scope_discards_without_flush() {
        let (mut batcher, journal) = recording_batcher(2);
        batcher.open_scope();
        batcher.add("doomed1");
        batcher.add("doomed2");
        drop(batcher);

        assert!(
            flushes(&journal).is_empty(),
            "an unterminated dynamic scope must never reach on_flush"
        );
    }

    #[test]
    fn test_finish_is_equivalent_to_drop() {
        let (mut batcher, journal) = recording_batcher(5);
        batcher.add("a");
        batcher.finish();
        assert_eq!(flushes(&journal), vec![labels(&["a"])]);
    }

    #[test]
    fn test_scenario_flat_stream_threshold_three() {
        // T=3, [cmd1..cmd5] → flush₁ = [cmd1,cmd2,cmd3]; shutdown flush₂ = [cmd4,cmd5].
        let (mut batcher, journal) = recording_batcher(3);
        for cmd in ["cmd1", "cmd2", "cmd3", "cmd4", "cmd5"] {
            batcher.add(cmd);
        }
        drop(batcher);

        assert_eq!(
            flushes(&journal),
            vec![
                labels(&["cmd1", "cmd2", "cmd3"]),
                labels(&["cmd4", "cmd5"]),
            ]
        );
    }

    #[test]
    fn test_scenario_mixed_static_and_nested_dynamic() {
        // T=3, [cmd1 cmd2 { cmd3 cmd4 } { cmd5 cmd6 { cmd7 cmd8 } cmd9 }]
        let (mut batcher, journal) = recording_batcher(3);
        batcher.add("cmd1");
        batcher.add("cmd2");
        batcher.open_scope();
        batcher.add("cmd3");
        batcher.add("cmd4");
        batcher.close_scope().unwrap();
        batcher.open_scope();
        batcher.add("cmd5");
        batcher.add("cmd6");
        batcher.open_scope();
        batcher.add("cmd7");
        batcher.add("cmd8");
        batcher.close_scope().unwrap();
        batcher.add("cmd9");
        batcher.close_scope().unwrap();

        assert_eq!(
            flushes(&journal),
            vec![
                labels(&["cmd1", "cmd2"]),
                labels(&["cmd3", "cmd4"]),
                labels(&["cmd5", "cmd6", "cmd7", "cmd8", "cmd9"]),
            ]
        );
    }

    #[test]
    fn test_static_resumes_batching_after_dynamic_scope() {
        let (mut batcher, journal) = recording_batcher(2);
        batcher.open_scope();
        batcher.add("in-scope");
        batcher.close_scope().unwrap();

        batcher.add("s1");
        batcher.add("s2");
        assert_eq!(
            flushes(&journal),
            vec![labels(&["in-scope"]), labels(&["s1", "s2"])],
            "the static threshold applies again after the scope closes"
        );
    }
}
