//! # Core observer trait
//!
//! `Observe` is the extension point for plugging custom sinks into the
//! batcher. Observers are invoked synchronously, on the caller's thread, in
//! registration order — see [`ObserverSet`](crate::ObserverSet).
//!
//! ## Contract
//! - `on_command` fires once per successful append and sees the block **as it
//!   stands after** the append.
//! - `on_flush` fires exactly once per discharged block and sees the full,
//!   final block **before** it is run or cleared. It never fires for an
//!   empty block.
//! - One or more `on_command` calls always precede the paired `on_flush`,
//!   and a block's `on_command` stream starts right after the previous flush
//!   cleared the block — stateful observers (session stamps, counters) may
//!   rely on this ordering.
//! - Implementations must not interrupt the fan-out: handle your own I/O
//!   failures (log and continue) rather than panicking.

use crate::commands::Block;

/// Contract for block observers.
///
/// Called synchronously from [`Batcher`](crate::Batcher) operations. No
/// `Send`/`Sync` bound: the core is single-threaded by design.
pub trait Observe {
    /// Handle a command having been appended to the open block.
    ///
    /// # Parameters
    /// - `block`: the open block, including the command just appended
    fn on_command(&mut self, block: &Block);

    /// Handle a block about to be discharged.
    ///
    /// # Parameters
    /// - `block`: the complete block, not yet run or cleared (never empty)
    fn on_flush(&mut self, block: &Block);

    /// Human-readable name (for logs/diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
