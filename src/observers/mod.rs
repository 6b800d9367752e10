//! # Block observers for the bulkline core.
//!
//! This module provides the [`Observe`] trait, the [`ObserverSet`] fan-out
//! aggregator, and built-in writer implementations.
//!
//! ## Architecture
//! ```text
//! Notification flow (synchronous, in registration order):
//!   Batcher::add ──────── notify_command(&Block) ──► ObserverSet
//!   Batcher (on flush) ── notify_flush(&Block) ────►     │
//!                                                   ┌────┴────┬──────────┐
//!                                                   ▼         ▼          ▼
//!                                             ConsoleWriter FileWriter Custom...
//! ```
//!
//! ## Observer types
//! - **Passive observers** - format and emit flushed blocks (console, file)
//! - **Stateful observers** - derive state from the call ordering (e.g. the
//!   file writer's session stamp, captured at the first `on_command` after a
//!   flush)
//!
//! ## Implementing custom observers
//! ```
//! use bulkline::{Block, Observe};
//!
//! struct FlushCounter {
//!     flushes: usize,
//! }
//!
//! impl Observe for FlushCounter {
//!     fn on_command(&mut self, _block: &Block) {}
//!     fn on_flush(&mut self, block: &Block) {
//!         self.flushes += 1;
//!         println!("flush #{} carried {} commands", self.flushes, block.len());
//!     }
//! }
//! ```

mod observe;
mod set;

#[cfg(feature = "logging")]
mod console;
#[cfg(feature = "logging")]
mod file;

pub use observe::Observe;
pub use set::ObserverSet;

#[cfg(feature = "logging")]
pub use console::ConsoleWriter;
#[cfg(feature = "logging")]
pub use file::FileWriter;
