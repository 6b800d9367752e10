//! Command data model.
//!
//! This module groups the value types flowing through the batcher:
//!
//! ## Contents
//! - [`Command`] an immutable, opaque payload with an identifying label
//! - [`Block`]   the ordered buffer of commands accumulated since the last flush
//!
//! ## Quick wiring
//! ```text
//! Batcher::add(Command) ─► Block::push ─► ObserverSet::notify_command(&Block)
//!                             │
//!                   (on flush) └─► ObserverSet::notify_flush(&Block) ─► Block::run ─► Block::clear
//! ```

mod block;
mod command;

pub use block::Block;
pub use command::Command;
