//! Batching policies.
//!
//! This module holds the data half of the block-lifecycle state machine:
//! **which** policy is driving block boundaries right now. The rules that
//! interpret it (when to flush, when to transition) live in
//! [`Batcher`](crate::Batcher).
//!
//! ## Contents
//! - [`BatchPolicy`] the Static / Dynamic tagged union with its nesting depth
//!
//! ## Quick wiring
//! ```text
//! Batcher { policy: BatchPolicy, .. }
//!      └─► open_scope / close_scope / add match on the active variant:
//!           - Static        → flush at block_size, switch on scope open
//!           - Dynamic{depth} → size-unbounded, flush when depth returns to 0
//! ```

mod batch;

pub use batch::BatchPolicy;
