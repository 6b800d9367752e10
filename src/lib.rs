//! # bulkline
//!
//! **Bulkline** is a lightweight command-batching library for Rust.
//!
//! It groups a sequential stream of discrete commands into ordered blocks
//! ("bulks") and delivers each completed block to a set of observers before
//! discharging it. The crate is designed as a building block for
//! line-oriented command processors.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!                  "cmd1"  "{"  "cmd2"  "}"  ...
//!                     │     │      │     │
//!                     ▼     ▼      ▼     ▼
//!               ┌───────────────────────────────┐
//!               │  Token adapter (interpret)    │
//!               │  "{" → open_scope             │
//!               │  "}" → close_scope            │
//!               │  else → add(Command)          │
//!               └──────────────┬────────────────┘
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Batcher (block-lifecycle orchestrator)                     │
//! │  - Block (open buffer of commands)                          │
//! │  - BatchPolicy (Static │ Dynamic{depth})                    │
//! │  - ObserverSet (ordered fan-out)                            │
//! │  - block_size (static flush threshold)                      │
//! └──────┬──────────────────────────────────────┬───────────────┘
//!        │ on_command (after every append)      │ on_flush (full block,
//!        ▼                                      ▼  before run/clear)
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  ObserverSet (registration order)           │
//! └──────┬──────────────────────┬───────────────────┬───────────┘
//!        ▼                      ▼                   ▼
//!   ConsoleWriter          FileWriter            custom Observe
//!   (bulk: a, b, c)        (bulk<stamp>.log)     (metrics, tests, ...)
//! ```
//!
//! ### Block lifecycle
//! ```text
//! start: Static, empty block
//!
//! Static:
//!   ├─► add(cmd)       → append + on_command; at block_size → FLUSH, fresh Static
//!   ├─► open_scope     → FLUSH partial block, enter Dynamic{1}
//!   ├─► close_scope    → no-op
//!   └─► drop           → FLUSH
//!
//! Dynamic{n}:
//!   ├─► add(cmd)       → append + on_command (no size limit)
//!   ├─► open_scope     → Dynamic{n+1}           (same block)
//!   ├─► close_scope    → Dynamic{n−1}; at 0 → FLUSH, enter Static
//!   │                    at floor 0 already → Err(ScopeUnderflow)
//!   └─► drop           → DISCARD (incomplete transaction, no flush)
//!
//! FLUSH = on_flush(&block) → block.run() → clear (on state entry);
//!         an empty block is never flushed.
//! ```
//!
//! ## Features
//! | Area              | Description                                                       | Key types / traits               |
//! |-------------------|-------------------------------------------------------------------|----------------------------------|
//! | **Observer API**  | Hook into appends and flushes (logging, files, custom sinks).     | [`Observe`], [`ObserverSet`]     |
//! | **Policies**      | Size-bounded vs. scope-delimited batching, with nesting.          | [`BatchPolicy`]                  |
//! | **Orchestration** | Own the block lifecycle, flush-on-shutdown contract.              | [`Batcher`]                      |
//! | **Errors**        | Typed errors for configuration and caller protocol.               | [`ConfigError`], [`ProtocolError`] |
//! | **Data model**    | Immutable commands in an ordered block.                           | [`Command`], [`Block`]           |
//! | **Adapters**      | Map a textual token stream onto the batching operations.          | [`Token`], [`dispatch`]          |
//!
//! ## Optional features
//! - `logging`: built-in [`ConsoleWriter`] and [`FileWriter`] observers
//!   _(demo/reference only)_.
//! - `cli`: the `bulkline` binary (stdin token loop).
//!
//! ## Example
//! ```
//! use bulkline::{Batcher, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Static blocks of 3 commands.
//!     let mut batcher = Batcher::new(Config::new(3))?;
//!
//!     batcher.add("cmd1");
//!     batcher.add("cmd2");
//!     assert_eq!(batcher.pending(), 2); // below threshold, still buffered
//!
//!     // An explicit scope takes priority immediately: the partial static
//!     // block is flushed, then commands accumulate until the scope closes.
//!     batcher.open_scope();
//!     batcher.add("cmd3");
//!     batcher.add("cmd4");
//!     batcher.close_scope()?;
//!
//!     Ok(())
//! }
//! ```

mod batcher;
mod commands;
mod config;
mod error;
mod interpret;
mod observers;
mod policies;

// ---- Public re-exports ----

pub use batcher::Batcher;
pub use commands::{Block, Command};
pub use config::Config;
pub use error::{ConfigError, ProtocolError};
pub use interpret::{dispatch, Token};
pub use observers::{Observe, ObserverSet};
pub use policies::BatchPolicy;

// Optional: expose the built-in console/file observers (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::{ConsoleWriter, FileWriter};
