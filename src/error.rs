//! Error types used by the bulkline core.
//!
//! This module defines two error enums, split by origin:
//!
//! - [`ConfigError`] — construction-time failures (invalid settings).
//! - [`ProtocolError`] — caller-protocol mistakes during operation.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics. A [`ProtocolError`] never corrupts internal state:
//! the operation that raised it leaves the block and policy exactly as
//! they were, so the caller may retry or continue with valid operations.

use thiserror::Error;

/// # Errors raised when constructing a [`Batcher`](crate::Batcher).
///
/// Construction is all-or-nothing: on error no batcher exists and no
/// observers were taken.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The static block size was zero; a static block must hold at least one command.
    #[error("block size must be greater than zero")]
    ZeroBlockSize,
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use bulkline::ConfigError;
    ///
    /// assert_eq!(ConfigError::ZeroBlockSize.as_label(), "config_zero_block_size");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::ZeroBlockSize => "config_zero_block_size",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ConfigError::ZeroBlockSize => "invalid static block size: 0".to_string(),
        }
    }
}

/// # Errors raised by batching operations.
///
/// These signal a logic mistake on the caller's side, such as closing a
/// scope that was never opened. The state machine is left untouched.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// `close_scope` was called while the dynamic nesting level was already zero.
    #[error("no scope was opened")]
    ScopeUnderflow,
}

impl ProtocolError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use bulkline::ProtocolError;
    ///
    /// assert_eq!(ProtocolError::ScopeUnderflow.as_label(), "protocol_scope_underflow");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ProtocolError::ScopeUnderflow => "protocol_scope_underflow",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ProtocolError::ScopeUnderflow => {
                "close_scope without a matching open_scope".to_string()
            }
        }
    }
}
