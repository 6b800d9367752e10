//! # Batcher configuration.
//!
//! Provides [`Config`], the construction-time settings for a
//! [`Batcher`](crate::Batcher).
//!
//! ## Field semantics
//! - `block_size`: number of commands that completes a static block
//!   (must be `>= 1`; `0` is rejected at batcher construction with
//!   [`ConfigError::ZeroBlockSize`](crate::ConfigError::ZeroBlockSize)).
//!
//! Dynamic blocks ignore `block_size` entirely: they are bounded only by
//! their scope markers.

use crate::error::ConfigError;

/// Construction-time settings for a [`Batcher`](crate::Batcher).
///
/// All fields are public for flexibility. Validation happens once, at
/// batcher construction, via [`Config::validated`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of commands that completes a static block.
    ///
    /// The static policy flushes the open block the moment it reaches this
    /// size. Has no effect while a dynamic scope is open.
    pub block_size: usize,
}

impl Config {
    /// Creates a config with the given static block size.
    ///
    /// The value is not checked here; see [`Config::validated`].
    #[must_use]
    pub fn new(block_size: usize) -> Self {
        Self { block_size }
    }

    /// Checks the config, returning it unchanged if valid.
    ///
    /// # Errors
    /// [`ConfigError::ZeroBlockSize`] if `block_size == 0`.
    ///
    /// # Example
    /// ```
    /// use bulkline::{Config, ConfigError};
    ///
    /// assert!(Config::new(3).validated().is_ok());
    /// assert_eq!(Config::new(0).validated(), Err(ConfigError::ZeroBlockSize));
    /// ```
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(self)
    }
}

impl Default for Config {
    /// Default configuration: `block_size = 1` (every static command is its
    /// own block — flush per command).
    fn default() -> Self {
        Self { block_size: 1 }
    }
}
