//! # Textual command-source adapter.
//!
//! Maps text tokens onto the three batcher operations:
//!
//! - `"{"` → [`Batcher::open_scope`]
//! - `"}"` → [`Batcher::close_scope`]
//! - anything else → [`Batcher::add`] with the token as the command label
//!
//! The core itself never parses text; this adapter is the boundary between
//! a line-oriented source (stdin, a script) and the batching operations.
//!
//! ## Example
//! ```
//! use bulkline::{dispatch, Batcher, Config, Token};
//!
//! let mut batcher = Batcher::new(Config::new(3)).unwrap();
//! for line in ["cmd1", "{", "cmd2", "}"] {
//!     dispatch(&mut batcher, Token::parse(line)).unwrap();
//! }
//! ```

use crate::batcher::Batcher;
use crate::error::ProtocolError;

/// A parsed input token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// `"{"` — begin a dynamic scope.
    Open,
    /// `"}"` — end a dynamic scope.
    Close,
    /// Any other text — a plain command label.
    Command(String),
}

impl Token {
    /// Classifies one line of input.
    #[must_use]
    pub fn parse(line: &str) -> Token {
        match line {
            "{" => Token::Open,
            "}" => Token::Close,
            other => Token::Command(other.to_string()),
        }
    }
}

/// Applies a token to the batcher.
///
/// # Errors
/// [`ProtocolError`] from [`Batcher::close_scope`]; the other operations
/// cannot fail.
pub fn dispatch(batcher: &mut Batcher, token: Token) -> Result<(), ProtocolError> {
    match token {
        Token::Open => {
            batcher.open_scope();
            Ok(())
        }
        Token::Close => batcher.close_scope(),
        Token::Command(label) => {
            batcher.add(label);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_parse_classifies_braces_and_commands() {
        assert_eq!(Token::parse("{"), Token::Open);
        assert_eq!(Token::parse("}"), Token::Close);
        assert_eq!(Token::parse("cmd7"), Token::Command("cmd7".to_string()));
        // Braces embedded in longer text are plain commands.
        assert_eq!(Token::parse("{x}"), Token::Command("{x}".to_string()));
    }

    #[test]
    fn test_dispatch_drives_the_batcher() {
        let mut batcher = Batcher::new(Config::new(10)).unwrap();
        dispatch(&mut batcher, Token::parse("{")).unwrap();
        dispatch(&mut batcher, Token::parse("a")).unwrap();
        assert_eq!(batcher.depth(), 1);
        assert_eq!(batcher.pending(), 1);

        dispatch(&mut batcher, Token::parse("}")).unwrap();
        assert_eq!(batcher.depth(), 0);
    }
}
