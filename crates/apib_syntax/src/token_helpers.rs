//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers keep `matches!(...)` out of call sites in the lexer driver, the CLI and tests.

use crate::lexer::{HeadingLevel, Token, TokenKind};

impl TokenKind {
    /// Return `true` if this is the error marker that ends a session.
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error)
    }

    /// Return the heading level, if this is a title token.
    pub fn heading_level(&self) -> Option<HeadingLevel> {
        match self {
            TokenKind::Title(level) => Some(*level),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.is_error()`.
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// Convenience wrapper for `self.kind.heading_level()`.
    pub fn heading_level(&self) -> Option<HeadingLevel> {
        self.kind.heading_level()
    }
}
