//! Lexer for API Blueprint metadata, headings and data structures.
//!
//! Handles tokenization including:
//! - Metadata `key: value` lines before the first heading
//! - Headings (title levels 1–6) and the overview text that follows them
//! - The `Data Structures` section: structure names and `+ name (type) - description` properties
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, HeadingLevel)
//! - `scanner` - Cursor primitives and rune classes
//! - `states` - One grammar step per state
//! - `stream` - Producer thread + bounded channel delivery
//! - `config` - Session configuration
//!
//! The first lexical error ends the session: the error token is the last token produced.

mod config;
pub mod scanner;
pub mod states;
mod stream;
pub mod tokens;

pub use config::{DEFAULT_CHANNEL_CAPACITY, LexerConfig};
pub use scanner::Scanner;
pub use states::State;
pub use stream::{TokenStream, spawn};
pub use tokens::{HeadingLevel, Token, TokenKind};

use crate::diagnostics::SyntaxError;

// ============================================================================
// LEXER DRIVER
// ----------------------------------------------------------------------------
// Pull-based: a state only runs when the consumer asks for a token and none is
// queued, so the consumer sets the pace.
// ============================================================================

/// Lexer for one document.
///
/// Iterating yields tokens in source order. After an error token the iterator is exhausted.
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    state: Option<State>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            state: Some(State::MetaKey),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.scanner.pop_token() {
                return Some(token);
            }
            let state = self.state?;
            tracing::trace!(?state, pos = self.scanner.pos(), "step");
            self.state = state.step(&mut self.scanner);
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lex a source string into the raw token stream, error token included.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex a source string, splitting off a trailing error token.
///
/// ## Errors
/// Returns [`SyntaxError::Lex`] carrying the message and span of the error token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = lex(source);
    match tokens.pop() {
        Some(last) if last.is_error() => Err(SyntaxError::lex(last.text, last.span)),
        Some(last) => {
            tokens.push(last);
            Ok(tokens)
        }
        None => Ok(tokens),
    }
}

// ============================================================================
// TESTS
// ============================================================================
