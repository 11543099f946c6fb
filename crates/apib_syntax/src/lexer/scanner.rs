//! Scanner core: cursor primitives over the input of one lexing session.
//!
//! The scanner knows nothing about the grammar. States drive it with the primitives below and decide what
//! to emit; the scanner only slices `source[start..pos]` into tokens and queues them for the driver.
//!
//! ## Invariants
//! - `0 <= start <= pos <= source.len()`, and both offsets sit on UTF-8 boundaries.
//! - `pos` only moves backwards through [`Scanner::backup`], by exactly the last rune read.

use std::collections::VecDeque;

use crate::ast::Span;

use super::tokens::{Token, TokenKind};

/// Rune classification predicate used by [`Scanner::accept_classes`].
pub type RuneClass = fn(char) -> bool;

/// Cursor over the input of a single lexing session.
pub struct Scanner<'a> {
    source: &'a str,
    /// Beginning of the not-yet-emitted lexeme.
    start: usize,
    /// Current scan position.
    pos: usize,
    /// Width of the last rune read; zero at end of input and after a backup.
    width: usize,
    emitted: VecDeque<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
            width: 0,
            emitted: VecDeque::new(),
        }
    }

    // ========================================================================
    // Positions
    // ========================================================================

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// The pending, not-yet-emitted span `source[start..pos]`.
    pub fn pending(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    // ========================================================================
    // Core rune handling
    // ========================================================================

    /// Read the next rune, or `None` at end of input.
    pub fn advance(&mut self) -> Option<char> {
        match self.source[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Un-read the rune returned by the last [`Scanner::advance`].
    ///
    /// A second backup without an intervening advance is a no-op.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Look at the next rune without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let c = self.advance();
        self.backup();
        c
    }

    /// Consume one rune if it is in `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.advance() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consume a maximal run of runes from `valid`.
    pub fn accept_run(&mut self, valid: &str) {
        while self.accept(valid) {}
    }

    /// Consume a maximal run of runes matching any of `classes`.
    pub fn accept_classes(&mut self, classes: &[RuneClass]) {
        while let Some(c) = self.advance() {
            if !classes.iter().any(|class| class(c)) {
                self.backup();
                break;
            }
        }
    }

    /// Consume runes up to, not including, the first rune in `stop` or the end of input.
    pub fn accept_until(&mut self, stop: &str) {
        while let Some(c) = self.advance() {
            if stop.contains(c) {
                self.backup();
                break;
            }
        }
    }

    /// Test the pending span for a literal prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.pending().starts_with(prefix)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Queue the pending span as a token of `kind`.
    pub fn emit(&mut self, kind: TokenKind) {
        let span = Span::new(self.start, self.pos);
        tracing::trace!(%kind, start = span.start, end = span.end, "emit");
        self.emitted.push_back(Token::new(kind, self.pending(), span));
        self.start = self.pos;
    }

    /// Queue `source[span]` as a token of `kind` and drop the rest of the pending span.
    ///
    /// For lexemes that are only known to be valid once the text after them has been read. `span` must lie
    /// within `start..pos`.
    pub fn emit_span(&mut self, kind: TokenKind, span: Span) {
        debug_assert!(self.start <= span.start && span.start <= span.end && span.end <= self.pos);
        tracing::trace!(%kind, start = span.start, end = span.end, "emit");
        self.emitted.push_back(Token::new(kind, &self.source[span.start..span.end], span));
        self.start = self.pos;
    }

    /// Drop the pending span.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Queue an error token.
    ///
    /// Returns `None` so a state can `return scanner.error(...)` as its final transition; nothing is lexed
    /// after an error.
    pub fn error<S>(&mut self, message: impl Into<String>, span: Span) -> Option<S> {
        let message = message.into();
        tracing::trace!(%message, start = span.start, "lex error");
        self.emitted.push_back(Token::new(TokenKind::Error, message, span));
        None
    }

    /// Span of the next rune (empty at end of input), for pointing errors at it.
    pub fn next_rune_span(&mut self) -> Span {
        let width = self.peek().map_or(0, char::len_utf8);
        Span::new(self.pos, self.pos + width)
    }

    /// Take the oldest queued token.
    pub fn pop_token(&mut self) -> Option<Token> {
        self.emitted.pop_front()
    }
}

// ============================================================================
// Rune classes
// ============================================================================

/// ASCII letters.
pub fn letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII digits.
pub fn digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Structural whitespace: space, tab, carriage return, line feed.
pub fn whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

// ============================================================================
// TESTS
// ============================================================================
