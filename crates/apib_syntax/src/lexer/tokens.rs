//! Token types for the API Blueprint lexer.
//!
//! ## Notes
//! - [`TokenKind`] is a closed set; the assembler and every renderer match on it exhaustively.
//! - Title levels are a closed [`HeadingLevel`] rather than a bare integer.

use std::fmt;

use serde::Serialize;

use crate::ast::Span;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Markdown heading level, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Level for a run of `count` hashes. Runs longer than six clamp to [`HeadingLevel::H6`].
    pub fn from_hashes(count: usize) -> Self {
        match count {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }

    /// Numeric level, 1 through 6.
    pub fn get(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.get()
    }
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The session failed; the token text is the message.
    Error,

    // ========== Metadata ==========
    MetaKey,
    MetaValue,

    // ========== Headings ==========
    Title(HeadingLevel),
    DataStructures,
    Overview,

    // ========== Data structures ==========
    StructureName,
    PropertyName,
    PropertyType,
    PropertyArrayType,
    PropertyDescription,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Error => write!(f, "error"),
            TokenKind::MetaKey => write!(f, "metadata-key"),
            TokenKind::MetaValue => write!(f, "metadata-value"),
            TokenKind::Title(level) => write!(f, "title-{}", level.get()),
            TokenKind::DataStructures => write!(f, "data-structures-marker"),
            TokenKind::Overview => write!(f, "overview-body"),
            TokenKind::StructureName => write!(f, "structure-name"),
            TokenKind::PropertyName => write!(f, "property-name"),
            TokenKind::PropertyType => write!(f, "property-type"),
            TokenKind::PropertyArrayType => write!(f, "property-array-type"),
            TokenKind::PropertyDescription => write!(f, "property-description"),
        }
    }
}

/// A token with its kind, text and source span.
///
/// `text` is `source[span]` for every kind except [`TokenKind::Error`], whose text is the message and whose
/// span marks the offending rune (empty at end of input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
