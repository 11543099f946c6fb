//! Lexer states: one grammar step per state.
//!
//! Each state consumes the construct it owns, emits at most one token and returns the next state, or
//! `None` to halt at end of input or after an error token.
//!
//! ```text
//! [MetaKey] ⇄ [MetaValue]
//!     │ '#'
//!     ▼
//! [SectionTitle] ⇄ [Overview]
//!     │ "Data Structures"
//!     ▼
//! [Model] → [PropertyName] → ([PropertyExample]) → [PropertyType] → ([PropertyDesc])
//!    ▲            ▲  │ '#'                               │
//!    └────────────┼──┘                                   │
//!                 └──────────────────────────────────────┘
//! ```

use apib_core::errors::{self, Context};
use apib_core::lang::sections::{self, SectionId};

use crate::ast::Span;

use super::scanner::{Scanner, digit, letter, whitespace};
use super::tokens::{HeadingLevel, TokenKind};

const LINE_END: &str = "\r\n";

/// A lexer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MetaKey,
    MetaValue,
    SectionTitle,
    Overview,
    Model,
    PropertyName,
    PropertyExample,
    PropertyType,
    PropertyDesc,
}

impl State {
    /// Run one grammar step and return the next state.
    pub fn step(self, s: &mut Scanner<'_>) -> Option<State> {
        match self {
            State::MetaKey => meta_key(s),
            State::MetaValue => meta_value(s),
            State::SectionTitle => section_title(s),
            State::Overview => overview(s),
            State::Model => model(s),
            State::PropertyName => property_name(s),
            State::PropertyExample => property_example(s),
            State::PropertyType => property_type(s),
            State::PropertyDesc => property_desc(s),
        }
    }
}

/// Drop a run of structural whitespace, blank lines included.
fn collapse_whitespace(s: &mut Scanner<'_>) {
    s.accept_classes(&[whitespace]);
    s.ignore();
}

// ============================================================================
// Metadata
// ============================================================================

/// `key` of a `key: value` line, or hand over to the headings at the first `#`.
fn meta_key(s: &mut Scanner<'_>) -> Option<State> {
    collapse_whitespace(s);

    match s.peek() {
        None => return None,
        Some('#') => return Some(State::SectionTitle),
        Some(_) => {}
    }

    s.accept_until(":\r\n");
    if s.peek() != Some(':') {
        let span = s.next_rune_span();
        return s.error(errors::at_position(errors::NOT_VALID_META_KEY_MSG, span.start), span);
    }

    s.emit(TokenKind::MetaKey);
    s.accept(":");
    Some(State::MetaValue)
}

/// Everything after the colon and leading spaces, up to end of line.
fn meta_value(s: &mut Scanner<'_>) -> Option<State> {
    s.accept_run(" ");
    s.ignore();

    s.accept_until(LINE_END);
    s.emit(TokenKind::MetaValue);

    collapse_whitespace(s);
    Some(State::MetaKey)
}

// ============================================================================
// Headings
// ============================================================================

fn section_title(s: &mut Scanner<'_>) -> Option<State> {
    let hashes_start = s.pos();
    s.accept_run("#");
    let level = HeadingLevel::from_hashes(s.pos() - hashes_start);

    s.accept_run(" ");
    s.ignore();

    s.accept_until(LINE_END);

    if s.has_prefix(sections::as_str(SectionId::DataStructures)) {
        s.emit(TokenKind::DataStructures);
        collapse_whitespace(s);
        return s.peek().map(|_| State::Model);
    }

    s.emit(TokenKind::Title(level));
    collapse_whitespace(s);

    match s.peek() {
        None => None,
        Some('#') => Some(State::SectionTitle),
        Some(_) => Some(State::Overview),
    }
}

/// Free text up to the next line that starts with `#`, kept verbatim.
fn overview(s: &mut Scanner<'_>) -> Option<State> {
    loop {
        s.accept_until("\n");
        s.accept_run("\r\n ");

        match s.peek() {
            None | Some('#') => break,
            Some(_) => {}
        }
    }
    s.emit(TokenKind::Overview);

    s.peek().map(|_| State::SectionTitle)
}

// ============================================================================
// Data structures
// ============================================================================

/// `### Name (base)`: emits the name and discards the rest of the heading line.
fn model(s: &mut Scanner<'_>) -> Option<State> {
    collapse_whitespace(s);
    s.peek()?;

    s.accept_run("#");
    s.accept_run(" ");
    s.ignore();

    s.accept_until("\r\n (");
    s.emit(TokenKind::StructureName);

    s.accept_until(LINE_END);
    s.ignore();
    Some(State::PropertyName)
}

/// `+ name` followed by `:` (example value) or a space (type).
fn property_name(s: &mut Scanner<'_>) -> Option<State> {
    collapse_whitespace(s);
    match s.peek() {
        None => return None,
        Some('#') => return Some(State::Model),
        Some(_) => {}
    }

    s.accept("+");
    s.accept_run(" \t");
    s.ignore();

    s.accept_classes(&[letter, digit]);

    let next = match s.peek() {
        Some(':') => State::PropertyExample,
        Some(' ') => State::PropertyType,
        other => {
            let span = s.next_rune_span();
            return s.error(errors::unexpected_character(other, span.start, Context::PropertyName), span);
        }
    };

    s.emit(TokenKind::PropertyName);
    Some(next)
}

/// `: example value` before the type; the example is discarded.
fn property_example(s: &mut Scanner<'_>) -> Option<State> {
    s.accept_until("(");
    s.ignore();
    Some(State::PropertyType)
}

/// `(type)`, `(type, required)` or `(array[type])`.
///
/// The type token is queued only once the closing `)` has been read, so a malformed tail leaves the error
/// token as the only output of this step.
fn property_type(s: &mut Scanner<'_>) -> Option<State> {
    s.accept_run(" \t");
    if !s.accept("(") {
        return unexpected_type_character(s);
    }
    s.ignore();

    if !accept_type_name(s) {
        return unexpected_type_character(s);
    }

    let (kind, lexeme) = match s.peek() {
        Some(',' | ')') => (TokenKind::PropertyType, Span::new(s.start(), s.pos())),
        Some('[') => {
            s.accept("[");
            let element_start = s.pos();
            if !accept_type_name(s) {
                return unexpected_type_character(s);
            }
            if s.peek() != Some(']') {
                let span = s.next_rune_span();
                return s.error(errors::at_position(errors::MISSING_CLOSING_BRACE_MSG, span.start), span);
            }
            let element = Span::new(element_start, s.pos());
            s.accept("]");
            (TokenKind::PropertyArrayType, element)
        }
        _ => return unexpected_type_character(s),
    };

    // `,` starts qualifiers such as `required`, which are skipped up to the closing `)`.
    if s.accept(",") {
        s.accept_until(")\r\n");
    }
    if !s.accept(")") {
        return unexpected_type_character(s);
    }

    s.emit_span(kind, lexeme);
    after_property(s)
}

/// Consume a non-empty run of letters.
fn accept_type_name(s: &mut Scanner<'_>) -> bool {
    let from = s.pos();
    s.accept_classes(&[letter]);
    s.pos() > from
}

fn unexpected_type_character(s: &mut Scanner<'_>) -> Option<State> {
    let span = s.next_rune_span();
    let found = s.peek();
    s.error(errors::unexpected_character(found, span.start, Context::PropertyType), span)
}

/// Pick the state after a property's type: a description, the next structure, or the next property.
fn after_property(s: &mut Scanner<'_>) -> Option<State> {
    collapse_whitespace(s);
    match s.peek() {
        None => None,
        Some('#') => Some(State::Model),
        Some('-') => Some(State::PropertyDesc),
        Some(_) => Some(State::PropertyName),
    }
}

/// `- text` to end of line; the dash is part of the description.
fn property_desc(s: &mut Scanner<'_>) -> Option<State> {
    s.accept_until(LINE_END);
    s.emit(TokenKind::PropertyDescription);
    Some(State::PropertyName)
}

// ============================================================================
// TESTS
// ============================================================================
