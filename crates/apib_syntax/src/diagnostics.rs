//! Errors surfaced while lexing and assembling a document.
//!
//! Lexical errors travel through the token stream as a single error token; the assembler turns that token
//! into [`SyntaxError::Lex`]. The remaining variants cover token streams that were not produced by this
//! crate's lexer (or were cut short) and so arrive out of order.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenKind;

/// A lexing or assembly failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    /// The lexer rejected the input. The session halted at the first error.
    #[error("{message}")]
    #[diagnostic(code(apib::lex))]
    Lex {
        message: String,
        #[label("here")]
        span: SourceSpan,
    },

    /// A token arrived with no open entry to fold it into.
    #[error("unexpected {kind} token, expected {expected}")]
    #[diagnostic(code(apib::assemble))]
    UnexpectedToken {
        kind: TokenKind,
        expected: &'static str,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    /// The token stream closed while an entry was still open.
    #[error("token stream ended early, expected {expected}")]
    #[diagnostic(code(apib::assemble))]
    UnexpectedEnd { expected: &'static str },
}

impl SyntaxError {
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        SyntaxError::Lex {
            message: message.into(),
            span: span.into(),
        }
    }

    pub fn unexpected_token(kind: TokenKind, expected: &'static str, span: Span) -> Self {
        SyntaxError::UnexpectedToken {
            kind,
            expected,
            span: span.into(),
        }
    }

    /// Byte range the error points at, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxError::Lex { span, .. } | SyntaxError::UnexpectedToken { span, .. } => {
                Some(Span::new(span.offset(), span.offset() + span.len()))
            }
            SyntaxError::UnexpectedEnd { .. } => None,
        }
    }
}

/// Get line number, column number, and line text for a byte offset.
///
/// Lines and columns are 1-based; the column counts Unicode scalar values, not bytes.
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find(['\r', '\n'])
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = source[line_start..offset].chars().count() + 1;

    (line_num, col_num, line_text)
}
