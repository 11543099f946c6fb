//! Shared user-facing lexer error messages.
//!
//! The lexer emits these inside error tokens; tests and tools match on the same constants so the
//! wording stays aligned.

/// Message for a metadata line whose key is not terminated by `:`.
pub const NOT_VALID_META_KEY_MSG: &str = "not valid meta key";

/// Message for an array type whose `[` is never closed by `]`.
pub const MISSING_CLOSING_BRACE_MSG: &str = "missing closing brace in array type";

/// Grammar context named in an unexpected-character error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    PropertyName,
    PropertyType,
}

impl Context {
    /// Return the human-readable name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Context::PropertyName => "property name",
            Context::PropertyType => "property type",
        }
    }
}

/// Build the "unexpected character" message for `ch` found at byte offset `pos`.
///
/// `None` stands for the end of input.
///
/// ## Examples
/// ```rust
/// use apib_core::errors::{self, Context};
///
/// assert_eq!(
///     errors::unexpected_character(Some('*'), 7, Context::PropertyName),
///     "unexpected character '*' at position 7 for property name"
/// );
/// ```
pub fn unexpected_character(ch: Option<char>, pos: usize, context: Context) -> String {
    match ch {
        Some(c) => format!(
            "unexpected character {:?} at position {} for {}",
            c,
            pos,
            context.as_str()
        ),
        None => format!("unexpected end of input at position {} for {}", pos, context.as_str()),
    }
}

/// Append the byte position to one of the fixed messages above.
pub fn at_position(message: &str, pos: usize) -> String {
    format!("{} at position {}", message, pos)
}
