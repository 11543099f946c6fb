//! Provide the shared, pure vocabulary of the API Blueprint dialect understood by `apib`.
//!
//! This crate is intentionally small and dependency-free. It contains the spellings that both:
//! - the lexer/assembler (`apib_syntax`) use to classify input, and
//! - the tools built on top (CLI, renderers) use to interpret the assembled document.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - Current scope: section keywords, property type vocabulary, and the canonical lexer error messages.

pub mod errors;
pub mod lang;
