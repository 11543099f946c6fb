#![forbid(unsafe_code)]
//! API Blueprint data-structure tooling
//!
//! This crate bundles the syntax frontend (lexer, document assembler) with a small inspection CLI.
//! Renderers that turn a [`ast::Document`] into source code live outside this crate.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use apib_syntax::ast;
pub use apib_syntax::diagnostics;
pub use apib_syntax::lexer;
pub use apib_syntax::parser;

pub use apib_syntax::ast::Document;
pub use apib_syntax::diagnostics::SyntaxError;
pub use apib_syntax::lexer::{Lexer, LexerConfig, Token, TokenKind};
