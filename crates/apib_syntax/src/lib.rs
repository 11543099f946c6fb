//! Syntax frontend for API Blueprint data structures: lexer, assembler, document model, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the CLI and by renderers that turn the assembled
//! [`ast::Document`] into source code.
//!
//! ## Notes
//! - This crate is “syntax-only”: it classifies and reports, it never prints or exits.
//! - Vocabulary (section keywords, primitive type names, error wording) comes from `apib_core`.
//!
//! ## Examples
//! ```rust
//! use apib_syntax::{lexer, parser};
//!
//! let source = "Version: 1A9\n\n## Data Structures\n\n### Dimension\n+ radius (number)\n";
//! let document = parser::parse(lexer::Lexer::new(source)).unwrap();
//! assert_eq!(document.structures[0].name, "Dimension");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
