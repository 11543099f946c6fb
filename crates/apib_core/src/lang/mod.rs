//! API Blueprint vocabulary registries.
//!
//! This module is the “front door” for dialect-level vocabulary: section keywords and property type names.
//!
//! Callers work with **stable IDs** (e.g. `SectionId`, `PrimitiveId`) and look up spellings/metadata via
//! registry tables instead of scattering string comparisons across the lexer and tools.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no document types, no IO, no side effects.
//! - The lexer enforces syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   docs, rendering).
//!
//! ## Examples
//! ```rust
//! use apib_core::lang::types::{self, PrimitiveId};
//!
//! assert_eq!(types::from_str("number"), Some(PrimitiveId::Number));
//! assert_eq!(types::as_str(PrimitiveId::Boolean), "boolean");
//! ```

pub mod registry;
pub mod sections;
pub mod types;
