//! Property type vocabulary.
//!
//! Property types are either one of the primitive types below or the name of another structure. The
//! `array` constructor wraps exactly one element type: `(array[number])`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; `Number` names a structure, not the primitive.
//!
//! ## Examples
//! ```rust
//! use apib_core::lang::types::{self, PrimitiveId};
//!
//! assert_eq!(types::from_str("string"), Some(PrimitiveId::String));
//! assert!(types::from_str("Dimension").is_none());
//! assert_eq!(types::ARRAY, "array");
//! ```

use super::registry::{Example, LangItemInfo};

/// Spelling of the array type constructor.
pub const ARRAY: &str = "array";

/// Stable identifier for primitive property types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    String,
    Number,
    Boolean,
}

/// Metadata for a primitive property type.
pub type PrimitiveInfo = LangItemInfo<PrimitiveId>;

/// Registry of primitive property types.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(
        PrimitiveId::String,
        "string",
        "Free text value.",
        &[Example {
            code: "+ colour (string) - What colour is it?",
            note: None,
        }],
    ),
    info(
        PrimitiveId::Number,
        "number",
        "Integer or decimal value.",
        &[Example {
            code: "+ radius (number)",
            note: None,
        }],
    ),
    info(
        PrimitiveId::Boolean,
        "boolean",
        "`true` or `false`.",
        &[Example {
            code: "+ fruit (boolean) - Is it fruit?",
            note: None,
        }],
    ),
];

/// Return the canonical spelling for a primitive type.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a primitive type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    PRIMITIVES
        .iter()
        .find(|p| p.id == id)
        .expect("primitive info missing")
}

/// Resolve a type name to a primitive type.
pub fn from_str(s: &str) -> Option<PrimitiveId> {
    PRIMITIVES
        .iter()
        .find(|p| p.canonical == s || p.aliases.contains(&s))
        .map(|p| p.id)
}

const fn info(
    id: PrimitiveId,
    canonical: &'static str,
    description: &'static str,
    examples: &'static [Example],
) -> PrimitiveInfo {
    PrimitiveInfo {
        id,
        canonical,
        aliases: &[],
        description,
        examples,
    }
}
