//! Shareable metadata for `apib_core::lang` registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the lexer.

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use apib_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "+ radius (number)",
///     note: Some("Scalar property."),
/// };
/// assert!(ex.code.starts_with('+'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// ## Notes
/// - `description` is mandatory to keep docs/tooling consistent.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub examples: &'static [Example],
}
