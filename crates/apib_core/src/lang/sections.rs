//! Section keyword vocabulary.
//!
//! Headings whose text starts with a section keyword switch the lexer into a dedicated grammar instead of
//! being lexed as plain titles.
//!
//! ## Notes
//! - The lexer matches the canonical spelling as a **case-sensitive** prefix of the heading text, so
//!   `Data Structures (v2)` is still the data structures section.
//!
//! ## Examples
//! ```rust
//! use apib_core::lang::sections::{self, SectionId};
//!
//! assert_eq!(sections::as_str(SectionId::DataStructures), "Data Structures");
//! ```

use super::registry::{Example, LangItemInfo};

/// Stable identifier for section keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    DataStructures,
}

/// Metadata for a section keyword.
pub type SectionInfo = LangItemInfo<SectionId>;

/// Registry of section keywords.
pub const SECTIONS: &[SectionInfo] = &[SectionInfo {
    id: SectionId::DataStructures,
    canonical: "Data Structures",
    aliases: &[],
    description: "Named structures whose list items declare typed properties.",
    examples: &[Example {
        code: "## Data Structures\n\n### Dimension (object)\n+ radius (number)\n",
        note: Some("Any heading level introduces the section."),
    }],
}];

/// Return the canonical spelling for a section keyword.
pub fn as_str(id: SectionId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a section keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SectionId) -> &'static SectionInfo {
    SECTIONS
        .iter()
        .find(|s| s.id == id)
        .expect("section info missing")
}
