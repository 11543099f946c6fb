//! Document assembler: folds the token stream into a [`Document`].
//!
//! The assembler is single-pass and strictly ordered. It holds at most one open entry of each kind (a
//! metadata key waiting for its value, the current structure, the current property) and seals an entry when
//! a token of a different kind arrives.
//!
//! ## Examples
//!
//! ```rust
//! use apib_syntax::{lexer, parser};
//!
//! let source = "## Data Structures\n### Dimension\n+ sizes (array[number])\n";
//! let document = parser::parse(lexer::Lexer::new(source)).unwrap();
//! let sizes = &document.structures[0].properties[0];
//! assert!(sizes.is_array);
//! assert_eq!(sizes.type_name, "number");
//! ```

use crate::ast::{Document, MetadataEntry, PropertyDef, Section, Span, StructureDef};
use crate::diagnostics::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};


/// What the previous token left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Nothing,
    /// A metadata key waiting for its value.
    MetaKey,
    /// A section title, which may be followed by its overview.
    Section,
    /// The data structures marker or a structure name; properties may follow.
    Structure,
    /// A property name waiting for its type.
    PropertyName,
    /// A typed property, which may still receive a description.
    PropertyTyped,
}

/// Incremental document builder.
///
/// Feed tokens with [`Assembler::push`] and seal the document with [`Assembler::finish`].
pub struct Assembler {
    document: Document,
    open: Open,
    pending_key: Option<String>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            document: Document::default(),
            open: Open::Nothing,
            pending_key: None,
        }
    }

    /// Fold one token into the document.
    ///
    /// ## Errors
    /// - [`SyntaxError::Lex`] for an error token; the document must then be discarded.
    /// - [`SyntaxError::UnexpectedToken`] when the token has no open entry to attach to.
    pub fn push(&mut self, token: Token) -> Result<(), SyntaxError> {
        let Token { kind, text, span } = token;

        match kind {
            TokenKind::Error => return Err(SyntaxError::lex(text, span)),

            TokenKind::MetaKey => {
                self.expect_not(Open::MetaKey, kind, "a metadata value", span)?;
                self.pending_key = Some(text);
                self.open = Open::MetaKey;
            }
            TokenKind::MetaValue => {
                let key = match self.pending_key.take() {
                    Some(key) if self.open == Open::MetaKey => key,
                    _ => return Err(SyntaxError::unexpected_token(kind, "a metadata key first", span)),
                };
                self.document.metadata.push(MetadataEntry { key, value: text });
                self.open = Open::Nothing;
            }

            TokenKind::Title(level) => {
                self.expect_not(Open::MetaKey, kind, "a metadata value", span)?;
                self.document.sections.push(Section {
                    level,
                    title: text,
                    overview: None,
                });
                self.open = Open::Section;
            }
            TokenKind::Overview => {
                if self.open != Open::Section {
                    return Err(SyntaxError::unexpected_token(kind, "a section title first", span));
                }
                if let Some(section) = self.document.sections.last_mut() {
                    section.overview = Some(text);
                }
                self.open = Open::Nothing;
            }
            TokenKind::DataStructures => {
                self.expect_not(Open::MetaKey, kind, "a metadata value", span)?;
                self.open = Open::Structure;
            }

            TokenKind::StructureName => {
                self.expect_not(Open::MetaKey, kind, "a metadata value", span)?;
                self.expect_not(Open::PropertyName, kind, "a property type", span)?;
                tracing::debug!(name = %text, "structure");
                self.document.structures.push(StructureDef::new(text));
                self.open = Open::Structure;
            }
            TokenKind::PropertyName => {
                if !matches!(self.open, Open::Structure | Open::PropertyTyped) {
                    return Err(SyntaxError::unexpected_token(kind, "a structure name first", span));
                }
                let structure = self.current_structure(kind, span)?;
                structure.properties.push(PropertyDef::new(text, String::new(), false));
                self.open = Open::PropertyName;
            }
            TokenKind::PropertyType | TokenKind::PropertyArrayType => {
                let property = self.current_property(Open::PropertyName, kind, "a property name first", span)?;
                property.type_name = text;
                property.is_array = kind == TokenKind::PropertyArrayType;
                self.open = Open::PropertyTyped;
            }
            TokenKind::PropertyDescription => {
                let property = self.current_property(Open::PropertyTyped, kind, "a property type first", span)?;
                property.description = Some(text);
                self.open = Open::Structure;
            }
        }

        Ok(())
    }

    /// Seal the document once the token stream has closed.
    ///
    /// ## Errors
    /// [`SyntaxError::UnexpectedEnd`] if a metadata key or property name is still waiting.
    pub fn finish(self) -> Result<Document, SyntaxError> {
        match self.open {
            Open::MetaKey => Err(SyntaxError::UnexpectedEnd {
                expected: "a metadata value",
            }),
            Open::PropertyName => Err(SyntaxError::UnexpectedEnd {
                expected: "a property type",
            }),
            Open::Nothing | Open::Section | Open::Structure | Open::PropertyTyped => Ok(self.document),
        }
    }

    fn expect_not(&self, open: Open, kind: TokenKind, expected: &'static str, span: Span) -> Result<(), SyntaxError> {
        if self.open == open {
            Err(SyntaxError::unexpected_token(kind, expected, span))
        } else {
            Ok(())
        }
    }

    fn current_structure(&mut self, kind: TokenKind, span: Span) -> Result<&mut StructureDef, SyntaxError> {
        self.document
            .structures
            .last_mut()
            .ok_or_else(|| SyntaxError::unexpected_token(kind, "a structure name first", span))
    }

    fn current_property(
        &mut self,
        open: Open,
        kind: TokenKind,
        expected: &'static str,
        span: Span,
    ) -> Result<&mut PropertyDef, SyntaxError> {
        if self.open != open {
            return Err(SyntaxError::unexpected_token(kind, expected, span));
        }
        self.document
            .structures
            .last_mut()
            .and_then(|s| s.properties.last_mut())
            .ok_or_else(|| SyntaxError::unexpected_token(kind, expected, span))
    }
}

/// Assemble a [`Document`] from a token stream.
///
/// Accepts any ordered token source: a [`Lexer`], a threaded [`crate::lexer::TokenStream`], or a collected
/// `Vec<Token>`. Assembly stops at the first error; nothing after it is read.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; the partially built document is dropped.
#[tracing::instrument(skip_all)]
pub fn parse<I>(tokens: I) -> Result<Document, SyntaxError>
where
    I: IntoIterator<Item = Token>,
{
    let mut assembler = Assembler::new();
    for token in tokens {
        assembler.push(token)?;
    }
    assembler.finish()
}

/// Lex and assemble a source string in one pass.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_str(source: &str) -> Result<Document, SyntaxError> {
    parse(Lexer::new(source))
}
