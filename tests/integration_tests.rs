//! Integration tests for the apib lexer and assembler

use std::fs;
use std::path::{Path, PathBuf};

use apib::lexer::{self, HeadingLevel, LexerConfig, TokenKind};
use apib::{Document, SyntaxError, parser};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "apib").unwrap_or(false))
        .collect();
    paths.sort();
    paths
}

fn load(kind: &str, name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(kind)
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path.display()))
}

/// Helper to run the full pipeline on a source file
fn assemble_file(path: &Path) -> Result<Document, SyntaxError> {
    let source = fs::read_to_string(path).unwrap();
    parser::parse(lexer::Lexer::new(&source))
}

/// Test that all valid fixtures assemble successfully
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = assemble_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to assemble, got error: {:?}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce exactly one error token, at the end of the stream
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());
    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let tokens = lexer::lex(&source);
        let errors = tokens.iter().filter(|t| t.is_error()).count();
        assert_eq!(errors, 1, "{}: expected one error token", path.display());
        assert!(tokens.last().unwrap().is_error(), "{}: error must end the stream", path.display());
        assert!(matches!(assemble_file(&path), Err(SyntaxError::Lex { .. })));
    }
}

#[test]
fn test_simple_document_tokens() {
    let source = load("valid", "simple.apib");
    let kinds: Vec<TokenKind> = lexer::lex(&source).into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::MetaKey,
            TokenKind::MetaValue,
            TokenKind::Title(HeadingLevel::H1),
            TokenKind::Overview,
            TokenKind::DataStructures,
            TokenKind::StructureName,
            TokenKind::PropertyName,
            TokenKind::PropertyType,
            TokenKind::PropertyName,
            TokenKind::PropertyType,
        ]
    );
}

#[test]
fn test_produce_document() {
    let source = load("valid", "produce.apib");
    let doc = parser::parse_str(&source).unwrap();

    assert_eq!(doc.metadata_value("FORMAT"), Some("1A"));
    assert_eq!(doc.metadata_value("HOST"), Some("https://produce.example.com"));
    assert_eq!(doc.name(), Some("Produce API"));

    let names: Vec<&str> = doc.structures.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Dimension", "Produce"]);

    let produce = doc.structure("Produce").unwrap();
    let sizes = produce.property("sizes").unwrap();
    assert!(sizes.is_array);
    assert_eq!(sizes.type_name, "Dimension");
    assert!(doc.structure(&sizes.type_name).is_some());
    assert_eq!(
        produce.property("fruit").unwrap().description.as_deref(),
        Some("- Is it fruit?")
    );
}

#[test]
fn test_property_examples_are_skipped() {
    let source = load("valid", "examples_in_properties.apib");
    let doc = parser::parse_str(&source).unwrap();
    let contact = doc.structure("Contact").unwrap();
    assert_eq!(contact.properties.len(), 2);
    assert_eq!(contact.properties[0].name, "id");
    assert_eq!(contact.properties[0].type_name, "number");
    assert_eq!(contact.properties[0].description.as_deref(), Some("- Identifier"));
    assert_eq!(contact.properties[1].type_name, "string");
}

#[test]
fn test_sections_only_document() {
    let source = load("valid", "sections_only.apib");
    let doc = parser::parse_str(&source).unwrap();
    assert!(doc.structures.is_empty());
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(
        doc.sections[0].overview.as_deref(),
        Some("Nothing but prose here.\nSecond line.\n\n")
    );
    assert_eq!(doc.sections[1].title, "Details");
}

#[test]
fn test_error_messages() {
    let cases = [
        ("meta_without_colon.apib", "not valid meta key at position 11"),
        ("bad_property_name.apib", "unexpected character '*' at position 36 for property name"),
        ("unclosed_array.apib", "missing closing brace in array type at position 49"),
        ("missing_paren.apib", "unexpected character 'n' at position 35 for property type"),
    ];
    for (name, expected) in cases {
        let err = parser::parse_str(&load("invalid", name)).unwrap_err();
        assert_eq!(err.to_string(), expected, "{name}");
    }
}

#[test]
fn test_threaded_pipeline_matches_pull() {
    for path in fixtures("valid").into_iter().chain(fixtures("invalid")) {
        let source = fs::read_to_string(&path).unwrap();
        for capacity in [1, 2, 64] {
            let config = LexerConfig::new().with_channel_capacity(capacity);
            let threaded: Vec<_> = lexer::spawn(source.clone(), &config).unwrap().collect();
            assert_eq!(threaded, lexer::lex(&source), "{} (capacity {capacity})", path.display());
        }
    }
}
