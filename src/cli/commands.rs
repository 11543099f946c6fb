//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use miette::{NamedSource, Report};

use apib_syntax::ast::Document;
use apib_syntax::diagnostics::{SyntaxError, line_info};
use apib_syntax::lexer::{self, Lexer, Token};
use apib_syntax::parser;

use super::config::{OutputFormat, SessionOptions};
use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

// ============================================================================
// Source loading and token delivery
// ============================================================================

/// Read a source file into memory.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))
}

/// Token source for one session: pulled inline, or received from a producer thread.
pub fn token_source<'a>(source: &'a str, session: &SessionOptions) -> CliResult<Box<dyn Iterator<Item = Token> + 'a>> {
    if session.threaded {
        tracing::debug!(capacity = session.lexer.channel_capacity(), "spawning lexer thread");
        let stream = lexer::spawn(source.to_string(), &session.lexer)
            .map_err(|e| CliError::failure(format!("Error starting lexer thread: {}", e)))?;
        Ok(Box::new(stream))
    } else {
        Ok(Box::new(Lexer::new(source)))
    }
}

/// Render a syntax error as a miette diagnostic pointing into the source file.
pub fn render_error(file_path: &Path, source: &str, err: SyntaxError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(file_path.display().to_string(), source.to_string()));
    format!("{:?}", report)
}

// ============================================================================
// Rendering
// ============================================================================

/// One line per token: `line:col kind "text"`.
///
/// Stops at the error token and returns it as a [`SyntaxError`] after the tokens before it.
pub fn render_tokens(source: &str, tokens: impl IntoIterator<Item = Token>) -> (String, Option<SyntaxError>) {
    let mut out = String::new();
    for token in tokens {
        if token.is_error() {
            return (out, Some(SyntaxError::lex(token.text, token.span)));
        }
        let (line, col, _) = line_info(source, token.span.start);
        let _ = writeln!(out, "{}:{} {} {:?}", line, col, token.kind, token.text);
    }
    (out, None)
}

/// Render an assembled document in the requested format.
pub fn render_document(document: &Document, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Debug => Ok(format!("{:#?}", document)),
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| CliError::failure(format!("Error serializing document: {}", e))),
    }
}

/// One-line summary used by `check`.
pub fn summary(document: &Document) -> String {
    let name = document.name().unwrap_or("(unnamed)");
    format!(
        "{}: {} metadata, {} sections, {} structures, {} properties",
        name,
        document.metadata.len(),
        document.sections.len(),
        document.structures.len(),
        document.property_count()
    )
}

// ============================================================================
// Commands
// ============================================================================

fn assemble(file_path: &Path, source: &str, session: &SessionOptions) -> CliResult<Document> {
    let tokens = token_source(source, session)?;
    parser::parse(tokens).map_err(|err| CliError::failure(render_error(file_path, source, err)))
}

/// Tokenize and print the token stream.
pub fn lex_file(file_path: &Path, session: &SessionOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = token_source(&source, session)?;
    let (listing, error) = render_tokens(&source, tokens);
    print!("{}", listing);

    match error {
        Some(err) => Err(CliError::failure(render_error(file_path, &source, err))),
        None => Ok(ExitCode::SUCCESS),
    }
}

/// Assemble and print the document.
pub fn parse_file(file_path: &Path, format: OutputFormat, session: &SessionOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let document = assemble(file_path, &source, session)?;
    println!("{}", render_document(&document, format)?);
    Ok(ExitCode::SUCCESS)
}

/// Assemble and print a one-line summary.
pub fn check_file(file_path: &Path, session: &SessionOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let document = assemble(file_path, &source, session)?;
    println!("✓ {}", summary(&document));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SOURCE: &str = "FORMAT: 1A\n\n# Shop\n\n## Data Structures\n### Item\n+ tags (array[string]) - Labels\n";

    #[test]
    fn test_render_tokens_listing() {
        let (listing, error) = render_tokens(SOURCE, Lexer::new(SOURCE));
        assert!(error.is_none());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "1:1 metadata-key \"FORMAT\"");
        assert_eq!(lines[1], "1:9 metadata-value \"1A\"");
        assert_eq!(lines[2], "3:3 title-1 \"Shop\"");
        assert_eq!(lines[3], "5:4 data-structures-marker \"Data Structures\"");
        assert_eq!(lines[6], "7:15 property-array-type \"string\"");
        assert_eq!(lines[7], "7:24 property-description \"- Labels\"");
    }

    #[test]
    fn test_render_tokens_stops_at_error() {
        let source = "## Data Structures\n### A\n+ x (number\n";
        let (listing, error) = render_tokens(source, Lexer::new(source));
        assert_eq!(listing.lines().count(), 3);
        assert!(matches!(error, Some(SyntaxError::Lex { .. })));
    }

    #[test]
    fn test_render_document_json() {
        let document = parser::parse_str(SOURCE).unwrap();
        let json = render_document(&document, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"][0]["key"], "FORMAT");
        assert_eq!(value["structures"][0]["properties"][0]["is_array"], true);
    }

    #[test]
    fn test_summary() {
        let document = parser::parse_str(SOURCE).unwrap();
        assert_eq!(
            summary(&document),
            "Shop: 1 metadata, 1 sections, 1 structures, 1 properties"
        );
        assert!(summary(&Document::default()).starts_with("(unnamed):"));
    }

    #[test]
    fn test_render_error_mentions_message() {
        let source = "Version 1A9";
        let err = parser::parse_str(source).unwrap_err();
        let rendered = render_error(Path::new("bad.apib"), source, err);
        assert!(rendered.contains("not valid meta key at position 11"));
    }

    #[test]
    fn test_threaded_source_matches_inline() {
        let threaded = SessionOptions::from_flags(true, Some(1));
        let inline = SessionOptions::default();
        let a: Vec<Token> = token_source(SOURCE, &threaded).unwrap().collect();
        let b: Vec<Token> = token_source(SOURCE, &inline).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("does/not/exist.apib")).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }
}
