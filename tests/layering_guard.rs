//! Layering guardrails to keep the library crates free of front-end dependencies.
//!
//! `apib_syntax` is reused by renderers that never want a CLI stack, and `apib_core` is a pure vocabulary crate.
//! These tests scan the crates' `Cargo.toml` files and fail if a forbidden crate appears in `[dependencies]`.

/// Crate names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn syntax_crate_has_no_cli_dependencies() {
    let deps = dependencies(include_str!("../crates/apib_syntax/Cargo.toml"));
    for forbidden in ["clap", "tracing-subscriber", "serde_json"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in apib_syntax [dependencies]; keep it in the apib binary crate"
        );
    }
}

#[test]
fn core_crate_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/apib_core/Cargo.toml"));
    assert!(deps.is_empty(), "apib_core must stay dependency-free, found {deps:?}");
}

#[test]
fn manifest_scanner_reads_only_dependencies_table() {
    let manifest = "[package]\nname = \"x\"\n\n[dependencies]\nfoo = \"1\" # note\n\n[dev-dependencies]\nbar = \"2\"\n";
    assert_eq!(dependencies(manifest), vec!["foo".to_string()]);
}
