//! CLI module for the apib inspector
//!
//! This module provides the command-line interface over the lexer and document assembler.
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the assembled document (debug or JSON)
//! - `check <file>` - Assemble and print a one-line summary (also the default action)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `config` - Output and session options shared by the commands
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::version::APIB_VERSION;
use config::{OutputFormat, SessionOptions};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect API Blueprint data structures
#[derive(Parser, Debug)]
#[command(name = "apib")]
#[command(version = APIB_VERSION)]
#[command(about = "Lex and assemble API Blueprint data structures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Run the lexer on a producer thread feeding a bounded channel
    #[arg(long, global = true)]
    pub threaded: bool,

    /// Channel capacity for --threaded (minimum 1)
    #[arg(long, value_name = "N", global = true, requires = "threaded")]
    pub capacity: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one token per line
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the assembled document
    Parse {
        /// Source file to assemble
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Debug)]
        format: OutputFormat,
    },

    /// Assemble the document and print a summary
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    /// Session options selected by the global flags.
    pub fn session(&self) -> SessionOptions {
        SessionOptions::from_flags(self.threaded, self.capacity)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let session = cli.session();

    match cli.command {
        Some(Command::Lex { file }) => commands::lex_file(&file, &session),
        Some(Command::Parse { file, format }) => commands::parse_file(&file, format, &session),
        Some(Command::Check { file }) => commands::check_file(&file, &session),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file, &session)
            } else {
                Err(CliError::failure("Error: no input file (try `apib --help`)"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
