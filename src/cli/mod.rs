//! CLI module for nekonomicon
//!
//! This module provides the `neko` command-line interface, a thin wrapper over the syntax frontend.
//!
//! ## Commands
//!
//! - `check <file>` - Parse and report diagnostics (also the default when only a file is given)
//! - `tokens <file>` - Print the token stream
//! - `parse <file>` - Print the parsed document
//! - `highlight <file>` - Print highlight captures
//! - `story` - Print version information
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

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use neko_syntax::{ParseConfig, RecoveryPolicy, VariablePrecedence};

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
#[derive(Debug)]
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

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = crate::version::NEKO_VERSION;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer and parser for the nekonomicon command language
#[derive(Parser, Debug)]
#[command(name = "neko")]
#[command(version = VERSION)]
#[command(about = "Tokenizer and parser for the nekonomicon command language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub parse_flags: ParseFlags,
}

/// Flags mapped onto [`ParseConfig`]; accepted before or after the subcommand.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseFlags {
    /// Read `::name:field` (field of two or more characters) as a projection rather than a container
    #[arg(long, global = true)]
    pub prefer_projection: bool,

    /// Stop tokenizing at the first lexical error instead of skipping to the next line
    #[arg(long, global = true)]
    pub abort_on_lex_error: bool,
}

impl ParseFlags {
    pub fn config(self) -> ParseConfig {
        let mut config = ParseConfig::new();
        if self.prefer_projection {
            config = config.with_variable_precedence(VariablePrecedence::ProjectionFirst);
        }
        if self.abort_on_lex_error {
            config = config.with_recovery(RecoveryPolicy::Abort);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a file and report diagnostics
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the token stream of a file
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit JSON instead of one token per line
        #[arg(long)]
        json: bool,
    },

    /// Print the parsed document of a file
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit JSON instead of the text dump
        #[arg(long)]
        json: bool,
    },

    /// Print highlight captures (span and capture name) of a file
    Highlight {
        /// Source file to highlight
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Tell the story of this nekonomicon (version information)
    Story {
        /// How much of the story to tell
        #[arg(long, value_enum, default_value_t = StoryStyle::Normal)]
        style: StoryStyle,
    },
}

/// Verbosity of `neko story`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryStyle {
    Brief,
    #[default]
    Normal,
    Full,
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
    let config = cli.parse_flags.config();
    tracing::debug!(?config, "resolved parse config");

    match cli.command {
        Some(Command::Check { file }) => commands::check_file(&file.to_string_lossy(), &config),
        Some(Command::Tokens { file, json }) => commands::tokens_file(&file.to_string_lossy(), &config, json),
        Some(Command::Parse { file, json }) => commands::parse_file(&file.to_string_lossy(), &config, json),
        Some(Command::Highlight { file }) => commands::highlight_file(&file.to_string_lossy(), &config),
        Some(Command::Story { style }) => commands::story(style),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy(), &config)
            } else {
                Err(CliError::failure("No file given. Use 'neko --help' for usage information."))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
