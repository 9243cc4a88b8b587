//! Syntax frontend for the nekonomicon language: tokenizer, parser, document model, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the `neko` CLI, editor integrations and any other
//! tooling that needs a stable view of nekonomicon source.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not define what any command does at runtime.
//! - Vocabulary identity (keywords/clauses) comes from `neko_core::lang` registries.
//! - Parsing is lenient: [`parser::parse`] always returns a document plus diagnostics.
//!
//! ## Examples
//! ```rust
//! use neko_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("if @x is 5 .\n").unwrap();
//! assert_eq!(tokens.len(), 5);
//!
//! let output = parser::parse("if @x is 5 .\n");
//! assert!(output.is_clean());
//! assert_eq!(output.document.command_lines().count(), 1);
//! ```
//!
//! ## See also
//! - `neko_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod highlight;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use ast::{CommandLine, Document, Span, Spanned, Statement};
pub use config::{ParseConfig, RecoveryPolicy, VariablePrecedence};
pub use diagnostics::{Diagnostic, LexError, LexErrorReason, LineIndex, SyntaxError, SyntaxErrorReason};
pub use parser::{ParseOutput, parse, parse_with_config};

/// Version of the serialized token/document/diagnostic shape. Bumped on any breaking change to it.
pub const SYNTAX_VERSION: u32 = 1;
