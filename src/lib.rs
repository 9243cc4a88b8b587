#![forbid(unsafe_code)]
//! nekonomicon: tokenizer, parser and command-line tooling for the nekonomicon command language.
//!
//! The syntax frontend lives in `neko_syntax` and the vocabulary registries in `neko_core`; this crate re-exports
//! both and adds the `neko` CLI on top.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a logic error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod version;

pub use neko_core::lang;
pub use neko_syntax::{ast, config, diagnostics, highlight, lexer, parser};

pub use neko_syntax::{
    Diagnostic, Document, ParseConfig, ParseOutput, RecoveryPolicy, SYNTAX_VERSION, VariablePrecedence, parse,
    parse_with_config,
};
