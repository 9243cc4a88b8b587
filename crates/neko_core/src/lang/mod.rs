//! nekonomicon language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords and line clauses.
//!
//! The design goal is to avoid stringly-typed checks scattered across the tokenizer, parser and tooling.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `ClauseId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The tokenizer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   docs, highlighting).
//!
//! ## Examples
//! ```rust
//! use neko_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```
//!
//! ## See also
//! - `cargo run -p neko_core --bin generate_lang_reference` to generate a Markdown reference.

pub mod clauses;
pub mod keywords;
pub mod registry;
