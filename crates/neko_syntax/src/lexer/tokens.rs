//! Token types for the nekonomicon tokenizer.
//!
//! The tokenizer uses **registry-backed IDs** for language vocabulary:
//! - `ControlKeyword` / `ClauseKeyword` / `SignatureKeyword` carry a [`KeywordId`]
//! - `Clause` carries a [`ClauseId`] (only `(!)sensitive` lexes to it directly)
//!
//! ## Notes
//! - Variable tokens carry their parsed negation flag and name components, so consumers never re-split the text.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use neko_core::lang::clauses::ClauseId;
use neko_core::lang::keywords::{self, KeywordId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum TokenKind {
    /// `~ ...` up to the end of the line; holds the text after `~`.
    Comment(String),

    // ========== Keywords (ID-based) ==========
    ControlKeyword(KeywordId),
    ClauseKeyword(KeywordId),
    SignatureKeyword(KeywordId),

    // ========== Variables ==========
    /// `@name` / `!@name`
    VariableScalar(ScalarVar),
    /// `::name`, `::name:sub`, and their `!` forms
    VariableContainer(ContainerVar),
    /// `::name:field`
    VariableProjection(ProjectionVar),

    // ========== Literals ==========
    /// Single-quoted string; holds the text between the quotes.
    String(String),
    /// Digits with an optional fractional part, kept as spelled.
    Number(String),
    Boolean(bool),

    Ident(String),

    /// A line clause spelled with punctuation (`(!)sensitive`).
    Clause(ClauseId),

    /// `.` command-line terminator.
    Period,
}

/// `@name`, optionally negated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarVar {
    pub negated: bool,
    pub name: String,
}

/// `::name` or `::name:sub`, optionally negated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerVar {
    pub negated: bool,
    pub name: String,
    pub sub: Option<String>,
}

/// `::name:field`; never negated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionVar {
    pub name: String,
    pub field: String,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The source text this token was scanned from.
    ///
    /// Returns an empty string when `source` is not the text the token came from and the span is out of range.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }
}

/// Resolve an identifier-shaped word to a keyword id, if reserved.
pub fn keyword_id(word: &str) -> Option<KeywordId> {
    keywords::from_str(word)
}
