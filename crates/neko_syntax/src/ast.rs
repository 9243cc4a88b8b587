//! Syntax tree for nekonomicon documents.
//!
//! A [`Document`] is a flat list of statements: whole-line comments and command lines. There is no nesting at
//! this layer; block structure (`if` ... `end`) is an interpretation concern.

use std::fmt;

use crate::lexer::Token;
use neko_core::lang::clauses::{self, ClauseId};

/// Source location as byte offsets (`start` inclusive, `end` exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Slice `source` by this span, or `""` if the span does not fit.
    pub fn text(self, source: &str) -> &str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.start.into(), span.len())
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// The parse result: statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub statements: Vec<Spanned<Statement>>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Command lines in source order.
    pub fn command_lines(&self) -> impl Iterator<Item = &CommandLine> {
        self.statements.iter().filter_map(|s| match &s.node {
            Statement::CommandLine(line) => Some(line),
            Statement::Comment { .. } => None,
        })
    }

    /// Comment bodies (text after `~`) in source order.
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().filter_map(|s| match &s.node {
            Statement::Comment { text } => Some(text.as_str()),
            Statement::CommandLine(_) => None,
        })
    }

    /// Every body token of every command line, in source order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.command_lines().flat_map(|line| line.tokens.iter())
    }
}

/// One top-level item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Statement {
    /// Whole-line comment; holds the text after `~`.
    Comment { text: String },
    CommandLine(CommandLine),
}

/// Optional clause, one or more body tokens, and the terminating `.`.
///
/// ## Notes
/// - `terminator` is `None` only for best-effort lines recovered from malformed input (missing `.` before end of
///   input, a comment, or a lexical error). Such lines are always accompanied by a diagnostic.
/// - `tokens` never contains comments, periods or clause tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandLine {
    pub clause: Option<Spanned<ClauseId>>,
    pub tokens: Vec<Token>,
    pub terminator: Option<Span>,
}

impl CommandLine {
    pub fn is_terminated(&self) -> bool {
        self.terminator.is_some()
    }

    /// Span from the clause (or first token) to the terminator (or last token).
    pub fn span(&self) -> Span {
        let start = self
            .clause
            .as_ref()
            .map(|c| c.span)
            .or_else(|| self.tokens.first().map(|t| t.span))
            .unwrap_or_default();
        let end = self
            .terminator
            .or_else(|| self.tokens.last().map(|t| t.span))
            .unwrap_or(start);
        start.merge(end)
    }
}

// ============================================================================
// Text dump
// ============================================================================

/// One statement per line: `comment(~...)` or `line [clause(..)] tokens... (.|<unterminated>)`.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement.node)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Comment { text } => write!(f, "comment(~{text})"),
            Statement::CommandLine(line) => fmt::Display::fmt(line, f),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("line")?;
        if let Some(clause) = &self.clause {
            write!(f, " clause({})", clauses::as_str(clause.node))?;
        }
        for token in &self.tokens {
            write!(f, " {}", token.kind)?;
        }
        f.write_str(if self.is_terminated() { " ." } else { " <unterminated>" })
    }
}
