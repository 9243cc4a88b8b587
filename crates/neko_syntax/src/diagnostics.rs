//! Diagnostics produced while tokenizing and parsing.
//!
//! There are two kinds, reported uniformly (no severities):
//! - [`LexError`]: no token pattern matched at a byte offset.
//! - [`SyntaxError`]: tokens matched but a command line is malformed.
//!
//! Both implement [`miette::Diagnostic`] with a stable code and a labelled span, so callers can render them with
//! any miette report handler. [`LineIndex`] converts byte offsets to 1-based line/column pairs for other consumers
//! (editors, JSON output).

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};
use thiserror::Error;

use crate::ast::Span;
use neko_core::lang::clauses::{self, ClauseId};

// ============================================================================
// Lexical errors
// ============================================================================

/// Why no token matched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "reason", content = "detail", rename_all = "snake_case")
)]
pub enum LexErrorReason {
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("'!' must be followed by '@' or '::'")]
    BareNegation,
    #[error("expected a variable name after '{0}'")]
    MissingVariableName(String),
    #[error("offset {0} is not on a character boundary")]
    InvalidOffset(usize),
}

impl LexErrorReason {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            LexErrorReason::UnexpectedCharacter(_) => "neko::lex::unexpected_character",
            LexErrorReason::UnterminatedString => "neko::lex::unterminated_string",
            LexErrorReason::BareNegation => "neko::lex::bare_negation",
            LexErrorReason::MissingVariableName(_) => "neko::lex::missing_variable_name",
            LexErrorReason::InvalidOffset(_) => "neko::lex::invalid_offset",
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            LexErrorReason::UnterminatedString => Some("string literals have no escapes and cannot contain '"),
            LexErrorReason::BareNegation => Some("negate a variable with `!@name` or `!::name`"),
            LexErrorReason::MissingVariableName(_) => {
                Some("variable names start with a letter or '_' and continue with letters, digits or '_'")
            }
            LexErrorReason::UnexpectedCharacter(_) | LexErrorReason::InvalidOffset(_) => None,
        }
    }
}

/// No token pattern matched at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{reason}")]
pub struct LexError {
    /// Byte offset where matching failed.
    pub offset: usize,
    pub reason: LexErrorReason,
    /// The offending character (or the unterminated literal) for presentation.
    pub span: Span,
}

impl LexError {
    pub fn new(offset: usize, reason: LexErrorReason, span: Span) -> Self {
        Self { offset, reason, span }
    }
}

impl MietteDiagnostic for LexError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.reason.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.reason.help().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("no token starts here".to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

/// Why a command line is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "reason", content = "detail", rename_all = "snake_case")
)]
pub enum SyntaxErrorReason {
    #[error("empty command line")]
    EmptyCommandLine,
    #[error("unterminated command line")]
    UnterminatedCommandLine,
    #[error("misplaced clause")]
    MisplacedClause(ClauseId),
}

impl SyntaxErrorReason {
    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            SyntaxErrorReason::EmptyCommandLine => "neko::syntax::empty_command_line",
            SyntaxErrorReason::UnterminatedCommandLine => "neko::syntax::unterminated_command_line",
            SyntaxErrorReason::MisplacedClause(_) => "neko::syntax::misplaced_clause",
        }
    }

    fn help(&self) -> String {
        match self {
            SyntaxErrorReason::EmptyCommandLine => "a command line needs at least one token before '.'".to_string(),
            SyntaxErrorReason::UnterminatedCommandLine => "end the command line with '.'".to_string(),
            SyntaxErrorReason::MisplacedClause(id) => {
                format!("`{}` may only open a command line", clauses::as_str(*id))
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SyntaxErrorReason::EmptyCommandLine => "nothing before this '.'",
            SyntaxErrorReason::UnterminatedCommandLine => "this command line never ends",
            SyntaxErrorReason::MisplacedClause(_) => "clause after the start of the line",
        }
    }
}

/// A command line violates the line structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{reason}")]
pub struct SyntaxError {
    /// 1-based line of the offending statement.
    pub line: usize,
    pub reason: SyntaxErrorReason,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(line: usize, reason: SyntaxErrorReason, span: Span) -> Self {
        Self { line, reason, span }
    }
}

impl MietteDiagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.reason.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.reason.help()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.reason.label().to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Either kind
// ============================================================================

/// Any diagnostic, in the order it was encountered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Diagnostic {
    #[error(transparent)]
    Lex(LexError),
    #[error(transparent)]
    Syntax(SyntaxError),
}

impl Diagnostic {
    pub fn span(&self) -> Span {
        match self {
            Diagnostic::Lex(e) => e.span,
            Diagnostic::Syntax(e) => e.span,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::Lex(e) => e.reason.code(),
            Diagnostic::Syntax(e) => e.reason.code(),
        }
    }

    /// Human-readable message, without code or location.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// 1-based (line, column) of the diagnostic's start in `source`.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        LineIndex::new(source).line_col(self.span().start)
    }

    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Diagnostic::Syntax(e) => Some(e),
            Diagnostic::Lex(_) => None,
        }
    }

    pub fn as_lex(&self) -> Option<&LexError> {
        match self {
            Diagnostic::Lex(e) => Some(e),
            Diagnostic::Syntax(_) => None,
        }
    }

    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Diagnostic::Lex(e) => e,
            Diagnostic::Syntax(e) => e,
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(e: LexError) -> Self {
        Diagnostic::Lex(e)
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(e: SyntaxError) -> Self {
        Diagnostic::Syntax(e)
    }
}

impl MietteDiagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

// ============================================================================
// Line/column lookup
// ============================================================================

/// Byte offset → 1-based (line, column) lookup for one source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { source, line_starts }
    }

    /// 1-based line containing `offset` (clamped to the source length).
    pub fn line(&self, offset: usize) -> usize {
        let offset = offset.min(self.source.len());
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// 1-based (line, column) of `offset`.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = self.line(offset);
        let line_start = self.line_starts[line - 1];
        let column = self
            .source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        (line, column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_index_handles_first_and_later_lines() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(1), (1, 2));
        assert_eq!(index.line_col(2), (1, 3));
        assert_eq!(index.line_col(3), (2, 1));
        assert_eq!(index.line_col(6), (3, 1));
        assert_eq!(index.line_col(7), (4, 1));
        assert_eq!(index.line_col(100), (4, 3));
    }

    #[test]
    fn columns_count_characters() {
        let index = LineIndex::new("é~x");
        assert_eq!(index.line_col(2), (1, 2));
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let lex = Diagnostic::from(LexError::new(0, LexErrorReason::BareNegation, Span::new(0, 1)));
        let syn = Diagnostic::from(SyntaxError::new(1, SyntaxErrorReason::EmptyCommandLine, Span::new(0, 1)));
        assert_eq!(lex.code(), "neko::lex::bare_negation");
        assert_eq!(syn.code(), "neko::syntax::empty_command_line");
        assert_eq!(syn.message(), "empty command line");
        assert_eq!(lex.line_col("!x"), (1, 1));
    }

    #[test]
    fn miette_labels_point_at_span() {
        let err = SyntaxError::new(
            2,
            SyntaxErrorReason::MisplacedClause(ClauseId::SensitiveNegated),
            Span::new(4, 16),
        );
        let labels: Vec<_> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[0].len(), 12);
        let help = err.help().map(|h| h.to_string());
        assert_eq!(help.as_deref(), Some("`(!)sensitive` may only open a command line"));
    }
}
