//! Highlight captures for editor tooling.
//!
//! Built purely from a [`Document`]: every comment, clause, body token and terminator becomes one [`Highlight`]
//! with a stable capture name. Captures come out in source order and never overlap; everything between them is
//! whitespace.

use crate::ast::{Document, Span, Statement};
use crate::lexer::TokenKind;

/// Stable highlight class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightClass {
    Comment,
    ControlKeyword,
    ClauseKeyword,
    SignatureKeyword,
    ScalarVariable,
    ContainerVariable,
    ProjectionVariable,
    String,
    Number,
    Boolean,
    /// The command word opening a command line.
    Command,
    Identifier,
    Terminator,
    Clause,
}

impl HighlightClass {
    /// Capture name in the usual editor highlight-query vocabulary.
    pub fn capture_name(self) -> &'static str {
        match self {
            HighlightClass::Comment => "comment",
            HighlightClass::ControlKeyword => "keyword.control",
            HighlightClass::ClauseKeyword => "keyword.operator",
            HighlightClass::SignatureKeyword => "keyword.modifier",
            HighlightClass::ScalarVariable => "variable",
            HighlightClass::ContainerVariable => "variable.builtin",
            HighlightClass::ProjectionVariable => "property",
            HighlightClass::String => "string",
            HighlightClass::Number => "number",
            HighlightClass::Boolean => "boolean",
            HighlightClass::Command => "function",
            HighlightClass::Identifier => "variable.parameter",
            HighlightClass::Terminator => "punctuation.delimiter",
            HighlightClass::Clause => "attribute",
        }
    }
}

/// Context-free class of a token kind. Identifiers map to [`HighlightClass::Identifier`]; only
/// [`highlights`] knows which one is the command word.
pub fn classify(kind: &TokenKind) -> HighlightClass {
    match kind {
        TokenKind::Comment(_) => HighlightClass::Comment,
        TokenKind::ControlKeyword(_) => HighlightClass::ControlKeyword,
        TokenKind::ClauseKeyword(_) => HighlightClass::ClauseKeyword,
        TokenKind::SignatureKeyword(_) => HighlightClass::SignatureKeyword,
        TokenKind::VariableScalar(_) => HighlightClass::ScalarVariable,
        TokenKind::VariableContainer(_) => HighlightClass::ContainerVariable,
        TokenKind::VariableProjection(_) => HighlightClass::ProjectionVariable,
        TokenKind::String(_) => HighlightClass::String,
        TokenKind::Number(_) => HighlightClass::Number,
        TokenKind::Boolean(_) => HighlightClass::Boolean,
        TokenKind::Ident(_) => HighlightClass::Identifier,
        TokenKind::Clause(_) => HighlightClass::Clause,
        TokenKind::Period => HighlightClass::Terminator,
    }
}

/// One highlighted source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub span: Span,
    pub class: HighlightClass,
}

/// All captures of `document`, in source order.
pub fn highlights(document: &Document) -> Vec<Highlight> {
    let mut out = Vec::new();
    for statement in &document.statements {
        match &statement.node {
            Statement::Comment { .. } => out.push(Highlight {
                span: statement.span,
                class: HighlightClass::Comment,
            }),
            Statement::CommandLine(line) => {
                if let Some(clause) = &line.clause {
                    out.push(Highlight {
                        span: clause.span,
                        class: HighlightClass::Clause,
                    });
                }
                for (i, token) in line.tokens.iter().enumerate() {
                    let class = match classify(&token.kind) {
                        HighlightClass::Identifier if i == 0 => HighlightClass::Command,
                        class => class,
                    };
                    out.push(Highlight { span: token.span, class });
                }
                if let Some(period) = line.terminator {
                    out.push(Highlight {
                        span: period,
                        class: HighlightClass::Terminator,
                    });
                }
            }
        }
    }
    out
}
