//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with ID-based
//! and variable tokens. The `Display` impl is a stable one-token dump (`control(if)`, `scalar(!@x)`, ...) used by
//! the CLI and by snapshot tests.

use std::fmt;

use crate::lexer::{Token, TokenKind};
use neko_core::lang::clauses::{self, ClauseId};
use neko_core::lang::keywords::{self, KeywordId};

impl TokenKind {
    /// Return the keyword id, if this is a control, clause or signature keyword.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::ControlKeyword(id) | TokenKind::ClauseKeyword(id) | TokenKind::SignatureKeyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return the clause id, if this is a clause token.
    pub fn clause_id(&self) -> Option<ClauseId> {
        match self {
            TokenKind::Clause(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_period(&self) -> bool {
        matches!(self, TokenKind::Period)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(
            self,
            TokenKind::VariableScalar(_) | TokenKind::VariableContainer(_) | TokenKind::VariableProjection(_)
        )
    }

    /// Return `true` if this token may appear in a command line body.
    pub fn is_body_token(&self) -> bool {
        !matches!(self, TokenKind::Comment(_) | TokenKind::Clause(_) | TokenKind::Period)
    }

    /// Negation flag of a variable token; `false` for everything else.
    pub fn is_negated(&self) -> bool {
        match self {
            TokenKind::VariableScalar(v) => v.negated,
            TokenKind::VariableContainer(v) => v.negated,
            _ => false,
        }
    }

    /// Primary name of a variable token.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            TokenKind::VariableScalar(v) => Some(&v.name),
            TokenKind::VariableContainer(v) => Some(&v.name),
            TokenKind::VariableProjection(v) => Some(&v.name),
            _ => None,
        }
    }

    /// Numeric value of a number literal.
    pub fn number_value(&self) -> Option<f64> {
        match self {
            TokenKind::Number(text) => text.parse().ok(),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.is_period()`.
    pub fn is_period(&self) -> bool {
        self.kind.is_period()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bang = |negated: bool| if negated { "!" } else { "" };
        match self {
            TokenKind::Comment(text) => write!(f, "comment(~{text})"),
            TokenKind::ControlKeyword(id) => write!(f, "control({})", keywords::as_str(*id)),
            TokenKind::ClauseKeyword(id) => write!(f, "clause-keyword({})", keywords::as_str(*id)),
            TokenKind::SignatureKeyword(id) => write!(f, "signature({})", keywords::as_str(*id)),
            TokenKind::VariableScalar(v) => write!(f, "scalar({}@{})", bang(v.negated), v.name),
            TokenKind::VariableContainer(v) => {
                write!(f, "container({}::{}", bang(v.negated), v.name)?;
                if let Some(sub) = &v.sub {
                    write!(f, ":{sub}")?;
                }
                f.write_str(")")
            }
            TokenKind::VariableProjection(v) => write!(f, "projection(::{}:{})", v.name, v.field),
            TokenKind::String(text) => write!(f, "string('{text}')"),
            TokenKind::Number(text) => write!(f, "number({text})"),
            TokenKind::Boolean(value) => write!(f, "boolean({value})"),
            TokenKind::Ident(name) => write!(f, "ident({name})"),
            TokenKind::Clause(id) => write!(f, "clause({})", clauses::as_str(*id)),
            TokenKind::Period => f.write_str("period"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.kind, self.span.start, self.span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn dump(source: &str) -> Vec<String> {
        lex(source).unwrap().iter().map(|t| t.kind.to_string()).collect()
    }

    #[test]
    fn display_is_stable() {
        assert_eq!(
            dump("(!)sensitive if !@x with ::a:b 'hi' 2.5 false go . ~ c"),
            vec![
                "clause((!)sensitive)",
                "control(if)",
                "scalar(!@x)",
                "clause-keyword(with)",
                "container(::a:b)",
                "string('hi')",
                "number(2.5)",
                "boolean(false)",
                "ident(go)",
                "period",
                "comment(~ c)",
            ]
        );
    }

    #[test]
    fn token_display_includes_span() {
        let tokens = lex("go .").unwrap();
        assert_eq!(tokens[0].to_string(), "ident(go)@0..2");
    }

    #[test]
    fn variable_accessors() {
        let tokens = lex("!::list:k @n timeout 12").unwrap();
        assert!(tokens[0].kind.is_negated());
        assert_eq!(tokens[0].kind.variable_name(), Some("list"));
        assert!(!tokens[1].kind.is_negated());
        assert!(tokens[1].kind.is_variable());
        assert!(tokens[2].kind.is_keyword(KeywordId::Timeout));
        assert_eq!(tokens[2].keyword_id(), Some(KeywordId::Timeout));
        assert_eq!(tokens[3].kind.number_value(), Some(12.0));
        assert!(tokens[3].kind.is_body_token());
    }

    #[test]
    fn structural_tokens_are_not_body_tokens() {
        let tokens = lex("(!)sensitive . ~x").unwrap();
        assert_eq!(tokens[0].kind.clause_id(), Some(ClauseId::SensitiveNegated));
        assert!(tokens.iter().all(|t| !t.kind.is_body_token()));
        assert!(tokens[1].is_period());
        assert!(tokens[2].kind.is_comment());
    }
}
