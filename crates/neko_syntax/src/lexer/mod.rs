//! Tokenizer for the nekonomicon language
//!
//! Handles tokenization including:
//! - Whole-line comments (`~ ...`)
//! - Keywords (control, clause, signature) and booleans via `neko_core::lang::keywords`
//! - Scalar (`@x`), container (`::x`, `::x:y`) and projection (`::x:yy`) variables, with `!` negation
//! - Single-quoted strings and decimal numbers
//! - The `(!)sensitive` clause and the `.` terminator
//!
//! ## Match order
//!
//! At each position every [`Matcher`] is tried. The longest match wins; on equal length the matcher that comes
//! first in [`match_order`] wins. This order is part of the public contract because it decides how
//! `::name:sub` is classified:
//!
//! 1. `Comment`
//! 2. `NegatedSensitive` (`(!)sensitive`)
//! 3. `VariableScalar`
//! 4. `VariableContainer`
//! 5. `VariableProjection` (swapped with 4 under [`VariablePrecedence::ProjectionFirst`])
//! 6. `String`
//! 7. `Number`
//! 8. `Word` (keyword when the whole word is reserved, identifier otherwise)
//! 9. `Period`
//!
//! Whitespace between tokens is skipped and never produces a token.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, variable payloads)
//! - `scanners` - Character-class scanners for each token shape

mod scanners;
pub mod tokens;

pub use tokens::{ContainerVar, ProjectionVar, ScalarVar, Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::config::{ParseConfig, RecoveryPolicy, VariablePrecedence};
use crate::diagnostics::{LexError, LexErrorReason};
use neko_core::lang::clauses::{self, ClauseId};
use neko_core::lang::keywords::{self, KeywordCategory};

// ============================================================================
// Matchers
// ============================================================================

/// One token shape the tokenizer can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    /// `~` to end of line
    Comment,
    /// The literal `(!)sensitive`
    NegatedSensitive,
    /// `@name` / `!@name`
    VariableScalar,
    /// `::name` / `::name:key` (and `!` forms)
    VariableContainer,
    /// `::name:name` with a second name of at least two characters
    VariableProjection,
    /// Single-quoted text
    String,
    /// Integer or decimal
    Number,
    /// Keyword or identifier; keywords are resolved after matching
    Word,
    /// `.`
    Period,
}

/// Grammar declaration order; container before projection.
pub const DECLARATION_ORDER: [Matcher; 9] = [
    Matcher::Comment,
    Matcher::NegatedSensitive,
    Matcher::VariableScalar,
    Matcher::VariableContainer,
    Matcher::VariableProjection,
    Matcher::String,
    Matcher::Number,
    Matcher::Word,
    Matcher::Period,
];

/// The tie-break order used for a given variable precedence.
pub fn match_order(precedence: VariablePrecedence) -> [Matcher; 9] {
    let mut order = DECLARATION_ORDER;
    if precedence == VariablePrecedence::ProjectionFirst {
        order.swap(3, 4);
    }
    order
}

impl Matcher {
    /// Exclusive end of this shape's longest match at `pos`, if it matches.
    fn try_match(self, bytes: &[u8], pos: usize) -> Option<usize> {
        match self {
            Matcher::Comment => scanners::scan_comment(bytes, pos),
            Matcher::NegatedSensitive => scanners::scan_literal(bytes, pos, clauses::NEGATED_SENSITIVE),
            Matcher::VariableScalar => {
                let at = skip_negation(bytes, pos);
                if bytes.get(at) != Some(&b'@') {
                    return None;
                }
                scanners::scan_name(bytes, at + 1)
            }
            Matcher::VariableContainer => {
                let at = skip_negation(bytes, pos);
                let name_end = scanners::scan_name(bytes, scanners::scan_literal(bytes, at, "::")?)?;
                if bytes.get(name_end) == Some(&b':') {
                    if let Some(sub_end) = scanners::scan_name(bytes, name_end + 1) {
                        return Some(sub_end);
                    }
                }
                Some(name_end)
            }
            Matcher::VariableProjection => {
                let name_end = scanners::scan_name(bytes, scanners::scan_literal(bytes, pos, "::")?)?;
                if bytes.get(name_end) != Some(&b':') {
                    return None;
                }
                let field_end = scanners::scan_name(bytes, name_end + 1)?;
                (field_end - (name_end + 1) >= 2).then_some(field_end)
            }
            Matcher::String => scanners::scan_string(bytes, pos),
            Matcher::Number => scanners::scan_number(bytes, pos),
            Matcher::Word => scanners::scan_word(bytes, pos),
            Matcher::Period => (bytes.get(pos) == Some(&b'.')).then_some(pos + 1),
        }
    }

    /// Build the token kind for a match of this shape spanning `text`.
    fn build(self, text: &str) -> TokenKind {
        match self {
            Matcher::Comment => TokenKind::Comment(text[1..].to_string()),
            Matcher::NegatedSensitive => TokenKind::Clause(ClauseId::SensitiveNegated),
            Matcher::VariableScalar => {
                let (negated, rest) = strip_negation(text);
                TokenKind::VariableScalar(ScalarVar {
                    negated,
                    name: rest[1..].to_string(),
                })
            }
            Matcher::VariableContainer => {
                let (negated, rest) = strip_negation(text);
                let rest = &rest[2..];
                let (name, sub) = match rest.split_once(':') {
                    Some((name, sub)) => (name, Some(sub.to_string())),
                    None => (rest, None),
                };
                TokenKind::VariableContainer(ContainerVar {
                    negated,
                    name: name.to_string(),
                    sub,
                })
            }
            Matcher::VariableProjection => {
                let (name, field) = text[2..].split_once(':').unwrap_or((&text[2..], ""));
                TokenKind::VariableProjection(ProjectionVar {
                    name: name.to_string(),
                    field: field.to_string(),
                })
            }
            Matcher::String => TokenKind::String(text[1..text.len() - 1].to_string()),
            Matcher::Number => TokenKind::Number(text.to_string()),
            Matcher::Word => word_kind(text),
            Matcher::Period => TokenKind::Period,
        }
    }
}

fn skip_negation(bytes: &[u8], pos: usize) -> usize {
    if bytes.get(pos) == Some(&b'!') { pos + 1 } else { pos }
}

fn strip_negation(text: &str) -> (bool, &str) {
    match text.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, text),
    }
}

/// Keyword lookup on the whole word, identifier otherwise.
fn word_kind(word: &str) -> TokenKind {
    match keyword_id(word) {
        Some(id) => match keywords::category(id) {
            KeywordCategory::Control => TokenKind::ControlKeyword(id),
            KeywordCategory::Clause => TokenKind::ClauseKeyword(id),
            KeywordCategory::Signature => TokenKind::SignatureKeyword(id),
            KeywordCategory::Literal => TokenKind::Boolean(id == keywords::KeywordId::True),
        },
        None => TokenKind::Ident(word.to_string()),
    }
}

// ============================================================================
// Single-step API
// ============================================================================

/// Result of one tokenizer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStep {
    /// A token; scanning resumes at `token.span.end`.
    Token(Token),
    /// Only whitespace (or nothing) remains.
    EndOfInput,
}

/// Scan the next token at or after `offset` using the default config.
///
/// Leading whitespace is skipped. The function holds no state: calling it again with the returned token's
/// `span.end` continues the scan.
///
/// ## Errors
/// Returns a [`LexError`] when no token shape matches at the first non-whitespace byte, or when `offset` is not
/// on a character boundary.
pub fn next_token(source: &str, offset: usize) -> Result<LexStep, LexError> {
    next_token_with_config(source, offset, &ParseConfig::default())
}

/// Like [`next_token`], with an explicit config.
pub fn next_token_with_config(source: &str, offset: usize, config: &ParseConfig) -> Result<LexStep, LexError> {
    if offset >= source.len() {
        return Ok(LexStep::EndOfInput);
    }
    if !source.is_char_boundary(offset) {
        return Err(LexError::new(
            offset,
            LexErrorReason::InvalidOffset(offset),
            Span::new(offset, offset),
        ));
    }

    let bytes = source.as_bytes();
    let start = scanners::skip_whitespace(bytes, offset);
    if start >= bytes.len() {
        return Ok(LexStep::EndOfInput);
    }

    let mut best: Option<(Matcher, usize)> = None;
    for matcher in match_order(config.variable_precedence) {
        if let Some(end) = matcher.try_match(bytes, start) {
            if best.is_none_or(|(_, best_end)| end > best_end) {
                best = Some((matcher, end));
            }
        }
    }

    match best {
        Some((matcher, end)) => {
            let kind = matcher.build(&source[start..end]);
            Ok(LexStep::Token(Token::new(kind, Span::new(start, end))))
        }
        None => Err(no_match_error(source, start)),
    }
}

/// Classify why nothing matched at `pos`.
fn no_match_error(source: &str, pos: usize) -> LexError {
    let bytes = source.as_bytes();
    let char_span = || {
        let len = source[pos..].chars().next().map_or(1, char::len_utf8);
        Span::new(pos, pos + len)
    };
    let reason = match bytes[pos] {
        b'\'' => {
            return LexError::new(
                pos,
                LexErrorReason::UnterminatedString,
                Span::new(pos, scanners::line_end(bytes, pos)),
            );
        }
        b'!' => match bytes.get(pos + 1) {
            Some(b'@') => LexErrorReason::MissingVariableName("!@".to_string()),
            Some(b':') if bytes.get(pos + 2) == Some(&b':') => LexErrorReason::MissingVariableName("!::".to_string()),
            _ => LexErrorReason::BareNegation,
        },
        b'@' => LexErrorReason::MissingVariableName("@".to_string()),
        b':' if bytes.get(pos + 1) == Some(&b':') => LexErrorReason::MissingVariableName("::".to_string()),
        _ => LexErrorReason::UnexpectedCharacter(source[pos..].chars().next().unwrap_or('\u{FFFD}')),
    };
    LexError::new(pos, reason, char_span())
}

// ============================================================================
// Streaming lexer
// ============================================================================

/// Tokens and lexical errors from a full scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lazy, restartable tokenizer over one source text.
///
/// Iterating yields `Ok(token)` in document order and `Err(error)` where nothing matched; after an error the
/// configured [`RecoveryPolicy`] decides whether scanning continues on the next line or stops.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    config: ParseConfig,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with the default config.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ParseConfig::default())
    }

    pub fn with_config(source: &'a str, config: ParseConfig) -> Self {
        Self {
            source,
            pos: 0,
            config,
            finished: false,
        }
    }

    /// Restart scanning at `offset`.
    pub fn reset_to(&mut self, offset: usize) {
        self.pos = offset.min(self.source.len());
        self.finished = false;
    }

    /// Byte offset the next scan starts from.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Tokenize the rest of the source.
    pub fn tokenize(self) -> LexOutput {
        let mut out = LexOutput::default();
        for item in self {
            match item {
                Ok(token) => out.tokens.push(token),
                Err(error) => out.errors.push(error),
            }
        }
        out
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match next_token_with_config(self.source, self.pos, &self.config) {
            Ok(LexStep::Token(token)) => {
                self.pos = token.span.end;
                Some(Ok(token))
            }
            Ok(LexStep::EndOfInput) => {
                self.pos = self.source.len();
                self.finished = true;
                None
            }
            Err(error) => {
                match self.config.recovery {
                    RecoveryPolicy::SkipLine => {
                        let resume = scanners::line_end(self.source.as_bytes(), error.offset);
                        tracing::debug!(offset = error.offset, resume, reason = %error.reason, "skipping rest of line");
                        // Guarantees progress even for an error reported at a newline.
                        self.pos = resume.max(error.offset + 1).min(self.source.len());
                        while !self.source.is_char_boundary(self.pos) {
                            self.pos += 1;
                        }
                    }
                    RecoveryPolicy::Abort => {
                        tracing::debug!(offset = error.offset, reason = %error.reason, "aborting tokenization");
                        self.finished = true;
                    }
                }
                Some(Err(error))
            }
        }
    }
}

/// Convenience function to lex a source string strictly.
///
/// ## Errors
/// Returns every lexical error (with the default skip-line recovery) if any occurred.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexError>> {
    let out = Lexer::new(source).tokenize();
    if out.errors.is_empty() { Ok(out.tokens) } else { Err(out.errors) }
}

// ============================================================================
// TESTS
// ============================================================================
