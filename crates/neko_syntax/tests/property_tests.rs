//! Property-based tests for the tokenizer and parser
//!
//! These tests use proptest to verify invariants across many randomly generated inputs, catching edge cases that
//! hand-written tests might miss.

use neko_syntax::highlight::highlights;
use neko_syntax::lexer::{self, LexStep, Lexer};
use neko_syntax::{ParseConfig, RecoveryPolicy, Statement, VariablePrecedence, parse, parse_with_config};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

const BODY_TOKENS: &[&str] = &[
    "if", "end", "while", "is", "into", "without", "trace", "on", "true", "false", "@x", "!@flag", "::list",
    "!::map:k", "::a:bb", "'hello world'", "''", "42", "3.14", "say", "wait-for", "do_it",
];

const CLAUSES: &[&str] = &["safe", "async", "sensitive", "(!)sensitive", "elevated"];

const NEWLINES: &[&str] = &["\n", "\r\n", " \n\t"];

/// A well-formed command line: optional clause, body tokens, period.
fn command_line() -> impl Strategy<Value = (Option<&'static str>, Vec<&'static str>)> {
    (
        proptest::option::of(proptest::sample::select(CLAUSES)),
        proptest::collection::vec(proptest::sample::select(BODY_TOKENS), 1..6),
    )
}

/// One generated source line and the body token count it should parse to (`None` for comments).
fn line() -> impl Strategy<Value = (String, Option<usize>)> {
    prop_oneof![
        3 => command_line().prop_map(|(clause, body)| {
            let mut text = String::new();
            if let Some(clause) = clause {
                text.push_str(clause);
                text.push(' ');
            }
            text.push_str(&body.join(" "));
            text.push_str(" .");
            (text, Some(body.len()))
        }),
        1 => "[ a-z0-9.@:!']{0,20}".prop_map(|body| (format!("~{body}"), None)),
    ]
}

fn document() -> impl Strategy<Value = (String, Vec<Option<usize>>)> {
    (
        proptest::collection::vec(line(), 0..8),
        proptest::sample::select(NEWLINES),
    )
        .prop_map(|(lines, newline)| {
            let text = lines.iter().map(|(l, _)| l.as_str()).collect::<Vec<_>>().join(newline);
            (text, lines.into_iter().map(|(_, count)| count).collect())
        })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: the parser never panics and always returns a document
    #[test]
    fn parse_never_panics(source in "\\PC{0,200}") {
        let _ = parse(&source);
        let config = ParseConfig::new()
            .with_recovery(RecoveryPolicy::Abort)
            .with_variable_precedence(VariablePrecedence::ProjectionFirst);
        let _ = parse_with_config(&source, &config);
    }

    /// Property: `next_token` never panics for any offset, on or off a character boundary
    #[test]
    fn next_token_never_panics(source in "\\PC{0,60}", offset in 0usize..80) {
        let _ = lexer::next_token(&source, offset);
    }

    /// Property: re-tokenizing the exact text of a token yields the same kind over the whole text
    #[test]
    fn tokens_are_idempotent(source in "[ -~\\t\\r\\n\\x0b\\x0c]{0,120}") {
        for token in Lexer::new(&source).filter_map(Result::ok) {
            let text = token.text(&source);
            let step = lexer::next_token(text, 0);
            match step {
                Ok(LexStep::Token(again)) => {
                    prop_assert_eq!(&again.kind, &token.kind, "text {:?}", text);
                    prop_assert_eq!(again.span.start, 0);
                    prop_assert_eq!(again.span.end, text.len());
                }
                other => prop_assert!(false, "re-lexing {:?} gave {:?}", text, other),
            }
        }
    }

    /// Property: spans are non-overlapping and strictly increasing
    #[test]
    fn token_spans_are_monotonic(source in "[ -~\n]{0,120}") {
        let tokens: Vec<_> = Lexer::new(&source).filter_map(Result::ok).collect();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
            prop_assert!(pair[0].span.start < pair[1].span.start);
        }
    }

    /// Property: well-formed documents parse cleanly, one statement per generated line
    #[test]
    fn well_formed_documents_parse_cleanly((source, expected) in document()) {
        let output = parse(&source);
        prop_assert!(output.is_clean(), "{:?} -> {:?}", source, output.diagnostics);
        prop_assert_eq!(output.document.len(), expected.len());
        for (statement, count) in output.document.statements.iter().zip(&expected) {
            match (&statement.node, count) {
                (Statement::CommandLine(line), Some(count)) => {
                    prop_assert_eq!(line.tokens.len(), *count);
                    prop_assert!(line.is_terminated());
                }
                (Statement::Comment { .. }, None) => {}
                (node, count) => prop_assert!(false, "unexpected {:?} for {:?}", node, count),
            }
        }
    }

    /// Property: highlight captures plus the whitespace between them reconstruct the input byte-for-byte
    #[test]
    fn highlights_reconstruct_source((source, _) in document()) {
        let output = parse(&source);
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for capture in highlights(&output.document) {
            let gap = &source[cursor..capture.span.start];
            prop_assert!(gap.chars().all(char::is_whitespace), "non-whitespace gap {:?}", gap);
            rebuilt.push_str(gap);
            rebuilt.push_str(capture.span.text(&source));
            cursor = capture.span.end;
        }
        let tail = &source[cursor..];
        prop_assert!(tail.chars().all(char::is_whitespace));
        rebuilt.push_str(tail);
        prop_assert_eq!(rebuilt, source);
    }

    /// Property: parsing is deterministic
    #[test]
    fn parse_is_deterministic(source in "[ -~\n]{0,120}") {
        prop_assert_eq!(parse(&source), parse(&source));
    }
}
