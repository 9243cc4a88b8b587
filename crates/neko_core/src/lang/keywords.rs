//! Define the reserved keyword vocabulary for the nekonomicon language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories, provenance, and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and matches whole words only. The tokenizer scans a
//!   complete identifier-shaped word first and only then asks the registry, so `iffy` is an identifier and
//!   never `if` followed by `fy`.
//! - The category decides which token variant the tokenizer emits (control, clause, signature, boolean).
//! - Line clauses (`safe`, `async`, ...) are *not* keywords; see [`crate::lang::clauses`].
//!
//! ## Examples
//! ```rust
//! use neko_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("repeat"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::category(KeywordId::With), KeywordCategory::Clause);
//! assert_eq!(keywords::as_str(KeywordId::Elapsed), "elapsed");
//! ```

use super::registry::{Example, Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum KeywordId {
    // Control flow
    If,
    Else,
    End,
    Repeat,
    While,
    Success,
    Failure,
    Increase,
    Decrease,

    // Clause words
    Is,
    As,
    Into,
    With,
    Without,

    // Signatures
    Trace,
    Elapsed,
    Timeout,
    Silent,
    On,

    // Literals
    True,
    False,
}

/// Grouping that decides the token variant a keyword lexes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Lexes to a control keyword token.
    Control,
    /// Lexes to a clause keyword token.
    Clause,
    /// Lexes to a signature keyword token.
    Signature,
    /// Lexes to a boolean literal token.
    Literal,
}

impl KeywordCategory {
    /// Human-readable label for docs.
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::Control => "control",
            KeywordCategory::Clause => "clause",
            KeywordCategory::Signature => "signature",
            KeywordCategory::Literal => "literal",
        }
    }
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - Grouped by category for readability; the order carries no lexing priority because keyword lookup is an
///   exact whole-word match.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info_with_examples(
        KeywordId::If,
        "if",
        KeywordCategory::Control,
        "Open a conditional block.",
        &[Example {
            code: "if @ready is true.",
            note: Some("Conditional on a scalar variable."),
        }],
    ),
    info(KeywordId::Else, "else", KeywordCategory::Control, "Alternative branch of a conditional."),
    info(KeywordId::End, "end", KeywordCategory::Control, "Close the innermost block."),
    info_with_examples(
        KeywordId::Repeat,
        "repeat",
        KeywordCategory::Control,
        "Repeat a block a fixed number of times.",
        &[Example {
            code: "repeat 3.",
            note: None,
        }],
    ),
    info(KeywordId::While, "while", KeywordCategory::Control, "Loop while a condition holds."),
    info(KeywordId::Success, "success", KeywordCategory::Control, "Branch taken when the previous command succeeded."),
    info(KeywordId::Failure, "failure", KeywordCategory::Control, "Branch taken when the previous command failed."),
    info_with_examples(
        KeywordId::Increase,
        "increase",
        KeywordCategory::Control,
        "Increment a numeric variable.",
        &[Example {
            code: "increase ::counter.",
            note: Some("Bump a container value."),
        }],
    ),
    info(KeywordId::Decrease, "decrease", KeywordCategory::Control, "Decrement a numeric variable."),
    // Clause words
    info(KeywordId::Is, "is", KeywordCategory::Clause, "Comparison or binding."),
    info(KeywordId::As, "as", KeywordCategory::Clause, "Rename or cast the preceding value."),
    info(KeywordId::Into, "into", KeywordCategory::Clause, "Direct a result into a variable."),
    info(KeywordId::With, "with", KeywordCategory::Clause, "Attach an option to a command."),
    info(KeywordId::Without, "without", KeywordCategory::Clause, "Detach an option from a command."),
    // Signatures
    info(KeywordId::Trace, "trace", KeywordCategory::Signature, "Trace the command while it runs."),
    info(KeywordId::Elapsed, "elapsed", KeywordCategory::Signature, "Report the elapsed time."),
    info_with_examples(
        KeywordId::Timeout,
        "timeout",
        KeywordCategory::Signature,
        "Bound the command's running time.",
        &[Example {
            code: "say 'hi' timeout 5 sec.",
            note: None,
        }],
    ),
    info(KeywordId::Silent, "silent", KeywordCategory::Signature, "Suppress command output."),
    info(KeywordId::On, "on", KeywordCategory::Signature, "Restrict the command to a platform."),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, "Boolean true."),
    info(KeywordId::False, "false", KeywordCategory::Literal, "Boolean false."),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The keyword's [`KeywordCategory`].
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, description: &'static str) -> KeywordInfo {
    info_with_examples(id, canonical, category, description, &[])
}

const fn info_with_examples(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
    examples: &'static [Example],
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples,
    }
}
