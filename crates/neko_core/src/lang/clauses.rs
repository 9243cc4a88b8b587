//! Line clauses: the optional execution-policy word that may open a command line.
//!
//! Clauses are not keywords. Four of them are plain words (`safe`, `async`, `sensitive`, `elevated`) that only
//! act as a clause in the first position of a command line; anywhere else they are ordinary identifiers. The
//! fifth, `(!)sensitive`, has a spelling no other token can produce, so the tokenizer recognises it directly.
//!
//! ## Examples
//! ```rust
//! use neko_core::lang::clauses::{self, ClauseId};
//!
//! assert_eq!(clauses::from_str("safe"), Some(ClauseId::Safe));
//! assert_eq!(clauses::from_str("(!)sensitive"), Some(ClauseId::SensitiveNegated));
//! assert!(clauses::is_bare_word(ClauseId::Elevated));
//! assert!(!clauses::is_bare_word(ClauseId::SensitiveNegated));
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ClauseId {
    Safe,
    Async,
    Sensitive,
    SensitiveNegated,
    Elevated,
}

/// Metadata for a clause.
#[derive(Debug, Clone, Copy)]
pub struct ClauseInfo {
    pub id: ClauseId,
    pub canonical: &'static str,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
}

/// Spelling of the negated-sensitive clause.
pub const NEGATED_SENSITIVE: &str = "(!)sensitive";

/// Registry of all clauses, in grammar declaration order.
pub const CLAUSES: &[ClauseInfo] = &[
    info(ClauseId::Safe, "safe", "Run only if the command is side-effect free."),
    info(ClauseId::Async, "async", "Run the command without waiting for it."),
    info(ClauseId::Sensitive, "sensitive", "Treat the command's data as sensitive."),
    info(ClauseId::SensitiveNegated, NEGATED_SENSITIVE, "Explicitly mark the command's data as not sensitive."),
    info(ClauseId::Elevated, "elevated", "Run the command with elevated privileges."),
];

/// Canonical spelling.
pub fn as_str(id: ClauseId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ClauseId) -> &'static ClauseInfo {
    CLAUSES.iter().find(|c| c.id == id).expect("clause info missing")
}

/// Lookup by exact spelling.
pub fn from_str(s: &str) -> Option<ClauseId> {
    CLAUSES.iter().find(|c| c.canonical == s).map(|c| c.id)
}

/// `true` when the clause is spelled as a plain word that also lexes as an identifier.
pub fn is_bare_word(id: ClauseId) -> bool {
    id != ClauseId::SensitiveNegated
}

const fn info(id: ClauseId, canonical: &'static str, description: &'static str) -> ClauseInfo {
    ClauseInfo {
        id,
        canonical,
        description,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_round_trip() {
        for c in CLAUSES {
            assert_eq!(from_str(c.canonical), Some(c.id));
            assert_eq!(as_str(c.id), c.canonical);
        }
    }

    #[test]
    fn bare_words_are_identifier_shaped() {
        for c in CLAUSES.iter().filter(|c| is_bare_word(c.id)) {
            assert!(c.canonical.chars().all(|ch| ch.is_ascii_lowercase()), "{}", c.canonical);
        }
    }

    #[test]
    fn unknown_spelling_is_none() {
        assert_eq!(from_str("Safe"), None);
        assert_eq!(from_str("!sensitive"), None);
    }
}
