//! Shareable metadata for `neko_core::lang` registries.
//!
//! The `neko_core::lang` module is a set of **registry-first** vocabularies: reserved keywords and
//! line clauses. This submodule provides the small, dependency-free metadata types reused by every
//! registry.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives
//!   in the tokenizer/parser.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::clauses`]

use std::fmt;

/// Language version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use neko_core::lang::registry::Since;
///
/// assert_eq!(Since(0, 1).to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

impl Stability {
    /// Lower-case label used in generated docs.
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Draft => "draft",
            Stability::Deprecated => "deprecated",
        }
    }
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is a complete command line, usually ending with `.`.
/// - `note` is an optional short explanation (one sentence).
///
/// ## Examples
/// ```rust
/// use neko_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "increase ::counter.",
///     note: Some("Bump a container value."),
/// };
/// assert!(ex.code.ends_with('.'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
