//! Parser for the nekonomicon language
//!
//! Groups the token stream into [`Statement`]s: whole-line comments and `.`-terminated command lines with an
//! optional leading clause. Parsing is lenient: every call returns a [`Document`] together with the full list of
//! lexical and syntax diagnostics, and a malformed line never stops the lines after it from parsing.
//!
//! ## Examples
//!
//! ```rust
//! use neko_syntax::parser;
//!
//! let output = parser::parse("safe increase ::counter .\n~ done\n");
//! assert!(output.is_clean());
//! assert_eq!(output.document.len(), 2);
//! ```

use crate::ast::*;
use crate::config::ParseConfig;
use crate::diagnostics::{Diagnostic, LexError, LineIndex, SyntaxError, SyntaxErrorReason};
use crate::lexer::{Lexer, Token, TokenKind};
use neko_core::lang::clauses::{self, ClauseId};

// NOTE: Split across files with `include!` so the state machine helpers stay private to this module.

include!("parser/core.rs");
include!("parser/lines.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
