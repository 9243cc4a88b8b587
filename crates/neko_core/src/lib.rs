//! Canonical language vocabulary for nekonomicon.
//!
//! This crate is intentionally small and dependency-light. It holds the reserved keyword and clause registries
//! shared by the syntax frontend, the CLI and documentation generators.
//!
//! ## Notes
//!
//! - **No IO**, no global state, and no syntax-tree types.

pub mod lang;
