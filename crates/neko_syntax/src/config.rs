//! Tokenizer/parser configuration.
//!
//! Both knobs have defaults that match the documented grammar; callers only need a config to opt into the
//! alternative behaviors.

/// How `::name:sub` is classified when both variable shapes match.
///
/// `::a:bb` is a valid container with a sub-key *and* a valid projection. The grammar declares the container
/// first, so [`VariablePrecedence::ContainerFirst`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariablePrecedence {
    /// Container wins every tie; projections are never produced.
    #[default]
    ContainerFirst,
    /// A non-negated `::name:field` whose field is at least two characters long lexes as a projection.
    ProjectionFirst,
}

/// What the tokenizer does after a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Record the error, skip to the next newline and resume.
    #[default]
    SkipLine,
    /// Record the error and stop tokenizing.
    Abort,
}

/// Tokenizer/parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
    /// Container/projection tie-break
    pub variable_precedence: VariablePrecedence,
    /// Lexical error recovery
    pub recovery: RecoveryPolicy,
}

impl ParseConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container/projection tie-break
    pub fn with_variable_precedence(mut self, precedence: VariablePrecedence) -> Self {
        self.variable_precedence = precedence;
        self
    }

    /// Set the lexical error recovery policy
    pub fn with_recovery(mut self, recovery: RecoveryPolicy) -> Self {
        self.recovery = recovery;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_follows_declaration_order_and_skips_lines() {
        let config = ParseConfig::default();
        assert_eq!(config.variable_precedence, VariablePrecedence::ContainerFirst);
        assert_eq!(config.recovery, RecoveryPolicy::SkipLine);
    }

    #[test]
    fn new_equals_default() {
        assert_eq!(ParseConfig::new(), ParseConfig::default());
    }

    #[test]
    fn builders_set_fields() {
        let config = ParseConfig::new()
            .with_variable_precedence(VariablePrecedence::ProjectionFirst)
            .with_recovery(RecoveryPolicy::Abort);
        assert_eq!(config.variable_precedence, VariablePrecedence::ProjectionFirst);
        assert_eq!(config.recovery, RecoveryPolicy::Abort);
    }
}
