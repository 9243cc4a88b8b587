#![no_main]

use libfuzzer_sys::fuzz_target;
use nekonomicon::{ParseConfig, RecoveryPolicy, VariablePrecedence, lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every token the lenient parser keeps must lie inside the input
        let output = parser::parse(s);
        for token in output.document.tokens() {
            assert!(token.span.end <= s.len());
        }

        let strict = ParseConfig::new()
            .with_recovery(RecoveryPolicy::Abort)
            .with_variable_precedence(VariablePrecedence::ProjectionFirst);
        let _ = parser::parse_with_config(s, &strict);

        // Stepping from arbitrary offsets must never panic
        for offset in [0, s.len() / 2, s.len()] {
            let _ = lexer::next_token(s, offset);
        }
    }
});
