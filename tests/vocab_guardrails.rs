use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use neko_core::lang::{clauses, keywords};
use neko_syntax::lexer::{self, TokenKind};

/// Guardrail against reintroducing stringly-typed vocabulary checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "if"` or
/// `match word { "safe" => ... }` in Rust source files where we expect callers to go through `neko_core::lang`
/// registries instead.
///
/// Notes:
/// - We allow occurrences in `crates/neko_core/src/lang/**` (registries themselves), in docgen, and in tests.
/// - This is not meant to be perfect; it's meant to catch "oops I added a string match".
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = registry_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer neko_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

/// Every registry spelling must lex to exactly the token its registry entry promises.
#[test]
fn registry_spellings_lex_to_registry_ids() {
    for info in keywords::KEYWORDS {
        let tokens = lexer::lex(info.canonical).unwrap();
        assert_eq!(tokens.len(), 1, "{}", info.canonical);
        let kind = &tokens[0].kind;
        match info.category {
            keywords::KeywordCategory::Literal => assert!(matches!(kind, TokenKind::Boolean(_)), "{kind:?}"),
            _ => assert_eq!(kind.keyword_id(), Some(info.id), "{}", info.canonical),
        }
    }

    for info in clauses::CLAUSES {
        let tokens = lexer::lex(info.canonical).unwrap();
        assert_eq!(tokens.len(), 1, "{}", info.canonical);
        if clauses::is_bare_word(info.id) {
            assert_eq!(tokens[0].kind, TokenKind::Ident(info.canonical.to_string()));
        } else {
            assert_eq!(tokens[0].kind, TokenKind::Clause(info.id));
        }

        let line = format!("{} go .", info.canonical);
        let output = neko_syntax::parse(&line);
        let clause = output.document.command_lines().next().and_then(|l| l.clause.as_ref()).map(|c| c.node);
        assert_eq!(clause, Some(info.id), "{line}");
    }
}

/// Documentation examples in the registry must be well-formed command lines.
#[test]
fn registry_examples_parse_cleanly() {
    for info in keywords::KEYWORDS {
        for example in info.examples {
            let output = neko_syntax::parse(example.code);
            assert!(output.is_clean(), "{:?}: {:?}", example.code, output.diagnostics);
            assert_eq!(output.document.command_lines().count(), 1, "{:?}", example.code);
        }
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn registry_spellings() -> Vec<&'static str> {
    let mut set: BTreeSet<&'static str> = BTreeSet::new();
    for k in keywords::KEYWORDS {
        set.insert(k.canonical);
    }
    for c in clauses::CLAUSES {
        set.insert(c.canonical);
    }
    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/neko_core/src/lang/") {
        return true;
    }
    // Docgen inevitably contains spellings for headings, etc.
    if rel == "crates/neko_core/src/bin/generate_lang_reference.rs" {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks or match arms for known vocabulary spellings.
    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}
