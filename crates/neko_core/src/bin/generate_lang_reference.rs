//! Generate a Markdown vocabulary reference from the `neko_core::lang` registries.
//!
//! Renders keywords and line clauses into `docs/reference/vocabulary.md`.
//!
//! ## Notes
//! - The generated file is a derived artifact; update the registries instead of editing it.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p neko_core --bin generate_lang_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

use neko_core::lang::{clauses, keywords};

fn ensure_single_blank_line(out: &mut String) {
    while out.ends_with("\n\n\n") {
        out.pop();
    }
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    fs::write(out_dir.join("vocabulary.md"), render_vocabulary_reference()).expect("write vocabulary.md");
}

fn render_vocabulary_reference() -> String {
    let mut out = String::new();
    out.push_str("# nekonomicon vocabulary\n\n");
    out.push_str("Generated file, do not edit by hand.\n");
    out.push_str("Regenerate with: `cargo run -p neko_core --bin generate_lang_reference`\n");

    render_keywords_section(&mut out);
    render_clauses_section(&mut out);

    ensure_single_blank_line(&mut out);
    out.pop();
    out
}

fn render_keywords_section(out: &mut String) {
    start_section(out, "## Keywords");

    out.push_str("| Id | Canonical | Category | Description | Since | Stability |\n");
    out.push_str("|----|---|---|---|---|---|\n");

    for k in keywords::KEYWORDS {
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {} | {} | {} |\n",
            k.id,
            k.canonical,
            k.category.as_str(),
            k.description,
            k.since,
            k.stability.as_str()
        ));
    }

    start_section(out, "### Examples");
    for k in keywords::KEYWORDS.iter().filter(|k| !k.examples.is_empty()) {
        out.push_str(&format!("#### `{}`\n\n", k.canonical));
        for ex in k.examples {
            out.push_str("```text\n");
            out.push_str(ex.code);
            out.push_str("\n```\n\n");
            if let Some(note) = ex.note {
                out.push_str(note);
                out.push_str("\n\n");
            }
        }
    }
}

fn render_clauses_section(out: &mut String) {
    start_section(out, "## Clauses");

    out.push_str("Clauses may only open a command line.\n\n");
    out.push_str("| Id | Spelling | Description | Since | Stability |\n");
    out.push_str("|----|---|---|---|---|\n");
    for c in clauses::CLAUSES {
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {} | {} |\n",
            c.id,
            c.canonical,
            c.description,
            c.since,
            c.stability.as_str()
        ));
    }
}

fn workspace_root() -> PathBuf {
    // crates/neko_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/neko_core)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_separated_by_one_blank_line() {
        let mut out = String::from("intro\n\n\n\n");
        start_section(&mut out, "## Next");
        assert_eq!(out, "intro\n\n## Next\n\n");

        let mut out = String::from("intro");
        start_section(&mut out, "## Next");
        assert_eq!(out, "intro\n\n## Next\n\n");
    }

    #[test]
    fn reference_lists_every_keyword_and_clause() {
        let out = render_vocabulary_reference();
        assert!(out.starts_with("# nekonomicon vocabulary\n\n"));
        assert!(out.ends_with('\n') && !out.ends_with("\n\n"));
        assert!(!out.contains("\n\n\n"));
        for k in keywords::KEYWORDS {
            assert!(out.contains(&format!("| `{}` |", k.canonical)), "missing keyword {}", k.canonical);
        }
        for c in clauses::CLAUSES {
            assert!(out.contains(&format!("| `{}` |", c.canonical)), "missing clause {}", c.canonical);
        }
        let clauses_at = out.find("## Clauses").unwrap();
        assert!(out.find("## Keywords").unwrap() < clauses_at);
    }
}
