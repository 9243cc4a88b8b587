//! Layering guardrails to keep the syntax frontend free of CLI and output concerns.
//!
//! `neko_syntax` is meant for reuse by editors and other tools, so its `[dependencies]` table may not name the
//! crates the `neko` CLI is built on. `neko_core` stays dependency-free apart from optional `serde`. The root
//! package's dev-dependencies stay limited to what its own tests use.

const CLI_ONLY: &[&str] = &["clap", "serde_json", "tracing-subscriber"];

fn dependency_names(manifest: &str) -> Vec<String> {
    table_names(manifest, "[dependencies]")
}

fn table_names(manifest: &str, table: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the requested table.
        if line.starts_with('[') {
            if line == table {
                in_dependencies = true;
                continue;
            }
            // Any new section after the table ends the scan window.
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn syntax_crate_does_not_depend_on_cli_crates() {
    let names = dependency_names(include_str!("../crates/neko_syntax/Cargo.toml"));
    assert!(names.iter().any(|n| n == "neko_core"), "{names:?}");
    for forbidden in CLI_ONLY {
        assert!(
            !names.iter().any(|n| n == forbidden),
            "`{forbidden}` must not appear in neko_syntax [dependencies]"
        );
    }
}

#[test]
fn core_crate_only_depends_on_serde() {
    let names = dependency_names(include_str!("../crates/neko_core/Cargo.toml"));
    assert_eq!(names, vec!["serde".to_string()]);
}

#[test]
fn root_dev_dependencies_are_used_by_root_tests() {
    let names = table_names(include_str!("../Cargo.toml"), "[dev-dependencies]");
    assert_eq!(names, vec!["insta".to_string()]);
}
