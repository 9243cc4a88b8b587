//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Diagnostics go to stderr (rendered with miette); command output goes to stdout. Every command that parses
//! exits with [`ExitCode::FAILURE`] when the input produced any diagnostic.

use std::fs;

use miette::{GraphicalReportHandler, NamedSource};
use neko_syntax::diagnostics::LineIndex;
use neko_syntax::highlight::highlights;
use neko_syntax::lexer::Lexer;
use neko_syntax::{Diagnostic, ParseConfig, SYNTAX_VERSION, parse_with_config};
use serde_json::{Map, Value};

use super::{CliError, CliResult, ExitCode, StoryStyle};
use crate::version::NEKO_VERSION;

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file from disk.
///
/// ## Errors
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// Commands
// ============================================================================

/// `neko check <file>`: parse and report.
pub fn check_file(file_path: &str, config: &ParseConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = parse_with_config(&source, config);

    if output.is_clean() {
        println!("{}: ok ({} statements)", file_path, output.document.len());
        return Ok(ExitCode::SUCCESS);
    }

    eprint!("{}", render_diagnostics(file_path, &source, &output.diagnostics));
    eprintln!("{}: {} diagnostic(s)", file_path, output.diagnostics.len());
    Ok(ExitCode::FAILURE)
}

/// `neko tokens <file>`: one token per line, or JSON.
pub fn tokens_file(file_path: &str, config: &ParseConfig, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let lexed = Lexer::with_config(&source, *config).tokenize();
    let diagnostics: Vec<Diagnostic> = lexed.errors.iter().cloned().map(Diagnostic::from).collect();

    if json {
        let mut root = Map::new();
        root.insert("syntax_version".to_string(), SYNTAX_VERSION.into());
        root.insert("tokens".to_string(), serde_json::to_value(&lexed.tokens).map_err(json_error)?);
        root.insert("diagnostics".to_string(), diagnostics_json(&source, &diagnostics)?);
        println!("{}", to_pretty(&Value::Object(root))?);
    } else {
        for token in &lexed.tokens {
            println!("{}..{}\t{}", token.span.start, token.span.end, token.kind);
        }
        eprint!("{}", render_diagnostics(file_path, &source, &diagnostics));
    }

    Ok(exit_code_for(&diagnostics))
}

/// `neko parse <file>`: document dump, or JSON.
pub fn parse_file(file_path: &str, config: &ParseConfig, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = parse_with_config(&source, config);

    if json {
        let mut root = Map::new();
        root.insert("syntax_version".to_string(), SYNTAX_VERSION.into());
        root.insert("document".to_string(), serde_json::to_value(&output.document).map_err(json_error)?);
        root.insert("diagnostics".to_string(), diagnostics_json(&source, &output.diagnostics)?);
        println!("{}", to_pretty(&Value::Object(root))?);
    } else {
        print!("{}", output.document);
        eprint!("{}", render_diagnostics(file_path, &source, &output.diagnostics));
    }

    Ok(exit_code_for(&output.diagnostics))
}

/// `neko highlight <file>`: `start..end<TAB>capture` per capture.
pub fn highlight_file(file_path: &str, config: &ParseConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let output = parse_with_config(&source, config);

    for capture in highlights(&output.document) {
        println!("{}..{}\t{}", capture.span.start, capture.span.end, capture.class.capture_name());
    }
    eprint!("{}", render_diagnostics(file_path, &source, &output.diagnostics));

    Ok(exit_code_for(&output.diagnostics))
}

/// `neko story`: version information.
pub fn story(style: StoryStyle) -> CliResult<ExitCode> {
    print!("{}", story_text(style));
    Ok(ExitCode::SUCCESS)
}

pub fn story_text(style: StoryStyle) -> String {
    match style {
        StoryStyle::Brief => format!("v{NEKO_VERSION}\n"),
        StoryStyle::Normal => format!("The nekonomicon is now at version {NEKO_VERSION}.\n"),
        StoryStyle::Full => format!(
            "I will tell you a story about the nekonomicon, who is now {NEKO_VERSION}.\n\
             \n\
             Back in my old days...\n\
             + v0.1.0:\n\
             \n\
             - Line-oriented tokenizer with registry-backed keywords and clauses\n\
             - Lenient parser reporting every lexical and syntax diagnostic\n\
             - Token, document and highlight output (text or JSON, syntax version {SYNTAX_VERSION})\n\
             \n\
             A magical scripting language for automation and clarity.\n"
        ),
    }
}

// ============================================================================
// Output helpers
// ============================================================================

fn exit_code_for(diagnostics: &[Diagnostic]) -> ExitCode {
    if diagnostics.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Render diagnostics with miette's graphical handler, falling back to `file:line:col` lines.
pub fn render_diagnostics(file_path: &str, source: &str, diagnostics: &[Diagnostic]) -> String {
    render_with(&GraphicalReportHandler::new(), file_path, source, diagnostics)
}

fn render_with(
    handler: &GraphicalReportHandler,
    file_path: &str,
    source: &str,
    diagnostics: &[Diagnostic],
) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        let report =
            miette::Report::new(diagnostic.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        let mut rendered = String::new();
        if handler.render_report(&mut rendered, &*report).is_ok() {
            out.push_str(&rendered);
        } else {
            let (line, col) = diagnostic.line_col(source);
            out.push_str(&format!(
                "{}:{}:{}: {}: {}\n",
                file_path,
                line,
                col,
                diagnostic.code(),
                diagnostic.message()
            ));
        }
    }
    out
}

/// Serialize diagnostics, adding `code`, `message`, `line` and `column` to each.
fn diagnostics_json(source: &str, diagnostics: &[Diagnostic]) -> CliResult<Value> {
    let index = LineIndex::new(source);
    let mut items = Vec::with_capacity(diagnostics.len());
    for diagnostic in diagnostics {
        let mut value = serde_json::to_value(diagnostic).map_err(json_error)?;
        if let Value::Object(fields) = &mut value {
            let (line, column) = index.line_col(diagnostic.span().start);
            fields.insert("code".to_string(), diagnostic.code().into());
            fields.insert("message".to_string(), diagnostic.message().into());
            fields.insert("line".to_string(), line.into());
            fields.insert("column".to_string(), column.into());
        }
        items.push(value);
    }
    Ok(Value::Array(items))
}

fn to_pretty(value: &Value) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(json_error)
}

fn json_error(e: serde_json::Error) -> CliError {
    CliError::failure(format!("Error serializing JSON: {}", e))
}
