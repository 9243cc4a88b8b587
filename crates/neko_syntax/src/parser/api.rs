/// Document plus every diagnostic, in the order encountered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOutput {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// No lexical or syntax diagnostics were produced.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn syntax_errors(&self) -> impl Iterator<Item = &SyntaxError> {
        self.diagnostics.iter().filter_map(Diagnostic::as_syntax)
    }

    pub fn lex_errors(&self) -> impl Iterator<Item = &LexError> {
        self.diagnostics.iter().filter_map(Diagnostic::as_lex)
    }

    /// Strict view: the document if clean, the diagnostics otherwise.
    ///
    /// ## Errors
    /// Returns every diagnostic when at least one was produced.
    pub fn into_result(self) -> Result<Document, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.document)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Parse source text into a [`Document`] with the default config.
///
/// This is the main public entrypoint for parsing. It never fails: malformed input yields a best-effort document
/// plus diagnostics.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(source).parse()
}

/// Parse with an explicit [`ParseConfig`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_with_config(source: &str, config: &ParseConfig) -> ParseOutput {
    Parser::with_config(source, *config).parse()
}
