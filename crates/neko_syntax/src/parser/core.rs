/// Parser core types and the token loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - The line state machine is `LineStart -> InClause -> InBody -> (terminated) -> LineStart`; the terminated state
///   is transient and collapses back to `LineStart` as soon as the statement is pushed.

/// Where the parser is within the current command line.
#[derive(Debug)]
enum LineState {
    /// No command line is open.
    LineStart,
    /// A clause opened the line; no body token yet.
    InClause(Spanned<ClauseId>),
    /// At least one body token has been consumed.
    InBody(OpenLine),
}

/// A command line with at least one body token and no terminator yet.
#[derive(Debug)]
struct OpenLine {
    clause: Option<Spanned<ClauseId>>,
    tokens: Vec<Token>,
}

impl OpenLine {
    fn into_command_line(self, terminator: Option<Span>) -> CommandLine {
        CommandLine {
            clause: self.clause,
            tokens: self.tokens,
            terminator,
        }
    }
}

/// Parser state.
///
/// Drives a [`Lexer`] over the source and feeds each token through the line state machine.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lines: LineIndex<'a>,
    state: LineState,
    statements: Vec<Spanned<Statement>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default config.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ParseConfig::default())
    }

    pub fn with_config(source: &'a str, config: ParseConfig) -> Self {
        Self {
            lexer: Lexer::with_config(source, config),
            lines: LineIndex::new(source),
            state: LineState::LineStart,
            statements: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole source.
    pub fn parse(mut self) -> ParseOutput {
        while let Some(item) = self.lexer.next() {
            match item {
                Ok(token) => self.accept(token),
                Err(error) => self.lex_error(error),
            }
        }
        self.close_unterminated();

        ParseOutput {
            document: Document {
                statements: self.statements,
            },
            diagnostics: self.diagnostics,
        }
    }

    fn accept(&mut self, token: Token) {
        match token.kind {
            TokenKind::Comment(text) => {
                self.close_unterminated();
                self.statements.push(Spanned::new(Statement::Comment { text }, token.span));
            }
            TokenKind::Period => self.terminate(token.span),
            TokenKind::Clause(id) => self.clause(id, token.span),
            _ => self.body_token(token),
        }
    }

    fn clause(&mut self, id: ClauseId, span: Span) {
        if matches!(self.state, LineState::LineStart) {
            self.state = LineState::InClause(Spanned::new(id, span));
        } else {
            self.syntax_error(span.start, SyntaxErrorReason::MisplacedClause(id), span);
        }
    }

    fn body_token(&mut self, token: Token) {
        self.state = match std::mem::replace(&mut self.state, LineState::LineStart) {
            LineState::LineStart => match bare_clause(&token) {
                Some(id) => LineState::InClause(Spanned::new(id, token.span)),
                None => LineState::InBody(OpenLine {
                    clause: None,
                    tokens: vec![token],
                }),
            },
            LineState::InClause(clause) => LineState::InBody(OpenLine {
                clause: Some(clause),
                tokens: vec![token],
            }),
            LineState::InBody(mut line) => {
                line.tokens.push(token);
                LineState::InBody(line)
            }
        };
    }
}

/// A bare-word clause (`safe`, `async`, ...) opening a line.
fn bare_clause(token: &Token) -> Option<ClauseId> {
    match &token.kind {
        TokenKind::Ident(word) => clauses::from_str(word).filter(|&id| clauses::is_bare_word(id)),
        _ => None,
    }
}
