/// Closing command lines and recording diagnostics.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
impl Parser<'_> {
    /// A `.` ends the open line, or reports an empty one.
    fn terminate(&mut self, period: Span) {
        match std::mem::replace(&mut self.state, LineState::LineStart) {
            LineState::InBody(line) => self.push_line(line, Some(period)),
            LineState::LineStart | LineState::InClause(_) => {
                self.syntax_error(period.start, SyntaxErrorReason::EmptyCommandLine, period);
            }
        }
    }

    /// End of input or a comment reached while a line was open.
    fn close_unterminated(&mut self) {
        match std::mem::replace(&mut self.state, LineState::LineStart) {
            LineState::LineStart => {}
            LineState::InClause(clause) => {
                self.syntax_error(clause.span.start, SyntaxErrorReason::UnterminatedCommandLine, clause.span);
            }
            LineState::InBody(line) => {
                let command_line = line.into_command_line(None);
                let span = command_line.span();
                self.syntax_error(span.start, SyntaxErrorReason::UnterminatedCommandLine, span);
                self.statements.push(Spanned::new(Statement::CommandLine(command_line), span));
            }
        }
    }

    /// Record a lexical error; the open line (if any) is kept as-is without an extra diagnostic.
    fn lex_error(&mut self, error: LexError) {
        match std::mem::replace(&mut self.state, LineState::LineStart) {
            LineState::InBody(line) => {
                tracing::debug!(offset = error.offset, "closing command line after lexical error");
                self.push_line(line, None);
            }
            LineState::LineStart | LineState::InClause(_) => {}
        }
        self.diagnostics.push(error.into());
    }

    fn push_line(&mut self, line: OpenLine, terminator: Option<Span>) {
        let command_line = line.into_command_line(terminator);
        let span = command_line.span();
        self.statements.push(Spanned::new(Statement::CommandLine(command_line), span));
    }

    fn syntax_error(&mut self, at: usize, reason: SyntaxErrorReason, span: Span) {
        let line = self.lines.line(at);
        self.diagnostics.push(SyntaxError::new(line, reason, span).into());
    }
}
