use crate::{
    ast::{BlockStatement, Expr, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a variable binding (`let <name> = <expr>;`),
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// Dispatch is on the current token's kind; anything that is not a
    /// `let` or `return` keyword is parsed as an expression statement.
    ///
    /// # Returns
    /// The parsed [`Statement`], or `None` after recording an error.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    ///
    /// After the value, tokens are consumed up to the terminating
    /// semicolon. When the value is a function literal the semicolon is
    /// optional; one is consumed if present.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(&TokenKind::Identifier) {
            return None;
        }
        let name = self.current.literal.clone();

        if !self.expect_peek(&TokenKind::Assign) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if matches!(value, Expr::FunctionLiteral { .. }) {
            if self.peek_is(&TokenKind::Semicolon) {
                self.next_token();
            }
            return Some(Statement::Let { name, value });
        }

        while !self.current_is(&TokenKind::Semicolon) && !self.current_is(&TokenKind::Eof) {
            self.next_token();
        }
        Some(Statement::Let { name, value })
    }

    /// Parses `return;` or `return <expression>;`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        if self.current_is(&TokenKind::Semicolon) {
            return Some(Statement::Return { value: None });
        }

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Statement::Return { value: Some(value) })
    }

    /// Wraps a bare expression as a statement; a trailing semicolon is
    /// optional.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Statement::Expression { expr })
    }

    /// Parses a brace-delimited block, accumulating statements until `}`
    /// or end of input.
    ///
    /// Called with the opening `{` as the current token; leaves the
    /// closing `}` (or the end-of-input token) current.
    pub(crate) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is(&TokenKind::RBrace) && !self.current_is(&TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { statements }
    }
}
