use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

/// Tells whether a token kind carries an infix parse rule.
///
/// The eight binary operators build an [`Expr::Infix`] node; `(` after an
/// already-parsed expression is the call rule. Everything else leaves the
/// left expression untouched.
#[must_use]
pub const fn has_infix_rule(kind: &TokenKind) -> bool {
    matches!(kind,
             TokenKind::Plus
             | TokenKind::Minus
             | TokenKind::Star
             | TokenKind::Slash
             | TokenKind::EqualEqual
             | TokenKind::BangEqual
             | TokenKind::Less
             | TokenKind::Greater
             | TokenKind::LParen)
}

impl Parser<'_> {
    /// Dispatches the prefix parse rule registered for the current token's
    /// kind.
    ///
    /// # Returns
    /// The parsed expression, or `None` after recording a
    /// no-prefix-parse-function error for kinds that cannot start an
    /// expression.
    pub(crate) fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Identifier => Some(self.parse_identifier()),
            TokenKind::Integer => self.parse_integer_literal(),
            TokenKind::Str => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            _ => {
                self.no_prefix_rule_error();
                None
            },
        }
    }

    /// Dispatches the infix parse rule for the current token's kind,
    /// folding in the expression parsed so far as the left operand.
    pub(crate) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::EqualEqual
            | TokenKind::BangEqual
            | TokenKind::Less
            | TokenKind::Greater => self.parse_infix_expression(left),
            TokenKind::LParen => self.parse_call_expression(left),
            _ => Some(left),
        }
    }

    fn parse_identifier(&mut self) -> Expr {
        Expr::Identifier { name: self.current.literal.clone() }
    }

    /// Parses an integer literal, recording an error when the literal text
    /// does not fit a 64-bit signed integer.
    fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral { value }),
            Err(_) => {
                let message = format!("could not parse {:?} as integer", self.current.literal);
                self.record_error(message);
                None
            },
        }
    }

    fn parse_string_literal(&mut self) -> Expr {
        Expr::StringLiteral { value: self.current.literal.clone() }
    }

    fn parse_boolean_literal(&mut self) -> Expr {
        Expr::BooleanLiteral { value: self.current_is(&TokenKind::True) }
    }

    /// Parses `!x` or `-x`; the operand is parsed at [`Precedence::Prefix`]
    /// so unary operators bind more tightly than any binary operator.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = self.current.literal.clone();
        self.next_token();
        let operand = Box::new(self.parse_expression(Precedence::Prefix)?);
        Some(Expr::Prefix { operator, operand })
    }

    /// Parses the right-hand side of a binary operator.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every binary operator left-associative.
    pub(crate) fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let operator = self.current.literal.clone();
        let precedence = self.current_precedence();
        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expr::Infix { left: Box::new(left),
                           operator,
                           right })
    }

    /// Parses `( expr )`, requiring the matching `)`.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// Parses `if (<condition>) { ... }` with an optional
    /// `else { ... }` branch.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);
        if !self.expect_peek(&TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(&TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(&TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If { condition,
                        consequence,
                        alternative })
    }

    /// Parses `fn(<parameters>) { ... }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(&TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses a parenthesized, comma-separated parameter name list.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.current.literal.clone());

        while self.peek_is(&TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.current.literal.clone());
        }

        if !self.expect_peek(&TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    /// Parses the argument list of a call; the already-parsed left
    /// expression becomes the callee.
    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let arguments = self.parse_call_arguments()?;
        Some(Expr::Call { callee: Box::new(callee),
                          arguments })
    }

    /// Parses a comma-separated argument expression list terminated by `)`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut arguments = Vec::new();

        if self.peek_is(&TokenKind::RParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(&TokenKind::RParen) {
            return None;
        }
        Some(arguments)
    }
}
