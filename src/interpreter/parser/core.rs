use crate::{
    ast::{Expr, Program},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::expression::has_infix_rule,
    },
};

/// Operator binding strength, weakest to strongest.
///
/// The derived ordering is what the expression loop compares against: an
/// operator only captures the expression parsed so far when its precedence
/// is strictly greater than the level the caller is parsing at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// The level expressions start at.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `!x` and `-x`
    Prefix,
    /// A call expression, `adder(x)`
    Call,
}

/// Looks up the infix binding precedence of a token kind.
///
/// Kinds with no infix rule sit at [`Precedence::Lowest`], which never
/// exceeds a caller's level, so they can never capture a left operand.
#[must_use]
pub const fn token_precedence(kind: &TokenKind) -> Precedence {
    match kind {
        TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equals,
        TokenKind::Less | TokenKind::Greater => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// Converts a token stream into a [`Program`].
///
/// The parser keeps two tokens of lookahead (`current` and `peek`) and
/// dispatches per-token-kind prefix and infix parse rules from the
/// expression loop. It never raises a fatal fault on malformed input:
/// every problem is recorded as a message and parsing continues with the
/// next statement on a best-effort basis.
///
/// A program that recorded any error must be treated as unreliable and
/// not evaluated.
pub struct Parser<'a> {
    lexer: Lexer<'a>,

    /// The token currently being parsed.
    pub(crate) current: Token,
    /// The successor of `current`.
    pub(crate) peek:    Token,

    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given token source and primes both
    /// lookahead tokens.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self { lexer,
                                current: Token::eof(),
                                peek: Token::eof(),
                                errors: Vec::new() };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parses the whole token stream into a program.
    ///
    /// Statements that fail to parse are dropped; the reasons are
    /// retrievable through [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.current_is(&TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Program { statements }
    }

    /// The error messages accumulated so far, in the order they were
    /// recorded.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Parses a single expression at the given minimum precedence.
    ///
    /// This is the precedence-climbing loop: build a left expression from
    /// the prefix rule for `current`, then, while the peeked token is not
    /// a statement terminator, carries an infix rule, and binds more
    /// strongly than `min_precedence`, advance and fold the left
    /// expression into that rule.
    ///
    /// # Returns
    /// The accumulated expression, or `None` after recording an error.
    pub(crate) fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&TokenKind::Semicolon) && min_precedence < self.peek_precedence() {
            if !has_infix_rule(&self.peek.kind) {
                return Some(left);
            }
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    /// Discards `current`, promotes `peek`, and pulls one new token.
    pub(crate) fn next_token(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(crate) fn current_is(&self, kind: &TokenKind) -> bool {
        self.current.kind == *kind
    }

    pub(crate) fn peek_is(&self, kind: &TokenKind) -> bool {
        self.peek.kind == *kind
    }

    /// Advances past the peeked token when it has the expected kind.
    ///
    /// # Returns
    /// `true` if the parser advanced; `false` after recording an
    /// expected-token error.
    pub(crate) fn expect_peek(&mut self, kind: &TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        token_precedence(&self.current.kind)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        token_precedence(&self.peek.kind)
    }

    /// Records an expected-token mismatch at a structural boundary.
    fn peek_error(&mut self, expected: &TokenKind) {
        self.errors.push(format!("expected next token to be {expected}, got {} instead",
                                 self.peek.kind));
    }

    /// Records that no prefix rule is registered for the current token's
    /// kind.
    pub(crate) fn no_prefix_rule_error(&mut self) {
        self.errors.push(format!("no prefix parse function for {} found", self.current.kind));
    }

    pub(crate) fn record_error(&mut self, message: String) {
        self.errors.push(message);
    }
}
