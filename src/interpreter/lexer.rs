use logos::Logos;

/// Raw scanner classification. Every variant carries a pattern; end of
/// input and unrecognized characters have no lexeme to match, so they are
/// represented only at the [`TokenKind`] level.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r#""[^"]*""#)]
    Str,
}

/// Represents the kind of a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// Identifier tokens; variable or function names such as `x` or `adder`.
    Identifier,
    /// Integer literal tokens, such as `42`.
    Integer,
    /// String literal tokens, such as `"hello"`. No escape sequences.
    Str,
    /// End of input. Produced by [`Lexer::next_token`] once the source is
    /// exhausted, and on every call thereafter.
    Eof,
    /// Unrecognized characters.
    Illegal,
}

const fn raw_to_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Less => TokenKind::Less,
        RawToken::Greater => TokenKind::Greater,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::Identifier => TokenKind::Identifier,
        RawToken::Integer => TokenKind::Integer,
        RawToken::Str => TokenKind::Str,
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Identifier => "IDENT",
            Self::Integer => "INT",
            Self::Str => "STRING",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        };
        write!(f, "{name}")
    }
}

/// A single lexical token: its kind plus the literal text it was scanned
/// from. Immutable once produced.
///
/// For string tokens the literal is the content between the quotes; for
/// every other kind it is the exact source slice.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// The classification of the token.
    pub kind:    TokenKind,
    /// The literal text the token was produced from.
    pub literal: String,
}

impl Token {
    /// Creates the end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind:    TokenKind::Eof,
               literal: String::new(), }
    }
}

/// A pull-based token source over a borrowed source string.
///
/// Wraps the generated [`logos`] scanner: one forward pass, no
/// backtracking. Unrecognized characters come out as [`TokenKind::Illegal`]
/// tokens rather than faults, and once the input is exhausted every further
/// call to [`Lexer::next_token`] returns the [`TokenKind::Eof`] token.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, RawToken>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: RawToken::lexer(source) }
    }

    /// Produces the next token from the source.
    ///
    /// # Returns
    /// The next [`Token`]; [`TokenKind::Illegal`] for characters no rule
    /// matches, or [`TokenKind::Eof`] forever once the input runs out.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(raw)) => {
                let slice = self.inner.slice();
                let literal = match raw {
                    // String literals carry the content between the quotes.
                    RawToken::Str => slice[1..slice.len() - 1].to_string(),
                    _ => slice.to_string(),
                };
                Token { kind: raw_to_kind(raw),
                        literal }
            },
            Some(Err(())) => Token { kind:    TokenKind::Illegal,
                                     literal: self.inner.slice().to_string(), },
            None => Token::eof(),
        }
    }
}
