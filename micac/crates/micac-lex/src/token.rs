//! Token definitions for the Mica lexer.
//!
//! A [`Token`] is a [`TokenValue`] (the tag and its payload) plus the
//! [`Span`] it was lexed from. The value is a closed enum, so consumers
//! matching on it get exhaustiveness checking from the compiler.

use micac_util::{Location, Span};
use serde::Serialize;
use std::fmt;

/// The type tag of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Reserved word (`if`, `else`, `return`, `func`)
    Keyword,
    /// User-defined name
    Identifier,
    /// Arithmetic or assignment operator
    Operator,
    /// Structural punctuation
    Separator,
    /// String literal
    String,
    /// Integer, float or character literal
    Numeric,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::String => "string literal",
            TokenKind::Numeric => "numeric literal",
        };
        f.write_str(name)
    }
}

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `func`
    Func,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 4] = [Keyword::If, Keyword::Else, Keyword::Return, Keyword::Func];

    /// Source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
            Keyword::Func => "func",
        }
    }
}

/// Operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `=`
    Assign,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 5] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Assign,
    ];

    /// Source spelling of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Assign => "=",
        }
    }
}

/// Structural punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Separator {
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// End-of-input marker. Never matched from source text.
    EndOfProgram,
}

impl Separator {
    /// Every separator that has a source spelling.
    pub const SPELLED: [Separator; 9] = [
        Separator::LeftParenthesis,
        Separator::RightParenthesis,
        Separator::LeftBrace,
        Separator::RightBrace,
        Separator::LeftBracket,
        Separator::RightBracket,
        Separator::Comma,
        Separator::Dot,
        Separator::Semicolon,
    ];

    /// Source character of the separator, `None` for [`Separator::EndOfProgram`].
    pub const fn as_char(self) -> Option<char> {
        match self {
            Separator::LeftParenthesis => Some('('),
            Separator::RightParenthesis => Some(')'),
            Separator::LeftBrace => Some('{'),
            Separator::RightBrace => Some('}'),
            Separator::LeftBracket => Some('['),
            Separator::RightBracket => Some(']'),
            Separator::Comma => Some(','),
            Separator::Dot => Some('.'),
            Separator::Semicolon => Some(';'),
            Separator::EndOfProgram => None,
        }
    }
}

/// A user-defined name. Two identifiers are equal when their text is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(pub String);

impl Identifier {
    /// Create an identifier from its text.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoded literal value.
///
/// Exactly one variant is populated. The numeric variant is fully
/// determined by the literal's suffix and whether it has a radix point:
///
/// | text      | variant    |
/// |-----------|------------|
/// | `10`      | `Signed`   |
/// | `10u`     | `Unsigned` |
/// | `3.14`    | `Float`    |
/// | `3.14d`   | `Float`    |
/// | `3.14f`   | `Float32`  |
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Literal {
    /// Decoded string contents
    String(String),
    /// Signed 64-bit integer, also used for character literals
    Signed(i64),
    /// Unsigned 64-bit integer (`u` suffix)
    Unsigned(u64),
    /// 64-bit float
    Float(f64),
    /// 32-bit float (`f` suffix)
    Float32(f32),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Signed(v) => write!(f, "{}", v),
            Literal::Unsigned(v) => write!(f, "{}u", v),
            Literal::Float(v) => write!(f, "{:?}", v),
            Literal::Float32(v) => write!(f, "{:?}f", v),
        }
    }
}

/// Tag plus payload of a token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TokenValue {
    /// Reserved word
    Keyword(Keyword),
    /// User-defined name
    Identifier(Identifier),
    /// Operator
    Operator(Operator),
    /// Punctuation
    Separator(Separator),
    /// String or numeric literal
    Literal(Literal),
}

impl TokenValue {
    /// The type tag of this value.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Keyword(_) => TokenKind::Keyword,
            TokenValue::Identifier(_) => TokenKind::Identifier,
            TokenValue::Operator(_) => TokenKind::Operator,
            TokenValue::Separator(_) => TokenKind::Separator,
            TokenValue::Literal(Literal::String(_)) => TokenKind::String,
            TokenValue::Literal(_) => TokenKind::Numeric,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Keyword(kw) => f.write_str(kw.as_str()),
            TokenValue::Identifier(ident) => write!(f, "{}", ident),
            TokenValue::Operator(op) => f.write_str(op.as_str()),
            TokenValue::Separator(sep) => match sep.as_char() {
                Some(c) => write!(f, "{}", c),
                None => f.write_str("<end of program>"),
            },
            TokenValue::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

/// A lexed token.
///
/// Tokens are immutable once built. The span records the bytes the token
/// was lexed from and the line/column of its first byte.
///
/// # Example
///
/// ```
/// use micac_lex::token::{Operator, Token, TokenKind, TokenValue};
/// use micac_util::{Location, Span};
///
/// let token = Token::new(
///     TokenValue::Operator(Operator::Assign),
///     Span::new(6, 7, Location::new(1, 7)),
/// );
/// assert_eq!(token.kind(), TokenKind::Operator);
/// assert_eq!(token.location(), Location::new(1, 7));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    value: TokenValue,
    span: Span,
}

impl Token {
    /// Create a token.
    pub fn new(value: TokenValue, span: Span) -> Self {
        Self { value, span }
    }

    /// The type tag.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// The payload.
    #[inline]
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Line and column of the first byte.
    #[inline]
    pub fn location(&self) -> Location {
        self.span.location
    }

    /// Byte range and location.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Consume the token, keeping only its payload.
    pub fn into_value(self) -> TokenValue {
        self.value
    }

    /// Returns true if this is the given keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.value == TokenValue::Keyword(keyword)
    }

    /// Returns true if this is the end-of-program marker.
    pub fn is_end_of_program(&self) -> bool {
        self.value == TokenValue::Separator(Separator::EndOfProgram)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind(), self.value, self.span.location)
    }
}
