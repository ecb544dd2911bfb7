use std::fmt::{self, Display};

/// A 1-based source position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) span: Span,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, span: Span) -> Self {
        Token { kind, lexeme: lexeme.into(), span }
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Int, Float, Double, Str, Bool, Char,

    Agar, Else, Return,
    For, While, Switch, Case, Default, Break,

    Identifier, Number,

    Equal, Plus, Minus, Star, Slash, Greater,
    LeftParen, RightParen, LeftBrace, RightBrace, Semicolon,

    EndOfFile,
}

impl TokenKind {
    pub fn is_type_keyword(&self) -> bool {
        use TokenKind::*;
        matches!(self, Int | Float | Double | Str | Bool | Char)
    }

    /// Keywords the scanner knows but no statement can start with.
    pub fn is_reserved(&self) -> bool {
        use TokenKind::*;
        matches!(self, For | While | Switch | Case | Default | Break)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        let spelling = match self {
            Int => "int",
            Float => "float",
            Double => "double",
            Str => "string",
            Bool => "bool",
            Char => "char",
            Agar => "Agar",
            Else => "else",
            Return => "return",
            For => "for",
            While => "while",
            Switch => "switch",
            Case => "case",
            Default => "default",
            Break => "break",
            Equal => "=",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Greater => ">",
            LeftParen => "(",
            RightParen => ")",
            LeftBrace => "{",
            RightBrace => "}",
            Semicolon => ";",
            Identifier => return write!(f, "identifier"),
            Number => return write!(f, "number"),
            EndOfFile => return write!(f, "end of input"),
        };
        write!(f, "'{}'", spelling)
    }
}
