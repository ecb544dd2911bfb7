use crate::{
    error::{Error, Result},
    token::{Span, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::str::Chars;

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "int" => TokenKind::Int,
    "float" => TokenKind::Float,
    "double" => TokenKind::Double,
    "string" => TokenKind::Str,
    "bool" => TokenKind::Bool,
    "char" => TokenKind::Char,
    "Agar" => TokenKind::Agar,
    "else" => TokenKind::Else,
    "return" => TokenKind::Return,
    "for" => TokenKind::For,
    "while" => TokenKind::While,
    "switch" => TokenKind::Switch,
    "case" => TokenKind::Case,
    "default" => TokenKind::Default,
    "break" => TokenKind::Break,
};

/// Scans `src` into a token sequence terminated by a single `EndOfFile`.
pub fn tokenize(src: &str) -> Result<Vec<Token>> {
    Scanner::new(src).scan_tokens()
}

pub struct Scanner<'a> {
    src: PeekMoreIterator<Chars<'a>>,
    lexeme_buffer: String,
    line: usize,
    column: usize,
    halted: bool,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.halted { return None }

        self.skip_whitespace();
        let span = self.current_span();
        let kind = self.next_token_kind(span)?;

        let lexeme = self.lexeme_buffer.clone();
        self.lexeme_buffer.clear();

        // Nothing after the first bad character is scanned.
        self.halted = kind.is_err();
        Some(kind.map(|kind| Token { kind, lexeme, span }))
    }
}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.chars().peekmore(),
            lexeme_buffer: String::new(),
            line: 1,
            column: 1,
            halted: false,
        }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        let mut tokens = self.by_ref().collect::<Result<Vec<Token>>>()?;
        tokens.push(Token {
            kind: TokenKind::EndOfFile,
            lexeme: "".to_string(),
            span: self.current_span(),
        });
        Ok(tokens)
    }

    fn current_span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn next_token_kind(&mut self, start: Span) -> Option<Result<TokenKind>> {
        let next_char = self.advance()?;
        self.lexeme_buffer.push(next_char);

        use TokenKind::*;
        let kind = match next_char {
            '=' => Equal,
            '+' => Plus,
            '-' => Minus,
            '*' => Star,
            '/' => Slash,
            '>' => Greater,
            '(' => LeftParen,
            ')' => RightParen,
            '{' => LeftBrace,
            '}' => RightBrace,
            ';' => Semicolon,
            c if c.is_ascii_digit() => self.extract_number(),
            c if c.is_ascii_alphabetic() => self.extract_word(),
            c => return Some(Err(Error::lexical(c, start))),
        };
        Some(Ok(kind))
    }

    fn extract_number(&mut self) -> TokenKind {
        self.advance_until(|n| !n.is_ascii_digit());
        TokenKind::Number
    }

    fn extract_word(&mut self) -> TokenKind {
        self.advance_until(|n| !n.is_ascii_alphanumeric());

        match KEYWORDS.get(self.lexeme_buffer.as_str()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.src.peek() {
            if !is_whitespace(c) { break }
            self.advance();
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.src.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_until(&mut self, should_stop: impl Fn(&char) -> bool) {
        let is_done = |nxt: Option<&char>| nxt.map_or(true, |c| should_stop(c));
        while !is_done(self.src.peek()) {
            if let Some(next) = self.advance() {
                self.lexeme_buffer.push(next);
            }
        }
    }
}

/// The C `isspace` set.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
