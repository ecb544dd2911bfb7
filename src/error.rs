use std::result;
use std::fmt::{self, Display};

use crate::token::{Span, Token, TokenKind};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { character: char, span: Span },
    Syntactic { token: Token, expected: Option<TokenKind> },
    Unexpected,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical(character: char, span: Span) -> Error {
        let kind = ErrorKind::Lexical { character, span };
        let message = if character.is_ascii() {
            format!("Unexpected character '{}'.", character.escape_debug())
        } else {
            format!("Unexpected character '{}' ({:#04x}).", character, character as u32)
        };
        Error { kind, message }
    }

    pub fn syntactic<S: Into<String>>(token: Token, message: S) -> Error {
        let kind = ErrorKind::Syntactic { token, expected: None };
        Error { kind, message: message.into() }
    }

    pub fn expected(token: Token, expected: TokenKind) -> Error {
        let message = format!("Expected {} but found {}.", expected, found(&token));
        let kind = ErrorKind::Syntactic { token, expected: Some(expected) };
        Error { kind, message }
    }

    pub fn unexpected() -> Error {
        let kind = ErrorKind::Unexpected;
        Error { kind, message: "Unexpected end of input.".into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> Option<Span> {
        match self.kind() {
            ErrorKind::Lexical { span, .. } => Some(*span),
            ErrorKind::Syntactic { token, .. } => Some(token.span),
            ErrorKind::Unexpected => None,
        }
    }

    fn loc(&self) -> String {
        match self.kind() {
            ErrorKind::Syntactic { token, .. } => {
                if token.kind == TokenKind::EndOfFile {
                    " at end".to_string()
                } else {
                    format!(" at '{}'", token.lexeme)
                }
            },
            _ => "".to_string(),
        }
    }
}

/// Describes a token the way diagnostics refer to what was found.
pub(crate) fn found(token: &Token) -> String {
    match token.kind {
        TokenKind::EndOfFile => "end of input".to_string(),
        _ => format!("'{}'", token.lexeme),
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span() {
            Some(span) => write!(
                f,
                "[line {}, column {}] Error{}: {}",
                span.line, span.column, self.loc(), self.message
            ),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(Other, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_error_reports_character_and_position() {
        let e = Error::lexical('@', Span::new(3, 7));
        assert_eq!("[line 3, column 7] Error: Unexpected character '@'.", e.to_string());
    }

    #[test]
    fn non_ascii_characters_show_their_code() {
        let e = Error::lexical('\u{ff}', Span::new(1, 5));
        assert_eq!("Unexpected character '\u{ff}' (0xff).", e.message());
    }

    #[test]
    fn expected_error_names_both_tokens() {
        let token = Token::new(TokenKind::LeftParen, "(", Span::new(1, 4));
        let e = Error::expected(token, TokenKind::Equal);
        assert_eq!(
            "[line 1, column 4] Error at '(': Expected '=' but found '('.",
            e.to_string()
        );
    }

    #[test]
    fn errors_at_end_of_input_say_so() {
        let token = Token::new(TokenKind::EndOfFile, "", Span::new(2, 1));
        let e = Error::expected(token, TokenKind::Semicolon);
        assert_eq!(
            "[line 2, column 1] Error at end: Expected ';' but found end of input.",
            e.to_string()
        );
    }

    #[test]
    fn unexpected_has_no_position() {
        let e = Error::unexpected();
        assert_eq!(None, e.span());
        assert_eq!("Error: Unexpected end of input.", e.to_string());
    }
}
