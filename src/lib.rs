pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;

pub use crate::{
    error::{Error, ErrorKind, Result},
    parser::Parser,
    scanner::{tokenize, Scanner},
    token::{Span, Token, TokenKind},
};

/// Scans and parses `source`, stopping at the first lexical or syntax error.
pub fn check(source: &str) -> Result<()> {
    let tokens = tokenize(source)?;
    Parser::new(&tokens).parse()
}

/// Checks a raw byte buffer, reading each byte as one character so a stray
/// byte is reported by its own value.
pub fn check_bytes(source: &[u8]) -> Result<()> {
    let text: String = source.iter().map(|&b| char::from(b)).collect();
    check(&text)
}
