use crate::{
    error::{self, Error, Result},
    token::*,
};

const TYPE_TOKENS: &'static [&'static TokenKind] = &[
    &TokenKind::Int,
    &TokenKind::Float,
    &TokenKind::Double,
    &TokenKind::Str,
    &TokenKind::Bool,
    &TokenKind::Char,
];

/// Deepest nesting of statements and parenthesised expressions accepted
/// before parsing gives up, keeping recursion within the native stack.
pub const MAX_DEPTH: usize = 256;

const TERM_TOKENS: &'static [&'static TokenKind] = &[
    &TokenKind::Minus,
    &TokenKind::Plus,
];

const FACTOR_TOKENS: &'static [&'static TokenKind] = &[
    &TokenKind::Star,
    &TokenKind::Slash,
];

/// Recursive-descent acceptor. Validates a token sequence against the grammar
/// and produces nothing but success or the first syntax error.
///
/// ```text
/// Program     -> Statement* EOF
/// Statement   -> Declaration | Assignment | AgarStmt | ReturnStmt | Block
/// Declaration -> TypeKeyword ID ';'
/// Assignment  -> ID '=' Expression ';'
/// AgarStmt    -> 'Agar' '(' Expression ')' Statement [ 'else' Statement ]
/// ReturnStmt  -> 'return' Expression ';'
/// Block       -> '{' Statement* '}'
/// Expression  -> Term (('+'|'-') Term)* [ '>' Expression ]
/// Term        -> Factor (('*'|'/') Factor)*
/// Factor      -> NUM | ID | '(' Expression ')'
/// ```
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    depth: usize,
}

impl <'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, current: 0, depth: 0 }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn parse(&mut self) -> Result<()> {
        while !self.check_next(&TokenKind::EndOfFile) {
            self.statement()?;
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        let next = self.peek()?;
        match next.kind {
            kind if kind.is_type_keyword() => self.declaration(),
            TokenKind::Identifier => self.assignment(),
            TokenKind::Agar => self.nested(Self::agar_statement),
            TokenKind::Return => self.return_statement(),
            TokenKind::LeftBrace => self.nested(Self::block),
            kind if kind.is_reserved() => Err(Error::syntactic(
                next.clone(),
                format!("Reserved keyword {} cannot start a statement.", kind),
            )),
            _ => Err(unexpected_token(next)),
        }
    }

    fn declaration(&mut self) -> Result<()> {
        if self.match_any(TYPE_TOKENS).is_none() {
            return Err(unexpected_token(self.peek()?));
        }
        self.expect(&TokenKind::Identifier)?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(())
    }

    fn assignment(&mut self) -> Result<()> {
        self.expect(&TokenKind::Identifier)?;
        self.expect(&TokenKind::Equal)?;
        self.expression()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(())
    }

    fn agar_statement(&mut self) -> Result<()> {
        self.expect(&TokenKind::Agar)?;
        self.expect(&TokenKind::LeftParen)?;
        self.expression()?;
        self.expect(&TokenKind::RightParen)?;
        self.statement()?;

        if self.match_single(&TokenKind::Else).is_some() {
            self.statement()?;
        }
        Ok(())
    }

    fn return_statement(&mut self) -> Result<()> {
        self.expect(&TokenKind::Return)?;
        self.expression()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(())
    }

    fn block(&mut self) -> Result<()> {
        self.expect(&TokenKind::LeftBrace)?;

        while !self.check_next(&TokenKind::RightBrace) && !self.check_next(&TokenKind::EndOfFile) {
            self.statement()?;
        }

        self.expect(&TokenKind::RightBrace)?;
        Ok(())
    }

    fn expression(&mut self) -> Result<()> {
        self.match_binary_precedence_with_tokens(Self::term, TERM_TOKENS)?;

        // `Term ... ['>' Expression]` unrolled; `a > b > c` is accepted.
        while self.match_single(&TokenKind::Greater).is_some() {
            self.match_binary_precedence_with_tokens(Self::term, TERM_TOKENS)?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<()> {
        self.match_binary_precedence_with_tokens(Self::factor, FACTOR_TOKENS)
    }

    fn factor(&mut self) -> Result<()> {
        let next = self.peek()?;
        match next.kind {
            TokenKind::Number | TokenKind::Identifier => {
                self.advance()?;
                Ok(())
            },
            TokenKind::LeftParen => self.nested(|parser| {
                parser.expect(&TokenKind::LeftParen)?;
                parser.expression()?;
                parser.expect(&TokenKind::RightParen)?;
                Ok(())
            }),
            _ => Err(unexpected_token(next)),
        }
    }

    fn nested(&mut self, rule: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::syntactic(self.peek()?.clone(), "Too deeply nested."));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn match_binary_precedence_with_tokens(
        &mut self,
        parse: impl Fn(&mut Self) -> Result<()>,
        kinds: &[&TokenKind]
    ) -> Result<()> {
        parse(self)?;

        while self.match_any(kinds).is_some() {
            parse(self)?;
        }

        Ok(())
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token> {
        match self.match_single(kind) {
            Some(token) => Ok(token),
            None => Err(Error::expected(self.peek()?.clone(), *kind)),
        }
    }

    fn peek(&self) -> Result<&'a Token> {
        let tokens: &'a [Token] = self.tokens;
        tokens.get(self.current).ok_or_else(Error::unexpected)
    }

    fn advance(&mut self) -> Result<&'a Token> {
        let token = self.peek()?;
        if token.kind != TokenKind::EndOfFile {
            self.current += 1;
        }
        Ok(token)
    }

    fn check_next(&self, kind: &TokenKind) -> bool {
        self.peek()
            .map(|t| &t.kind == kind)
            .unwrap_or(false)
    }

    fn match_single(&mut self, kind: &TokenKind) -> Option<&'a Token> {
        if self.check_next(kind) {
            self.advance().ok()
        } else {
            None
        }
    }

    fn match_any(&mut self, kinds: &[&TokenKind]) -> Option<&'a Token> {
        kinds.iter().find_map(|k| self.match_single(k))
    }
}

fn unexpected_token(token: &Token) -> Error {
    let message = format!("Unexpected token {}.", error::found(token));
    Error::syntactic(token.clone(), message)
}
