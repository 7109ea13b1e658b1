use std::mem;

use crate::{
    errors::{Error, Result},
    tokenizer::{Lexer, Token, TokenType},
};

/// Pulls tokens from the lexer on demand, keeping one token of lookahead.
pub(crate) struct TokenStream<'a> {
    lexer: Lexer<'a>,
    current: Token,
    previous: Token,
}

impl<'a> TokenStream<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let token_type = lexer.next_token()?;
        let current = lexer.token(token_type);

        Ok(Self {
            lexer,
            current,
            previous: Token::eof(0),
        })
    }

    pub fn peek_token(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> TokenType {
        self.peek_token().into()
    }

    pub fn check(&self, token_type: TokenType) -> bool {
        self.peek() == token_type
    }

    pub fn is_eof(&self) -> bool {
        self.check(TokenType::EOF)
    }

    pub fn advance(&mut self) -> Result<&Token> {
        let token_type = self.lexer.next_token()?;
        let next = self.lexer.token(token_type);
        self.previous = mem::replace(&mut self.current, next);
        Ok(&self.previous)
    }

    pub fn previous(&self) -> &Token {
        &self.previous
    }

    pub fn match_tokens(&mut self, token_types: &[TokenType]) -> Result<bool> {
        for token_type in token_types {
            if self.check(*token_type) {
                self.advance()?;
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Syntax error on the lookahead token.
    pub fn unexpected(&self) -> Error {
        let token = self.peek_token();
        Error::syntax_error(token.line, token.lexeme.clone())
    }
}
