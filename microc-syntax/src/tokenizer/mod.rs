pub(crate) mod token;

use std::{iter::Peekable, str::Chars};

use log::debug;
use phf::phf_map;

use crate::errors::{Error, Result};
pub use crate::tokenizer::token::{Token, TokenType};

static KEYWORDS: phf::Map<&'static str, TokenType> = phf_map!(
    "void" => TokenType::VOID,
    "int" => TokenType::INT,
    "bool" => TokenType::BOOL,
    "char" => TokenType::CHAR,
    "if" => TokenType::IF,
    "else" => TokenType::ELSE,
    "while" => TokenType::WHILE,
    "return" => TokenType::RETURN,
    "asm" => TokenType::ASM,
    "true" => TokenType::TRUE,
    "false" => TokenType::FALSE,
    "NULL" => TokenType::NULL
);

// just iterator stuff, no token logic
struct Scanner<'a> {
    iter: Peekable<Chars<'a>>,
    line: usize,
    matched: String,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            iter: source.chars().peekable(),
            line: 1,
            matched: String::new(),
        }
    }

    fn next(&mut self) -> Option<char> {
        let next = self.iter.next();
        if let Some(ch) = next {
            self.matched.push(ch);
            if ch == '\n' {
                self.line += 1;
            }
        }
        next
    }

    fn peek(&mut self) -> Option<&char> {
        self.iter.peek()
    }

    fn consume_if<F>(&mut self, x: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        match self.peek() {
            Some(&next) if x(next) => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Returns how many characters were consumed.
    fn consume_while<F>(&mut self, x: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while self.consume_if(&x) {
            count += 1;
        }
        count
    }
}

/// Turns source text into tokens, one at a time.
///
/// After each call to [`Lexer::next_token`], [`Lexer::line`] and
/// [`Lexer::matched`] describe the token just produced. Once the input is
/// exhausted every call yields [`TokenType::EOF`] with empty matched text.
pub struct Lexer<'a> {
    iter: Scanner<'a>,
    token_line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            iter: Scanner::new(source),
            token_line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.token_line
    }

    pub fn matched(&self) -> &str {
        &self.iter.matched
    }

    pub fn next_token(&mut self) -> Result<TokenType> {
        loop {
            self.iter.matched.clear();
            self.token_line = self.iter.line;

            let ch = match self.iter.next() {
                Some(ch) => ch,
                None => return Ok(TokenType::EOF),
            };

            if let Some(token_type) = self.match_token(ch)? {
                return Ok(token_type);
            }
        }
    }

    /// Snapshot of the token produced by the last [`Lexer::next_token`] call.
    pub fn token(&self, token_type: TokenType) -> Token {
        Token {
            token_type,
            lexeme: self.matched().to_string(),
            line: self.line(),
        }
    }

    /// Scans the whole input. The last token is always `EOF`.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token_type = self.next_token()?;
            tokens.push(self.token(token_type));
            if token_type == TokenType::EOF {
                break;
            }
        }

        debug!("scanned {} tokens", tokens.len());
        Ok(tokens)
    }

    fn match_token(&mut self, ch: char) -> Result<Option<TokenType>> {
        let token_type = match ch {
            '(' => TokenType::LEFT_PAREN,
            ')' => TokenType::RIGHT_PAREN,
            '{' => TokenType::LEFT_BRACE,
            '}' => TokenType::RIGHT_BRACE,
            ',' => TokenType::COMMA,
            ';' => TokenType::SEMICOLON,
            '+' => TokenType::PLUS,
            '-' => TokenType::MINUS,
            '*' => TokenType::STAR,
            '%' => TokenType::PERCENT,
            '~' => TokenType::TILDE,
            '^' => TokenType::CARET,
            '!' => self.either('=', TokenType::BANG_EQUAL, TokenType::BANG),
            '=' => self.either('=', TokenType::EQUAL_EQUAL, TokenType::EQUAL),
            '&' => self.either('&', TokenType::AND, TokenType::AMPERSAND),
            '|' => self.either('|', TokenType::OR, TokenType::PIPE),
            '<' => {
                if self.iter.consume_if(|ch| ch == '=') {
                    TokenType::LESS_EQUAL
                } else {
                    self.either('<', TokenType::LESS_LESS, TokenType::LESS)
                }
            }
            '>' => {
                if self.iter.consume_if(|ch| ch == '=') {
                    TokenType::GREATER_EQUAL
                } else {
                    self.either('>', TokenType::GREATER_GREATER, TokenType::GREATER)
                }
            }
            '/' => {
                if self.iter.consume_if(|ch| ch == '/') {
                    // single line comment
                    self.iter.consume_while(|ch| ch != '\n');
                    return Ok(None);
                } else if self.iter.consume_if(|ch| ch == '*') {
                    self.block_comment()?;
                    return Ok(None);
                } else {
                    TokenType::SLASH
                }
            }
            ' ' | '\r' | '\t' | '\n' => return Ok(None),
            '\'' => self.character()?,
            '"' => self.string()?,
            _ if ch.is_ascii_digit() => self.number(ch)?,
            _ if ch.is_ascii_alphabetic() || ch == '_' => self.identifier(),
            _ => return Err(self.error()),
        };

        Ok(Some(token_type))
    }

    /// Error carrying the text matched since the token started.
    fn error(&self) -> Error {
        Error::lexical_error(self.token_line, self.iter.matched.clone())
    }

    /// Same as [`Lexer::error`], without the newline that ended the token.
    fn error_before_newline(&mut self) -> Error {
        if self.iter.matched.ends_with('\n') {
            self.iter.matched.pop();
        }
        self.error()
    }

    fn either(&mut self, to_match: char, matched: TokenType, unmatched: TokenType) -> TokenType {
        if self.iter.consume_if(|ch| ch == to_match) {
            matched
        } else {
            unmatched
        }
    }

    fn block_comment(&mut self) -> Result<()> {
        loop {
            match self.iter.next() {
                Some('*') if self.iter.consume_if(|ch| ch == '/') => return Ok(()),
                Some(_) => {}
                None => return Err(Error::lexical_error(self.iter.line, "")),
            }
        }
    }

    fn character(&mut self) -> Result<TokenType> {
        match self.iter.next() {
            Some('\\') => match self.iter.next() {
                Some('0' | 'n' | 'r' | 't' | '\'') => {}
                _ => return Err(self.error()),
            },
            Some('\n') => return Err(self.error_before_newline()),
            Some('\'') | None => return Err(self.error()),
            Some(_) => {}
        }

        if !self.iter.consume_if(|ch| ch == '\'') {
            return Err(self.error());
        }

        Ok(TokenType::CHARACTER)
    }

    fn string(&mut self) -> Result<TokenType> {
        loop {
            match self.iter.next() {
                Some('"') => return Ok(TokenType::STRING),
                Some('\\') => {
                    if self.iter.next().is_none() {
                        return Err(self.error());
                    }
                }
                Some('\n') => return Err(self.error_before_newline()),
                None => return Err(self.error()),
                Some(_) => {}
            }
        }
    }

    fn number(&mut self, first_ch: char) -> Result<TokenType> {
        let digits = if first_ch == '0' && self.iter.consume_if(|ch| ch == 'x') {
            self.iter.consume_while(|ch| ch.is_ascii_hexdigit())
        } else if first_ch == '0' && self.iter.consume_if(|ch| ch == 'b') {
            self.iter.consume_while(|ch| ch == '0' || ch == '1')
        } else {
            // the first digit counts
            self.iter.consume_while(|ch| ch.is_ascii_digit()) + 1
        };

        if digits == 0 {
            return Err(self.error());
        }

        Ok(TokenType::INTEGER)
    }

    fn identifier(&mut self) -> TokenType {
        self.iter
            .consume_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');

        KEYWORDS
            .get(self.iter.matched.as_str())
            .copied()
            .unwrap_or(TokenType::IDENTIFIER)
    }
}
