use derive_more::Display;

#[allow(non_camel_case_types)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Punctuation.
    #[display("(")]
    LEFT_PAREN,
    #[display(")")]
    RIGHT_PAREN,
    #[display("{{")]
    LEFT_BRACE,
    #[display("}}")]
    RIGHT_BRACE,
    #[display(",")]
    COMMA,
    #[display(";")]
    SEMICOLON,

    // Single-character operators.
    #[display("+")]
    PLUS,
    #[display("-")]
    MINUS,
    #[display("*")]
    STAR,
    #[display("/")]
    SLASH,
    #[display("%")]
    PERCENT,
    #[display("~")]
    TILDE,
    #[display("^")]
    CARET,

    // One or two character operators.
    #[display("!")]
    BANG,
    #[display("!=")]
    BANG_EQUAL,
    #[display("=")]
    EQUAL,
    #[display("==")]
    EQUAL_EQUAL,
    #[display(">")]
    GREATER,
    #[display(">=")]
    GREATER_EQUAL,
    #[display(">>")]
    GREATER_GREATER,
    #[display("<")]
    LESS,
    #[display("<=")]
    LESS_EQUAL,
    #[display("<<")]
    LESS_LESS,
    #[display("&")]
    AMPERSAND,
    #[display("&&")]
    AND,
    #[display("|")]
    PIPE,
    #[display("||")]
    OR,

    // Literals.
    #[display("Identifier")]
    IDENTIFIER,
    #[display("Integer")]
    INTEGER,
    #[display("Character")]
    CHARACTER,
    #[display("String")]
    STRING,

    // Keywords.
    #[display("void")]
    VOID,
    #[display("int")]
    INT,
    #[display("bool")]
    BOOL,
    #[display("char")]
    CHAR,
    #[display("if")]
    IF,
    #[display("else")]
    ELSE,
    #[display("while")]
    WHILE,
    #[display("return")]
    RETURN,
    #[display("asm")]
    ASM,
    #[display("true")]
    TRUE,
    #[display("false")]
    FALSE,
    #[display("NULL")]
    NULL,

    #[display("Eof")]
    EOF,
}

impl TokenType {
    /// Keywords that open a type name.
    pub fn starts_type(self) -> bool {
        matches!(
            self,
            TokenType::VOID | TokenType::INT | TokenType::BOOL | TokenType::CHAR
        )
    }
}

/// A token with the raw text the scanner matched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn eof(line: usize) -> Self {
        Self {
            token_type: TokenType::EOF,
            lexeme: String::new(),
            line,
        }
    }
}

impl From<&Token> for TokenType {
    fn from(token: &Token) -> Self {
        token.token_type
    }
}
