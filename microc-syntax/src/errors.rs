pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scanner could not match the input. `matched` is the text read so
    /// far, empty when the input ended.
    LexicalError { line: usize, matched: String },

    /// The token sequence does not fit the grammar. An empty `matched` means
    /// the input ended too early.
    SyntaxError { line: usize, matched: String },

    InvalidLiteral { literal: String, reason: String },

    Internal(String),
}

impl Error {
    pub fn lexical_error(line: usize, matched: impl Into<String>) -> Self {
        Self::LexicalError {
            line,
            matched: matched.into(),
        }
    }

    pub fn syntax_error(line: usize, matched: impl Into<String>) -> Self {
        Self::SyntaxError {
            line,
            matched: matched.into(),
        }
    }

    pub fn invalid_literal(literal: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidLiteral {
            literal: literal.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::Internal(message.to_string())
    }

    /// Line the error was detected on, when it comes from the source text.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::LexicalError { line, .. } | Self::SyntaxError { line, .. } => Some(*line),
            Self::InvalidLiteral { .. } | Self::Internal(_) => None,
        }
    }

    pub fn is_end_of_file(&self) -> bool {
        match self {
            Self::LexicalError { matched, .. } | Self::SyntaxError { matched, .. } => {
                matched.is_empty()
            }
            Self::InvalidLiteral { .. } | Self::Internal(_) => false,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::LexicalError { line, matched } if matched.is_empty() => {
                write!(fmt, "lexical error line {line}, unexpected end of file")
            }
            Self::LexicalError { line, matched } => {
                write!(fmt, "lexical error line {line}, near \"{matched}\"")
            }
            Self::SyntaxError { line, matched } if matched.is_empty() => {
                write!(fmt, "syntax error line {line}, unexpected end of file")
            }
            Self::SyntaxError { line, matched } => {
                write!(fmt, "syntax error line {line}, unexpected token \"{matched}\"")
            }
            Self::InvalidLiteral { literal, reason } => {
                write!(fmt, "invalid literal {literal}: {reason}")
            }
            Self::Internal(message) => write!(fmt, "internal error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn end_of_file_is_reported_distinctly() {
        let eof = Error::syntax_error(7, "");
        let token = Error::syntax_error(7, "}");

        assert!(eof.is_end_of_file());
        assert_eq!(eof.to_string(), "syntax error line 7, unexpected end of file");
        assert!(!token.is_end_of_file());
        assert_eq!(token.to_string(), "syntax error line 7, unexpected token \"}\"");
    }

    #[test]
    fn lexical_error_message() {
        assert_eq!(
            Error::lexical_error(2, "@").to_string(),
            "lexical error line 2, near \"@\""
        );
        assert_eq!(
            Error::lexical_error(3, "").to_string(),
            "lexical error line 3, unexpected end of file"
        );
        assert_eq!(Error::lexical_error(3, "").line(), Some(3));
    }
}
