pub mod ast;
mod config;
mod errors;
pub mod literal;
mod parser;
mod tokenizer;

pub use ast::{Program, TreePrinter};
pub use config::{ParserConfig, TypeSizes};
pub use errors::{Error, Result};
pub use parser::{parse_program, parse_program_with, Parser};
pub use tokenizer::{Lexer, Token, TokenType};
