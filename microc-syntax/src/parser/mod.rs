use crate::{ast::Program, config::ParserConfig, errors::Result};

pub(crate) mod expr_parser;
pub(crate) mod parser;
mod token_stream;

pub use parser::Parser;

/// Parses a whole source file with the default type widths.
pub fn parse_program(source: &str) -> Result<Program> {
    parse_program_with(source, ParserConfig::default())
}

pub fn parse_program_with(source: &str, config: ParserConfig) -> Result<Program> {
    let mut parser = Parser::new(source, config)?;
    parser.parse()
}
