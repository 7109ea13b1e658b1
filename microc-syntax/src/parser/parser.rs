use log::{debug, trace};

use crate::{
    ast::{Block, Entity, Expression, Function, FunctionArgument, Instruction, Program, Type},
    config::ParserConfig,
    errors::{Error, Result},
    literal,
    tokenizer::{Lexer, Token, TokenType},
};

use super::token_stream::TokenStream;

/// Single-pass recursive descent parser.
///
/// Stops at the first error: lexical errors come back unchanged, anything
/// else is a syntax error on the offending token.
pub struct Parser<'a> {
    pub(super) stream: TokenStream<'a>,
    pub(super) config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, config: ParserConfig) -> Result<Self> {
        Ok(Self {
            stream: TokenStream::new(Lexer::new(source))?,
            config,
        })
    }

    pub fn parse(&mut self) -> Result<Program> {
        let mut program = Program::new();
        while !self.stream.is_eof() {
            program.push(self.entity()?);
        }

        debug!("parsed {} entities", program.entities.len());
        Ok(program)
    }

    pub(super) fn consume(&mut self, token_type: TokenType) -> Result<Token> {
        if self.stream.check(token_type) {
            Ok(self.stream.advance()?.clone())
        } else {
            Err(self.stream.unexpected())
        }
    }

    fn identifier(&mut self) -> Result<String> {
        Ok(self.consume(TokenType::IDENTIFIER)?.lexeme)
    }

    /// A literal the sanitizers reject is reported on its token.
    pub(super) fn literal_error(token: &Token, error: Error) -> Error {
        debug!("rejected literal on line {}: {}", token.line, error);
        Error::syntax_error(token.line, token.lexeme.clone())
    }

    // ----- Type parsing methods -----

    pub(super) fn type_name(&mut self) -> Result<Type> {
        let sizes = self.config.sizes;
        let mut ty = match self.stream.peek() {
            TokenType::VOID => Type::Void,
            TokenType::INT => sizes.integer(),
            TokenType::BOOL => sizes.boolean(),
            TokenType::CHAR => sizes.character(),
            _ => return Err(self.stream.unexpected()),
        };
        self.stream.advance()?;

        while self.stream.match_tokens(&[TokenType::STAR])? {
            ty = sizes.pointer_to(ty);
        }

        Ok(ty)
    }

    // ----- Entity parsing methods -----

    fn entity(&mut self) -> Result<Entity> {
        if self.stream.match_tokens(&[TokenType::ASM])? {
            let assembly = self.assembly()?;
            trace!("reduced assembly entity");
            return Ok(Entity::Assembly { assembly });
        }

        let ty = self.type_name()?;
        let name = self.identifier()?;

        if self.stream.match_tokens(&[TokenType::SEMICOLON])? {
            trace!("reduced global {name}");
            return Ok(Entity::Global { ty, name });
        }

        self.consume(TokenType::LEFT_PAREN)?;
        let arguments = self.parameters()?;
        self.consume(TokenType::LEFT_BRACE)?;
        let instructions = self.instructions()?;

        trace!(
            "reduced function {name} ({} arguments, {} instructions)",
            arguments.len(),
            instructions.len()
        );
        Ok(Entity::Function(Function {
            return_type: ty,
            name,
            arguments,
            instructions,
        }))
    }

    /// `( STRING ) ;` following an `asm` keyword.
    fn assembly(&mut self) -> Result<String> {
        self.consume(TokenType::LEFT_PAREN)?;
        let token = self.consume(TokenType::STRING)?;
        let assembly = literal::sanitize_assembly(&token.lexeme)
            .map_err(|e| Self::literal_error(&token, e))?;
        self.consume(TokenType::RIGHT_PAREN)?;
        self.consume(TokenType::SEMICOLON)?;
        Ok(assembly)
    }

    /// Parameter list after the opening parenthesis, closing one included.
    fn parameters(&mut self) -> Result<Vec<FunctionArgument>> {
        let mut arguments = Vec::new();
        if self.stream.match_tokens(&[TokenType::RIGHT_PAREN])? {
            return Ok(arguments);
        }

        loop {
            let ty = self.type_name()?;
            let name = self.identifier()?;
            arguments.push(FunctionArgument { ty, name });

            if !self.stream.match_tokens(&[TokenType::COMMA])? {
                break;
            }
        }

        self.consume(TokenType::RIGHT_PAREN)?;
        Ok(arguments)
    }

    // ----- Instruction parsing methods -----

    /// Instructions after an opening brace, closing brace included.
    fn instructions(&mut self) -> Result<Vec<Instruction>> {
        let mut instructions = Vec::new();
        while !self.stream.check(TokenType::RIGHT_BRACE) {
            instructions.push(self.instruction()?);
        }

        self.stream.advance()?;
        Ok(instructions)
    }

    fn instruction(&mut self) -> Result<Instruction> {
        if self.stream.peek().starts_type() {
            return self.declaration();
        }

        if self.stream.match_tokens(&[TokenType::LEFT_BRACE])? {
            return Ok(Instruction::Block(Block::new(self.instructions()?)));
        }

        if self.stream.match_tokens(&[TokenType::IF])? {
            return self.if_instr();
        }

        if self.stream.match_tokens(&[TokenType::WHILE])? {
            return self.while_instr();
        }

        if self.stream.match_tokens(&[TokenType::RETURN])? {
            let expression = self.expression()?;
            self.consume(TokenType::SEMICOLON)?;
            return Ok(Instruction::Return { expression });
        }

        if self.stream.match_tokens(&[TokenType::ASM])? {
            let assembly = self.assembly()?;
            return Ok(Instruction::Assembly { assembly });
        }

        let expression = self.expression()?;
        self.consume(TokenType::SEMICOLON)?;
        Ok(Instruction::Expression { expression })
    }

    fn declaration(&mut self) -> Result<Instruction> {
        let ty = self.type_name()?;
        let name = self.identifier()?;

        let initializer = match self.stream.match_tokens(&[TokenType::EQUAL])? {
            true => Some(self.expression()?),
            false => None,
        };

        self.consume(TokenType::SEMICOLON)?;
        Ok(Instruction::Declaration {
            ty,
            name,
            initializer,
        })
    }

    /// A braced block, or a single instruction standing in for one.
    fn body(&mut self) -> Result<Block> {
        if self.stream.match_tokens(&[TokenType::LEFT_BRACE])? {
            return Ok(Block::new(self.instructions()?));
        }

        Ok(Block::from(self.instruction()?))
    }

    fn if_instr(&mut self) -> Result<Instruction> {
        let condition = self.condition()?;
        let then_block = self.body()?;

        let else_block = match self.stream.match_tokens(&[TokenType::ELSE])? {
            true => self.body()?,
            false => Block::default(),
        };

        Ok(Instruction::If {
            condition,
            then_block,
            else_block,
        })
    }

    fn while_instr(&mut self) -> Result<Instruction> {
        let condition = self.condition()?;
        let body = self.body()?;
        Ok(Instruction::While { condition, body })
    }

    fn condition(&mut self) -> Result<Expression> {
        self.consume(TokenType::LEFT_PAREN)?;
        let condition = self.expression()?;
        self.consume(TokenType::RIGHT_PAREN)?;
        Ok(condition)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Block, Entity, Expression, Instruction, Type},
        config::{ParserConfig, TypeSizes},
        errors::Error,
        parser::{parse_program, parse_program_with},
    };

    fn single_function_body(source: &str) -> Vec<Instruction> {
        let program = parse_program(source).expect("parse failed");
        match program.entities.into_iter().next() {
            Some(Entity::Function(function)) => function.instructions,
            other => panic!("expected a function, got {other:?}"),
        }
    }

    #[test]
    fn entities_in_declaration_order() {
        let program = parse_program(
            r#"
            asm("mov 0, %rax");
            int x;
            char* name;
            void main() {}
            "#,
        )
        .expect("parse failed");

        let names: Vec<Option<&str>> = program.entities.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec![None, Some("x"), Some("name"), Some("main")]);
        assert_eq!(
            program.entities[0],
            Entity::Assembly {
                assembly: "mov 0, %rax".to_string()
            }
        );
        assert_eq!(
            program.entities[2],
            Entity::Global {
                ty: Type::pointer(Type::Char { size: 1 }, 4),
                name: "name".to_string()
            }
        );
    }

    #[test]
    fn function_arguments() {
        let program = parse_program("int add(int a, bool** b) { return a; }").expect("parse failed");
        let function = program.functions().next().expect("no function");

        assert_eq!(function.name, "add");
        assert_eq!(function.arguments.len(), 2);
        assert_eq!(function.arguments[1].name, "b");
        assert_eq!(
            function.arguments[1].ty,
            Type::pointer(Type::pointer(Type::Boolean { size: 1 }, 4), 4)
        );
    }

    #[test]
    fn declarations() {
        let body = single_function_body("void f() { int a; char* p = 0x2A; }");
        assert_eq!(
            body,
            vec![
                Instruction::Declaration {
                    ty: Type::Integer { size: 4 },
                    name: "a".to_string(),
                    initializer: None,
                },
                Instruction::Declaration {
                    ty: Type::pointer(Type::Char { size: 1 }, 4),
                    name: "p".to_string(),
                    initializer: Some(Expression::Integer { value: 42 }),
                },
            ]
        );
    }

    #[test]
    fn if_without_else_has_an_empty_else_block() {
        let body = single_function_body("void f() { if (x) return 1; }");
        assert_eq!(
            body,
            vec![Instruction::If {
                condition: Expression::ident("x"),
                then_block: Block::new(vec![Instruction::Return {
                    expression: Expression::Integer { value: 1 }
                }]),
                else_block: Block::default(),
            }]
        );
    }

    #[test]
    fn dangling_else_binds_to_the_nearest_if() {
        let body = single_function_body("void f() { if (a) if (b) x = 1; else x = 2; }");
        let Instruction::If {
            then_block,
            else_block,
            ..
        } = &body[0]
        else {
            panic!("expected if");
        };

        assert!(else_block.is_empty());
        assert!(matches!(
            &then_block.instructions[0],
            Instruction::If { else_block, .. } if !else_block.is_empty()
        ));
    }

    #[test]
    fn while_and_blocks() {
        let body = single_function_body("void f() { while (i < 10) { i = i + 1; } { asm(\"nop\"); } }");
        assert!(matches!(&body[0], Instruction::While { body, .. } if body.instructions.len() == 1));
        assert_eq!(
            body[1],
            Instruction::Block(Block::new(vec![Instruction::Assembly {
                assembly: "nop".to_string()
            }]))
        );
    }

    #[test]
    fn expression_statement() {
        let body = single_function_body("void f() { x = y + 1; }");
        assert_eq!(
            body,
            vec![Instruction::Expression {
                expression: Expression::affectation(
                    Expression::ident("x"),
                    Expression::binary(
                        BinaryOperator::Add,
                        Expression::ident("y"),
                        Expression::Integer { value: 1 }
                    )
                )
            }]
        );
    }

    #[test]
    fn configured_widths_reach_the_tree() {
        let config = ParserConfig::with_sizes(TypeSizes {
            int: 8,
            pointer: 8,
            ..TypeSizes::default()
        });
        let program = parse_program_with("int* p;", config).expect("parse failed");
        assert_eq!(
            program.entities[0],
            Entity::Global {
                ty: Type::pointer(Type::Integer { size: 8 }, 8),
                name: "p".to_string()
            }
        );
    }

    #[test]
    fn end_of_input_mid_expression() {
        let err = parse_program("int f() { return 1 +").unwrap_err();
        assert_eq!(err, Error::syntax_error(1, ""));
        assert!(err.is_end_of_file());
        assert!(err.to_string().contains("unexpected end of file"));
    }

    #[test]
    fn unexpected_token_is_reported_with_its_line() {
        let err = parse_program("int x;\nint y\nint z;").unwrap_err();
        assert_eq!(err, Error::syntax_error(3, "int"));
        assert_eq!(err.to_string(), "syntax error line 3, unexpected token \"int\"");
    }

    #[test]
    fn lexical_errors_pass_through() {
        let err = parse_program("int x;\nint $y;").unwrap_err();
        assert_eq!(err, Error::lexical_error(2, "$"));
    }

    #[test]
    fn out_of_range_literal_is_a_syntax_error() {
        let err = parse_program("int f() { return 99999999999; }").unwrap_err();
        assert_eq!(err, Error::syntax_error(1, "99999999999"));
    }

    #[test]
    fn missing_function_body() {
        assert_eq!(
            parse_program("int f();").unwrap_err(),
            Error::syntax_error(1, ";")
        );
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        assert!(parse_program("  // nothing\n").expect("parse failed").entities.is_empty());
    }
}
