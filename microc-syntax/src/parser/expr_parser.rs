use crate::{
    ast::{BinaryOperator, Expression, UnaryOperator},
    errors::Result,
    literal,
    tokenizer::TokenType,
};

use super::parser::Parser;

type Level<'a> = fn(&mut Parser<'a>) -> Result<Expression>;

impl<'a> Parser<'a> {
    pub(super) fn expression(&mut self) -> Result<Expression> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expression> {
        let expr = self.logic_or()?;

        if !self.stream.check(TokenType::EQUAL) {
            return Ok(expr);
        }

        if !expr.is_assignable() {
            return Err(self.stream.unexpected());
        }

        self.stream.advance()?;
        let value = self.assignment()?;
        Ok(Expression::affectation(expr, value))
    }

    /// Left associative chain of `next` operands joined by `operators`.
    fn binary(&mut self, operators: &[TokenType], next: Level<'a>) -> Result<Expression> {
        let mut expr = next(self)?;

        while self.stream.match_tokens(operators)? {
            let op = BinaryOperator::try_from(self.stream.previous().token_type)?;
            let right = next(self)?;
            expr = Expression::binary(op, expr, right);
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expression> {
        self.binary(&[TokenType::OR], Self::logic_and)
    }

    fn logic_and(&mut self) -> Result<Expression> {
        self.binary(&[TokenType::AND], Self::bit_or)
    }

    fn bit_or(&mut self) -> Result<Expression> {
        self.binary(&[TokenType::PIPE], Self::bit_xor)
    }

    fn bit_xor(&mut self) -> Result<Expression> {
        self.binary(&[TokenType::CARET], Self::bit_and)
    }

    fn bit_and(&mut self) -> Result<Expression> {
        self.binary(&[TokenType::AMPERSAND], Self::equality)
    }

    fn equality(&mut self) -> Result<Expression> {
        self.binary(
            &[TokenType::EQUAL_EQUAL, TokenType::BANG_EQUAL],
            Self::relational,
        )
    }

    fn relational(&mut self) -> Result<Expression> {
        self.binary(
            &[
                TokenType::LESS,
                TokenType::LESS_EQUAL,
                TokenType::GREATER,
                TokenType::GREATER_EQUAL,
            ],
            Self::shift,
        )
    }

    fn shift(&mut self) -> Result<Expression> {
        self.binary(
            &[TokenType::LESS_LESS, TokenType::GREATER_GREATER],
            Self::additive,
        )
    }

    fn additive(&mut self) -> Result<Expression> {
        self.binary(&[TokenType::PLUS, TokenType::MINUS], Self::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<Expression> {
        self.binary(
            &[TokenType::STAR, TokenType::SLASH, TokenType::PERCENT],
            Self::unary,
        )
    }

    fn unary(&mut self) -> Result<Expression> {
        if self.stream.match_tokens(&[
            TokenType::PLUS,
            TokenType::MINUS,
            TokenType::BANG,
            TokenType::TILDE,
        ])? {
            let op = UnaryOperator::try_from(self.stream.previous().token_type)?;
            let operand = self.unary()?;
            return Ok(Expression::unary(op, operand));
        }

        if self.stream.match_tokens(&[TokenType::STAR])? {
            let operand = self.unary()?;
            return Ok(Expression::access(operand));
        }

        if self.stream.match_tokens(&[TokenType::LEFT_PAREN])? {
            // a type keyword right after the parenthesis makes it a cast
            if self.stream.peek().starts_type() {
                let ty = self.type_name()?;
                self.consume(TokenType::RIGHT_PAREN)?;
                let operand = self.unary()?;
                return Ok(Expression::cast(ty, operand));
            }

            let expr = self.expression()?;
            self.consume(TokenType::RIGHT_PAREN)?;
            return Ok(expr);
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expression> {
        if self.stream.match_tokens(&[TokenType::IDENTIFIER])? {
            let name = self.stream.previous().lexeme.clone();
            if self.stream.match_tokens(&[TokenType::LEFT_PAREN])? {
                return self.finish_call(name);
            }
            return Ok(Expression::Ident { name });
        }

        let token = self.stream.peek_token().clone();
        let expr = match token.token_type {
            TokenType::INTEGER => Expression::Integer {
                value: literal::sanitize_integer(&token.lexeme)
                    .map_err(|e| Self::literal_error(&token, e))?,
            },
            TokenType::CHARACTER => Expression::Char {
                value: literal::sanitize_char(&token.lexeme)
                    .map_err(|e| Self::literal_error(&token, e))?,
            },
            TokenType::STRING => Expression::String {
                value: literal::sanitize_string(&token.lexeme)
                    .map_err(|e| Self::literal_error(&token, e))?,
            },
            TokenType::TRUE => Expression::True,
            TokenType::FALSE => Expression::False,
            TokenType::NULL => Expression::Null,
            _ => return Err(self.stream.unexpected()),
        };

        self.stream.advance()?;
        Ok(expr)
    }

    /// Argument list after `name(`, closing parenthesis included.
    fn finish_call(&mut self, function_name: String) -> Result<Expression> {
        let mut arguments = Vec::new();

        if !self.stream.match_tokens(&[TokenType::RIGHT_PAREN])? {
            loop {
                arguments.push(self.expression()?);
                if !self.stream.match_tokens(&[TokenType::COMMA])? {
                    break;
                }
            }
            self.consume(TokenType::RIGHT_PAREN)?;
        }

        Ok(Expression::call(function_name, arguments))
    }
}
