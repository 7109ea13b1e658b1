use std::fmt::Display;

use crate::{
    errors::{Error, Result},
    tokenizer::TokenType,
};

use super::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    BitNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Or,
    And,
    BitOr,
    BitAnd,
    BitXor,
    Eq,
    Neq,
    Inf,
    InfEq,
    Sup,
    SupEq,
    Lshift,
    Rshift,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 4] = [Self::Plus, Self::Minus, Self::Not, Self::BitNot];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 18] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Or,
        Self::And,
        Self::BitOr,
        Self::BitAnd,
        Self::BitXor,
        Self::Eq,
        Self::Neq,
        Self::Inf,
        Self::InfEq,
        Self::Sup,
        Self::SupEq,
        Self::Lshift,
        Self::Rshift,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Or => "||",
            Self::And => "&&",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Inf => "<",
            Self::InfEq => "<=",
            Self::Sup => ">",
            Self::SupEq => ">=",
            Self::Lshift => "<<",
            Self::Rshift => ">>",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<TokenType> for UnaryOperator {
    type Error = Error;

    fn try_from(token_type: TokenType) -> Result<Self> {
        match token_type {
            TokenType::PLUS => Ok(Self::Plus),
            TokenType::MINUS => Ok(Self::Minus),
            TokenType::BANG => Ok(Self::Not),
            TokenType::TILDE => Ok(Self::BitNot),
            other => Err(Error::internal(format!(
                "token {other} is not a unary operator"
            ))),
        }
    }
}

impl TryFrom<TokenType> for BinaryOperator {
    type Error = Error;

    fn try_from(token_type: TokenType) -> Result<Self> {
        match token_type {
            TokenType::PLUS => Ok(Self::Add),
            TokenType::MINUS => Ok(Self::Sub),
            TokenType::STAR => Ok(Self::Mul),
            TokenType::SLASH => Ok(Self::Div),
            TokenType::PERCENT => Ok(Self::Mod),
            TokenType::OR => Ok(Self::Or),
            TokenType::AND => Ok(Self::And),
            TokenType::PIPE => Ok(Self::BitOr),
            TokenType::AMPERSAND => Ok(Self::BitAnd),
            TokenType::CARET => Ok(Self::BitXor),
            TokenType::EQUAL_EQUAL => Ok(Self::Eq),
            TokenType::BANG_EQUAL => Ok(Self::Neq),
            TokenType::LESS => Ok(Self::Inf),
            TokenType::LESS_EQUAL => Ok(Self::InfEq),
            TokenType::GREATER => Ok(Self::Sup),
            TokenType::GREATER_EQUAL => Ok(Self::SupEq),
            TokenType::LESS_LESS => Ok(Self::Lshift),
            TokenType::GREATER_GREATER => Ok(Self::Rshift),
            other => Err(Error::internal(format!(
                "token {other} is not a binary operator"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Ident {
        name: String,
    },
    Integer {
        value: i32,
    },
    Char {
        value: char,
    },
    String {
        value: String,
    },
    True,
    False,
    Null,
    Unary {
        op: UnaryOperator,
        expression: Box<Expression>,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Affectation {
        affected: Box<Expression>,
        value: Box<Expression>,
    },
    Cast {
        ty: Type,
        expression: Box<Expression>,
    },
    /// Pointer dereference.
    Access {
        expression: Box<Expression>,
    },
    Call {
        function_name: String,
        arguments: Vec<Expression>,
    },
}

pub trait ExpressionVisitor<R> {
    fn visit_ident_expr(&mut self, name: &str) -> R;
    fn visit_integer_expr(&mut self, value: i32) -> R;
    fn visit_char_expr(&mut self, value: char) -> R;
    fn visit_string_expr(&mut self, value: &str) -> R;
    fn visit_true_expr(&mut self) -> R;
    fn visit_false_expr(&mut self) -> R;
    fn visit_null_expr(&mut self) -> R;
    fn visit_unary_expr(&mut self, op: UnaryOperator, expression: &Expression) -> R;
    fn visit_binary_expr(&mut self, op: BinaryOperator, left: &Expression, right: &Expression)
        -> R;
    fn visit_affectation_expr(&mut self, affected: &Expression, value: &Expression) -> R;
    fn visit_cast_expr(&mut self, ty: &Type, expression: &Expression) -> R;
    fn visit_access_expr(&mut self, expression: &Expression) -> R;
    fn visit_call_expr(&mut self, function_name: &str, arguments: &[Expression]) -> R;
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident { name: name.into() }
    }

    pub fn unary(op: UnaryOperator, expression: Expression) -> Self {
        Self::Unary {
            op,
            expression: Box::new(expression),
        }
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn affectation(affected: Expression, value: Expression) -> Self {
        Self::Affectation {
            affected: Box::new(affected),
            value: Box::new(value),
        }
    }

    pub fn cast(ty: Type, expression: Expression) -> Self {
        Self::Cast {
            ty,
            expression: Box::new(expression),
        }
    }

    pub fn access(expression: Expression) -> Self {
        Self::Access {
            expression: Box::new(expression),
        }
    }

    pub fn call(function_name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self::Call {
            function_name: function_name.into(),
            arguments,
        }
    }

    /// Whether the expression may stand on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Self::Ident { .. } | Self::Access { .. })
    }

    pub fn accept<R>(&self, visitor: &mut dyn ExpressionVisitor<R>) -> R {
        match self {
            Expression::Ident { name } => visitor.visit_ident_expr(name),
            Expression::Integer { value } => visitor.visit_integer_expr(*value),
            Expression::Char { value } => visitor.visit_char_expr(*value),
            Expression::String { value } => visitor.visit_string_expr(value),
            Expression::True => visitor.visit_true_expr(),
            Expression::False => visitor.visit_false_expr(),
            Expression::Null => visitor.visit_null_expr(),
            Expression::Unary { op, expression } => visitor.visit_unary_expr(*op, expression),
            Expression::Binary { op, left, right } => visitor.visit_binary_expr(*op, left, right),
            Expression::Affectation { affected, value } => {
                visitor.visit_affectation_expr(affected, value)
            }
            Expression::Cast { ty, expression } => visitor.visit_cast_expr(ty, expression),
            Expression::Access { expression } => visitor.visit_access_expr(expression),
            Expression::Call {
                function_name,
                arguments,
            } => visitor.visit_call_expr(function_name, arguments),
        }
    }
}
