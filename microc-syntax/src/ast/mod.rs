//! The syntax tree of a microc program.
//!
//! Four node families (entities, instructions, expressions, types), each with
//! its own visitor trait. Every node is owned by exactly one parent.

pub(crate) mod ast_printer;
pub(crate) mod entity;
pub(crate) mod expr;
pub(crate) mod instr;
pub(crate) mod types;

pub use ast_printer::TreePrinter;
pub use entity::{Entity, EntityVisitor, Function, FunctionArgument};
pub use expr::{BinaryOperator, Expression, ExpressionVisitor, UnaryOperator};
pub use instr::{Block, Instruction, InstructionVisitor};
pub use types::{Type, TypeVisitor};

/// The root of the tree. Entities are kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub entities: Vec<Entity>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.entities.iter().filter_map(|entity| match entity {
            Entity::Function(function) => Some(function),
            _ => None,
        })
    }
}
