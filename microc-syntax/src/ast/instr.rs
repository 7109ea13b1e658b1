use super::{expr::Expression, types::Type};

/// An ordered list of instructions, also used as the arms of `if` and the
/// body of `while`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Block(Block),
    Declaration {
        ty: Type,
        name: String,
        initializer: Option<Expression>,
    },
    Expression {
        expression: Expression,
    },
    If {
        condition: Expression,
        then_block: Block,
        // empty when the source has no else
        else_block: Block,
    },
    While {
        condition: Expression,
        body: Block,
    },
    Return {
        expression: Expression,
    },
    Assembly {
        assembly: String,
    },
}

pub trait InstructionVisitor<R> {
    fn visit_block_instr(&mut self, block: &Block) -> R;
    fn visit_declaration_instr(
        &mut self,
        ty: &Type,
        name: &str,
        initializer: Option<&Expression>,
    ) -> R;
    fn visit_expression_instr(&mut self, expression: &Expression) -> R;
    fn visit_if_instr(&mut self, condition: &Expression, then_block: &Block, else_block: &Block)
        -> R;
    fn visit_while_instr(&mut self, condition: &Expression, body: &Block) -> R;
    fn visit_return_instr(&mut self, expression: &Expression) -> R;
    fn visit_assembly_instr(&mut self, assembly: &str) -> R;
}

impl Block {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl From<Instruction> for Block {
    fn from(instruction: Instruction) -> Self {
        match instruction {
            Instruction::Block(block) => block,
            other => Block::new(vec![other]),
        }
    }
}

impl Instruction {
    pub fn accept<R>(&self, visitor: &mut dyn InstructionVisitor<R>) -> R {
        match self {
            Instruction::Block(block) => visitor.visit_block_instr(block),
            Instruction::Declaration {
                ty,
                name,
                initializer,
            } => visitor.visit_declaration_instr(ty, name, initializer.as_ref()),
            Instruction::Expression { expression } => visitor.visit_expression_instr(expression),
            Instruction::If {
                condition,
                then_block,
                else_block,
            } => visitor.visit_if_instr(condition, then_block, else_block),
            Instruction::While { condition, body } => visitor.visit_while_instr(condition, body),
            Instruction::Return { expression } => visitor.visit_return_instr(expression),
            Instruction::Assembly { assembly } => visitor.visit_assembly_instr(assembly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_instruction_becomes_a_block() {
        let ret = Instruction::Return {
            expression: Expression::Integer { value: 0 },
        };
        let block = Block::from(ret.clone());
        assert_eq!(block.instructions, vec![ret]);
    }

    #[test]
    fn nested_block_is_not_wrapped_twice() {
        let inner = Block::new(vec![Instruction::Assembly {
            assembly: "nop".to_string(),
        }]);
        assert_eq!(Block::from(Instruction::Block(inner.clone())), inner);
        assert!(Block::default().is_empty());
    }
}
