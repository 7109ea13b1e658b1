use super::{instr::Instruction, types::Type};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgument {
    pub ty: Type,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub return_type: Type,
    pub name: String,
    pub arguments: Vec<FunctionArgument>,
    pub instructions: Vec<Instruction>,
}

/// A top-level member of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Assembly { assembly: String },
    Global { ty: Type, name: String },
    Function(Function),
}

pub trait EntityVisitor<R> {
    fn visit_assembly_entity(&mut self, assembly: &str) -> R;
    fn visit_global_entity(&mut self, ty: &Type, name: &str) -> R;
    fn visit_function_entity(&mut self, function: &Function) -> R;
}

impl Function {
    pub fn new(return_type: Type, name: impl Into<String>) -> Self {
        Self {
            return_type,
            name: name.into(),
            arguments: Vec::new(),
            instructions: Vec::new(),
        }
    }
}

impl Entity {
    pub fn name(&self) -> Option<&str> {
        match self {
            Entity::Assembly { .. } => None,
            Entity::Global { name, .. } => Some(name),
            Entity::Function(function) => Some(&function.name),
        }
    }

    pub fn accept<R>(&self, visitor: &mut dyn EntityVisitor<R>) -> R {
        match self {
            Entity::Assembly { assembly } => visitor.visit_assembly_entity(assembly),
            Entity::Global { ty, name } => visitor.visit_global_entity(ty, name),
            Entity::Function(function) => visitor.visit_function_entity(function),
        }
    }
}
