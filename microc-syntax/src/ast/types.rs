/// Value types. Every type but `Void` carries its storage width in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Void,
    Integer { size: usize },
    Boolean { size: usize },
    Char { size: usize },
    Null { size: usize },
    Pointer { pointee: Box<Type>, size: usize },
}

pub trait TypeVisitor<R> {
    fn visit_void_type(&mut self) -> R;
    fn visit_integer_type(&mut self, size: usize) -> R;
    fn visit_boolean_type(&mut self, size: usize) -> R;
    fn visit_char_type(&mut self, size: usize) -> R;
    fn visit_null_type(&mut self, size: usize) -> R;
    fn visit_pointer_type(&mut self, pointee: &Type, size: usize) -> R;
}

impl Type {
    pub fn pointer(pointee: Type, size: usize) -> Self {
        Self::Pointer {
            pointee: Box::new(pointee),
            size,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Type::Void => 0,
            Type::Integer { size }
            | Type::Boolean { size }
            | Type::Char { size }
            | Type::Null { size }
            | Type::Pointer { size, .. } => *size,
        }
    }

    pub fn pointee(&self) -> Option<&Type> {
        match self {
            Type::Pointer { pointee, .. } => Some(pointee),
            _ => None,
        }
    }

    pub fn accept<R>(&self, visitor: &mut dyn TypeVisitor<R>) -> R {
        match self {
            Type::Void => visitor.visit_void_type(),
            Type::Integer { size } => visitor.visit_integer_type(*size),
            Type::Boolean { size } => visitor.visit_boolean_type(*size),
            Type::Char { size } => visitor.visit_char_type(*size),
            Type::Null { size } => visitor.visit_null_type(*size),
            Type::Pointer { pointee, size } => visitor.visit_pointer_type(pointee, *size),
        }
    }
}
