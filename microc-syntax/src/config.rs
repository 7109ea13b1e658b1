use crate::ast::Type;

/// Storage widths, in bytes, stamped into the types the parser builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSizes {
    pub int: usize,
    pub bool: usize,
    pub char: usize,
    pub pointer: usize,
}

impl Default for TypeSizes {
    fn default() -> Self {
        Self {
            int: 4,
            bool: 1,
            char: 1,
            pointer: 4,
        }
    }
}

impl TypeSizes {
    pub fn integer(&self) -> Type {
        Type::Integer { size: self.int }
    }

    pub fn boolean(&self) -> Type {
        Type::Boolean { size: self.bool }
    }

    pub fn character(&self) -> Type {
        Type::Char { size: self.char }
    }

    /// `NULL` is as wide as a pointer.
    pub fn null(&self) -> Type {
        Type::Null { size: self.pointer }
    }

    pub fn pointer_to(&self, pointee: Type) -> Type {
        Type::pointer(pointee, self.pointer)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub sizes: TypeSizes,
}

impl ParserConfig {
    pub fn with_sizes(sizes: TypeSizes) -> Self {
        Self { sizes }
    }
}
