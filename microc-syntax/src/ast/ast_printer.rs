use std::fmt::{self, Write};

use super::{
    entity::{Entity, EntityVisitor, Function},
    expr::{BinaryOperator, Expression, ExpressionVisitor, UnaryOperator},
    instr::{Block, Instruction, InstructionVisitor},
    types::{Type, TypeVisitor},
    Program,
};

/// Renders a tree as C-like text into any [`fmt::Write`] sink.
///
/// Expressions come out fully parenthesized and string literals are written
/// back without escaping, so the output is meant for reading, not for
/// re-parsing.
pub struct TreePrinter<'a, W: Write + ?Sized> {
    out: &'a mut W,
    indent_level: usize,
}

impl<'a, W: Write + ?Sized> TreePrinter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            indent_level: 0,
        }
    }

    pub fn print_program(&mut self, program: &Program) -> fmt::Result {
        self.out.write_str("program {\n")?;
        self.nested(|printer| {
            for entity in &program.entities {
                printer.indent()?;
                entity.accept(printer)?;
                printer.out.write_char('\n')?;
            }
            Ok(())
        })?;
        self.out.write_str("}\n")
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..self.indent_level {
            self.out.write_str("    ")?;
        }
        Ok(())
    }

    fn nested<F>(&mut self, f: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.indent_level += 1;
        let result = f(self);
        self.indent_level -= 1;
        result
    }

    /// `{`, one instruction per line, then `}` at the current indentation.
    fn instructions(&mut self, instructions: &[Instruction]) -> fmt::Result {
        self.out.write_str("{\n")?;
        self.nested(|printer| {
            for instruction in instructions {
                printer.indent()?;
                instruction.accept(printer)?;
                printer.out.write_char('\n')?;
            }
            Ok(())
        })?;
        self.indent()?;
        self.out.write_char('}')
    }

    fn parenthesized(&mut self, expression: &Expression) -> fmt::Result {
        self.out.write_char('(')?;
        expression.accept(self)?;
        self.out.write_char(')')
    }

    fn assembly(&mut self, assembly: &str) -> fmt::Result {
        write!(self.out, "asm(\"{assembly}\");")
    }
}

impl<W: Write + ?Sized> EntityVisitor<fmt::Result> for TreePrinter<'_, W> {
    fn visit_assembly_entity(&mut self, assembly: &str) -> fmt::Result {
        self.assembly(assembly)
    }

    fn visit_global_entity(&mut self, ty: &Type, name: &str) -> fmt::Result {
        ty.accept(self)?;
        write!(self.out, " {name};")
    }

    fn visit_function_entity(&mut self, function: &Function) -> fmt::Result {
        function.return_type.accept(self)?;
        write!(self.out, " {}(", function.name)?;

        for (i, argument) in function.arguments.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            argument.ty.accept(self)?;
            write!(self.out, " {}", argument.name)?;
        }

        self.out.write_str(") ")?;
        self.instructions(&function.instructions)
    }
}

impl<W: Write + ?Sized> InstructionVisitor<fmt::Result> for TreePrinter<'_, W> {
    fn visit_block_instr(&mut self, block: &Block) -> fmt::Result {
        self.instructions(&block.instructions)
    }

    fn visit_declaration_instr(
        &mut self,
        ty: &Type,
        name: &str,
        initializer: Option<&Expression>,
    ) -> fmt::Result {
        ty.accept(self)?;
        write!(self.out, " {name}")?;

        if let Some(init) = initializer {
            self.out.write_str(" = ")?;
            init.accept(self)?;
        }

        self.out.write_char(';')
    }

    fn visit_expression_instr(&mut self, expression: &Expression) -> fmt::Result {
        expression.accept(self)?;
        self.out.write_char(';')
    }

    fn visit_if_instr(
        &mut self,
        condition: &Expression,
        then_block: &Block,
        else_block: &Block,
    ) -> fmt::Result {
        self.out.write_str("if ")?;
        self.parenthesized(condition)?;
        self.out.write_char(' ')?;
        self.instructions(&then_block.instructions)?;
        self.out.write_str(" else ")?;
        self.instructions(&else_block.instructions)
    }

    fn visit_while_instr(&mut self, condition: &Expression, body: &Block) -> fmt::Result {
        self.out.write_str("while ")?;
        self.parenthesized(condition)?;
        self.out.write_char(' ')?;
        self.instructions(&body.instructions)
    }

    fn visit_return_instr(&mut self, expression: &Expression) -> fmt::Result {
        self.out.write_str("return ")?;
        expression.accept(self)?;
        self.out.write_char(';')
    }

    fn visit_assembly_instr(&mut self, assembly: &str) -> fmt::Result {
        self.assembly(assembly)
    }
}

impl<W: Write + ?Sized> ExpressionVisitor<fmt::Result> for TreePrinter<'_, W> {
    fn visit_ident_expr(&mut self, name: &str) -> fmt::Result {
        self.out.write_str(name)
    }

    fn visit_integer_expr(&mut self, value: i32) -> fmt::Result {
        write!(self.out, "{value}")
    }

    fn visit_char_expr(&mut self, value: char) -> fmt::Result {
        match value {
            '\0' => self.out.write_str("'\\0'"),
            '\n' => self.out.write_str("'\\n'"),
            '\r' => self.out.write_str("'\\r'"),
            '\t' => self.out.write_str("'\\t'"),
            '\'' => self.out.write_str("'\\''"),
            other => write!(self.out, "'{other}'"),
        }
    }

    fn visit_string_expr(&mut self, value: &str) -> fmt::Result {
        write!(self.out, "\"{value}\"")
    }

    fn visit_true_expr(&mut self) -> fmt::Result {
        self.out.write_str("true")
    }

    fn visit_false_expr(&mut self) -> fmt::Result {
        self.out.write_str("false")
    }

    fn visit_null_expr(&mut self) -> fmt::Result {
        self.out.write_str("NULL")
    }

    fn visit_unary_expr(&mut self, op: UnaryOperator, expression: &Expression) -> fmt::Result {
        self.out.write_str(op.as_str())?;
        self.parenthesized(expression)
    }

    fn visit_binary_expr(
        &mut self,
        op: BinaryOperator,
        left: &Expression,
        right: &Expression,
    ) -> fmt::Result {
        self.parenthesized(left)?;
        self.out.write_str(op.as_str())?;
        self.parenthesized(right)
    }

    fn visit_affectation_expr(&mut self, affected: &Expression, value: &Expression) -> fmt::Result {
        affected.accept(self)?;
        self.out.write_str(" = ")?;
        value.accept(self)
    }

    fn visit_cast_expr(&mut self, ty: &Type, expression: &Expression) -> fmt::Result {
        self.out.write_char('(')?;
        ty.accept(self)?;
        self.out.write_str(") ")?;
        expression.accept(self)
    }

    fn visit_access_expr(&mut self, expression: &Expression) -> fmt::Result {
        self.out.write_char('*')?;
        self.parenthesized(expression)
    }

    fn visit_call_expr(&mut self, function_name: &str, arguments: &[Expression]) -> fmt::Result {
        write!(self.out, "{function_name}(")?;

        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            argument.accept(self)?;
        }

        self.out.write_char(')')
    }
}

impl<W: Write + ?Sized> TypeVisitor<fmt::Result> for TreePrinter<'_, W> {
    fn visit_void_type(&mut self) -> fmt::Result {
        self.out.write_str("void")
    }

    fn visit_integer_type(&mut self, _size: usize) -> fmt::Result {
        self.out.write_str("int")
    }

    fn visit_boolean_type(&mut self, _size: usize) -> fmt::Result {
        self.out.write_str("bool")
    }

    fn visit_char_type(&mut self, _size: usize) -> fmt::Result {
        self.out.write_str("char")
    }

    fn visit_null_type(&mut self, _size: usize) -> fmt::Result {
        self.out.write_str("null")
    }

    fn visit_pointer_type(&mut self, pointee: &Type, _size: usize) -> fmt::Result {
        self.out.write_str("pointer on ")?;
        pointee.accept(self)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::new(f).print_program(self)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut TreePrinter::new(f))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut TreePrinter::new(f))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut TreePrinter::new(f))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut TreePrinter::new(f))
    }
}
