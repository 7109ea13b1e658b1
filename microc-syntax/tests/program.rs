// End-to-end tests: building trees, printing them, and walking them.

use microc_syntax::{
    ast::{
        BinaryOperator, Block, Entity, EntityVisitor, Expression, ExpressionVisitor, Function,
        Instruction, InstructionVisitor, Program, Type, TypeVisitor, UnaryOperator,
    },
    parse_program, Error,
};

fn sample_program() -> Program {
    let mut program = Program::new();
    program.push(Entity::Assembly {
        assembly: "mov 0, %rax".to_string(),
    });
    program.push(Entity::Global {
        ty: Type::Integer { size: 4 },
        name: "x".to_string(),
    });

    let mut function = Function::new(Type::Integer { size: 4 }, "f");
    function.instructions.push(Instruction::Declaration {
        ty: Type::pointer(Type::Char { size: 1 }, 4),
        name: "toto".to_string(),
        initializer: Some(Expression::Integer { value: 42 }),
    });
    function.instructions.push(Instruction::Expression {
        expression: Expression::affectation(
            Expression::ident("toto"),
            Expression::binary(
                BinaryOperator::Add,
                Expression::ident("x"),
                Expression::Integer { value: 1 },
            ),
        ),
    });
    program.push(Entity::Function(function));

    program
}

#[test]
fn construction_to_print() {
    let printed = sample_program().to_string();

    assert!(printed.starts_with("program {\n"));
    assert!(printed.contains("asm(\"mov 0, %rax\");"));
    assert!(printed.contains("int x;"));
    assert!(printed.contains("int f("));
    assert!(printed.contains("pointer on char toto = 42;"));
    assert!(printed.contains("toto = (x)+(1);"));
    assert!(printed.ends_with("}\n"));
}

#[test]
fn parse_to_print() {
    let source = r#"
        asm("mov 0, %rax");
        int x;

        int f(char* s, int n) {
            char* toto = 42;
            if (n > 0) {
                toto = s;
            } else
                return -1;
            while (*s != '\0') s = s + 1;
            return (int) toto;
        }
    "#;

    let printed = parse_program(source).expect("parse failed").to_string();
    let expected = "\
program {
    asm(\"mov 0, %rax\");
    int x;
    int f(pointer on char s, int n) {
        pointer on char toto = 42;
        if ((n)>(0)) {
            toto = s;
        } else {
            return -(1);
        }
        while ((*(s))!=('\\0')) {
            s = (s)+(1);
        }
        return (int) toto;
    }
}
";
    assert_eq!(printed, expected);
}

#[test]
fn truncated_source_reports_end_of_file() {
    let err = parse_program("int main() {\n    return f(1,").unwrap_err();

    assert!(matches!(err, Error::SyntaxError { line: 2, ref matched } if matched.is_empty()));
    assert_eq!(err.to_string(), "syntax error line 2, unexpected end of file");
}

/// Counts every node reached through the four visitor families.
#[derive(Default)]
struct NodeCounter {
    entities: usize,
    instructions: usize,
    expressions: usize,
    types: usize,
}

impl NodeCounter {
    fn block(&mut self, block: &Block) {
        for instruction in &block.instructions {
            instruction.accept(self);
        }
    }

    fn total(&self) -> usize {
        self.entities + self.instructions + self.expressions + self.types
    }
}

impl EntityVisitor<()> for NodeCounter {
    fn visit_assembly_entity(&mut self, _assembly: &str) {
        self.entities += 1;
    }

    fn visit_global_entity(&mut self, ty: &Type, _name: &str) {
        self.entities += 1;
        ty.accept(self);
    }

    fn visit_function_entity(&mut self, function: &Function) {
        self.entities += 1;
        function.return_type.accept(self);
        for argument in &function.arguments {
            argument.ty.accept(self);
        }
        for instruction in &function.instructions {
            instruction.accept(self);
        }
    }
}

impl InstructionVisitor<()> for NodeCounter {
    fn visit_block_instr(&mut self, block: &Block) {
        self.instructions += 1;
        self.block(block);
    }

    fn visit_declaration_instr(&mut self, ty: &Type, _name: &str, initializer: Option<&Expression>) {
        self.instructions += 1;
        ty.accept(self);
        if let Some(init) = initializer {
            init.accept(self);
        }
    }

    fn visit_expression_instr(&mut self, expression: &Expression) {
        self.instructions += 1;
        expression.accept(self);
    }

    fn visit_if_instr(&mut self, condition: &Expression, then_block: &Block, else_block: &Block) {
        self.instructions += 1;
        condition.accept(self);
        self.block(then_block);
        self.block(else_block);
    }

    fn visit_while_instr(&mut self, condition: &Expression, body: &Block) {
        self.instructions += 1;
        condition.accept(self);
        self.block(body);
    }

    fn visit_return_instr(&mut self, expression: &Expression) {
        self.instructions += 1;
        expression.accept(self);
    }

    fn visit_assembly_instr(&mut self, _assembly: &str) {
        self.instructions += 1;
    }
}

impl ExpressionVisitor<()> for NodeCounter {
    fn visit_ident_expr(&mut self, _name: &str) {
        self.expressions += 1;
    }

    fn visit_integer_expr(&mut self, _value: i32) {
        self.expressions += 1;
    }

    fn visit_char_expr(&mut self, _value: char) {
        self.expressions += 1;
    }

    fn visit_string_expr(&mut self, _value: &str) {
        self.expressions += 1;
    }

    fn visit_true_expr(&mut self) {
        self.expressions += 1;
    }

    fn visit_false_expr(&mut self) {
        self.expressions += 1;
    }

    fn visit_null_expr(&mut self) {
        self.expressions += 1;
    }

    fn visit_unary_expr(&mut self, _op: UnaryOperator, expression: &Expression) {
        self.expressions += 1;
        expression.accept(self);
    }

    fn visit_binary_expr(&mut self, _op: BinaryOperator, left: &Expression, right: &Expression) {
        self.expressions += 1;
        left.accept(self);
        right.accept(self);
    }

    fn visit_affectation_expr(&mut self, affected: &Expression, value: &Expression) {
        self.expressions += 1;
        affected.accept(self);
        value.accept(self);
    }

    fn visit_cast_expr(&mut self, ty: &Type, expression: &Expression) {
        self.expressions += 1;
        ty.accept(self);
        expression.accept(self);
    }

    fn visit_access_expr(&mut self, expression: &Expression) {
        self.expressions += 1;
        expression.accept(self);
    }

    fn visit_call_expr(&mut self, _function_name: &str, arguments: &[Expression]) {
        self.expressions += 1;
        for argument in arguments {
            argument.accept(self);
        }
    }
}

impl TypeVisitor<()> for NodeCounter {
    fn visit_void_type(&mut self) {
        self.types += 1;
    }

    fn visit_integer_type(&mut self, _size: usize) {
        self.types += 1;
    }

    fn visit_boolean_type(&mut self, _size: usize) {
        self.types += 1;
    }

    fn visit_char_type(&mut self, _size: usize) {
        self.types += 1;
    }

    fn visit_null_type(&mut self, _size: usize) {
        self.types += 1;
    }

    fn visit_pointer_type(&mut self, pointee: &Type, _size: usize) {
        self.types += 1;
        pointee.accept(self);
    }
}

#[test]
fn traversal_reaches_each_node_once() {
    let mut counter = NodeCounter::default();
    for entity in &sample_program().entities {
        entity.accept(&mut counter);
    }

    // asm, global, function
    assert_eq!(counter.entities, 3);
    assert_eq!(counter.instructions, 2);
    // 42; toto = x + 1 is affectation, ident, binary, ident, integer
    assert_eq!(counter.expressions, 6);
    // int (global), int (return), pointer, char
    assert_eq!(counter.types, 4);
    assert_eq!(counter.total(), 15);
}

#[test]
fn traversal_covers_every_kind() {
    let source = r#"
        asm("nop");
        bool flag;
        void g(int a, char** b) {
            { int c; }
            if (!a) asm("hlt"); else c = ~a;
            while (true) return g(*b, "s", 'c', false, NULL, (bool) -a);
        }
    "#;
    let program = parse_program(source).expect("parse failed");

    let mut counter = NodeCounter::default();
    for entity in &program.entities {
        entity.accept(&mut counter);
    }

    assert_eq!(counter.entities, 3);
    // block, declaration, if, asm, expression, while, return
    assert_eq!(counter.instructions, 7);
    // !a: 2, c = ~a: 4, true: 1,
    // g(...): call + access + b + "s" + 'c' + false + NULL + cast + -a (2) = 10
    assert_eq!(counter.expressions, 17);
    // bool, void, int, pointer pointer char (3), int (c), bool (cast)
    assert_eq!(counter.types, 8);
}
