//! Plain-text rendering of token streams and ASTs.
//!
//! Debugging output only: neither format is stable, and nothing here is
//! meant to round-trip back through the lexer.

use super::{
    ast::{
        AssignStmt, BuiltinType, Block, CallExpr, CallStmt, Expr, FunctionDecl, Identifier,
        LiteralExpr, Program, ReturnStmt, Stmt, VarDecl,
    },
    token::Token,
};

/// One line per token: `line:column` and the lexeme, with the kind name
/// appended when it differs from the lexeme (symbols print bare).
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let kind_name = token.kind.as_str();
        let text = if token.lexeme == kind_name {
            token.lexeme.to_string()
        } else {
            format!("{:<10} ({})", token.lexeme, kind_name)
        };
        out.push_str(&format!(
            "{:>2}:{:>2}    {}\n",
            token.pos.line, token.pos.column, text
        ));
    }
    out
}

/// Depth-first AST dump, two spaces of indentation per nesting level.
pub fn render_ast(program: &Program) -> String {
    let mut printer = AstPrinter::new();
    printer.print_program(program);
    printer.out
}

/// Tree walker carrying the output buffer and the indentation level.
struct AstPrinter {
    out: String,
    level: usize,
}

impl AstPrinter {
    fn new() -> Self {
        Self {
            out: String::new(),
            level: 0,
        }
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        self.level -= 1;
    }

    fn print_indent(&mut self) {
        for _ in 0..self.level {
            self.out.push_str("  ");
        }
    }

    fn print_program(&mut self, program: &Program) {
        self.out.push_str("Program\n");
        self.indent();
        for stmt in &program.declarations {
            self.print_stmt(stmt);
        }
        self.dedent();
    }

    fn print_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return(node) => self.print_return(node),
            Stmt::Assign(node) => self.print_assign(node),
            Stmt::Call(node) => self.print_call_stmt(node),
            Stmt::Var(node) => self.print_var_decl(node),
            Stmt::Function(node) => self.print_function_decl(node),
        }
    }

    fn print_return(&mut self, node: &ReturnStmt) {
        self.print_indent();
        self.out.push_str("ReturnStmt");
        match &node.value {
            Some(value) => {
                self.out.push(' ');
                self.print_expr(value);
            }
            None => self.out.push_str(" (void)"),
        }
        self.out.push('\n');
    }

    fn print_assign(&mut self, node: &AssignStmt) {
        self.print_indent();
        self.out.push_str("AssignStmt ");
        self.print_expr(&node.target);
        self.out.push_str(" = ");
        self.print_expr(&node.value);
        self.out.push('\n');
    }

    fn print_call_stmt(&mut self, node: &CallStmt) {
        self.print_indent();
        self.out.push_str("CallStmt ");
        self.print_call(&node.call);
        self.out.push('\n');
    }

    fn print_var_decl(&mut self, node: &VarDecl) {
        self.print_indent();
        self.out
            .push_str(&format!("VarDecl {}: {}", node.name.name, node.ty.as_str()));
        if let Some(init) = &node.init {
            self.out.push_str(" = ");
            self.print_expr(init);
        }
        self.out.push('\n');
    }

    fn print_function_decl(&mut self, node: &FunctionDecl) {
        self.print_indent();
        self.out.push_str(&format!(
            "FunctionDecl {} -> {}\n",
            node.name.name,
            node.return_type.as_str()
        ));
        self.indent();
        self.print_indent();
        self.out.push_str("Params:\n");
        self.indent();
        for param in &node.params {
            self.print_indent();
            self.out
                .push_str(&format!("Param {}: {}\n", param.name.name, param.ty.as_str()));
        }
        self.dedent();
        self.print_indent();
        self.out.push_str("Body:\n");
        self.print_block(&node.body);
        self.dedent();
    }

    fn print_block(&mut self, block: &Block) {
        self.indent();
        for stmt in &block.stmts {
            self.print_stmt(stmt);
        }
        self.dedent();
    }

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(node) => self.print_identifier(node),
            Expr::Literal(node) => self.print_literal(node),
            Expr::Call(node) => self.print_call(node),
        }
    }

    fn print_identifier(&mut self, node: &Identifier) {
        self.out.push_str(node.name);
    }

    fn print_literal(&mut self, node: &LiteralExpr) {
        match node.kind {
            BuiltinType::String => {
                self.out.push('"');
                self.out.push_str(node.value);
                self.out.push('"');
            }
            _ => self.out.push_str(node.value),
        }
    }

    fn print_call(&mut self, node: &CallExpr) {
        self.out.push_str(node.callee.name);
        self.out.push('(');
        for (i, arg) in node.args.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.print_expr(arg);
        }
        self.out.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer::Lexer, parser::Parser};

    fn parse(src: &'static str) -> Program<'static> {
        let tokens = Lexer::new(src).tokenize().unwrap();
        Parser::new(tokens).parse().unwrap()
    }

    #[test]
    fn test_render_tokens() {
        let tokens = Lexer::new("let x = 5;").tokenize().unwrap();
        let rendered = render_tokens(&tokens);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        // keywords and literals carry their kind name
        assert!(lines[0].starts_with(" 1: 1"));
        assert!(lines[0].contains("let"));
        assert!(lines[0].contains("(Let)"));
        assert!(lines[1].contains("(Identifier)"));
        assert!(lines[3].contains("(Int Literal)"));
        // symbols print bare, no kind name
        assert_eq!(lines[2], " 1: 7    =");
        assert_eq!(lines[4], " 1:10    ;");
        assert!(lines[5].starts_with(" 1:11"));
        assert!(lines[5].contains("(EOF)"));
    }

    #[test]
    fn test_render_ast() {
        let program = parse(
            "let x: int = 5;\n\
             fn add(a: int, b: int) -> int {\n\
                 x = add(x, 1);\n\
                 print(\"hi\");\n\
                 return a;\n\
             }\n",
        );
        let expected = "\
Program
  VarDecl x: int = 5
  FunctionDecl add -> int
    Params:
      Param a: int
      Param b: int
    Body:
      AssignStmt x = add(x, 1)
      CallStmt print(\"hi\")
      ReturnStmt a
";
        assert_eq!(render_ast(&program), expected);
    }

    #[test]
    fn test_render_ast_void_return() {
        let program = parse("fn f() { return; }");
        let expected = "\
Program
  FunctionDecl f -> unit
    Params:
    Body:
      ReturnStmt (void)
";
        assert_eq!(render_ast(&program), expected);
    }
}
