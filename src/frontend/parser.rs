//! Recursive descent parser implementation.
//!
//! One method per grammar rule, a plain cursor over the token vector, and
//! at most one token of lookahead past the current one. The single extra
//! token decides the only ambiguous spot in the grammar: a statement that
//! starts with an identifier is an assignment if `=` follows and a call
//! if `(` follows. Parsing is all-or-nothing; the first violation aborts
//! with a `ParseError` and there is no recovery.

use super::{
    ast::{
        AssignStmt, Block, BuiltinType, CallExpr, CallStmt, Expr, FunctionDecl, Identifier,
        LiteralExpr, Param, Program, ReturnStmt, Stmt, Type, VarDecl,
    },
    position::Position,
    token::{Token, TokenKind},
};
use crate::{error::MiniError, T};

/// Most parser methods either produce an AST node or abort the parse.
type ParseResult<T> = Result<T, MiniError>;

/// The `Parser` consumes the token vector produced by the lexer and
/// builds the [`Program`]. One instance parses one token vector.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Fallback for out-of-range peeks, so lookahead never walks off the
    /// end of the vector.
    eof: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        let eof = Token::new(
            TokenKind::Eof,
            tokens.last().map(|t| t.pos).unwrap_or_else(Position::start),
            "",
        );
        Self {
            tokens,
            pos: 0,
            eof,
        }
    }

    /// Parse a whole program: top-level declarations up to `Eof`.
    pub fn parse(&mut self) -> ParseResult<Program<'a>> {
        let mut program = Program::new();
        while !self.check(T![eof]) {
            program.declarations.push(self.parse_declaration()?);
        }
        Ok(program)
    }

    //-------
    // HELPER
    //-------

    /// Token `offset` places ahead of the cursor; clamped, an
    /// out-of-range offset yields the `Eof` token.
    fn peek(&self, offset: usize) -> &Token<'a> {
        self.tokens.get(self.pos + offset).unwrap_or(&self.eof)
    }

    /// True if the current token has the expected kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek(0).kind == kind
    }

    /// True if the token `offset` places ahead has the expected kind.
    fn check_at(&self, kind: TokenKind, offset: usize) -> bool {
        self.peek(offset).kind == kind
    }

    /// Consume and return the current token.
    fn advance(&mut self) -> Token<'a> {
        let token = *self.peek(0);
        self.pos += 1;
        token
    }

    /// Consume the current token only if it has the expected kind.
    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Consume-or-fail. The message names the expected and found kinds
    /// plus the failing token's position.
    fn expect(&mut self, kind: TokenKind, context: &str) -> ParseResult<Token<'a>> {
        if !self.check(kind) {
            return Err(self.error(format!(
                "expected {:?}, got {:?} {}",
                kind,
                self.peek(0).kind,
                context
            )));
        }
        Ok(self.advance())
    }

    /// Parse error at the current token.
    fn error(&self, msg: impl Into<String>) -> MiniError {
        MiniError::ParseError {
            pos: self.peek(0).pos,
            msg: msg.into(),
        }
    }

    //------------
    // EXPRESSIONS
    //------------

    fn parse_identifier(&mut self) -> ParseResult<Identifier<'a>> {
        let token = self.expect(T![ident], "")?;
        Ok(Identifier { name: token.lexeme })
    }

    /// type = IDENT, matched against the built-in spellings; anything
    /// else is a custom type. No semantic lookup happens here.
    fn parse_type(&mut self) -> ParseResult<Type<'a>> {
        let token = self.expect(T![ident], "in type annotation")?;
        let builtin = match token.lexeme {
            "int" => Some(BuiltinType::Int),
            "float" => Some(BuiltinType::Float),
            "string" => Some(BuiltinType::String),
            "bool" => Some(BuiltinType::Bool),
            _ => None,
        };
        Ok(Type {
            builtin,
            name: Identifier { name: token.lexeme },
        })
    }

    fn parse_literal(&mut self) -> ParseResult<LiteralExpr<'a>> {
        let kind = match self.peek(0).kind {
            T![int] => BuiltinType::Int,
            T![float] => BuiltinType::Float,
            T![string] => BuiltinType::String,
            T![bool] => BuiltinType::Bool,
            _ => {
                let found = self.peek(0).lexeme;
                return Err(self.error(format!("Expected literal in expression: {}", found)));
            }
        };
        let token = self.advance();
        Ok(LiteralExpr {
            kind,
            value: token.lexeme,
        })
    }

    /// expression = primary. The grammar has no binary operators, so an
    /// expression is always a single primary.
    fn parse_expression(&mut self) -> ParseResult<Expr<'a>> {
        self.parse_primary_expression()
    }

    /// primary = IDENT | call | literal | "(" expression ")"
    fn parse_primary_expression(&mut self) -> ParseResult<Expr<'a>> {
        if self.accept(T!['(']) {
            let expr = self.parse_expression()?;
            self.expect(T![')'], "after expression")?;
            return Ok(expr);
        }

        if self.check(T![ident]) {
            // a call starts IDENT "(", a plain identifier doesn't
            if self.check_at(T!['('], 1) {
                return Ok(Expr::Call(self.parse_call_expression()?));
            }
            return Ok(Expr::Identifier(self.parse_identifier()?));
        }

        Ok(Expr::Literal(self.parse_literal()?))
    }

    fn parse_call_expression(&mut self) -> ParseResult<CallExpr<'a>> {
        let callee = self.parse_identifier()?;
        self.expect(T!['('], "after function name")?;
        let mut args = Vec::new();
        if !self.check(T![')']) {
            loop {
                args.push(self.parse_expression()?);
                if !self.accept(T![,]) {
                    break;
                }
            }
        }
        self.expect(T![')'], "after arguments")?;
        Ok(CallExpr { callee, args })
    }

    //-------------
    // DECLARATIONS
    //-------------

    /// declaration = var_decl | function_decl. Only these two are legal
    /// at the top level.
    fn parse_declaration(&mut self) -> ParseResult<Stmt<'a>> {
        if self.check(T![let]) {
            return self.parse_var_decl();
        }
        if self.check(T![fn]) {
            return self.parse_function_declaration();
        }
        Err(self.error("Expected declaration"))
    }

    /// function_decl = "fn" IDENT "(" [ param { "," param } ] ")"
    ///                 [ "->" type ] block
    fn parse_function_declaration(&mut self) -> ParseResult<Stmt<'a>> {
        self.expect(T![fn], "")?;
        let name = self.parse_identifier()?;
        self.expect(T!['('], "after function name")?;

        let mut params = Vec::new();
        if !self.check(T![')']) {
            loop {
                let param_name = self.parse_identifier()?;
                self.expect(T![:], "after parameter name")?;
                let param_type = self.parse_type()?;
                params.push(Param {
                    name: param_name,
                    ty: param_type,
                });
                if !self.accept(T![,]) {
                    break;
                }
            }
        }
        self.expect(T![')'], "after parameters")?;

        // no `->` clause means the unit type, synthesized not inferred
        let return_type = if self.accept(T![->]) {
            self.parse_type()?
        } else {
            Type {
                builtin: Some(BuiltinType::Unit),
                name: Identifier { name: "return" },
            }
        };

        let body = self.parse_block()?;
        Ok(Stmt::Function(FunctionDecl {
            name,
            params,
            return_type,
            body,
        }))
    }

    /// var_decl = "let" IDENT ":" type "=" expression ";"
    fn parse_var_decl(&mut self) -> ParseResult<Stmt<'a>> {
        self.expect(T![let], "")?;
        let name = self.parse_identifier()?;
        self.expect(T![:], "after variable name")?;
        let ty = self.parse_type()?;
        self.expect(T![=], "in variable declaration")?;
        let init = self.parse_expression()?;
        self.expect(T![;], "after variable declaration")?;
        Ok(Stmt::Var(VarDecl {
            name,
            ty,
            init: Some(init),
        }))
    }

    //-----------
    // STATEMENTS
    //-----------

    /// block = "{" { stmt } "}"
    fn parse_block(&mut self) -> ParseResult<Block<'a>> {
        self.expect(T!['{'], "before function body")?;
        let mut stmts = Vec::new();
        while !self.check(T!['}']) && !self.check(T![eof]) {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(T!['}'], "after function body")?;
        Ok(Block { stmts })
    }

    /// stmt = var_decl | return_stmt | assignment_stmt | call_stmt.
    ///
    /// A statement opening with an identifier needs one token of extra
    /// lookahead: `=` commits to assignment, `(` commits to a call, and
    /// anything else is a syntax error. This keeps the grammar
    /// predictive with no backtracking, at the cost of ruling out
    /// expression statements that are not bare calls.
    fn parse_stmt(&mut self) -> ParseResult<Stmt<'a>> {
        if self.check(T![let]) {
            return self.parse_var_decl();
        }
        if self.check(T![return]) {
            return self.parse_return_stmt();
        }

        if self.check(T![ident]) {
            if self.check_at(T![=], 1) {
                return self.parse_assignment_stmt();
            }
            if self.check_at(T!['('], 1) {
                return self.parse_call_stmt();
            }
        }
        Err(self.error("expected statement"))
    }

    /// return_stmt = "return" [ expression ] ";"
    fn parse_return_stmt(&mut self) -> ParseResult<Stmt<'a>> {
        self.expect(T![return], "")?;
        let value = if self.check(T![;]) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(T![;], "after return")?;
        Ok(Stmt::Return(ReturnStmt { value }))
    }

    /// assignment_stmt = IDENT "=" expression ";". The target is kept as
    /// an expression node even though the grammar only admits a bare
    /// name.
    fn parse_assignment_stmt(&mut self) -> ParseResult<Stmt<'a>> {
        let target = Expr::Identifier(self.parse_identifier()?);
        self.expect(T![=], "in assignment")?;
        let value = self.parse_expression()?;
        self.expect(T![;], "after assignment")?;
        Ok(Stmt::Assign(AssignStmt { target, value }))
    }

    /// call_stmt = call ";". The caller already saw IDENT "(".
    fn parse_call_stmt(&mut self) -> ParseResult<Stmt<'a>> {
        let call = self.parse_call_expression()?;
        self.expect(T![;], "after call statement")?;
        Ok(Stmt::Call(CallStmt { call }))
    }
}
