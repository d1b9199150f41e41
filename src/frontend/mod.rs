//! The frontend module contains everything concerned with tokenizing and
//! parsing Mini source text.
//!
//! # Lexer
//! The lexer converts the input string into a vector of tokens defined in
//! the token module.
//! ### Example
//! ```rust
//! use mini::frontend::lexer::Lexer;
//! let tokens_or_err = Lexer::new("let x: int = 1;").tokenize();
//! ```
//! `tokenize` either returns a vector containing all tokens or an error
//! aggregating every lexical problem in the input.
//!
//! # Parser
//! The parser consumes the token vector and turns it into an AST
//! (abstract syntax tree) rooted in a `Program`.
//! ### Example
//! ```rust
//! use mini::frontend::{lexer::Lexer, parser::Parser};
//! let tokens = Lexer::new("let x: int = 1;").tokenize().unwrap();
//! let program_or_err = Parser::new(tokens).parse();
//! ```
//! The parse result borrows its names and literal text from the source
//! buffer, so the buffer has to stay alive as long as the AST does.
//!
//! # Printer
//! The printer renders token streams and ASTs as plain indented text for
//! debugging.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod printer;
pub mod token;
