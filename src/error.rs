//! Crate-wide error type shared by the lexer and the parser.

use std::{error::Error, fmt, fmt::Display};

use crate::frontend::position::Position;

/// A single lexical error message with the position of the offending
/// character.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub pos: Position,
    pub msg: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syntax error at {}: {}", self.pos, self.msg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MiniError {
    /// The lexer scans the whole input and reports every lexical error it
    /// found in one aggregate, not just the first.
    LexError { diagnostics: Vec<Diagnostic> },
    /// The parser stops at the first grammar violation.
    ParseError { pos: Position, msg: String },
}

impl Display for MiniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiniError::LexError { diagnostics } => {
                write!(f, "Lex errors:")?;
                for diagnostic in diagnostics {
                    write!(f, "\n{}", diagnostic)?;
                }
                Ok(())
            }
            MiniError::ParseError { pos, msg } => {
                write!(f, "Parse error at {}: {}", pos, msg)
            }
        }
    }
}

impl Error for MiniError {}
