//! Token definitions for the Mini language.
//!
//! A token never owns its text: the lexeme is a slice of the original
//! source buffer, so the buffer has to outlive every token cut from it.

use phf::phf_map;
use std::fmt;

use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub pos: Position,
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, pos: Position, lexeme: &'a str) -> Self {
        Self { kind, pos, lexeme }
    }

    /// Look up an identifier in the keyword table. `true` and `false`
    /// live here too and come back as `BoolLiteral`.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS.get(text).copied()
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}: {} @ {}>", self.kind, self.lexeme, self.pos)
    }
}

/// Every kind of token the lexer can produce. Multi-character symbols are
/// their own kinds so the parser never has to re-inspect lexemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Error,

    // Symbols, compound forms before their prefixes
    SlashEq,
    Slash,
    LeftShiftEq,
    LeftShift,
    Spaceship,
    LessEq,
    Less,
    RightShiftEq,
    RightShift,
    GreaterEq,
    Greater,
    PlusPlus,
    PlusEq,
    Plus,
    MinusMinus,
    MinusEq,
    Arrow,
    Minus,
    LogicalOrEq,
    LogicalOr,
    PipeEq,
    Pipe,
    LogicalAndEq,
    LogicalAnd,
    AmpersandEq,
    Ampersand,
    MultiplyEq,
    Multiply,
    ModuloEq,
    Modulo,
    CaretEq,
    Caret,
    TildeEq,
    Tilde,
    EqualComparison,
    Assignment,
    NotEqualComparison,
    Not,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Scope,
    Colon,
    Semicolon,
    Comma,
    Dot,
    DotDot,
    Ellipsis,
    EllipsisLess,
    EllipsisEqual,
    QuestionMark,
    At,
    Dollar,

    // Literals
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    BoolLiteral,

    // Keywords
    KwLet,
    KwFn,
    KwReturn,

    Identifier,

    Eof,
}

impl TokenKind {
    /// Display text of the kind: symbols render as their source text,
    /// everything else as a class name. For symbols this doubles as the
    /// match length of the lexer's maximal-munch table.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Error => "(ERROR)",
            TokenKind::SlashEq => "/=",
            TokenKind::Slash => "/",
            TokenKind::LeftShiftEq => "<<=",
            TokenKind::LeftShift => "<<",
            TokenKind::Spaceship => "<=>",
            TokenKind::LessEq => "<=",
            TokenKind::Less => "<",
            TokenKind::RightShiftEq => ">>=",
            TokenKind::RightShift => ">>",
            TokenKind::GreaterEq => ">=",
            TokenKind::Greater => ">",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEq => "+=",
            TokenKind::Plus => "+",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEq => "-=",
            TokenKind::Arrow => "->",
            TokenKind::Minus => "-",
            TokenKind::LogicalOrEq => "||=",
            TokenKind::LogicalOr => "||",
            TokenKind::PipeEq => "|=",
            TokenKind::Pipe => "|",
            TokenKind::LogicalAndEq => "&&=",
            TokenKind::LogicalAnd => "&&",
            TokenKind::AmpersandEq => "&=",
            TokenKind::Ampersand => "&",
            TokenKind::MultiplyEq => "*=",
            TokenKind::Multiply => "*",
            TokenKind::ModuloEq => "%=",
            TokenKind::Modulo => "%",
            TokenKind::CaretEq => "^=",
            TokenKind::Caret => "^",
            TokenKind::TildeEq => "~=",
            TokenKind::Tilde => "~",
            TokenKind::EqualComparison => "==",
            TokenKind::Assignment => "=",
            TokenKind::NotEqualComparison => "!=",
            TokenKind::Not => "!",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Scope => "::",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Ellipsis => "...",
            TokenKind::EllipsisLess => "..<",
            TokenKind::EllipsisEqual => "..=",
            TokenKind::QuestionMark => "?",
            TokenKind::At => "@",
            TokenKind::Dollar => "$",
            TokenKind::IntLiteral => "Int Literal",
            TokenKind::FloatLiteral => "Float Literal",
            TokenKind::StringLiteral => "String Literal",
            TokenKind::BoolLiteral => "Bool Literal",
            TokenKind::KwLet => "Let",
            TokenKind::KwFn => "Fn",
            TokenKind::KwReturn => "Return",
            TokenKind::Identifier => "Identifier",
            TokenKind::Eof => "(EOF)",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "let" => TokenKind::KwLet,
    "fn" => TokenKind::KwFn,
    "return" => TokenKind::KwReturn,
    "true" => TokenKind::BoolLiteral,
    "false" => TokenKind::BoolLiteral,
};

/// Shorthand for naming token kinds, e.g. `T![;]`, `T![->]`, `T![let]`.
#[macro_export]
macro_rules! T {
    [/=] => { $crate::frontend::token::TokenKind::SlashEq };
    [/] => { $crate::frontend::token::TokenKind::Slash };
    [<<=] => { $crate::frontend::token::TokenKind::LeftShiftEq };
    [<<] => { $crate::frontend::token::TokenKind::LeftShift };
    [<=>] => { $crate::frontend::token::TokenKind::Spaceship };
    [<=] => { $crate::frontend::token::TokenKind::LessEq };
    [<] => { $crate::frontend::token::TokenKind::Less };
    [>>=] => { $crate::frontend::token::TokenKind::RightShiftEq };
    [>>] => { $crate::frontend::token::TokenKind::RightShift };
    [>=] => { $crate::frontend::token::TokenKind::GreaterEq };
    [>] => { $crate::frontend::token::TokenKind::Greater };
    [++] => { $crate::frontend::token::TokenKind::PlusPlus };
    [+=] => { $crate::frontend::token::TokenKind::PlusEq };
    [+] => { $crate::frontend::token::TokenKind::Plus };
    [--] => { $crate::frontend::token::TokenKind::MinusMinus };
    [-=] => { $crate::frontend::token::TokenKind::MinusEq };
    [->] => { $crate::frontend::token::TokenKind::Arrow };
    [-] => { $crate::frontend::token::TokenKind::Minus };
    [||=] => { $crate::frontend::token::TokenKind::LogicalOrEq };
    [||] => { $crate::frontend::token::TokenKind::LogicalOr };
    [|=] => { $crate::frontend::token::TokenKind::PipeEq };
    [|] => { $crate::frontend::token::TokenKind::Pipe };
    [&&=] => { $crate::frontend::token::TokenKind::LogicalAndEq };
    [&&] => { $crate::frontend::token::TokenKind::LogicalAnd };
    [&=] => { $crate::frontend::token::TokenKind::AmpersandEq };
    [&] => { $crate::frontend::token::TokenKind::Ampersand };
    [*=] => { $crate::frontend::token::TokenKind::MultiplyEq };
    [*] => { $crate::frontend::token::TokenKind::Multiply };
    [%=] => { $crate::frontend::token::TokenKind::ModuloEq };
    [%] => { $crate::frontend::token::TokenKind::Modulo };
    [^=] => { $crate::frontend::token::TokenKind::CaretEq };
    [^] => { $crate::frontend::token::TokenKind::Caret };
    [~=] => { $crate::frontend::token::TokenKind::TildeEq };
    [~] => { $crate::frontend::token::TokenKind::Tilde };
    [==] => { $crate::frontend::token::TokenKind::EqualComparison };
    [=] => { $crate::frontend::token::TokenKind::Assignment };
    [!=] => { $crate::frontend::token::TokenKind::NotEqualComparison };
    [!] => { $crate::frontend::token::TokenKind::Not };
    ['{'] => { $crate::frontend::token::TokenKind::LeftBrace };
    ['}'] => { $crate::frontend::token::TokenKind::RightBrace };
    ['('] => { $crate::frontend::token::TokenKind::LeftParen };
    [')'] => { $crate::frontend::token::TokenKind::RightParen };
    ['['] => { $crate::frontend::token::TokenKind::LeftBracket };
    [']'] => { $crate::frontend::token::TokenKind::RightBracket };
    [::] => { $crate::frontend::token::TokenKind::Scope };
    [:] => { $crate::frontend::token::TokenKind::Colon };
    [;] => { $crate::frontend::token::TokenKind::Semicolon };
    [,] => { $crate::frontend::token::TokenKind::Comma };
    [.] => { $crate::frontend::token::TokenKind::Dot };
    [..] => { $crate::frontend::token::TokenKind::DotDot };
    [...] => { $crate::frontend::token::TokenKind::Ellipsis };
    [..<] => { $crate::frontend::token::TokenKind::EllipsisLess };
    [..=] => { $crate::frontend::token::TokenKind::EllipsisEqual };
    [?] => { $crate::frontend::token::TokenKind::QuestionMark };
    [@] => { $crate::frontend::token::TokenKind::At };
    [dollar] => { $crate::frontend::token::TokenKind::Dollar };
    [int] => { $crate::frontend::token::TokenKind::IntLiteral };
    [float] => { $crate::frontend::token::TokenKind::FloatLiteral };
    [string] => { $crate::frontend::token::TokenKind::StringLiteral };
    [bool] => { $crate::frontend::token::TokenKind::BoolLiteral };
    [let] => { $crate::frontend::token::TokenKind::KwLet };
    [fn] => { $crate::frontend::token::TokenKind::KwFn };
    [return] => { $crate::frontend::token::TokenKind::KwReturn };
    [ident] => { $crate::frontend::token::TokenKind::Identifier };
    [error] => { $crate::frontend::token::TokenKind::Error };
    [eof] => { $crate::frontend::token::TokenKind::Eof };
}
