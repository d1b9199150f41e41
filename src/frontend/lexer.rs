//! The lexer turns Mini source text into the flat token sequence consumed
//! by the parser.
//!
//! The scan is a single eager pass: whitespace and `//` line comments are
//! skipped, every other character starts a literal, an identifier/keyword,
//! a string or a symbol. Multi-character symbols are matched longest-first
//! (maximal munch), so `<<=` never splits into `<<` and `=`.
//!
//! Lexical errors do not stop the scan. Each one is recorded as a
//! diagnostic and the offending token is dropped from the output; after
//! the whole input has been scanned `tokenize` fails once with the full
//! aggregate. A successful scan always ends with exactly one `Eof` token
//! whose offset is the input length.
//!
//! Example:
//! ```rust
//! use mini::frontend::lexer::Lexer;
//! let tokens_or_err = Lexer::new("let x: int = 1;").tokenize();
//! ```

use super::{
    position::Position,
    token::{Token, TokenKind},
};
use crate::error::{Diagnostic, MiniError};

/// Single-use scanner over one source buffer. Tokens borrow their lexemes
/// from that buffer.
pub struct Lexer<'a> {
    /// The full source. Lexemes are cut out of this.
    source: &'a str,
    /// Position of the next unconsumed character.
    pos: Position,
    /// Position of the first character of the token being scanned.
    start: Position,
    tokens: Vec<Token<'a>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: Position::start(),
            start: Position::start(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole source into a token vector ending in `Eof`, or fail
    /// with every lexical error found along the way.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, MiniError> {
        loop {
            self.skip_trivia();
            let c = match self.peek(0) {
                Some(c) => c,
                None => break,
            };
            self.start = self.pos;
            let token = self.next_token(c);
            if token.kind != TokenKind::Error {
                self.tokens.push(token);
            }
        }
        self.tokens.push(Token::new(TokenKind::Eof, self.pos, ""));
        if self.diagnostics.is_empty() {
            Ok(self.tokens)
        } else {
            Err(MiniError::LexError {
                diagnostics: self.diagnostics,
            })
        }
    }

    /// Classify the next token by its first character. Precedence:
    /// digit, identifier start, string opener, symbol.
    fn next_token(&mut self, c: char) -> Token<'a> {
        if c.is_ascii_digit() {
            self.number()
        } else if is_ident_start(c) {
            self.identifier()
        } else if c == '"' {
            self.string()
        } else {
            self.symbol(c)
        }
    }

    //-------
    // HELPER
    //-------

    /// Look at the character `offset` characters ahead without consuming
    /// anything. The symbol matcher needs up to two characters.
    fn peek(&self, offset: usize) -> Option<char> {
        self.source[self.pos.offset..].chars().nth(offset)
    }

    /// Consume one character, keeping line/column/offset in sync. A
    /// consumed `\n` bumps the line and resets the column to 1.
    fn advance(&mut self) -> Option<char> {
        let c = self.source[self.pos.offset..].chars().next()?;
        if c == '\n' {
            self.pos.next_line();
        } else {
            self.pos.next_column();
        }
        self.pos.offset += c.len_utf8();
        Some(c)
    }

    /// Consume characters while the predicate holds.
    fn advance_while(&mut self, predicate: &dyn Fn(&char) -> bool) {
        while let Some(c) = self.peek(0) {
            if !predicate(&c) {
                break;
            }
            self.advance();
        }
    }

    /// Whitespace and `//` comments. A comment runs up to but not over
    /// the newline; the whitespace arm consumes it, so the line counter
    /// bumps exactly once.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek(0) {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek(1) == Some('/') => {
                    self.advance_while(&|c| c != &'\n');
                }
                _ => break,
            }
        }
    }

    /// Token covering everything scanned since `self.start`.
    fn token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.start,
            &self.source[self.start.offset..self.pos.offset],
        )
    }

    /// Record a diagnostic and hand back an `Error` token, which the
    /// tokenize loop suppresses from the output.
    fn error_token(&mut self, pos: Position, msg: impl Into<String>) -> Token<'a> {
        self.diagnostics.push(Diagnostic {
            pos,
            msg: msg.into(),
        });
        Token::new(TokenKind::Error, pos, "")
    }

    //---------
    // LITERALS
    //---------

    /// `digits ( '.' digits* )?` — a trailing dot still commits to a
    /// float, so `123.` is one float lexeme. No exponents, no sign.
    fn number(&mut self) -> Token<'a> {
        self.advance_while(&|c| c.is_ascii_digit());
        if self.peek(0) == Some('.') {
            self.advance();
            self.advance_while(&|c| c.is_ascii_digit());
            self.token(TokenKind::FloatLiteral)
        } else {
            self.token(TokenKind::IntLiteral)
        }
    }

    /// String literal. `\` consumes the following character without
    /// interpreting it, so the raw pair stays in the lexeme. An unescaped
    /// newline and an unclosed literal are both lexical errors; the
    /// lexeme excludes the delimiting quotes.
    fn string(&mut self) -> Token<'a> {
        self.advance();
        let start = self.pos;
        loop {
            match self.peek(0) {
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('\n') => {
                    let err_pos = self.pos;
                    self.advance();
                    return self.error_token(err_pos, "New line in string");
                }
                Some('"') => {
                    let lexeme = &self.source[start.offset..self.pos.offset];
                    self.advance();
                    return Token::new(TokenKind::StringLiteral, start, lexeme);
                }
                Some(_) => {
                    self.advance();
                }
                None => return self.error_token(start, "Unterminated string"),
            }
        }
    }

    //----------------------
    // IDENTIFIERS, KEYWORDS
    //----------------------

    /// Longest run of identifier characters, then a keyword-table lookup.
    /// `true`/`false` come out of the table as bool literals.
    fn identifier(&mut self) -> Token<'a> {
        self.advance_while(&|c| is_ident_part(*c));
        let text = &self.source[self.start.offset..self.pos.offset];
        let kind = Token::keyword(text).unwrap_or(TokenKind::Identifier);
        self.token(kind)
    }

    //--------
    // SYMBOLS
    //--------

    /// Consume the symbol's characters; the kind's display text is its
    /// source spelling, so its length is the munch length.
    fn symbol_token(&mut self, kind: TokenKind) -> Token<'a> {
        for _ in 0..kind.as_str().len() {
            self.advance();
        }
        self.token(kind)
    }

    /// Maximal-munch symbol matcher: at each head character the longest
    /// candidate is tried first, e.g. `<` resolves `<<=` before `<<`
    /// before `<=>` before `<=` before `<`.
    fn symbol(&mut self, c: char) -> Token<'a> {
        let peek1 = self.peek(1);
        let peek2 = self.peek(2);
        let kind = match c {
            '/' => match peek1 {
                Some('=') => TokenKind::SlashEq,
                _ => TokenKind::Slash,
            },
            '<' => match (peek1, peek2) {
                (Some('<'), Some('=')) => TokenKind::LeftShiftEq,
                (Some('<'), _) => TokenKind::LeftShift,
                (Some('='), Some('>')) => TokenKind::Spaceship,
                (Some('='), _) => TokenKind::LessEq,
                _ => TokenKind::Less,
            },
            '>' => match (peek1, peek2) {
                (Some('>'), Some('=')) => TokenKind::RightShiftEq,
                (Some('>'), _) => TokenKind::RightShift,
                (Some('='), _) => TokenKind::GreaterEq,
                _ => TokenKind::Greater,
            },
            '+' => match peek1 {
                Some('+') => TokenKind::PlusPlus,
                Some('=') => TokenKind::PlusEq,
                _ => TokenKind::Plus,
            },
            '-' => match peek1 {
                Some('-') => TokenKind::MinusMinus,
                Some('=') => TokenKind::MinusEq,
                Some('>') => TokenKind::Arrow,
                _ => TokenKind::Minus,
            },
            '|' => match (peek1, peek2) {
                (Some('|'), Some('=')) => TokenKind::LogicalOrEq,
                (Some('|'), _) => TokenKind::LogicalOr,
                (Some('='), _) => TokenKind::PipeEq,
                _ => TokenKind::Pipe,
            },
            '&' => match (peek1, peek2) {
                (Some('&'), Some('=')) => TokenKind::LogicalAndEq,
                (Some('&'), _) => TokenKind::LogicalAnd,
                (Some('='), _) => TokenKind::AmpersandEq,
                _ => TokenKind::Ampersand,
            },
            '*' => match peek1 {
                Some('=') => TokenKind::MultiplyEq,
                _ => TokenKind::Multiply,
            },
            '%' => match peek1 {
                Some('=') => TokenKind::ModuloEq,
                _ => TokenKind::Modulo,
            },
            '^' => match peek1 {
                Some('=') => TokenKind::CaretEq,
                _ => TokenKind::Caret,
            },
            '~' => match peek1 {
                Some('=') => TokenKind::TildeEq,
                _ => TokenKind::Tilde,
            },
            '=' => match peek1 {
                Some('=') => TokenKind::EqualComparison,
                _ => TokenKind::Assignment,
            },
            '!' => match peek1 {
                Some('=') => TokenKind::NotEqualComparison,
                _ => TokenKind::Not,
            },
            '.' => match (peek1, peek2) {
                (Some('.'), Some('.')) => TokenKind::Ellipsis,
                (Some('.'), Some('<')) => TokenKind::EllipsisLess,
                (Some('.'), Some('=')) => TokenKind::EllipsisEqual,
                (Some('.'), _) => TokenKind::DotDot,
                _ => TokenKind::Dot,
            },
            ':' => match peek1 {
                Some(':') => TokenKind::Scope,
                _ => TokenKind::Colon,
            },
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '?' => TokenKind::QuestionMark,
            '@' => TokenKind::At,
            '$' => TokenKind::Dollar,
            _ => {
                let pos = self.start;
                self.advance();
                return self.error_token(pos, format!("Unexpected character: {}", c));
            }
        };
        self.symbol_token(kind)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::T;

    fn lex(src: &'static str) -> Result<Vec<Token<'static>>, MiniError> {
        Lexer::new(src).tokenize()
    }

    fn kinds(src: &'static str) -> Vec<TokenKind> {
        lex(src)
            .unwrap()
            .iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = lex("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0], Token::new(T![eof], Position::new(1, 1, 0), ""));
    }

    #[test]
    fn test_single_eof_at_input_length() {
        let src = "let x: int = 1;";
        let tokens = lex(src).unwrap();
        let eofs: Vec<_> = tokens.iter().filter(|t| t.kind == T![eof]).collect();
        assert_eq!(eofs.len(), 1);
        assert_eq!(tokens.last().map(|t| t.kind), Some(T![eof]));
        assert_eq!(tokens.last().map(|t| t.pos.offset), Some(src.len()));
    }

    #[test]
    fn test_maximal_munch() {
        let cases = [
            ("<<=", T![<<=]),
            ("<<", T![<<]),
            ("<=>", T![<=>]),
            ("<=", T![<=]),
            ("<", T![<]),
            (">>=", T![>>=]),
            (">>", T![>>]),
            (">=", T![>=]),
            (">", T![>]),
            ("...", T![...]),
            ("..<", T![..<]),
            ("..=", T![..=]),
            ("..", T![..]),
            (".", T![.]),
            ("&&=", T![&&=]),
            ("&&", T![&&]),
            ("&=", T![&=]),
            ("||=", T![||=]),
            ("|=", T![|=]),
            ("->", T![->]),
            ("--", T![--]),
            ("::", T![::]),
            ("==", T![==]),
            ("=", T![=]),
        ];
        for &(src, kind) in &cases {
            let tokens = lex(src).unwrap();
            assert_eq!(tokens.len(), 2, "{:?} should lex to one token", src);
            assert_eq!(tokens[0].kind, kind, "{:?}", src);
            assert_eq!(tokens[0].lexeme, src);
        }
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("let fn return foo _bar x1"),
            vec![
                T![let],
                T![fn],
                T![return],
                T![ident],
                T![ident],
                T![ident],
                T![eof]
            ]
        );
        // true/false come out of the keyword table as bool literals
        let tokens = lex("true false").unwrap();
        assert_eq!(tokens[0].kind, T![bool]);
        assert_eq!(tokens[0].lexeme, "true");
        assert_eq!(tokens[1].kind, T![bool]);
        assert_eq!(tokens[1].lexeme, "false");
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("12 3.14 123.").unwrap();
        assert_eq!(tokens[0].kind, T![int]);
        assert_eq!(tokens[0].lexeme, "12");
        assert_eq!(tokens[1].kind, T![float]);
        assert_eq!(tokens[1].lexeme, "3.14");
        // a trailing dot still commits to float
        assert_eq!(tokens[2].kind, T![float]);
        assert_eq!(tokens[2].lexeme, "123.");
    }

    #[test]
    fn test_string_excludes_quotes() {
        let tokens = lex("\"hi\"").unwrap();
        assert_eq!(
            tokens[0],
            Token::new(T![string], Position::new(1, 2, 1), "hi")
        );
    }

    #[test]
    fn test_string_keeps_raw_escapes() {
        let tokens = lex(r#""a\"b""#).unwrap();
        assert_eq!(tokens[0].kind, T![string]);
        assert_eq!(tokens[0].lexeme, "a\\\"b");
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex("\"abc").unwrap_err();
        match err {
            MiniError::LexError { diagnostics } => {
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].msg, "Unterminated string");
            }
            other => panic!("expected LexError, got {:?}", other),
        }
    }

    #[test]
    fn test_newline_in_string() {
        // the scan keeps going after the bad literal, so the stray
        // closing quote shows up as a second error
        let err = lex("\"ab\ncd\"").unwrap_err();
        match err {
            MiniError::LexError { diagnostics } => {
                assert_eq!(diagnostics.len(), 2);
                assert_eq!(diagnostics[0].msg, "New line in string");
                assert_eq!(diagnostics[0].pos, Position::new(1, 4, 3));
                assert_eq!(diagnostics[1].msg, "Unterminated string");
            }
            other => panic!("expected LexError, got {:?}", other),
        }
    }

    #[test]
    fn test_collects_all_errors() {
        let err = lex("#\n`").unwrap_err();
        match err {
            MiniError::LexError { diagnostics } => {
                assert_eq!(diagnostics.len(), 2);
                assert_eq!(diagnostics[0].msg, "Unexpected character: #");
                assert_eq!(diagnostics[0].pos, Position::new(1, 1, 0));
                assert_eq!(diagnostics[1].msg, "Unexpected character: `");
                assert_eq!(diagnostics[1].pos, Position::new(2, 1, 2));
            }
            other => panic!("expected LexError, got {:?}", other),
        }
    }

    #[test]
    fn test_line_comments() {
        let tokens = lex("// a\nlet x // trailing, no newline").unwrap();
        assert_eq!(tokens[0].kind, T![let]);
        assert_eq!(tokens[0].pos, Position::new(2, 1, 5));
        assert_eq!(tokens[1].kind, T![ident]);
        assert_eq!(tokens[2].kind, T![eof]);
    }

    #[test]
    fn test_position_monotonicity() {
        let src = "let x: int = 1;\nfn f(a: int) -> int {\n    return a; // done\n}\n";
        let tokens = lex(src).unwrap();
        for pair in tokens.windows(2) {
            assert!(pair[0].pos.offset <= pair[1].pos.offset);
        }
        assert_eq!(tokens.last().map(|t| t.pos.offset), Some(src.len()));
    }

    #[test]
    fn test_unary_minus_is_separate() {
        // no sign prefix on numeric literals
        assert_eq!(kinds("-5"), vec![T![-], T![int], T![eof]]);
    }
}
