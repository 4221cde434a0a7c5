use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Quoted content that turns a string literal into `TRUE`.
pub const TRUE_WORD: &str = "TRUE";
/// Quoted content that turns a string literal into `FALSE`.
pub const FALSE_WORD: &str = "FALSE";

lazy_static! {
    static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("END", TokenKind::End);
        map.insert("DISPLAY", TokenKind::Display);
        map.insert("SCAN", TokenKind::Scan);
        map.insert("IF", TokenKind::If);
        map.insert("ELSE", TokenKind::Else);
        map.insert("WHILE", TokenKind::While);
        map.insert("CODE", TokenKind::Code);
        map.insert("AND", TokenKind::And);
        map.insert("OR", TokenKind::Or);
        map.insert("NOT", TokenKind::Not);
        map.insert("INT", TokenKind::Int);
        map.insert("FLOAT", TokenKind::Float);
        map.insert("CHAR", TokenKind::Char);
        map.insert("BOOL", TokenKind::Bool);
        map
    };
}

/// Resolves a complete word against the keyword table.
///
/// Only exact, case-sensitive matches count: `BEGINNING` and `begin` are
/// both `None`.
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(word).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Literals
    StringLiteral,
    IntLiteral,
    FloatLiteral,
    BoolLiteral,
    Variable,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    Comma,
    Dot,
    NewLine, // $
    Concat,  // &

    Plus,
    Minus,
    Slash,
    Star,
    Modulo, // %

    Assign,    // =
    Equals,    // ==
    NotEquals, // <>

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    // Reserved
    Begin,
    End,
    Display,
    Scan,
    If,
    Else,
    While,
    Code,
    And,
    Or,
    Not,

    // Type names
    Int,
    Float,
    Char,
    Bool,
}

impl TokenKind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BoolLiteral
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, TokenKind::IntLiteral | TokenKind::FloatLiteral)
    }

    /// Whether a `-` directly after this token reads as subtraction.
    pub fn is_operand(&self) -> bool {
        self.is_literal()
            || matches!(
                self,
                TokenKind::Variable | TokenKind::CloseParen | TokenKind::CloseBracket
            )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded value carried by literal tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i32),
    Float(f64),
    String(String),
    Bool(bool),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{:?}", value),
            Literal::String(value) => write!(f, "{:?}", value),
            Literal::Bool(true) => write!(f, "{}", TRUE_WORD),
            Literal::Bool(false) => write!(f, "{}", FALSE_WORD),
        }
    }
}

/// Records whether a leading `-` was consumed into a numeric literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Positive => write!(f, "POSITIVE"),
            Sign::Negative => write!(f, "NEGATIVE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text, `-` included for signed numbers.
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// Present only on numeric literals.
    pub sign: Option<Sign>,
    /// Line of the token's first character.
    pub line: usize,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme)?;

        if let Some(literal) = &self.literal {
            write!(f, " {}", literal)?;
        }
        if let Some(sign) = &self.sign {
            write!(f, " {}", sign)?;
        }

        Ok(())
    }
}
