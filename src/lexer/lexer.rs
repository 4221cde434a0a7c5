use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    config::SHELL_FILE,
    errors::errors::{Error, ErrorImpl, Reporter, ScanErrors, SilentReporter},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::tokens::{lookup_keyword, Literal, Sign, Token, TokenKind, FALSE_WORD, TRUE_WORD};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
    static ref WORD_PATTERN: Regex = Regex::new("^[a-zA-Z0-9_]+").unwrap();
}

/// Single-pass scanner over one complete source text.
///
/// `start` and `current` are byte offsets into `source`; `start_line` is the
/// line the lexeme under construction began on.
pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: String,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
    // Previous token on this line can be subtracted from.
    after_operand: bool,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from(SHELL_FILE))
        };

        Lexer {
            tokens: vec![],
            errors: vec![],
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            after_operand: false,
            file: file_name,
        }
    }

    /// Scans the whole source. Every error is handed to `reporter` as soon as
    /// it is found and also returned alongside the tokens.
    pub fn scan_tokens(mut self, reporter: &mut dyn Reporter) -> (Vec<Token>, Vec<Error>) {
        while !self.at_eof() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(reporter);
        }

        (self.tokens, self.errors)
    }

    fn scan_token(&mut self, reporter: &mut dyn Reporter) {
        let c = self.advance();

        match c {
            ' ' | '\t' | '\r' => {}
            '\n' => {
                self.line += 1;
                self.after_operand = false;
            }
            '#' => {
                while self.peek() != '\n' && !self.at_eof() {
                    self.advance();
                }
            }
            '(' => self.add_token(TokenKind::OpenParen),
            ')' => self.add_token(TokenKind::CloseParen),
            '[' => self.add_token(TokenKind::OpenBracket),
            ']' => self.add_token(TokenKind::CloseBracket),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '+' => self.add_token(TokenKind::Plus),
            '*' => self.add_token(TokenKind::Star),
            '/' => self.add_token(TokenKind::Slash),
            '$' => self.add_token(TokenKind::NewLine),
            '&' => self.add_token(TokenKind::Concat),
            '%' => self.add_token(TokenKind::Modulo),
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::Equals
                } else {
                    TokenKind::Assign
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEquals
                } else if self.match_char('>') {
                    TokenKind::NotEquals
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEquals
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '-' => self.minus(reporter),
            '"' => self.string(reporter),
            c if c.is_ascii_digit() => self.number(Sign::Positive, reporter),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            c => self.error(ErrorImpl::UnexpectedCharacter { character: c }, reporter),
        }
    }

    // `-` after an operand subtracts; before a digit it signs the literal;
    // anything else is rejected.
    fn minus(&mut self, reporter: &mut dyn Reporter) {
        if self.after_operand {
            self.add_token(TokenKind::Minus);
        } else if self.peek().is_ascii_digit() {
            self.number(Sign::Negative, reporter);
        } else {
            self.error(ErrorImpl::StraySign, reporter);
        }
    }

    fn number(&mut self, sign: Sign, reporter: &mut dyn Reporter) {
        let digits_start = match sign {
            Sign::Positive => self.start,
            Sign::Negative => self.start + 1,
        };

        let (end, is_float) = match NUMBER_PATTERN.find(&self.source[digits_start..]) {
            Some(matched) => (matched.end(), matched.as_str().contains('.')),
            None => return,
        };
        self.current = digits_start + end;

        let text = self.source[self.start..self.current].to_string();
        let literal = if is_float {
            text.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Literal::Float)
        } else {
            text.parse::<i32>().ok().map(Literal::Int)
        };

        match literal {
            Some(literal) => {
                let kind = if is_float {
                    TokenKind::FloatLiteral
                } else {
                    TokenKind::IntLiteral
                };
                self.push_token(kind, Some(literal), Some(sign));
            }
            None => self.error(ErrorImpl::NumberParseError { token: text }, reporter),
        }
    }

    fn string(&mut self, reporter: &mut dyn Reporter) {
        let mut value = String::new();

        while self.peek() != '"' && !self.at_eof() {
            let c = self.advance();
            match c {
                '\n' => {
                    self.line += 1;
                    value.push(c);
                }
                '\\' if matches!(self.peek(), '"' | '\\') => value.push(self.advance()),
                _ => value.push(c),
            }
        }

        if self.at_eof() {
            self.error(ErrorImpl::UnterminatedString, reporter);
            return;
        }

        // closing quote
        self.advance();

        if value == TRUE_WORD {
            self.push_token(TokenKind::BoolLiteral, Some(Literal::Bool(true)), None);
        } else if value == FALSE_WORD {
            self.push_token(TokenKind::BoolLiteral, Some(Literal::Bool(false)), None);
        } else {
            self.push_token(TokenKind::StringLiteral, Some(Literal::String(value)), None);
        }
    }

    fn identifier(&mut self) {
        let (end, kind) = match WORD_PATTERN.find(&self.source[self.start..]) {
            Some(word) => (
                word.end(),
                lookup_keyword(word.as_str()).unwrap_or(TokenKind::Variable),
            ),
            None => return,
        };
        self.current = self.start + end;

        // Written `DISPLAY:` and `SCAN:` in source.
        if matches!(kind, TokenKind::Display | TokenKind::Scan) {
            self.match_char(':');
        }

        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None, None);
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>, sign: Option<Sign>) {
        let lexeme = String::from(&self.source[self.start..self.current]);
        let span = MK_SPAN!(self.start, self.current, self.file);

        self.tokens
            .push(MK_TOKEN!(kind, lexeme, literal, sign, self.start_line, span));
        self.after_operand = kind.is_operand();
    }

    fn error(&mut self, error_impl: ErrorImpl, reporter: &mut dyn Reporter) {
        // Unterminated strings point at where the input ran out.
        let offset = match error_impl {
            ErrorImpl::UnterminatedString => self.current,
            _ => self.start,
        };
        let error = Error::new(error_impl, self.line, Position(offset as u32, Rc::clone(&self.file)));

        reporter.report_error(&error);
        self.errors.push(error);
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        self.current += c.len_utf8();
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.at_eof() || self.peek() != expected {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Scans `source` and returns its tokens, or every lexical error paired with
/// the tokens that could still be recognised.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, ScanErrors> {
    let (tokens, errors) = Lexer::new(source, file).scan_tokens(&mut SilentReporter);

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(ScanErrors { tokens, errors })
    }
}

/// Scans `source`, streaming each diagnostic to `reporter`. The returned
/// tokens are the best effort regardless of errors.
pub fn tokenize_with_reporter(
    source: String,
    file: Option<String>,
    reporter: &mut dyn Reporter,
) -> Vec<Token> {
    Lexer::new(source, file).scan_tokens(reporter).0
}
