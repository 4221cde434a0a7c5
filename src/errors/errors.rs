use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            line,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::StraySign => "StraySign",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character `{}`", character))
            }
            ErrorImpl::UnterminatedString => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::StraySign => ErrorTip::Suggestion(String::from(
                "`-` must follow an operand or directly precede a digit",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected '-' with no operand")]
    StraySign,
}

/// Everything a failed scan produced: the tokens that could still be
/// recognised and every error met along the way, in source order.
#[derive(Error, Debug, Clone)]
#[error("{} lexical error(s)", .errors.len())]
pub struct ScanErrors {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

/// Sink for lexical diagnostics, called once per error while the scan is
/// still running.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);

    fn report_error(&mut self, error: &Error) {
        self.report(error.get_line(), &error.get_kind().to_string());
    }
}

/// Discards every report.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _line: usize, _message: &str) {}
}
