//! Lexical analysis module.
//!
//! This module contains the scanner that converts CFPL source text into an
//! ordered sequence of tokens. It handles:
//!
//! - Recognition of keywords, identifiers, literals, and operators
//! - Contextual `-` handling (subtraction versus a literal's sign)
//! - `TRUE`/`FALSE` string literals decoding to booleans
//! - Line tracking for diagnostics
//! - Comments and whitespace handling
//! - Recovering from lexical errors without stopping the scan

pub mod lexer;
pub mod tokens;
