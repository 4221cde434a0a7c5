//! Utility macros for the scanner.
//!
//! - `MK_SPAN!` - Creates a Span between two byte offsets of one file
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Span covering `$start..$end` in `$file`.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(0, 5, lexer.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start as u32, Rc::clone(&$file)),
            end: Position($end as u32, Rc::clone(&$file)),
        }
    };
}

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The raw source text of the token
/// * `$literal` - The decoded literal value, if any
/// * `$sign` - The sign of a numeric literal, if any
/// * `$line` - The line of the token's first character
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Plus, "+".to_string(), None, None, 1, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $sign:expr, $line:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            sign: $sign,
            line: $line,
            span: $span,
        }
    };
}
