//! Integration tests for end-to-end scanning.
//!
//! These tests run whole CFPL programs through the public API and check the
//! properties that must hold for any token stream: source reconstruction,
//! ordering, line monotonicity, and error recovery.

use cfpl::{
    display_error,
    lexer::{
        lexer::tokenize,
        tokens::{Literal, Sign, Token, TokenKind},
    },
};
use pretty_assertions::assert_eq;

const PROGRAM: &str = r#"# computes a few values
INT a = 100, b = -200, c = 300
CHAR d = 'x'
BOOL t = "TRUE"
FLOAT f = -2.5
BEGIN CODE
    a = (a * -1) + b - c
    IF (a <> b AND NOT t)
    BEGIN IF
        DISPLAY: "a is " & a & $ & "done"
    END IF
    ELSE
    BEGIN IF
        SCAN: a, b
    END IF
    WHILE (a <= 10 OR b >= 5)
    BEGIN WHILE
        a = a % 3 / 2
    END WHILE
END CODE
"#;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

/// Checks that every gap between tokens holds only whitespace and comments.
fn assert_gaps_are_trivia(source: &str, tokens: &[Token]) {
    let mut cursor = 0;
    let mut rebuilt = String::new();

    for token in tokens {
        let start = token.span.start.0 as usize;
        let end = token.span.end.0 as usize;
        assert!(start >= cursor, "token {} overlaps its predecessor", token);

        let gap = &source[cursor..start];
        for line in gap.split('\n') {
            let code = line.split('#').next().unwrap_or("");
            assert!(
                code.chars().all(|c| c == ' ' || c == '\t' || c == '\r'),
                "non-trivia gap {:?} before {}",
                gap,
                token
            );
        }

        rebuilt.push_str(gap);
        rebuilt.push_str(&token.lexeme);
        assert_eq!(&source[start..end], token.lexeme);
        cursor = end;
    }

    rebuilt.push_str(&source[cursor..]);
    assert_eq!(rebuilt, source);
}

#[test]
fn test_program_round_trips() {
    let source = PROGRAM.replace("'x'", "\"x\"");
    let tokens = tokenize(source.clone(), Some("program.cfpl".to_string())).unwrap();

    assert_gaps_are_trivia(&source, &tokens);
}

#[test]
fn test_lines_are_monotonic() {
    let source = PROGRAM.replace("'x'", "\"x\"");
    let tokens = tokenize(source, None).unwrap();

    assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
    assert_eq!(tokens.first().map(|token| token.line), Some(2));
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Code));
    assert_eq!(tokens.last().map(|token| token.line), Some(20));
}

#[test]
fn test_program_header() {
    let source = PROGRAM.replace("'x'", "\"x\"");
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(
        kinds(&tokens[..13]),
        vec![
            TokenKind::Int,
            TokenKind::Variable,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Comma,
            TokenKind::Variable,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Comma,
            TokenKind::Variable,
            TokenKind::Assign,
            TokenKind::IntLiteral,
            TokenKind::Char,
        ]
    );
    assert_eq!(tokens[7].literal, Some(Literal::Int(-200)));
    assert_eq!(tokens[7].sign, Some(Sign::Negative));

    let booleans: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::BoolLiteral)
        .collect();
    assert_eq!(booleans.len(), 1);
    assert_eq!(booleans[0].literal, Some(Literal::Bool(true)));

    let floats: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::FloatLiteral)
        .collect();
    assert_eq!(floats[0].literal, Some(Literal::Float(-2.5)));
}

#[test]
fn test_expression_line() {
    let tokens = tokenize("a = (a * -1) + b - c".to_string(), None).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Variable,
            TokenKind::Assign,
            TokenKind::OpenParen,
            TokenKind::Variable,
            TokenKind::Star,
            TokenKind::IntLiteral,
            TokenKind::CloseParen,
            TokenKind::Plus,
            TokenKind::Variable,
            TokenKind::Minus,
            TokenKind::Variable,
        ]
    );
    assert_eq!(tokens[5].literal, Some(Literal::Int(-1)));
}

#[test]
fn test_errors_keep_best_effort_tokens() {
    let source = PROGRAM.to_string();
    let failure = tokenize(source.clone(), Some("program.cfpl".to_string())).unwrap_err();

    // Both quotes around `x` are unexpected; the `x` between them survives.
    assert_eq!(failure.errors.len(), 2);
    assert!(failure
        .errors
        .iter()
        .all(|error| error.get_error_name() == "UnexpectedCharacter" && error.get_line() == 3));
    assert!(failure
        .tokens
        .iter()
        .any(|token| token.kind == TokenKind::Variable && token.lexeme == "x" && token.line == 3));

    let rendered = display_error(&failure.errors[0], &source);
    assert!(rendered.starts_with("Error: UnexpectedCharacter (Unexpected character `'`)\n-> program.cfpl\n"));
    assert!(rendered.contains("3 | CHAR d = 'x'"));
}

#[test]
fn test_unterminated_string_at_end_of_program() {
    let source = "BEGIN CODE\nDISPLAY: \"never closed\nEND CODE".to_string();
    let failure = tokenize(source.clone(), Some("open.cfpl".to_string())).unwrap_err();

    assert_eq!(
        kinds(&failure.tokens),
        vec![TokenKind::Begin, TokenKind::Code, TokenKind::Display]
    );
    assert_eq!(failure.errors.len(), 1);
    assert_eq!(failure.errors[0].get_line(), 3);

    let rendered = display_error(&failure.errors[0], &source);
    assert!(rendered.starts_with("Error: UnterminatedString\n-> open.cfpl\n"));
    assert!(rendered.contains("3 | END CODE"));
}
