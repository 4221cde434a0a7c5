#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Byte offset into a source text, tagged with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position` of `content`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. An offset equal to the content length points
/// just past the last character, which is where unterminated literals are
/// reported.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Past the last character: stay on the final line unless it ended in a
    // newline, in which case the position opens a new empty line.
    match content.split_inclusive('\n').last() {
        Some(last) if !last.ends_with('\n') => {
            Some((line_number - 1, last.to_string(), last.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("a\n\"bc", 5).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "\"bc");
        assert_eq!(line_pos, 3);

        assert!(super::get_line_at_position("abc", 4).is_none());
    }

    #[test]
    fn test_display_error() {
        use crate::errors::errors::{Error, ErrorImpl};
        use crate::Position;
        use std::rc::Rc;

        let source = "BEGIN CODE\n  x = @\nEND CODE";
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { character: '@' },
            2,
            Position(17, Rc::new(String::from("test.cfpl"))),
        );

        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedCharacter (Unexpected character `@`)");
        assert_eq!(lines[1], "-> test.cfpl");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x = @");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_display_error_after_non_ascii() {
        use crate::lexer::lexer::tokenize;

        let source = "y = é @";
        let failure = tokenize(source.to_string(), None).unwrap_err();
        let rendered = super::display_error(&failure.errors[1], source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | y = é @");
        assert_eq!(lines[4], "  | ------^");

        let source = "   é  @";
        let failure = tokenize(source.to_string(), None).unwrap_err();
        let rendered = super::display_error(&failure.errors[1], source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | é  @");
        assert_eq!(lines[4], "  | ---^");
    }
}

/// Renders `error` against the source it was found in.
///
/// ```text
/// Error: UnexpectedCharacter (Unexpected character `@`)
/// -> final.cfpl
///   |
/// 2 | x = @
///   | ----^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return format!("{}{}\n", header, error);
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut output = header;
    output.push_str(&format!("-> {}\n", position.1));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Offsets are in bytes, the fill is in characters.
    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
