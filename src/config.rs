//! Language and driver constants.
//!
//! Everything tunable about the CLI lives here rather than being scattered
//! across the driver.

/// Language name
pub const LANG_NAME: &str = "CFPL";

/// Source file extension
pub const SOURCE_EXTENSION: &str = "cfpl";

/// Version number
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name used for diagnostics when the source comes from the REPL
pub const SHELL_FILE: &str = "shell";

/// REPL prompt
pub const PROMPT: &str = "> ";

/// Exit code for a malformed command line
pub const EX_USAGE: i32 = 64;

/// Exit code for a script containing lexical errors
pub const EX_DATAERR: i32 = 65;

/// Exit code for a script that could not be read
pub const EX_IOERR: i32 = 74;
