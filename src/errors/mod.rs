//! Error types and error reporting for the scanner.
//!
//! This module defines the lexical errors the scanner can recover from. It
//! includes:
//!
//! - Error structures with line and source position information
//! - The aggregate failure returned when a scan met any error
//! - The `Reporter` sink that receives diagnostics while scanning
//! - Helpful error messages and suggestions

pub mod errors;
