//! Centralized error output for the CLI.

// ANSI color codes
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr (red). Errors are never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}
