//! Shared default values for the command-line interface.

/// Text encoded by `dnastore demo` when none is given.
pub const DEMO_TEXT: &str = "Hello! This is a test. Thank you.";

/// Output format for `analyze`.
pub const ANALYZE_FORMAT: &str = "pretty";
