//! CLI integration tests for md2html.
//!
//! These tests execute the compiled binary and verify CLI behavior
//! including stdin/stdout sentinels, default destination resolution,
//! exit codes, and error reporting.

mod common;
mod convert;
