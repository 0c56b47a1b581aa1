//! I/O utilities for brief-rs.
//!
//! Provides file and stream reading with memory mapping support for large
//! inputs, along with Unicode helpers for character budgets.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, STDIN_LABEL, read_file, read_stream, write_file};
pub use unicode::{truncate_chars, validate_utf8};
