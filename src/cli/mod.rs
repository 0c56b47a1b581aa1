//! CLI layer for brief-rs.
//!
//! Provides the command-line interface using clap, with commands for
//! summarizing text, inspecting sentence rankings and listing presets.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, resolve_config};
pub use output::OutputFormat;
pub use parser::{Cli, Commands, TuningArgs};
