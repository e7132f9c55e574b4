//! Command-line interface for runlike.
//!
//! A single `-c <container>` flag; everything else comes from the environment.

mod commands;

pub use commands::{parse_cli, render_run_command, run_with_cli, Cli};
