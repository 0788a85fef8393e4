//! CLI module for qbedb
//!
//! Provides command-line interface for:
//! - run: Process a command stream and print get results
//! - stats: Replay a command stream and print store statistics

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, stats, StatsReport};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{open_input, open_output, write_json};
