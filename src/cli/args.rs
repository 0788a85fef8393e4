//! CLI argument definitions using clap
//!
//! Commands:
//! - qbedb run [--config <path>] [--input <path>]
//! - qbedb stats [--config <path>] [--input <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// qbedb - An in-memory, trie-indexed query-by-example document store
#[derive(Parser, Debug)]
#[command(name = "qbedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process add/get/delete commands and print get results
    Run {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read commands from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Replay commands, discard get results and print store statistics
    Stats {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read commands from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
