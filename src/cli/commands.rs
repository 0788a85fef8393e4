//! CLI command implementations
//!
//! Both commands follow the same boot sequence: load config, set the log
//! level, open the input stream, then hand the stream to a protocol session.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::observability::{log_event, log_event_with_fields, Event, Logger, MetricsSnapshot};
use crate::protocol::Session;
use crate::store::StoreStats;

use super::args::Command;
use super::errors::CliResult;
use super::io::{open_input, open_output, write_json};

/// Report printed by `qbedb stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub store: StoreStats,
    pub metrics: MetricsSnapshot,
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Run { config, input } => serve(config.as_deref(), input.as_deref()),
        Command::Stats { config, input } => {
            let report = stats(config.as_deref(), input.as_deref())?;
            write_json(&report)
        }
    }
}

/// Boot: load configuration and apply the log level
fn boot(config_path: Option<&Path>) -> CliResult<Config> {
    log_event(Event::BootStart);

    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Logger::set_min_severity(config.severity());

    log_event_with_fields(
        Event::ConfigLoaded,
        &[("log_level", config.log_level.as_str())],
    );
    Ok(config)
}

/// Run the line protocol, writing get results to stdout
pub fn serve(config_path: Option<&Path>, input_path: Option<&Path>) -> CliResult<()> {
    let config = boot(config_path)?;
    let input = open_input(input_path)?;

    let mut session = Session::new(open_output(), &config);
    session.run(input)?;
    Ok(())
}

/// Replay the line protocol with get output discarded and collect statistics
pub fn stats(config_path: Option<&Path>, input_path: Option<&Path>) -> CliResult<StatsReport> {
    let config = boot(config_path)?;
    let input = open_input(input_path)?;

    let mut session = Session::new(io::sink(), &config);
    session.run(input)?;

    Ok(StatsReport {
        store: session.store().stats(),
        metrics: session.metrics().snapshot(),
    })
}
