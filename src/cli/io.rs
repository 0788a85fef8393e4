//! Stream handling for CLI commands
//!
//! - Input: stdin, or a file when `--input` is given
//! - Output: buffered stdout
//! - UTF-8 only

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Stdout, Write};
use std::path::Path;

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Open the command input stream
pub fn open_input(path: Option<&Path>) -> CliResult<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                CliError::io_error(format!("Failed to open input {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Buffered stdout for query results
pub fn open_output() -> BufWriter<Stdout> {
    BufWriter::new(io::stdout())
}

/// Write a value as a single JSON line to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
