pub mod types;

pub use types::{TaskLinkOutcome, OUTPUT_NAME};

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to write step output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output value for {0} contains the generated delimiter")]
    DelimiterCollision(String),
}

/// Publish a step output.
///
/// Appends to the `GITHUB_OUTPUT` file when the runner provides one,
/// otherwise prints the legacy `::set-output` workflow command.
#[instrument(skip(value))]
pub fn set_output(name: &str, value: &str, output_path: Option<&Path>) -> Result<(), RunnerError> {
    match output_path {
        Some(path) => {
            debug!(path = %path.display(), "appending step output");
            let entry = file_command_entry(name, value, &new_delimiter())?;
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(entry.as_bytes())?;
            Ok(())
        }
        None => {
            debug!("GITHUB_OUTPUT not set, using set-output command");
            println!("::set-output name={}::{}", escape_property(name), escape_data(value));
            Ok(())
        }
    }
}

/// Mark the step as failed. The caller is responsible for the exit status.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn new_delimiter() -> String {
    format!("ghadelimiter_{}", uuid::Uuid::new_v4())
}

/// Multi-line safe `name<<DELIM` entry for a file command.
fn file_command_entry(name: &str, value: &str, delimiter: &str) -> Result<String, RunnerError> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(RunnerError::DelimiterCollision(name.to_string()));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
