//! CLI command implementations for Debris.

pub(crate) mod play;
pub(crate) mod simulate;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use debris::{Assets, ConfigurationError, EngineError, GameConfig};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Output format for the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<ConfigurationError> for CliError {
    fn from(e: ConfigurationError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        Self::new(e.to_string())
    }
}

/// Send log records to `path`. Without a path, logging stays off so the
/// terminal UI is left alone.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub(crate) fn init_logging(path: Option<&Path>) -> Result<(), CliError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .map_err(|e| CliError::new(format!("Failed to create {}: {e}", path.display())))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| CliError::new(e.to_string()))
}

/// Use the given seed or derive one from the clock.
// Truncating the nanosecond count is fine for a seed
#[allow(clippy::cast_possible_truncation)]
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, CliError> {
    Ok(path.map(GameConfig::from_file).transpose()?.unwrap_or_default())
}

fn load_assets(dir: Option<&Path>) -> Result<Assets, CliError> {
    Ok(dir.map(Assets::load).transpose()?.unwrap_or_else(Assets::builtin))
}
