//! Error types for the engine.
//!
//! Only startup can fail: bad assets or bad configuration abort `run` before
//! the first tic. Once the loop is running, out-of-bounds positions are
//! clamped and hits travel through the hit registry, so neither ever
//! surfaces as an error. The remaining failure is terminal I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal startup error: assets or settings are unusable.
#[derive(Debug)]
pub enum ConfigurationError {
    /// An asset or config file could not be read.
    Io {
        /// The file or directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A config file is not valid JSON for [`crate::GameConfig`].
    Parse {
        /// The config file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// A frame set has no frames.
    EmptyFrameSet {
        /// Name of the frame set (`ship`, `garbage`, ...).
        set: &'static str,
    },
    /// A frame contains nothing but whitespace.
    BlankFrame {
        /// Name of the frame set.
        set: &'static str,
        /// Position of the frame within the set.
        index: usize,
    },
    /// The spawn-rate table has no brackets.
    EmptySpawnTable,
    /// A spawn bracket's year does not come after the previous bracket's.
    UnorderedSpawnTable {
        /// The offending bracket year.
        year: u32,
    },
    /// A spawn bracket is slower than the bracket before it.
    RisingSpawnDelay {
        /// The offending bracket year.
        year: u32,
    },
    /// A spawn bracket has a zero delay.
    ZeroSpawnDelay {
        /// The offending bracket year.
        year: u32,
    },
    /// A numeric setting is out of range.
    InvalidSetting {
        /// Setting name as it appears in the config file.
        name: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The surface cannot hold a bordered playfield.
    SurfaceTooSmall {
        /// Surface rows.
        rows: u16,
        /// Surface columns.
        columns: u16,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            Self::EmptyFrameSet { set } => write!(f, "frame set '{set}' has no frames"),
            Self::BlankFrame { set, index } => {
                write!(f, "frame {index} of set '{set}' is blank")
            }
            Self::EmptySpawnTable => write!(f, "spawn table has no brackets"),
            Self::UnorderedSpawnTable { year } => {
                write!(f, "spawn bracket {year} is not after the previous bracket")
            }
            Self::RisingSpawnDelay { year } => {
                write!(f, "spawn bracket {year} has a longer delay than the previous bracket")
            }
            Self::ZeroSpawnDelay { year } => write!(f, "spawn bracket {year} has a zero delay"),
            Self::InvalidSetting { name, reason } => write!(f, "invalid setting '{name}': {reason}"),
            Self::SurfaceTooSmall { rows, columns } => {
                write!(f, "surface {rows}x{columns} is too small to play on")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error returned by [`crate::run`].
#[derive(Debug)]
pub enum EngineError {
    /// Startup validation failed; no tic was run.
    Configuration(ConfigurationError),
    /// Presenting a frame or reading the terminal failed.
    Terminal(io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration error: {e}"),
            Self::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::Terminal(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for EngineError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        Self::Terminal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_mentions_details() {
        let e = ConfigurationError::BlankFrame {
            set: "garbage",
            index: 2,
        };
        assert_eq!(e.to_string(), "frame 2 of set 'garbage' is blank");

        let e = ConfigurationError::SurfaceTooSmall { rows: 2, columns: 8 };
        assert!(e.to_string().contains("2x8"));
    }

    #[test]
    fn test_engine_error_wraps_source() {
        let e = EngineError::from(ConfigurationError::EmptySpawnTable);
        assert!(e.to_string().starts_with("configuration error"));
        assert!(e.source().is_some());

        let io = EngineError::from(io::Error::other("boom"));
        assert!(matches!(io, EngineError::Terminal(_)));
    }
}
