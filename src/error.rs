use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building or running a simulation
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("grid is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("pattern line {line}: {message}")]
    Pattern { line: usize, message: String },
    #[error("failed to parse settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
