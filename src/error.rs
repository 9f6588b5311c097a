//! Error handling for Levelcost
//!
//! Parsing and expansion never fail (malformed descriptor fragments are
//! silently ignored), so errors only arise at the I/O and serialization
//! boundary of the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Levelcost operations
pub type Result<T> = std::result::Result<T, LevelCostError>;

/// Main error type for Levelcost operations
#[derive(Error, Debug)]
pub enum LevelCostError {
    #[error("Failed to read formula file: {path}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file: {path}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LevelCostError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            LevelCostError::FileReadError { .. } => "FILE_READ_ERROR",
            LevelCostError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            LevelCostError::Io(_) => "IO_ERROR",
            LevelCostError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = LevelCostError::FileReadError {
            path: "formulas.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.error_code(), "FILE_READ_ERROR");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: LevelCostError = io.into();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
