//! Error types for the benchmark driver
//!
//! A failed benchmark repetition is *not* an error here; it is an
//! [`Outcome::Failure`](crate::runner::Outcome::Failure) value that the
//! orchestrator records and moves past. These variants cover the cases that
//! stop the driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a benchmark session
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = BenchError::InvalidConfig("repetitions must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: repetitions must be >= 1"
        );
    }

    #[test]
    fn test_log_file_message_names_path() {
        let err = BenchError::LogFile {
            path: PathBuf::from("artifact-data/run-1/read-logs.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("artifact-data/run-1/read-logs.txt"));
        assert!(msg.contains("missing"));
    }
}
