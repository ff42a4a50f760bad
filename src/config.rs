// Configuration for a benchmark session
//
// Every knob the driver needs lives in one explicit struct that is handed to the
// orchestrator. Nothing is read from process-wide globals.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};

/// File sizes benchmarked in every run, ascending: 10KiB, 100KiB, 1MiB, 10MiB, 100MiB
pub const DEFAULT_SIZES: [u64; 5] = [10_240, 102_400, 1_048_576, 10_485_760, 104_857_600];

/// Invocations per (mode, size) pair when none are requested
pub const DEFAULT_REPETITIONS: u32 = 50;

/// Configuration for a benchmark session
///
/// `Default` reproduces the stock gcsfuse CSEK setup: the Go read/write
/// benchmarks run through `go run`, against the `mnt` mount point, remounted by
/// `smh/mount.sh`.
///
/// # Example
/// ```
/// use csek_bench::config::BenchConfig;
///
/// let config = BenchConfig::default();
/// assert_eq!(config.repetitions, 50);
/// assert_eq!(config.sizes.len(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Invocations of the benchmark program per (mode, size) pair
    ///
    /// This is a count of attempts, not of successes: a failed invocation still
    /// uses up its slot.
    pub repetitions: u32,

    /// File sizes in bytes, benchmarked in list order
    pub sizes: Vec<u64>,

    /// Root directory holding one `run-<n>` folder per run
    pub output_dir: PathBuf,

    /// Prefix of the per-size data files (`<strategy>-read-<size>.dat`)
    pub strategy: String,

    /// Value of `--dir` passed to both benchmark programs
    pub mount_dir: String,

    /// Value of `--mount_cmd` passed to both benchmark programs
    pub mount_cmd: String,

    /// Value of `--duration` passed to the read benchmark
    pub read_duration: String,

    /// Program and leading arguments of the read benchmark
    pub read_command: Vec<String>,

    /// Program and leading arguments of the write benchmark
    pub write_command: Vec<String>,

    /// Forwarded as `--read_size` when set
    pub read_size: Option<u64>,

    /// Forwarded as `--write_size` when set
    pub write_size: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from("artifact-data"),
            strategy: "csek".to_string(),
            mount_dir: "mnt".to_string(),
            mount_cmd: "smh/mount.sh".to_string(),
            read_duration: "0s".to_string(),
            read_command: parse_command("go run benchmarks/read_full_file/main.go"),
            write_command: parse_command("go run benchmarks/write_to_gcs/main.go"),
            read_size: None,
            write_size: None,
        }
    }
}

impl BenchConfig {
    /// Parse a configuration from TOML text
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self> {
        toml::from_str(raw).map_err(|source| BenchError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw, path)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig(
                "repetitions must be >= 1".to_string(),
            ));
        }

        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "size list must not be empty".to_string(),
            ));
        }

        if self.sizes.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "file sizes must be > 0".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::with_capacity(self.sizes.len());
        if let Some(dup) = self.sizes.iter().find(|size| !seen.insert(**size)) {
            return Err(BenchError::InvalidConfig(format!(
                "file size {} is listed more than once",
                dup
            )));
        }

        if self.strategy.is_empty() {
            return Err(BenchError::InvalidConfig(
                "strategy name must not be empty".to_string(),
            ));
        }

        if self.read_command.is_empty() {
            return Err(BenchError::InvalidConfig(
                "read benchmark command must not be empty".to_string(),
            ));
        }

        if self.write_command.is_empty() {
            return Err(BenchError::InvalidConfig(
                "write benchmark command must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Split a command line such as `go run main.go` into program and arguments
///
/// Splitting is on whitespace only; quoting is not interpreted.
pub fn parse_command(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
