//! CLI argument parsing for csek-bench

use std::path::PathBuf;

use clap::Parser;

use crate::config::{parse_command, BenchConfig};
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "csek-bench")]
#[command(version)]
#[command(
    about = "Drive the gcsfuse read/write benchmarks over a range of file sizes",
    long_about = None
)]
pub struct Cli {
    /// Number of runs (each run benchmarks every size, read then write)
    #[arg(value_name = "RUNS", value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    /// Benchmark invocations per file size [default: 50]
    #[arg(value_name = "REPS", value_parser = clap::value_parser!(u32).range(1..))]
    pub reps: Option<u32>,

    /// TOML file with session settings (command-line flags take precedence)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory receiving the run-<n> folders [default: artifact-data]
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Prefix for data file names [default: csek]
    #[arg(long = "strategy", value_name = "NAME")]
    pub strategy: Option<String>,

    /// Mount point handed to the benchmarks as --dir [default: mnt]
    #[arg(long = "mount-dir", value_name = "DIR")]
    pub mount_dir: Option<String>,

    /// Remount script handed to the benchmarks as --mount_cmd [default: smh/mount.sh]
    #[arg(long = "mount-cmd", value_name = "PATH")]
    pub mount_cmd: Option<String>,

    /// Read benchmark --duration value [default: 0s]
    #[arg(long = "duration", value_name = "DURATION")]
    pub duration: Option<String>,

    /// Read benchmark command line [default: go run benchmarks/read_full_file/main.go]
    #[arg(long = "read-cmd", value_name = "CMD")]
    pub read_cmd: Option<String>,

    /// Write benchmark command line [default: go run benchmarks/write_to_gcs/main.go]
    #[arg(long = "write-cmd", value_name = "CMD")]
    pub write_cmd: Option<String>,

    /// Bytes per read(2) call, forwarded as --read_size
    #[arg(long = "read-size", value_name = "BYTES")]
    pub read_size: Option<u64>,

    /// Bytes per write(2) call, forwarded as --write_size
    #[arg(long = "write-size", value_name = "BYTES")]
    pub write_size: Option<u64>,

    /// Comma-separated file sizes in bytes (e.g., --sizes 10240,1048576)
    #[arg(long = "sizes", value_name = "BYTES", value_delimiter = ',')]
    pub sizes: Vec<u64>,

    /// Enable trace-level logging
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Resolve the session configuration: defaults, then --config, then flags
    pub fn to_config(&self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => BenchConfig::default(),
        };

        if let Some(reps) = self.reps {
            config.repetitions = reps;
        }
        if !self.sizes.is_empty() {
            config.sizes = self.sizes.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(strategy) = &self.strategy {
            config.strategy = strategy.clone();
        }
        if let Some(dir) = &self.mount_dir {
            config.mount_dir = dir.clone();
        }
        if let Some(cmd) = &self.mount_cmd {
            config.mount_cmd = cmd.clone();
        }
        if let Some(duration) = &self.duration {
            config.read_duration = duration.clone();
        }
        if let Some(cmd) = &self.read_cmd {
            config.read_command = parse_command(cmd);
        }
        if let Some(cmd) = &self.write_cmd {
            config.write_command = parse_command(cmd);
        }
        if self.read_size.is_some() {
            config.read_size = self.read_size;
        }
        if self.write_size.is_some() {
            config.write_size = self.write_size;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_runs() {
        assert!(Cli::try_parse_from(["csek-bench"]).is_err());
    }

    #[test]
    fn test_cli_runs_only_uses_defaults() {
        let cli = Cli::parse_from(["csek-bench", "3"]);
        assert_eq!(cli.runs, 3);
        assert!(cli.reps.is_none());

        let config = cli.to_config().unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_cli_reps_positional() {
        let cli = Cli::parse_from(["csek-bench", "1", "2"]);
        assert_eq!(cli.reps, Some(2));
        assert_eq!(cli.to_config().unwrap().repetitions, 2);
    }

    #[test]
    fn test_cli_rejects_zero_and_garbage() {
        assert!(Cli::try_parse_from(["csek-bench", "0"]).is_err());
        assert!(Cli::try_parse_from(["csek-bench", "1", "0"]).is_err());
        assert!(Cli::try_parse_from(["csek-bench", "many"]).is_err());
    }

    #[test]
    fn test_cli_sizes_override() {
        let cli = Cli::parse_from(["csek-bench", "1", "--sizes", "1024,2048"]);
        assert_eq!(cli.sizes, vec![1024, 2048]);
        assert_eq!(cli.to_config().unwrap().sizes, vec![1024, 2048]);
    }

    #[test]
    fn test_cli_duplicate_sizes_rejected() {
        let cli = Cli::parse_from(["csek-bench", "1", "--sizes", "10240,10240"]);
        assert!(cli.to_config().is_err());
    }

    #[test]
    fn test_cli_commands_split_on_whitespace() {
        let cli = Cli::parse_from([
            "csek-bench",
            "1",
            "--read-cmd",
            "sh ./fake-read.sh",
            "--write-cmd",
            "./fake-write",
        ]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.read_command, vec!["sh", "./fake-read.sh"]);
        assert_eq!(config.write_command, vec!["./fake-write"]);
    }

    #[test]
    fn test_cli_empty_command_rejected() {
        let cli = Cli::parse_from(["csek-bench", "1", "--read-cmd", "  "]);
        assert!(cli.to_config().is_err());
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bench.toml");
        std::fs::write(&path, "repetitions = 7\nstrategy = \"sse\"\nread_size = 512\n").unwrap();

        let cli = Cli::parse_from([
            "csek-bench",
            "1",
            "3",
            "--config",
            path.to_str().unwrap(),
            "--mount-dir",
            "/mnt/gcs",
        ]);
        let config = cli.to_config().unwrap();
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.strategy, "sse");
        assert_eq!(config.read_size, Some(512));
        assert_eq!(config.mount_dir, "/mnt/gcs");
    }

    #[test]
    fn test_cli_debug_default_false() {
        let cli = Cli::parse_from(["csek-bench", "1"]);
        assert!(!cli.debug);
    }
}
