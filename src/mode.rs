//! Benchmark modes
//!
//! Each run has a read phase followed by a write phase. The mode decides which
//! external program is driven, which flags it receives, and where its log and
//! data files live.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use crate::config::BenchConfig;

/// Read or write phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Read,
    Write,
}

impl Mode {
    /// Phases of a run, in execution order
    pub const ALL: [Mode; 2] = [Mode::Read, Mode::Write];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Read => "read",
            Mode::Write => "write",
        }
    }

    /// Log file name inside a run directory (`read-logs.txt`)
    pub fn log_file_name(self) -> String {
        format!("{}-logs.txt", self.as_str())
    }

    /// Data file name for one size (`csek-read-10240.dat`)
    pub fn data_file_name(self, strategy: &str, size: u64) -> String {
        format!("{}-{}-{}.dat", strategy, self.as_str(), size)
    }

    /// Program and leading arguments for this mode
    pub fn command(self, config: &BenchConfig) -> &[String] {
        match self {
            Mode::Read => &config.read_command,
            Mode::Write => &config.write_command,
        }
    }

    /// Flags handed to the benchmark program for one repetition
    ///
    /// Only the read benchmark takes `--duration`. The optional per-call I/O size
    /// is appended last, and only when configured. The data path is passed through
    /// as raw OS bytes.
    pub fn benchmark_args(
        self,
        config: &BenchConfig,
        size: u64,
        data_path: &Path,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--dir".into(),
            config.mount_dir.as_str().into(),
            "--file_size".into(),
            size.to_string().into(),
        ];

        if self == Mode::Read {
            args.push("--duration".into());
            args.push(config.read_duration.as_str().into());
        }

        args.push("--mount_cmd".into());
        args.push(config.mount_cmd.as_str().into());
        args.push("--raw_out".into());
        args.push(data_path.as_os_str().to_os_string());

        let io_size = match self {
            Mode::Read => config.read_size.map(|n| ("--read_size", n)),
            Mode::Write => config.write_size.map(|n| ("--write_size", n)),
        };
        if let Some((flag, n)) = io_size {
            args.push(flag.into());
            args.push(n.to_string().into());
        }

        args
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(Mode::Read.log_file_name(), "read-logs.txt");
        assert_eq!(Mode::Write.log_file_name(), "write-logs.txt");
        assert_eq!(
            Mode::Read.data_file_name("csek", 10240),
            "csek-read-10240.dat"
        );
        assert_eq!(
            Mode::Write.data_file_name("csek", 104857600),
            "csek-write-104857600.dat"
        );
    }

    #[test]
    fn test_read_phase_runs_first() {
        assert_eq!(Mode::ALL, [Mode::Read, Mode::Write]);
    }

    #[test]
    fn test_read_args() {
        let config = BenchConfig::default();
        let args = Mode::Read.benchmark_args(
            &config,
            1048576,
            Path::new("artifact-data/run-1/csek-read-1048576.dat"),
        );
        assert_eq!(
            args,
            vec![
                "--dir",
                "mnt",
                "--file_size",
                "1048576",
                "--duration",
                "0s",
                "--mount_cmd",
                "smh/mount.sh",
                "--raw_out",
                "artifact-data/run-1/csek-read-1048576.dat",
            ]
        );
    }

    #[test]
    fn test_write_args_have_no_duration() {
        let config = BenchConfig::default();
        let args = Mode::Write.benchmark_args(&config, 10240, Path::new("out.dat"));
        assert!(!args.iter().any(|a| a == "--duration"));
        assert_eq!(
            args,
            vec![
                "--dir",
                "mnt",
                "--file_size",
                "10240",
                "--mount_cmd",
                "smh/mount.sh",
                "--raw_out",
                "out.dat",
            ]
        );
    }

    #[test]
    fn test_io_size_forwarded_per_mode() {
        let config = BenchConfig {
            read_size: Some(4096),
            write_size: Some(8192),
            ..Default::default()
        };
        let read = Mode::Read.benchmark_args(&config, 10240, Path::new("r.dat"));
        let write = Mode::Write.benchmark_args(&config, 10240, Path::new("w.dat"));

        assert_eq!(&read[read.len() - 2..], ["--read_size", "4096"]);
        assert_eq!(&write[write.len() - 2..], ["--write_size", "8192"]);
        assert!(!read.iter().any(|a| a == "--write_size"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_data_path_passed_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let config = BenchConfig::default();
        let data_path = Path::new(OsStr::from_bytes(b"out-\xff/csek-write-10240.dat"));
        let args = Mode::Write.benchmark_args(&config, 10240, data_path);

        assert_eq!(
            args[args.len() - 1].as_bytes(),
            b"out-\xff/csek-write-10240.dat"
        );
    }

    #[test]
    fn test_command_selects_program() {
        let config = BenchConfig::default();
        assert_eq!(
            Mode::Read.command(&config).last().map(String::as_str),
            Some("benchmarks/read_full_file/main.go")
        );
        assert_eq!(
            Mode::Write.command(&config).last().map(String::as_str),
            Some("benchmarks/write_to_gcs/main.go")
        );
    }
}
