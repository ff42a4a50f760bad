//! External benchmark invocation
//!
//! Each repetition spawns the benchmark program, blocks until it exits, and
//! classifies the result. There is no timeout: a hung child stalls the driver.

use std::ffi::OsString;
use std::process::Command;

/// Result of one benchmark invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status zero, with the captured standard output
    Success(String),
    /// Non-zero exit or spawn failure, with the captured diagnostic
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Name of the stream the text came from (`stdout` or `stderr`)
    pub fn stream_name(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "stdout",
            Outcome::Failure(_) => "stderr",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(text) | Outcome::Failure(text) => text,
        }
    }
}

/// Something that can run a benchmark program to completion
pub trait BenchmarkRunner {
    fn run(&mut self, program: &str, args: &[OsString]) -> Outcome;
}

/// Runs benchmarks as child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkRunner for ProcessRunner {
    fn run(&mut self, program: &str, args: &[OsString]) -> Outcome {
        tracing::trace!(program, ?args, "spawning benchmark");

        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            // No child ever ran, so there is no stderr to capture.
            Err(e) => return Outcome::Failure(format!("Failed to execute {}: {}", program, e)),
        };

        if output.status.success() {
            Outcome::Success(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            tracing::debug!(program, status = %output.status, "benchmark exited unsuccessfully");
            Outcome::Failure(String::from_utf8_lossy(&output.stderr).into_owned())
        }
    }
}
