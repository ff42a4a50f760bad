//! csek-bench - sequential driver for external filesystem benchmarks
//!
//! For each run, the read benchmark and then the write benchmark are invoked a
//! fixed number of times per file size. Every invocation's stdout (on success) or
//! stderr (on failure) is appended to a per-run, per-mode text log.

pub mod cli;
pub mod config;
pub mod error;
pub mod fs_layout;
pub mod mode;
pub mod orchestrator;
pub mod run_log;
pub mod runner;

pub use config::BenchConfig;
pub use error::BenchError;
pub use mode::Mode;
pub use orchestrator::{Orchestrator, PhaseSummary, RunSummary};
pub use runner::{BenchmarkRunner, Outcome, ProcessRunner};
