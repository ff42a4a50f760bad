//! Run orchestration
//!
//! `Start → (ReadPhase → WritePhase) × runs → End`, strictly sequential.
//!
//! Every repetition is a single attempt. A failed attempt is written to the log
//! as a `stderr:` entry and the loop moves on to the next repetition; nothing is
//! retried, and the outcome of a repetition never changes how many are made.

use std::ffi::OsString;
use std::io::Write;

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::fs_layout::{ensure_directory, touch_empty_file, RunLayout};
use crate::mode::Mode;
use crate::run_log::RunLog;
use crate::runner::{BenchmarkRunner, Outcome};

/// Success/failure tally for one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
    pub mode: Mode,
    pub succeeded: u32,
    pub failed: u32,
}

impl PhaseSummary {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            succeeded: 0,
            failed: 0,
        }
    }

    fn record(&mut self, outcome: &Outcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn attempts(&self) -> u32 {
        self.succeeded + self.failed
    }
}

/// Tallies for both phases of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub run: u32,
    pub read: PhaseSummary,
    pub write: PhaseSummary,
}

/// Program plus leading arguments, split once up front
#[derive(Debug, Clone)]
struct ProgramCommand {
    program: String,
    prefix: Vec<OsString>,
}

impl ProgramCommand {
    fn resolve(config: &BenchConfig, mode: Mode) -> Result<Self> {
        let (program, prefix) = mode.command(config).split_first().ok_or_else(|| {
            BenchError::InvalidConfig(format!("{} benchmark command must not be empty", mode))
        })?;
        Ok(Self {
            program: program.clone(),
            prefix: prefix.iter().map(OsString::from).collect(),
        })
    }
}

/// Drives the benchmark programs and records their output
///
/// `console` receives a copy of every captured text, the same way the log does.
/// The log is the record of a session: if the console stops accepting output
/// (e.g. a closed pipe), echoing is switched off and the session carries on.
pub struct Orchestrator<R, O> {
    config: BenchConfig,
    read_command: ProgramCommand,
    write_command: ProgramCommand,
    runner: R,
    console: O,
    echo: bool,
}

impl<R: BenchmarkRunner, O: Write> Orchestrator<R, O> {
    /// Build an orchestrator; the configuration is validated first
    pub fn new(config: BenchConfig, runner: R, console: O) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            read_command: ProgramCommand::resolve(&config, Mode::Read)?,
            write_command: ProgramCommand::resolve(&config, Mode::Write)?,
            config,
            runner,
            console,
            echo: true,
        })
    }

    /// Execute runs `1..=runs`
    pub fn run(&mut self, runs: u32) -> Result<Vec<RunSummary>> {
        if runs == 0 {
            return Err(BenchError::InvalidConfig(
                "number of runs must be >= 1".to_string(),
            ));
        }

        ensure_directory(&self.config.output_dir);

        let mut summaries = Vec::with_capacity(runs as usize);
        for run in 1..=runs {
            summaries.push(self.run_once(run)?);
        }
        Ok(summaries)
    }

    /// Execute one run: read phase, then write phase
    pub fn run_once(&mut self, run: u32) -> Result<RunSummary> {
        let layout = RunLayout::new(&self.config.output_dir, run);
        ensure_directory(layout.dir());

        let read = self.run_phase(run, &layout, Mode::Read)?;
        let write = self.run_phase(run, &layout, Mode::Write)?;

        Ok(RunSummary { run, read, write })
    }

    fn run_phase(&mut self, run: u32, layout: &RunLayout, mode: Mode) -> Result<PhaseSummary> {
        let mut log = RunLog::create(&layout.log_path(mode))?;
        let mut summary = PhaseSummary::new(mode);

        for &size in &self.config.sizes {
            let data_path = layout.data_path(mode, &self.config.strategy, size);
            if let Err(e) = touch_empty_file(&data_path) {
                tracing::warn!(
                    "Failed to create data file '{}': {}",
                    data_path.display(),
                    e
                );
            }
            log.begin_block(&data_path)?;

            for rep in 1..=self.config.repetitions {
                let command = match mode {
                    Mode::Read => &self.read_command,
                    Mode::Write => &self.write_command,
                };
                let mut args = command.prefix.clone();
                args.extend(mode.benchmark_args(&self.config, size, &data_path));

                let outcome = self.runner.run(&command.program, &args);
                if !outcome.is_success() {
                    tracing::warn!(run, %mode, size, rep, "benchmark failed, not retried");
                }

                log.record(&outcome)?;
                if self.echo {
                    if let Err(e) = writeln!(self.console, "{}", outcome.text()) {
                        tracing::warn!("Console output failed, echo disabled: {}", e);
                        self.echo = false;
                    }
                }
                summary.record(&outcome);
            }
        }

        log.finish()?;
        tracing::info!(
            run,
            %mode,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "phase complete"
        );
        Ok(summary)
    }
}
