//! Per-run, per-mode text log
//!
//! Format, one block per size, entries in repetition order:
//!
//! ```text
//! ---
//! At file: artifact-data/run-1/csek-read-10240.dat
//! stdout:
//! <captured text>
//! stderr:
//! <captured text>
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};
use crate::runner::Outcome;

/// Separator written at the start of every size block
pub const BLOCK_SEPARATOR: &str = "---";

/// Append-only writer for one log file
#[derive(Debug)]
pub struct RunLog<W: Write> {
    writer: W,
    path: PathBuf,
}

impl RunLog<BufWriter<File>> {
    /// Create (or truncate) the log file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| BenchError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> RunLog<W> {
    /// Wrap an arbitrary writer; `path` is only used in error messages
    pub fn new(writer: W, path: &Path) -> Self {
        Self {
            writer,
            path: path.to_path_buf(),
        }
    }

    /// Start the block for one data file
    pub fn begin_block(&mut self, data_path: &Path) -> Result<()> {
        let header = format!("{}\nAt file: {}\n", BLOCK_SEPARATOR, data_path.display());
        self.write(header.as_bytes())
    }

    /// Append one repetition's captured output
    ///
    /// Flushed immediately so a long session can be followed with `tail -f`.
    pub fn record(&mut self, outcome: &Outcome) -> Result<()> {
        let entry = format!("{}:\n{}\n", outcome.stream_name(), outcome.text());
        self.write(entry.as_bytes())?;
        self.flush()
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|source| BenchError::LogFile {
                path: self.path.clone(),
                source,
            })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| BenchError::LogFile {
            path: self.path.clone(),
            source,
        })
    }
}
