//! On-disk layout of a benchmark session
//!
//! ```text
//! artifact-data/
//!   run-<n>/
//!     read-logs.txt
//!     write-logs.txt
//!     csek-read-<size>.dat
//!     csek-write-<size>.dat
//! ```

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::mode::Mode;

/// Result of [`ensure_directory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
    /// Creation failed for another reason; the directory may not exist
    Failed(String),
}

/// Make sure a directory exists at `path`, best effort
///
/// Never returns an error: an existing directory is left untouched and any other
/// failure is logged and reported through [`DirStatus::Failed`] so the caller can
/// carry on.
pub fn ensure_directory(path: &Path) -> DirStatus {
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::info!("Folder '{}' created successfully.", path.display());
            DirStatus::Created
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            tracing::info!("Folder '{}' already exists.", path.display());
            DirStatus::AlreadyExists
        }
        Err(e) => {
            tracing::warn!("Failed to create folder '{}': {}", path.display(), e);
            DirStatus::Failed(e.to_string())
        }
    }
}

/// Create an empty file at `path`, truncating any previous content
pub fn touch_empty_file(path: &Path) -> io::Result<()> {
    File::create(path)?;
    tracing::debug!("file create success: {}", path.display());
    Ok(())
}

/// Paths belonging to one run
#[derive(Debug, Clone)]
pub struct RunLayout {
    dir: PathBuf,
}

impl RunLayout {
    pub fn new(output_dir: &Path, run: u32) -> Self {
        Self {
            dir: output_dir.join(format!("run-{}", run)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn log_path(&self, mode: Mode) -> PathBuf {
        self.dir.join(mode.log_file_name())
    }

    pub fn data_path(&self, mode: Mode, strategy: &str, size: u64) -> PathBuf {
        self.dir.join(mode.data_file_name(strategy, size))
    }
}
