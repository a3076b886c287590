//! Append-only transcript of every relocation performed in a run.

use crate::error::{Result, TriageError};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait ActionLog {
    /// Appends one line for a completed relocation.
    fn record(&mut self, command: &str) -> Result<()>;
}

/// Action log backed by a file opened once in append mode.
pub struct FileActionLog {
    path: PathBuf,
    file: File,
}

impl FileActionLog {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| TriageError::LogFile {
                path: path.clone(),
                source,
            })?;

        log::info!("Action log: {}", path.display());

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActionLog for FileActionLog {
    fn record(&mut self, command: &str) -> Result<()> {
        writeln!(self.file, "{}", command)
            .and_then(|_| self.file.flush())
            .map_err(|source| TriageError::LogFile {
                path: self.path.clone(),
                source,
            })
    }
}

impl ActionLog for Vec<String> {
    fn record(&mut self, command: &str) -> Result<()> {
        self.push(command.to_string());
        Ok(())
    }
}
