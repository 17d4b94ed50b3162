use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::Local;

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "library_error_log.txt";

/// Best-effort, append-only log of failed catalog operations
#[derive(Debug, Clone)]
pub struct ErrorReporter {
    /// File that receives one line per failure
    path: PathBuf,
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl ErrorReporter {
    /// Create a reporter writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `<timestamp> - <message>` to the log.
    ///
    /// A failed write is reported on stderr and otherwise ignored.
    pub fn log_error(&self, message: &str) {
        if let Err(e) = self.append(message) {
            tracing::error!(path = %self.path.display(), error = %e, "failed to write error log");
            eprintln!("Failed to write to error log: {e}");
        }
    }

    /// Open, write one line, close
    fn append(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
        file.write_all(format!("{timestamp} - {message}\n").as_bytes())?;
        file.flush()
    }
}
