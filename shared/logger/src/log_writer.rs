//! Dedicated writer thread draining the log channel into the file.

use crate::error::Result;
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

/// Owns the open log file and writes records as they arrive.
pub(crate) struct LogWriter {
    file: File,
    path: PathBuf,
}

impl LogWriter {
    /// Opens the log file in append mode, creating it if needed.
    pub fn new(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Writes one record and flushes so readers see it promptly.
    fn write_record(&mut self, record: &LogMessage) {
        let line = record.format();
        if let Err(e) = self
            .file
            .write_all(line.as_bytes())
            .and_then(|_| self.file.flush())
        {
            eprintln!("Failed to write {}: {}", self.path.display(), e);
        }
    }

    /// Drains the channel until every sender is dropped.
    pub fn run(mut self, receiver: Receiver<LogMessage>) {
        for record in receiver {
            self.write_record(&record);
        }
    }
}

/// Spawns the writer thread for a freshly opened log file.
pub(crate) fn spawn_writer_thread(path: PathBuf, receiver: Receiver<LogMessage>) -> Result<()> {
    let writer = LogWriter::new(&path)?;
    std::thread::spawn(move || writer.run(receiver));
    Ok(())
}
