//! The [`Logger`] handle.
//!
//! Logging never blocks the caller: records go over a channel to a writer
//! thread that owns the file. Clones share that thread.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::spawn_writer_thread;
use std::path::PathBuf;
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking file logger.
///
/// # Examples
///
/// ```
/// use logging::{Logger, LogLevel};
///
/// let logger = Logger::new("camera.log".into(), LogLevel::Info).unwrap();
/// logger.info("Starting device scan");
/// let uvc_logger = logger.for_component("UVC");
/// uvc_logger.warn("No devices attached");
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Sender<LogMessage>,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger and spawns its writer thread.
    ///
    /// # Arguments
    ///
    /// * `log_path` - Log file, created if missing, appended otherwise
    /// * `level` - Minimum level that gets recorded
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_writer_thread(log_path, receiver)?;
        Ok(Logger {
            sender,
            level,
            component: None,
            console_output: false,
        })
    }

    /// Returns a logger tagged with a component name.
    ///
    /// The returned logger shares this logger's writer thread and file; only
    /// the tag differs. Cheap enough to call per subsystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{Logger, LogLevel};
    ///
    /// let root = Logger::new("camera.log".into(), LogLevel::Debug).unwrap();
    /// let native = root.for_component("Native");
    /// native.debug("Probing /dev/video0");
    /// ```
    pub fn for_component(&self, component: &str) -> Self {
        let mut logger = self.clone();
        logger.component = Some(component.to_string());
        logger
    }

    /// Enables or disables echoing records to stdout.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    /// Logs at Debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs at Info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs at Warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs at Error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Filters by level, then hands the record to the writer thread.
    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }
        let record = LogMessage::new(level, self.component.clone(), message.to_string());
        if self.console_output {
            print!("{}", record.format());
        }
        // Send fails only if the writer thread is gone; nothing to do then.
        let _ = self.sender.send(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_writer() {
        thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn test_writes_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");

        let logger = Logger::new(path.clone(), LogLevel::Debug).unwrap();
        logger.info("Scan complete");
        wait_for_writer();

        assert!(path.exists());
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("Scan complete"));
    }

    #[test]
    fn test_filters_below_level() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");

        let logger = Logger::new(path.clone(), LogLevel::Warn).unwrap();
        logger.debug("noise");
        logger.info("more noise");
        logger.warn("kept");
        logger.error("also kept");
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(!content.contains("noise"));
        assert!(content.contains("kept"));
        assert!(content.contains("also kept"));
    }

    #[test]
    fn test_component_tag_appears() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");

        let root = Logger::new(path.clone(), LogLevel::Info).unwrap();
        let tagged = root.for_component("Registry");
        tagged.info("rebuilt");
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("[Registry]"));
        assert!(content.contains("rebuilt"));
    }

    #[test]
    fn test_component_logger_shares_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");

        let root = Logger::new(path.clone(), LogLevel::Info).unwrap();
        let child = root.for_component("UVC");
        root.info("from root");
        child.info("from child");
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("from root"));
        assert!(content.contains("from child"));
    }

    #[test]
    fn test_clone_works_across_threads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.log");

        let logger = Logger::new(path.clone(), LogLevel::Info).unwrap();
        let clone = logger.clone();
        let handle = thread::spawn(move || {
            clone.info("from worker");
        });
        logger.info("from main");
        handle.join().unwrap();
        wait_for_writer();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("from worker"));
        assert!(content.contains("from main"));
    }
}
