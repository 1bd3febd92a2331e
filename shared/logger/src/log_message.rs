//! Internal log record passed from the logger to the writer thread.

use crate::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One log record. The timestamp is taken when the record is created, not
/// when the writer thread gets around to it.
#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, component: Option<String>, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            component,
            message,
        }
    }

    /// Renders the record as a single log line, newline included.
    pub fn format(&self) -> String {
        let ts = self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.component {
            Some(component) => {
                format!("[{}] {} [{}]: {}\n", ts, self.level, component, self.message)
            }
            None => format!("[{}] {}: {}\n", ts, self.level, self.message),
        }
    }
}
