//! Daily File Logger
//!
//! Append-only audit log: one file per calendar day under a configured
//! directory, line format `[timestamp] [LEVEL] message {json-context}`.
//! The directory is created on demand. This sits alongside `tracing`
//! (process diagnostics); the file log is the operator-facing audit trail.

use chrono::Utc;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

/// Log severity, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Parse a level name (case-insensitive); unknown names default to Info
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => LogLevel::Debug,
            "WARNING" | "WARN" => LogLevel::Warning,
            "ERROR" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

#[derive(Debug, Error)]
pub enum LogfileError {
    #[error("Failed to write log file: {0}")]
    Io(#[from] std::io::Error),
}

/// Leveled, date-partitioned file logger
#[derive(Debug, Clone)]
pub struct DailyLogFile {
    dir: PathBuf,
    threshold: LogLevel,
}

impl DailyLogFile {
    pub fn new(dir: impl Into<PathBuf>, threshold: LogLevel) -> Self {
        Self {
            dir: dir.into(),
            threshold,
        }
    }

    /// Path of today's log file
    pub fn current_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.log", Utc::now().format("%Y-%m-%d")))
    }

    /// Append one line; levels below the threshold are dropped
    pub fn log(
        &self,
        level: LogLevel,
        message: &str,
        context: Option<&Value>,
    ) -> Result<(), LogfileError> {
        if level < self.threshold {
            return Ok(());
        }

        fs::create_dir_all(&self.dir)?;

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let mut line = format!("[{}] [{}] {}", timestamp, level.as_str(), message);
        if let Some(ctx) = context {
            line.push(' ');
            line.push_str(&ctx.to_string());
        }
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.current_path())?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }

    pub fn debug(&self, message: &str, context: Option<&Value>) -> Result<(), LogfileError> {
        self.log(LogLevel::Debug, message, context)
    }

    pub fn info(&self, message: &str, context: Option<&Value>) -> Result<(), LogfileError> {
        self.log(LogLevel::Info, message, context)
    }

    pub fn warning(&self, message: &str, context: Option<&Value>) -> Result<(), LogfileError> {
        self.log(LogLevel::Warning, message, context)
    }

    pub fn error(&self, message: &str, context: Option<&Value>) -> Result<(), LogfileError> {
        self.log(LogLevel::Error, message, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_log_dir() -> PathBuf {
        std::env::temp_dir().join(format!("mk-logs-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_log_line_format() {
        let dir = temp_log_dir();
        let logger = DailyLogFile::new(&dir, LogLevel::Debug);

        logger
            .info("Order created", Some(&json!({"orderId": "abc"})))
            .unwrap();

        let content = fs::read_to_string(logger.current_path()).unwrap();
        assert!(content.contains("[INFO] Order created {\"orderId\":\"abc\"}"));
        assert!(content.starts_with('['));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_creates_directory_on_demand() {
        let dir = temp_log_dir().join("nested");
        let logger = DailyLogFile::new(&dir, LogLevel::Info);

        assert!(!dir.exists());
        logger.error("boom", None).unwrap();
        assert!(logger.current_path().exists());

        fs::remove_dir_all(dir.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_threshold_filters_lower_levels() {
        let dir = temp_log_dir();
        let logger = DailyLogFile::new(&dir, LogLevel::Warning);

        logger.debug("dropped", None).unwrap();
        logger.info("dropped too", None).unwrap();
        assert!(!logger.current_path().exists());

        logger.warning("kept", None).unwrap();
        let content = fs::read_to_string(logger.current_path()).unwrap();
        assert!(content.contains("[WARNING] kept"));
        assert!(!content.contains("dropped"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::parse("WARN"), LogLevel::Warning);
        assert_eq!(LogLevel::parse("Error"), LogLevel::Error);
        assert_eq!(LogLevel::parse("unknown"), LogLevel::Info);
    }
}
