//! Error handling.
//!
//! This module provides a custom error type for the project.
//!
//! Note that a failed TIOCGWINSZ query is *not* an error here: the reporter
//! prints the raw result code for the developer to inspect. Only operations
//! that cannot produce useful diagnostic output (writing the report, raw
//! mode setup, log file creation) surface as `ProbeError`.

use colored::*;
use std::fmt;

/// Result type alias for the probe application.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Main error type for the probe application.
#[derive(Debug)]
pub enum ProbeError {
    /// IO error.
    IoError(std::io::Error),

    /// Terminal related error (tcgetattr/tcsetattr failures, non-tty fd).
    /// Carries the failing call and the errno description.
    TerminalError(String),

    /// File access error.
    FileAccessError { path: String, reason: String },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg: String;
        match self {
            ProbeError::IoError(err) => {
                warn_msg = format!("IO error: {}", err);
            }
            ProbeError::TerminalError(err) => {
                warn_msg = format!(
                    "Terminal error: {}\n Try running in a proper terminal.",
                    err
                );
            }
            ProbeError::FileAccessError { path, reason } => {
                warn_msg = format!("File access error: Path: {}\n Reason: {}", path, reason);
            }
        }
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::IoError(err)
    }
}

impl ProbeError {
    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        ProbeError::TerminalError(err.to_string())
    }

    /// Create a terminal error from the current errno, naming the failing call
    pub fn from_errno(call: &str) -> Self {
        ProbeError::TerminalError(format!(
            "{} failed: {}",
            call,
            std::io::Error::last_os_error()
        ))
    }

    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        ProbeError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ProbeError::FileAccessError { .. } => true,
            ProbeError::TerminalError(_) => false,
            ProbeError::IoError(_) => false,
        }
    }
}
