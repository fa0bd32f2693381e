//! Logging module for debug mode
//!
//! Provides logging module that writes to /tmp file with timestamps when
//! the TERMPROBE_DEBUG environment variable is set. Log output never goes
//! to stdout: the report format there is a contract.

use log::info;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Once;

// run once in a single thread. this prevents race conditions
static INIT: Once = Once::new();

/// Environment variable that enables debug logging (the tool takes no
/// flags, so there is no --debug switch to hang this off).
pub const DEBUG_ENV_VAR: &str = "TERMPROBE_DEBUG";

/// Whether debug logging was requested for this run.
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Initializes logging module when debug mode is enabled
/// Creates a file in /tmp directory and sets up logger with timestamps
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    let mut log_path = std::env::temp_dir();
    log_path.push("termprobe-debug.log");

    // Create or truncate the log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| crate::ProbeError::FileAccessError {
            path: log_path.to_string_lossy().to_string(),
            reason: format!("Failed to create log file: {}", e),
        })?;

    // Initialize env_logger to write log file
    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug) // debug and above
            .target(env_logger::Target::Pipe(Box::new(log_file))) // pipe console to file
            .format(|buf, record| {
                // format log message
                writeln!(
                    buf,
                    "{} [{}] {}:{} - {}",
                    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S.%3f UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    // display works for path in all OSes
    info!("Debug logging initialized to: {}", log_path.display());

    Ok(log_path)
}
