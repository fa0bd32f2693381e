//! termprobe - A terminal-control constant and window-size diagnostic tool
//!
//! A one-shot Unix utility that prints the platform's termios flag values,
//! ioctl direction bits and the current terminal dimensions, for developers
//! porting raw-mode terminal code to environments without the C headers

pub mod constants;
pub mod error;
pub mod ioc;
pub mod logging;
pub mod report;
pub mod terminal;
pub mod winsize;

// Re-export the reporter and error types for use from `main`
pub use error::{ProbeError, Result};
pub use report::ConstantReporter;
