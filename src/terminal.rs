//! Raw-mode terminal control.
//!
//! The flags this crate dumps exist to configure raw mode; this module is
//! the working counterpart, switching a terminal fd into raw mode with the
//! same flag set the dump reports and restoring the saved attributes when
//! the guard is dropped.

use crate::{ProbeError, Result};
use log::warn;
use std::mem;
use std::os::unix::io::RawFd;

/// Whether `fd` refers to a terminal device.
pub fn is_tty(fd: RawFd) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Guard holding a terminal in raw mode. The attributes in effect before
/// `enable` are restored on drop.
#[derive(Debug)]
pub struct RawMode {
    fd: RawFd,
    original: libc::termios,
}

impl RawMode {
    /// Switch the terminal behind `fd` into raw mode.
    ///
    /// Clears ECHO, ICANON, IEXTEN and ISIG in the local flags, IXON and
    /// ICRNL in the input flags, and OPOST in the output flags, applied
    /// with TCSAFLUSH so pending input is discarded first.
    pub fn enable(fd: RawFd) -> Result<Self> {
        let mut termios: libc::termios = unsafe { mem::zeroed() };
        if unsafe { libc::tcgetattr(fd, &mut termios) } != 0 {
            return Err(ProbeError::from_errno("tcgetattr"));
        }
        let original = termios;

        termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
        termios.c_iflag &= !(libc::IXON | libc::ICRNL);
        termios.c_oflag &= !libc::OPOST;

        if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, &termios) } != 0 {
            return Err(ProbeError::from_errno("tcsetattr"));
        }
        Ok(Self { fd, original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        // Best effort: the fd may already be closed during teardown
        let rc = unsafe { libc::tcsetattr(self.fd, libc::TCSAFLUSH, &self.original) };
        if rc != 0 {
            warn!(
                "failed to restore terminal attributes on fd {}: {}",
                self.fd,
                std::io::Error::last_os_error()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn test_regular_file_is_not_a_tty() {
        let file = tempfile::tempfile().unwrap();
        assert!(!is_tty(file.as_raw_fd()));
    }

    #[test]
    fn test_enable_fails_on_regular_file() {
        let file = tempfile::tempfile().unwrap();
        let err = RawMode::enable(file.as_raw_fd()).unwrap_err();
        assert!(matches!(err, ProbeError::TerminalError(_)));
        assert!(err.to_string().contains("tcgetattr failed:"));
    }

    #[test]
    fn test_enable_fails_on_closed_fd() {
        let file = tempfile::tempfile().unwrap();
        let fd = file.as_raw_fd();
        drop(file);
        assert!(RawMode::enable(fd).is_err());
    }
}
