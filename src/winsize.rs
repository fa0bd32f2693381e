//! Terminal window-size queries.
//!
//! Wraps the TIOCGWINSZ device-control query in two flavors: a raw one
//! that hands back the ioctl result code untouched (what the reporter
//! prints), and a checked one that turns failures into errors for callers
//! that actually need the dimensions.

use crate::{ProbeError, Result};
use libc::c_int;
use std::mem;
use std::os::unix::io::RawFd;

/// Terminal dimensions in character cells. The pixel fields of the
/// underlying struct are reserved and not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

/// Issue TIOCGWINSZ against `fd`, filling `ws` on success.
///
/// Returns the raw ioctl result code. On failure (negative code) the
/// kernel has not written to `ws` and its previous contents remain, which
/// is exactly what the diagnostic report wants to expose.
pub fn query_winsize(fd: RawFd, ws: &mut libc::winsize) -> c_int {
    unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, ws as *mut libc::winsize) }
}

/// Query the window size of the terminal behind `fd`, failing when the fd
/// is not a terminal or the driver reports zero columns.
pub fn window_size(fd: RawFd) -> Result<WindowSize> {
    let mut ws: libc::winsize = unsafe { mem::zeroed() };
    let rc = query_winsize(fd, &mut ws);
    if rc < 0 {
        return Err(ProbeError::from_errno("ioctl(TIOCGWINSZ)"));
    }
    if ws.ws_col == 0 {
        return Err(ProbeError::terminal_error(
            "TIOCGWINSZ reported zero columns",
        ));
    }
    Ok(WindowSize {
        rows: ws.ws_row,
        cols: ws.ws_col,
    })
}

/// Byte size of the platform's winsize structure, reported at the end of
/// the dump so struct layouts can be checked when porting.
pub fn winsize_struct_size() -> usize {
    mem::size_of::<libc::winsize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn test_query_fails_on_regular_file() {
        let file = tempfile::tempfile().unwrap();
        let mut ws: libc::winsize = unsafe { mem::zeroed() };
        let rc = query_winsize(file.as_raw_fd(), &mut ws);
        assert!(rc < 0);
    }

    #[test]
    fn test_failed_query_leaves_struct_untouched() {
        let file = tempfile::tempfile().unwrap();
        let mut ws = libc::winsize {
            ws_row: 24,
            ws_col: 80,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        let rc = query_winsize(file.as_raw_fd(), &mut ws);
        assert!(rc < 0);
        assert_eq!(ws.ws_row, 24);
        assert_eq!(ws.ws_col, 80);
    }

    #[test]
    fn test_window_size_errors_on_regular_file() {
        let file = tempfile::tempfile().unwrap();
        let err = window_size(file.as_raw_fd()).unwrap_err();
        assert!(matches!(err, ProbeError::TerminalError(_)));
    }

    #[test]
    fn test_struct_size_matches_platform() {
        assert_eq!(winsize_struct_size(), mem::size_of::<libc::winsize>());
        // Two cell fields plus two reserved pixel fields, all 16-bit
        assert!(winsize_struct_size() >= 4 * mem::size_of::<u16>());
    }
}
