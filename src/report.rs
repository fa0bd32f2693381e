//! The diagnostic report.
//!
//! Emits the constant dump and the two window-size probes in a fixed,
//! order-sensitive format. Downstream use is a developer (or a script)
//! reading the numbers off, so the format is part of the contract:
//! `NAME=value` lines, bare integers for the query results, and a final
//! `sizeof winsize:` line with no trailing newline.

use crate::constants::termios_constants;
use crate::winsize::{query_winsize, winsize_struct_size};
use crate::Result;
use log::debug;
use std::io::Write;
use std::mem;

/// One-shot reporter for terminal-control constants and window sizes.
#[derive(Debug, Default)]
pub struct ConstantReporter;

impl ConstantReporter {
    pub fn new() -> Self {
        Self
    }

    /// Write the full report to `out`.
    ///
    /// The TIOCGWINSZ result codes are printed raw, success or failure:
    /// when a stream is not a terminal the code is negative and the row
    /// and column lines show whatever the struct held before the call.
    /// Branching on the code here would hide the very values this tool
    /// exists to expose. A single zero-initialized struct backs both
    /// queries, so a failed stdout query after a successful stdin query
    /// shows the stdin values, matching the original C inspector.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        for constant in termios_constants() {
            writeln!(out, "{}", constant)?;
        }

        let mut ws: libc::winsize = unsafe { mem::zeroed() };

        let rc = query_winsize(libc::STDIN_FILENO, &mut ws);
        debug!("TIOCGWINSZ on stdin returned {}", rc);
        writeln!(out, "{}", rc)?;
        writeln!(out, "{}", ws.ws_row)?;
        writeln!(out, "{}", ws.ws_col)?;

        let rc = query_winsize(libc::STDOUT_FILENO, &mut ws);
        debug!("TIOCGWINSZ on stdout returned {}", rc);
        writeln!(out, "{}", rc)?;
        writeln!(out, "{}", ws.ws_row)?;
        writeln!(out, "{}", ws.ws_col)?;

        write!(out, "sizeof winsize: {}", winsize_struct_size())?;
        Ok(())
    }
}
