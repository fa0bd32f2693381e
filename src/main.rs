//! termprobe entry point.
//!
//! Straight-line execution: dump the constant table and the two window
//! size probes to stdout, then exit 0. Command-line arguments are accepted
//! but ignored; debug logging is keyed off the TERMPROBE_DEBUG environment
//! variable instead.

use log::{debug, info};
use std::io::Write;
use termprobe::logging;
use termprobe::terminal::is_tty;
use termprobe::ConstantReporter;

fn main() {
    if logging::debug_requested() {
        if let Err(e) = logging::init_debug_logging() {
            eprintln!("{}", e);
        }
    }

    info!("termprobe starting");
    debug!("stdin is a tty: {}", is_tty(libc::STDIN_FILENO));
    debug!("stdout is a tty: {}", is_tty(libc::STDOUT_FILENO));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = ConstantReporter::new().run(&mut out) {
        // Write failures (e.g. a closed pipe) are reported on stderr but
        // never change the exit code: the tool always exits 0
        eprintln!("{}", e);
    }
    let _ = out.flush();
}
