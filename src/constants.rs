//! Terminal-control constants reported by the probe.
//!
//! This module provides the fixed set of named platform constants the tool
//! dumps: termios flags, the two control-character indices, the TIOCGWINSZ
//! request code and the ioctl direction bits.

use crate::ioc;
use std::fmt;

/// A platform constant with its header name, known at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedConstant {
    pub name: &'static str,
    pub value: u64,
}

impl NamedConstant {
    pub const fn new(name: &'static str, value: u64) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for NamedConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// The reported constants, in output order. The order is part of the
/// tool's contract: scripts that scrape the dump rely on it.
pub fn termios_constants() -> [NamedConstant; 14] {
    [
        NamedConstant::new("ISIG", libc::ISIG as u64),
        NamedConstant::new("ICANON", libc::ICANON as u64),
        NamedConstant::new("ECHO", libc::ECHO as u64),
        NamedConstant::new("TCSAFLUSH", libc::TCSAFLUSH as u64),
        NamedConstant::new("IXON", libc::IXON as u64),
        NamedConstant::new("ICRNL", libc::ICRNL as u64),
        NamedConstant::new("IEXTEN", libc::IEXTEN as u64),
        NamedConstant::new("OPOST", libc::OPOST as u64),
        NamedConstant::new("VMIN", libc::VMIN as u64),
        NamedConstant::new("VTIME", libc::VTIME as u64),
        NamedConstant::new("TIOCGWINSZ", libc::TIOCGWINSZ as u64),
        NamedConstant::new("IOC_IN", u64::from(ioc::IOC_IN)),
        NamedConstant::new("IOC_OUT", u64::from(ioc::IOC_OUT)),
        NamedConstant::new("IOC_INOUT", u64::from(ioc::IOC_INOUT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let c = NamedConstant::new("ECHO", libc::ECHO as u64);
        assert_eq!(c.to_string(), format!("ECHO={}", libc::ECHO));
    }

    #[test]
    fn test_constants_are_in_output_order() {
        let names: Vec<&str> = termios_constants().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "ISIG",
                "ICANON",
                "ECHO",
                "TCSAFLUSH",
                "IXON",
                "ICRNL",
                "IEXTEN",
                "OPOST",
                "VMIN",
                "VTIME",
                "TIOCGWINSZ",
                "IOC_IN",
                "IOC_OUT",
                "IOC_INOUT",
            ]
        );
    }

    #[test]
    fn test_values_match_platform_headers() {
        let table = termios_constants();
        assert_eq!(table[0].value, libc::ISIG as u64);
        assert_eq!(table[1].value, libc::ICANON as u64);
        assert_eq!(table[2].value, libc::ECHO as u64);
        assert_eq!(table[3].value, libc::TCSAFLUSH as u64);
        assert_eq!(table[4].value, libc::IXON as u64);
        assert_eq!(table[5].value, libc::ICRNL as u64);
        assert_eq!(table[6].value, libc::IEXTEN as u64);
        assert_eq!(table[7].value, libc::OPOST as u64);
        assert_eq!(table[8].value, libc::VMIN as u64);
        assert_eq!(table[9].value, libc::VTIME as u64);
        assert_eq!(table[10].value, libc::TIOCGWINSZ as u64);
        assert_eq!(table[11].value, u64::from(crate::ioc::IOC_IN));
        assert_eq!(table[12].value, u64::from(crate::ioc::IOC_OUT));
        assert_eq!(table[13].value, u64::from(crate::ioc::IOC_INOUT));
    }

    #[test]
    fn test_vmin_and_vtime_are_distinct_indices() {
        // VMIN/VTIME index into c_cc; equal values would mean a broken table
        assert_ne!(libc::VMIN, libc::VTIME);
    }
}
