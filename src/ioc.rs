//! ioctl request-code encoding.
//!
//! Provides the platform's ioctl direction bits (IOC_IN, IOC_OUT,
//! IOC_INOUT) and the request-code builders behind the C `_IOR`/`_IOW`/
//! `_IOWR` macros, so request values such as TIOCGWINSZ can be decoded or
//! rebuilt on a platform whose headers are unavailable.
//!
//! The direction bits are a non-portable header extension and the two
//! encodings in use disagree: Linux puts the write-to-kernel bit at
//! 0x4000_0000 with a 14-bit size field, the BSD family puts it at
//! 0x8000_0000 with a 13-bit size field. In both schemes `_IOR` (kernel
//! fills a struct for userspace) uses IOC_OUT and `_IOW` uses IOC_IN.

#[cfg(any(target_os = "linux", target_os = "android"))]
mod platform {
    /// Userspace writes, kernel reads (`_IOC_WRITE << _IOC_DIRSHIFT`).
    pub const IOC_IN: u32 = 0x4000_0000;
    /// Kernel writes, userspace reads (`_IOC_READ << _IOC_DIRSHIFT`).
    pub const IOC_OUT: u32 = 0x8000_0000;
    /// Both directions.
    pub const IOC_INOUT: u32 = IOC_IN | IOC_OUT;
    /// Mask for the parameter-length field (14 bits on Linux).
    pub const IOCPARM_MASK: u32 = 0x3fff;
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
mod platform {
    /// Userspace writes, kernel reads.
    pub const IOC_IN: u32 = 0x8000_0000;
    /// Kernel writes, userspace reads.
    pub const IOC_OUT: u32 = 0x4000_0000;
    /// Both directions.
    pub const IOC_INOUT: u32 = IOC_IN | IOC_OUT;
    /// Mask for the parameter-length field (13 bits, from sys/ioccom.h).
    pub const IOCPARM_MASK: u32 = 0x1fff;
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
)))]
compile_error!(
    "termprobe needs the platform's ioctl direction-bit encoding; \
     IOC_IN/IOC_OUT/IOC_INOUT are not defined for this target"
);

pub use platform::{IOCPARM_MASK, IOC_IN, IOC_INOUT, IOC_OUT};

/// Build a raw ioctl request code from direction bits, group character,
/// command number and parameter length (the C `_IOC` macro).
pub fn ioc(dir: u32, group: u8, num: u8, len: usize) -> u64 {
    u64::from(dir)
        | ((len as u64 & u64::from(IOCPARM_MASK)) << 16)
        | (u64::from(group) << 8)
        | u64::from(num)
}

/// Build a read request code: the kernel fills a `len`-byte structure for
/// userspace (the C `_IOR` macro).
pub fn ior(group: u8, num: u8, len: usize) -> u64 {
    ioc(IOC_OUT, group, num, len)
}

/// Build a write request code: userspace passes a `len`-byte structure to
/// the kernel (the C `_IOW` macro).
pub fn iow(group: u8, num: u8, len: usize) -> u64 {
    ioc(IOC_IN, group, num, len)
}

/// Build a read/write request code (the C `_IOWR` macro).
pub fn iorw(group: u8, num: u8, len: usize) -> u64 {
    ioc(IOC_INOUT, group, num, len)
}
