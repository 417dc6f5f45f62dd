//! Crate-wide error type.
//!
//! Every fallible operation in `joysync` returns [`Result<T>`]. The variants map onto
//! four failure classes:
//! - **contract violations** reported by the state folder (out-of-range index,
//!   unknown event kind),
//! - **source failures** from the device (I/O, fcntl/ioctl, short reads),
//! - **synchronization failures** (a poisoned lock, a panicked handler thread),
//! - **setup failures** (thread spawn, configuration parsing).
//!
//! "No event available" is not an error; sources report it as `Ok(None)`.

use std::io;

use thiserror::Error;

/// Errors produced by sources, the state folder, the event handler and the synchronizer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(target_os = "linux")]
    #[error("system call failed: {0}")]
    Sys(#[from] nix::errno::Errno),

    /// A read returned part of an event record. Treated as fatal, never retried.
    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },

    #[error("button index {index} out of range (capacity {capacity})")]
    ButtonOutOfRange { index: u8, capacity: usize },

    #[error("axis index {index} out of range (capacity {capacity})")]
    AxisOutOfRange { index: u8, capacity: usize },

    #[error("unrecognized event kind 0x{0:02x}")]
    UnknownEventKind(u8),

    #[error("state lock poisoned")]
    LockPoisoned,

    #[error("failed to spawn event handler thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("event handler thread panicked")]
    HandlerPanicked,

    /// Failure reported by a user-supplied event callback.
    #[error("event callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an arbitrary error raised inside an event callback.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Callback(err.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
