//! Event source backends for `joysync`.
//!
//! Implementations of [`EventSource`](crate::device::EventSource).
//!
//! # Feature flags
//! - **`joystick`**: enables the Linux joystick backend (default).
//!
//! The [`virtual_input`] backend is always available and is what the tests run against.

#[cfg(all(feature = "joystick", target_os = "linux"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "joystick", target_os = "linux"))))]
pub mod linux;

pub mod virtual_input;
