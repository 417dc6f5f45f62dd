//! joysync: asynchronously synchronized joystick state.
//!
//! Exposes a joystick as a continuously updated [`DeviceState`] snapshot. A background
//! [`EventHandler`] drains the device's events and folds them into the state under a
//! lock; any thread can take a coherent copy with [`AsyncState::query`].
//!
//! ```no_run
//! # #[cfg(target_os = "linux")]
//! # fn main() -> joysync::Result<()> {
//! use joysync::backends::linux::Joystick;
//! use joysync::AsyncState;
//!
//! let js = Joystick::connect("/dev/input/js0")?;
//! let sync = AsyncState::create(js)?;
//! let state = sync.query()?;
//! println!("buttons={:#x} axes={:?}", state.buttons, state.axes);
//! sync.destroy().result?;
//! # Ok(())
//! # }
//! # #[cfg(not(target_os = "linux"))]
//! # fn main() {}
//! ```

pub mod backends;
pub mod config;
pub mod device;
pub mod error;
pub mod event;
pub mod handler;
pub mod layouts;
pub mod metadata;
pub mod state;
pub mod sync;

pub use config::*;
pub use device::*;
pub use error::*;
pub use event::*;
pub use handler::*;
pub use metadata::*;
pub use state::*;
pub use sync::*;
