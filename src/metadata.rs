//! Joystick properties.
//!
//! [`Properties`] is a lightweight, cloneable description of a connected joystick as
//! reported by the driver, suitable for display and logging. Query it before attaching a
//! handler: once a source is handed to an [`EventHandler`](crate::handler::EventHandler)
//! it belongs to the handler thread.
//!
//! # Example
//! ```no_run
//! # #[cfg(target_os = "linux")]
//! # fn main() -> joysync::Result<()> {
//! use joysync::backends::linux::Joystick;
//!
//! let js = Joystick::connect("/dev/input/js0")?;
//! println!("{}", js.properties()?);
//! # Ok(())
//! # }
//! # #[cfg(not(target_os = "linux"))]
//! # fn main() {}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Driver-reported description of a joystick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Product name reported by the driver.
    pub name: String,

    /// Joystick driver version (`JS_VERSION` encoding, e.g. `0x020100`).
    pub driver_version: u32,

    /// Number of buttons the device exposes. May exceed what
    /// [`DeviceState`](crate::state::DeviceState) can track.
    pub buttons: u8,

    /// Number of axes the device exposes.
    pub axes: u8,
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{driver version: {}, number of axes: {}, number of buttons: {}}}",
            self.name, self.driver_version, self.axes, self.buttons
        )
    }
}
