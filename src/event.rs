//! Raw joystick events.
//!
//! A [`RawEvent`] is one record as delivered by the Linux joystick driver
//! (`struct js_event`): an 8-byte value carrying a millisecond timestamp, a signed value,
//! a kind bitfield and a channel index.
//!
//! ## Kind conventions
//! - [`RawEvent::BUTTON`]: `value` is `0` (released) or nonzero (pressed).
//! - [`RawEvent::AXIS`]: `value` is the signed axis position (`-32767..=32767`).
//! - [`RawEvent::INIT`]: OR-ed onto either of the above for the synthetic events the
//!   driver emits right after open, describing pre-existing device state.

use std::fmt;

/// One joystick event record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawEvent {
    /// Driver timestamp in milliseconds.
    pub time: u32,
    /// Button state or axis position.
    pub value: i16,
    /// Kind bitfield (see the associated constants).
    pub kind: u8,
    /// Button or axis index.
    pub number: u8,
}

impl RawEvent {
    /// Button pressed/released.
    pub const BUTTON: u8 = 0x01;
    /// Axis moved.
    pub const AXIS: u8 = 0x02;
    /// Synthetic event describing the initial device state.
    pub const INIT: u8 = 0x80;

    /// Size of one record on the wire.
    pub const SIZE: usize = 8;

    pub fn button(time: u32, number: u8, pressed: bool) -> Self {
        Self {
            time,
            value: pressed as i16,
            kind: Self::BUTTON,
            number,
        }
    }

    pub fn axis(time: u32, number: u8, value: i16) -> Self {
        Self {
            time,
            value,
            kind: Self::AXIS,
            number,
        }
    }

    /// Mark this event as a synthetic initialization event.
    pub fn initial(mut self) -> Self {
        self.kind |= Self::INIT;
        self
    }

    /// Decode a record in the kernel's native byte order.
    pub fn from_bytes(buf: &[u8; Self::SIZE]) -> Self {
        Self {
            time: u32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]),
            value: i16::from_ne_bytes([buf[4], buf[5]]),
            kind: buf[6],
            number: buf[7],
        }
    }

    #[inline]
    pub fn is_button(&self) -> bool {
        self.kind & Self::BUTTON != 0
    }

    #[inline]
    pub fn is_axis(&self) -> bool {
        self.kind & Self::AXIS != 0
    }

    #[inline]
    pub fn is_init(&self) -> bool {
        self.kind & Self::INIT != 0
    }
}

impl fmt::Display for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.is_button() { "button" } else { "axis  " };
        write!(
            f,
            "{label} [{:02}] -> {:6} at time {:.3}s",
            self.number,
            self.value,
            self.time as f32 / 1000.0
        )
    }
}
