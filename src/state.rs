//! Folded joystick state.
//!
//! [`DeviceState`] is an **owned**, `Copy` projection of everything a joystick has
//! reported so far: the timestamp of the most recent update, a bitset of button values
//! and a fixed array of axis positions. It is produced by folding [`RawEvent`]s through
//! [`DeviceState::apply`] and handed out by value from
//! [`AsyncState::query`](crate::sync::AsyncState::query).
//!
//! # Capacity
//! Buttons are packed into a `u32`, so at most [`MAX_BUTTONS`] (32) are tracked.
//! [`MAX_AXES`] is independent and may be raised to fit the hardware. Events whose
//! index is at or beyond capacity are rejected, never truncated.
//!
//! # Examples
//! ```
//! use joysync::{DeviceState, RawEvent};
//!
//! let mut state = DeviceState::default();
//! state.apply(&RawEvent::button(10, 2, true)).unwrap();
//! state.apply(&RawEvent::axis(20, 0, 500)).unwrap();
//! assert!(state.button(2));
//! assert_eq!(state.axis(0), Some(500));
//! assert_eq!(state.time, 20);
//! ```

use serde::Serialize;

use crate::event::RawEvent;
use crate::{Error, Result};

/// Number of buttons tracked; bounded by the width of [`DeviceState::buttons`].
pub const MAX_BUTTONS: usize = 32;

/// Number of axes tracked.
pub const MAX_AXES: usize = 8;

const _: () = assert!(MAX_BUTTONS <= u32::BITS as usize);

/// Snapshot of one joystick's buttons and axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    /// Timestamp (ms) of the most recently folded event.
    pub time: u32,
    /// Button values, bit `i` set while button `i` is pressed.
    pub buttons: u32,
    /// Axis positions.
    pub axes: [i16; MAX_AXES],
}

impl DeviceState {
    /// Fold one event into the state.
    ///
    /// On error the state is left untouched. The caller is responsible for any locking.
    pub fn apply(&mut self, event: &RawEvent) -> Result<()> {
        let index = event.number as usize;

        if event.is_button() {
            if index >= MAX_BUTTONS {
                return Err(Error::ButtonOutOfRange {
                    index: event.number,
                    capacity: MAX_BUTTONS,
                });
            }
            if event.value != 0 {
                self.buttons |= 1 << index;
            } else {
                self.buttons &= !(1 << index);
            }
        } else if event.is_axis() {
            if index >= MAX_AXES {
                return Err(Error::AxisOutOfRange {
                    index: event.number,
                    capacity: MAX_AXES,
                });
            }
            self.axes[index] = event.value;
        } else {
            return Err(Error::UnknownEventKind(event.kind));
        }

        self.time = event.time;
        Ok(())
    }

    /// Whether button `index` is pressed (false if out of range).
    #[inline]
    pub fn button(&self, index: usize) -> bool {
        index < MAX_BUTTONS && self.buttons & (1 << index) != 0
    }

    /// Position of axis `index`, or `None` if out of range.
    #[inline]
    pub fn axis(&self, index: usize) -> Option<i16> {
        self.axes.get(index).copied()
    }

    /// Iterate the indices of all pressed buttons.
    pub fn pressed(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_BUTTONS).filter(move |&i| self.button(i))
    }
}
