//! Known controller layouts.

/// Logitech Gamepad F710 (XInput mode) channel layout.
pub mod f710 {
    use crate::state::{DeviceState, MAX_AXES};

    const _: () = assert!(MAX_AXES >= 8);

    /// Buttons, as bit masks into [`DeviceState::buttons`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[repr(u32)]
    pub enum F710Button {
        A = 1 << 0,
        B = 1 << 1,
        X = 1 << 2,
        Y = 1 << 3,
        LB = 1 << 4,
        RB = 1 << 5,
        Back = 1 << 6,
        Start = 1 << 7,
        Logo = 1 << 8,
    }

    /// Axes, as indices into [`DeviceState::axes`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[repr(usize)]
    pub enum F710Axis {
        LeftX = 0,
        LeftY = 1,
        LT = 2,
        RightX = 3,
        RightY = 4,
        RT = 5,
        ArrowX = 6,
        ArrowY = 7,
    }

    impl F710Button {
        pub const ALL: [F710Button; 9] = [
            F710Button::A,
            F710Button::B,
            F710Button::X,
            F710Button::Y,
            F710Button::LB,
            F710Button::RB,
            F710Button::Back,
            F710Button::Start,
            F710Button::Logo,
        ];

        #[inline]
        pub fn mask(self) -> u32 {
            self as u32
        }
    }

    impl DeviceState {
        pub fn is_pressed(&self, button: F710Button) -> bool {
            self.buttons & button.mask() != 0
        }

        pub fn axis_of(&self, axis: F710Axis) -> i16 {
            self.axes[axis as usize]
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::RawEvent;

        #[test]
        fn masks_match_button_indices() {
            for (i, button) in F710Button::ALL.iter().enumerate() {
                assert_eq!(button.mask(), 1 << i);
            }
        }

        #[test]
        fn reads_named_channels() {
            let mut state = DeviceState::default();
            state.apply(&RawEvent::button(1, 7, true)).unwrap();
            state.apply(&RawEvent::axis(2, 5, 32767)).unwrap();

            assert!(state.is_pressed(F710Button::Start));
            assert!(!state.is_pressed(F710Button::A));
            assert_eq!(state.axis_of(F710Axis::RT), 32767);
        }
    }
}
