//! Button snapshot type.
//!
//! The watch has four physical buttons. Input is not event-driven: the
//! session loop samples all four lines once per poll tick into a
//! [`ButtonSet`] bitmask, and on wake the firmware seeds the first
//! snapshot from the EXT1 wake status register so the press that woke
//! the device is not lost.

/// One of the four physical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Top-right: open menu / confirm / advance
    Menu,
    /// Top-left: back / alternate face
    Back,
    /// Bottom-right: move selection up / increment
    Up,
    /// Bottom-left: move selection down / decrement
    Down,
}

impl Button {
    /// All buttons, in dispatch priority order
    pub const ALL: [Button; 4] = [Button::Menu, Button::Back, Button::Up, Button::Down];

    /// Bit position of this button in a [`ButtonSet`]
    pub const fn mask(self) -> u8 {
        match self {
            Button::Menu => 1 << 0,
            Button::Back => 1 << 1,
            Button::Up => 1 << 2,
            Button::Down => 1 << 3,
        }
    }
}

/// Bitmask snapshot of the four button lines at one poll tick.
///
/// Transient per-tick input; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSet(u8);

impl ButtonSet {
    /// No buttons pressed
    pub const EMPTY: Self = Self(0);

    /// All four buttons (used to arm the wake-source OR)
    pub const ALL: Self = Self(0b1111);

    /// Build a snapshot from raw bits (extra bits are discarded)
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Raw bitmask
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Snapshot of a single pressed button
    pub const fn just(button: Button) -> Self {
        Self(button.mask())
    }

    /// This snapshot with `button` added
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    /// Whether `button` is down in this snapshot
    pub const fn pressed(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Whether no button is down
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_are_distinct() {
        for a in Button::ALL {
            for b in Button::ALL {
                if a != b {
                    assert_eq!(a.mask() & b.mask(), 0);
                }
            }
        }
    }

    #[test]
    fn test_set_membership() {
        let set = ButtonSet::just(Button::Menu).with(Button::Down);
        assert!(set.pressed(Button::Menu));
        assert!(set.pressed(Button::Down));
        assert!(!set.pressed(Button::Back));
        assert!(!set.is_empty());
        assert!(ButtonSet::EMPTY.is_empty());
    }

    #[test]
    fn test_from_bits_truncates() {
        assert_eq!(ButtonSet::from_bits(0xFF), ButtonSet::ALL);
    }
}
