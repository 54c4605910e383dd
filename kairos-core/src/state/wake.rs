//! Wake cause
//!
//! Queried from the wake-cause register once per boot and immutable for
//! the boot's lifetime. The dispatcher performs exactly one top-level
//! action per reason and then hands off to the deep-sleep path.

/// Why the device is executing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeReason {
    /// The RTC alarm line fired (minute tick)
    TimerAlarm,
    /// One of the button lines went high
    ButtonPress,
    /// Power-on or reset. Also the fallback for any wake cause the
    /// firmware does not recognize - a policy choice, not an error.
    #[default]
    ColdReset,
}

impl WakeReason {
    /// Whether this wake opens an interactive session
    pub fn is_interactive(self) -> bool {
        self == WakeReason::ButtonPress
    }
}
