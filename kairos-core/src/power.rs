//! Sync cadence counting and the deep-sleep wake contract.

use crate::input::ButtonSet;

/// Counts timer wakes between telemetry refreshes.
///
/// The counter lives in retained memory and increments once per face
/// render driven by the alarm. A cold boot primes it past any sane
/// interval so the very first render syncs immediately instead of
/// waiting a full period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncCadence {
    count: u16,
}

impl SyncCadence {
    /// Cadence that fires on the next query regardless of interval
    pub const fn primed() -> Self {
        Self { count: u16::MAX }
    }

    /// Advance the cadence by one wake.
    ///
    /// Returns `true` when a refresh is due, resetting the counter;
    /// otherwise increments and returns `false`. `interval` is the
    /// number of wakes between refreshes.
    pub fn should_sync(&mut self, interval: u16) -> bool {
        if self.count >= interval {
            self.count = 0;
            true
        } else {
            self.count += 1;
            false
        }
    }

    /// Make the next [`should_sync`] call fire immediately.
    ///
    /// [`should_sync`]: SyncCadence::should_sync
    pub fn force(&mut self, interval: u16) {
        self.count = interval;
    }
}

/// Wake sources to arm before entering deep sleep.
///
/// The RTC alarm line is level-triggered active-low; the buttons are
/// level-triggered active-high, any one of the set waking the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SleepRequest {
    /// Arm the RTC interrupt line as a wake source
    pub alarm: bool,
    /// Buttons armed as wake sources
    pub buttons: ButtonSet,
}

impl SleepRequest {
    /// Every sleep the watch takes: alarm plus all four buttons
    pub const fn standard() -> Self {
        Self {
            alarm: true,
            buttons: ButtonSet::ALL,
        }
    }
}
