//! Chip-level services: time, delays, power, the motor.

use crate::power::SleepRequest;

/// Services provided by the SoC rather than a peripheral chip
pub trait System {
    /// Monotonic milliseconds since this wake
    fn now_ms(&mut self) -> u64;

    /// Busy-wait for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Battery voltage at the divider, in millivolts
    fn battery_millivolts(&mut self) -> u16;

    /// Drive the vibration motor on or off
    fn vibrate(&mut self, on: bool);

    /// Reboot the chip. Does not return on hardware.
    fn restart(&mut self);

    /// Enter deep sleep. The implementation isolates the GPIO matrix
    /// and arms the requested wake sources before powering down. Does
    /// not return on hardware.
    fn deep_sleep(&mut self, request: &SleepRequest);
}
