//! External real-time clock abstraction.

/// A calendar reading from or for the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockFields {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=59
    pub second: u8,
}

/// RTC access failed on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcError;

/// The external clock chip driving the minute alarm
pub trait Rtc {
    /// Current calendar time
    fn read(&mut self) -> Result<ClockFields, RtcError>;

    /// Write a new calendar time
    fn set(&mut self, fields: &ClockFields) -> Result<(), RtcError>;

    /// Acknowledge the alarm and re-arm it for the next minute edge.
    /// Must run before sleep so the interrupt line releases; a still
    /// asserted line would wake the chip again immediately.
    fn clear_alarm(&mut self) -> Result<(), RtcError>;

    /// One-time chip setup on cold boot: control registers, the clock
    /// seeded from `initial`, minute alarm enabled, interrupt output
    /// active. Without the seed the chip would free-run from whatever
    /// its registers held at power-up.
    fn configure(&mut self, initial: &ClockFields) -> Result<(), RtcError>;
}
