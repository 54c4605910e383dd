//! Network abstraction.
//!
//! Covers the three network chores the watch does: a telemetry fetch,
//! an NTP sync and one-off credential provisioning. All of them are
//! best-effort; every caller has a rendering or retained-state path
//! for failure.

/// A network operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetError {
    /// Could not associate with an access point
    NoConnection,
    /// The request went out but the transfer failed
    Transfer,
    /// The response did not fit in the caller's buffer
    BufferTooSmall,
}

/// The radio
pub trait Network {
    /// Bring the radio up and associate. Returns false on failure
    /// without touching any other state.
    fn connect(&mut self) -> bool;

    /// GET `url` into `buf`. Returns the HTTP status code and the
    /// number of body bytes written.
    fn fetch(&mut self, url: &str, buf: &mut [u8]) -> Result<(u16, usize), NetError>;

    /// Set the external clock from NTP. Returns false on failure.
    fn ntp_sync(&mut self) -> bool;

    /// Run interactive credential provisioning. Returns true when
    /// credentials were stored.
    fn provision(&mut self) -> bool;

    /// Power the radio down. Always called after any network use so a
    /// failed request cannot leave the radio draining the battery.
    fn radio_off(&mut self);
}
