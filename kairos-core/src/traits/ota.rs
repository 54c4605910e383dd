//! BLE firmware-transfer abstraction.

/// Where a firmware transfer currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OtaStatus {
    /// Advertising, waiting for a central to connect
    Idle,
    /// A central is connected but no data has flowed yet
    Connected,
    /// Image bytes are arriving
    Transferring,
    /// The full image was received and verified
    Complete,
    /// The central went away mid-transfer
    Disconnected,
}

/// The BLE transport carrying a firmware image
pub trait OtaTransport {
    /// Start advertising and accept one transfer
    fn begin(&mut self);

    /// Poll the transfer state
    fn status(&mut self) -> OtaStatus;

    /// Image bytes received so far
    fn bytes_received(&mut self) -> u32;
}
