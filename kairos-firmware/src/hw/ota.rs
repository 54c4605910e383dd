//! BLE firmware-transfer backend.
//!
//! A real backend exposes a GATT service and streams image chunks;
//! until one exists for this chip the placeholder reports an
//! immediate disconnect, which the update screen already handles by
//! backing out to the menu.

use kairos_core::traits::ota::{OtaStatus, OtaTransport};

/// Placeholder transport: reports an immediate disconnect so the
/// update screen backs out to the menu.
pub struct OtaIdle;

impl OtaTransport for OtaIdle {
    fn begin(&mut self) {
        log::warn!("ble backend not present, update will not start");
    }

    fn status(&mut self) -> OtaStatus {
        OtaStatus::Disconnected
    }

    fn bytes_received(&mut self) -> u32 {
        0
    }
}
