//! Radio backend.
//!
//! The control logic treats every network chore as best-effort, so an
//! offline backend that reports failure is a valid one: the watch
//! keeps its retained telemetry and retries on the next cadence. A
//! connected backend replaces [`OfflineRadio`] with esp-radio in STA
//! mode, serving `fetch` and `ntp_sync` over an embedded-io HTTP
//! client.

use kairos_core::traits::net::{NetError, Network};

pub struct OfflineRadio;

impl Network for OfflineRadio {
    fn connect(&mut self) -> bool {
        log::warn!("radio backend not present, staying offline");
        false
    }

    fn fetch(&mut self, _url: &str, _buf: &mut [u8]) -> Result<(u16, usize), NetError> {
        Err(NetError::NoConnection)
    }

    fn ntp_sync(&mut self) -> bool {
        false
    }

    fn provision(&mut self) -> bool {
        false
    }

    fn radio_off(&mut self) {}
}
