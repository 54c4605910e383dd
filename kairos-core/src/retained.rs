//! State that survives deep sleep.
//!
//! Everything the watch needs to remember between wakes lives in this
//! one flat struct. Firmware places a single instance in RTC fast
//! memory; host tests just keep one on the stack. The struct is plain
//! data with no interior references so a retained copy is valid no
//! matter how the chip went down.

use crate::menu::MenuModel;
use crate::power::SyncCadence;
use crate::state::Screen;
use kairos_wire::WeatherSnapshot;

/// The watch's persistent state across deep-sleep cycles
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Retained {
    /// Screen being shown when the watch went to sleep
    pub screen: Screen,
    /// Menu selection and scroll position
    pub menu: MenuModel,
    /// Last successfully decoded telemetry payload
    pub weather: WeatherSnapshot,
    /// Wakes since the last telemetry refresh
    pub sync: SyncCadence,
    /// The panel has been initialized at least once since power-on
    pub display_ready: bool,
    /// WiFi credentials have been provisioned
    pub wifi_configured: bool,
    /// A BLE firmware transfer has completed
    pub ble_configured: bool,
}

impl Retained {
    /// State for a freshly powered board: watch face up, cadence primed
    /// so the first render syncs, nothing provisioned.
    pub const fn cold_boot() -> Self {
        Self {
            screen: Screen::WatchFace,
            menu: MenuModel::new(),
            weather: WeatherSnapshot::EMPTY,
            sync: SyncCadence::primed(),
            display_ready: false,
            wifi_configured: false,
            ble_configured: false,
        }
    }
}

impl Default for Retained {
    fn default() -> Self {
        Self::cold_boot()
    }
}
