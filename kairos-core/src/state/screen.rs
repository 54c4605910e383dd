//! UI screen state
//!
//! Exactly one [`Screen`] is active at any time. The value lives in
//! retained memory so the UI resumes where it left off after deep
//! sleep; only a cold boot resets it to the watch face.

/// The screen the UI is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Screen {
    /// Primary time face; the idle, sleepable screen
    #[default]
    WatchFace,
    /// Alternate face (status/weather), reached via Back from the face
    AltFace,
    /// Paginated main menu
    MainMenu,
    /// A menu sub-screen (battery, accelerometer feed, WiFi result, ...)
    App,
    /// Firmware-update prompt, waiting for the user to start the transfer
    FirmwareUpdate,
}

impl Screen {
    /// Whether this screen is one of the two faces
    pub fn is_face(self) -> bool {
        matches!(self, Screen::WatchFace | Screen::AltFace)
    }

    /// Whether a timer alarm should redraw anything on this screen.
    ///
    /// Tick alarms only mean something on the primary face; a stale
    /// alarm while any other screen is up is silently absorbed.
    pub fn redraws_on_alarm(self) -> bool {
        self == Screen::WatchFace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_watch_face() {
        assert_eq!(Screen::default(), Screen::WatchFace);
    }

    #[test]
    fn test_alarm_only_redraws_primary_face() {
        assert!(Screen::WatchFace.redraws_on_alarm());
        assert!(!Screen::AltFace.redraws_on_alarm());
        assert!(!Screen::MainMenu.redraws_on_alarm());
        assert!(!Screen::App.redraws_on_alarm());
        assert!(!Screen::FirmwareUpdate.redraws_on_alarm());
    }
}
