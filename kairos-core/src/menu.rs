//! Main-menu model
//!
//! Pure pagination/selection logic, no I/O. The model reports whether a
//! move scrolled the visible page so the caller can pick the right
//! refresh mode: an in-page move only changes two rows' highlighting
//! (partial refresh), a page scroll changes every visible row (full
//! refresh).

/// Total number of menu entries
pub const ITEM_COUNT: usize = 8;

/// Entries visible per page
pub const PAGE_LEN: usize = 4;

/// One entry of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    /// Force a telemetry refresh on the next face render
    SyncNow,
    /// Show the measured battery voltage
    Battery,
    /// Live accelerometer feed with orientation
    Accelerometer,
    /// Edit the RTC time/date
    SetTime,
    /// One-shot NTP synchronization
    SyncNtp,
    /// WiFi provisioning
    SetupWifi,
    /// Test the vibration motor
    Buzz,
    /// BLE firmware update
    UpdateFirmware,
}

impl MenuItem {
    /// All entries in display order
    pub const ALL: [MenuItem; ITEM_COUNT] = [
        MenuItem::SyncNow,
        MenuItem::Battery,
        MenuItem::Accelerometer,
        MenuItem::SetTime,
        MenuItem::SyncNtp,
        MenuItem::SetupWifi,
        MenuItem::Buzz,
        MenuItem::UpdateFirmware,
    ];

    /// On-screen label
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::SyncNow => "Sync Now",
            MenuItem::Battery => "Battery Voltage",
            MenuItem::Accelerometer => "Show Accelerometer",
            MenuItem::SetTime => "Set Time",
            MenuItem::SyncNtp => "Sync NTP",
            MenuItem::SetupWifi => "Setup WiFi",
            MenuItem::Buzz => "Vibrate Motor",
            MenuItem::UpdateFirmware => "Update Firmware",
        }
    }
}

/// Whether a selection move scrolled the visible page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageScroll {
    /// Selection stayed within the current page - partial refresh is enough
    Same,
    /// The page shifted - every visible row changed, full refresh required
    Scrolled,
}

/// Selection and scroll position of the main menu.
///
/// Invariants, re-established by every [`move_selection`] call:
/// `top <= selected < top + PAGE_LEN`, `top` is a multiple of
/// `PAGE_LEN` within `[0, ITEM_COUNT - PAGE_LEN]`.
///
/// [`move_selection`]: MenuModel::move_selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuModel {
    selected: u8,
    top: u8,
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuModel {
    /// Model at the first entry, first page
    pub const fn new() -> Self {
        Self { selected: 0, top: 0 }
    }

    /// Index of the selected entry
    pub fn selected(&self) -> usize {
        self.selected as usize
    }

    /// Index of the first visible entry
    pub fn top(&self) -> usize {
        self.top as usize
    }

    /// The selected entry itself
    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected as usize]
    }

    /// Indices of the entries on the visible page
    pub fn page(&self) -> core::ops::Range<usize> {
        let top = self.top as usize;
        top..(top + PAGE_LEN).min(ITEM_COUNT)
    }

    /// Move the selection by `delta` entries (negative = up).
    ///
    /// The selection clamps at both ends of the list. If the new
    /// selection falls outside the visible page, the page shifts by
    /// exactly one page length toward the movement, clamped to the
    /// valid range, and the move reports [`PageScroll::Scrolled`].
    pub fn move_selection(&mut self, delta: i8) -> PageScroll {
        let last = (ITEM_COUNT - 1) as i16;
        self.selected = (self.selected as i16 + delta as i16).clamp(0, last) as u8;

        let page = PAGE_LEN as u8;
        if self.selected < self.top {
            self.top = self.top.saturating_sub(page);
            PageScroll::Scrolled
        } else if self.selected >= self.top + page {
            let max_top = (ITEM_COUNT - PAGE_LEN) as u8;
            self.top = (self.top + page).min(max_top);
            PageScroll::Scrolled
        } else {
            PageScroll::Same
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_labels_cover_all_items() {
        for item in MenuItem::ALL {
            assert!(!item.label().is_empty());
        }
    }

    #[test]
    fn test_in_page_move_keeps_top() {
        let mut menu = MenuModel::new();
        assert_eq!(menu.move_selection(1), PageScroll::Same);
        assert_eq!(menu.selected(), 1);
        assert_eq!(menu.top(), 0);
    }

    #[test]
    fn test_crossing_page_boundary_scrolls_one_page() {
        let mut menu = MenuModel::new();
        for _ in 0..PAGE_LEN - 1 {
            assert_eq!(menu.move_selection(1), PageScroll::Same);
        }
        // Step onto the second page
        assert_eq!(menu.move_selection(1), PageScroll::Scrolled);
        assert_eq!(menu.selected(), PAGE_LEN);
        assert_eq!(menu.top(), PAGE_LEN);

        // And back up across the same boundary
        assert_eq!(menu.move_selection(-1), PageScroll::Scrolled);
        assert_eq!(menu.selected(), PAGE_LEN - 1);
        assert_eq!(menu.top(), 0);
    }

    #[test]
    fn test_clamps_at_both_ends() {
        let mut menu = MenuModel::new();
        assert_eq!(menu.move_selection(-1), PageScroll::Same);
        assert_eq!(menu.selected(), 0);

        for _ in 0..ITEM_COUNT + 3 {
            menu.move_selection(1);
        }
        assert_eq!(menu.selected(), ITEM_COUNT - 1);
        assert_eq!(menu.top(), ITEM_COUNT - PAGE_LEN);
        // Pushing past the end neither moves nor scrolls
        assert_eq!(menu.move_selection(1), PageScroll::Same);
    }

    #[test]
    fn test_selected_item_follows_selection() {
        let mut menu = MenuModel::new();
        assert_eq!(menu.selected_item(), MenuItem::SyncNow);
        menu.move_selection(1);
        assert_eq!(menu.selected_item(), MenuItem::Battery);
    }

    proptest! {
        /// For any sequence of up/down moves the invariants hold
        #[test]
        fn move_sequences_preserve_invariants(moves in prop::collection::vec(prop::bool::ANY, 0..64)) {
            let mut menu = MenuModel::new();
            for down in moves {
                let delta = if down { 1 } else { -1 };
                menu.move_selection(delta);

                prop_assert!(menu.selected() < ITEM_COUNT);
                prop_assert!(menu.top() <= ITEM_COUNT - PAGE_LEN);
                prop_assert_eq!(menu.top() % PAGE_LEN, 0);
                prop_assert!(menu.top() <= menu.selected());
                prop_assert!(menu.selected() < menu.top() + PAGE_LEN);
            }
        }

        /// A scroll is reported exactly when `top` changes
        #[test]
        fn scroll_report_matches_top_change(moves in prop::collection::vec(prop::bool::ANY, 0..64)) {
            let mut menu = MenuModel::new();
            for down in moves {
                let before = menu.top();
                let scroll = menu.move_selection(if down { 1 } else { -1 });
                prop_assert_eq!(scroll == PageScroll::Scrolled, menu.top() != before);
            }
        }
    }
}
