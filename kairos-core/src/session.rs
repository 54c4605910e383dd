//! Interactive session logic.
//!
//! A session is one stretch of the watch being awake with the user
//! pressing buttons. The session itself is a pure function from
//! (current screen, button snapshot, elapsed time) to a command; the
//! driver in [`crate::watch`] executes the commands against hardware
//! and calls [`Session::tick`] again until it returns
//! [`SessionCommand::Exit`].

use crate::faces::FaceSelect;
use crate::input::{Button, ButtonSet};
use crate::menu::{MenuItem, PageScroll};
use crate::retained::Retained;
use crate::state::Screen;
use crate::traits::panel::Refresh;

/// Idle time after which a non-face screen falls back to sleep
pub const IDLE_TIMEOUT_MS: u32 = 3_000;

/// What the driver should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionCommand {
    /// Nothing happened, poll again
    Idle,
    /// Render a watch face
    ShowFace(FaceSelect, Refresh),
    /// Render the main menu
    ShowMenu(Refresh),
    /// Run the app behind a menu entry
    Launch(MenuItem),
    /// Enter the firmware-update wait loop
    BeginOta,
    /// The session is over, go back to sleep
    Exit,
}

/// Tracks idle time and maps button snapshots to commands
#[derive(Debug, Default)]
pub struct Session {
    idle_ms: u32,
}

impl Session {
    pub const fn new() -> Self {
        Self { idle_ms: 0 }
    }

    /// Advance the session by one poll.
    ///
    /// `buttons` is the level snapshot for this poll and `elapsed_ms`
    /// the time since the previous one. When several buttons are down
    /// at once the highest-priority one wins, in the order Menu, Back,
    /// Up, Down.
    ///
    /// On a watch face anything but Menu or Back ends the session at
    /// once, matching the wake-render-sleep cycle of an alarm wake.
    /// Every other screen dwells until [`IDLE_TIMEOUT_MS`] of
    /// accumulated idle time has passed.
    pub fn tick(
        &mut self,
        retained: &mut Retained,
        buttons: ButtonSet,
        elapsed_ms: u32,
    ) -> SessionCommand {
        if buttons.is_empty() {
            self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        } else {
            self.idle_ms = 0;
        }

        let pressed = Button::ALL.into_iter().find(|b| buttons.pressed(*b));

        let command = match retained.screen {
            // A face only answers Menu and Back. Anything else, a held
            // or stuck Up/Down included, goes straight back to sleep
            // instead of holding the chip awake.
            Screen::WatchFace => match pressed {
                Some(Button::Menu) => SessionCommand::ShowMenu(Refresh::Full),
                Some(Button::Back) => SessionCommand::ShowFace(FaceSelect::Alt, Refresh::Full),
                _ => return SessionCommand::Exit,
            },
            Screen::AltFace => match pressed {
                Some(Button::Menu) => SessionCommand::ShowMenu(Refresh::Full),
                Some(Button::Back) => SessionCommand::ShowFace(FaceSelect::Primary, Refresh::Full),
                _ => return SessionCommand::Exit,
            },
            Screen::MainMenu => match pressed {
                Some(Button::Menu) => SessionCommand::Launch(retained.menu.selected_item()),
                Some(Button::Back) => SessionCommand::ShowFace(FaceSelect::Primary, Refresh::Full),
                Some(Button::Up) => Self::moved(retained, -1),
                Some(Button::Down) => Self::moved(retained, 1),
                None => SessionCommand::Idle,
            },
            Screen::App => match pressed {
                Some(Button::Back) => SessionCommand::ShowMenu(Refresh::Full),
                _ => SessionCommand::Idle,
            },
            Screen::FirmwareUpdate => match pressed {
                Some(Button::Menu) => SessionCommand::BeginOta,
                Some(Button::Back) => SessionCommand::ShowMenu(Refresh::Full),
                _ => SessionCommand::Idle,
            },
        };

        if command == SessionCommand::Idle && self.idle_ms > IDLE_TIMEOUT_MS {
            return SessionCommand::Exit;
        }
        command
    }

    fn moved(retained: &mut Retained, delta: i8) -> SessionCommand {
        let refresh = match retained.menu.move_selection(delta) {
            PageScroll::Scrolled => Refresh::Full,
            PageScroll::Same => Refresh::Partial,
        };
        SessionCommand::ShowMenu(refresh)
    }
}
