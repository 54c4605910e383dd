//! The wake dispatcher and session driver.
//!
//! [`Watch`] owns one of every hardware collaborator and turns a wake
//! cause into a full wake cycle: dispatch, optional interactive
//! session, then the sleep sequence. It is generic over the
//! collaborator traits so the complete cycle runs on the host against
//! recording mocks.

use core::fmt::Write as _;

use heapless::String;

use crate::config::Settings;
use crate::faces::{ClassicFace, Face, FaceSelect, StatusFace};
use crate::input::ButtonSet;
use crate::menu::MenuItem;
use crate::power::SleepRequest;
use crate::retained::Retained;
use crate::session::{Session, SessionCommand};
use crate::state::{Screen, WakeReason};
use crate::traits::accel::Accelerometer;
use crate::traits::buttons::Buttons;
use crate::traits::net::Network;
use crate::traits::ota::OtaTransport;
use crate::traits::panel::{Color, Font, Panel, Refresh};
use crate::traits::rtc::{ClockFields, Rtc};
use crate::traits::system::System;

use kairos_wire::WeatherSnapshot;

mod apps;

#[cfg(test)]
mod harness;

/// Session button-sampling period
pub const POLL_INTERVAL_MS: u32 = 50;

/// Rendered when the clock cannot be read
const EPOCH_FALLBACK: ClockFields = ClockFields {
    year: 2000,
    month: 1,
    day: 1,
    hour: 0,
    minute: 0,
    second: 0,
};

/// The watch: every collaborator plus the runtime settings
pub struct Watch<P, R, A, N, O, B, S> {
    pub panel: P,
    pub rtc: R,
    pub accel: A,
    pub net: N,
    pub ota: O,
    pub buttons: B,
    pub system: S,
    pub settings: Settings,
}

impl<P, R, A, N, O, B, S> Watch<P, R, A, N, O, B, S>
where
    P: Panel,
    R: Rtc,
    A: Accelerometer,
    N: Network,
    O: OtaTransport,
    B: Buttons,
    S: System,
{
    pub fn new(
        panel: P,
        rtc: R,
        accel: A,
        net: N,
        ota: O,
        buttons: B,
        system: S,
        settings: Settings,
    ) -> Self {
        Self {
            panel,
            rtc,
            accel,
            net,
            ota,
            buttons,
            system,
            settings,
        }
    }

    /// Run one complete wake cycle and arm the next sleep.
    ///
    /// `wake_buttons` is the button snapshot captured at wake, so the
    /// press that woke the chip feeds the session's first tick.
    /// `initial_time` seeds the clock chip on a cold start and is what
    /// the face shows until the first NTP sync. Returns the armed
    /// [`SleepRequest`] after calling [`System::deep_sleep`]; on
    /// hardware that call never returns, mocks return so tests can
    /// inspect the request.
    pub fn boot(
        &mut self,
        retained: &mut Retained,
        reason: WakeReason,
        wake_buttons: ButtonSet,
        initial_time: &ClockFields,
    ) -> SleepRequest {
        log::info!("wake: {:?}, screen {:?}", reason, retained.screen);
        match reason {
            WakeReason::ColdReset => {
                *retained = Retained::cold_boot();
                if self.rtc.configure(initial_time).is_err() {
                    log::error!("rtc configure failed, alarm wakes unavailable");
                }
                if self.accel.configure().is_err() {
                    log::warn!("accelerometer configure failed");
                }
                self.show_face(retained, FaceSelect::Primary, Refresh::Full);
            }
            WakeReason::TimerAlarm => {
                // Only a visible face tracks the minute edge. Waking on
                // any other screen just re-arms the alarm and sleeps,
                // leaving the glass untouched.
                if retained.screen.redraws_on_alarm() {
                    self.show_face(retained, FaceSelect::Primary, Refresh::Partial);
                }
            }
            WakeReason::ButtonPress => {
                self.run_session(retained, wake_buttons);
            }
        }

        let request = self.sleep(retained);
        self.system.deep_sleep(&request);
        request
    }

    /// Poll buttons and execute session commands until the session
    /// exits.
    pub fn run_session(&mut self, retained: &mut Retained, seed: ButtonSet) {
        let mut session = Session::new();
        let mut buttons = seed;
        let mut last = self.system.now_ms();
        loop {
            let now = self.system.now_ms();
            let elapsed = (now - last) as u32;
            last = now;

            match session.tick(retained, buttons, elapsed) {
                SessionCommand::Idle => {}
                SessionCommand::ShowFace(select, refresh) => {
                    self.show_face(retained, select, refresh)
                }
                SessionCommand::ShowMenu(refresh) => self.show_menu(retained, refresh),
                SessionCommand::Launch(item) => self.run_app(retained, item),
                SessionCommand::BeginOta => self.run_ota(retained),
                SessionCommand::Exit => return,
            }

            self.system.delay_ms(POLL_INTERVAL_MS);
            buttons = self.buttons.read();
        }
    }

    /// Refresh telemetry if due, then render `select` to the glass.
    pub fn show_face(&mut self, retained: &mut Retained, select: FaceSelect, refresh: Refresh) {
        self.network_refresh(retained);

        let now = match self.rtc.read() {
            Ok(fields) => fields,
            Err(_) => {
                log::warn!("rtc read failed, rendering fallback time");
                EPOCH_FALLBACK
            }
        };

        self.panel.set_full_window();
        match select {
            FaceSelect::Primary => ClassicFace.draw(&mut self.panel, &now, &retained.weather),
            FaceSelect::Alt => StatusFace.draw(&mut self.panel, &now, &retained.weather),
        }
        self.panel.display(refresh);

        retained.screen = match select {
            FaceSelect::Primary => Screen::WatchFace,
            FaceSelect::Alt => Screen::AltFace,
        };
    }

    /// Render the visible menu page with the selection marker.
    pub fn show_menu(&mut self, retained: &mut Retained, refresh: Refresh) {
        let mut text: String<128> = String::new();
        for idx in retained.menu.page() {
            let marker = if idx == retained.menu.selected() {
                "> "
            } else {
                "  "
            };
            let _ = writeln!(text, "{}{}", marker, MenuItem::ALL[idx].label());
        }

        self.panel.set_full_window();
        self.panel.fill_screen(Color::White);
        self.panel.set_font(Font::Body);
        self.panel.set_text_color(Color::Black);
        self.panel.set_cursor(0, 20);
        self.panel.print(&text);
        self.panel.display(refresh);

        retained.screen = Screen::MainMenu;
    }

    /// When the cadence says a refresh is due: connect, NTP-sync the
    /// clock, fetch the telemetry payload and decode it into retained
    /// state. Every failure degrades to keeping the previous snapshot;
    /// a rejected payload never partially overwrites it. The radio is
    /// powered off on every path that turned it on.
    fn network_refresh(&mut self, retained: &mut Retained) {
        if !retained.sync.should_sync(self.settings.update_interval) {
            return;
        }

        if !self.net.connect() {
            log::warn!("network unavailable, keeping previous telemetry");
            self.net.radio_off();
            return;
        }

        if !self.net.ntp_sync() {
            log::warn!("ntp sync failed");
        }

        let mut buf = [0u8; 256];
        match self.net.fetch(self.settings.telemetry_url.as_str(), &mut buf) {
            Ok((200, len)) => match WeatherSnapshot::decode(&buf[..len]) {
                Ok(snapshot) => retained.weather = snapshot,
                Err(err) => log::warn!("telemetry payload rejected: {:?}", err),
            },
            Ok((status, _)) => log::warn!("telemetry fetch returned status {}", status),
            Err(err) => log::warn!("telemetry fetch failed: {:?}", err),
        }

        self.net.radio_off();
    }

    /// The fixed pre-sleep sequence: hibernate the panel, mark it
    /// initialized for the next wake, release the alarm line, then
    /// hand back the wake sources to arm.
    fn sleep(&mut self, retained: &mut Retained) -> SleepRequest {
        self.panel.hibernate();
        retained.display_ready = true;
        if self.rtc.clear_alarm().is_err() {
            log::error!("failed to clear rtc alarm before sleep");
        }
        SleepRequest::standard()
    }

    /// Clear and paint a single screen of body text.
    fn render_text(&mut self, text: &str, refresh: Refresh) {
        self.panel.set_full_window();
        self.panel.fill_screen(Color::White);
        self.panel.set_font(Font::Body);
        self.panel.set_text_color(Color::Black);
        self.panel.set_cursor(0, 20);
        self.panel.print(text);
        self.panel.display(refresh);
    }
}
