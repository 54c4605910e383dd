//! The apps behind the menu entries.
//!
//! Each app runs to completion inside the session loop, does its own
//! button polling where it needs any, and leaves `retained.screen` set
//! to whatever should be on the glass when it returns.

use core::fmt::Write as _;

use heapless::String;

use super::{Watch, POLL_INTERVAL_MS};
use crate::faces::FaceSelect;
use crate::input::Button;
use crate::menu::MenuItem;
use crate::retained::Retained;
use crate::state::Screen;
use crate::timeset::{Field, TimeSetStep, TimeSetter};
use crate::traits::accel::Accelerometer;
use crate::traits::buttons::Buttons;
use crate::traits::net::Network;
use crate::traits::ota::{OtaStatus, OtaTransport};
use crate::traits::panel::{Panel, Refresh};
use crate::traits::rtc::Rtc;
use crate::traits::system::System;

/// Sample period of the live accelerometer view
const ACCEL_SAMPLE_MS: u32 = 200;

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
    pub(super) fn run_app(&mut self, retained: &mut Retained, item: MenuItem) {
        log::info!("launching {:?}", item);
        match item {
            MenuItem::SyncNow => {
                // Prime the cadence so the face render that follows
                // performs the refresh itself.
                retained.sync.force(self.settings.update_interval);
                self.show_face(retained, FaceSelect::Primary, Refresh::Full);
            }
            MenuItem::Battery => self.battery_app(retained),
            MenuItem::Accelerometer => self.accel_app(retained),
            MenuItem::SetTime => self.set_time_app(retained),
            MenuItem::SyncNtp => self.ntp_app(retained),
            MenuItem::SetupWifi => self.wifi_app(retained),
            MenuItem::Buzz => self.buzz_app(retained),
            MenuItem::UpdateFirmware => {
                self.render_text(
                    "Firmware Update\n\nMenu: start BLE transfer\nBack: cancel",
                    Refresh::Full,
                );
                retained.screen = Screen::FirmwareUpdate;
            }
        }
    }

    fn battery_app(&mut self, retained: &mut Retained) {
        let millivolts = self.system.battery_millivolts();
        let mut text: String<48> = String::new();
        let _ = write!(
            text,
            "Battery Voltage:\n{}.{:02} V",
            millivolts / 1000,
            (millivolts % 1000) / 10
        );
        self.render_text(&text, Refresh::Full);
        retained.screen = Screen::App;
    }

    /// Live sample view. Redraws on every sample and leaves through the
    /// menu on Back.
    fn accel_app(&mut self, retained: &mut Retained) {
        retained.screen = Screen::App;
        loop {
            let mut text: String<96> = String::new();
            match self.accel.accel() {
                Ok(sample) => {
                    let label = match self.accel.orientation() {
                        Ok(orientation) => orientation.label(),
                        Err(_) => "ERROR!!!",
                    };
                    let _ = write!(
                        text,
                        "  X: {}\n  Y: {}\n  Z: {}\n{}",
                        sample.x, sample.y, sample.z, label
                    );
                }
                Err(_) => {
                    let _ = text.push_str("ERROR!!!");
                }
            }
            self.render_text(&text, Refresh::Full);

            let polls = ACCEL_SAMPLE_MS / POLL_INTERVAL_MS;
            for _ in 0..polls {
                self.system.delay_ms(POLL_INTERVAL_MS);
                if self.buttons.read().pressed(Button::Back) {
                    self.show_menu(retained, Refresh::Full);
                    return;
                }
            }
        }
    }

    fn set_time_app(&mut self, retained: &mut Retained) {
        retained.screen = Screen::App;
        let start = match self.rtc.read() {
            Ok(fields) => fields,
            Err(_) => {
                log::warn!("rtc read failed, editing from epoch");
                super::EPOCH_FALLBACK
            }
        };

        let mut setter = TimeSetter::new(start);
        loop {
            self.render_time_setter(&setter);
            self.system.delay_ms(POLL_INTERVAL_MS);
            let buttons = self.buttons.read();
            if let TimeSetStep::Commit(fields) = setter.tick(buttons) {
                if self.rtc.set(&fields).is_err() {
                    log::error!("rtc write failed, time unchanged");
                }
                break;
            }
        }
        self.show_menu(retained, Refresh::Full);
    }

    /// One line per field pair, the field under the cursor blanked out
    /// on alternating ticks.
    fn render_time_setter(&mut self, setter: &TimeSetter) {
        let fields = setter.fields();
        let hide = !setter.blink_visible();
        let mut text: String<64> = String::new();

        let part = |field: Field, value: u8| -> String<4> {
            let mut s: String<4> = String::new();
            if hide && setter.cursor() == field {
                let _ = s.push_str("  ");
            } else {
                let _ = write!(s, "{:02}", value);
            }
            s
        };

        let hour = part(Field::Hour, fields.hour);
        let minute = part(Field::Minute, fields.minute);
        let year = part(Field::Year, (fields.year - 2000) as u8);
        let month = part(Field::Month, fields.month);
        let day = part(Field::Day, fields.day);
        let _ = write!(text, "{}:{}\n\n{}/{}/{}", hour, minute, year, month, day);

        self.render_text(&text, Refresh::Partial);
    }

    fn ntp_app(&mut self, retained: &mut Retained) {
        self.render_text("Syncing NTP...", Refresh::Full);
        let mut outcome: String<48> = String::new();
        if self.net.connect() {
            let ok = self.net.ntp_sync();
            self.net.radio_off();
            if ok {
                match self.rtc.read() {
                    Ok(now) => {
                        let _ = write!(
                            outcome,
                            "NTP Synced\n{:02}:{:02}:{:02}",
                            now.hour, now.minute, now.second
                        );
                    }
                    Err(_) => {
                        let _ = outcome.push_str("NTP Synced");
                    }
                }
            } else {
                let _ = outcome.push_str("NTP Sync Failed");
            }
        } else {
            self.net.radio_off();
            let _ = outcome.push_str("WiFi Not Connected");
        }
        self.render_text(&outcome, Refresh::Full);
        self.show_menu(retained, Refresh::Full);
    }

    fn wifi_app(&mut self, retained: &mut Retained) {
        self.render_text("Starting WiFi setup...", Refresh::Full);
        let ok = self.net.provision();
        self.net.radio_off();
        if ok {
            retained.wifi_configured = true;
            self.render_text("WiFi Configured", Refresh::Full);
        } else {
            self.render_text("WiFi Setup Failed", Refresh::Full);
        }
        retained.screen = Screen::App;
    }

    fn buzz_app(&mut self, retained: &mut Retained) {
        self.render_text("Buzz!", Refresh::Full);
        for i in 0..20 {
            self.system.vibrate(i % 2 == 0);
            self.system.delay_ms(100);
        }
        self.system.vibrate(false);
        self.show_menu(retained, Refresh::Full);
    }

    /// Wait out one BLE firmware transfer, painting progress.
    pub(super) fn run_ota(&mut self, retained: &mut Retained) {
        retained.screen = Screen::FirmwareUpdate;
        self.ota.begin();

        let mut last = None;
        loop {
            let status = self.ota.status();
            match status {
                OtaStatus::Idle => {
                    if last != Some(status) {
                        self.render_text("BLE Connect:\nkairos OTA", Refresh::Full);
                    }
                }
                OtaStatus::Connected => {
                    if last != Some(status) {
                        self.render_text("Connected\nWaiting for data...", Refresh::Full);
                    }
                }
                OtaStatus::Transferring => {
                    let mut text: String<48> = String::new();
                    let _ = write!(text, "Downloading\n{} bytes", self.ota.bytes_received());
                    self.render_text(&text, Refresh::Partial);
                }
                OtaStatus::Complete => {
                    retained.ble_configured = true;
                    self.render_text("Download complete\nRebooting...", Refresh::Full);
                    self.system.delay_ms(2_000);
                    self.system.restart();
                    return;
                }
                OtaStatus::Disconnected => {
                    self.render_text("BLE Disconnected", Refresh::Full);
                    self.system.delay_ms(1_000);
                    self.show_menu(retained, Refresh::Full);
                    return;
                }
            }
            last = Some(status);
            self.system.delay_ms(100);
        }
    }
}
