//! Recording mocks and whole-cycle tests for the wake dispatcher.
//!
//! Every mock pushes into one shared event trace so cross-device
//! ordering (panel hibernate before alarm clear before deep sleep)
//! is assertable.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String as StdString;
use std::vec;
use std::vec::Vec;

use super::Watch;
use crate::config::Settings;
use crate::input::{Button, ButtonSet};
use crate::menu::MenuItem;
use crate::power::SleepRequest;
use crate::retained::Retained;
use crate::state::{Screen, WakeReason};
use crate::traits::accel::{AccelError, AccelSample, Accelerometer, Orientation};
use crate::traits::buttons::Buttons;
use crate::traits::net::{NetError, Network};
use crate::traits::ota::{OtaStatus, OtaTransport};
use crate::traits::panel::{Color, Font, Panel, Refresh};
use crate::traits::rtc::{ClockFields, Rtc, RtcError};
use crate::traits::system::System;
use kairos_wire::WeatherSnapshot;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    SetFullWindow,
    Print(StdString),
    Display(Refresh),
    Hibernate,
    RtcConfigure(ClockFields),
    RtcSet(ClockFields),
    ClearAlarm,
    AccelConfigure,
    Connect,
    NtpSync,
    Fetch,
    Provision,
    RadioOff,
    Vibrate(bool),
    Restart,
    DeepSleep(SleepRequest),
    OtaBegin,
}

type Trace = Rc<RefCell<Vec<Event>>>;

struct MockPanel {
    trace: Trace,
}

impl Panel for MockPanel {
    fn set_full_window(&mut self) {
        self.trace.borrow_mut().push(Event::SetFullWindow);
    }
    fn fill_screen(&mut self, _color: Color) {}
    fn set_font(&mut self, _font: Font) {}
    fn set_text_color(&mut self, _color: Color) {}
    fn set_cursor(&mut self, _x: i16, _y: i16) {}
    fn print(&mut self, text: &str) {
        self.trace.borrow_mut().push(Event::Print(text.into()));
    }
    fn display(&mut self, refresh: Refresh) {
        self.trace.borrow_mut().push(Event::Display(refresh));
    }
    fn hibernate(&mut self) {
        self.trace.borrow_mut().push(Event::Hibernate);
    }
}

struct MockRtc {
    trace: Trace,
    now: ClockFields,
}

impl Rtc for MockRtc {
    fn read(&mut self) -> Result<ClockFields, RtcError> {
        Ok(self.now)
    }
    fn set(&mut self, fields: &ClockFields) -> Result<(), RtcError> {
        self.trace.borrow_mut().push(Event::RtcSet(*fields));
        self.now = *fields;
        Ok(())
    }
    fn clear_alarm(&mut self) -> Result<(), RtcError> {
        self.trace.borrow_mut().push(Event::ClearAlarm);
        Ok(())
    }
    fn configure(&mut self, initial: &ClockFields) -> Result<(), RtcError> {
        self.trace.borrow_mut().push(Event::RtcConfigure(*initial));
        self.now = *initial;
        Ok(())
    }
}

struct MockAccel {
    trace: Trace,
}

impl Accelerometer for MockAccel {
    fn configure(&mut self) -> Result<(), AccelError> {
        self.trace.borrow_mut().push(Event::AccelConfigure);
        Ok(())
    }
    fn accel(&mut self) -> Result<AccelSample, AccelError> {
        Ok(AccelSample { x: 12, y: -3, z: 980 })
    }
    fn orientation(&mut self) -> Result<Orientation, AccelError> {
        Ok(Orientation::FaceUp)
    }
}

struct MockNet {
    trace: Trace,
    connect_ok: bool,
    ntp_ok: bool,
    response: Option<(u16, Vec<u8>)>,
}

impl Network for MockNet {
    fn connect(&mut self) -> bool {
        self.trace.borrow_mut().push(Event::Connect);
        self.connect_ok
    }
    fn fetch(&mut self, _url: &str, buf: &mut [u8]) -> Result<(u16, usize), NetError> {
        self.trace.borrow_mut().push(Event::Fetch);
        match &self.response {
            Some((status, body)) => {
                buf[..body.len()].copy_from_slice(body);
                Ok((*status, body.len()))
            }
            None => Err(NetError::Transfer),
        }
    }
    fn ntp_sync(&mut self) -> bool {
        self.trace.borrow_mut().push(Event::NtpSync);
        self.ntp_ok
    }
    fn provision(&mut self) -> bool {
        self.trace.borrow_mut().push(Event::Provision);
        true
    }
    fn radio_off(&mut self) {
        self.trace.borrow_mut().push(Event::RadioOff);
    }
}

struct MockOta {
    trace: Trace,
    script: VecDeque<OtaStatus>,
}

impl OtaTransport for MockOta {
    fn begin(&mut self) {
        self.trace.borrow_mut().push(Event::OtaBegin);
    }
    fn status(&mut self) -> OtaStatus {
        // An exhausted script disconnects so no test loops forever.
        self.script.pop_front().unwrap_or(OtaStatus::Disconnected)
    }
    fn bytes_received(&mut self) -> u32 {
        4096
    }
}

struct MockButtons {
    script: VecDeque<ButtonSet>,
}

impl Buttons for MockButtons {
    fn read(&mut self) -> ButtonSet {
        self.script.pop_front().unwrap_or(ButtonSet::EMPTY)
    }
}

struct MockSystem {
    trace: Trace,
    now: u64,
}

impl System for MockSystem {
    fn now_ms(&mut self) -> u64 {
        self.now
    }
    fn delay_ms(&mut self, ms: u32) {
        self.now += ms as u64;
    }
    fn battery_millivolts(&mut self) -> u16 {
        3_921
    }
    fn vibrate(&mut self, on: bool) {
        self.trace.borrow_mut().push(Event::Vibrate(on));
    }
    fn restart(&mut self) {
        self.trace.borrow_mut().push(Event::Restart);
    }
    fn deep_sleep(&mut self, request: &SleepRequest) {
        self.trace.borrow_mut().push(Event::DeepSleep(*request));
    }
}

type MockWatch = Watch<MockPanel, MockRtc, MockAccel, MockNet, MockOta, MockButtons, MockSystem>;

fn mock_watch() -> (MockWatch, Trace) {
    let trace: Trace = Rc::new(RefCell::new(Vec::new()));
    let watch = Watch::new(
        MockPanel {
            trace: trace.clone(),
        },
        MockRtc {
            trace: trace.clone(),
            now: ClockFields {
                year: 2026,
                month: 8,
                day: 29,
                hour: 10,
                minute: 30,
                second: 0,
            },
        },
        MockAccel {
            trace: trace.clone(),
        },
        MockNet {
            trace: trace.clone(),
            connect_ok: false,
            ntp_ok: false,
            response: None,
        },
        MockOta {
            trace: trace.clone(),
            script: VecDeque::new(),
        },
        MockButtons {
            script: VecDeque::new(),
        },
        MockSystem {
            trace: trace.clone(),
            now: 0,
        },
        Settings::default(),
    );
    (watch, trace)
}

/// The clock seed a cold start hands to [`Watch::boot`].
const FACTORY_TIME: ClockFields = ClockFields {
    year: 2026,
    month: 1,
    day: 1,
    hour: 0,
    minute: 0,
    second: 0,
};

/// A payload with a recognizable current temperature and zeros
/// everywhere else.
fn payload_with_current(temp: f32) -> Vec<u8> {
    let mut buf = vec![0u8; WeatherSnapshot::WIRE_LEN];
    buf[0..4].copy_from_slice(&temp.to_le_bytes());
    buf
}

/// A retained state whose sync cadence is not due for a while.
fn settled_retained() -> Retained {
    let mut retained = Retained::cold_boot();
    assert!(retained.sync.should_sync(60));
    retained
}

fn index_of(trace: &[Event], wanted: &Event) -> usize {
    trace
        .iter()
        .position(|event| event == wanted)
        .unwrap_or_else(|| panic!("{:?} not in trace", wanted))
}

fn count_displays(trace: &[Event]) -> usize {
    trace
        .iter()
        .filter(|event| matches!(event, Event::Display(_)))
        .count()
}

#[test]
fn test_cold_boot_configures_and_renders_full() {
    let (mut watch, trace) = mock_watch();
    // Whatever survived in retained memory is rebuilt from scratch.
    let mut retained = Retained::cold_boot();
    retained.screen = Screen::App;

    watch.boot(&mut retained, WakeReason::ColdReset, ButtonSet::EMPTY, &FACTORY_TIME);

    let trace = trace.borrow();
    // The factory seed reaches the clock chip.
    index_of(&trace, &Event::RtcConfigure(FACTORY_TIME));
    index_of(&trace, &Event::AccelConfigure);
    index_of(&trace, &Event::Display(Refresh::Full));
    assert_eq!(retained.screen, Screen::WatchFace);
    assert!(retained.display_ready);
}

#[test]
fn test_alarm_wake_on_face_is_one_partial_redraw() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();

    watch.boot(&mut retained, WakeReason::TimerAlarm, ButtonSet::EMPTY, &FACTORY_TIME);

    let trace = trace.borrow();
    assert_eq!(count_displays(&trace), 1);
    index_of(&trace, &Event::Display(Refresh::Partial));
    // Cadence was not due, so the radio stayed down.
    assert!(!trace.contains(&Event::Connect));
}

#[test]
fn test_alarm_wake_off_face_leaves_glass_untouched() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();
    retained.screen = Screen::MainMenu;

    watch.boot(&mut retained, WakeReason::TimerAlarm, ButtonSet::EMPTY, &FACTORY_TIME);

    let trace = trace.borrow();
    assert_eq!(count_displays(&trace), 0);
    assert!(!trace.iter().any(|event| matches!(event, Event::Print(_))));
    // The sleep sequence still runs.
    index_of(&trace, &Event::Hibernate);
    index_of(&trace, &Event::ClearAlarm);
}

#[test]
fn test_sleep_sequence_order() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();

    let request = watch.boot(&mut retained, WakeReason::TimerAlarm, ButtonSet::EMPTY, &FACTORY_TIME);

    assert_eq!(request, SleepRequest::standard());
    assert!(retained.display_ready);

    let trace = trace.borrow();
    let hibernate = index_of(&trace, &Event::Hibernate);
    let clear = index_of(&trace, &Event::ClearAlarm);
    let sleep = index_of(&trace, &Event::DeepSleep(SleepRequest::standard()));
    assert!(hibernate < clear);
    assert!(clear < sleep);
}

#[test]
fn test_button_wake_menu_press_opens_menu() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();

    watch.boot(
        &mut retained,
        WakeReason::ButtonPress,
        ButtonSet::just(Button::Menu),
        &FACTORY_TIME,
    );

    assert_eq!(retained.screen, Screen::MainMenu);
    let trace = trace.borrow();
    let menu_printed = trace.iter().any(|event| match event {
        Event::Print(text) => text.contains("> Sync Now") && text.contains("Set Time"),
        _ => false,
    });
    assert!(menu_printed);
}

#[test]
fn test_button_wake_with_idle_lines_sleeps_without_drawing() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();

    watch.boot(&mut retained, WakeReason::ButtonPress, ButtonSet::EMPTY, &FACTORY_TIME);

    let trace = trace.borrow();
    assert_eq!(count_displays(&trace), 0);
    index_of(&trace, &Event::Hibernate);
}

#[test]
fn test_refresh_success_overwrites_snapshot() {
    let (mut watch, trace) = mock_watch();
    watch.net.connect_ok = true;
    watch.net.ntp_ok = true;
    watch.net.response = Some((200, payload_with_current(21.5)));
    let mut retained = Retained::cold_boot();

    watch.boot(&mut retained, WakeReason::ColdReset, ButtonSet::EMPTY, &FACTORY_TIME);

    assert_eq!(retained.weather.current.temperature, 21.5);
    let trace = trace.borrow();
    let fetch = index_of(&trace, &Event::Fetch);
    let radio_off = index_of(&trace, &Event::RadioOff);
    assert!(fetch < radio_off);
}

#[test]
fn test_refresh_rejects_short_payload() {
    let (mut watch, _trace) = mock_watch();
    watch.net.connect_ok = true;
    watch.net.response = Some((200, vec![0u8; 100]));
    let mut retained = Retained::cold_boot();

    watch.boot(&mut retained, WakeReason::ColdReset, ButtonSet::EMPTY, &FACTORY_TIME);

    assert_eq!(retained.weather, WeatherSnapshot::EMPTY);
}

#[test]
fn test_refresh_ignores_non_200_response() {
    let (mut watch, _trace) = mock_watch();
    watch.net.connect_ok = true;
    watch.net.response = Some((503, payload_with_current(21.5)));
    let mut retained = Retained::cold_boot();

    watch.boot(&mut retained, WakeReason::ColdReset, ButtonSet::EMPTY, &FACTORY_TIME);

    assert_eq!(retained.weather, WeatherSnapshot::EMPTY);
}

#[test]
fn test_refresh_connect_failure_still_powers_radio_off() {
    let (mut watch, trace) = mock_watch();
    let mut retained = Retained::cold_boot();

    watch.boot(&mut retained, WakeReason::ColdReset, ButtonSet::EMPTY, &FACTORY_TIME);

    let trace = trace.borrow();
    assert!(!trace.contains(&Event::Fetch));
    index_of(&trace, &Event::RadioOff);
}

#[test]
fn test_battery_app_renders_voltage() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();

    watch.run_app(&mut retained, MenuItem::Battery);

    assert_eq!(retained.screen, Screen::App);
    let trace = trace.borrow();
    let printed = trace.iter().any(|event| match event {
        Event::Print(text) => text.contains("3.92 V"),
        _ => false,
    });
    assert!(printed);
}

#[test]
fn test_buzz_app_leaves_motor_off() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();

    watch.run_app(&mut retained, MenuItem::Buzz);

    let trace = trace.borrow();
    let pulses = trace
        .iter()
        .filter(|event| matches!(event, Event::Vibrate(true)))
        .count();
    assert_eq!(pulses, 10);
    let last_motor = trace
        .iter()
        .rev()
        .find(|event| matches!(event, Event::Vibrate(_)));
    assert_eq!(last_motor, Some(&Event::Vibrate(false)));
    assert_eq!(retained.screen, Screen::MainMenu);
}

#[test]
fn test_set_time_app_commits_once() {
    let (mut watch, trace) = mock_watch();
    watch.buttons.script = VecDeque::from(vec![ButtonSet::just(Button::Menu); 5]);
    let mut retained = settled_retained();

    watch.run_app(&mut retained, MenuItem::SetTime);

    let trace = trace.borrow();
    let writes: Vec<_> = trace
        .iter()
        .filter_map(|event| match event {
            Event::RtcSet(fields) => Some(*fields),
            _ => None,
        })
        .collect();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].hour, 10);
    assert_eq!(writes[0].second, 0);
    assert_eq!(retained.screen, Screen::MainMenu);
}

#[test]
fn test_accel_app_exits_on_back() {
    let (mut watch, trace) = mock_watch();
    watch.buttons.script = VecDeque::from(vec![ButtonSet::just(Button::Back)]);
    let mut retained = settled_retained();

    watch.run_app(&mut retained, MenuItem::Accelerometer);

    assert_eq!(retained.screen, Screen::MainMenu);
    let trace = trace.borrow();
    let printed = trace.iter().any(|event| match event {
        Event::Print(text) => text.contains("FACE UP"),
        _ => false,
    });
    assert!(printed);
}

#[test]
fn test_sync_now_app_refreshes_and_shows_face() {
    let (mut watch, _trace) = mock_watch();
    watch.net.connect_ok = true;
    watch.net.ntp_ok = true;
    watch.net.response = Some((200, payload_with_current(-4.5)));
    let mut retained = settled_retained();

    watch.run_app(&mut retained, MenuItem::SyncNow);

    assert_eq!(retained.screen, Screen::WatchFace);
    assert_eq!(retained.weather.current.temperature, -4.5);
}

#[test]
fn test_wifi_app_marks_provisioned() {
    let (mut watch, trace) = mock_watch();
    let mut retained = settled_retained();

    watch.run_app(&mut retained, MenuItem::SetupWifi);

    assert!(retained.wifi_configured);
    assert_eq!(retained.screen, Screen::App);
    let trace = trace.borrow();
    let provision = index_of(&trace, &Event::Provision);
    let radio_off = index_of(&trace, &Event::RadioOff);
    assert!(provision < radio_off);
}

#[test]
fn test_ntp_app_shows_synced_clock() {
    let (mut watch, trace) = mock_watch();
    watch.net.connect_ok = true;
    watch.net.ntp_ok = true;
    let mut retained = settled_retained();

    watch.run_app(&mut retained, MenuItem::SyncNtp);

    assert_eq!(retained.screen, Screen::MainMenu);
    let trace = trace.borrow();
    index_of(&trace, &Event::NtpSync);
    let printed = trace.iter().any(|event| match event {
        Event::Print(text) => text.contains("NTP Synced") && text.contains("10:30:00"),
        _ => false,
    });
    assert!(printed);
}

#[test]
fn test_ota_complete_reboots() {
    let (mut watch, trace) = mock_watch();
    watch.ota.script = VecDeque::from(vec![
        OtaStatus::Idle,
        OtaStatus::Connected,
        OtaStatus::Transferring,
        OtaStatus::Complete,
    ]);
    let mut retained = settled_retained();

    watch.run_ota(&mut retained);

    assert!(retained.ble_configured);
    let trace = trace.borrow();
    let begin = index_of(&trace, &Event::OtaBegin);
    let restart = index_of(&trace, &Event::Restart);
    assert!(begin < restart);
}

#[test]
fn test_ota_disconnect_returns_to_menu() {
    let (mut watch, trace) = mock_watch();
    watch.ota.script = VecDeque::from(vec![OtaStatus::Disconnected]);
    let mut retained = settled_retained();

    watch.run_ota(&mut retained);

    assert!(!retained.ble_configured);
    assert_eq!(retained.screen, Screen::MainMenu);
    assert!(!trace.borrow().contains(&Event::Restart));
}
