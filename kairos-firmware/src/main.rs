//! Kairos watch firmware entry point.
//!
//! Boot is event-driven: every wake from deep sleep re-enters main,
//! the wake cause maps onto a dispatch reason, the core logic runs one
//! full wake cycle and the chip goes back down. There is no
//! steady-state loop.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::system::SleepSource;

use kairos_core::config::Settings;
use kairos_core::retained::Retained;
use kairos_core::state::WakeReason;
use kairos_core::traits::buttons::Buttons;
use kairos_core::traits::rtc::ClockFields;
use kairos_core::watch::Watch;

mod board;
mod hw;

use board::Board;

esp_bootloader_esp_idf::esp_app_desc!();

/// Seed for the clock chip on a cold start; overwritten by the first
/// NTP sync or a manual Set Time.
const FACTORY_TIME: ClockFields = ClockFields {
    year: 2026,
    month: 1,
    day: 1,
    hour: 0,
    minute: 0,
    second: 0,
};

/// Marks [`PERSISTED`] as written by this firmware. After power loss
/// (or a reflash with a different layout) RTC RAM holds arbitrary
/// bits, which must never be read as a [`Retained`] value.
const RETAINED_MAGIC: u32 = 0x4B52_4E4F;

#[repr(C)]
struct Persisted {
    magic: u32,
    retained: Retained,
}

#[esp_hal::ram(unstable(rtc_fast, persistent))]
static mut PERSISTED: Persisted = Persisted {
    magic: 0,
    retained: Retained::cold_boot(),
};

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Ext0 is the RTC alarm line, Ext1 the button bank. Anything else
    // (power-on, brown-out, watchdog) counts as a cold start and
    // rebuilds retained state from scratch.
    let reason = match esp_hal::rtc_cntl::wakeup_cause() {
        SleepSource::Ext0 => WakeReason::TimerAlarm,
        SleepSource::Ext1 => WakeReason::ButtonPress,
        _ => WakeReason::ColdReset,
    };

    // One instance in RTC fast RAM, single-threaded access only. When
    // the block is stale it is rewritten wholesale through the raw
    // pointer, so no reference to an invalid Retained ever exists.
    let persisted = core::ptr::addr_of_mut!(PERSISTED);
    let reason = unsafe {
        if reason == WakeReason::ColdReset || (*persisted).magic != RETAINED_MAGIC {
            persisted.write(Persisted {
                magic: RETAINED_MAGIC,
                retained: Retained::cold_boot(),
            });
            WakeReason::ColdReset
        } else {
            reason
        }
    };
    let retained = unsafe { &mut (*persisted).retained };

    let board = Board::init(peripherals);
    let mut watch = Watch::new(
        board.panel,
        board.rtc,
        board.accel,
        board.net,
        board.ota,
        board.buttons,
        board.system,
        Settings::default(),
    );

    // The waking press is still held this early in boot, so a level
    // sample stands in for the Ext1 wake status register.
    let wake_buttons = watch.buttons.read();

    watch.boot(retained, reason, wake_buttons, &FACTORY_TIME);

    // boot ends in sleep_deep and never comes back
    unreachable!()
}
