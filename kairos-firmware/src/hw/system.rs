//! SoC-level services: monotonic time, delays, battery sense, the
//! vibration motor and the deep-sleep handoff.

use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Output, Pull, RtcPin};
use esp_hal::rtc_cntl::sleep::{Ext0WakeupSource, Ext1WakeupSource, WakeupLevel};
use esp_hal::rtc_cntl::Rtc;
use esp_hal::time::Instant;
use heapless::Vec;

use kairos_core::input::Button;
use kairos_core::power::SleepRequest;
use kairos_core::traits::system::System;

use crate::board::{BatteryAdc, BatteryPin, BATTERY_DIVIDER};

pub struct EspSystem {
    rtc: Rtc<'static>,
    delay: Delay,
    adc: BatteryAdc,
    battery: BatteryPin,
    motor: Output<'static>,
}

impl EspSystem {
    pub fn new(
        rtc: Rtc<'static>,
        adc: BatteryAdc,
        battery: BatteryPin,
        motor: Output<'static>,
    ) -> Self {
        Self {
            rtc,
            delay: Delay::new(),
            adc,
            battery,
            motor,
        }
    }
}

impl System for EspSystem {
    fn now_ms(&mut self) -> u64 {
        Instant::now().duration_since_epoch().as_millis()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_millis(ms);
    }

    fn battery_millivolts(&mut self) -> u16 {
        let adc_mv: u16 = match nb::block!(self.adc.read_oneshot(&mut self.battery)) {
            Ok(mv) => mv,
            Err(_) => {
                log::warn!("battery adc read failed");
                0
            }
        };
        (adc_mv as u32 * BATTERY_DIVIDER) as u16
    }

    fn vibrate(&mut self, on: bool) {
        if on {
            self.motor.set_high();
        } else {
            self.motor.set_low();
        }
    }

    fn restart(&mut self) {
        esp_hal::system::software_reset()
    }

    fn deep_sleep(&mut self, request: &SleepRequest) {
        self.motor.set_low();

        // Nothing runs after sleep_deep, so reclaiming pins that other
        // drivers still own cannot race anything.
        //
        // Every line the drivers were driving floats for the night.
        // An output left high would keep sourcing current through the
        // panel or a sensor for the whole sleep interval.
        macro_rules! float_pin {
            ($pin:ident) => {
                Input::new(
                    unsafe { esp_hal::peripherals::$pin::steal() },
                    InputConfig::default().with_pull(Pull::None),
                )
            };
        }
        let _epd_cs = float_pin!(GPIO5);
        let _epd_rst = float_pin!(GPIO9);
        let _epd_dc = float_pin!(GPIO10);
        let _motor = float_pin!(GPIO13);
        let _spi_sck = float_pin!(GPIO18);
        let _epd_busy = float_pin!(GPIO19);
        let _i2c_sda = float_pin!(GPIO21);
        let _i2c_scl = float_pin!(GPIO22);
        let _spi_mosi = float_pin!(GPIO23);

        let alarm_pin = unsafe { esp_hal::peripherals::GPIO27::steal() };
        let mut menu = unsafe { esp_hal::peripherals::GPIO26::steal() };
        let mut back = unsafe { esp_hal::peripherals::GPIO25::steal() };
        let mut up = unsafe { esp_hal::peripherals::GPIO35::steal() };
        let mut down = unsafe { esp_hal::peripherals::GPIO4::steal() };

        let mut pins: Vec<(&mut dyn RtcPin, WakeupLevel), 4> = Vec::new();
        if request.buttons.pressed(Button::Menu) {
            let _ = pins.push((&mut menu, WakeupLevel::High));
        }
        if request.buttons.pressed(Button::Back) {
            let _ = pins.push((&mut back, WakeupLevel::High));
        }
        if request.buttons.pressed(Button::Up) {
            let _ = pins.push((&mut up, WakeupLevel::High));
        }
        if request.buttons.pressed(Button::Down) {
            let _ = pins.push((&mut down, WakeupLevel::High));
        }

        let ext1 = Ext1WakeupSource::new(pins.as_mut_slice());
        let ext0 = Ext0WakeupSource::new(alarm_pin, WakeupLevel::Low);

        log::info!(
            "deep sleep, alarm={} buttons={:#06b}",
            request.alarm,
            request.buttons.bits()
        );
        if request.alarm {
            self.rtc.sleep_deep(&[&ext0, &ext1]);
        } else {
            self.rtc.sleep_deep(&[&ext1]);
        }
    }
}
