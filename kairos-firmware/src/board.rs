//! Board support for the ESP32 watch.
//!
//! Maps the board's physical hardware to named subsystems. All pin
//! assignments and bus configuration live here so nothing outside this
//! module needs to know a GPIO number.
//!
//! Pin map:
//! GPIO |    Function   | Notes
//!   4  | Button Down   | Active high, external pull-down, RTC wake
//!  13  | Motor         | Vibration motor driver
//!  18  | SPI SCK       | EPD clock
//!  19  | EPD BUSY      | High while the panel is updating
//!  21  | I2C SDA       | Shared: RTC + accelerometer
//!  22  | I2C SCL       | Shared: RTC + accelerometer
//!  23  | SPI MOSI      | EPD data out
//!  25  | Button Back   | Active high, external pull-down, RTC wake
//!  26  | Button Menu   | Active high, external pull-down, RTC wake
//!  27  | RTC INT       | Active low alarm line, RTC wake
//!  34  | ADC Battery   | Through a 1:2 divider
//!  35  | Button Up     | Active high, external pull-down, RTC wake
//!   5  | EPD CS        | Chip select (active low)
//!   9  | EPD RST       | Reset (active low)
//!  10  | EPD DC        | Data/command select

use core::cell::RefCell;

use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::analog::adc::{Adc, AdcCalCurve, AdcConfig, AdcPin, Attenuation};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::{Peripherals, ADC1, GPIO34};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_hal::Blocking;
use static_cell::StaticCell;

use crate::hw::accel::Bma423;
use crate::hw::buttons::HwButtons;
use crate::hw::epd::Ssd1680Panel;
use crate::hw::net::OfflineRadio;
use crate::hw::ota::OtaIdle;
use crate::hw::rtc::Pcf8563;
use crate::hw::system::EspSystem;

/// Battery divider halves the cell voltage before the ADC
pub const BATTERY_DIVIDER: u32 = 2;

pub type I2cBus = RefCell<I2c<'static, Blocking>>;
pub type I2cDev = RefCellDevice<'static, I2c<'static, Blocking>>;

pub type SpiDev = ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, Delay>;

pub type BatteryPin = AdcPin<GPIO34<'static>, ADC1<'static>, AdcCalCurve<ADC1<'static>>>;
pub type BatteryAdc = Adc<'static, ADC1<'static>, Blocking>;

static I2C_BUS: StaticCell<I2cBus> = StaticCell::new();

/// Every subsystem the watch logic needs, fully wired.
pub struct Board {
    pub panel: Ssd1680Panel<SpiDev>,
    pub rtc: Pcf8563<I2cDev>,
    pub accel: Bma423<I2cDev>,
    pub net: OfflineRadio,
    pub ota: OtaIdle,
    pub buttons: HwButtons,
    pub system: EspSystem,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        // EPD over SPI
        let cs = Output::new(p.GPIO5, Level::High, OutputConfig::default());
        let dc = Output::new(p.GPIO10, Level::High, OutputConfig::default());
        let rst = Output::new(p.GPIO9, Level::High, OutputConfig::default());
        let busy = Input::new(p.GPIO19, InputConfig::default().with_pull(Pull::None));

        let spi_cfg = SpiConfig::default().with_frequency(Rate::from_mhz(20));
        let spi_bus = Spi::new(p.SPI2, spi_cfg)
            .expect("spi init")
            .with_sck(p.GPIO18)
            .with_mosi(p.GPIO23);
        let spi_dev = ExclusiveDevice::new(spi_bus, cs, Delay::new()).expect("spi device");
        let panel = Ssd1680Panel::new(spi_dev, dc, rst, busy);

        // Shared I2C bus: RTC at 0x51, accelerometer at 0x18
        let i2c_cfg = I2cConfig::default().with_frequency(Rate::from_khz(400));
        let i2c = I2c::new(p.I2C0, i2c_cfg)
            .expect("i2c init")
            .with_sda(p.GPIO21)
            .with_scl(p.GPIO22);
        let bus = I2C_BUS.init(RefCell::new(i2c));
        let rtc = Pcf8563::new(RefCellDevice::new(bus));
        let accel = Bma423::new(RefCellDevice::new(bus));

        // Buttons, externally pulled down, pressed = high
        let buttons = HwButtons::new(
            Input::new(p.GPIO26, InputConfig::default().with_pull(Pull::None)),
            Input::new(p.GPIO25, InputConfig::default().with_pull(Pull::None)),
            Input::new(p.GPIO35, InputConfig::default().with_pull(Pull::None)),
            Input::new(p.GPIO4, InputConfig::default().with_pull(Pull::None)),
        );

        // Battery sense through the divider, 11dB for the full range
        let mut adc_cfg = AdcConfig::new();
        let battery_pin =
            adc_cfg.enable_pin_with_cal::<_, AdcCalCurve<ADC1>>(p.GPIO34, Attenuation::_11dB);
        let adc = Adc::new(p.ADC1, adc_cfg);

        let motor = Output::new(p.GPIO13, Level::Low, OutputConfig::default());
        let system = EspSystem::new(
            esp_hal::rtc_cntl::Rtc::new(p.LPWR),
            adc,
            battery_pin,
            motor,
        );

        Board {
            panel,
            rtc,
            accel,
            net: OfflineRadio,
            ota: OtaIdle,
            buttons,
            system,
        }
    }
}
