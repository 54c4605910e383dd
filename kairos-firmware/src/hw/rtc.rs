//! PCF8563 real-time clock driver.
//!
//! The chip drives the minute wake: the alarm minute register is
//! re-armed to the next minute on every alarm clear, and the AIE bit
//! keeps the INT line wired to the Ext0 wake source. Registers are
//! BCD.

use embedded_hal::i2c::I2c;

use kairos_core::traits::rtc::{ClockFields, Rtc, RtcError};

const ADDR: u8 = 0x51;

const REG_CTRL1: u8 = 0x00;
const REG_CTRL2: u8 = 0x01;
const REG_SECONDS: u8 = 0x02;
const REG_MINUTE_ALARM: u8 = 0x09;

/// CTRL2 with AIE set and AF cleared
const CTRL2_ALARM_ARMED: u8 = 0x02;

/// AE bit: field disabled in the alarm comparison
const ALARM_DISABLE: u8 = 0x80;

pub struct Pcf8563<I2C> {
    i2c: I2C,
}

impl<I2C, E> Pcf8563<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), RtcError> {
        self.i2c.write_read(ADDR, &[reg], buf).map_err(|_| RtcError)
    }

    fn write_registers(&mut self, data: &[u8]) -> Result<(), RtcError> {
        self.i2c.write(ADDR, data).map_err(|_| RtcError)
    }

    /// Arm the minute alarm for the minute after the current one and
    /// clear any pending flag. Hour, day and weekday stay out of the
    /// comparison; re-arming on every wake turns the hourly match into
    /// a once-per-minute alarm.
    fn arm_next_minute(&mut self) -> Result<(), RtcError> {
        let mut buf = [0u8; 1];
        self.read_registers(REG_SECONDS + 1, &mut buf)?;
        let minute = bcd_decode(buf[0] & 0x7F);
        let next = (minute + 1) % 60;

        self.write_registers(&[REG_CTRL2, CTRL2_ALARM_ARMED])?;
        self.write_registers(&[
            REG_MINUTE_ALARM,
            bcd_encode(next),
            ALARM_DISABLE,
            ALARM_DISABLE,
            ALARM_DISABLE,
        ])
    }
}

impl<I2C, E> Rtc for Pcf8563<I2C>
where
    I2C: I2c<Error = E>,
{
    fn read(&mut self) -> Result<ClockFields, RtcError> {
        let mut buf = [0u8; 7];
        self.read_registers(REG_SECONDS, &mut buf)?;
        Ok(ClockFields {
            second: bcd_decode(buf[0] & 0x7F),
            minute: bcd_decode(buf[1] & 0x7F),
            hour: bcd_decode(buf[2] & 0x3F),
            day: bcd_decode(buf[3] & 0x3F),
            month: bcd_decode(buf[5] & 0x1F),
            year: 2000 + bcd_decode(buf[6]) as u16,
        })
    }

    fn set(&mut self, fields: &ClockFields) -> Result<(), RtcError> {
        self.write_registers(&[
            REG_SECONDS,
            bcd_encode(fields.second),
            bcd_encode(fields.minute),
            bcd_encode(fields.hour),
            bcd_encode(fields.day),
            0, // weekday unused
            bcd_encode(fields.month),
            bcd_encode((fields.year % 100) as u8),
        ])
    }

    fn clear_alarm(&mut self) -> Result<(), RtcError> {
        self.arm_next_minute()
    }

    fn configure(&mut self, initial: &ClockFields) -> Result<(), RtcError> {
        self.write_registers(&[REG_CTRL1, 0x00])?;
        // Seed the time registers; after power loss the chip free-runs
        // from garbage until something writes them.
        self.set(initial)?;
        self.arm_next_minute()
    }
}

fn bcd_decode(v: u8) -> u8 {
    (v & 0x0F) + ((v >> 4) * 10)
}

fn bcd_encode(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}
