//! BMA423 accelerometer driver.
//!
//! Minimal bring-up: chip id check, accel enable at 100 Hz, raw 12-bit
//! sample reads. Orientation is derived on the host side of the bus
//! from the dominant axis.

use embedded_hal::i2c::I2c;
use esp_hal::delay::Delay;

use kairos_core::traits::accel::{AccelError, AccelSample, Accelerometer, Orientation};

const ADDR: u8 = 0x18;

const REG_CHIP_ID: u8 = 0x00;
const REG_DATA: u8 = 0x12;
const REG_ACC_CONF: u8 = 0x40;
const REG_ACC_RANGE: u8 = 0x41;
const REG_PWR_CONF: u8 = 0x7C;
const REG_PWR_CTRL: u8 = 0x7D;
const REG_CMD: u8 = 0x7E;

const CHIP_ID: u8 = 0x13;
const CMD_SOFT_RESET: u8 = 0xB6;

/// Below this on every axis the watch is considered mid-motion
const ORIENT_THRESHOLD: i16 = 300;

pub struct Bma423<I2C> {
    i2c: I2C,
    delay: Delay,
}

impl<I2C, E> Bma423<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            delay: Delay::new(),
        }
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), AccelError> {
        self.i2c.write(ADDR, &[reg, value]).map_err(|_| AccelError)
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), AccelError> {
        self.i2c
            .write_read(ADDR, &[reg], buf)
            .map_err(|_| AccelError)
    }
}

impl<I2C, E> Accelerometer for Bma423<I2C>
where
    I2C: I2c<Error = E>,
{
    fn configure(&mut self) -> Result<(), AccelError> {
        let mut id = [0u8; 1];
        self.read_registers(REG_CHIP_ID, &mut id)?;
        if id[0] != CHIP_ID {
            return Err(AccelError);
        }

        self.write_register(REG_CMD, CMD_SOFT_RESET)?;
        self.delay.delay_millis(5);
        // Leave advanced power save so the config registers accept writes
        self.write_register(REG_PWR_CONF, 0x00)?;
        self.delay.delay_millis(1);
        // 100 Hz, normal averaging, continuous
        self.write_register(REG_ACC_CONF, 0xA8)?;
        self.write_register(REG_ACC_RANGE, 0x01)?;
        self.write_register(REG_PWR_CTRL, 0x04)
    }

    fn accel(&mut self) -> Result<AccelSample, AccelError> {
        let mut buf = [0u8; 6];
        self.read_registers(REG_DATA, &mut buf)?;
        // 12-bit left-justified, little-endian register pairs
        Ok(AccelSample {
            x: i16::from_le_bytes([buf[0], buf[1]]) / 16,
            y: i16::from_le_bytes([buf[2], buf[3]]) / 16,
            z: i16::from_le_bytes([buf[4], buf[5]]) / 16,
        })
    }

    fn orientation(&mut self) -> Result<Orientation, AccelError> {
        let sample = self.accel()?;
        let (ax, ay, az) = (
            sample.x.saturating_abs(),
            sample.y.saturating_abs(),
            sample.z.saturating_abs(),
        );

        if ax < ORIENT_THRESHOLD && ay < ORIENT_THRESHOLD && az < ORIENT_THRESHOLD {
            return Ok(Orientation::Unknown);
        }

        Ok(if az >= ax && az >= ay {
            if sample.z > 0 {
                Orientation::FaceUp
            } else {
                Orientation::FaceDown
            }
        } else if ay >= ax {
            if sample.y > 0 {
                Orientation::BottomEdge
            } else {
                Orientation::TopEdge
            }
        } else if sample.x > 0 {
            Orientation::RightEdge
        } else {
            Orientation::LeftEdge
        })
    }
}
