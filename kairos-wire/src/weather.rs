//! Forecast structures and the fixed-order payload decode.
//!
//! Field order and widths mirror the producing endpoint exactly:
//! a `Forecast` is temperature (f32), humidity (f32), condition code
//! (u16); a `DailyForecast` inserts the min/max pair between humidity
//! and the condition code. No padding, no alignment gaps.

use crate::cursor::{ByteCursor, DecodeError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of hourly entries in every payload
pub const HOURLY_COUNT: usize = 4;

/// Number of daily entries in every payload
pub const DAILY_COUNT: usize = 8;

/// One point-in-time forecast
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Forecast {
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// Provider condition code (e.g. 800 = clear sky)
    pub condition_code: u16,
}

impl Forecast {
    /// Encoded size in bytes
    pub const WIRE_LEN: usize = 4 + 4 + 2;

    /// All-zero forecast, the state before any payload has arrived
    pub const EMPTY: Self = Self {
        temperature: 0.0,
        humidity: 0.0,
        condition_code: 0,
    };

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            temperature: cursor.read_f32()?,
            humidity: cursor.read_f32()?,
            condition_code: cursor.read_u16()?,
        })
    }
}

/// One whole-day forecast with the day's temperature extremes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyForecast {
    /// Representative temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// Daily minimum temperature in °C
    pub temp_min: f32,
    /// Daily maximum temperature in °C
    pub temp_max: f32,
    /// Provider condition code
    pub condition_code: u16,
}

impl DailyForecast {
    /// Encoded size in bytes
    pub const WIRE_LEN: usize = 4 + 4 + 4 + 4 + 2;

    /// All-zero forecast, the state before any payload has arrived
    pub const EMPTY: Self = Self {
        temperature: 0.0,
        humidity: 0.0,
        temp_min: 0.0,
        temp_max: 0.0,
        condition_code: 0,
    };

    fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            temperature: cursor.read_f32()?,
            humidity: cursor.read_f32()?,
            temp_min: cursor.read_f32()?,
            temp_max: cursor.read_f32()?,
            condition_code: cursor.read_u16()?,
        })
    }
}

/// Complete decoded payload: current conditions plus the hourly and
/// daily outlooks. Lives in retained memory between refreshes and is
/// overwritten wholesale on each successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherSnapshot {
    /// Current conditions
    pub current: Forecast,
    /// Next four hours
    pub hourly: [Forecast; HOURLY_COUNT],
    /// Next eight days
    pub daily: [DailyForecast; DAILY_COUNT],
}

impl WeatherSnapshot {
    /// Exact encoded payload size in bytes (194)
    pub const WIRE_LEN: usize =
        Forecast::WIRE_LEN * (1 + HOURLY_COUNT) + DailyForecast::WIRE_LEN * DAILY_COUNT;

    /// All-zero snapshot, the state before any payload has arrived
    pub const EMPTY: Self = Self {
        current: Forecast::EMPTY,
        hourly: [Forecast::EMPTY; HOURLY_COUNT],
        daily: [DailyForecast::EMPTY; DAILY_COUNT],
    };

    /// Decode one snapshot from the start of `payload`.
    ///
    /// Consumes exactly [`Self::WIRE_LEN`] bytes in fixed order: one
    /// current `Forecast`, four hourly `Forecast`s, eight
    /// `DailyForecast`s. A payload shorter than that fails with
    /// [`DecodeError::Underrun`] before anything is returned; trailing
    /// bytes beyond the expected length are ignored.
    pub fn decode(payload: &[u8]) -> Result<Self, DecodeError> {
        let mut cursor = ByteCursor::new(payload);
        let current = Forecast::decode(&mut cursor)?;

        let mut hourly = [Forecast::default(); HOURLY_COUNT];
        for slot in hourly.iter_mut() {
            *slot = Forecast::decode(&mut cursor)?;
        }

        let mut daily = [DailyForecast::default(); DAILY_COUNT];
        for slot in daily.iter_mut() {
            *slot = DailyForecast::decode(&mut cursor)?;
        }

        Ok(Self {
            current,
            hourly,
            daily,
        })
    }
}
