//! Weather Telemetry Wire Format
//!
//! This crate defines the fixed-layout payload the watch fetches from its
//! telemetry endpoint on each scheduled network refresh. The format is not
//! self-describing: there are no delimiters, no length prefixes and no
//! field tags. Producer and consumer agree on field order, widths and
//! byte order out of band, and any change to either side breaks the
//! contract silently.
//!
//! # Payload layout
//!
//! ```text
//! ┌──────────┬────────────────┬────────────────────┐
//! │ current  │ hourly[0..4]   │ daily[0..8]        │
//! │ Forecast │ 4 × Forecast   │ 8 × DailyForecast  │
//! │ 10 B     │ 40 B           │ 144 B              │
//! └──────────┴────────────────┴────────────────────┘
//! ```
//!
//! Every numeric field is little-endian; floats are IEEE-754 binary32.
//! The complete payload is exactly [`WeatherSnapshot::WIRE_LEN`] bytes
//! (194) and is decoded wholesale; there is no partial merge.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod cursor;
pub mod weather;

pub use cursor::{ByteCursor, DecodeError};
pub use weather::{DailyForecast, Forecast, WeatherSnapshot};
