//! Watch faces.
//!
//! A face is a pure render function over the current time and the last
//! telemetry snapshot. Faces draw into the framebuffer only; the
//! caller owns window setup and the flush to glass, so one face works
//! under both full and partial refresh.

use crate::traits::panel::Panel;
use crate::traits::rtc::ClockFields;
use kairos_wire::WeatherSnapshot;

mod classic;
mod status;

pub use classic::ClassicFace;
pub use status::StatusFace;

/// Which of the two faces to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceSelect {
    /// Big-digit time face
    Primary,
    /// Time plus a weather summary
    Alt,
}

/// A renderable watch face
pub trait Face {
    fn draw(&self, panel: &mut dyn Panel, now: &ClockFields, weather: &WeatherSnapshot);
}
