//! The alternate face: time plus a weather summary.

use core::fmt::Write;

use heapless::String;
use kairos_wire::WeatherSnapshot;

use crate::faces::Face;
use crate::traits::panel::{Color, Font, Panel};
use crate::traits::rtc::ClockFields;

/// Small time with current conditions and today's extremes
#[derive(Debug, Default)]
pub struct StatusFace;

impl Face for StatusFace {
    fn draw(&self, panel: &mut dyn Panel, now: &ClockFields, weather: &WeatherSnapshot) {
        panel.fill_screen(Color::White);
        panel.set_font(Font::Body);
        panel.set_text_color(Color::Black);
        panel.set_cursor(10, 30);

        let mut text: String<96> = String::new();
        let _ = write!(
            text,
            "{:02}:{:02}\n{:.1}C {:.0}%\nH {:.1} L {:.1}",
            now.hour,
            now.minute,
            weather.current.temperature,
            weather.current.humidity,
            weather.daily[0].temp_max,
            weather.daily[0].temp_min,
        );
        panel.print(&text);
    }
}
