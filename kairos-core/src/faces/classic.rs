//! The default big-digit face.

use core::fmt::Write;

use heapless::String;
use kairos_wire::WeatherSnapshot;

use crate::faces::Face;
use crate::traits::panel::{Color, Font, Panel};
use crate::traits::rtc::ClockFields;

/// Zero-padded HH:MM in large digits, nothing else
#[derive(Debug, Default)]
pub struct ClassicFace;

impl Face for ClassicFace {
    fn draw(&self, panel: &mut dyn Panel, now: &ClockFields, _weather: &WeatherSnapshot) {
        panel.fill_screen(Color::Black);
        panel.set_font(Font::BigDigits);
        panel.set_text_color(Color::White);
        panel.set_cursor(10, 120);

        let mut line: String<8> = String::new();
        // HH:MM always fits in 8 bytes.
        let _ = write!(line, "{:02}:{:02}", now.hour, now.minute);
        panel.print(&line);
    }
}
