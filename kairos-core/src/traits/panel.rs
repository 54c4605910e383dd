//! E-paper panel abstraction.
//!
//! The drawing model is deliberately small: a monochrome framebuffer
//! with a text cursor, flushed to glass with either a full or a
//! partial waveform. Object-safe so render code can take
//! `&mut dyn Panel`.

/// Drawing color on a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
}

/// Typeface selection for text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Small text for menus and status lines
    Body,
    /// Large digits for the time on the primary face
    BigDigits,
}

/// Waveform used when flushing the framebuffer to glass.
///
/// Full refresh clears ghosting but flashes the panel; partial is
/// quiet and quick but accumulates ghosting over many updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Refresh {
    Full,
    Partial,
}

impl Refresh {
    pub const fn is_partial(self) -> bool {
        matches!(self, Refresh::Partial)
    }
}

/// The e-paper display
pub trait Panel {
    /// Address the whole panel for the next draw
    fn set_full_window(&mut self);

    /// Fill the framebuffer with one color
    fn fill_screen(&mut self, color: Color);

    fn set_font(&mut self, font: Font);

    fn set_text_color(&mut self, color: Color);

    /// Move the text cursor to pixel coordinates
    fn set_cursor(&mut self, x: i16, y: i16);

    /// Draw `text` at the cursor, advancing it. `'\n'` starts a new
    /// line at the left edge.
    fn print(&mut self, text: &str);

    /// Flush the framebuffer to the glass
    fn display(&mut self, refresh: Refresh);

    /// Put the panel controller into its lowest-power state
    fn hibernate(&mut self);
}
