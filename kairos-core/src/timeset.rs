//! Field-by-field time editor.
//!
//! The Set Time app walks a cursor through hour, minute, year, month
//! and day. Up/Down adjust the field under the cursor with wraparound,
//! Menu advances the cursor (committing once it runs past the last
//! field) and Back retreats without ever leaving the editor. Years are
//! edited as a two-digit offset from 2000.

use crate::input::{Button, ButtonSet};
use crate::traits::rtc::ClockFields;

/// Editable fields, in cursor order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Hour,
    Minute,
    Year,
    Month,
    Day,
}

impl Field {
    const ORDER: [Field; 5] = [
        Field::Hour,
        Field::Minute,
        Field::Year,
        Field::Month,
        Field::Day,
    ];
}

/// Outcome of one editor tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeSetStep {
    /// Still editing, redraw and poll again
    Edit,
    /// The cursor ran past the last field; write this to the clock
    Commit(ClockFields),
}

/// In-progress edit of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSetter {
    hour: u8,
    minute: u8,
    /// Years since 2000, 0..=99
    year: u8,
    month: u8,
    day: u8,
    cursor: usize,
    blink_visible: bool,
}

impl TimeSetter {
    /// Start editing from the clock's current reading
    pub fn new(now: ClockFields) -> Self {
        Self {
            hour: now.hour.min(23),
            minute: now.minute.min(59),
            year: now.year.saturating_sub(2000).min(99) as u8,
            month: now.month.clamp(1, 12),
            day: now.day.clamp(1, 31),
            cursor: 0,
            blink_visible: true,
        }
    }

    /// Field currently under the cursor
    pub fn cursor(&self) -> Field {
        Field::ORDER[self.cursor]
    }

    /// Whether the field under the cursor is drawn this tick
    pub fn blink_visible(&self) -> bool {
        self.blink_visible
    }

    /// Values as they stand, for rendering
    pub fn fields(&self) -> ClockFields {
        ClockFields {
            year: 2000 + self.year as u16,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: 0,
        }
    }

    /// Apply one poll's button snapshot.
    ///
    /// The cursor blinks on its own timebase of one toggle per tick; a
    /// press forces the field visible so edits are never made blind.
    pub fn tick(&mut self, buttons: ButtonSet) -> TimeSetStep {
        if buttons.is_empty() {
            self.blink_visible = !self.blink_visible;
            return TimeSetStep::Edit;
        }
        self.blink_visible = true;

        if buttons.pressed(Button::Menu) {
            if self.cursor + 1 == Field::ORDER.len() {
                return TimeSetStep::Commit(self.fields());
            }
            self.cursor += 1;
        } else if buttons.pressed(Button::Back) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if buttons.pressed(Button::Up) {
            self.adjust(1);
        } else if buttons.pressed(Button::Down) {
            self.adjust(-1);
        }
        TimeSetStep::Edit
    }

    fn adjust(&mut self, delta: i8) {
        match self.cursor() {
            Field::Hour => self.hour = wrap(self.hour, delta, 0, 23),
            Field::Minute => self.minute = wrap(self.minute, delta, 0, 59),
            Field::Year => self.year = wrap(self.year, delta, 0, 99),
            Field::Month => self.month = wrap(self.month, delta, 1, 12),
            Field::Day => self.day = wrap(self.day, delta, 1, 31),
        }
    }
}

fn wrap(value: u8, delta: i8, min: u8, max: u8) -> u8 {
    let span = (max - min + 1) as i16;
    let offset = (value - min) as i16 + delta as i16;
    (offset.rem_euclid(span) + min as i16) as u8
}
