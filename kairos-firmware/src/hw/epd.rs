//! SSD1680 e-paper driver for the 200x200 1-bit panel.
//!
//! Framebuffer-backed: draw calls paint into a 5000 byte buffer, the
//! flush streams it to the controller RAM and kicks the chosen
//! waveform. Partial refresh writes the new frame on top of the
//! previous one with the DU waveform, full refresh runs the flashing
//! GC cycle. In controller RAM a set bit is a white pixel.

use embedded_hal::spi::SpiDevice;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, Output};

use kairos_core::traits::panel::{Color, Font, Panel, Refresh};

use super::font;

pub const WIDTH: usize = 200;
pub const HEIGHT: usize = 200;
const FRAME_BYTES: usize = WIDTH * HEIGHT / 8;

// SSD1680 commands
mod cmd {
    pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;
    pub const DEEP_SLEEP: u8 = 0x10;
    pub const DATA_ENTRY_MODE: u8 = 0x11;
    pub const SW_RESET: u8 = 0x12;
    pub const TEMPERATURE_SENSOR: u8 = 0x18;
    pub const MASTER_ACTIVATION: u8 = 0x20;
    pub const DISPLAY_UPDATE_CONTROL_2: u8 = 0x22;
    pub const WRITE_RAM_BW: u8 = 0x24;
    pub const BORDER_WAVEFORM: u8 = 0x3C;
    pub const SET_RAM_X_RANGE: u8 = 0x44;
    pub const SET_RAM_Y_RANGE: u8 = 0x45;
    pub const SET_RAM_X_COUNTER: u8 = 0x4E;
    pub const SET_RAM_Y_COUNTER: u8 = 0x4F;
}

pub struct Ssd1680Panel<SPI> {
    spi: SPI,
    dc: Output<'static>,
    rst: Output<'static>,
    busy: Input<'static>,
    delay: Delay,
    frame: [u8; FRAME_BYTES],
    init_done: bool,
    font: Font,
    color: Color,
    cursor_x: i16,
    cursor_y: i16,
    line_start_x: i16,
}

impl<SPI, E> Ssd1680Panel<SPI>
where
    SPI: SpiDevice<Error = E>,
{
    pub fn new(spi: SPI, dc: Output<'static>, rst: Output<'static>, busy: Input<'static>) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            delay: Delay::new(),
            frame: [0xFF; FRAME_BYTES],
            init_done: false,
            font: Font::Body,
            color: Color::Black,
            cursor_x: 0,
            cursor_y: 0,
            line_start_x: 0,
        }
    }

    fn send_command(&mut self, command: u8) {
        self.dc.set_low();
        let _ = self.spi.write(&[command]);
        self.dc.set_high();
    }

    fn send_data(&mut self, data: &[u8]) {
        let _ = self.spi.write(data);
    }

    fn wait_idle(&mut self) {
        while self.busy.is_high() {
            self.delay.delay_millis(1);
        }
    }

    fn hw_reset(&mut self) {
        self.rst.set_high();
        self.delay.delay_millis(10);
        self.rst.set_low();
        self.delay.delay_millis(2);
        self.rst.set_high();
        self.delay.delay_millis(10);
        self.wait_idle();
    }

    fn init_controller(&mut self) {
        self.hw_reset();
        self.send_command(cmd::SW_RESET);
        self.wait_idle();

        self.send_command(cmd::DRIVER_OUTPUT_CONTROL);
        self.send_data(&[(HEIGHT - 1) as u8, ((HEIGHT - 1) >> 8) as u8, 0x00]);
        self.send_command(cmd::DATA_ENTRY_MODE);
        self.send_data(&[0x03]);
        self.send_command(cmd::BORDER_WAVEFORM);
        self.send_data(&[0x05]);
        self.send_command(cmd::TEMPERATURE_SENSOR);
        self.send_data(&[0x80]);
        self.set_ram_window();

        self.init_done = true;
    }

    fn set_ram_window(&mut self) {
        self.send_command(cmd::SET_RAM_X_RANGE);
        self.send_data(&[0x00, (WIDTH / 8 - 1) as u8]);
        self.send_command(cmd::SET_RAM_Y_RANGE);
        self.send_data(&[0x00, 0x00, (HEIGHT - 1) as u8, ((HEIGHT - 1) >> 8) as u8]);
        self.send_command(cmd::SET_RAM_X_COUNTER);
        self.send_data(&[0x00]);
        self.send_command(cmd::SET_RAM_Y_COUNTER);
        self.send_data(&[0x00, 0x00]);
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: Color) {
        if x < 0 || y < 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
            return;
        }
        let index = y as usize * (WIDTH / 8) + x as usize / 8;
        let mask = 0x80 >> (x as usize % 8);
        match color {
            Color::White => self.frame[index] |= mask,
            Color::Black => self.frame[index] &= !mask,
        }
    }

    fn scale(&self) -> i16 {
        match self.font {
            Font::Body => 2,
            Font::BigDigits => 5,
        }
    }

    fn draw_glyph(&mut self, ch: char) {
        let scale = self.scale();
        let columns = *font::glyph(ch);
        for (col, bits) in columns.iter().enumerate() {
            for row in 0..font::GLYPH_HEIGHT {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let x0 = self.cursor_x + col as i16 * scale;
                let y0 = self.cursor_y + row as i16 * scale;
                for dx in 0..scale {
                    for dy in 0..scale {
                        self.set_pixel(x0 + dx, y0 + dy, self.color);
                    }
                }
            }
        }
        // One blank column between glyphs
        self.cursor_x += (font::GLYPH_WIDTH as i16 + 1) * scale;
    }
}

impl<SPI, E> Panel for Ssd1680Panel<SPI>
where
    SPI: SpiDevice<Error = E>,
{
    fn set_full_window(&mut self) {
        if !self.init_done {
            self.init_controller();
        } else {
            self.set_ram_window();
        }
    }

    fn fill_screen(&mut self, color: Color) {
        let byte = match color {
            Color::White => 0xFF,
            Color::Black => 0x00,
        };
        self.frame = [byte; FRAME_BYTES];
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_text_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.line_start_x = x;
    }

    fn print(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor_x = self.line_start_x;
                self.cursor_y += (font::GLYPH_HEIGHT as i16 + 2) * self.scale();
            } else {
                self.draw_glyph(ch);
            }
        }
    }

    fn display(&mut self, refresh: Refresh) {
        if !self.init_done {
            self.init_controller();
        }
        self.send_command(cmd::WRITE_RAM_BW);
        let _ = self.spi.write(&self.frame);

        self.send_command(cmd::DISPLAY_UPDATE_CONTROL_2);
        self.send_data(&[if refresh.is_partial() { 0xFC } else { 0xF7 }]);
        self.send_command(cmd::MASTER_ACTIVATION);
        self.wait_idle();
    }

    fn hibernate(&mut self) {
        if !self.init_done {
            return;
        }
        self.send_command(cmd::DEEP_SLEEP);
        self.send_data(&[0x01]);
        self.init_done = false;
    }
}
