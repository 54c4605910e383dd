//! Physical button sampling.

use esp_hal::gpio::Input;

use kairos_core::input::{Button, ButtonSet};
use kairos_core::traits::buttons::Buttons;

/// The four button lines, externally pulled down, pressed = high.
pub struct HwButtons {
    menu: Input<'static>,
    back: Input<'static>,
    up: Input<'static>,
    down: Input<'static>,
}

impl HwButtons {
    pub fn new(
        menu: Input<'static>,
        back: Input<'static>,
        up: Input<'static>,
        down: Input<'static>,
    ) -> Self {
        Self {
            menu,
            back,
            up,
            down,
        }
    }
}

impl Buttons for HwButtons {
    fn read(&mut self) -> ButtonSet {
        let mut set = ButtonSet::EMPTY;
        if self.menu.is_high() {
            set = set.with(Button::Menu);
        }
        if self.back.is_high() {
            set = set.with(Button::Back);
        }
        if self.up.is_high() {
            set = set.with(Button::Up);
        }
        if self.down.is_high() {
            set = set.with(Button::Down);
        }
        set
    }
}
