//! Button line sampling.

use crate::input::ButtonSet;

/// The four physical button lines
pub trait Buttons {
    /// Level snapshot of all four lines right now
    fn read(&mut self) -> ButtonSet;
}
