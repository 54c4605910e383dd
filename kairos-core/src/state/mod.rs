//! Top-level machine state
//!
//! Two small enums anchor everything else: [`WakeReason`] says why the
//! device is running at all, and [`Screen`] says what the UI was showing
//! when it last went to sleep.

pub mod screen;
pub mod wake;

pub use screen::Screen;
pub use wake::WakeReason;
