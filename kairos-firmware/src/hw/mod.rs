//! Hardware implementations of the core collaborator traits.

pub mod accel;
pub mod buttons;
pub mod epd;
pub mod font;
pub mod net;
pub mod ota;
pub mod rtc;
pub mod system;
