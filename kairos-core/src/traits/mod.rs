//! Hardware collaborator traits.
//!
//! Everything the watch logic touches on the board sits behind one of
//! these traits so the whole dispatch/session path runs on the host
//! against recording mocks. Firmware provides the real
//! implementations.

pub mod accel;
pub mod buttons;
pub mod net;
pub mod ota;
pub mod panel;
pub mod rtc;
pub mod system;
