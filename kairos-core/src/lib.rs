//! Board-agnostic control logic for the Kairos e-paper watch
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware collaborator traits (panel, RTC, accelerometer, radio)
//! - Wake-cause dispatch and the deep-sleep handoff
//! - The interactive UI session state machine
//! - Menu pagination/selection model
//! - The time-set field editor
//! - Watch-face rendering capability and the two stock faces
//! - Retained-memory state that survives deep sleep
//!
//! The whole crate is written around an explicit tick/step model so the
//! session and dispatch logic can be driven by a test harness on the
//! host exactly as the firmware drives it on the device.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod faces;
pub mod input;
pub mod menu;
pub mod power;
pub mod retained;
pub mod session;
pub mod state;
pub mod timeset;
pub mod traits;
pub mod watch;
