//! Board-agnostic core logic for the heartbeat firmware
//!
//! This crate contains everything that does not depend on a specific
//! hardware implementation:
//!
//! - The heartbeat pattern table and its timing constants
//! - Pin level state machine
//! - Delay calibration against the build-time CPU clock
//! - Board configuration validation
//! - Waveform trace recording for host-side verification

#![no_std]
#![deny(unsafe_code)]

// proptest needs std in scope for its macros
#[cfg(test)]
extern crate std;

pub mod config;
pub mod pattern;
pub mod state;
pub mod timing;
pub mod trace;
