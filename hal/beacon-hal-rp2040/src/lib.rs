//! RP2040-specific HAL for the heartbeat firmware
//!
//! This crate provides RP2040 implementations of the shared `beacon-hal`
//! traits:
//!
//! - [`gpio::FlexOutput`] - SIO pin with explicit direction control
//! - [`delay::CycleDelay`] - cycle-counted busy-wait calibrated at build time

#![no_std]

pub mod delay;
pub mod gpio;

// Re-export shared traits from beacon-hal for convenience
pub use beacon_hal::{BlockingDelay, OutputPin};
