//! Hardware driver implementations
//!
//! This crate provides the heartbeat blink driver and the glue that lets it
//! run against different pin and delay providers:
//!
//! - [`blink::BlinkDriver`] - toggles one pin through a fixed pattern forever
//! - [`embedded`] - adapters for `embedded-hal` 1.0 pins and delays
//! - [`sim`] - virtual clock, pin and delay for host-side runs

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod blink;
pub mod embedded;
pub mod sim;

pub use blink::BlinkDriver;
