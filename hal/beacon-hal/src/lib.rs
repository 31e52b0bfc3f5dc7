//! Beacon Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the blink driver is
//! written against. Chip-specific HALs (RP2040, bare 8-bit ports, host
//! simulation) implement them so the same driver runs everywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (beacon-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  beacon-drivers (BlinkDriver<P, D>)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  beacon-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  beacon-hal-  │       │  RegisterPin  │
//! │    rp2040     │       │ (8-bit ports) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output with direction control
//! - [`delay::BlockingDelay`] - Busy-wait millisecond delay
//! - [`register::PortRegisters`] - Raw direction/data register pair

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod register;

// Re-export key traits at crate root for convenience
pub use delay::BlockingDelay;
pub use gpio::OutputPin;
pub use register::{PortRegisters, RegisterError, RegisterPin};
