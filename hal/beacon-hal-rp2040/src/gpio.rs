//! GPIO output on RP2040
//!
//! Wraps an embassy-rp `Flex` pin so direction is an explicit step, the way
//! the heartbeat initializes it, instead of being fixed at construction.

use beacon_hal::OutputPin;
use embassy_rp::gpio::{Flex, Pin};
use embassy_rp::Peri;

/// Output pin backed by a `Flex` SIO pin
pub struct FlexOutput<'d> {
    pin: Flex<'d>,
    output: bool,
}

impl<'d> FlexOutput<'d> {
    /// Take the pin. It stays an input until `set_output` is called.
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Flex::new(pin),
            output: false,
        }
    }
}

impl OutputPin for FlexOutput<'_> {
    fn set_output(&mut self) {
        self.pin.set_as_output();
        self.output = true;
    }

    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&mut self) -> bool {
        self.pin.is_set_high()
    }

    fn is_output(&self) -> bool {
        self.output
    }
}
