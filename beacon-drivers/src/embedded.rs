//! embedded-hal 1.0 adapters
//!
//! Lets any board with a standard HAL plug into the blink driver. Output
//! pins from `embedded-hal` are outputs by construction (type state), so
//! `set_output` has nothing to do.
//!
//! Only infallible pins are accepted. A GPIO that can fail (behind an I2C
//! expander, say) would need an error path the heartbeat does not have.

use core::convert::Infallible;

use beacon_hal::{BlockingDelay, OutputPin};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

/// [`OutputPin`] over an `embedded-hal` stateful output pin
pub struct EhOutputPin<P> {
    pin: P,
}

impl<P> EhOutputPin<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    /// Wrap a pin that is already configured as output
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Unwrap the inner pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutputPin<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn set_output(&mut self) {}

    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|e| match e {})
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|e| match e {})
    }

    fn toggle(&mut self) {
        self.pin.toggle().unwrap_or_else(|e| match e {})
    }

    fn is_set_high(&mut self) -> bool {
        self.pin.is_set_high().unwrap_or_else(|e| match e {})
    }

    fn is_output(&self) -> bool {
        true
    }
}

/// [`BlockingDelay`] over an `embedded-hal` delay
pub struct EhDelay<D> {
    delay: D,
}

impl<D: DelayNs> EhDelay<D> {
    /// Wrap an `embedded-hal` delay
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Unwrap the inner delay
    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> BlockingDelay for EhDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        DelayNs::delay_ms(&mut self.delay, ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::BlinkDriver;
    use embedded_hal::digital::{self, ErrorType};

    /// Latch-only pin, as an embedded-hal implementation would expose it
    #[derive(Default)]
    struct LatchPin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for LatchPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for LatchPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    impl StatefulOutputPin for LatchPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    /// Delay that only accumulates the requested time
    #[derive(Default)]
    struct SumDelay {
        total_ns: u64,
    }

    impl DelayNs for SumDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_pin_adapter() {
        let mut pin = EhOutputPin::new(LatchPin::default());

        assert!(pin.is_output());
        pin.set_high();
        assert!(pin.is_set_high());
        pin.toggle();
        assert!(pin.is_set_low());
        pin.set_level(true);
        assert!(pin.is_set_high());

        assert_eq!(pin.into_inner().writes, 3);
    }

    #[test]
    fn test_delay_adapter_converts_to_ns() {
        let mut delay = EhDelay::new(SumDelay::default());

        delay.delay_ms(150);
        delay.delay_ms(1800);

        assert_eq!(delay.into_inner().total_ns, 1_950_000_000);
    }

    #[test]
    fn test_driver_on_embedded_hal() {
        let mut blink = BlinkDriver::new(
            EhOutputPin::new(LatchPin::default()),
            EhDelay::new(SumDelay::default()),
        );
        blink.initialize();
        blink.run_cycle();

        let (pin, delay) = blink.release();
        let mut pin = pin.into_inner();
        assert!(!digital::StatefulOutputPin::is_set_high(&mut pin).unwrap());
        assert_eq!(delay.into_inner().total_ns, 2_350_000_000);
    }
}
