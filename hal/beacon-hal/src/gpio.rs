//! GPIO pin abstractions
//!
//! Provides the output pin trait that chip-specific HALs implement.

/// Digital output pin
///
/// A handle exclusively owns the hardware bit it represents. Implementations
/// handle the actual register manipulation for the specific chip.
pub trait OutputPin {
    /// Configure the pin direction as output
    fn set_output(&mut self);

    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Invert the pin level
    ///
    /// Implementations flip whatever level the hardware latch currently
    /// holds. No software copy of the level is consulted.
    fn toggle(&mut self);

    /// Check if the output latch is currently set high
    ///
    /// Takes `&mut self` because reading the latch back may need bus access
    /// (port expanders, shared register blocks).
    fn is_set_high(&mut self) -> bool;

    /// Check if the pin direction is output
    fn is_output(&self) -> bool;

    /// Check if the output latch is currently set low
    fn is_set_low(&mut self) -> bool {
        !self.is_set_high()
    }

    /// Set the pin to a specific level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_output(&mut self) {
        T::set_output(self)
    }

    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn toggle(&mut self) {
        T::toggle(self)
    }

    fn is_set_high(&mut self) -> bool {
        T::is_set_high(self)
    }

    fn is_output(&self) -> bool {
        T::is_output(self)
    }
}
