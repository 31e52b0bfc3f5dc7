//! Register-mapped GPIO
//!
//! Classic 8-bit port layout: one direction register (bit set = output) and
//! one data register per port. [`RegisterPin`] owns a single bit of such a
//! pair and is the only place that does the bit masking.

use crate::gpio::OutputPin;

/// Number of pins in one 8-bit port
pub const PORT_WIDTH: u8 = 8;

/// Direction and data registers of one GPIO port
///
/// Writes must take effect before the next access.
pub trait PortRegisters {
    /// Read the direction register (bit set = output)
    fn read_direction(&self) -> u8;

    /// Write the direction register
    fn write_direction(&mut self, value: u8);

    /// Read the data (output latch) register
    fn read_data(&self) -> u8;

    /// Write the data (output latch) register
    fn write_data(&mut self, value: u8);
}

impl<T: PortRegisters + ?Sized> PortRegisters for &mut T {
    fn read_direction(&self) -> u8 {
        T::read_direction(self)
    }

    fn write_direction(&mut self, value: u8) {
        T::write_direction(self, value)
    }

    fn read_data(&self) -> u8 {
        T::read_data(self)
    }

    fn write_data(&mut self, value: u8) {
        T::write_data(self, value)
    }
}

/// Errors when creating a register pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// Bit index outside the 8-bit port
    InvalidBit,
}

/// Output pin backed by one bit of a [`PortRegisters`] pair
pub struct RegisterPin<R> {
    regs: R,
    bit: u8,
}

impl<R: PortRegisters> RegisterPin<R> {
    /// Take ownership of bit `bit` (0-7) of the port
    pub fn new(regs: R, bit: u8) -> Result<Self, RegisterError> {
        if bit >= PORT_WIDTH {
            return Err(RegisterError::InvalidBit);
        }
        Ok(Self { regs, bit })
    }

    /// Bit index within the port
    pub fn bit(&self) -> u8 {
        self.bit
    }

    /// Give the port registers back
    pub fn release(self) -> R {
        self.regs
    }

    fn mask(&self) -> u8 {
        1 << self.bit
    }
}

impl<R: PortRegisters> OutputPin for RegisterPin<R> {
    fn set_output(&mut self) {
        let ddr = self.regs.read_direction();
        self.regs.write_direction(ddr | self.mask());
    }

    fn set_high(&mut self) {
        let data = self.regs.read_data();
        self.regs.write_data(data | self.mask());
    }

    fn set_low(&mut self) {
        let data = self.regs.read_data();
        self.regs.write_data(data & !self.mask());
    }

    fn toggle(&mut self) {
        let data = self.regs.read_data();
        self.regs.write_data(data ^ self.mask());
    }

    fn is_set_high(&mut self) -> bool {
        self.regs.read_data() & self.mask() != 0
    }

    fn is_output(&self) -> bool {
        self.regs.read_direction() & self.mask() != 0
    }
}
