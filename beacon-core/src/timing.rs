//! Delay calibration
//!
//! Cycle-counted busy-waits are calibrated against the CPU clock frequency
//! assumed at build time. If the real clock differs, every delay scales by
//! the same ratio and the blink pattern stretches or shrinks accordingly.

use core::num::NonZeroU32;

/// Milliseconds per second
const MS_PER_S: u32 = 1000;

/// Conversion from milliseconds to CPU cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DelayCalibration {
    cpu_hz: NonZeroU32,
}

impl DelayCalibration {
    /// Calibrate for a clock of `cpu_hz`
    pub const fn new(cpu_hz: NonZeroU32) -> Self {
        Self { cpu_hz }
    }

    /// Calibrate for a clock of `cpu_hz`, rejecting zero
    pub const fn from_hz(cpu_hz: u32) -> Option<Self> {
        match NonZeroU32::new(cpu_hz) {
            Some(hz) => Some(Self::new(hz)),
            None => None,
        }
    }

    /// Clock frequency this calibration assumes
    pub const fn cpu_hz(&self) -> u32 {
        self.cpu_hz.get()
    }

    /// Cycles in one millisecond, rounded up so a delay is never short
    pub const fn cycles_per_ms(&self) -> u32 {
        self.cpu_hz.get().div_ceil(MS_PER_S)
    }

    /// Cycles needed to wait at least `ms` milliseconds
    pub const fn cycles_for(&self, ms: u32) -> u64 {
        self.cycles_per_ms() as u64 * ms as u64
    }
}
