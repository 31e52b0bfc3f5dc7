//! Cycle-counted busy-wait
//!
//! Burns CPU cycles in a tight loop, one millisecond at a time, using the
//! calibration fixed at build time. No timer peripheral and no interrupt is
//! involved, so the delay is exact only as long as the clock matches the
//! build-time assumption.

use beacon_core::timing::DelayCalibration;
use beacon_hal::BlockingDelay;

/// Busy-wait delay counting CPU cycles
pub struct CycleDelay {
    cycles_per_ms: u32,
}

impl CycleDelay {
    pub const fn new(calibration: DelayCalibration) -> Self {
        Self {
            cycles_per_ms: calibration.cycles_per_ms(),
        }
    }
}

impl BlockingDelay for CycleDelay {
    fn delay_ms(&mut self, ms: u32) {
        // Whole-ms chunks keep the cycle count within u32 at any clock
        for _ in 0..ms {
            cortex_m::asm::delay(self.cycles_per_ms);
        }
    }
}
