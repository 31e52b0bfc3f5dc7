//! Blocking delay abstraction

/// Busy-wait delay
///
/// The caller resumes no earlier than the requested duration has elapsed.
/// The delay occupies the processor; it is not a yield point.
pub trait BlockingDelay {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: BlockingDelay + ?Sized> BlockingDelay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
