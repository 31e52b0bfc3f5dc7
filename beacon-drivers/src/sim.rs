//! Virtual hardware for host-side runs
//!
//! A [`VirtualClock`] owns simulated time and a [`Waveform`] trace. The pin
//! and delay it hands out share both: the delay advances time, the pin
//! records every level it is driven to at the current time.
//!
//! ```ignore
//! let clock: VirtualClock<64> = VirtualClock::new();
//! let mut blink = BlinkDriver::new(clock.pin(), clock.delay());
//! blink.initialize();
//! blink.run_cycle();
//! assert_eq!(clock.now_ms(), 2350);
//! ```

use core::cell::{Cell, Ref, RefCell};

use beacon_core::state::{Event, Level};
use beacon_core::trace::Waveform;
use beacon_hal::{BlockingDelay, OutputPin};

/// Simulated time source and waveform recorder
pub struct VirtualClock<const N: usize> {
    now_ms: Cell<u64>,
    budget_ms: Option<u64>,
    trace: RefCell<Waveform<N>>,
}

impl<const N: usize> Default for VirtualClock<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> VirtualClock<N> {
    /// Clock at t=0 with no time limit
    pub const fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
            budget_ms: None,
            trace: RefCell::new(Waveform::new()),
        }
    }

    /// Clock that panics once a delay would run past `budget_ms`
    ///
    /// Used to bound runs of code that never returns.
    pub const fn with_budget(budget_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(0),
            budget_ms: Some(budget_ms),
            trace: RefCell::new(Waveform::new()),
        }
    }

    /// Current simulated time
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Recorded pin writes
    pub fn trace(&self) -> Ref<'_, Waveform<N>> {
        self.trace.borrow()
    }

    /// A pin that starts as an input with its latch LOW, like after reset
    pub fn pin(&self) -> VirtualPin<'_, N> {
        VirtualPin {
            clock: self,
            output: false,
            level: Level::Low,
            toggles: 0,
            toggles_as_input: 0,
        }
    }

    /// A delay advancing this clock
    pub fn delay(&self) -> VirtualDelay<'_, N> {
        VirtualDelay { clock: self }
    }

    fn advance(&self, ms: u32) {
        let next = self.now_ms.get() + u64::from(ms);
        if let Some(budget) = self.budget_ms {
            if next > budget {
                panic!("simulated time budget exhausted at {} ms", budget);
            }
        }
        self.now_ms.set(next);
    }

    fn record(&self, level: Level) {
        self.trace.borrow_mut().record(self.now_ms.get(), level);
    }
}

/// Simulated GPIO pin
///
/// Holds the latch level itself, standing in for the hardware register.
pub struct VirtualPin<'a, const N: usize> {
    clock: &'a VirtualClock<N>,
    output: bool,
    level: Level,
    toggles: u64,
    toggles_as_input: u64,
}

impl<const N: usize> VirtualPin<'_, N> {
    /// Current latch level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Toggles seen so far
    pub fn toggles(&self) -> u64 {
        self.toggles
    }

    /// Toggles issued while the direction was still input
    pub fn toggles_as_input(&self) -> u64 {
        self.toggles_as_input
    }

    fn apply(&mut self, event: Event) {
        self.level = self.level.transition(event);
        self.clock.record(self.level);
    }
}

impl<const N: usize> OutputPin for VirtualPin<'_, N> {
    fn set_output(&mut self) {
        self.output = true;
    }

    fn set_high(&mut self) {
        self.apply(Event::Drive(Level::High));
    }

    fn set_low(&mut self) {
        self.apply(Event::Drive(Level::Low));
    }

    fn toggle(&mut self) {
        if !self.output {
            self.toggles_as_input += 1;
        }
        self.toggles += 1;
        self.apply(Event::Toggle);
    }

    fn is_set_high(&mut self) -> bool {
        self.level.is_high()
    }

    fn is_output(&self) -> bool {
        self.output
    }
}

/// Simulated busy-wait
pub struct VirtualDelay<'a, const N: usize> {
    clock: &'a VirtualClock<N>,
}

impl<const N: usize> BlockingDelay for VirtualDelay<'_, N> {
    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(ms);
    }
}
