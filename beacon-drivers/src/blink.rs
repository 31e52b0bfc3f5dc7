//! Heartbeat blink driver
//!
//! Owns one output pin and one blocking delay and replays the
//! [`HEARTBEAT`] pattern on them forever. The pattern is fixed: there is no
//! way to hand the driver another table.
//!
//! The driver keeps no copy of the pin level; every step blindly toggles the
//! hardware latch, so interference from elsewhere only shifts the phase of
//! the visible pattern.

use beacon_core::pattern::{Pattern, Step, HEARTBEAT};
use beacon_hal::{BlockingDelay, OutputPin};

/// Blink driver
///
/// Production code calls [`initialize`](Self::initialize) once and then
/// [`run_forever`](Self::run_forever). Tests drive single cycles with
/// [`run_cycle`](Self::run_cycle) against a fake pin and delay.
pub struct BlinkDriver<P, D> {
    pin: P,
    delay: D,
    cycles: u64,
}

impl<P: OutputPin, D: BlockingDelay> BlinkDriver<P, D> {
    /// Create a driver running the heartbeat pattern
    pub fn new(pin: P, delay: D) -> Self {
        Self {
            pin,
            delay,
            cycles: 0,
        }
    }

    /// Configure the pin as output and drive it LOW
    ///
    /// Direction is set before the level, and is never changed afterwards.
    pub fn initialize(&mut self) {
        self.pin.set_output();
        self.pin.set_low();
    }

    /// Toggle the pin, then block for the step's duration
    pub fn step(&mut self, step: &Step) {
        self.pin.toggle();
        self.delay.delay_ms(step.delay_ms);
    }

    /// Execute one full pattern cycle and return
    pub fn run_cycle(&mut self) {
        for step in HEARTBEAT.steps() {
            self.step(step);
        }
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Run the pattern forever
    ///
    /// Never returns and never yields. Only a reset or power cycle stops it.
    pub fn run_forever(&mut self) -> ! {
        self.run_forever_with(|_| {})
    }

    /// Run the pattern forever, calling `on_cycle` after every full cycle
    ///
    /// The callback receives the number of completed cycles. It runs on the
    /// blink thread between the last delay of one cycle and the first toggle
    /// of the next, so it must be short: whatever it costs is added to the
    /// closing gap of every period. A defmt line over RTT is a few
    /// microseconds against a 1800 ms gap.
    pub fn run_forever_with<F: FnMut(u64)>(&mut self, mut on_cycle: F) -> ! {
        loop {
            self.run_cycle();
            on_cycle(self.cycles);
        }
    }

    /// Number of completed cycles
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Pattern being replayed
    pub fn pattern(&self) -> &'static Pattern {
        &HEARTBEAT
    }

    /// Access the pin
    pub fn pin(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Tear down the driver, returning the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use std::vec::Vec;

    use beacon_core::pattern::{PULSE_GAP_MS, PULSE_MEDIUM_MS, PULSE_SHORT_MS};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        SetOutput,
        SetLow,
        SetHigh,
        Toggle,
        Delay(u32),
    }

    /// Pin and delay mocks writing to one shared log
    struct MockPin<'a> {
        log: &'a RefCell<Vec<Op>>,
        output: bool,
        high: bool,
    }

    struct MockDelay<'a> {
        log: &'a RefCell<Vec<Op>>,
    }

    impl<'a> MockPin<'a> {
        fn new(log: &'a RefCell<Vec<Op>>) -> Self {
            Self {
                log,
                output: false,
                high: false,
            }
        }
    }

    impl OutputPin for MockPin<'_> {
        fn set_output(&mut self) {
            self.output = true;
            self.log.borrow_mut().push(Op::SetOutput);
        }

        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push(Op::SetHigh);
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push(Op::SetLow);
        }

        fn toggle(&mut self) {
            assert!(self.output, "toggled before direction was set");
            self.high = !self.high;
            self.log.borrow_mut().push(Op::Toggle);
        }

        fn is_set_high(&mut self) -> bool {
            self.high
        }

        fn is_output(&self) -> bool {
            self.output
        }
    }

    impl BlockingDelay for MockDelay<'_> {
        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Op::Delay(ms));
        }
    }

    fn driver(log: &RefCell<Vec<Op>>) -> BlinkDriver<MockPin<'_>, MockDelay<'_>> {
        BlinkDriver::new(MockPin::new(log), MockDelay { log })
    }

    #[test]
    fn test_initialize_sets_direction_then_low() {
        let log = RefCell::new(Vec::new());
        let mut blink = driver(&log);

        blink.initialize();

        assert_eq!(*log.borrow(), [Op::SetOutput, Op::SetLow]);
        assert!(blink.pin().is_output());
        assert!(blink.pin().is_set_low());
    }

    #[test]
    fn test_one_cycle_is_four_toggles_and_four_delays() {
        let log = RefCell::new(Vec::new());
        let mut blink = driver(&log);
        blink.initialize();
        log.borrow_mut().clear();

        blink.run_cycle();

        assert_eq!(
            *log.borrow(),
            [
                Op::Toggle,
                Op::Delay(PULSE_SHORT_MS),
                Op::Toggle,
                Op::Delay(PULSE_MEDIUM_MS),
                Op::Toggle,
                Op::Delay(PULSE_SHORT_MS),
                Op::Toggle,
                Op::Delay(PULSE_GAP_MS),
            ]
        );
        assert_eq!(blink.cycles(), 1);
    }

    #[test]
    fn test_literal_durations() {
        let log = RefCell::new(Vec::new());
        let mut blink = driver(&log);
        blink.initialize();
        blink.run_cycle();

        let delays: Vec<u32> = log
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect();
        assert_eq!(delays, [150, 250, 150, 1800]);
        assert_eq!(delays.iter().sum::<u32>(), 2350);
    }

    #[test]
    fn test_cycle_returns_to_starting_level() {
        let log = RefCell::new(Vec::new());
        let mut blink = driver(&log);
        blink.initialize();

        for _ in 0..5 {
            blink.run_cycle();
            assert!(blink.pin().is_set_low());
        }
        assert_eq!(blink.cycles(), 5);
    }

    #[test]
    fn test_step_alternates_level() {
        let log = RefCell::new(Vec::new());
        let mut blink = driver(&log);
        blink.initialize();

        let mut previous = blink.pin().is_set_high();
        for step in HEARTBEAT.steps().iter().cycle().take(40) {
            blink.step(step);
            let now = blink.pin().is_set_high();
            assert_ne!(previous, now);
            previous = now;
        }
    }

    #[test]
    fn test_every_cycle_blocks_for_a_full_period() {
        let log = RefCell::new(Vec::new());
        let mut blink = driver(&log);
        blink.initialize();

        for cycle in 1..=3u64 {
            log.borrow_mut().clear();
            blink.run_cycle();

            let ops = log.borrow();
            let toggles = ops.iter().filter(|op| **op == Op::Toggle).count();
            let waited: u32 = ops
                .iter()
                .filter_map(|op| match op {
                    Op::Delay(ms) => Some(*ms),
                    _ => None,
                })
                .sum();
            assert_eq!(toggles, 4);
            assert_eq!(waited, blink.pattern().period_ms());
            assert!(waited > 0);
            assert!(blink.pin().is_set_low());
            assert_eq!(blink.cycles(), cycle);
        }
        assert_eq!(*blink.pattern(), HEARTBEAT);
    }

    #[test]
    fn test_release_returns_parts() {
        let log = RefCell::new(Vec::new());
        let mut blink = driver(&log);
        blink.initialize();
        blink.run_cycle();

        let (mut pin, _delay) = blink.release();
        assert!(pin.is_output());
        assert!(pin.is_set_low());
    }
}
