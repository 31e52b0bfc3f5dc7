//! Heartbeat pattern definition
//!
//! A pattern is a fixed table of steps. Each step toggles the pin and then
//! busy-waits for the step's duration. The table is replayed forever.
//!
//! The heartbeat does not force the pin to a known level mid-cycle. It only
//! toggles, so the visible on/off widths depend on the starting level. With
//! the pin starting LOW the signature is:
//!
//! ```text
//!  t(ms)  0    150       400  550                          2350
//!         ┌────┐         ┌────┐
//!  HIGH   │    │         │    │
//!  LOW  ──┘    └─────────┘    └────────────────────────────┘
//! ```

/// Short pulse (first and third step)
pub const PULSE_SHORT_MS: u32 = 150;

/// Medium pulse between the two short ones
pub const PULSE_MEDIUM_MS: u32 = 250;

/// Long gap closing the cycle
pub const PULSE_GAP_MS: u32 = 1800;

/// One toggle followed by one blocking wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Wait after the toggle, in milliseconds
    pub delay_ms: u32,
}

impl Step {
    /// Create a step with the given post-toggle delay
    pub const fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

/// A cyclic toggle/delay sequence
///
/// Only built in this module, so every pattern in the crate has passed
/// [`Pattern::new`]'s checks at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern {
    steps: &'static [Step],
}

impl Pattern {
    /// Wrap a step table
    ///
    /// Panics (a compile error in const context) if the table is empty, has
    /// an odd number of steps, or its period is zero or overflows `u32`.
    const fn new(steps: &'static [Step]) -> Self {
        assert!(!steps.is_empty(), "pattern has no steps");
        assert!(
            steps.len() % 2 == 0,
            "pattern must toggle an even number of times per cycle"
        );

        let mut total: u32 = 0;
        let mut i = 0;
        while i < steps.len() {
            total = match total.checked_add(steps[i].delay_ms) {
                Some(total) => total,
                None => panic!("pattern period overflows u32"),
            };
            i += 1;
        }
        assert!(total > 0, "pattern period is zero");

        Self { steps }
    }

    /// Steps of one cycle, in execution order
    pub const fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Number of toggles per cycle
    pub const fn toggles_per_cycle(&self) -> usize {
        self.steps.len()
    }

    /// Length of one full cycle in milliseconds
    pub const fn period_ms(&self) -> u32 {
        let mut total = 0;
        let mut i = 0;
        while i < self.steps.len() {
            total += self.steps[i].delay_ms;
            i += 1;
        }
        total
    }
}

const HEARTBEAT_STEPS: [Step; 4] = [
    Step::new(PULSE_SHORT_MS),
    Step::new(PULSE_MEDIUM_MS),
    Step::new(PULSE_SHORT_MS),
    Step::new(PULSE_GAP_MS),
];

/// The heartbeat signature: 150, 250, 150, 1800 ms
pub const HEARTBEAT: Pattern = Pattern::new(&HEARTBEAT_STEPS);

/// Heartbeat period in milliseconds
pub const HEARTBEAT_PERIOD_MS: u32 = HEARTBEAT.period_ms();

const _: () = assert!(HEARTBEAT_PERIOD_MS == 2350);
