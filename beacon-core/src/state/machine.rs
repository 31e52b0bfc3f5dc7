//! Pin level definition
//!
//! The level is a function of the last forced write and the number of
//! toggles since.

use super::events::Event;

/// Output pin level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0, the level after initialization
    #[default]
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// The opposite level
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// Level after `n` toggles from this one
    pub const fn after_toggles(self, n: u64) -> Self {
        if n % 2 == 0 {
            self
        } else {
            self.toggled()
        }
    }

    /// Process an event and return the next level
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::Drive(level) => level,
            Event::Toggle => self.toggled(),
        }
    }
}
