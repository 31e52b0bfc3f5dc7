//! Events that drive the pin level state machine

use super::machine::Level;

/// Pin writes observed by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Level forced to a known value (`set_low`/`set_high`)
    Drive(Level),
    /// Level inverted
    Toggle,
}
