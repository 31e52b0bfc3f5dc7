//! Pin configuration types

use super::board::ConfigError;

/// Pin string prefix, e.g. `gpio25`
const PIN_PREFIX: &str = "gpio";

/// Heartbeat LED pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self { pin }
    }
}

/// Parse a pin string from config
///
/// Accepts `gpioN` with `N < gpio_count`. Active-low (`!gpioN`) and pull-up
/// (`^gpioN`) markers are rejected: the heartbeat drives a plain output and
/// its initial level must be electrical LOW.
pub fn parse_pin_string(s: &str, gpio_count: u8) -> Result<PinConfig, ConfigError> {
    let s = s.trim();

    if s.starts_with('!') {
        return Err(ConfigError::InvertedPin);
    }

    let num = s.strip_prefix(PIN_PREFIX).ok_or(ConfigError::InvalidPin)?;
    if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidPin);
    }

    let pin: u8 = num.parse().map_err(|_| ConfigError::InvalidPin)?;
    if pin >= gpio_count {
        return Err(ConfigError::InvalidPin);
    }

    Ok(PinConfig::new(pin))
}
