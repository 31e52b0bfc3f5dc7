//! Board configuration and validation

use core::num::NonZeroU32;

use heapless::String;

use super::pins::{parse_pin_string, PinConfig};

/// Maximum board name length
pub const MAX_NAME_LEN: usize = 16;

/// Name used when `board.toml` does not set one
pub const DEFAULT_BOARD_NAME: &str = "generic";

/// Errors in board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin string is malformed or out of range
    InvalidPin,
    /// Pin is marked active-low
    InvertedPin,
    /// CPU frequency is zero, negative, or does not fit in 32 bits
    InvalidFrequency,
    /// Board name longer than [`MAX_NAME_LEN`]
    NameTooLong,
    /// Required key missing
    MissingKey(&'static str),
}

/// Validated board facts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Board label, informational only
    pub name: String<MAX_NAME_LEN>,
    /// Pin driving the heartbeat LED
    pub led: PinConfig,
    /// CPU clock frequency assumed by the delay calibration
    pub cpu_hz: NonZeroU32,
}

impl BoardConfig {
    /// Validate raw values as read from `board.toml`
    ///
    /// `cpu_hz` is taken as `i64` because that is how TOML integers arrive.
    pub fn from_raw(
        name: Option<&str>,
        led_pin: Option<&str>,
        cpu_hz: Option<i64>,
        gpio_count: u8,
    ) -> Result<Self, ConfigError> {
        let name = name.unwrap_or(DEFAULT_BOARD_NAME);
        let name = String::try_from(name).map_err(|_| ConfigError::NameTooLong)?;

        let led_pin = led_pin.ok_or(ConfigError::MissingKey("led.pin"))?;
        let led = parse_pin_string(led_pin, gpio_count)?;

        let cpu_hz = cpu_hz.ok_or(ConfigError::MissingKey("clock.cpu_hz"))?;
        let cpu_hz = validate_cpu_hz(cpu_hz)?;

        Ok(Self { name, led, cpu_hz })
    }
}

/// Check a CPU frequency read from config
pub fn validate_cpu_hz(hz: i64) -> Result<NonZeroU32, ConfigError> {
    u32::try_from(hz)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ConfigError::InvalidFrequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_board() {
        let board =
            BoardConfig::from_raw(Some("pico"), Some("gpio25"), Some(125_000_000), 30).unwrap();

        assert_eq!(board.name.as_str(), "pico");
        assert_eq!(board.led, PinConfig::new(25));
        assert_eq!(board.cpu_hz.get(), 125_000_000);
    }

    #[test]
    fn test_default_name() {
        let board = BoardConfig::from_raw(None, Some("gpio4"), Some(1_200_000), 8).unwrap();
        assert_eq!(board.name.as_str(), DEFAULT_BOARD_NAME);
    }

    #[test]
    fn test_missing_keys() {
        assert_eq!(
            BoardConfig::from_raw(None, None, Some(1), 30),
            Err(ConfigError::MissingKey("led.pin"))
        );
        assert_eq!(
            BoardConfig::from_raw(None, Some("gpio1"), None, 30),
            Err(ConfigError::MissingKey("clock.cpu_hz"))
        );
    }

    #[test]
    fn test_name_too_long() {
        assert_eq!(
            BoardConfig::from_raw(Some("a-very-long-board-name"), Some("gpio1"), Some(1), 30),
            Err(ConfigError::NameTooLong)
        );
    }

    #[test]
    fn test_validate_cpu_hz() {
        assert_eq!(validate_cpu_hz(16_000_000).map(NonZeroU32::get), Ok(16_000_000));
        assert_eq!(validate_cpu_hz(0), Err(ConfigError::InvalidFrequency));
        assert_eq!(validate_cpu_hz(-1), Err(ConfigError::InvalidFrequency));
        assert_eq!(
            validate_cpu_hz(u32::MAX as i64 + 1),
            Err(ConfigError::InvalidFrequency)
        );
    }
}
