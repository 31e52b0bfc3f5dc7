//! Build script for beacon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and turns it into constants (`$OUT_DIR/board.rs`)

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use beacon_core::config::{char_prefix, BoardConfig, ConfigError, MAX_NAME_LEN};

/// Number of user GPIOs on RP2040
const GPIO_COUNT: u8 = 30;

fn main() {
    setup_linker();
    let board = validate_config();
    generate_board_consts(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml at compile time
fn validate_config() -> BoardConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        fail(
            "board.toml not found!",
            &[
                "The firmware requires a board.toml configuration file.",
                "Please create one in the beacon-firmware directory.",
            ],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &[format!("Error: {}", e).as_str()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let msg = e.to_string();
            let lines: Vec<&str> = msg.lines().collect();
            fail("Invalid TOML syntax in board.toml", &lines)
        }
    };

    let name = config
        .get("board")
        .and_then(|b| b.get("name"))
        .and_then(|n| n.as_str());
    let led_pin = config
        .get("led")
        .and_then(|l| l.get("pin"))
        .and_then(|p| p.as_str());
    let cpu_hz = config
        .get("clock")
        .and_then(|c| c.get("cpu_hz"))
        .and_then(|h| h.as_integer());

    let board = match BoardConfig::from_raw(name, led_pin, cpu_hz, GPIO_COUNT) {
        Ok(board) => board,
        Err(e) => fail("Invalid board configuration", &[describe(e).as_str()]),
    };

    println!(
        "cargo:warning=board.toml validated: {} (led gpio{}, {} Hz)",
        board.name, board.led.pin, board.cpu_hz
    );
    board
}

/// Human-readable explanation of a config error
fn describe(err: ConfigError) -> String {
    match err {
        ConfigError::InvalidPin => {
            format!("[led] pin must be 'gpioN' with N in 0-{}", GPIO_COUNT - 1)
        }
        ConfigError::InvertedPin => {
            "[led] pin cannot be active-low ('!'), the heartbeat starts LOW".to_string()
        }
        ConfigError::InvalidFrequency => {
            "[clock] cpu_hz must be a positive integer below 2^32".to_string()
        }
        ConfigError::NameTooLong => {
            format!("[board] name is longer than {} characters", MAX_NAME_LEN)
        }
        ConfigError::MissingKey(key) => format!("missing required key '{}'", key),
    }
}

/// Write `$OUT_DIR/board.rs`, included by main.rs
fn generate_board_consts(board: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("board.rs")).unwrap();

    writeln!(f, "// Generated by build.rs from board.toml").unwrap();
    writeln!(f, "pub const BOARD_NAME: &str = {:?};", board.name.as_str()).unwrap();
    writeln!(f, "pub const LED_PIN: u8 = {};", board.led.pin).unwrap();
    writeln!(f, "pub const CPU_HZ: u32 = {};", board.cpu_hz).unwrap();
    writeln!(f, "macro_rules! led_pin {{").unwrap();
    writeln!(f, "    ($p:expr) => {{ $p.PIN_{} }};", board.led.pin).unwrap();
    writeln!(f, "}}").unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if char_prefix(line, 64).len() < line.len() {
                format!("{}...", char_prefix(line, 61))
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
