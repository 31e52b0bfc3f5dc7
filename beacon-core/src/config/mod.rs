//! Board configuration
//!
//! Board facts are fixed at build time: which GPIO drives the heartbeat LED
//! and what CPU clock the delay calibration assumes. The firmware build
//! script parses `board.toml` and validates it with these types.

pub mod board;
pub mod pins;
pub mod report;

pub use board::*;
pub use pins::*;
pub use report::char_prefix;
