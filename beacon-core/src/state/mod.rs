//! Pin level state machine
//!
//! Two states, no terminal state. Every toggle moves to the other level.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Level;
