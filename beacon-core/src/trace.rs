//! Waveform trace
//!
//! Records every level the pin is driven to, with a timestamp, in a fixed
//! capacity buffer. Used to check the generated waveform against the pattern
//! without hardware.

use heapless::Vec;

use crate::state::Level;

/// A pin write observed at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edge {
    /// Time of the write, in milliseconds since start
    pub at_ms: u64,
    /// Level the pin was driven to
    pub level: Level,
}

impl Edge {
    /// Create an edge at `at_ms`
    pub const fn new(at_ms: u64, level: Level) -> Self {
        Self { at_ms, level }
    }
}

/// Bounded record of pin writes
///
/// Once full, further writes are dropped and the trace is marked truncated.
/// The earliest writes are the ones kept.
#[derive(Debug, Clone, Default)]
pub struct Waveform<const N: usize> {
    edges: Vec<Edge, N>,
    truncated: bool,
}

impl<const N: usize> Waveform<N> {
    /// Create an empty trace
    pub const fn new() -> Self {
        Self {
            edges: Vec::new(),
            truncated: false,
        }
    }

    /// Record a write
    pub fn record(&mut self, at_ms: u64, level: Level) {
        if self.edges.push(Edge::new(at_ms, level)).is_err() {
            self.truncated = true;
        }
    }

    /// All recorded writes, oldest first
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// True if writes were dropped because the buffer was full
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Level of the pin at `t_ms`
    ///
    /// Writes at exactly `t_ms` are included, the last one winning. Returns
    /// `None` before the first write.
    pub fn level_at(&self, t_ms: u64) -> Option<Level> {
        self.edges
            .iter()
            .take_while(|e| e.at_ms <= t_ms)
            .last()
            .map(|e| e.level)
    }

    /// Number of writes that changed the level
    pub fn transitions(&self) -> usize {
        self.edges
            .windows(2)
            .filter(|w| w[0].level != w[1].level)
            .count()
    }
}
