//! Scan cadence.

use serde::{Deserialize, Serialize};

use super::types::WorldTime;

/// Ticks between structural scans.
pub const SCAN_INTERVAL_TICKS: u64 = 80;

/// Sampling policy for when a scan fires: exactly the time values that are
/// multiples of the interval. If the host skips time values a firing is
/// missed and never caught up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickScheduler {
    interval: u64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            interval: SCAN_INTERVAL_TICKS,
        }
    }

    /// Override the cadence. A zero interval would make `should_fire`
    /// divide by zero, so it is raised to one.
    pub fn with_interval(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    pub fn should_fire(&self, time: WorldTime) -> bool {
        time % self.interval == 0
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
