//! Countdown presentation values derived from `time_remaining`.

use std::fmt;

use crate::config::GameConfig;

/// Minutes/seconds split of the loop countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountdownView {
    pub remaining: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// True once fewer than `critical_time` seconds remain.
    pub critical: bool,
}

impl CountdownView {
    pub fn new(remaining: u32, config: &GameConfig) -> Self {
        Self {
            remaining,
            minutes: remaining / 60,
            seconds: remaining % 60,
            critical: remaining < config.critical_time,
        }
    }
}

impl fmt::Display for CountdownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
