//! Read-only world data consumed by transitions.
//!
//! [`GameEnv`] bundles the tunables and the starting layout so every action
//! sees the same facts without reaching for globals.
mod scenario;

pub use scenario::{EnemyTemplate, Scenario, ScenarioError, UnitTemplate};

use crate::config::GameConfig;

/// Aggregates the read-only inputs required by the action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    scenario: &'a Scenario,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, scenario: &'a Scenario) -> Self {
        Self { config, scenario }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Starting layout every loop resets to.
    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }
}
