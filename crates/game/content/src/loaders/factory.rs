//! Content factory for loading all game data from a directory.

use std::path::{Path, PathBuf};

use tactics_core::{GameConfig, Scenario};

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};

/// Everything the runtime needs to start a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameContent {
    pub config: GameConfig,
    pub scenario: Scenario,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── scenario.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the starting layout from `scenario.ron`, validated against `config`.
    pub fn load_scenario(&self, config: &GameConfig) -> LoadResult<Scenario> {
        ScenarioLoader::load(&self.data_dir.join("scenario.ron"), config)
    }

    /// Loads config then scenario.
    pub fn load(&self) -> LoadResult<GameContent> {
        let config = self.load_config()?;
        let scenario = self.load_scenario(&config)?;
        Ok(GameContent { config, scenario })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
