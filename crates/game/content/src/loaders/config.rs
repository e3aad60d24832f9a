//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use tactics_core::{EvolutionConfig, GameConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Omitted keys keep their [`GameConfig::default`] values, so an empty file
/// is a valid configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig =
            toml::from_str(content).context("failed to parse config TOML")?;

        anyhow::ensure!(config.grid_size > 0, "grid_size must be positive");
        anyhow::ensure!(config.loop_duration > 0, "loop_duration must be positive");
        anyhow::ensure!(
            config.evolution.is_bounded(),
            "evolution bonuses must not exceed {}",
            EvolutionConfig::MAX_BONUS
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            loop_duration = 600

            [evolution]
            hp_per_level = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.loop_duration, 600);
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.evolution.hp_per_level, 25);
        assert_eq!(config.evolution.attack_bonus, 3);
    }

    #[test]
    fn oversized_evolution_bonus_is_rejected() {
        let err = ConfigLoader::parse(
            r#"
            [evolution]
            hp_per_level = 2147483647
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("evolution bonuses"));
        assert!(ConfigLoader::parse("[evolution]\nattack_bonus = 1000").is_ok());
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert!(ConfigLoader::parse("loop_duration = 0").is_err());
    }
}
