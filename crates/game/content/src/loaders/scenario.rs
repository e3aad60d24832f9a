//! Scenario loader.

use std::path::Path;

use anyhow::Context;
use tactics_core::{GameConfig, Scenario};

use crate::loaders::{LoadResult, read_file};

/// Loader for the starting layout from RON files.
///
/// # RON Format
///
/// ```ron
/// (
///     player: (id: "player", name: "Hero", position: (x: 1, y: 7),
///              max_hp: 100, attack: 15, defense: 10, range: 1),
///     enemies: [
///         (
///             unit: (id: "enemy1", name: "Shadow", position: (x: 6, y: 1),
///                    max_hp: 60, attack: 12, defense: 5, range: 1),
///             behavior_pattern: ["aggressive"],
///         ),
///     ],
/// )
/// ```
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Loads a scenario and validates it against `config`.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .with_context(|| format!("invalid scenario in {}", path.display()))
    }

    pub fn parse(content: &str, config: &GameConfig) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content).context("failed to parse scenario RON")?;
        scenario.validate(config)?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: &str = r#"(id: "player", name: "Hero", position: (x: 1, y: 7),
        max_hp: 100, attack: 15, defense: 10, range: 1)"#;

    #[test]
    fn parses_enemies_in_file_order() {
        let content = format!(
            r#"(
                player: {HERO},
                enemies: [
                    (unit: (id: "enemy2", name: "Sentinel", position: (x: 3, y: 3),
                        max_hp: 80, attack: 10, defense: 8, range: 2)),
                    (unit: (id: "enemy1", name: "Shadow", position: (x: 6, y: 1),
                        max_hp: 60, attack: 12, defense: 5, range: 1),
                     behavior_pattern: ["aggressive"]),
                ],
            )"#
        );

        let scenario = ScenarioLoader::parse(&content, &GameConfig::default()).unwrap();

        assert_eq!(scenario.enemies[0].unit.name, "Sentinel");
        assert!(scenario.enemies[0].behavior_pattern.is_empty());
        assert_eq!(scenario.enemies[1].behavior_pattern, ["aggressive"]);
    }

    #[test]
    fn rejects_units_off_the_board() {
        let content = format!(
            r#"(
                player: {HERO},
                enemies: [
                    (unit: (id: "enemy1", name: "Shadow", position: (x: 9, y: 1),
                        max_hp: 60, attack: 12, defense: 5, range: 1)),
                ],
            )"#
        );

        assert!(ScenarioLoader::parse(&content, &GameConfig::default()).is_err());
    }

    #[test]
    fn rejects_malformed_unit_ids() {
        let content = r#"(
            player: (id: "hero", name: "Hero", position: (x: 1, y: 7),
                max_hp: 100, attack: 15, defense: 10, range: 1),
            enemies: [],
        )"#;

        assert!(ScenarioLoader::parse(content, &GameConfig::default()).is_err());
    }
}
