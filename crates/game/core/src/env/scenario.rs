//! Starting layout for every loop.

use std::collections::HashSet;

use crate::config::GameConfig;
use crate::state::{EnemyState, Position, UnitId, UnitKind, UnitState};

/// Stats and placement a unit starts each loop with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTemplate {
    pub id: UnitId,
    pub name: String,
    pub position: Position,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub range: u32,
}

impl UnitTemplate {
    /// Materialises the template at full health, not yet moved.
    pub fn to_unit(&self, kind: UnitKind) -> UnitState {
        UnitState {
            id: self.id,
            name: self.name.clone(),
            kind,
            position: self.position,
            hp: self.max_hp,
            max_hp: self.max_hp,
            attack: self.attack,
            defense: self.defense,
            range: self.range,
            moved: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub unit: UnitTemplate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior_pattern: Vec<String>,
}

impl EnemyTemplate {
    /// A level-0 enemy with no adaptations.
    pub fn to_enemy(&self) -> EnemyState {
        EnemyState {
            unit: self.unit.to_unit(UnitKind::Enemy),
            evolution_level: 0,
            behavior_pattern: self.behavior_pattern.clone(),
            adapted_to: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("player template must use the reserved id 'player' (got {0})")]
    PlayerId(UnitId),

    #[error("enemy template uses the reserved player id")]
    EnemyUsesPlayerId,

    #[error("duplicate unit id {0}")]
    DuplicateId(UnitId),

    #[error("unit {id} starts outside the {grid_size}x{grid_size} board at {position}")]
    OutOfBounds {
        id: UnitId,
        position: Position,
        grid_size: u32,
    },

    #[error("unit {0} has zero max hp")]
    ZeroHp(UnitId),
}

/// The player plus the ordered enemy roster a loop starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub player: UnitTemplate,
    pub enemies: Vec<EnemyTemplate>,
}

impl Scenario {
    /// Checks ids, placement, and health against the board configuration.
    pub fn validate(&self, config: &GameConfig) -> Result<(), ScenarioError> {
        if !self.player.id.is_player() {
            return Err(ScenarioError::PlayerId(self.player.id));
        }

        let mut seen = HashSet::new();
        let templates =
            std::iter::once(&self.player).chain(self.enemies.iter().map(|enemy| &enemy.unit));
        for (index, template) in templates.enumerate() {
            if index > 0 && template.id.is_player() {
                return Err(ScenarioError::EnemyUsesPlayerId);
            }
            if !seen.insert(template.id) {
                return Err(ScenarioError::DuplicateId(template.id));
            }
            if !config.contains(template.position) {
                return Err(ScenarioError::OutOfBounds {
                    id: template.id,
                    position: template.position,
                    grid_size: config.grid_size,
                });
            }
            if template.max_hp == 0 {
                return Err(ScenarioError::ZeroHp(template.id));
            }
        }

        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            player: UnitTemplate {
                id: UnitId::PLAYER,
                name: "Hero".into(),
                position: Position::new(1, 7),
                max_hp: 100,
                attack: 15,
                defense: 10,
                range: 1,
            },
            enemies: vec![
                EnemyTemplate {
                    unit: UnitTemplate {
                        id: UnitId(1),
                        name: "Shadow".into(),
                        position: Position::new(6, 1),
                        max_hp: 60,
                        attack: 12,
                        defense: 5,
                        range: 1,
                    },
                    behavior_pattern: vec!["aggressive".into()],
                },
                EnemyTemplate {
                    unit: UnitTemplate {
                        id: UnitId(2),
                        name: "Sentinel".into(),
                        position: Position::new(3, 3),
                        max_hp: 80,
                        attack: 10,
                        defense: 8,
                        range: 2,
                    },
                    behavior_pattern: vec!["defensive".into()],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid() {
        assert_eq!(Scenario::default().validate(&GameConfig::default()), Ok(()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut scenario = Scenario::default();
        scenario.enemies[1].unit.id = UnitId(1);

        assert_eq!(
            scenario.validate(&GameConfig::default()),
            Err(ScenarioError::DuplicateId(UnitId(1)))
        );
    }

    #[test]
    fn rejects_units_placed_off_board() {
        let mut scenario = Scenario::default();
        scenario.enemies[0].unit.position = Position::new(8, 1);

        assert!(matches!(
            scenario.validate(&GameConfig::default()),
            Err(ScenarioError::OutOfBounds { id: UnitId(1), .. })
        ));
    }
}
