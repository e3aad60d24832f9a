//! Loop-boundary enemy evolution.
//!
//! An enemy evolves when the player's cumulative action history mentions its
//! name in more than `evolution_threshold` entries. Growth compounds with the
//! new level: `max_hp += hp_per_level * new_level`.
//!
//! Mentions are cumulative, so an enemy that crossed the threshold keeps
//! evolving every loop. Stats saturate at `u32::MAX` rather than wrap.

use crate::config::{EvolutionConfig, GameConfig};
use crate::state::{ActionHistory, EnemyState, PLAYER_TACTICS, UnitId};

/// One enemy's evolution at a loop boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionRecord {
    pub enemy: UnitId,
    pub name: String,
    /// History entries that mentioned the enemy.
    pub mentions: usize,
    pub new_level: u32,
}

/// Returns true when `mentions` exceeds the configured threshold.
pub fn should_evolve(mentions: usize, config: &GameConfig) -> bool {
    mentions > config.evolution_threshold
}

/// Applies one level of growth. HP is refilled to the new maximum.
pub fn evolve(enemy: &EnemyState, growth: &EvolutionConfig) -> EnemyState {
    let mut evolved = enemy.clone();
    evolved.evolution_level = enemy.evolution_level.saturating_add(1);

    let max_hp = enemy
        .unit
        .max_hp
        .saturating_add(growth.hp_per_level.saturating_mul(evolved.evolution_level));
    evolved.unit.max_hp = max_hp;
    evolved.unit.hp = max_hp;
    evolved.unit.attack = enemy.unit.attack.saturating_add(growth.attack_bonus);
    evolved.unit.defense = enemy.unit.defense.saturating_add(growth.defense_bonus);
    evolved.adapted_to.push(PLAYER_TACTICS.to_owned());
    evolved
}

/// Evolves the lineage roster at the end of a loop.
///
/// Only enemies still alive in `live` are evaluated; defeated ones keep their
/// lineage stats. Order follows `lineage`.
pub fn evolve_roster(
    lineage: &[EnemyState],
    live: &[EnemyState],
    history: &ActionHistory,
    config: &GameConfig,
) -> (Vec<EnemyState>, Vec<EvolutionRecord>) {
    let mut records = Vec::new();

    let roster = lineage
        .iter()
        .map(|enemy| {
            if !live.iter().any(|alive| alive.id() == enemy.id()) {
                return enemy.clone();
            }

            let mentions = history.mentions(enemy.name());
            if !should_evolve(mentions, config) {
                return enemy.clone();
            }

            let evolved = evolve(enemy, &config.evolution);
            records.push(EvolutionRecord {
                enemy: evolved.id(),
                name: evolved.name().to_owned(),
                mentions,
                new_level: evolved.evolution_level,
            });
            evolved
        })
        .collect();

    (roster, records)
}
