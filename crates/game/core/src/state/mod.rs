//! Authoritative game state representation.
//!
//! This module owns the data structures that describe units, knowledge, the
//! per-loop action log, and loop/turn counters. Hosts clone or query this
//! state but mutate it exclusively through the engine.
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    ActionHistory, EnemyState, Knowledge, KnowledgeArchive, KnowledgeCategory, KnowledgeId,
    PLAYER_TACTICS, ParseUnitIdError, Position, UnitId, UnitKind, UnitState,
};

use crate::clock::CountdownView;
use crate::config::GameConfig;
use crate::env::Scenario;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// 1-based loop counter; advances once per loop completion.
    pub current_loop: u32,
    /// Seconds left before the current loop expires.
    pub time_remaining: u32,
    /// 1-based turn counter within the current loop.
    pub turn_number: u32,
    pub player: UnitState,
    /// Live enemy roster. Defeated enemies are removed for the rest of the loop.
    pub enemies: Vec<EnemyState>,
    /// Every enemy with the stats it started this loop with, in scenario order.
    ///
    /// Loop completion evolves this roster and redeploys all of it, which is
    /// how defeated enemies return.
    pub lineage: Vec<EnemyState>,
    pub knowledge: KnowledgeArchive,
    pub action_history: ActionHistory,
    pub selected_unit: Option<UnitId>,
}

impl GameState {
    /// Lays out a fresh loop-1 game from the scenario.
    pub fn from_scenario(scenario: &Scenario, config: &GameConfig) -> Self {
        let lineage: Vec<EnemyState> = scenario
            .enemies
            .iter()
            .map(|template| template.to_enemy())
            .collect();

        Self {
            current_loop: 1,
            time_remaining: config.loop_duration,
            turn_number: 1,
            player: scenario.player.to_unit(UnitKind::Player),
            enemies: lineage.clone(),
            lineage,
            knowledge: KnowledgeArchive::new(),
            action_history: ActionHistory::new(),
            selected_unit: None,
        }
    }

    pub fn enemy(&self, id: UnitId) -> Option<&EnemyState> {
        self.enemies.iter().find(|enemy| enemy.id() == id)
    }

    /// Looks up the player or a live enemy.
    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        if id == self.player.id {
            Some(&self.player)
        } else {
            self.enemy(id).map(|enemy| &enemy.unit)
        }
    }

    /// Iterates the player followed by live enemies in roster order.
    pub fn units(&self) -> impl Iterator<Item = &UnitState> {
        std::iter::once(&self.player).chain(self.enemies.iter().map(|enemy| &enemy.unit))
    }

    /// First unit standing on `position` (player first, then roster order).
    ///
    /// Units may overlap; board collaborators use this to map a cell click to
    /// a selection.
    pub fn unit_at(&self, position: Position) -> Option<UnitId> {
        self.units()
            .find(|unit| unit.position == position)
            .map(|unit| unit.id)
    }

    pub fn selected(&self) -> Option<&UnitState> {
        self.selected_unit.and_then(|id| self.unit(id))
    }

    pub fn countdown(&self, config: &GameConfig) -> CountdownView {
        CountdownView::new(self.time_remaining, config)
    }

    /// Checks the invariants every transition must preserve.
    pub fn validate(&self) -> Result<(), StateError> {
        for unit in self.units() {
            if unit.hp > unit.max_hp {
                return Err(StateError::HpOutOfRange {
                    unit: unit.id,
                    hp: unit.hp,
                    max_hp: unit.max_hp,
                });
            }
        }

        for enemy in &self.enemies {
            if !enemy.unit.is_alive() {
                return Err(StateError::DefeatedEnemyInRoster { unit: enemy.id() });
            }
            if !self.lineage.iter().any(|known| known.id() == enemy.id()) {
                return Err(StateError::UnknownEnemy { unit: enemy.id() });
            }
        }

        let logged_loops = self.action_history.loop_count();
        if usize::try_from(self.current_loop).ok() != Some(logged_loops) {
            return Err(StateError::HistoryDesync {
                current_loop: self.current_loop,
                logged_loops,
            });
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_scenario(&Scenario::default(), &GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_matches_default_layout() {
        let state = GameState::default();

        assert_eq!(state.current_loop, 1);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.time_remaining, 1800);
        assert_eq!(state.player.position, Position::new(1, 7));
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.enemies, state.lineage);
        assert_eq!(state.action_history.loop_count(), 1);
        assert!(state.knowledge.is_empty());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn unit_at_prefers_player_then_roster_order() {
        let mut state = GameState::default();
        assert_eq!(state.unit_at(Position::new(6, 1)), Some(UnitId(1)));
        assert_eq!(state.unit_at(Position::new(0, 0)), None);

        state.player.position = Position::new(3, 3);
        assert_eq!(state.unit_at(Position::new(3, 3)), Some(UnitId::PLAYER));
    }

    #[test]
    fn validate_flags_dead_enemies_left_in_roster() {
        let mut state = GameState::default();
        state.enemies[0].unit.hp = 0;

        assert_eq!(
            state.validate(),
            Err(StateError::DefeatedEnemyInRoster { unit: UnitId(1) })
        );
    }
}
