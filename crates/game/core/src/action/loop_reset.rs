use crate::action::{ActionTransition, LoopSummary};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::evolution::evolve_roster;
use crate::state::{GameState, KnowledgeCategory, UnitKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopError {
    #[error("loop counter overflowed at loop {current_loop}")]
    CounterOverflow { current_loop: u32 },

    #[error("loop {current_loop} has {logged_loops} history logs")]
    HistoryDesync {
        current_loop: u32,
        logged_loops: usize,
    },
}

impl GameError for LoopError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CounterOverflow { .. } => "LOOP_COUNTER_OVERFLOW",
            Self::HistoryDesync { .. } => "LOOP_HISTORY_DESYNC",
        }
    }
}

/// Knowledge text recorded when a loop ends.
pub fn format_loop_completed(completed_loop: u32) -> String {
    format!("Loop {completed_loop} completed. Enemies have adapted to your strategies.")
}

/// Ends the current loop: evolves the surviving enemies, archives what was
/// learned, and resets the board to the scenario layout.
///
/// Every lineage enemy is redeployed, including those defeated this loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompleteLoopAction;

impl ActionTransition for CompleteLoopAction {
    type Error = LoopError;
    type Result = LoopSummary;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.current_loop == u32::MAX {
            return Err(LoopError::CounterOverflow {
                current_loop: state.current_loop,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<LoopSummary, Self::Error> {
        let config = env.config();
        let completed_loop = state.current_loop;
        let next_loop = completed_loop
            .checked_add(1)
            .ok_or(LoopError::CounterOverflow {
                current_loop: completed_loop,
            })?;

        let (lineage, evolved) =
            evolve_roster(&state.lineage, &state.enemies, &state.action_history, config);

        let knowledge = state.knowledge.record(
            format_loop_completed(completed_loop),
            completed_loop,
            KnowledgeCategory::EnemyPattern,
        );

        state.player = env.scenario().player.to_unit(UnitKind::Player);
        state.enemies = lineage.iter().map(|enemy| enemy.redeployed()).collect();
        state.lineage = lineage;
        state.current_loop = next_loop;
        state.time_remaining = config.loop_duration;
        state.turn_number = 1;
        state.selected_unit = None;
        state.action_history.begin_loop();

        Ok(LoopSummary {
            completed_loop,
            next_loop,
            evolved,
            knowledge,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let logged_loops = state.action_history.loop_count();
        if usize::try_from(state.current_loop).ok() != Some(logged_loops) {
            return Err(LoopError::HistoryDesync {
                current_loop: state.current_loop,
                logged_loops,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::Scenario;
    use crate::state::{Position, UnitId};

    #[test]
    fn resets_board_and_advances_the_loop() {
        let config = GameConfig::default();
        let scenario = Scenario::default();
        let env = GameEnv::new(&config, &scenario);
        let mut state = GameState::default();
        state.player.position = Position::new(5, 2);
        state.player.moved = true;
        state.time_remaining = 12;
        state.turn_number = 7;
        state.enemies.remove(0);
        state.action_history.record("Moved to (5, 2)");

        let summary = CompleteLoopAction.apply(&mut state, &env).unwrap();
        CompleteLoopAction.post_validate(&state, &env).unwrap();

        assert_eq!(summary.completed_loop, 1);
        assert_eq!(summary.next_loop, 2);
        assert!(summary.evolved.is_empty());
        assert_eq!(state.current_loop, 2);
        assert_eq!(state.time_remaining, 1800);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.player.position, Position::new(1, 7));
        assert!(!state.player.moved);
        assert_eq!(state.action_history.loop_count(), 2);
        assert!(state.action_history.current().is_empty());

        let shadow = state.enemy(UnitId(1)).unwrap();
        assert_eq!(shadow.unit.hp, 60);
        assert_eq!(shadow.unit.position, Position::new(6, 1));

        let entry = state.knowledge.get(summary.knowledge).unwrap();
        assert_eq!(
            entry.description,
            "Loop 1 completed. Enemies have adapted to your strategies."
        );
    }

    #[test]
    fn repeated_evolution_over_many_loops_stays_valid() {
        let mut config = GameConfig::default();
        config.evolution.hp_per_level = 1_000_000;
        let scenario = Scenario::default();
        let env = GameEnv::new(&config, &scenario);
        let mut state = GameState::default();
        for _ in 0..4 {
            state.action_history.record("Attacked Shadow for 10 damage");
        }

        for _ in 0..200 {
            CompleteLoopAction.apply(&mut state, &env).unwrap();
            CompleteLoopAction.post_validate(&state, &env).unwrap();
            state.validate().unwrap();
        }

        let shadow = state.enemy(UnitId(1)).unwrap();
        assert_eq!(state.current_loop, 201);
        assert_eq!(shadow.evolution_level, 200);
        assert_eq!(shadow.unit.max_hp, u32::MAX);
        assert_eq!(shadow.unit.hp, u32::MAX);
        assert_eq!(shadow.unit.attack, 12 + 3 * 200);
    }

    #[test]
    fn damaged_survivors_return_at_full_hp() {
        let config = GameConfig::default();
        let scenario = Scenario::default();
        let env = GameEnv::new(&config, &scenario);
        let mut state = GameState::default();
        state.enemies[1].unit.hp = 3;

        CompleteLoopAction.apply(&mut state, &env).unwrap();

        assert_eq!(state.enemy(UnitId(2)).unwrap().unit.hp, 80);
    }
}
