use crate::action::{ActionTransition, AttackOutcome};
use crate::combat::{apply_damage, calculate_damage, first_target_in_range};
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, KnowledgeCategory, UnitId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("no enemy within range {range} of the player")]
    NoTargetInRange { range: u32 },

    #[error("defeated enemy {target} is still in the roster")]
    DefeatedTargetRemains { target: UnitId },
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoTargetInRange { .. } => ErrorSeverity::Rejected,
            Self::DefeatedTargetRemains { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoTargetInRange { .. } => "ATTACK_NO_TARGET_IN_RANGE",
            Self::DefeatedTargetRemains { .. } => "ATTACK_DEFEATED_TARGET_REMAINS",
        }
    }
}

/// Action-log line for an attack. Evolution counts these by enemy name.
pub fn format_attack(target_name: &str, damage: u32) -> String {
    format!("Attacked {target_name} for {damage} damage")
}

/// Knowledge text recorded when an enemy falls.
pub fn format_defeat(target_name: &str) -> String {
    format!("Defeated {target_name}. They will remember this in the next loop.")
}

/// The player strikes the first enemy (roster order) within range.
///
/// Neither selection nor a per-turn limit is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction;

impl ActionTransition for AttackAction {
    type Error = AttackError;
    type Result = AttackOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        first_target_in_range(&state.player, &state.enemies)
            .map(|_| ())
            .ok_or(AttackError::NoTargetInRange {
                range: state.player.range,
            })
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<AttackOutcome, Self::Error> {
        let index = first_target_in_range(&state.player, &state.enemies).ok_or(
            AttackError::NoTargetInRange {
                range: state.player.range,
            },
        )?;

        let damage = calculate_damage(&state.player, &state.enemies[index].unit);
        let target = &mut state.enemies[index];
        let (hp_before, hp_after) = apply_damage(&mut target.unit, damage);
        let target_id = target.id();
        let target_name = target.name().to_owned();
        let defeated = hp_after == 0;

        state
            .action_history
            .record(format_attack(&target_name, damage));

        let knowledge = if defeated {
            state.enemies.remove(index);
            Some(state.knowledge.record(
                format_defeat(&target_name),
                state.current_loop,
                KnowledgeCategory::EnemyPattern,
            ))
        } else {
            None
        };

        Ok(AttackOutcome {
            target: target_id,
            target_name,
            damage,
            hp_before,
            hp_after,
            defeated,
            knowledge,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match state.enemies.iter().find(|enemy| !enemy.unit.is_alive()) {
            Some(enemy) => Err(AttackError::DefeatedTargetRemains { target: enemy.id() }),
            None => Ok(()),
        }
    }
}
