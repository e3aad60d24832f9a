//! State invariant errors.
//!
//! Raised by [`GameState::validate`](super::GameState::validate) after every
//! transition. Any of these indicates a bug in a transition, never bad input.

use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("unit {unit} has hp {hp} outside [0, {max_hp}]")]
    HpOutOfRange { unit: UnitId, hp: u32, max_hp: u32 },

    #[error("defeated enemy {unit} is still in the live roster")]
    DefeatedEnemyInRoster { unit: UnitId },

    #[error("live enemy {unit} has no lineage entry")]
    UnknownEnemy { unit: UnitId },

    #[error("action history holds {logged_loops} loop logs but current loop is {current_loop}")]
    HistoryDesync {
        current_loop: u32,
        logged_loops: usize,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HpOutOfRange { .. } => "STATE_HP_OUT_OF_RANGE",
            Self::DefeatedEnemyInRoster { .. } => "STATE_DEFEATED_ENEMY_IN_ROSTER",
            Self::UnknownEnemy { .. } => "STATE_UNKNOWN_ENEMY",
            Self::HistoryDesync { .. } => "STATE_HISTORY_DESYNC",
        }
    }
}
