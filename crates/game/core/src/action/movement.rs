use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Position, UnitId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("player is not selected (selection: {selected:?})")]
    PlayerNotSelected { selected: Option<UnitId> },

    #[error("player has already moved this turn")]
    AlreadyMoved,

    #[error("destination {destination} is outside the board")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is {distance} tiles away (max {max})")]
    TooFar {
        destination: Position,
        distance: u32,
        max: u32,
    },

    #[error("player did not end up at {destination}")]
    PositionMismatch { destination: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PositionMismatch { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Rejected,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerNotSelected { .. } => "MOVE_PLAYER_NOT_SELECTED",
            Self::AlreadyMoved => "MOVE_ALREADY_MOVED",
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::TooFar { .. } => "MOVE_TOO_FAR",
            Self::PositionMismatch { .. } => "MOVE_POSITION_MISMATCH",
        }
    }
}

/// Moves the selected player to `destination`.
///
/// Occupancy is deliberately not checked: the player may share a tile with
/// an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub destination: Position,
}

impl MoveAction {
    pub fn new(destination: Position) -> Self {
        Self { destination }
    }
}

/// Action-log line for a move. Never contains a unit name.
pub fn format_move(destination: Position) -> String {
    format!("Moved to {destination}")
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = Position;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.selected_unit != Some(state.player.id) {
            return Err(MoveError::PlayerNotSelected {
                selected: state.selected_unit,
            });
        }

        if state.player.moved {
            return Err(MoveError::AlreadyMoved);
        }

        let config = env.config();
        if !config.contains(self.destination) {
            return Err(MoveError::OutOfBounds {
                destination: self.destination,
            });
        }

        let distance = state.player.position.distance(self.destination);
        if distance > config.move_range {
            return Err(MoveError::TooFar {
                destination: self.destination,
                distance,
                max: config.move_range,
            });
        }

        Ok(())
    }

    /// Returns the origin tile.
    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Position, Self::Error> {
        let origin = state.player.position;
        state.player.position = self.destination;
        state.player.moved = true;
        state.action_history.record(format_move(self.destination));
        Ok(origin)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.player.position == self.destination && state.player.moved {
            Ok(())
        } else {
            Err(MoveError::PositionMismatch {
                destination: self.destination,
            })
        }
    }
}
