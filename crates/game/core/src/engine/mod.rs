//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! drives the transition phases, checks state invariants afterwards, and
//! surfaces rich error information for the runtime. Player intents and
//! system actions (ticks, loop completion) flow through the same
//! `execute()` pipeline.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult, Notification};
use crate::env::GameEnv;
use crate::state::{GameState, Position, UnitId};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific execution result.
    pub result: ActionResult,
    /// Player-facing message, if the action warrants one.
    pub notification: Option<Notification>,
}

/// Game engine that applies actions to a borrowed state.
///
/// Execution is transactional: on any error the state is restored to what it
/// was before the call.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action through its transition pipeline, then validates the
    /// state invariants.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        let outcome = match transition::execute_transition(action, self.state, &env) {
            Ok(result) => self
                .state
                .validate()
                .map(|()| result)
                .map_err(ExecuteError::Invariant),
            Err(error) => Err(error),
        };

        match outcome {
            Ok(result) => Ok(ExecutionOutcome {
                notification: result.notification(),
                result,
            }),
            Err(error) => {
                *self.state = before;
                Err(error)
            }
        }
    }

    pub fn select_unit(
        &mut self,
        env: GameEnv<'_>,
        unit: UnitId,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &Action::select(unit))
    }

    pub fn move_unit(
        &mut self,
        env: GameEnv<'_>,
        destination: Position,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &Action::move_to(destination.x, destination.y))
    }

    pub fn attack(&mut self, env: GameEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &Action::attack())
    }

    pub fn end_turn(&mut self, env: GameEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &Action::end_turn())
    }

    pub fn tick(&mut self, env: GameEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &Action::tick())
    }

    pub fn complete_loop(&mut self, env: GameEnv<'_>) -> Result<ExecutionOutcome, ExecuteError> {
        self.execute(env, &Action::complete_loop())
    }
}
