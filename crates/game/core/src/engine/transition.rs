//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition, PlayerActionKind, SystemActionKind};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Player { kind } => match kind {
            PlayerActionKind::Select(transition) => {
                drive_transition(transition, state, env).map_err(ExecuteError::Select)?;
                Ok(ActionResult::Selected {
                    unit: transition.unit,
                })
            }
            PlayerActionKind::Move(transition) => {
                let from = drive_transition(transition, state, env).map_err(ExecuteError::Move)?;
                Ok(ActionResult::Moved {
                    from,
                    to: transition.destination,
                })
            }
            PlayerActionKind::Attack(transition) => {
                let outcome =
                    drive_transition(transition, state, env).map_err(ExecuteError::Attack)?;
                Ok(ActionResult::Attacked(outcome))
            }
            PlayerActionKind::EndTurn(transition) => {
                let next_turn =
                    drive_transition(transition, state, env).map_err(ExecuteError::EndTurn)?;
                Ok(ActionResult::TurnEnded { next_turn })
            }
        },
        Action::System { kind } => match kind {
            SystemActionKind::Tick(transition) => {
                let tick = drive_transition(transition, state, env).map_err(ExecuteError::Tick)?;
                Ok(ActionResult::Ticked {
                    remaining: tick.remaining,
                    expired: tick.expired,
                })
            }
            SystemActionKind::CompleteLoop(transition) => {
                let summary =
                    drive_transition(transition, state, env).map_err(ExecuteError::CompleteLoop)?;
                Ok(ActionResult::LoopCompleted(summary))
            }
        },
    }
}
