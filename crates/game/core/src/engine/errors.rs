//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, AttackAction, CompleteLoopAction, EndTurnAction, MoveAction,
    SelectUnitAction, TickAction,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::StateError;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
    /// `GameState::validate` after a successful post-validation.
    Invariant,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
            TransitionPhase::Invariant => "invariant",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("select action failed: {0}")]
    Select(TransitionPhaseError<<SelectUnitAction as ActionTransition>::Error>),

    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<<AttackAction as ActionTransition>::Error>),

    #[error("end turn action failed: {0}")]
    EndTurn(TransitionPhaseError<<EndTurnAction as ActionTransition>::Error>),

    #[error("tick action failed: {0}")]
    Tick(TransitionPhaseError<<TickAction as ActionTransition>::Error>),

    #[error("complete loop action failed: {0}")]
    CompleteLoop(TransitionPhaseError<<CompleteLoopAction as ActionTransition>::Error>),

    #[error("state invariant violated: {0}")]
    Invariant(StateError),
}

impl ExecuteError {
    /// Pipeline stage that failed.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Select(err) => err.phase,
            Self::Move(err) => err.phase,
            Self::Attack(err) => err.phase,
            Self::EndTurn(err) => err.phase,
            Self::Tick(err) => err.phase,
            Self::CompleteLoop(err) => err.phase,
            Self::Invariant(_) => TransitionPhase::Invariant,
        }
    }

    /// True when the action simply did not apply: the caller treats it as a
    /// no-op and the state is untouched.
    pub fn is_rejection(&self) -> bool {
        self.phase() == TransitionPhase::PreValidate && self.severity() == ErrorSeverity::Rejected
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Select(err) => err.error.severity(),
            Self::Move(err) => err.error.severity(),
            Self::Attack(err) => err.error.severity(),
            Self::EndTurn(err) => err.error.severity(),
            Self::Tick(err) => err.error.severity(),
            Self::CompleteLoop(err) => err.error.severity(),
            Self::Invariant(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Select(err) => err.error.error_code(),
            Self::Move(err) => err.error.error_code(),
            Self::Attack(err) => err.error.error_code(),
            Self::EndTurn(err) => err.error.error_code(),
            Self::Tick(err) => err.error.error_code(),
            Self::CompleteLoop(err) => err.error.error_code(),
            Self::Invariant(err) => err.error_code(),
        }
    }
}
