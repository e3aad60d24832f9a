//! Action domain.
//!
//! Every operation on the game is an [`Action`] value dispatched through
//! [`GameEngine::execute`](crate::GameEngine::execute). Each concrete action
//! implements [`ActionTransition`].
//!
//! # Module Structure
//!
//! - `select`: unit selection
//! - `movement`: player movement
//! - `combat`: player attack
//! - `turn`: end of turn
//! - `tick`: countdown tick (system)
//! - `loop_reset`: loop completion and evolution (system)
//! - `result`: per-action results and notifications

pub mod combat;
pub mod loop_reset;
pub mod movement;
pub mod result;
pub mod select;
pub mod tick;
pub mod turn;

pub use combat::{AttackAction, AttackError};
pub use loop_reset::{CompleteLoopAction, LoopError};
pub use movement::{MoveAction, MoveError};
pub use result::{ActionResult, AttackOutcome, LoopSummary, Notification};
pub use select::{SelectError, SelectUnitAction};
pub use tick::{TickAction, TickError, TickResult};
pub use turn::EndTurnAction;

use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::{GameState, Position, UnitId};

/// Defines how a concrete action variant mutates game state.
///
/// `pre_validate` must be side-effect free: a failure there means the action
/// does not apply to the current state and nothing is mutated.
pub trait ActionTransition {
    type Error: GameError;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume `pre_validate` has already succeeded.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level command consumed by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Intents forwarded from the player (board clicks, buttons).
    Player { kind: PlayerActionKind },
    /// Actions issued by the host: clock ticks and loop completion.
    System { kind: SystemActionKind },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerActionKind {
    Select(SelectUnitAction),
    Move(MoveAction),
    Attack(AttackAction),
    EndTurn(EndTurnAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemActionKind {
    Tick(TickAction),
    CompleteLoop(CompleteLoopAction),
}

impl Action {
    pub fn player(kind: PlayerActionKind) -> Self {
        Self::Player { kind }
    }

    pub fn system(kind: SystemActionKind) -> Self {
        Self::System { kind }
    }

    pub fn select(unit: UnitId) -> Self {
        Self::player(PlayerActionKind::Select(SelectUnitAction::new(unit)))
    }

    pub fn move_to(x: i32, y: i32) -> Self {
        Self::player(PlayerActionKind::Move(MoveAction::new(Position::new(x, y))))
    }

    pub fn attack() -> Self {
        Self::player(PlayerActionKind::Attack(AttackAction))
    }

    pub fn end_turn() -> Self {
        Self::player(PlayerActionKind::EndTurn(EndTurnAction))
    }

    pub fn tick() -> Self {
        Self::system(SystemActionKind::Tick(TickAction))
    }

    pub fn complete_loop() -> Self {
        Self::system(SystemActionKind::CompleteLoop(CompleteLoopAction))
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }

    /// Short lowercase label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player { kind } => match kind {
                PlayerActionKind::Select(_) => "select",
                PlayerActionKind::Move(_) => "move",
                PlayerActionKind::Attack(_) => "attack",
                PlayerActionKind::EndTurn(_) => "end_turn",
            },
            Self::System { kind } => match kind {
                SystemActionKind::Tick(_) => "tick",
                SystemActionKind::CompleteLoop(_) => "complete_loop",
            },
        }
    }
}
