//! Deterministic rules for the time-loop tactics game.
//!
//! `tactics-core` defines the canonical game state, the actions that mutate
//! it, and the [`engine::GameEngine`] that drives every transition. The crate
//! performs no I/O and never reads a clock: time only advances when the host
//! dispatches a [`TickAction`].
//!
//! All state mutation flows through [`GameEngine::execute`]; hosts keep the
//! authoritative [`GameState`] and hand out clones as read-only snapshots.
pub mod action;
pub mod clock;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod evolution;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, AttackAction, AttackError, AttackOutcome,
    CompleteLoopAction, EndTurnAction, LoopError, LoopSummary, MoveAction, MoveError,
    Notification, PlayerActionKind, SelectError, SelectUnitAction, SystemActionKind, TickAction,
    TickError, TickResult,
};
pub use clock::CountdownView;
pub use config::{EvolutionConfig, GameConfig};
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{EnemyTemplate, GameEnv, Scenario, ScenarioError, UnitTemplate};
pub use error::{ErrorSeverity, GameError, NeverError};
pub use evolution::EvolutionRecord;
pub use state::{
    ActionHistory, EnemyState, GameState, Knowledge, KnowledgeArchive, KnowledgeCategory,
    KnowledgeId, ParseUnitIdError, Position, StateError, UnitId, UnitKind, UnitState,
};
