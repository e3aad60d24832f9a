//! Execution context provided to hooks during evaluation.

use tactics_core::{Action, ExecutionOutcome, GameConfig, GameState};

/// An action that ran successfully inside the current command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedAction {
    pub action: Action,
    pub outcome: ExecutionOutcome,
}

/// Read-only view handed to hooks.
pub struct HookContext<'a> {
    /// The action that just executed and its outcome
    pub executed: &'a ExecutedAction,

    /// Staged game state (post-action, pre-hooks)
    pub state: &'a GameState,

    pub config: &'a GameConfig,
}
