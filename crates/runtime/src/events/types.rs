//! Event types for different topics.

use serde::{Deserialize, Serialize};
use tactics_core::{Action, ActionResult, GameState, TransitionPhase};

/// Events related to game state changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action was executed and committed.
    ActionExecuted {
        action: Action,
        result: ActionResult,
        /// State after the whole command (including hook follow-ups) committed
        state: Box<GameState>,
    },

    /// An action did not apply to the current state; nothing changed.
    ActionRejected {
        action: Action,
        phase: TransitionPhase,
        error: String,
    },

    /// An action broke during apply or validation; the staged state was
    /// discarded.
    ActionFailed {
        action: Action,
        phase: TransitionPhase,
        error: String,
    },
}

/// Events related to the loop countdown (lightweight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockEvent {
    /// One second elapsed.
    Ticked { remaining: u32 },
    /// The countdown reached zero and the loop was completed.
    LoopExpired { completed_loop: u32 },
}
