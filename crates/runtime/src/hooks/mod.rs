//! Post-execution hook system for runtime orchestration.
//!
//! Hooks trigger system actions after an action executes. Each hook inspects
//! the executed action and its result and may return follow-up actions,
//! which run through the same engine pipeline on the same staged state.
//!
//! # Architecture
//!
//! - Hooks are registered in the RuntimeBuilder and sorted by priority
//! - After each action execution, hooks are evaluated in priority order
//! - Follow-up actions are themselves offered to the hooks, up to
//!   [`MAX_HOOK_DEPTH`] levels deep
//! - The root action and every follow-up commit together or not at all

mod context;
mod loop_expiry;
mod registry;

pub use context::{ExecutedAction, HookContext};
pub use loop_expiry::LoopExpiryHook;
pub use registry::{HookRegistry, MAX_HOOK_DEPTH};

use tactics_core::Action;

/// Defines the criticality level of a hook for error handling.
///
/// - Critical hooks must succeed or the whole command is discarded
/// - Important hooks log errors but allow continuation
/// - Optional hooks can fail silently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// Hook failure discards the entire staged command.
    ///
    /// Use for hooks that maintain game consistency (e.g. LoopExpiryHook:
    /// an expired loop must reset).
    Critical,

    /// Hook failure is logged as error but the command still commits.
    Important,

    /// Hook failure is expected and can be silently ignored.
    Optional,
}

/// Post-execution hook that can generate system actions.
///
/// # Execution Order
///
/// Hooks are sorted by priority (lower values execute first):
/// - Negative priorities: Critical system hooks
/// - Zero: Default priority for most hooks
/// - Positive priorities: Optional or cosmetic hooks
pub trait PostExecutionHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging).
    fn name(&self) -> &'static str;

    /// Returns the execution priority. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    /// Determines whether this hook should trigger for the executed action.
    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool;

    /// Creates system actions to be executed if this hook triggers.
    fn create_actions(&self, ctx: &HookContext<'_>) -> Vec<Action>;
}
