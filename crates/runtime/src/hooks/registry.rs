//! Hook registry for managing and executing post-action hooks.

use std::sync::Arc;

use tactics_core::{ExecuteError, GameEngine, GameEnv, GameState};
use tracing::{debug, error, warn};

use super::{ExecutedAction, HookContext, HookCriticality, LoopExpiryHook, PostExecutionHook};

/// Follow-up chains deeper than this are cut off with a warning.
pub const MAX_HOOK_DEPTH: usize = 8;

/// Registry that manages and executes post-execution hooks.
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn PostExecutionHook>]>,
}

impl HookRegistry {
    /// Creates a new hook registry. Hooks are sorted by priority (lower first).
    pub fn new(mut hooks: Vec<Arc<dyn PostExecutionHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        Self {
            hooks: hooks.into(),
        }
    }

    /// Creates a registry with the default set of hooks.
    ///
    /// Default hooks include:
    /// - LoopExpiryHook: completes the loop when the countdown hits zero
    pub fn default_hooks() -> Self {
        Self::new(vec![Arc::new(LoopExpiryHook) as Arc<dyn PostExecutionHook>])
    }

    /// Runs hooks for `root` and, transitively, for every follow-up action
    /// they produce. Returns the follow-ups in execution order.
    ///
    /// # Error Handling
    ///
    /// Hook execution errors are handled based on criticality level:
    /// - `Critical`: Returns error immediately, failing the command
    /// - `Important`: Logs error and continues to next hook (default)
    /// - `Optional`: Logs at debug level and continues silently
    pub fn execute_hooks(
        &self,
        root: &ExecutedAction,
        state: &mut GameState,
        env: GameEnv<'_>,
    ) -> Result<Vec<ExecutedAction>, ExecuteError> {
        let mut executed = Vec::new();
        self.run_level(root, state, env, 0, &mut executed)?;
        Ok(executed)
    }

    fn run_level(
        &self,
        parent: &ExecutedAction,
        state: &mut GameState,
        env: GameEnv<'_>,
        depth: usize,
        executed: &mut Vec<ExecutedAction>,
    ) -> Result<(), ExecuteError> {
        for hook in self.hooks.iter() {
            let actions = {
                let ctx = HookContext {
                    executed: parent,
                    state,
                    config: env.config(),
                };
                if !hook.should_trigger(&ctx) {
                    continue;
                }
                hook.create_actions(&ctx)
            };

            if depth >= MAX_HOOK_DEPTH {
                warn!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    depth,
                    "Hook chain too deep, dropping follow-up actions"
                );
                continue;
            }

            for action in actions {
                debug!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    action = action.as_str(),
                    depth,
                    "Executing hook action"
                );

                match GameEngine::new(state).execute(env, &action) {
                    Ok(outcome) => {
                        let follow_up = ExecutedAction { action, outcome };
                        executed.push(follow_up.clone());
                        self.run_level(&follow_up, state, env, depth + 1, executed)?;
                    }
                    Err(error) => self.handle_hook_error(hook.as_ref(), error)?,
                }
            }
        }

        Ok(())
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Handles hook execution errors based on criticality level.
    fn handle_hook_error(
        &self,
        hook: &dyn PostExecutionHook,
        error: ExecuteError,
    ) -> Result<(), ExecuteError> {
        match hook.criticality() {
            HookCriticality::Critical => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "critical",
                    error = %error,
                    "Critical hook failed, aborting command"
                );
                Err(error)
            }
            HookCriticality::Important => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "important",
                    error = %error,
                    "Hook failed, continuing"
                );
                Ok(())
            }
            HookCriticality::Optional => {
                debug!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "optional",
                    error = %error,
                    "Optional hook failed"
                );
                Ok(())
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{Action, ActionResult, GameConfig, Scenario};

    /// Ends the turn after every successful select.
    struct AutoEndTurn(HookCriticality);

    impl PostExecutionHook for AutoEndTurn {
        fn name(&self) -> &'static str {
            "auto_end_turn"
        }

        fn criticality(&self) -> HookCriticality {
            self.0
        }

        fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
            matches!(ctx.executed.outcome.result, ActionResult::Selected { .. })
        }

        fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
            vec![Action::end_turn()]
        }
    }

    /// Always asks for an attack, which is rejected from the start tile.
    struct DoomedAttack(HookCriticality);

    impl PostExecutionHook for DoomedAttack {
        fn name(&self) -> &'static str {
            "doomed_attack"
        }

        fn criticality(&self) -> HookCriticality {
            self.0
        }

        fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
            !matches!(ctx.executed.outcome.result, ActionResult::Attacked(_))
        }

        fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
            vec![Action::attack()]
        }
    }

    fn run_select(
        registry: &HookRegistry,
    ) -> (GameState, Result<Vec<ExecutedAction>, ExecuteError>) {
        let config = GameConfig::default();
        let scenario = Scenario::default();
        let env = GameEnv::new(&config, &scenario);
        let mut state = GameState::default();

        let action = Action::select(tactics_core::UnitId::PLAYER);
        let outcome = GameEngine::new(&mut state).execute(env, &action).unwrap();
        let root = ExecutedAction { action, outcome };

        let result = registry.execute_hooks(&root, &mut state, env);
        (state, result)
    }

    #[test]
    fn follow_ups_run_on_the_same_state() {
        let registry = HookRegistry::new(vec![
            Arc::new(AutoEndTurn(HookCriticality::Important)) as Arc<dyn PostExecutionHook>,
        ]);

        let (state, result) = run_select(&registry);
        let executed = result.unwrap();

        assert_eq!(executed.len(), 1);
        assert_eq!(executed[0].action, Action::end_turn());
        assert_eq!(state.turn_number, 2);
        assert_eq!(state.selected_unit, None);
    }

    #[test]
    fn critical_failures_abort_and_important_ones_do_not() {
        let critical = HookRegistry::new(vec![
            Arc::new(DoomedAttack(HookCriticality::Critical)) as Arc<dyn PostExecutionHook>,
        ]);
        let (_, result) = run_select(&critical);
        assert!(result.unwrap_err().is_rejection());

        let important = HookRegistry::new(vec![
            Arc::new(DoomedAttack(HookCriticality::Important)) as Arc<dyn PostExecutionHook>,
        ]);
        let (_, result) = run_select(&important);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn hooks_are_sorted_by_priority() {
        let registry = HookRegistry::new(vec![
            Arc::new(AutoEndTurn(HookCriticality::Optional)) as Arc<dyn PostExecutionHook>,
            Arc::new(LoopExpiryHook) as Arc<dyn PostExecutionHook>,
        ]);

        let names: Vec<_> = registry.hooks().map(|(name, _)| name).collect();
        assert_eq!(names, ["loop_expiry", "auto_end_turn"]);
    }
}
