//! Hook that completes the loop when the countdown runs out.

use tactics_core::Action;

use super::{HookContext, HookCriticality, PostExecutionHook};

/// Chains `CompleteLoop` onto the tick that drained the countdown.
///
/// Because the follow-up runs on the same staged state as the tick, the
/// fresh loop's timer is already in place before the next tick arrives, so a
/// loop completes exactly once per expiry.
#[derive(Debug, Clone, Copy)]
pub struct LoopExpiryHook;

impl PostExecutionHook for LoopExpiryHook {
    fn name(&self) -> &'static str {
        "loop_expiry"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Critical
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.executed.outcome.result.is_expired_tick()
    }

    fn create_actions(&self, _ctx: &HookContext<'_>) -> Vec<Action> {
        vec![Action::complete_loop()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::ExecutedAction;
    use tactics_core::{ActionResult, ExecutionOutcome, GameConfig, GameState};

    fn tick(remaining: u32) -> ExecutedAction {
        ExecutedAction {
            action: Action::tick(),
            outcome: ExecutionOutcome {
                result: ActionResult::Ticked {
                    remaining,
                    expired: remaining == 0,
                },
                notification: None,
            },
        }
    }

    #[test]
    fn triggers_only_on_the_expiring_tick() {
        let state = GameState::default();
        let config = GameConfig::default();

        let running = tick(1);
        let ctx = HookContext {
            executed: &running,
            state: &state,
            config: &config,
        };
        assert!(!LoopExpiryHook.should_trigger(&ctx));

        let expired = tick(0);
        let ctx = HookContext {
            executed: &expired,
            state: &state,
            config: &config,
        };
        assert!(LoopExpiryHook.should_trigger(&ctx));
        assert_eq!(LoopExpiryHook.create_actions(&ctx), vec![Action::complete_loop()]);
    }
}
