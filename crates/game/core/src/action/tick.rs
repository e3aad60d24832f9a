use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickError {
    #[error("loop {current_loop} has no time remaining")]
    ClockExhausted { current_loop: u32 },
}

impl GameError for TickError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Rejected
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ClockExhausted { .. } => "TICK_CLOCK_EXHAUSTED",
        }
    }
}

/// Advances the loop countdown by one second.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickAction;

/// Remaining seconds and whether this tick drained the countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickResult {
    pub remaining: u32,
    pub expired: bool,
}

impl ActionTransition for TickAction {
    type Error = TickError;
    type Result = TickResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.time_remaining == 0 {
            return Err(TickError::ClockExhausted {
                current_loop: state.current_loop,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<TickResult, Self::Error> {
        state.time_remaining = state.time_remaining.saturating_sub(1);
        Ok(TickResult {
            remaining: state.time_remaining,
            expired: state.time_remaining == 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::Scenario;

    #[test]
    fn last_second_flags_expiry() {
        let config = GameConfig::default();
        let scenario = Scenario::default();
        let env = GameEnv::new(&config, &scenario);
        let mut state = GameState::default();
        state.time_remaining = 1;

        let result = TickAction.apply(&mut state, &env).unwrap();
        assert_eq!(
            result,
            TickResult {
                remaining: 0,
                expired: true
            }
        );

        assert_eq!(
            TickAction.pre_validate(&state, &env),
            Err(TickError::ClockExhausted { current_loop: 1 })
        );
    }
}
