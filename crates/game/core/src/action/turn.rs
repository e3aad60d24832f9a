use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::NeverError;
use crate::state::GameState;

/// Ends the player's turn. There is no enemy phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction;

impl ActionTransition for EndTurnAction {
    type Error = NeverError;
    /// The new turn number.
    type Result = u32;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<u32, Self::Error> {
        state.player.moved = false;
        state.turn_number = state.turn_number.saturating_add(1);
        state.selected_unit = None;
        Ok(state.turn_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::Scenario;
    use crate::state::UnitId;

    #[test]
    fn resets_movement_and_clears_selection() {
        let config = GameConfig::default();
        let scenario = Scenario::default();
        let env = GameEnv::new(&config, &scenario);
        let mut state = GameState::default();
        state.player.moved = true;
        state.selected_unit = Some(UnitId::PLAYER);

        let next = EndTurnAction.apply(&mut state, &env).unwrap();

        assert_eq!(next, 2);
        assert!(!state.player.moved);
        assert_eq!(state.selected_unit, None);
    }
}
