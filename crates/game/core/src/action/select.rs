use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, UnitId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectError {
    #[error("unit {0} is not on the board")]
    UnitNotFound(UnitId),
}

impl GameError for SelectError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Rejected
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnitNotFound(_) => "SELECT_UNIT_NOT_FOUND",
        }
    }
}

/// Marks a unit (the player or a live enemy) as the current selection.
///
/// No turn-ownership check: enemies may be selected to inspect them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectUnitAction {
    pub unit: UnitId,
}

impl SelectUnitAction {
    pub fn new(unit: UnitId) -> Self {
        Self { unit }
    }
}

impl ActionTransition for SelectUnitAction {
    type Error = SelectError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state
            .unit(self.unit)
            .map(|_| ())
            .ok_or(SelectError::UnitNotFound(self.unit))
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state.selected_unit = Some(self.unit);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::Scenario;

    #[test]
    fn selects_live_enemies_but_not_unknown_ids() {
        let config = GameConfig::default();
        let scenario = Scenario::default();
        let env = GameEnv::new(&config, &scenario);
        let mut state = GameState::default();

        let select = SelectUnitAction::new(UnitId(2));
        select.pre_validate(&state, &env).unwrap();
        select.apply(&mut state, &env).unwrap();
        assert_eq!(state.selected_unit, Some(UnitId(2)));

        let missing = SelectUnitAction::new(UnitId(9));
        assert_eq!(
            missing.pre_validate(&state, &env),
            Err(SelectError::UnitNotFound(UnitId(9)))
        );
    }
}
