//! Target selection.

use crate::state::{EnemyState, UnitState};

/// Index of the first enemy (roster order) within the attacker's range.
///
/// No distance or HP tie-break is applied.
pub fn first_target_in_range(attacker: &UnitState, enemies: &[EnemyState]) -> Option<usize> {
    enemies
        .iter()
        .position(|enemy| enemy.unit.is_alive() && attacker.in_range(&enemy.unit))
}
