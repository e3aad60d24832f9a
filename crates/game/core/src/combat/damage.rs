//! Damage calculation and application.

use crate::state::UnitState;

/// Every successful attack deals at least this much damage.
pub const MIN_DAMAGE: u32 = 1;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = max(1, attacker.attack - defender.defense)
/// ```
pub fn calculate_damage(attacker: &UnitState, defender: &UnitState) -> u32 {
    attacker
        .attack
        .saturating_sub(defender.defense)
        .max(MIN_DAMAGE)
}

/// Apply damage to a unit, clamping HP at 0.
///
/// Returns `(hp_before, hp_after)`.
pub fn apply_damage(target: &mut UnitState, damage: u32) -> (u32, u32) {
    let before = target.hp;
    let after = target.take_damage(damage);
    (before, after)
}
