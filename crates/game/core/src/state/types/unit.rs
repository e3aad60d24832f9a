//! Unit and enemy state.

use super::common::{Position, UnitId};

/// Discriminant between the player and enemy units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum UnitKind {
    Player,
    Enemy,
}

/// Combat-relevant state shared by every unit on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: UnitId,
    pub name: String,
    pub kind: UnitKind,
    pub position: Position,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// Attack range as Manhattan distance.
    pub range: u32,
    /// Set once the unit has moved this turn; cleared by end of turn.
    pub moved: bool,
}

impl UnitState {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Returns true when `other` lies within this unit's attack range.
    pub fn in_range(&self, other: &UnitState) -> bool {
        self.position.distance(other.position) <= self.range
    }

    /// Subtracts `amount` from HP, flooring at zero. Returns the new HP.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }
}

/// Adaptation tag recorded when an enemy evolves against the player.
pub const PLAYER_TACTICS: &str = "player_tactics";

/// An enemy unit plus its evolution bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub unit: UnitState,
    /// Number of times this enemy has evolved; never decreases.
    pub evolution_level: u32,
    /// Descriptive behavior tags; never mutated by the engine.
    pub behavior_pattern: Vec<String>,
    /// Player tactics this enemy has learned to resist.
    pub adapted_to: Vec<String>,
}

impl EnemyState {
    #[inline]
    pub fn id(&self) -> UnitId {
        self.unit.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.unit.name
    }

    /// Copy of this enemy placed back on the board at full health.
    pub fn redeployed(&self) -> Self {
        let mut enemy = self.clone();
        enemy.unit.hp = enemy.unit.max_hp;
        enemy.unit.moved = false;
        enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(hp: u32, max_hp: u32) -> UnitState {
        UnitState {
            id: UnitId(1),
            name: "Shadow".into(),
            kind: UnitKind::Enemy,
            position: Position::new(6, 1),
            hp,
            max_hp,
            attack: 12,
            defense: 5,
            range: 1,
            moved: false,
        }
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut shadow = unit(8, 60);
        assert_eq!(shadow.take_damage(10), 0);
        assert!(!shadow.is_alive());
    }

    #[test]
    fn redeploy_restores_full_health() {
        let enemy = EnemyState {
            unit: unit(5, 80),
            evolution_level: 1,
            behavior_pattern: vec!["aggressive".into()],
            adapted_to: vec![PLAYER_TACTICS.into()],
        };

        let fresh = enemy.redeployed();
        assert_eq!(fresh.unit.hp, 80);
        assert_eq!(fresh.evolution_level, 1);
        assert_eq!(fresh.adapted_to, enemy.adapted_to);
    }

    #[test]
    fn kinds_render_in_snake_case() {
        assert_eq!(UnitKind::Player.to_string(), "player");
        assert_eq!("enemy".parse::<UnitKind>().unwrap(), UnitKind::Enemy);
    }
}
