use std::fmt;
use std::str::FromStr;

/// Unique identifier for a unit on the board.
///
/// Stable for the unit's lifetime, including across loop resets. Rendered as
/// `player` for the reserved player id and `enemy{n}` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Reserved identifier for the controllable player unit.
    pub const PLAYER: Self = Self(0);

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_player() {
            f.write_str("player")
        } else {
            write!(f, "enemy{}", self.0)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid unit id '{0}' (expected 'player' or 'enemy<n>')")]
pub struct ParseUnitIdError(pub String);

impl FromStr for UnitId {
    type Err = ParseUnitIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "player" {
            return Ok(Self::PLAYER);
        }
        // Canonical digits only, so parsing mirrors `Display` exactly.
        s.strip_prefix("enemy")
            .filter(|digits| {
                !digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit())
            })
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|&n| n != Self::PLAYER.0)
            .map(Self)
            .ok_or_else(|| ParseUnitIdError(s.to_owned()))
    }
}

impl TryFrom<String> for UnitId {
    type Error = ParseUnitIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UnitId> for String {
    fn from(id: UnitId) -> Self {
        id.to_string()
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two tiles.
    pub fn distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_ids_round_trip_through_strings() {
        assert_eq!("player".parse::<UnitId>().unwrap(), UnitId::PLAYER);
        assert_eq!("enemy2".parse::<UnitId>().unwrap(), UnitId(2));
        assert_eq!(UnitId(1).to_string(), "enemy1");
        assert!("enemy0".parse::<UnitId>().is_err());
        assert!("goblin".parse::<UnitId>().is_err());
    }

    #[test]
    fn non_canonical_enemy_ids_are_rejected() {
        for raw in ["enemy01", "enemy+1", "enemy", "enemy 1", "enemy00"] {
            assert!(raw.parse::<UnitId>().is_err(), "{raw} should not parse");
        }

        for id in [UnitId(1), UnitId(10), UnitId(u32::MAX)] {
            assert_eq!(id.to_string().parse::<UnitId>().unwrap(), id);
        }
    }

    #[test]
    fn distance_is_manhattan() {
        let origin = Position::new(1, 7);
        assert_eq!(origin.distance(Position::new(1, 7)), 0);
        assert_eq!(origin.distance(Position::new(3, 3)), 6);
        assert_eq!(origin.distance(Position::new(0, 8)), 2);
    }
}
