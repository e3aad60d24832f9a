use crate::state::Position;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Width and height of the square board.
    pub grid_size: u32,
    /// Length of one loop in seconds.
    pub loop_duration: u32,
    /// Maximum Manhattan distance the player may cover in one move.
    pub move_range: u32,
    /// An enemy evolves when its name appears in strictly more than this many
    /// historical action strings.
    pub evolution_threshold: usize,
    /// Remaining seconds below which the countdown is considered critical.
    pub critical_time: u32,
    /// Stat growth applied on each evolution.
    pub evolution: EvolutionConfig,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_SIZE: u32 = 8;
    pub const DEFAULT_LOOP_DURATION: u32 = 1800;
    pub const DEFAULT_MOVE_RANGE: u32 = 2;
    pub const DEFAULT_EVOLUTION_THRESHOLD: usize = 3;
    pub const DEFAULT_CRITICAL_TIME: u32 = 300;

    pub fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            loop_duration: Self::DEFAULT_LOOP_DURATION,
            move_range: Self::DEFAULT_MOVE_RANGE,
            evolution_threshold: Self::DEFAULT_EVOLUTION_THRESHOLD,
            critical_time: Self::DEFAULT_CRITICAL_TIME,
            evolution: EvolutionConfig::default(),
        }
    }

    pub fn with_loop_duration(loop_duration: u32) -> Self {
        Self {
            loop_duration,
            ..Self::new()
        }
    }

    /// Returns true when `position` lies on the board.
    pub fn contains(&self, position: Position) -> bool {
        let size = self.grid_size as i64;
        (0..size).contains(&i64::from(position.x)) && (0..size).contains(&i64::from(position.y))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-level stat growth for evolving enemies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Added to max HP, multiplied by the new evolution level.
    pub hp_per_level: u32,
    pub attack_bonus: u32,
    pub defense_bonus: u32,
}

impl EvolutionConfig {
    /// Upper bound accepted for each per-level bonus when loading content.
    pub const MAX_BONUS: u32 = 1_000;

    /// Returns true when every bonus is within [`Self::MAX_BONUS`].
    pub fn is_bounded(&self) -> bool {
        [self.hp_per_level, self.attack_bonus, self.defense_bonus]
            .iter()
            .all(|&bonus| bonus <= Self::MAX_BONUS)
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            hp_per_level: 20,
            attack_bonus: 3,
            defense_bonus: 2,
        }
    }
}
