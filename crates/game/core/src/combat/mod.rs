//! Combat resolution system.
//!
//! Pure, deterministic functions used by [`AttackAction`](crate::AttackAction):
//!
//! - `calculate_damage`: attack minus defense, never below 1
//! - `first_target_in_range`: roster-order target selection
//! - `apply_damage`: HP reduction clamped to 0

pub mod damage;
pub mod targeting;

pub use damage::{MIN_DAMAGE, apply_damage, calculate_damage};
pub use targeting::first_target_in_range;
