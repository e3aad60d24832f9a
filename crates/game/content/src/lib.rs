//! Data-driven content for the time-loop game.
//!
//! This crate loads the tunables and the starting layout from data files:
//! - Game configuration (TOML)
//! - Scenario: the player and enemy roster every loop starts with (RON)
//!
//! Content is read once at startup and handed to the runtime; it never
//! changes while a session runs. All loaders deserialize `tactics-core`
//! types directly via serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, GameContent, LoadResult, ScenarioLoader};
