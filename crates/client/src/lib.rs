//! Text-shell client for the time-loop tactics game.
//!
//! The binary is the composition root: it loads content, builds the
//! [`tactics_runtime::Runtime`], and hands a [`tactics_runtime::RuntimeHandle`]
//! to the [`app::ShellApp`]. The shell reaches game state only through that
//! handle and the event bus.
pub mod app;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;

pub use app::{Flow, ShellApp};
pub use config::ClientConfig;
pub use shell::{ParseError, ShellCommand};
