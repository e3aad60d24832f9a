//! Runtime orchestration for the time-loop game.
//!
//! This crate owns the authoritative [`tactics_core::GameState`] inside a
//! simulation worker, drives the loop countdown from a clock worker, and
//! exposes a cloneable [`RuntimeHandle`] for clients. Consumers embed
//! [`Runtime`] to issue commands and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides a topic-based event bus
//! - [`hooks`] provides post-execution hooks that chain system actions
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod hooks;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{ClockEvent, Event, EventBus, GameStateEvent, Topic};
pub use hooks::{
    ExecutedAction, HookContext, HookCriticality, HookRegistry, LoopExpiryHook, PostExecutionHook,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
