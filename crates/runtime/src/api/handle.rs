//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for every
//! game operation. Each helper resolves to the post-operation snapshot; a
//! rejected operation resolves to the unchanged snapshot.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use tactics_core::{Action, GameState, Position, UnitId};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Executes an action and returns the resulting snapshot.
    pub async fn dispatch(&self, action: Action) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                action,
                reply: Some(reply_tx),
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn select_unit(&self, unit: UnitId) -> Result<GameState> {
        self.dispatch(Action::select(unit)).await
    }

    pub async fn move_unit(&self, x: i32, y: i32) -> Result<GameState> {
        self.dispatch(Action::move_to(x, y)).await
    }

    /// Board click at `(x, y)`: selects the unit standing there, otherwise
    /// moves the selected player. Executes as a single command.
    pub async fn click_cell(&self, x: i32, y: i32) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ClickCell {
                position: Position::new(x, y),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn attack(&self) -> Result<GameState> {
        self.dispatch(Action::attack()).await
    }

    pub async fn end_turn(&self) -> Result<GameState> {
        self.dispatch(Action::end_turn()).await
    }

    /// Ends the current loop immediately, as if the countdown had expired.
    pub async fn complete_loop(&self) -> Result<GameState> {
        self.dispatch(Action::complete_loop()).await
    }

    /// Advances the countdown by one second. The clock worker calls this
    /// path on its own; manual ticks are for hosts running without it.
    pub async fn tick(&self) -> Result<GameState> {
        self.dispatch(Action::tick()).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Executed, rejected, and failed actions
    /// - `Topic::Clock` - Countdown ticks and loop expiry
    /// - `Topic::Notification` - Player-facing messages
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub(crate) fn downgrade(&self) -> mpsc::WeakSender<Command> {
        self.command_tx.downgrade()
    }
}
