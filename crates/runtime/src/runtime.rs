//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the simulation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::info;

use tactics_content::GameContent;
use tactics_core::{GameConfig, GameState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::hooks::{HookRegistry, LoopExpiryHook, PostExecutionHook};
use crate::workers::{ClockWorker, Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Wall time per countdown second.
    pub tick_interval: Duration,
    /// Spawn the clock worker (default: true). Hosts that drive time
    /// themselves call [`RuntimeHandle::tick`].
    pub enable_clock: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            tick_interval: Duration::from_secs(1),
            enable_clock: true,
        }
    }
}

/// Main runtime that orchestrates the game session
///
/// Design: Runtime owns workers and coordinates execution.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    // Shared handle (can be cloned for clients)
    handle: RuntimeHandle,
    game_config: GameConfig,

    // Background workers
    sim_worker_handle: JoinHandle<()>,
    clock: Option<(oneshot::Sender<()>, JoinHandle<()>)>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Game configuration the session runs with.
    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    /// Shutdown the runtime gracefully
    ///
    /// Stops the clock, then waits for the simulation worker to drain its
    /// queue. Handles cloned by clients must be dropped as well for the
    /// simulation worker to finish.
    pub async fn shutdown(self) -> Result<()> {
        if let Some((shutdown_tx, clock_handle)) = self.clock {
            let _ = shutdown_tx.send(());
            clock_handle.await.map_err(RuntimeError::WorkerJoin)?;
        }

        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        info!(target: "runtime", "Runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<GameContent>,
    state: Option<GameState>,
    hooks: Option<HookRegistry>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            state: None,
            hooks: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required game content (config + scenario)
    pub fn content(mut self, content: GameContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Provide initial game state instead of a fresh loop-1 layout
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Enable or disable the clock worker
    pub fn enable_clock(mut self, enable: bool) -> Self {
        self.config.enable_clock = enable;
        self
    }

    /// Set custom post-execution hooks.
    ///
    /// If not provided, the default hooks (LoopExpiry) are used.
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Adds hooks to the default hook set.
    ///
    /// Note: If you've already called `with_hooks()`, calling this will discard
    /// those hooks and rebuild from the default set plus your new hooks.
    pub fn add_hooks(mut self, additional_hooks: Vec<Arc<dyn PostExecutionHook>>) -> Self {
        let mut hooks: Vec<Arc<dyn PostExecutionHook>> =
            vec![Arc::new(LoopExpiryHook) as Arc<dyn PostExecutionHook>];
        hooks.extend(additional_hooks);

        self.hooks = Some(HookRegistry::new(hooks));
        self
    }

    /// Build the runtime and spawn its workers
    pub async fn build(self) -> Result<Runtime> {
        let content = self.content.ok_or(RuntimeError::MissingContent)?;
        content
            .scenario
            .validate(&content.config)
            .map_err(RuntimeError::InvalidScenario)?;

        let initial_state = self
            .state
            .unwrap_or_else(|| GameState::from_scenario(&content.scenario, &content.config));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());
        let game_config = content.config.clone();

        // Use provided hooks or default registry
        let hooks = self.hooks.unwrap_or_default();

        let sim_worker =
            SimulationWorker::new(initial_state, content, command_rx, event_bus, hooks);
        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        let clock = if self.config.enable_clock {
            let (shutdown_tx, shutdown_rx) = oneshot::channel();
            let clock_worker =
                ClockWorker::new(handle.downgrade(), self.config.tick_interval, shutdown_rx);
            let clock_handle = tokio::spawn(async move {
                clock_worker.run().await;
            });
            Some((shutdown_tx, clock_handle))
        } else {
            None
        };

        info!(
            target: "runtime",
            loop_duration = game_config.loop_duration,
            clock = self.config.enable_clock,
            "Runtime started"
        );

        Ok(Runtime {
            handle,
            game_config,
            sim_worker_handle,
            clock,
        })
    }
}
