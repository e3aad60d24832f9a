//! Simulation worker that owns the authoritative [`tactics_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle) and the
//! clock worker, executes actions via [`tactics_core::GameEngine`], and
//! publishes events to the EventBus.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use tactics_content::GameContent;
use tactics_core::{Action, ActionResult, ExecuteError, GameEngine, GameEnv, GameState, Position};

use crate::events::{ClockEvent, Event, EventBus, GameStateEvent};
use crate::hooks::{ExecutedAction, HookRegistry};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Execute an action. The reply carries the snapshot after the command,
    /// which is the unchanged state when the action was rejected.
    Execute {
        action: Action,
        reply: Option<oneshot::Sender<GameState>>,
    },
    /// Board click: selects the unit on the cell, otherwise moves there.
    /// Resolved against the committed state so no tick lands in between.
    ClickCell {
        position: Position,
        reply: oneshot::Sender<GameState>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes gameplay commands sequentially.
pub struct SimulationWorker {
    state: GameState,
    content: GameContent,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    hooks: HookRegistry,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        content: GameContent,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        hooks: HookRegistry,
    ) -> Self {
        Self {
            state,
            content,
            command_rx,
            event_bus,
            hooks,
        }
    }

    /// Main worker loop. Ends once every command sender is gone.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "Command channel closed, simulation worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { action, reply } => {
                self.execute_action(action);
                if let Some(reply) = reply {
                    let _ = reply.send(self.state.clone());
                }
            }
            Command::ClickCell { position, reply } => {
                let action = match self.state.unit_at(position) {
                    Some(unit) => Action::select(unit),
                    None => Action::move_to(position.x, position.y),
                };
                self.execute_action(action);
                let _ = reply.send(self.state.clone());
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
        }
    }

    /// Runs the action and its hook follow-ups on a staged clone, then
    /// commits the clone as one update.
    fn execute_action(&mut self, action: Action) {
        let env = GameEnv::new(&self.content.config, &self.content.scenario);
        let mut working_state = self.state.clone();

        let outcome = match GameEngine::new(&mut working_state).execute(env, &action) {
            Ok(outcome) => outcome,
            Err(error) => {
                self.handle_execute_error(&action, &error);
                return;
            }
        };

        let root = ExecutedAction { action, outcome };
        let follow_ups = match self.hooks.execute_hooks(&root, &mut working_state, env) {
            Ok(follow_ups) => follow_ups,
            Err(error) => {
                self.handle_execute_error(&root.action, &error);
                return;
            }
        };

        self.state = working_state;
        self.publish_executed(&root, &follow_ups);
    }

    fn publish_executed(&self, root: &ExecutedAction, follow_ups: &[ExecutedAction]) {
        let from_tick = matches!(root.outcome.result, ActionResult::Ticked { .. });

        for executed in std::iter::once(root).chain(follow_ups) {
            match &executed.outcome.result {
                ActionResult::Ticked { remaining, .. } => {
                    self.event_bus
                        .publish(Event::Clock(ClockEvent::Ticked { remaining: *remaining }));
                }
                ActionResult::LoopCompleted(summary) => {
                    info!(
                        target: "runtime::worker",
                        completed_loop = summary.completed_loop,
                        evolved = summary.evolved.len(),
                        expired = from_tick,
                        "Loop completed"
                    );
                    if from_tick {
                        self.event_bus.publish(Event::Clock(ClockEvent::LoopExpired {
                            completed_loop: summary.completed_loop,
                        }));
                    }
                }
                _ => {}
            }

            self.event_bus
                .publish(Event::GameState(GameStateEvent::ActionExecuted {
                    action: executed.action.clone(),
                    result: executed.outcome.result.clone(),
                    state: Box::new(self.state.clone()),
                }));

            if let Some(notification) = &executed.outcome.notification {
                self.event_bus
                    .publish(Event::Notification(notification.clone()));
            }
        }
    }

    fn handle_execute_error(&self, action: &Action, error: &ExecuteError) {
        let phase = error.phase();
        let message = error.to_string();

        if error.is_rejection() {
            debug!(
                target: "runtime::worker",
                action = action.as_str(),
                phase = phase.as_str(),
                error = %message,
                "Action rejected during pre-validate"
            );
            self.event_bus
                .publish(Event::GameState(GameStateEvent::ActionRejected {
                    action: action.clone(),
                    phase,
                    error: message,
                }));
        } else {
            error!(
                target: "runtime::worker",
                action = action.as_str(),
                phase = phase.as_str(),
                error = %message,
                "Action execution failed"
            );
            self.event_bus
                .publish(Event::GameState(GameStateEvent::ActionFailed {
                    action: action.clone(),
                    phase,
                    error: message,
                }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::TransitionPhase;

    fn worker(state: GameState) -> (SimulationWorker, EventBus) {
        let (_tx, rx) = mpsc::channel(1);
        let bus = EventBus::new();
        let worker = SimulationWorker::new(
            state,
            GameContent::default(),
            rx,
            bus.clone(),
            HookRegistry::default(),
        );
        (worker, bus)
    }

    #[test]
    fn expiring_tick_commits_the_loop_reset() {
        let mut state = GameState::default();
        state.time_remaining = 1;
        let (mut worker, bus) = worker(state);
        let mut clock_rx = bus.subscribe(crate::Topic::Clock);

        worker.execute_action(Action::tick());

        assert_eq!(worker.state.current_loop, 2);
        assert_eq!(worker.state.time_remaining, 1800);
        assert!(matches!(
            clock_rx.try_recv().unwrap(),
            Event::Clock(ClockEvent::Ticked { remaining: 0 })
        ));
        assert!(matches!(
            clock_rx.try_recv().unwrap(),
            Event::Clock(ClockEvent::LoopExpired { completed_loop: 1 })
        ));
    }

    #[test]
    fn rejected_action_publishes_rejection_and_keeps_state() {
        let (mut worker, bus) = worker(GameState::default());
        let mut rx = bus.subscribe(crate::Topic::GameState);
        let before = worker.state.clone();

        worker.execute_action(Action::attack());

        assert_eq!(worker.state, before);
        match rx.try_recv().unwrap() {
            Event::GameState(GameStateEvent::ActionRejected { phase, .. }) => {
                assert_eq!(phase, TransitionPhase::PreValidate)
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn click_resolves_to_one_action_against_committed_state() {
        let (mut worker, bus) = worker(GameState::default());
        let mut rx = bus.subscribe(crate::Topic::GameState);

        let (reply_tx, mut reply_rx) = oneshot::channel();
        worker.handle_command(Command::ClickCell {
            position: Position::new(1, 7),
            reply: reply_tx,
        });
        let state = reply_rx.try_recv().unwrap();
        assert_eq!(state.selected_unit, Some(tactics_core::UnitId::PLAYER));
        match rx.try_recv().unwrap() {
            Event::GameState(GameStateEvent::ActionExecuted { action, .. }) => {
                assert_eq!(action.as_str(), "select")
            }
            other => panic!("unexpected event {other:?}"),
        }

        let (reply_tx, mut reply_rx) = oneshot::channel();
        worker.handle_command(Command::ClickCell {
            position: Position::new(2, 6),
            reply: reply_tx,
        });
        let state = reply_rx.try_recv().unwrap();
        assert_eq!(state.player.position, Position::new(2, 6));
        match rx.try_recv().unwrap() {
            Event::GameState(GameStateEvent::ActionExecuted { action, .. }) => {
                assert_eq!(action.as_str(), "move")
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }
}
