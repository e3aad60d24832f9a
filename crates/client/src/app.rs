//! Interactive shell driving the runtime through a [`RuntimeHandle`].
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use tactics_core::{GameConfig, GameState, Position};
use tactics_runtime::{ClockEvent, Event, GameStateEvent, RuntimeHandle, Topic};

use crate::render;
use crate::shell::{HELP, ShellCommand};

/// What the shell does after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct ShellApp {
    handle: RuntimeHandle,
    config: GameConfig,
}

impl ShellApp {
    pub fn new(handle: RuntimeHandle, config: GameConfig) -> Self {
        Self { handle, config }
    }

    /// Runs one command and returns the text to show.
    pub async fn execute(&self, command: ShellCommand) -> Result<Flow> {
        debug!(target: "client", ?command, "Executing shell command");

        let state = match command {
            ShellCommand::Select(unit) => self.handle.select_unit(unit).await?,
            ShellCommand::Click(Position { x, y }) => self.handle.click_cell(x, y).await?,
            ShellCommand::Move(Position { x, y }) => self.handle.move_unit(x, y).await?,
            ShellCommand::Attack => self.handle.attack().await?,
            ShellCommand::EndTurn => self.handle.end_turn().await?,
            ShellCommand::CompleteLoop => self.handle.complete_loop().await?,
            ShellCommand::State => self.handle.query_state().await?,
            ShellCommand::Json => {
                let state = self.handle.query_state().await?;
                let json = serde_json::to_string_pretty(&state)
                    .context("failed to serialize game state")?;
                return Ok(Flow::Continue(json));
            }
            ShellCommand::Knowledge => {
                let state = self.handle.query_state().await?;
                return Ok(Flow::Continue(render::knowledge(&state)));
            }
            ShellCommand::Help => return Ok(Flow::Continue(HELP.to_owned())),
            ShellCommand::Quit => return Ok(Flow::Quit),
        };

        Ok(Flow::Continue(self.view(&state)))
    }

    fn view(&self, state: &GameState) -> String {
        render::full(state, &self.config)
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(&self) -> Result<()> {
        let printer = spawn_event_printer(&self.handle);
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let initial = self.handle.query_state().await?;
        write_block(&mut stdout, &self.view(&initial)).await?;
        write_block(&mut stdout, "Type 'help' for commands.").await?;

        while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
            if line.trim().is_empty() {
                continue;
            }

            let output = match line.parse::<ShellCommand>() {
                Ok(command) => match self.execute(command).await? {
                    Flow::Continue(output) => output,
                    Flow::Quit => break,
                },
                Err(err) => err.to_string(),
            };
            write_block(&mut stdout, &output).await?;
        }

        printer.abort();
        Ok(())
    }
}

async fn write_block(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}

/// Prints notifications, rejections and loop expiry as they arrive.
fn spawn_event_printer(handle: &RuntimeHandle) -> JoinHandle<()> {
    let mut topics = handle.subscribe_multiple(&[Topic::Notification, Topic::Clock, Topic::GameState]);
    let (Some(mut notifications), Some(mut clock), Some(mut game)) = (
        topics.remove(&Topic::Notification),
        topics.remove(&Topic::Clock),
        topics.remove(&Topic::GameState),
    ) else {
        return tokio::spawn(async {});
    };

    tokio::spawn(async move {
        loop {
            let received = tokio::select! {
                event = notifications.recv() => event,
                event = clock.recv() => event,
                event = game.recv() => event,
            };

            match received {
                Ok(event) => {
                    if let Some(line) = describe(&event) {
                        println!("{line}");
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(target: "client", skipped, "Event printer lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

/// Shell line for an event, if it is worth showing.
pub fn describe(event: &Event) -> Option<String> {
    match event {
        Event::Notification(notification) => Some(render::notification(notification)),
        Event::Clock(ClockEvent::LoopExpired { completed_loop }) => {
            Some(format!("!! Time is up. Loop {completed_loop} has ended."))
        }
        Event::Clock(ClockEvent::Ticked { .. }) => None,
        Event::GameState(GameStateEvent::ActionRejected { action, error, .. }) if !action.is_system() => {
            Some(format!("-- {} ignored: {error}", action.as_str()))
        }
        Event::GameState(_) => None,
    }
}
