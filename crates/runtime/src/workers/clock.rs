//! Clock worker that turns wall time into `Tick` commands.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use tactics_core::Action;

use super::Command;

/// Sends one `Tick` per period until shutdown or until the simulation
/// worker's command channel closes.
///
/// Holds only a weak sender so it never keeps the simulation worker alive.
pub struct ClockWorker {
    command_tx: mpsc::WeakSender<Command>,
    period: Duration,
    shutdown_rx: oneshot::Receiver<()>,
}

impl ClockWorker {
    pub fn new(
        command_tx: mpsc::WeakSender<Command>,
        period: Duration,
        shutdown_rx: oneshot::Receiver<()>,
    ) -> Self {
        Self {
            command_tx,
            period,
            shutdown_rx,
        }
    }

    pub async fn run(mut self) {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut self.shutdown_rx => break,
                _ = interval.tick() => {
                    let Some(command_tx) = self.command_tx.upgrade() else {
                        break;
                    };

                    trace!(target: "runtime::clock", "Tick");
                    let command = Command::Execute {
                        action: Action::tick(),
                        reply: None,
                    };
                    if command_tx.send(command).await.is_err() {
                        break;
                    }
                }
            }
        }

        debug!(target: "runtime::clock", "Clock worker stopped");
    }
}
