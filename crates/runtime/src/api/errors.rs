//! Unified error types surfaced by the runtime API.
//!
//! Rule violations never show up here: a rejected action is a silent no-op
//! reported on the event bus. These errors cover the plumbing around the
//! simulation worker.
use thiserror::Error;
use tokio::sync::oneshot;

use tactics_core::ScenarioError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires game content to be configured before building")]
    MissingContent,

    #[error("scenario does not fit the game configuration")]
    InvalidScenario(#[source] ScenarioError),
}
