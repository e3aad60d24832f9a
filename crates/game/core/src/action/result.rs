//! Per-action results and player-facing notifications.

use crate::config::GameConfig;
use crate::evolution::EvolutionRecord;
use crate::state::{KnowledgeId, Position, UnitId};

/// Outcome of a resolved attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub target: UnitId,
    pub target_name: String,
    pub damage: u32,
    pub hp_before: u32,
    pub hp_after: u32,
    pub defeated: bool,
    /// Knowledge recorded for a lethal blow.
    pub knowledge: Option<KnowledgeId>,
}

/// Summary of a loop boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopSummary {
    pub completed_loop: u32,
    pub next_loop: u32,
    pub evolved: Vec<EvolutionRecord>,
    pub knowledge: KnowledgeId,
}

/// Typed result of a successfully executed action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Selected { unit: UnitId },
    Moved { from: Position, to: Position },
    Attacked(AttackOutcome),
    TurnEnded { next_turn: u32 },
    Ticked { remaining: u32, expired: bool },
    LoopCompleted(LoopSummary),
}

impl ActionResult {
    /// Notification shown to the player, if this result warrants one.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::Selected { .. } | Self::Ticked { .. } => None,
            Self::Moved { to, .. } => Some(Notification::new(
                "Unit Moved",
                format!("Moved to {to}"),
            )),
            Self::Attacked(outcome) => Some(Notification::new(
                "Attack!",
                format!(
                    "Attacked {} for {} damage",
                    outcome.target_name, outcome.damage
                ),
            )),
            Self::TurnEnded { .. } => Some(Notification::new("Turn Ended", "Enemy phase begins...")),
            Self::LoopCompleted(summary) => Some(Notification::new(
                "Loop Reset",
                format!(
                    "Starting Loop #{}. Enemies have evolved based on your actions.",
                    summary.next_loop
                ),
            )),
        }
    }

    /// True when a tick drained the countdown to zero.
    pub fn is_expired_tick(&self) -> bool {
        matches!(self, Self::Ticked { expired: true, .. })
    }
}

/// Advisory toast-style message. Carries no state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }

    /// Greeting shown when a session starts.
    pub fn loop_initiated(config: &GameConfig) -> Self {
        Self::new(
            "Loop Initiated",
            format!(
                "The {}-minute time loop has begun. Use your knowledge wisely.",
                config.loop_duration / 60
            ),
        )
    }
}
