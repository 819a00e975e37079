//! Notification payloads

use gs_core::RoundResult;
use serde::Serialize;

/// Severity of a player-facing log message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum LogKind {
    #[default]
    Info = 0,
    Error = 1,
    Success = 2,
}

impl LogKind {
    /// Build an entry of this kind
    pub fn entry(self, message: impl Into<String>) -> LogEntry {
        LogEntry {
            kind: self,
            message: message.into(),
        }
    }
}

/// Log topic payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub message: String,
}

/// Round lifecycle signal, enough to mount/unmount and animate slot sprites
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RoundSignal {
    /// Bet accepted and outcome drawn
    RoundStarted { round_id: u64, bet: f64 },
    /// Previous round's symbols begin fading
    FadeOutStarted,
    /// Previous round's symbols are gone
    FadeOutCompleted,
    /// Slot reveal animation began
    SpawnStarted { slot: usize },
    /// Slot reveal animation finished
    SpawnCompleted { slot: usize },
    /// Every slot has revealed
    RevealCompleted { round_id: u64 },
    /// Play the win cue
    SuccessCue,
    /// Round settled
    Settled(RoundResult),
    /// Idle wave is running
    WaveStarted,
    /// Idle wave stopped and disposed
    WaveStopped,
}

impl RoundSignal {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            RoundSignal::RoundStarted { .. } => "round_started",
            RoundSignal::FadeOutStarted => "fade_out_started",
            RoundSignal::FadeOutCompleted => "fade_out_completed",
            RoundSignal::SpawnStarted { .. } => "spawn_started",
            RoundSignal::SpawnCompleted { .. } => "spawn_completed",
            RoundSignal::RevealCompleted { .. } => "reveal_completed",
            RoundSignal::SuccessCue => "success_cue",
            RoundSignal::Settled(_) => "settled",
            RoundSignal::WaveStarted => "wave_started",
            RoundSignal::WaveStopped => "wave_stopped",
        }
    }
}
