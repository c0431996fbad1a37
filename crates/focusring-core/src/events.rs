//! Engine events and the render snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionType;

/// Events emitted by the session engine.
///
/// Serialized with a `type` tag so downstream consumers can match on the
/// event kind without knowing the full enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Countdown started (or resumed) for the current session.
    SessionStarted {
        session_type: SessionType,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// Countdown stopped with time still remaining.
    SessionPaused {
        session_type: SessionType,
        time_remaining: u32,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero and the engine advanced.
    SessionCompleted {
        session_type: SessionType,
        next: SessionType,
        completed_today: u32,
        at: DateTime<Utc>,
    },
    /// The user jumped to the next session early.
    SessionSkipped {
        from: SessionType,
        to: SessionType,
        at: DateTime<Utc>,
    },
    /// The current session was refilled to its full duration.
    TimerReset {
        session_type: SessionType,
        at: DateTime<Utc>,
    },
    /// The session-end sound was muted or unmuted.
    MuteToggled { muted: bool, at: DateTime<Utc> },
}

/// Immutable view of the engine state, handed to the [`Renderer`] after
/// every mutation and printed by the one-shot CLI commands.
///
/// [`Renderer`]: crate::traits::Renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub session_type: SessionType,
    pub time_remaining: u32,
    pub total_time: u32,
    pub is_running: bool,
    pub completed_today: u32,
    pub is_muted: bool,
    /// 1-based position of the current (or upcoming) pomodoro within the
    /// long-break cycle.
    pub cycle_position: u32,
    pub cycle_length: u32,
}

impl Snapshot {
    /// Fraction of the session still remaining, in `0.0..=1.0`.
    ///
    /// `total_time` is always positive, so the division never produces
    /// a NaN.
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.time_remaining) / f64::from(self.total_time)
    }
}
