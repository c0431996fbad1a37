//! Session kinds and the duration table that drives the engine.

use serde::{Deserialize, Serialize};

/// The three kinds of session the timer cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    /// Human-readable name shown in headings and notifications.
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Pomodoro => "Pomodoro",
            SessionType::ShortBreak => "Short Break",
            SessionType::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, SessionType::Pomodoro)
    }
}

/// Duration table injected into the engine at construction.
///
/// Durations are in whole seconds and always at least 1; zero values
/// are bumped at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPlan {
    pomodoro_secs: u32,
    short_break_secs: u32,
    long_break_secs: u32,
    pomodoros_per_cycle: u32,
}

impl SessionPlan {
    pub fn new(
        pomodoro_secs: u32,
        short_break_secs: u32,
        long_break_secs: u32,
        pomodoros_per_cycle: u32,
    ) -> Self {
        Self {
            pomodoro_secs: pomodoro_secs.max(1),
            short_break_secs: short_break_secs.max(1),
            long_break_secs: long_break_secs.max(1),
            pomodoros_per_cycle: pomodoros_per_cycle.max(1),
        }
    }

    /// The standard 25/5/15 plan with a long break every fourth pomodoro.
    pub fn classic() -> Self {
        Self::new(25 * 60, 5 * 60, 15 * 60, 4)
    }

    /// Five-second sessions for demos and manual testing.
    pub fn fast() -> Self {
        Self::new(5, 5, 5, 4)
    }

    pub fn duration_secs(&self, kind: SessionType) -> u32 {
        match kind {
            SessionType::Pomodoro => self.pomodoro_secs,
            SessionType::ShortBreak => self.short_break_secs,
            SessionType::LongBreak => self.long_break_secs,
        }
    }

    /// How many pomodoros complete before a long break is scheduled.
    pub fn pomodoros_per_cycle(&self) -> u32 {
        self.pomodoros_per_cycle
    }
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self::classic()
    }
}
