//! Session engine implementation.
//!
//! The engine is a tick-counted state machine. It does not use internal
//! threads or read the wall clock for the countdown - the caller is
//! responsible for calling `tick()` once per second while running.
//!
//! ## Session Transitions
//!
//! ```text
//! Pomodoro -> ShortBreak -> Pomodoro -> ... -> Pomodoro -> LongBreak -> Pomodoro
//! ```
//!
//! Every fourth completed pomodoro (per the plan's cycle length) earns the
//! long break; every other one earns a short break.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::new(plan, clock, store, chime, renderer);
//! engine.start();
//! // Once per second while running:
//! engine.tick(); // Returns Some(Event) when the session completes
//! ```

use chrono::Utc;

use crate::daily::{self, DailyRecord};
use crate::events::{Event, Snapshot};
use crate::session::{SessionPlan, SessionType};
use crate::traits::{Chime, Clock, KeyValueStore, Renderer, TickHandle};

/// The engine's mutable state. Read access goes through
/// [`PomodoroEngine::state`]; all mutation goes through engine commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineState {
    pub session_type: SessionType,
    /// Work intervals completed since construction. Drives the long-break
    /// cycle and is never reset.
    pub pomodoro_count: u32,
    /// Work intervals completed today (UTC), seeded from the store.
    pub completed_today: u32,
    pub time_remaining: u32,
    pub total_time: u32,
    pub is_running: bool,
    pub is_muted: bool,
}

/// Core session engine.
///
/// Owns its collaborators behind trait objects: the clock subscription,
/// the key-value store, the chime, and the renderer. Every state-mutating
/// command pushes a fresh [`Snapshot`] to the renderer before returning.
pub struct PomodoroEngine {
    state: EngineState,
    plan: SessionPlan,
    /// Start the next session immediately when one expires.
    auto_start_next: bool,
    /// The single active clock subscription, present exactly while running.
    tick_subscription: Option<TickHandle>,
    clock: Box<dyn Clock>,
    store: Box<dyn KeyValueStore>,
    chime: Box<dyn Chime>,
    renderer: Box<dyn Renderer>,
}

impl PomodoroEngine {
    /// Create an engine idle at the start of a full pomodoro.
    ///
    /// Seeds `completed_today` and the mute flag from the store. A record
    /// stamped with another date, or unreadable data of any kind, falls
    /// back to the defaults; construction itself never fails.
    pub fn new(
        plan: SessionPlan,
        clock: Box<dyn Clock>,
        store: Box<dyn KeyValueStore>,
        chime: Box<dyn Chime>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        let completed_today = DailyRecord::load_count(store.as_ref(), daily::today_utc());
        let is_muted = daily::load_muted(store.as_ref());
        let total = plan.duration_secs(SessionType::Pomodoro);
        let mut engine = Self {
            state: EngineState {
                session_type: SessionType::Pomodoro,
                pomodoro_count: 0,
                completed_today,
                time_remaining: total,
                total_time: total,
                is_running: false,
                is_muted,
            },
            plan,
            auto_start_next: false,
            tick_subscription: None,
            clock,
            store,
            chime,
            renderer,
        };
        engine.render();
        engine
    }

    /// Builder-style switch for starting the next session automatically
    /// when one expires.
    pub fn with_auto_start(mut self, enabled: bool) -> Self {
        self.auto_start_next = enabled;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    /// Build the view the renderer and the one-shot commands consume.
    pub fn snapshot(&self) -> Snapshot {
        let cycle = self.plan.pomodoros_per_cycle();
        Snapshot {
            session_type: self.state.session_type,
            time_remaining: self.state.time_remaining,
            total_time: self.state.total_time,
            is_running: self.state.is_running,
            completed_today: self.state.completed_today,
            is_muted: self.state.is_muted,
            cycle_position: self.state.pomodoro_count % cycle + 1,
            cycle_length: cycle,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin (or resume) the countdown. No-op while already running, so a
    /// second call can never create a duplicate clock subscription.
    pub fn start(&mut self) -> Option<Event> {
        if self.state.is_running {
            return None; // Already running.
        }
        self.state.is_running = true;
        self.tick_subscription = Some(self.clock.subscribe());
        self.render();
        self.validate_invariants();
        Some(Event::SessionStarted {
            session_type: self.state.session_type,
            duration_secs: self.state.total_time,
            at: Utc::now(),
        })
    }

    /// Stop the countdown, keeping the remaining time. Idempotent; always
    /// releases the clock subscription.
    pub fn pause(&mut self) -> Option<Event> {
        if let Some(handle) = self.tick_subscription.take() {
            self.clock.cancel(handle);
        }
        if !self.state.is_running {
            return None;
        }
        self.state.is_running = false;
        self.render();
        self.validate_invariants();
        Some(Event::SessionPaused {
            session_type: self.state.session_type,
            time_remaining: self.state.time_remaining,
            at: Utc::now(),
        })
    }

    /// Advance the countdown by one second. Ignored while not running.
    ///
    /// Returns `Some(Event::SessionCompleted)` on the tick that exhausts
    /// the session: the engine pauses, chimes unless muted, and queues the
    /// next session at full duration (started immediately under
    /// auto-start).
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        if self.state.time_remaining > 0 {
            self.state.time_remaining -= 1;
        }
        if self.state.time_remaining > 0 {
            self.render();
            self.validate_invariants();
            return None;
        }

        // The countdown hit zero on this tick.
        self.pause();
        if !self.state.is_muted {
            self.chime.play();
        }
        let finished = self.state.session_type;
        self.advance();
        let event = Event::SessionCompleted {
            session_type: finished,
            next: self.state.session_type,
            completed_today: self.state.completed_today,
            at: Utc::now(),
        };
        if self.auto_start_next {
            self.start();
        }
        self.validate_invariants();
        Some(event)
    }

    /// Stop and refill the current session to its full duration. The
    /// session type and all counters stay as they are.
    pub fn reset(&mut self) -> Option<Event> {
        self.pause();
        self.state.time_remaining = self.plan.duration_secs(self.state.session_type);
        self.state.total_time = self.state.time_remaining;
        self.render();
        self.validate_invariants();
        Some(Event::TimerReset {
            session_type: self.state.session_type,
            at: Utc::now(),
        })
    }

    /// Jump to the next session without waiting for expiry. Runs the same
    /// transition as natural expiry (a skipped pomodoro still counts), but
    /// never chimes.
    pub fn skip(&mut self) -> Option<Event> {
        self.pause();
        let from = self.state.session_type;
        self.advance();
        self.validate_invariants();
        Some(Event::SessionSkipped {
            from,
            to: self.state.session_type,
            at: Utc::now(),
        })
    }

    /// Flip the mute flag and persist it.
    pub fn toggle_mute(&mut self) -> Option<Event> {
        self.state.is_muted = !self.state.is_muted;
        daily::save_muted(self.store.as_mut(), self.state.is_muted);
        self.render();
        self.validate_invariants();
        Some(Event::MuteToggled {
            muted: self.state.is_muted,
            at: Utc::now(),
        })
    }

    /// Space-bar behavior: start when stopped, pause when running.
    pub fn toggle_start_pause(&mut self) -> Option<Event> {
        if self.state.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// The transition shared by expiry and skip. Completing a pomodoro
    /// bumps both counters and persists today's total; breaks of either
    /// kind lead back to a pomodoro.
    fn advance(&mut self) {
        let next = match self.state.session_type {
            SessionType::Pomodoro => {
                self.state.completed_today += 1;
                DailyRecord::save(
                    self.store.as_mut(),
                    daily::today_utc(),
                    self.state.completed_today,
                );
                self.state.pomodoro_count += 1;
                if self.state.pomodoro_count % self.plan.pomodoros_per_cycle() == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Pomodoro,
        };
        self.state.session_type = next;
        self.state.total_time = self.plan.duration_secs(next);
        self.state.time_remaining = self.state.total_time;
        self.render();
    }

    fn render(&mut self) {
        let snapshot = self.snapshot();
        self.renderer.render(&snapshot);
    }

    fn validate_invariants(&self) {
        debug_assert!(self.state.time_remaining <= self.state.total_time);
        debug_assert!(self.state.total_time > 0);
        debug_assert_eq!(
            self.state.total_time,
            self.plan.duration_secs(self.state.session_type)
        );
        debug_assert_eq!(self.state.is_running, self.tick_subscription.is_some());
    }
}
