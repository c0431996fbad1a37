//! # Focusring Core Library
//!
//! This library provides the core logic for the focusring Pomodoro timer.
//! It implements a CLI-first philosophy: the engine is a plain state
//! machine with no terminal, sound, or clock access of its own, so any
//! front end (the bundled terminal UI, a test harness) can drive it.
//!
//! ## Architecture
//!
//! - **Session Engine**: A tick-counted state machine that requires the
//!   caller to invoke `tick()` once per second while running
//! - **Collaborators**: Clock, key-value store, chime, and renderer trait
//!   seams, injected at construction
//! - **Storage**: SQLite-based key-value persistence (daily completion
//!   record, mute flag) and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`PomodoroEngine`]: Core session state machine
//! - [`SessionPlan`]: The duration table the engine runs with
//! - [`Database`]: Key-value persistence
//! - [`Config`]: Application configuration management

pub mod config;
pub mod daily;
pub mod engine;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod traits;

pub use config::{Config, SessionsConfig};
pub use daily::DailyRecord;
pub use engine::{EngineState, PomodoroEngine};
pub use error::{ConfigError, CoreError, StorageError};
pub use events::{Event, Snapshot};
pub use session::{SessionPlan, SessionType};
pub use storage::Database;
pub use traits::{Chime, Clock, KeyValueStore, Renderer, SystemClock, TickHandle};
