//! Collaborator traits for the session engine.
//!
//! The engine never touches a terminal, a sound device, or a clock
//! directly. Every side effect goes through one of these traits, so the
//! whole state machine runs under test with in-memory doubles.

use crate::error::StorageError;
use crate::events::Snapshot;

/// Opaque token identifying one active tick subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Source of the once-per-second cadence.
///
/// The engine subscribes when the countdown starts and cancels when it
/// stops; the driver owning the clock delivers `tick()` calls while a
/// subscription is active. The engine itself holds at most one
/// subscription at any time.
pub trait Clock {
    fn subscribe(&mut self) -> TickHandle;
    fn cancel(&mut self, handle: TickHandle);
}

/// Small string key-value persistence.
///
/// The engine stores exactly two keys here: the daily completion record
/// and the mute flag. Live countdown state is never persisted.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Audible session-end signal. Fire-and-forget; implementations must not
/// block the engine or surface errors.
pub trait Chime {
    fn play(&mut self);
}

/// Receives a fresh [`Snapshot`] after every state-mutating engine call.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Default [`Clock`]: hands out unique handles and leaves the actual
/// cadence to the caller's event loop.
#[derive(Debug, Default)]
pub struct SystemClock {
    next_handle: u64,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn subscribe(&mut self) -> TickHandle {
        self.next_handle += 1;
        TickHandle(self.next_handle)
    }

    fn cancel(&mut self, _handle: TickHandle) {}
}
