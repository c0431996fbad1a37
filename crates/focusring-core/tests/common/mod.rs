//! In-memory collaborator doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use focusring_core::{Chime, Clock, KeyValueStore, Renderer, Snapshot, StorageError, TickHandle};

/// Key-value store backed by a shared map, so a test can keep a handle
/// to the data the engine writes (or pre-seed it before construction).
#[derive(Default, Clone)]
pub struct SharedStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default, Debug)]
pub struct ClockStats {
    pub subscribes: u32,
    pub cancels: u32,
    pub active: u32,
}

/// Clock that records subscription traffic instead of keeping time.
#[derive(Default, Clone)]
pub struct CountingClock {
    pub stats: Rc<RefCell<ClockStats>>,
}

impl Clock for CountingClock {
    fn subscribe(&mut self) -> TickHandle {
        let mut stats = self.stats.borrow_mut();
        stats.subscribes += 1;
        stats.active += 1;
        TickHandle(u64::from(stats.subscribes))
    }

    fn cancel(&mut self, _handle: TickHandle) {
        let mut stats = self.stats.borrow_mut();
        stats.cancels += 1;
        stats.active -= 1;
    }
}

#[derive(Default, Clone)]
pub struct CountingChime {
    pub plays: Rc<RefCell<u32>>,
}

impl Chime for CountingChime {
    fn play(&mut self) {
        *self.plays.borrow_mut() += 1;
    }
}

/// Renderer that logs every frame it is handed.
#[derive(Default, Clone)]
pub struct FrameLog {
    pub frames: Rc<RefCell<Vec<Snapshot>>>,
}

impl Renderer for FrameLog {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames.borrow_mut().push(snapshot.clone());
    }
}
