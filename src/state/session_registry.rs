//! In-memory session registry

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::timer::TimerEngine;

/// A timer behind its own lock, so operations on one session are serialized
pub type SharedTimer = Arc<Mutex<TimerEngine>>;

/// Maps session ids to timers. No persistence and no eviction.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, SharedTimer>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a timer under a fresh id
    pub fn insert(&self, timer: TimerEngine) -> Result<Uuid, String> {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock()
            .map_err(|e| format!("Failed to lock session registry: {}", e))?;

        sessions.insert(id, Arc::new(Mutex::new(timer)));
        info!("Registered session {} ({} total)", id, sessions.len());
        Ok(id)
    }

    /// Look up a session. The registry lock is released before returning.
    pub fn get(&self, id: &Uuid) -> Result<Option<SharedTimer>, String> {
        self.sessions.lock()
            .map(|sessions| sessions.get(id).cloned())
            .map_err(|e| format!("Failed to lock session registry: {}", e))
    }

    /// Number of sessions. A poisoned registry is logged and counted as empty.
    pub fn len(&self) -> usize {
        match self.sessions.lock() {
            Ok(sessions) => sessions.len(),
            Err(e) => {
                warn!("Failed to lock session registry: {}", e);
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerStatus;

    #[test]
    fn insert_and_get() {
        let registry = SessionRegistry::new();
        assert!(registry.is_empty());

        let mut timer = TimerEngine::new();
        timer.start(1_000, 0).unwrap();
        let id = registry.insert(timer).unwrap();

        let shared = registry.get(&id).unwrap().expect("session exists");
        assert_eq!(shared.lock().unwrap().status(), TimerStatus::Running);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_id_is_none() {
        let registry = SessionRegistry::new();
        assert!(registry.get(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn ids_are_unique_and_sessions_independent() {
        let registry = SessionRegistry::new();
        let a = registry.insert(TimerEngine::new()).unwrap();
        let b = registry.insert(TimerEngine::new()).unwrap();
        assert_ne!(a, b);

        registry.get(&a).unwrap().unwrap().lock().unwrap().start(500, 0).unwrap();
        let b_status = registry.get(&b).unwrap().unwrap().lock().unwrap().status();
        assert_eq!(b_status, TimerStatus::Idle);
    }

    #[test]
    fn poisoned_registry_reports_errors() {
        let registry = Arc::new(SessionRegistry::new());
        registry.insert(TimerEngine::new()).unwrap();

        let poisoner = Arc::clone(&registry);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.sessions.lock().unwrap();
            panic!("poison the registry lock");
        })
        .join();

        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
        assert!(registry.get(&Uuid::new_v4()).is_err());
        assert!(registry.insert(TimerEngine::new()).is_err());
    }
}
