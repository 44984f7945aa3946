//! In-memory `SessionStorage` fake for tests.

use anyhow::Result;
use std::sync::Mutex;

use super::traits::SessionStorage;
use crate::backend::domain::models::session::SessionRecord;

/// Keeps the session sequence in a `Mutex<Vec<_>>`, no disk involved.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<Vec<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStore {
    fn read_sessions(&self) -> Result<Vec<SessionRecord>> {
        Ok(self.sessions.lock().unwrap().clone())
    }

    fn append_session(&self, record: &SessionRecord) -> Result<()> {
        self.sessions.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn remove_session(&self, index: usize) -> Result<bool> {
        let mut sessions = self.sessions.lock().unwrap();
        if index >= sessions.len() {
            return Ok(false);
        }
        sessions.remove(index);
        Ok(true)
    }

    fn clear_sessions(&self) -> Result<()> {
        self.sessions.lock().unwrap().clear();
        Ok(())
    }
}
