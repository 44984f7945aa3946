//! # Session Repository
//!
//! JSON-file implementation of `SessionStorage`. The whole sequence lives in
//! one slot; every write rewrites the file. Reads recover to the empty
//! sequence when the slot is absent or does not parse, so a corrupted file
//! never takes the sessions page down.

use anyhow::Result;
use log::warn;
use std::fs;
use std::io::ErrorKind;

use super::connection::JsonConnection;
use crate::backend::domain::models::session::SessionRecord;
use crate::backend::storage::SessionStorage;

/// JSON-backed session repository
#[derive(Debug, Clone)]
pub struct SessionRepository {
    connection: JsonConnection,
}

impl SessionRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Read the persisted sequence, defaulting to empty on absence or parse
    /// failure.
    fn read_slot(&self) -> Result<Vec<SessionRecord>> {
        let file_path = self.connection.sessions_file_path();

        let contents = match fs::read_to_string(&file_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                warn!(
                    "Persisted sessions at {} did not parse ({}), treating as empty",
                    file_path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Rewrite the whole slot with `sessions`.
    fn write_slot(&self, sessions: &[SessionRecord]) -> Result<()> {
        let file_path = self.connection.sessions_file_path();
        let contents = serde_json::to_string(sessions)?;
        fs::write(&file_path, contents)?;
        Ok(())
    }
}

impl SessionStorage for SessionRepository {
    fn read_sessions(&self) -> Result<Vec<SessionRecord>> {
        self.read_slot()
    }

    fn append_session(&self, record: &SessionRecord) -> Result<()> {
        let mut sessions = self.read_slot()?;
        sessions.push(record.clone());
        self.write_slot(&sessions)
    }

    fn remove_session(&self, index: usize) -> Result<bool> {
        let mut sessions = self.read_slot()?;
        if index >= sessions.len() {
            return Ok(false);
        }
        sessions.remove(index);
        self.write_slot(&sessions)?;
        Ok(true)
    }

    fn clear_sessions(&self) -> Result<()> {
        self.write_slot(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestEnvironment;

    fn session(court: &str, start: &str, end: &str) -> SessionRecord {
        SessionRecord {
            court: court.to_string(),
            date: "2025-10-06".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            credits: 10,
        }
    }

    fn setup_test_repo() -> Result<(SessionRepository, TestEnvironment)> {
        let env = TestEnvironment::new()?;
        let repo = SessionRepository::new(env.connection.clone());
        Ok((repo, env))
    }

    #[test]
    fn absent_slot_reads_as_empty() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;
        assert!(repo.read_sessions()?.is_empty());
        Ok(())
    }

    #[test]
    fn append_then_read_round_trips() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        repo.append_session(&session("Court A", "14:00", "15:00"))?;
        repo.append_session(&session("Court B", "15:00", "16:00"))?;

        let sessions = repo.read_sessions()?;
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].court, "Court A");
        assert_eq!(sessions[1].court, "Court B");
        Ok(())
    }

    #[test]
    fn persisted_layout_uses_camel_case_field_names() -> Result<()> {
        let (repo, env) = setup_test_repo()?;
        repo.append_session(&session("Court A", "14:00", "15:00"))?;

        let raw = std::fs::read_to_string(env.connection.sessions_file_path())?;
        assert!(raw.contains("\"startTime\""));
        assert!(raw.contains("\"endTime\""));
        assert!(!raw.contains("\"start_time\""));
        Ok(())
    }

    #[test]
    fn malformed_slot_reads_as_empty_and_recovers_on_write() -> Result<()> {
        let (repo, env) = setup_test_repo()?;
        std::fs::write(env.connection.sessions_file_path(), "{not json")?;

        assert!(repo.read_sessions()?.is_empty());

        // The next append rewrites the slot with valid content
        repo.append_session(&session("Court C", "10:00", "11:00"))?;
        let sessions = repo.read_sessions()?;
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].court, "Court C");
        Ok(())
    }

    #[test]
    fn remove_drops_only_the_addressed_position() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;
        repo.append_session(&session("Court A", "08:00", "09:00"))?;
        repo.append_session(&session("Court B", "09:00", "10:00"))?;
        repo.append_session(&session("Court C", "10:00", "11:00"))?;

        assert!(repo.remove_session(0)?);

        let sessions = repo.read_sessions()?;
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].court, "Court B");
        assert_eq!(sessions[1].court, "Court C");
        Ok(())
    }

    #[test]
    fn remove_out_of_range_returns_false_and_keeps_the_slot() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;
        repo.append_session(&session("Court A", "08:00", "09:00"))?;

        assert!(!repo.remove_session(3)?);
        assert_eq!(repo.read_sessions()?.len(), 1);
        Ok(())
    }

    #[test]
    fn clear_empties_the_slot() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;
        repo.append_session(&session("Court A", "08:00", "09:00"))?;
        repo.append_session(&session("Court B", "09:00", "10:00"))?;

        repo.clear_sessions()?;

        assert!(repo.read_sessions()?.is_empty());
        Ok(())
    }
}
