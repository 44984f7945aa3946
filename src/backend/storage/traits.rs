//! # Storage Traits
//!
//! The storage abstraction for the pending-session slot. The domain layer
//! only ever sees this trait, so the file-backed store can be swapped for an
//! in-memory fake in tests.

use anyhow::Result;

use crate::backend::domain::models::session::SessionRecord;

/// Interface for the single persisted sequence of pending sessions.
///
/// The sequence is ordered and position-addressed; there is no per-record
/// identity. Writers rewrite the whole slot, last writer wins, and no
/// locking is attempted between processes.
pub trait SessionStorage: Send + Sync {
    /// Read the full persisted sequence.
    ///
    /// An absent or malformed slot reads as the empty sequence, never as an
    /// error.
    fn read_sessions(&self) -> Result<Vec<SessionRecord>>;

    /// Append one record to the end of the sequence.
    fn append_session(&self, record: &SessionRecord) -> Result<()>;

    /// Remove the record at `index`.
    ///
    /// Returns true if the index was in range and the record was removed,
    /// false otherwise.
    fn remove_session(&self, index: usize) -> Result<bool>;

    /// Clear the sequence to empty.
    fn clear_sessions(&self) -> Result<()>;
}
