//! # Session Service
//!
//! Pending-session operations over the storage trait: list, append, remove
//! by position, and the simulated "book everything" finalize step.
//!
//! The service performs no validation beyond what storage reports. There is
//! no credit-sufficiency check and no overlap check; the persisted sequence
//! is taken as-is.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use super::models::session::{CreditSummary, SessionRecord, RESERVATION_COST};
use crate::backend::storage::SessionStorage;

/// Result of finalizing the pending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// Nothing was pending; the persisted sequence is untouched.
    NothingPending,
    /// All pending sessions were "booked" (a local simulation) and cleared.
    Booked { count: usize, credits_total: u32 },
}

/// Service managing the client-local pending-session ledger.
pub struct SessionService {
    storage: Arc<dyn SessionStorage>,
}

impl SessionService {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Read the full pending sequence, oldest first.
    pub fn list_sessions(&self) -> Result<Vec<SessionRecord>> {
        self.storage.read_sessions()
    }

    /// Append one pending session for the given slot at the fixed cost.
    pub fn add_session(
        &self,
        court: &str,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
    ) -> Result<SessionRecord> {
        let record = SessionRecord {
            court: court.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            credits: RESERVATION_COST,
        };
        self.storage.append_session(&record)?;
        info!(
            "📅 Added pending session: {} on {} {}-{}",
            record.court, record.date, record.start_time, record.end_time
        );
        Ok(record)
    }

    /// Remove the pending session at `index`.
    ///
    /// Returns false when the index is out of range; the sequence is left
    /// unchanged in that case.
    pub fn remove_session(&self, index: usize) -> Result<bool> {
        let removed = self.storage.remove_session(index)?;
        if removed {
            info!("🗑 Removed pending session at position {}", index);
        }
        Ok(removed)
    }

    /// Finalize ("book") every pending session.
    ///
    /// Purely local: no booking system is contacted. A non-empty list is
    /// cleared and reported; an empty list is a no-op notice.
    pub fn finalize_sessions(&self) -> Result<FinalizeOutcome> {
        let sessions = self.storage.read_sessions()?;
        if sessions.is_empty() {
            return Ok(FinalizeOutcome::NothingPending);
        }

        let count = sessions.len();
        let credits_total = CreditSummary::for_sessions(&sessions).used;
        self.storage.clear_sessions()?;
        info!(
            "✅ Booked {} session(s) for {} credits, pending list cleared",
            count, credits_total
        );
        Ok(FinalizeOutcome::Booked {
            count,
            credits_total,
        })
    }

    /// Credit totals for the current pending sequence.
    pub fn credit_summary(&self) -> Result<CreditSummary> {
        Ok(CreditSummary::for_sessions(&self.storage.read_sessions()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::MemorySessionStore;

    fn setup_service() -> SessionService {
        SessionService::new(Arc::new(MemorySessionStore::new()))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn adding_a_session_appends_one_record_at_fixed_cost() -> Result<()> {
        let service = setup_service();

        let record = service.add_session("Court A", date(2025, 10, 6), "14:00", "15:00")?;
        assert_eq!(record.credits, 10);

        let sessions = service.list_sessions()?;
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].court, "Court A");
        assert_eq!(sessions[0].date, "2025-10-06");
        assert_eq!(sessions[0].start_time, "14:00");
        assert_eq!(sessions[0].end_time, "15:00");

        // Credits used rises by exactly one booking cost
        assert_eq!(service.credit_summary()?.used, 10);
        Ok(())
    }

    #[test]
    fn removing_a_position_preserves_the_order_of_the_rest() -> Result<()> {
        let service = setup_service();
        service.add_session("Court A", date(2025, 10, 6), "08:00", "09:00")?;
        service.add_session("Court B", date(2025, 10, 6), "09:00", "10:00")?;
        service.add_session("Court C", date(2025, 10, 6), "10:00", "11:00")?;

        assert!(service.remove_session(1)?);

        let sessions = service.list_sessions()?;
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].court, "Court A");
        assert_eq!(sessions[1].court, "Court C");
        Ok(())
    }

    #[test]
    fn removing_out_of_range_is_a_no_op() -> Result<()> {
        let service = setup_service();
        service.add_session("Court A", date(2025, 10, 6), "08:00", "09:00")?;

        assert!(!service.remove_session(5)?);
        assert_eq!(service.list_sessions()?.len(), 1);
        Ok(())
    }

    #[test]
    fn finalizing_an_empty_list_changes_nothing() -> Result<()> {
        let service = setup_service();
        assert_eq!(service.finalize_sessions()?, FinalizeOutcome::NothingPending);
        assert!(service.list_sessions()?.is_empty());
        assert_eq!(service.credit_summary()?.used, 0);
        Ok(())
    }

    #[test]
    fn finalizing_pending_sessions_reports_totals_and_clears() -> Result<()> {
        let service = setup_service();
        service.add_session("Court A", date(2025, 10, 6), "08:00", "09:00")?;
        service.add_session("Court B", date(2025, 10, 7), "09:00", "10:00")?;
        service.add_session("Court C", date(2025, 10, 8), "10:00", "11:00")?;

        let outcome = service.finalize_sessions()?;
        assert_eq!(
            outcome,
            FinalizeOutcome::Booked {
                count: 3,
                credits_total: 30
            }
        );

        // Next load sees an empty sequence and a reset credit count
        assert!(service.list_sessions()?.is_empty());
        assert_eq!(service.credit_summary()?.used, 0);
        assert_eq!(service.credit_summary()?.remaining, 100);
        Ok(())
    }

    #[test]
    fn nothing_blocks_overdrawing_the_budget() -> Result<()> {
        let service = setup_service();
        for hour in 0..11 {
            let start = format!("{:02}:00", 8 + hour % 12);
            let end = format!("{:02}:00", 9 + hour % 12);
            service.add_session("Court A", date(2025, 10, 6), &start, &end)?;
        }

        let summary = service.credit_summary()?;
        assert_eq!(summary.used, 110);
        assert_eq!(summary.remaining, -10);
        Ok(())
    }
}
