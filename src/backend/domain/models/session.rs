//! # Session Models
//!
//! The persisted pending-session record and the credit math over a list of
//! them. Field names in the persisted slot are camelCase (`startTime`,
//! `endTime`); the serde rename keeps the on-disk layout stable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed credit cost of one booking. Not configurable.
pub const RESERVATION_COST: u32 = 10;

/// Fixed credit budget shown on the sessions page.
pub const CREDIT_BUDGET: u32 = 100;

/// A pending reservation intent, persisted in the session slot.
///
/// No invariants are enforced between records: overlapping a dataset
/// reservation or another pending session is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub court: String,
    /// ISO "YYYY-MM-DD" date string
    pub date: String,
    /// Wall-clock "HH:MM" start
    pub start_time: String,
    /// Wall-clock "HH:MM" end
    pub end_time: String,
    /// Credit cost, fixed at `RESERVATION_COST` per booking
    pub credits: u32,
}

impl SessionRecord {
    /// Abbreviated date for the sessions list, e.g. "Mon, Oct 6, 2025".
    ///
    /// Falls back to the raw stored string if it does not parse; stored
    /// records are never rejected for display.
    pub fn date_display(&self) -> String {
        match NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date.format("%a, %b %-d, %Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }

    /// "HH:MM - HH:MM" range for the sessions list.
    pub fn time_range_display(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Credit totals derived from the pending-session list.
///
/// `remaining` is plain subtraction and may go negative; nothing blocks a
/// booking past the budget, the UI only warns below `LOW_CREDIT_THRESHOLD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditSummary {
    pub budget: u32,
    pub used: u32,
    pub remaining: i64,
}

/// Remaining-credit level below which the sessions page shows a warning.
pub const LOW_CREDIT_THRESHOLD: i64 = 20;

impl CreditSummary {
    pub fn for_sessions(sessions: &[SessionRecord]) -> Self {
        let used: u32 = sessions.iter().map(|s| s.credits).sum();
        Self {
            budget: CREDIT_BUDGET,
            used,
            remaining: i64::from(CREDIT_BUDGET) - i64::from(used),
        }
    }

    pub fn is_running_low(&self) -> bool {
        self.remaining < LOW_CREDIT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(credits: u32) -> SessionRecord {
        SessionRecord {
            court: "Court A".to_string(),
            date: "2025-10-06".to_string(),
            start_time: "14:00".to_string(),
            end_time: "15:00".to_string(),
            credits,
        }
    }

    #[test]
    fn credit_summary_is_budget_minus_used() {
        let sessions = vec![session(10), session(10), session(10)];
        let summary = CreditSummary::for_sessions(&sessions);
        assert_eq!(summary.budget, 100);
        assert_eq!(summary.used, 30);
        assert_eq!(summary.remaining, 70);
        assert!(!summary.is_running_low());
    }

    #[test]
    fn credit_summary_allows_negative_remaining() {
        // Eleven bookings overdraw the budget; that is a displayed state,
        // not an error.
        let sessions: Vec<_> = (0..11).map(|_| session(RESERVATION_COST)).collect();
        let summary = CreditSummary::for_sessions(&sessions);
        assert_eq!(summary.used, 110);
        assert_eq!(summary.remaining, -10);
        assert!(summary.is_running_low());
    }

    #[test]
    fn credit_summary_of_empty_list_is_full_budget() {
        let summary = CreditSummary::for_sessions(&[]);
        assert_eq!(summary.used, 0);
        assert_eq!(summary.remaining, 100);
    }

    #[test]
    fn low_credit_warning_starts_below_twenty_remaining() {
        let eight = vec![session(10); 8];
        assert!(!CreditSummary::for_sessions(&eight).is_running_low());
        let nine = vec![session(10); 9];
        assert!(CreditSummary::for_sessions(&nine).is_running_low());
    }

    #[test]
    fn session_record_serializes_with_camel_case_time_fields() {
        let json = serde_json::to_string(&session(10)).unwrap();
        assert!(json.contains("\"startTime\":\"14:00\""));
        assert!(json.contains("\"endTime\":\"15:00\""));
        assert!(json.contains("\"credits\":10"));
    }

    #[test]
    fn date_display_uses_abbreviated_form() {
        assert_eq!(session(10).date_display(), "Mon, Oct 6, 2025");
    }
}
