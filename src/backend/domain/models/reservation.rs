//! # Reservation Models
//!
//! Types for the fixed availability dataset and its calendar projection.
//!
//! A `ReservationRecord` keeps the raw string fields exactly as the dataset
//! declares them; parsing happens once, in the event projection, and any
//! malformed entry aborts projection with a `ProjectionError` instead of
//! producing an invalid instant.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// A single entry in the hardcoded reservation dataset.
///
/// Records are defined once at load time and never created, updated, or
/// deleted while the app runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRecord {
    pub court: &'static str,
    /// Calendar date in ISO "YYYY-MM-DD" form
    pub date: &'static str,
    /// Wall-clock "HH:MM" start of the reservation
    pub start_time: &'static str,
    /// Wall-clock "HH:MM" end of the reservation
    pub end_time: &'static str,
    pub reserved_by: &'static str,
}

/// A calendar-displayable event derived from one `ReservationRecord`.
///
/// Recomputed from the dataset; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub court: String,
    pub is_reserved: bool,
}

impl CalendarEvent {
    /// "HH:MM - HH:MM" range for compact display inside a grid cell.
    pub fn time_range_display(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Raised when a dataset entry carries an unparsable date or time field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("invalid reservation date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid reservation time '{0}' (expected HH:MM)")]
    InvalidTime(String),
}

impl ReservationRecord {
    /// Project this record into its calendar event.
    ///
    /// Fails fast on malformed date/time strings; the dataset is constant,
    /// so a failure here is a defect in the dataset itself.
    pub fn to_calendar_event(&self) -> Result<CalendarEvent, ProjectionError> {
        let date = NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
            .map_err(|_| ProjectionError::InvalidDate(self.date.to_string()))?;
        let start = NaiveTime::parse_from_str(self.start_time, "%H:%M")
            .map_err(|_| ProjectionError::InvalidTime(self.start_time.to_string()))?;
        let end = NaiveTime::parse_from_str(self.end_time, "%H:%M")
            .map_err(|_| ProjectionError::InvalidTime(self.end_time.to_string()))?;

        Ok(CalendarEvent {
            title: format!("Court Reserved - {}", self.court),
            start: date.and_time(start),
            end: date.and_time(end),
            court: self.court.to_string(),
            is_reserved: true,
        })
    }
}
