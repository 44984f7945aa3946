//! # Reservation Service
//!
//! Owns the fixed reservation dataset and projects it into calendar events.
//!
//! The dataset is the only source of availability information: a slot is
//! "reserved" exactly when one of these records covers it. Nothing mutates
//! the dataset at runtime and nothing cross-checks it against the pending
//! sessions a user builds up.

use super::models::reservation::{CalendarEvent, ProjectionError, ReservationRecord};

/// Hardcoded reservations, one week of court bookings across Courts A-D.
const RESERVATIONS: &[ReservationRecord] = &[
    ReservationRecord { court: "Court A", date: "2025-09-29", start_time: "09:00", end_time: "10:00", reserved_by: "John Doe" },
    ReservationRecord { court: "Court B", date: "2025-09-29", start_time: "11:00", end_time: "12:00", reserved_by: "Emily Chen" },
    ReservationRecord { court: "Court C", date: "2025-09-29", start_time: "15:00", end_time: "16:00", reserved_by: "Carlos Ramirez" },
    ReservationRecord { court: "Court D", date: "2025-09-29", start_time: "17:00", end_time: "18:00", reserved_by: "Sarah Johnson" },
    ReservationRecord { court: "Court A", date: "2025-09-30", start_time: "08:00", end_time: "09:00", reserved_by: "David Kim" },
    ReservationRecord { court: "Court B", date: "2025-09-30", start_time: "12:00", end_time: "13:00", reserved_by: "Jessica Lee" },
    ReservationRecord { court: "Court C", date: "2025-09-30", start_time: "14:00", end_time: "15:00", reserved_by: "Michael Brown" },
    ReservationRecord { court: "Court D", date: "2025-09-30", start_time: "18:00", end_time: "19:00", reserved_by: "Alicia Wong" },
    ReservationRecord { court: "Court A", date: "2025-10-01", start_time: "10:00", end_time: "11:00", reserved_by: "Robert Wilson" },
    ReservationRecord { court: "Court B", date: "2025-10-01", start_time: "13:00", end_time: "14:00", reserved_by: "Emily Chen" },
    ReservationRecord { court: "Court C", date: "2025-10-01", start_time: "16:00", end_time: "17:00", reserved_by: "John Doe" },
    ReservationRecord { court: "Court D", date: "2025-10-01", start_time: "19:00", end_time: "20:00", reserved_by: "David Kim" },
    ReservationRecord { court: "Court A", date: "2025-10-02", start_time: "08:00", end_time: "09:00", reserved_by: "Jessica Lee" },
    ReservationRecord { court: "Court B", date: "2025-10-02", start_time: "11:00", end_time: "12:00", reserved_by: "Michael Brown" },
    ReservationRecord { court: "Court C", date: "2025-10-02", start_time: "14:00", end_time: "15:00", reserved_by: "Sarah Johnson" },
    ReservationRecord { court: "Court D", date: "2025-10-02", start_time: "17:00", end_time: "18:00", reserved_by: "Carlos Ramirez" },
    ReservationRecord { court: "Court A", date: "2025-10-03", start_time: "09:00", end_time: "10:00", reserved_by: "Emily Chen" },
    ReservationRecord { court: "Court B", date: "2025-10-03", start_time: "12:00", end_time: "13:00", reserved_by: "Robert Wilson" },
    ReservationRecord { court: "Court C", date: "2025-10-03", start_time: "15:00", end_time: "16:00", reserved_by: "David Kim" },
    ReservationRecord { court: "Court D", date: "2025-10-03", start_time: "18:00", end_time: "19:00", reserved_by: "Jessica Lee" },
    ReservationRecord { court: "Court A", date: "2025-10-04", start_time: "10:00", end_time: "11:00", reserved_by: "Michael Brown" },
    ReservationRecord { court: "Court B", date: "2025-10-04", start_time: "13:00", end_time: "14:00", reserved_by: "Sarah Johnson" },
    ReservationRecord { court: "Court C", date: "2025-10-04", start_time: "16:00", end_time: "17:00", reserved_by: "John Doe" },
    ReservationRecord { court: "Court D", date: "2025-10-04", start_time: "19:00", end_time: "20:00", reserved_by: "Alicia Wong" },
    ReservationRecord { court: "Court A", date: "2025-10-05", start_time: "08:00", end_time: "09:00", reserved_by: "Jessica Lee" },
    ReservationRecord { court: "Court B", date: "2025-10-05", start_time: "11:00", end_time: "12:00", reserved_by: "Carlos Ramirez" },
    ReservationRecord { court: "Court C", date: "2025-10-05", start_time: "14:00", end_time: "15:00", reserved_by: "Emily Chen" },
    ReservationRecord { court: "Court D", date: "2025-10-05", start_time: "17:00", end_time: "18:00", reserved_by: "Robert Wilson" },
];

/// Read-only access to the reservation dataset and its calendar projection.
#[derive(Debug, Clone, Default)]
pub struct ReservationService;

impl ReservationService {
    pub fn new() -> Self {
        Self
    }

    /// The raw dataset records.
    pub fn reservations(&self) -> &'static [ReservationRecord] {
        RESERVATIONS
    }

    /// Project every dataset record into a calendar event, one per record.
    ///
    /// Fails on the first malformed record instead of silently skipping it.
    pub fn calendar_events(&self) -> Result<Vec<CalendarEvent>, ProjectionError> {
        RESERVATIONS
            .iter()
            .map(ReservationRecord::to_calendar_event)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn projects_exactly_one_event_per_record() {
        let service = ReservationService::new();
        let events = service.calendar_events().unwrap();
        assert_eq!(events.len(), service.reservations().len());
        assert!(events.iter().all(|e| e.is_reserved));
    }

    #[test]
    fn event_instants_match_parsed_record_fields() {
        let service = ReservationService::new();
        let events = service.calendar_events().unwrap();

        let first = &events[0];
        let expected_date = NaiveDate::from_ymd_opt(2025, 9, 29).unwrap();
        assert_eq!(first.start, expected_date.and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(first.end, expected_date.and_hms_opt(10, 0, 0).unwrap());
        assert_eq!(first.court, "Court A");
    }

    #[test]
    fn event_titles_name_the_reserved_court() {
        let service = ReservationService::new();
        let events = service.calendar_events().unwrap();
        assert_eq!(events[0].title, "Court Reserved - Court A");
        assert_eq!(events[1].title, "Court Reserved - Court B");
    }

    #[test]
    fn malformed_date_fails_projection() {
        let record = ReservationRecord {
            court: "Court A",
            date: "29-09-2025",
            start_time: "09:00",
            end_time: "10:00",
            reserved_by: "John Doe",
        };
        assert_eq!(
            record.to_calendar_event(),
            Err(ProjectionError::InvalidDate("29-09-2025".to_string()))
        );
    }

    #[test]
    fn malformed_time_fails_projection() {
        let record = ReservationRecord {
            court: "Court A",
            date: "2025-09-29",
            start_time: "9am",
            end_time: "10:00",
            reserved_by: "John Doe",
        };
        assert_eq!(
            record.to_calendar_event(),
            Err(ProjectionError::InvalidTime("9am".to_string()))
        );
    }

    #[test]
    fn dataset_spans_the_expected_week() {
        let service = ReservationService::new();
        let events = service.calendar_events().unwrap();
        let first_day = NaiveDate::from_ymd_opt(2025, 9, 29).unwrap();
        let last_day = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        assert!(events
            .iter()
            .all(|e| e.start.date() >= first_day && e.start.date() <= last_day));
    }
}
