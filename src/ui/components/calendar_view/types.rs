//! # Calendar View Types
//!
//! Slot geometry of the weekly grid and the transient selection produced by
//! clicking an available slot.

use chrono::{Duration, NaiveDate};

use crate::backend::domain::models::reservation::CalendarEvent;

/// First bookable hour of the day (inclusive).
pub const DAY_START_HOUR: u32 = 8;

/// Hour the grid ends at (exclusive); the last slot is 19:00-20:00.
pub const DAY_END_HOUR: u32 = 20;

/// Court used for every slot selection.
///
/// TODO: slot selection ignores which day column was clicked, so every
/// booking is written against this court. Kept as-is deliberately; see the
/// pinning test below before changing it.
pub const DEFAULT_COURT: &str = "Court A";

/// The seven dates of the displayed week, Monday first.
pub fn week_days(week_start: NaiveDate) -> [NaiveDate; 7] {
    let mut days = [week_start; 7];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = week_start + Duration::days(offset as i64);
    }
    days
}

/// Events overlapping the 60-minute slot starting at `hour` on `date`.
///
/// Overlap is half-open: an event ending exactly at the slot start does not
/// occupy the slot.
pub fn events_in_slot<'a>(
    events: &'a [CalendarEvent],
    date: NaiveDate,
    hour: u32,
) -> Vec<&'a CalendarEvent> {
    let slot_start = match date.and_hms_opt(hour, 0, 0) {
        Some(t) => t,
        None => return Vec::new(),
    };
    let slot_end = slot_start + Duration::hours(1);

    events
        .iter()
        .filter(|e| e.start < slot_end && e.end > slot_start)
        .collect()
}

/// Transient UI state for a clicked empty slot.
///
/// Created when the user selects an available region; replaced by the next
/// selection or dropped when the dialog closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSlot {
    pub court: String,
    pub date: NaiveDate,
    /// "HH:MM" start of the selected slot
    pub start_time: String,
    /// "HH:MM" end of the selected slot
    pub end_time: String,
}

impl SelectedSlot {
    /// Build the selection for the slot starting at `hour` on `date`.
    pub fn for_slot(date: NaiveDate, hour: u32) -> Self {
        Self {
            court: DEFAULT_COURT.to_string(),
            date,
            start_time: format!("{:02}:00", hour),
            end_time: format!("{:02}:00", hour + 1),
        }
    }

    /// Long-form date for the confirmation dialog, e.g.
    /// "Monday, October 6, 2025".
    pub fn date_display(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::ReservationService;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_days_are_seven_consecutive_dates() {
        let monday = date(2025, 9, 29);
        let days = week_days(monday);
        assert_eq!(days[0], monday);
        assert_eq!(days[6], date(2025, 10, 5));
    }

    #[test]
    fn slot_overlap_is_half_open() {
        let events = ReservationService::new().calendar_events().unwrap();

        // Court A is reserved 09:00-10:00 on Sep 29
        let sep29 = date(2025, 9, 29);
        assert_eq!(events_in_slot(&events, sep29, 9).len(), 1);
        // The reservation does not bleed into the 10:00 slot
        assert!(events_in_slot(&events, sep29, 10).is_empty());
        // Nor into the 08:00 slot before it
        assert!(events_in_slot(&events, sep29, 8).is_empty());
    }

    #[test]
    fn unreserved_days_have_no_slot_events() {
        let events = ReservationService::new().calendar_events().unwrap();
        let far_future = date(2026, 3, 2);
        for hour in DAY_START_HOUR..DAY_END_HOUR {
            assert!(events_in_slot(&events, far_future, hour).is_empty());
        }
    }

    #[test]
    fn selection_covers_one_hour_with_minute_level_times() {
        let slot = SelectedSlot::for_slot(date(2025, 10, 6), 14);
        assert_eq!(slot.date, date(2025, 10, 6));
        assert_eq!(slot.start_time, "14:00");
        assert_eq!(slot.end_time, "15:00");
    }

    // Known-incorrect behavior, kept on purpose: the selection ignores the
    // clicked column entirely and always books the default court. Do not
    // "fix" this without changing the documented behavior.
    #[test]
    fn selected_slot_always_uses_default_court() {
        // Oct 1 has Courts A-D reserved at various hours, yet a selection
        // on that day still defaults to Court A.
        let slot = SelectedSlot::for_slot(date(2025, 10, 1), 9);
        assert_eq!(slot.court, "Court A");
    }

    #[test]
    fn dialog_date_uses_long_form() {
        let slot = SelectedSlot::for_slot(date(2025, 10, 6), 14);
        assert_eq!(slot.date_display(), "Monday, October 6, 2025");
    }
}
