//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the booking app.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining the two navigation tabs (Availability, Sessions)
//! - `BlazingPaddlesApp` - Main application state struct
//!
//! ## State Management:
//! The BlazingPaddlesApp struct holds all application state in a single
//! location: the backend handle, the projected calendar events, the loaded
//! pending sessions, week navigation state, modal state, and the user-facing
//! message slots. This follows the single source of truth principle for
//! state management.

use chrono::{Datelike, Duration, NaiveDate};
use log::info;

use crate::backend::domain::models::reservation::CalendarEvent;
use crate::backend::domain::models::session::SessionRecord;
use crate::backend::Backend;
use crate::ui::components::calendar_view::types::SelectedSlot;

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Availability,
    Sessions,
}

/// First day shown on launch; the week containing this date is the one the
/// reservation dataset covers.
const INITIAL_DATE: (i32, u32, u32) = (2025, 10, 1);

/// Main application struct for the egui booking app
pub struct BlazingPaddlesApp {
    pub backend: Backend,

    // Loaded data
    pub calendar_events: Vec<CalendarEvent>,
    pub sessions: Vec<SessionRecord>,

    // UI state
    pub loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub info_message: Option<String>,
    pub current_tab: MainTab,

    // Calendar state: Monday of the displayed week
    pub week_start: NaiveDate,

    // Modal state
    pub selected_slot: Option<SelectedSlot>,
    pub show_booking_modal: bool,
    pub modal_just_opened: bool,
}

impl BlazingPaddlesApp {
    /// Create a new BlazingPaddlesApp with default values
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing BlazingPaddlesApp");

        crate::ui::components::styling::setup_app_style(&cc.egui_ctx);

        let backend = Backend::new()?;

        let (year, month, day) = INITIAL_DATE;
        let initial_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow::anyhow!("invalid initial calendar date"))?;

        Ok(Self {
            backend,

            calendar_events: Vec::new(),
            sessions: Vec::new(),

            loading: true,
            error_message: None,
            success_message: None,
            info_message: None,
            current_tab: MainTab::Availability,

            week_start: week_start_for(initial_date),

            selected_slot: None,
            show_booking_modal: false,
            modal_just_opened: false,
        })
    }

    /// Navigate to the previous week
    pub fn navigate_to_previous_week(&mut self) {
        self.week_start = self.week_start - Duration::days(7);
        info!("📅 Navigated to week starting {}", self.week_start);
    }

    /// Navigate to the next week
    pub fn navigate_to_next_week(&mut self) {
        self.week_start = self.week_start + Duration::days(7);
        info!("📅 Navigated to week starting {}", self.week_start);
    }

    /// Caption for the displayed week, e.g. "Sep 29 - Oct 6, 2025".
    ///
    /// The right-hand label is the following Monday, matching the caption
    /// style of the availability page this view reproduces.
    pub fn week_range_label(&self) -> String {
        let end = self.week_start + Duration::days(7);
        format!(
            "{} - {}",
            self.week_start.format("%b %-d"),
            end.format("%b %-d, %Y")
        )
    }

    /// Clear any error, success, or info messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.info_message = None;
    }
}

/// Monday of the week containing `date`.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_is_the_containing_monday() {
        // 2025-10-01 is a Wednesday
        let wednesday = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 9, 29).unwrap();
        assert_eq!(week_start_for(wednesday), monday);
        // A Monday maps to itself
        assert_eq!(week_start_for(monday), monday);
        // A Sunday maps back to the preceding Monday
        let sunday = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        assert_eq!(week_start_for(sunday), monday);
    }
}
