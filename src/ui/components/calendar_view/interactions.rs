//! # Calendar Interactions
//!
//! Click handling for the weekly grid: selecting an available slot opens the
//! booking confirmation dialog. No conflict check happens here; a slot that
//! overlaps an existing reservation in another column, or a session already
//! pending, is still selectable.

use chrono::NaiveDate;
use log::info;

use super::types::SelectedSlot;
use crate::ui::app_state::BlazingPaddlesApp;

impl BlazingPaddlesApp {
    /// Handle a click on an available slot
    pub fn handle_slot_selected(&mut self, date: NaiveDate, hour: u32) {
        let slot = SelectedSlot::for_slot(date, hour);
        info!(
            "📅 Selected slot: {} on {} {}-{}",
            slot.court, slot.date, slot.start_time, slot.end_time
        );

        self.selected_slot = Some(slot);
        self.show_booking_modal = true;
        // Prevent backdrop click detection on the frame the modal opens
        self.modal_just_opened = true;
    }

    /// Close the booking dialog without touching any state
    pub fn close_booking_modal(&mut self) {
        self.show_booking_modal = false;
        self.selected_slot = None;
    }
}
