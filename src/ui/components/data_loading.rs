//! # Data Loading Module
//!
//! Centralizes the backend reads that populate app state: the one-time
//! calendar projection and the persisted pending-session list. Every
//! user action that changes the persisted slot goes back through
//! `load_sessions` so the UI always mirrors storage.

use log::info;

use crate::ui::app_state::BlazingPaddlesApp;

impl BlazingPaddlesApp {
    /// Load initial data
    pub fn load_initial_data(&mut self) {
        info!("📊 Loading initial data");

        match self.backend.reservation_service.calendar_events() {
            Ok(events) => {
                info!("📅 Projected {} calendar events", events.len());
                self.calendar_events = events;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load reservations: {}", e));
            }
        }

        self.load_sessions();
        self.loading = false;
    }

    /// Reload the pending-session list from storage
    pub fn load_sessions(&mut self) {
        match self.backend.session_service.list_sessions() {
            Ok(sessions) => {
                info!("📋 Loaded {} pending session(s)", sessions.len());
                self.sessions = sessions;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load sessions: {}", e));
                self.sessions = Vec::new();
            }
        }
    }
}
