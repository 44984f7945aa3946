//! # Tab Manager Module
//!
//! Routes the main content area to the view matching the selected tab.
//!
//! ## Tab Flow:
//! - MainTab::Availability -> Weekly availability calendar
//! - MainTab::Sessions -> Pending sessions and credit balance

use eframe::egui;

use crate::ui::app_state::{BlazingPaddlesApp, MainTab};

impl BlazingPaddlesApp {
    /// Render the main content area
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            match self.current_tab {
                MainTab::Availability => {
                    self.draw_availability_section(ui);
                }
                MainTab::Sessions => {
                    self.draw_sessions_section(ui);
                }
            }
            ui.add_space(20.0);
        });
    }
}
