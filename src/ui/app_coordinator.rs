//! # App Coordinator Module
//!
//! This module contains the main application coordination logic: the
//! `eframe::App` update loop and the top-level layout.
//!
//! ## Application Flow:
//! 1. Set up global styling
//! 2. Load data on first run
//! 3. Render header (title + navigation tabs)
//! 4. Render tab-specific subheader controls (week navigation)
//! 5. Render main content for the active tab
//! 6. Render the booking modal if one is open

use eframe::egui;

use crate::ui::app_state::{BlazingPaddlesApp, MainTab};
use crate::ui::components::styling::setup_app_style;
use crate::ui::components::theme::colors;

impl eframe::App for BlazingPaddlesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_app_style(ctx);

        // Load initial data on first run
        if self.loading {
            self.load_initial_data();
        }

        // Keep repainting while a message is on screen so it can be noticed
        if self.error_message.is_some()
            || self.success_message.is_some()
            || self.info_message.is_some()
        {
            ctx.request_repaint_after(std::time::Duration::from_secs(5));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.available_rect_before_wrap();

            // Three-layer layout: header, subheader, content
            let header_height = 64.0;
            let subheader_height = 56.0;

            let header_rect = egui::Rect::from_min_size(
                full_rect.min,
                egui::vec2(full_rect.width(), header_height),
            );

            let subheader_rect = egui::Rect::from_min_size(
                egui::pos2(full_rect.min.x, full_rect.min.y + header_height),
                egui::vec2(full_rect.width(), subheader_height),
            );

            let content_y = full_rect.min.y + header_height + subheader_height;
            let content_rect = egui::Rect::from_min_size(
                egui::pos2(full_rect.min.x, content_y),
                egui::vec2(full_rect.width(), full_rect.height() - header_height - subheader_height),
            );

            ui.allocate_ui_at_rect(header_rect, |ui| {
                self.render_header(ui);
            });

            ui.allocate_ui_at_rect(subheader_rect, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(20.0);
                    self.draw_tab_specific_controls(ui);
                });
            });

            ui.allocate_ui_at_rect(content_rect, |ui| {
                self.render_messages(ui);
                self.render_main_content(ui);
            });
        });

        // Render the booking modal above everything else
        self.render_booking_modal(ctx);
    }
}

impl BlazingPaddlesApp {
    /// Draw tab-specific controls for the subheader
    fn draw_tab_specific_controls(&mut self, ui: &mut egui::Ui) {
        match self.current_tab {
            MainTab::Availability => {
                self.draw_week_navigation_controls(ui);
            }
            MainTab::Sessions => {
                // The sessions tab has no subheader controls
            }
        }
    }

    /// Draw the previous/next week controls with the week-range caption
    fn draw_week_navigation_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let prev_button = egui::Button::new(
                egui::RichText::new("< Previous Week").color(colors::TEXT_WHITE),
            )
            .fill(colors::ACCENT)
            .rounding(egui::Rounding::same(6.0))
            .min_size(egui::vec2(130.0, 32.0));

            if ui.add(prev_button).clicked() {
                self.navigate_to_previous_week();
            }

            ui.add_space(15.0);

            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Current Week")
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(colors::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(self.week_range_label())
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
            });

            ui.add_space(15.0);

            let next_button = egui::Button::new(
                egui::RichText::new("Next Week >").color(colors::TEXT_WHITE),
            )
            .fill(colors::ACCENT)
            .rounding(egui::Rounding::same(6.0))
            .min_size(egui::vec2(130.0, 32.0));

            if ui.add(next_button).clicked() {
                self.navigate_to_next_week();
            }
        });
    }
}
