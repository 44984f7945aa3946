//! # Calendar Rendering
//!
//! Draws the weekly availability grid: a time-label column plus seven day
//! columns, one row per 60-minute slot between 08:00 and 20:00.

use eframe::egui;

use super::types::{events_in_slot, week_days, DAY_END_HOUR, DAY_START_HOUR};
use crate::ui::app_state::BlazingPaddlesApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

const TIME_COLUMN_WIDTH: f32 = 64.0;
const SLOT_HEIGHT: f32 = 44.0;

impl BlazingPaddlesApp {
    /// Draw the availability calendar section
    pub fn draw_availability_section(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Court Bay Availability")
                            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Select an available time slot to book a court")
                            .color(colors::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
            });
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(20.0);
                    ui.vertical(|ui| {
                        self.draw_week_grid(ui);
                        ui.add_space(10.0);
                        draw_legend(ui);
                    });
                    ui.add_space(20.0);
                });
            });
    }

    /// Draw the header row and the slot rows of the displayed week
    fn draw_week_grid(&mut self, ui: &mut egui::Ui) {
        let days = week_days(self.week_start);
        let spacing = ui.spacing().item_spacing.x;
        let day_width =
            ((ui.available_width() - TIME_COLUMN_WIDTH - spacing * 7.0) / 7.0).max(80.0);

        // Header row: blank corner, then one label per day
        ui.horizontal(|ui| {
            let _ = ui.allocate_exact_size(
                egui::vec2(TIME_COLUMN_WIDTH, 28.0),
                egui::Sense::hover(),
            );
            for day in &days {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(day_width, 28.0),
                    egui::Sense::hover(),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    day.format("%a %-d").to_string(),
                    egui::FontId::new(14.0, egui::FontFamily::Proportional),
                    CURRENT_THEME.calendar.header_text,
                );
            }
        });

        // One row per 60-minute slot
        for hour in DAY_START_HOUR..DAY_END_HOUR {
            ui.horizontal(|ui| {
                let (time_rect, _) = ui.allocate_exact_size(
                    egui::vec2(TIME_COLUMN_WIDTH, SLOT_HEIGHT),
                    egui::Sense::hover(),
                );
                ui.painter().text(
                    egui::pos2(time_rect.right() - 8.0, time_rect.center().y),
                    egui::Align2::RIGHT_CENTER,
                    format!("{:02}:00", hour),
                    egui::FontId::new(13.0, egui::FontFamily::Proportional),
                    colors::TEXT_SECONDARY,
                );

                for day in &days {
                    self.draw_slot_cell(ui, *day, hour, day_width);
                }
            });
        }
    }

    /// Draw a single slot cell: gray block when reserved, clickable when not
    fn draw_slot_cell(
        &mut self,
        ui: &mut egui::Ui,
        date: chrono::NaiveDate,
        hour: u32,
        width: f32,
    ) {
        let slot_events = events_in_slot(&self.calendar_events, date, hour);

        if !slot_events.is_empty() {
            let labels: Vec<String> = slot_events.iter().map(|e| e.title.clone()).collect();
            let hover: Vec<String> = slot_events
                .iter()
                .map(|e| format!("{} ({})", e.title, e.time_range_display()))
                .collect();

            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(width, SLOT_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(
                rect,
                egui::Rounding::same(8.0),
                CURRENT_THEME.calendar.reserved_fill,
            );
            ui.painter().rect_stroke(
                rect,
                egui::Rounding::same(8.0),
                egui::Stroke::new(1.0, CURRENT_THEME.calendar.reserved_border),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                labels.join("\n"),
                egui::FontId::new(11.0, egui::FontFamily::Proportional),
                CURRENT_THEME.calendar.reserved_text,
            );
            response.on_hover_text(hover.join("\n"));
            return;
        }

        let cell = egui::Button::new("")
            .fill(CURRENT_THEME.calendar.available_fill)
            .stroke(egui::Stroke::new(1.0, CURRENT_THEME.calendar.grid_line))
            .rounding(egui::Rounding::same(8.0));

        if ui.add_sized(egui::vec2(width, SLOT_HEIGHT), cell).clicked() {
            self.handle_slot_selected(date, hour);
        }
    }
}

/// Legend row under the grid: reserved vs available swatches
fn draw_legend(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let (reserved_swatch, _) =
            ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
        ui.painter().rect_filled(
            reserved_swatch,
            egui::Rounding::same(4.0),
            CURRENT_THEME.calendar.reserved_fill,
        );
        ui.add(
            egui::Label::new(egui::RichText::new("Reserved").color(colors::TEXT_SECONDARY))
                .selectable(false),
        );

        ui.add_space(18.0);

        let (available_swatch, _) =
            ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
        ui.painter().rect_filled(
            available_swatch,
            egui::Rounding::same(4.0),
            CURRENT_THEME.calendar.available_fill,
        );
        ui.painter().rect_stroke(
            available_swatch,
            egui::Rounding::same(4.0),
            egui::Stroke::new(2.0, CURRENT_THEME.calendar.available_border),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new("Available - Click to Book").color(colors::TEXT_SECONDARY),
            )
            .selectable(false),
        );
    });
}
