//! # Booking Confirmation Modal
//!
//! Shows a summary of the selected slot with the fixed credit cost.
//! Cancel changes nothing; confirm emits exactly one pending session into
//! the store. No validation happens before emission - no credit check, no
//! overlap check.

use eframe::egui;

use crate::backend::domain::models::session::RESERVATION_COST;
use crate::ui::app_state::BlazingPaddlesApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

const MODAL_SIZE: egui::Vec2 = egui::vec2(420.0, 360.0);

impl BlazingPaddlesApp {
    /// Render the booking confirmation modal if one is open
    pub fn render_booking_modal(&mut self, ctx: &egui::Context) {
        if !self.show_booking_modal {
            return;
        }
        let slot = match &self.selected_slot {
            Some(slot) => slot.clone(),
            None => return,
        };

        let mut confirm_clicked = false;
        let mut cancel_clicked = false;

        egui::Area::new(egui::Id::new("booking_modal_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dark semi-transparent backdrop
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(colors::CARD_BACKGROUND)
                            .stroke(egui::Stroke::new(2.0, colors::ACCENT))
                            .rounding(egui::Rounding::same(15.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(MODAL_SIZE);
                                ui.set_max_size(MODAL_SIZE);

                                ui.vertical_centered(|ui| {
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new("Book Court")
                                            .font(egui::FontId::new(
                                                24.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(colors::TEXT_PRIMARY),
                                    );
                                    ui.add_space(15.0);

                                    // Court and credit cost summary box
                                    egui::Frame::none()
                                        .fill(CURRENT_THEME.calendar.available_hover_fill)
                                        .rounding(egui::Rounding::same(10.0))
                                        .inner_margin(egui::Margin::same(14.0))
                                        .show(ui, |ui| {
                                            ui.horizontal(|ui| {
                                                summary_entry(ui, "Court", &slot.court, colors::ACCENT);
                                                ui.add_space(40.0);
                                                summary_entry(
                                                    ui,
                                                    "Credits",
                                                    &RESERVATION_COST.to_string(),
                                                    CURRENT_THEME.credits.used,
                                                );
                                            });
                                        });

                                    ui.add_space(15.0);
                                    summary_entry(ui, "Date", &slot.date_display(), colors::TEXT_PRIMARY);
                                    ui.add_space(10.0);
                                    ui.horizontal(|ui| {
                                        ui.add_space(60.0);
                                        summary_entry(
                                            ui,
                                            "Start Time",
                                            &slot.start_time,
                                            colors::TEXT_PRIMARY,
                                        );
                                        ui.add_space(40.0);
                                        summary_entry(
                                            ui,
                                            "End Time",
                                            &slot.end_time,
                                            colors::TEXT_PRIMARY,
                                        );
                                    });

                                    ui.add_space(25.0);

                                    ui.horizontal(|ui| {
                                        ui.add_space(40.0);

                                        let cancel_button = egui::Button::new(
                                            egui::RichText::new("Cancel")
                                                .color(colors::TEXT_SECONDARY),
                                        )
                                        .fill(colors::INACTIVE_BACKGROUND)
                                        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                                        .rounding(egui::Rounding::same(10.0))
                                        .min_size(egui::vec2(140.0, 40.0));

                                        if ui.add(cancel_button).clicked() {
                                            cancel_clicked = true;
                                        }

                                        ui.add_space(20.0);

                                        let confirm_button = egui::Button::new(
                                            egui::RichText::new("Add to Sessions")
                                                .color(colors::TEXT_WHITE),
                                        )
                                        .fill(colors::ACCENT)
                                        .rounding(egui::Rounding::same(10.0))
                                        .min_size(egui::vec2(160.0, 40.0));

                                        if ui.add(confirm_button).clicked() {
                                            confirm_clicked = true;
                                        }
                                    });

                                    ui.add_space(10.0);
                                });
                            });
                    });
                });

                // Backdrop click closes the dialog, but only after the modal
                // has been open for at least one frame
                if !self.modal_just_opened && ui.ctx().input(|i| i.pointer.any_click()) {
                    if let Some(pointer_pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
                        let modal_rect = egui::Rect::from_center_size(
                            ui.ctx().screen_rect().center(),
                            MODAL_SIZE + egui::vec2(40.0, 40.0),
                        );
                        if !modal_rect.contains(pointer_pos) {
                            cancel_clicked = true;
                        }
                    }
                }
                if self.modal_just_opened {
                    self.modal_just_opened = false;
                }
            });

        if confirm_clicked {
            self.handle_confirm_booking();
        } else if cancel_clicked {
            self.close_booking_modal();
        }
    }

    /// Append the selected slot as a pending session and report the result
    fn handle_confirm_booking(&mut self) {
        let Some(slot) = self.selected_slot.clone() else {
            return;
        };

        match self.backend.session_service.add_session(
            &slot.court,
            slot.date,
            &slot.start_time,
            &slot.end_time,
        ) {
            Ok(_) => {
                self.load_sessions();
                self.success_message =
                    Some("Session added! View it in \"My Sessions\"".to_string());
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to add session: {}", e));
            }
        }

        self.close_booking_modal();
    }
}

/// Small label-over-value pair used throughout the summary
fn summary_entry(ui: &mut egui::Ui, label: &str, value: &str, value_color: egui::Color32) {
    ui.vertical(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(label)
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_SECONDARY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(value)
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(value_color),
            )
            .selectable(false),
        );
    });
}
