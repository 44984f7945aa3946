//! # Sessions View
//!
//! The "My Sessions" page: credit balance card, the pending reservation
//! list with per-row removal, and the simulated "book everything" action.
//!
//! Credit math is plain subtraction against the fixed budget; the page
//! displays a negative remainder rather than blocking it, and only warns
//! visually when the remainder runs low.

use eframe::egui;
use log::info;

use crate::backend::domain::models::session::CreditSummary;
use crate::backend::domain::FinalizeOutcome;
use crate::ui::app_state::BlazingPaddlesApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl BlazingPaddlesApp {
    /// Draw the sessions section
    pub fn draw_sessions_section(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("My Sessions")
                            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(
                            "Review your court reservations and credit balance",
                        )
                        .color(colors::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
            });
        });
        ui.add_space(10.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(20.0);
                    ui.vertical(|ui| {
                        self.draw_credit_balance_card(ui);
                        ui.add_space(16.0);
                        self.draw_pending_sessions_list(ui);
                        ui.add_space(16.0);
                        self.draw_book_button(ui);
                    });
                    ui.add_space(20.0);
                });
            });
    }

    /// Credit balance card: budget, used, and remaining tiles
    fn draw_credit_balance_card(&self, ui: &mut egui::Ui) {
        let summary = CreditSummary::for_sessions(&self.sessions);

        egui::Frame::none()
            .fill(colors::ACCENT)
            .rounding(egui::Rounding::same(14.0))
            .inner_margin(egui::Margin::same(18.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Credit Balance")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_WHITE),
                    )
                    .selectable(false),
                );
                ui.add_space(10.0);

                let remaining_color = if summary.is_running_low() {
                    CURRENT_THEME.credits.remaining_low
                } else {
                    CURRENT_THEME.credits.remaining_ok
                };

                ui.horizontal(|ui| {
                    credit_tile(ui, "Credit Budget", &summary.budget.to_string(), colors::TEXT_WHITE);
                    ui.add_space(24.0);
                    credit_tile(
                        ui,
                        "Credits Used",
                        &summary.used.to_string(),
                        CURRENT_THEME.credits.badge_background,
                    );
                    ui.add_space(24.0);
                    credit_tile(
                        ui,
                        "Credits Remaining",
                        &summary.remaining.to_string(),
                        remaining_color,
                    );
                });
            });
    }

    /// List of pending reservations with per-row remove buttons
    fn draw_pending_sessions_list(&mut self, ui: &mut egui::Ui) {
        let mut remove_clicked: Option<usize> = None;

        egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
            .rounding(egui::Rounding::same(14.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Pending Reservations")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.separator();

                if self.sessions.is_empty() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("No sessions yet")
                                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                    .strong()
                                    .color(colors::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(
                                    "Go to Court Availability to book your first session",
                                )
                                .color(colors::TEXT_SECONDARY),
                            )
                            .selectable(false),
                        );
                    });
                    ui.add_space(20.0);
                    return;
                }

                let sessions = self.sessions.clone();
                for (index, session) in sessions.iter().enumerate() {
                    if index > 0 {
                        ui.separator();
                    }
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(&session.court)
                                            .font(egui::FontId::new(
                                                16.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(colors::TEXT_PRIMARY),
                                    )
                                    .selectable(false),
                                );
                                ui.add_space(8.0);
                                credits_badge(ui, session.credits);
                            });
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(format!(
                                        "{}   {}",
                                        session.date_display(),
                                        session.time_range_display()
                                    ))
                                    .color(colors::TEXT_SECONDARY),
                                )
                                .selectable(false),
                            );
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let remove_button = egui::Button::new(
                                    egui::RichText::new("🗑").color(colors::DESTRUCTIVE),
                                )
                                .fill(colors::CARD_BACKGROUND)
                                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                                .rounding(egui::Rounding::same(8.0))
                                .min_size(egui::vec2(34.0, 34.0));

                                if ui
                                    .add(remove_button)
                                    .on_hover_text("Remove session")
                                    .clicked()
                                {
                                    remove_clicked = Some(index);
                                }
                            },
                        );
                    });
                }
            });

        if let Some(index) = remove_clicked {
            self.handle_remove_session(index);
        }
    }

    /// The "book everything" button, disabled while nothing is pending
    fn draw_book_button(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let count = self.sessions.len();
            let label = format!(
                "Book Court / Bay ({} {})",
                count,
                if count == 1 { "Session" } else { "Sessions" }
            );

            let enabled = !self.sessions.is_empty();
            let (fill, text_color) = if enabled {
                (colors::ACCENT, colors::TEXT_WHITE)
            } else {
                (
                    colors::INACTIVE_BACKGROUND,
                    CURRENT_THEME.interactive.disabled_text,
                )
            };

            let book_button = egui::Button::new(
                egui::RichText::new(label)
                    .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                    .color(text_color),
            )
            .fill(fill)
            .rounding(egui::Rounding::same(12.0))
            .min_size(egui::vec2(260.0, 48.0));

            if ui.add_enabled(enabled, book_button).clicked() {
                self.handle_book_sessions();
            }
        });
    }

    /// Remove the pending session at `index` and reload the list
    pub fn handle_remove_session(&mut self, index: usize) {
        match self.backend.session_service.remove_session(index) {
            Ok(true) => {
                info!("🗑 Removed session at position {}", index);
                self.load_sessions();
            }
            Ok(false) => {
                // Stale index, e.g. the slot changed underneath us; just
                // resync the list
                self.load_sessions();
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to remove session: {}", e));
            }
        }
    }

    /// Finalize all pending sessions and surface the outcome
    pub fn handle_book_sessions(&mut self) {
        match self.backend.session_service.finalize_sessions() {
            Ok(FinalizeOutcome::NothingPending) => {
                self.info_message = Some(
                    "No sessions to book. Add sessions from the Court Availability page."
                        .to_string(),
                );
            }
            Ok(FinalizeOutcome::Booked {
                count,
                credits_total,
            }) => {
                self.success_message = Some(format!(
                    "Successfully booked {} court(s) for {} credits!",
                    count, credits_total
                ));
                self.load_sessions();
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to book sessions: {}", e));
            }
        }
    }
}

/// One stat tile inside the credit balance card
fn credit_tile(ui: &mut egui::Ui, label: &str, value: &str, value_color: egui::Color32) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 26))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(label)
                            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                            .color(egui::Color32::from_rgb(219, 234, 254)),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(value)
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(value_color),
                    )
                    .selectable(false),
                );
            });
        });
}

/// Yellow per-session credit badge
fn credits_badge(ui: &mut egui::Ui, credits: u32) {
    egui::Frame::none()
        .fill(CURRENT_THEME.credits.badge_background)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{} credits", credits))
                        .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                        .color(CURRENT_THEME.credits.badge_text),
                )
                .selectable(false),
            );
        });
}
