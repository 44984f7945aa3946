//! # Header Module
//!
//! Renders the persistent application header: the app title on the left and
//! the two navigation tabs on the right, with the active tab highlighted.
//! Also renders the shared error/success/info message area.

use eframe::egui;

use crate::ui::app_state::{BlazingPaddlesApp, MainTab};
use crate::ui::components::theme::{colors, CURRENT_THEME};

impl BlazingPaddlesApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(CURRENT_THEME.layout.header_background)
            .inner_margin(egui::Margin::symmetric(20.0, 12.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Blazing Paddles")
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::ACCENT),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(4.0);
                    self.render_nav_tab(ui, MainTab::Sessions, "My Sessions");
                    ui.add_space(8.0);
                    self.render_nav_tab(ui, MainTab::Availability, "Court Availability");
                });
            });
        });

        // Divider under the header bar
        let rect = ui.min_rect();
        ui.painter().hline(
            rect.x_range(),
            rect.bottom(),
            egui::Stroke::new(1.0, colors::CARD_BORDER),
        );
    }

    /// Render one navigation tab with active-tab highlighting
    fn render_nav_tab(&mut self, ui: &mut egui::Ui, tab: MainTab, label: &str) {
        let is_active = self.current_tab == tab;

        let (fill, text_color) = if is_active {
            (colors::ACCENT, colors::TEXT_WHITE)
        } else {
            (colors::INACTIVE_BACKGROUND, colors::TEXT_SECONDARY)
        };

        let button = egui::Button::new(egui::RichText::new(label).color(text_color))
            .fill(fill)
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(150.0, 36.0));

        if ui.add(button).clicked() && !is_active {
            log::info!("🧭 Switched tab: {:?}", tab);
            self.current_tab = tab;
            self.clear_messages();
            // The sessions tab always shows the latest persisted state
            if tab == MainTab::Sessions {
                self.load_sessions();
            }
        }
    }

    /// Render error, success, and info messages
    pub fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(error) = &self.error_message {
            ui.colored_label(colors::DESTRUCTIVE, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(CURRENT_THEME.credits.remaining_ok, format!("✅ {}", success));
        }
        if let Some(info) = &self.info_message {
            ui.colored_label(colors::TEXT_SECONDARY, format!("ℹ {}", info));
        }
    }
}
