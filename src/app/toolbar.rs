//! Toolbar rendering for `PortfolioApp`.
//!
//! Draws the owner's name, the live clock, social links, the theme toggle
//! and, on narrow windows, the menu button.

use std::time::Instant;

use eframe::egui;
use egui::RichText;

use portfolio_viewer::content;
use portfolio_viewer::view::section::Section;

use super::PortfolioApp;
use crate::ui::Palette;

impl PortfolioApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, narrow: bool, now: Instant) {
        let profile = content::profile();
        let palette = Palette::for_theme(self.view.state().dark_mode);

        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let name = ui.add(
                egui::Label::new(RichText::new(profile.name).size(18.0).strong().color(palette.text))
                    .sense(egui::Sense::click()),
            );
            if name.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                self.view.navigate_to(Section::Introduction, now);
            }

            let clock = if narrow {
                self.view.clock_short_text()
            } else {
                self.view.clock_text()
            };
            ui.add_space(12.0);
            ui.label(RichText::new(clock).monospace().color(palette.muted));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if narrow {
                    let menu = if self.view.state().mobile_menu_open { "\u{2715}" } else { "\u{2630}" };
                    if ui.button(menu).clicked() {
                        self.view.toggle_mobile_menu();
                    }
                }

                let theme = if self.view.state().dark_mode { "\u{2600}" } else { "\u{263E}" };
                if ui.button(theme).on_hover_text("Toggle theme").clicked() {
                    self.view.toggle_theme();
                }

                if !narrow {
                    ui.separator();
                    for social in profile.socials.iter().rev() {
                        ui.hyperlink_to(social.label, social.url);
                    }
                }
            });
        });
    }
}
