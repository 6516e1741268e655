//! Section navigation for `PortfolioApp`.
//!
//! Sidebar on wide windows, a collapsible menu on narrow ones, and the
//! prev/next footer shared by both.

use std::time::Instant;

use eframe::egui;
use egui::RichText;

use portfolio_viewer::content;
use portfolio_viewer::view::section::Section;

use super::PortfolioApp;
use crate::ui::Palette;

impl PortfolioApp {
    fn section_entries(&mut self, ui: &mut egui::Ui, now: Instant) {
        let active = self.view.active_section();
        for section in Section::ALL {
            let label = format!("{}  {}", section.icon(), section.label());
            if ui
                .add_sized(
                    [ui.available_width(), 32.0],
                    egui::SelectableLabel::new(section == active, label),
                )
                .clicked()
            {
                self.view.navigate_to(section, now);
            }
        }
    }

    pub fn draw_sidebar(&mut self, ui: &mut egui::Ui, now: Instant) {
        let profile = content::profile();
        let palette = Palette::for_theme(self.view.state().dark_mode);

        ui.add_space(16.0);
        ui.label(RichText::new("NAVIGATION").size(11.0).strong().color(palette.muted));
        ui.add_space(8.0);
        self.section_entries(ui, now);

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(12.0);
            ui.label(RichText::new(profile.availability).size(11.0).color(palette.accent));
        });
    }

    pub fn draw_mobile_menu(&mut self, ui: &mut egui::Ui, now: Instant) {
        let profile = content::profile();

        ui.add_space(4.0);
        self.section_entries(ui, now);
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            for social in profile.socials {
                ui.hyperlink_to(social.label, social.url);
            }
        });
        ui.add_space(4.0);
    }

    /// Prev/next buttons with the current position.
    pub fn draw_footer(&mut self, ui: &mut egui::Ui, now: Instant) {
        let active = self.view.active_section();
        let palette = Palette::for_theme(self.view.state().dark_mode);

        ui.horizontal(|ui| {
            let prev = active.prev();
            let label = prev.map_or(String::from("\u{25C0}"), |s| format!("\u{25C0} {}", s.label()));
            if ui.add_enabled(prev.is_some(), egui::Button::new(label)).clicked() {
                self.view.navigate_prev(now);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next = active.next();
                let label = next.map_or(String::from("\u{25B6}"), |s| format!("{} \u{25B6}", s.label()));
                if ui.add_enabled(next.is_some(), egui::Button::new(label)).clicked() {
                    self.view.navigate_next(now);
                }

                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(format!("{} / {}", active.index() + 1, Section::ALL.len()))
                            .monospace()
                            .color(palette.muted),
                    );
                });
            });
        });
    }
}
