//! Page rendering for `PortfolioApp`.
//!
//! One scroll area hosts the active section. Each section fades in over the
//! exit animation window and the scroll offset snaps back to the top once
//! the controller's reset deadline fires.

use std::time::Instant;

use eframe::egui;
use egui::{Color32, RichText, Rounding, Stroke, Vec2};

use portfolio_viewer::contact::FormStatus;
use portfolio_viewer::content;
use portfolio_viewer::view::carousel::{Carousel, Direction};
use portfolio_viewer::view::section::Section;

use super::PortfolioApp;
use crate::ui::{self, Palette};

const ERROR_RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const SUCCESS_GREEN: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);

impl PortfolioApp {
    /// Render the active section inside the central panel.
    pub fn draw_content(&mut self, ui: &mut egui::Ui, now: Instant) {
        let mut scroll = egui::ScrollArea::vertical()
            .id_salt("content")
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.scroll_to_top) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let opacity = self.view.transition_progress(now);
        scroll.show(ui, |ui| {
            ui.set_opacity(opacity);
            ui.add_space(24.0);
            match self.view.active_section() {
                Section::Introduction => self.draw_introduction(ui, now),
                Section::AboutMe => self.draw_about(ui),
                Section::Projects => self.draw_projects(ui),
                Section::SkillsAndTools => self.draw_skills(ui),
                Section::Experience => self.draw_experience(ui),
                Section::Contact => self.draw_contact(ui),
            }
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(content::profile().footer)
                        .size(10.0)
                        .color(Palette::for_theme(self.view.state().dark_mode).muted),
                );
            });
        });
    }

    // ── Introduction ─────────────────────────────────────────────────────

    fn draw_introduction(&mut self, ui: &mut egui::Ui, now: Instant) {
        let profile = content::profile();
        let palette = Palette::for_theme(self.view.state().dark_mode);

        let portrait = self.asset_source(&self.config.assets.profile_image);
        match self.texture(&portrait) {
            Some(tex) => {
                ui.add(egui::Image::new((tex.id(), Vec2::splat(160.0))).rounding(Rounding::same(80.0)));
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(160.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 80.0, palette.card_bg);
                ui.painter()
                    .circle_stroke(rect.center(), 80.0, Stroke::new(2.0, palette.accent));
            }
        }
        ui.add_space(16.0);

        ui::section_heading(ui, profile.name, profile.tagline, palette);
        ui::paragraph(ui, profile.introduction, palette);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let resume = ui
                .add_enabled(
                    self.resume_url.is_some(),
                    egui::Button::new(RichText::new("Download Resume").strong().color(Color32::WHITE))
                        .fill(palette.accent)
                        .min_size(Vec2::new(160.0, 40.0)),
                )
                .on_hover_text(profile.resume_download_name);
            if resume.clicked() {
                if let Some(url) = &self.resume_url {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                }
            }

            if ui
                .add(egui::Button::new("Send Email").min_size(Vec2::new(140.0, 40.0)))
                .clicked()
            {
                self.view.navigate_to(Section::Contact, now);
            }
        });
    }

    // ── About ────────────────────────────────────────────────────────────

    fn draw_about(&mut self, ui: &mut egui::Ui) {
        let profile = content::profile();
        let palette = Palette::for_theme(self.view.state().dark_mode);

        ui::section_heading(ui, profile.about_heading, profile.about_tagline, palette);
        for paragraph in profile.about {
            ui::paragraph(ui, *paragraph, palette);
        }
    }

    // ── Projects ─────────────────────────────────────────────────────────

    fn draw_projects(&mut self, ui: &mut egui::Ui) {
        let profile = content::profile();
        let dark = self.view.state().dark_mode;
        let palette = Palette::for_theme(dark);
        let total = content::list_projects().len();

        ui::section_heading(ui, "Projects", profile.projects_blurb, palette);

        let visible = self.view.visible_projects();
        let sources: Vec<Option<String>> = visible
            .iter()
            .map(|p| p.image.map(|file| self.asset_source(file)))
            .collect();
        let wide = ui.available_width() >= 720.0;

        if wide && visible.len() > 1 {
            ui.columns(visible.len(), |columns| {
                for ((column, project), source) in columns.iter_mut().zip(visible).zip(&sources) {
                    let tex = source.as_deref().and_then(|s| self.texture(s));
                    ui::project_card(column, project, dark, tex);
                }
            });
        } else {
            for (project, source) in visible.iter().zip(&sources) {
                let tex = source.as_deref().and_then(|s| self.texture(s));
                ui::project_card(ui, project, dark, tex);
                ui.add_space(16.0);
            }
        }
        ui.add_space(16.0);

        let carousel = self.view.state().carousel;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(carousel.can_go_back(), egui::Button::new("\u{25C0}"))
                .clicked()
            {
                self.view.advance_projects(Direction::Back);
            }

            for page in 0..Carousel::page_count(total) {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(14.0, 14.0), egui::Sense::hover());
                let color = if page == carousel.active_page() {
                    palette.accent
                } else {
                    palette.border
                };
                ui.painter().circle_filled(rect.center(), 4.0, color);
            }

            if ui
                .add_enabled(carousel.can_go_forward(total), egui::Button::new("\u{25B6}"))
                .clicked()
            {
                self.view.advance_projects(Direction::Forward);
            }
        });
    }

    // ── Skills ───────────────────────────────────────────────────────────

    fn draw_skills(&mut self, ui: &mut egui::Ui) {
        let profile = content::profile();
        let palette = Palette::for_theme(self.view.state().dark_mode);

        ui::section_heading(ui, "Skills & Tools", profile.skills_blurb, palette);
        self.draw_sphere(ui);
    }

    // ── Experience ───────────────────────────────────────────────────────

    fn draw_experience(&mut self, ui: &mut egui::Ui) {
        let profile = content::profile();
        let dark = self.view.state().dark_mode;

        ui::section_heading(ui, "Experience", profile.experience_blurb, Palette::for_theme(dark));
        for entry in content::list_experience() {
            ui::experience_item(ui, entry, dark);
        }
    }

    // ── Contact ──────────────────────────────────────────────────────────

    fn draw_contact(&mut self, ui: &mut egui::Ui) {
        let profile = content::profile();
        let palette = Palette::for_theme(self.view.state().dark_mode);

        ui::section_heading(ui, profile.contact_heading, profile.contact_blurb, palette);

        egui::Frame::none()
            .fill(palette.card_bg)
            .stroke(Stroke::new(1.0, palette.border))
            .rounding(Rounding::same(16.0))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Email Me").size(11.0).strong().color(palette.muted));
                ui.hyperlink_to(
                    RichText::new(profile.email).size(16.0).strong(),
                    format!("mailto:{}", profile.email),
                );
            });
        ui.add_space(16.0);

        egui::Frame::none()
            .fill(palette.card_bg)
            .stroke(Stroke::new(1.0, palette.border))
            .rounding(Rounding::same(24.0))
            .inner_margin(24.0)
            .show(ui, |ui| {
                if self.contact.status() == FormStatus::Success {
                    self.draw_contact_success(ui, palette);
                } else {
                    self.draw_contact_form(ui, palette);
                }
            });
        ui.add_space(16.0);

        ui.label(RichText::new(profile.availability).color(SUCCESS_GREEN));
    }

    fn draw_contact_success(&mut self, ui: &mut egui::Ui, palette: Palette) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("\u{2714}").size(40.0).color(SUCCESS_GREEN));
            ui.label(RichText::new("Message Received!").size(24.0).strong().color(palette.text));
            ui.label(RichText::new("I'll get back to you as soon as possible.").color(palette.muted));
            ui.add_space(12.0);
            if ui
                .add(egui::Button::new(RichText::new("Send another message").color(palette.accent)).frame(false))
                .clicked()
            {
                self.contact.send_another();
            }
            ui.add_space(24.0);
        });
    }

    fn draw_contact_form(&mut self, ui: &mut egui::Ui, palette: Palette) {
        let sending = self.contact.is_sending();
        let field_label = |ui: &mut egui::Ui, text: &str| {
            ui.label(RichText::new(text).size(11.0).strong().color(palette.muted));
        };

        ui.add_enabled_ui(!sending, |ui| {
            field_label(ui, "Who's This?");
            ui.add(
                egui::TextEdit::singleline(&mut self.contact.name)
                    .hint_text("Your Name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            field_label(ui, "Where Do I Reply?");
            ui.add(
                egui::TextEdit::singleline(&mut self.contact.email)
                    .hint_text("Your Email")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            field_label(ui, "What's the Plan?");
            ui.add(
                egui::TextEdit::multiline(&mut self.contact.message)
                    .hint_text("Tell me about your project...")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(16.0);

        if self.contact.status() == FormStatus::Error {
            ui.label(
                RichText::new("Something went wrong. Please try again or email me directly.")
                    .color(ERROR_RED),
            );
            if let Some(reason) = self.contact.last_error() {
                ui.label(RichText::new(reason).size(11.0).color(palette.muted));
            }
            ui.add_space(8.0);
        }

        let (label, fill) = match self.contact.status() {
            FormStatus::Sending => ("Dispatching...", palette.accent),
            FormStatus::Error => ("Transmit Message", ERROR_RED),
            _ => ("Transmit Message", palette.accent),
        };
        let button = egui::Button::new(RichText::new(label).strong().color(Color32::WHITE))
            .fill(fill)
            .min_size(Vec2::new(ui.available_width(), 48.0));
        if ui
            .add_enabled(!sending && self.contact.is_complete(), button)
            .clicked()
        {
            let ctx = ui.ctx().clone();
            self.contact
                .submit(self.gateway.clone(), move || ctx.request_repaint());
        }
    }
}
