//! Presentational egui helpers.
//!
//! Stateless renderers for the two list item types (project card and
//! experience entry), each a function of its record plus the theme flag,
//! and the palette they share with the rest of the shell.

use eframe::egui;
use egui::{Color32, FontId, RichText, Rounding, Stroke, TextureHandle, Vec2};
use egui::text::{LayoutJob, TextFormat};

use portfolio_viewer::content::{ExperienceEntry, Paragraph, Project};

pub const BRAND_PURPLE: Color32 = Color32::from_rgb(124, 58, 237);

/// Theme colours for the portfolio shell.
#[derive(Clone, Copy)]
pub struct Palette {
    pub text: Color32,
    pub muted: Color32,
    pub panel_bg: Color32,
    pub card_bg: Color32,
    pub border: Color32,
    pub accent: Color32,
}

impl Palette {
    pub fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                text: Color32::from_rgb(230, 230, 235),
                muted: Color32::from_rgb(140, 140, 150),
                panel_bg: Color32::from_rgb(10, 10, 12),
                card_bg: Color32::from_rgb(22, 22, 26),
                border: Color32::from_rgb(44, 44, 52),
                accent: BRAND_PURPLE,
            }
        } else {
            Self {
                text: Color32::from_rgb(24, 24, 30),
                muted: Color32::from_rgb(110, 110, 120),
                panel_bg: Color32::from_rgb(250, 250, 252),
                card_bg: Color32::WHITE,
                border: Color32::from_rgb(220, 220, 228),
                accent: BRAND_PURPLE,
            }
        }
    }
}

/// Window visuals for the theme; applied only when the theme changes.
pub fn visuals(dark_mode: bool) -> egui::Visuals {
    let palette = Palette::for_theme(dark_mode);
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.panel_fill = palette.panel_bg;
    visuals.window_fill = palette.card_bg;
    visuals
}

// ─── Text ─────────────────────────────────────────────────────────────────────

/// Page heading with a muted subtitle underneath.
pub fn section_heading(ui: &mut egui::Ui, title: &str, subtitle: &str, palette: Palette) {
    ui.label(RichText::new(title).size(32.0).strong().color(palette.text));
    if !subtitle.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new(subtitle).size(16.0).color(palette.muted));
    }
    ui.add_space(20.0);
}

/// A paragraph whose highlighted runs are drawn bold in the accent colour.
pub fn paragraph(ui: &mut egui::Ui, runs: Paragraph, palette: Palette) {
    let mut job = LayoutJob::default();
    for (text, highlighted) in runs {
        let format = if *highlighted {
            TextFormat {
                font_id: FontId::proportional(17.0),
                color: palette.accent,
                ..Default::default()
            }
        } else {
            TextFormat {
                font_id: FontId::proportional(17.0),
                color: palette.text,
                ..Default::default()
            }
        };
        job.append(text, 0.0, format);
    }
    job.wrap.max_width = ui.available_width();
    ui.label(job);
    ui.add_space(12.0);
}

// ─── Project card ─────────────────────────────────────────────────────────────

fn traffic_lights(ui: &mut egui::Ui) {
    for color in [
        Color32::from_rgb(0xff, 0x5f, 0x56),
        Color32::from_rgb(0xff, 0xbd, 0x2e),
        Color32::from_rgb(0x27, 0xc9, 0x3f),
    ] {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 5.0, color.gamma_multiply(0.8));
    }
}

/// Render one project card. `image` is the screenshot texture if it loaded.
pub fn project_card(
    ui: &mut egui::Ui,
    project: &Project,
    dark_mode: bool,
    image: Option<&TextureHandle>,
) {
    let palette = Palette::for_theme(dark_mode);

    egui::Frame::none()
        .fill(palette.card_bg)
        .stroke(Stroke::new(1.0, palette.border))
        .rounding(Rounding::same(16.0))
        .inner_margin(16.0)
        .show(ui, |ui| {
            // Window chrome
            ui.horizontal(|ui| {
                traffic_lights(ui);
                ui.add_space(12.0);
                ui.label(
                    RichText::new(project.window_title())
                        .font(FontId::monospace(10.0))
                        .color(palette.muted),
                );
            });
            ui.add_space(8.0);

            // Preview
            let width = ui.available_width();
            let size = Vec2::new(width, width * 10.0 / 16.0);
            let preview = match image {
                Some(tex) => ui.add(
                    egui::Image::new((tex.id(), size))
                        .rounding(Rounding::same(8.0))
                        .sense(egui::Sense::click()),
                ),
                None => {
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                    let painter = ui.painter();
                    painter.rect_filled(rect, Rounding::same(8.0), palette.border.gamma_multiply(0.4));
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "{...}",
                        FontId::monospace(32.0),
                        palette.muted.gamma_multiply(0.4),
                    );
                    response
                }
            };
            if let Some(link) = project.live_link {
                if preview
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .clicked()
                {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(link));
                }
            }
            ui.add_space(12.0);

            ui.label(
                RichText::new(format!("\u{25CF} {}", project.category.to_uppercase()))
                    .size(10.0)
                    .strong()
                    .color(palette.accent),
            );

            let title = RichText::new(project.title).size(20.0).strong().color(palette.text);
            match project.live_link {
                Some(link) => {
                    ui.add(egui::Hyperlink::from_label_and_url(title, link));
                }
                None => {
                    ui.label(title);
                }
            }

            ui.label(RichText::new(project.description).color(palette.muted));
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for tech in project.tech_stack {
                    egui::Frame::none()
                        .stroke(Stroke::new(1.0, palette.border))
                        .rounding(Rounding::same(6.0))
                        .inner_margin(egui::Margin::symmetric(6.0, 3.0))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("{}.v4", tech))
                                    .font(FontId::monospace(9.0))
                                    .color(palette.muted),
                            );
                        });
                }
            });
        });
}

// ─── Experience entry ─────────────────────────────────────────────────────────

/// Render one work-history entry as a timeline node.
pub fn experience_item(ui: &mut egui::Ui, entry: &ExperienceEntry, dark_mode: bool) {
    let palette = Palette::for_theme(dark_mode);

    ui.horizontal_top(|ui| {
        let (rect, _) = ui.allocate_exact_size(Vec2::new(14.0, 14.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 5.0, palette.accent);

        ui.vertical(|ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(entry.role).size(19.0).strong().color(palette.text));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::Frame::none()
                        .fill(palette.card_bg)
                        .stroke(Stroke::new(1.0, palette.border))
                        .rounding(Rounding::same(10.0))
                        .inner_margin(egui::Margin::symmetric(10.0, 3.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(entry.duration).size(12.0).color(palette.muted));
                        });
                });
            });
            ui.label(RichText::new(entry.company).color(palette.accent));
            ui.add_space(6.0);
            for bullet in entry.description {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("\u{2022}").color(palette.border));
                    ui.label(RichText::new(*bullet).color(palette.text));
                });
            }
        });
    });
    ui.add_space(24.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_by_theme() {
        let dark = Palette::for_theme(true);
        let light = Palette::for_theme(false);
        assert_ne!(dark.text, light.text);
        assert_eq!(dark.accent, light.accent);
        assert!(visuals(true).dark_mode);
        assert!(!visuals(false).dark_mode);
    }
}
