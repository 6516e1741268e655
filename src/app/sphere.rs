//! Skills sphere painting and drag input for `PortfolioApp`.
//!
//! The backdrop (wireframe rings and lattice dots) is drawn 1.2x larger at
//! 60% strength behind the markers, as a canvas layer would be. Markers are
//! painted back to front so nearer icons overlap farther ones.

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use portfolio_viewer::sphere::{SphereFrame, COMPACT_RADIUS};

use super::PortfolioApp;
use crate::ui::{Palette, BRAND_PURPLE};

const BACKDROP_SCALE: f32 = 1.2;
const BACKDROP_OPACITY: f32 = 0.6;
const RING_ALPHA: f32 = 0.25;
const ICON_SIZE: f32 = 48.0;
const COMPACT_HEIGHT: f32 = 320.0;
const FULL_HEIGHT: f32 = 450.0;

/// Recolour an icon into a white alpha mask so it can be tinted per skill.
pub fn icon_mask(image: &mut egui::ColorImage) {
    for pixel in &mut image.pixels {
        *pixel = Color32::from_white_alpha(pixel.a());
    }
}

fn at(center: Pos2, offset: [f32; 2], scale: f32) -> Pos2 {
    center + Vec2::new(offset[0], offset[1]) * scale
}

impl PortfolioApp {
    /// Allocate the sphere area, feed it pointer input, advance one frame
    /// and paint it. Does nothing while the sphere is unmounted.
    pub fn draw_sphere(&mut self, ui: &mut egui::Ui) {
        let dark = self.view.state().dark_mode;
        let Some(state) = self.sphere.as_mut() else {
            return;
        };

        let height = if state.radius() <= COMPACT_RADIUS { COMPACT_HEIGHT } else { FULL_HEIGHT };
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::drag());

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                state.press([pos.x, pos.y]);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                state.drag_to([pos.x, pos.y]);
            }
        }
        if response.drag_stopped() {
            state.release();
        }
        if state.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        state.tick();
        let skills = self.skill_layout.get(state.radius(), dark);
        let frame = state.frame(skills);

        self.paint_sphere(ui, rect, &frame, dark);
    }

    fn paint_sphere(&self, ui: &egui::Ui, rect: Rect, frame: &SphereFrame, dark: bool) {
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let palette = Palette::for_theme(dark);

        let ring_color = BRAND_PURPLE.gamma_multiply(RING_ALPHA * BACKDROP_OPACITY);
        for ring in &frame.rings {
            let points = ring.iter().map(|p| at(center, *p, BACKDROP_SCALE)).collect();
            painter.add(Shape::line(points, Stroke::new(0.5 * BACKDROP_SCALE, ring_color)));
        }

        for dot in &frame.dots {
            painter.circle_filled(
                at(center, dot.offset, BACKDROP_SCALE),
                dot.radius * BACKDROP_SCALE,
                BRAND_PURPLE.gamma_multiply(dot.opacity * BACKDROP_OPACITY),
            );
        }

        for marker in &frame.markers {
            let p = marker.projected;
            let pos = at(center, p.offset, 1.0);
            let size = ICON_SIZE * p.scale;
            let icon_rect = Rect::from_center_size(pos, Vec2::splat(size));
            let tint = marker.skill.color.gamma_multiply(p.opacity);

            match self.textures.get(&self.icon_source(marker.skill.slug)) {
                Some(tex) => {
                    painter.image(
                        tex.id(),
                        icon_rect,
                        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                        tint,
                    );
                }
                None => {
                    painter.circle_stroke(pos, size * 0.35, Stroke::new(2.0 * p.scale, tint));
                }
            }

            painter.text(
                Pos2::new(pos.x, icon_rect.bottom() + 4.0 * p.scale),
                Align2::CENTER_TOP,
                marker.skill.name.to_uppercase(),
                FontId::monospace((9.0 * p.scale).max(6.0)),
                palette.muted.gamma_multiply(0.6 * p.opacity),
            );
        }
    }
}
