//! Rotating skills sphere.
//!
//! `SphereState` holds the only per-frame mutable state (two rotation angles
//! and the drag pointer). `frame` turns it into screen-space geometry that
//! the shell paints; nothing here touches egui's painter.

pub mod projection;
pub mod skills;

use projection::{fibonacci_lattice, project, project_dot, wireframe, Dot, Projected, Rotation, Vec3};
use skills::SphereSkill;

/// Auto-rotation per frame, degrees.
pub const AUTO_PITCH_STEP: f32 = 0.05;
pub const AUTO_YAW_STEP: f32 = 0.1;

/// Degrees of rotation per pixel of drag.
pub const DRAG_SENSITIVITY: f32 = 0.3;

pub const BACKDROP_DOTS: usize = 100;

/// Below this width the compact radius is used.
pub const COMPACT_WIDTH: f32 = 640.0;
pub const COMPACT_RADIUS: f32 = 120.0;
pub const FULL_RADIUS: f32 = 170.0;

pub fn radius_for_width(width: f32) -> f32 {
    if width < COMPACT_WIDTH {
        COMPACT_RADIUS
    } else {
        FULL_RADIUS
    }
}

/// One projected skill marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub skill: SphereSkill,
    pub projected: Projected,
}

/// Everything needed to draw one frame, relative to the sphere centre.
#[derive(Debug, Clone, Default)]
pub struct SphereFrame {
    pub rings: Vec<Vec<[f32; 2]>>,
    pub dots: Vec<Dot>,
    /// Sorted back to front.
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone)]
pub struct SphereState {
    rotation: Rotation,
    dragging: bool,
    last_pointer: Option<[f32; 2]>,
    radius: f32,
    dots: Vec<Vec3>,
}

impl SphereState {
    pub fn new(radius: f32) -> Self {
        Self {
            rotation: Rotation::default(),
            dragging: false,
            last_pointer: None,
            radius,
            dots: fibonacci_lattice(BACKDROP_DOTS, radius),
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Resize the sphere; the backdrop is rebuilt only on change.
    pub fn set_radius(&mut self, radius: f32) {
        if radius != self.radius {
            self.radius = radius;
            self.dots = fibonacci_lattice(BACKDROP_DOTS, radius);
        }
    }

    /// Advance one frame of auto-rotation unless a drag is in progress.
    pub fn tick(&mut self) {
        if !self.dragging {
            self.rotation.pitch += AUTO_PITCH_STEP;
            self.rotation.yaw += AUTO_YAW_STEP;
        }
    }

    /// Pointer or touch pressed on the sphere.
    pub fn press(&mut self, pos: [f32; 2]) {
        self.dragging = true;
        self.last_pointer = Some(pos);
    }

    /// Pointer moved while pressed.
    pub fn drag_to(&mut self, pos: [f32; 2]) {
        if !self.dragging {
            return;
        }
        if let Some(last) = self.last_pointer {
            let dx = pos[0] - last[0];
            let dy = pos[1] - last[1];
            self.rotation.pitch -= dy * DRAG_SENSITIVITY;
            self.rotation.yaw += dx * DRAG_SENSITIVITY;
        }
        self.last_pointer = Some(pos);
    }

    pub fn release(&mut self) {
        self.dragging = false;
        self.last_pointer = None;
    }

    /// Project the backdrop and `skills` for the current rotation.
    pub fn frame(&self, skills: &[SphereSkill]) -> SphereFrame {
        let mut markers: Vec<Marker> = skills
            .iter()
            .map(|skill| Marker {
                skill: *skill,
                projected: project(skill.position, self.rotation, self.radius),
            })
            .collect();
        markers.sort_by_key(|m| m.projected.order);

        SphereFrame {
            rings: wireframe(self.radius, self.rotation),
            dots: self
                .dots
                .iter()
                .map(|d| project_dot(*d, self.rotation, self.radius))
                .collect(),
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skills::{layout_skills, SKILLS};

    #[test]
    fn auto_rotates_when_idle() {
        let mut s = SphereState::new(FULL_RADIUS);
        for _ in 0..10 {
            s.tick();
        }
        assert!((s.rotation().pitch - 0.5).abs() < 1e-4);
        assert!((s.rotation().yaw - 1.0).abs() < 1e-4);
    }

    #[test]
    fn drag_overrides_auto_rotation() {
        let mut s = SphereState::new(FULL_RADIUS);
        s.press([100.0, 100.0]);
        s.tick();
        assert_eq!(s.rotation(), Rotation::default());

        s.drag_to([110.0, 90.0]);
        assert!((s.rotation().yaw - 3.0).abs() < 1e-4);
        assert!((s.rotation().pitch - 3.0).abs() < 1e-4);

        s.drag_to([110.0, 100.0]);
        assert!((s.rotation().pitch - 0.0).abs() < 1e-4);

        s.release();
        let before = s.rotation();
        s.tick();
        assert!(s.rotation().yaw > before.yaw);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut s = SphereState::new(FULL_RADIUS);
        s.drag_to([50.0, 50.0]);
        assert_eq!(s.rotation(), Rotation::default());
    }

    #[test]
    fn radius_breakpoint() {
        assert_eq!(radius_for_width(639.0), COMPACT_RADIUS);
        assert_eq!(radius_for_width(640.0), FULL_RADIUS);
        let mut s = SphereState::new(FULL_RADIUS);
        s.set_radius(COMPACT_RADIUS);
        assert_eq!(s.radius(), COMPACT_RADIUS);
    }

    #[test]
    fn frame_is_sorted_back_to_front() {
        let mut s = SphereState::new(FULL_RADIUS);
        for _ in 0..37 {
            s.tick();
        }
        let skills = layout_skills(SKILLS, FULL_RADIUS, true);
        let frame = s.frame(&skills);
        assert_eq!(frame.markers.len(), SKILLS.len());
        assert_eq!(frame.dots.len(), BACKDROP_DOTS);
        assert_eq!(frame.rings.len(), 10);
        assert!(frame
            .markers
            .windows(2)
            .all(|w| w[0].projected.order <= w[1].projected.order));
    }
}
