//! Sphere placement and perspective projection.
//!
//! Points are laid out with a Fibonacci lattice, rotated by yaw about Y then
//! pitch about X, and projected with a fixed camera distance.

use std::f32::consts::PI;

/// Camera distance used by the perspective divide.
pub const PERSPECTIVE: f32 = 600.0;

/// Smallest marker scale, so far-side icons stay legible.
pub const MIN_MARKER_SCALE: f32 = 0.4;

const LONGITUDE_RINGS: usize = 6;
const LATITUDE_RINGS: usize = 5;
const RING_SAMPLES: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn from_spherical(radius: f32, phi: f32, theta: f32) -> Self {
        Self {
            x: radius * theta.cos() * phi.sin(),
            y: radius * theta.sin() * phi.sin(),
            z: radius * phi.cos(),
        }
    }
}

/// Sphere orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// About the X axis.
    pub pitch: f32,
    /// About the Y axis.
    pub yaw: f32,
}

/// A point after rotation and projection, relative to the sphere centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen offset from the sphere centre.
    pub offset: [f32; 2],
    /// Rotated z; positive is towards the viewer.
    pub depth: f32,
    /// Perspective factor `P / (P - z)`.
    pub perspective: f32,
    /// Marker scale, `max(0.4, perspective)`.
    pub scale: f32,
    pub opacity: f32,
    /// Stacking order; larger draws on top.
    pub order: i32,
}

/// Polar and azimuthal angles of lattice point `i` of `n`.
pub fn lattice_angles(i: usize, n: usize) -> (f32, f32) {
    let t = i as f32 + 0.5;
    let phi = (1.0 - 2.0 * t / n as f32).acos();
    let theta = PI * (1.0 + 5.0_f32.sqrt()) * t;
    (phi, theta)
}

/// `n` near-uniformly spaced points on a sphere of `radius`.
pub fn fibonacci_lattice(n: usize, radius: f32) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let (phi, theta) = lattice_angles(i, n);
            Vec3::from_spherical(radius, phi, theta)
        })
        .collect()
}

/// Yaw about Y, then pitch about X.
pub fn rotate(p: Vec3, rotation: Rotation) -> Vec3 {
    let rx = rotation.pitch.to_radians();
    let ry = rotation.yaw.to_radians();
    let (sin_x, cos_x) = rx.sin_cos();
    let (sin_y, cos_y) = ry.sin_cos();

    let x = p.x * cos_y - p.z * sin_y;
    let z = p.z * cos_y + p.x * sin_y;
    let y = p.y * cos_x - z * sin_x;
    let z = z * cos_x + p.y * sin_x;
    Vec3 { x, y, z }
}

fn perspective(z: f32) -> f32 {
    PERSPECTIVE / (PERSPECTIVE - z)
}

/// Depth-normalised position in `[0, 1]`; 0 at the back, 1 at the front.
fn depth_ratio(z: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 1.0;
    }
    (z + radius) / (radius * 2.0)
}

/// Project a skill marker.
///
/// Markers move by the raw rotated offset and are scaled separately, so the
/// offset is not multiplied by the perspective factor.
pub fn project(p: Vec3, rotation: Rotation, radius: f32) -> Projected {
    let r = rotate(p, rotation);
    let s = perspective(r.z);
    Projected {
        offset: [r.x, r.y],
        depth: r.z,
        perspective: s,
        scale: s.max(MIN_MARKER_SCALE),
        opacity: (depth_ratio(r.z, radius) * 0.7 + 0.3).clamp(0.0, 1.0),
        order: (r.z + radius).round() as i32,
    }
}

/// A projected backdrop dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub offset: [f32; 2],
    pub radius: f32,
    pub opacity: f32,
}

/// Project a backdrop dot; its offset is perspective-scaled.
pub fn project_dot(p: Vec3, rotation: Rotation, radius: f32) -> Dot {
    let r = rotate(p, rotation);
    let s = perspective(r.z);
    let dot_radius = if radius > 0.0 { (r.z + radius) / radius } else { 0.0 };
    Dot {
        offset: [r.x * s, r.y * s],
        radius: dot_radius.max(0.5),
        opacity: (depth_ratio(r.z, radius) * 0.3 + 0.05).clamp(0.0, 1.0),
    }
}

fn project_line_point(p: Vec3, rotation: Rotation) -> [f32; 2] {
    let r = rotate(p, rotation);
    let s = perspective(r.z);
    [r.x * s, r.y * s]
}

/// Longitude and latitude rings as projected polylines.
///
/// Six longitude rings at 60° steps, four latitude rings between the poles,
/// each sampled 61 times so the polyline closes on itself.
pub fn wireframe(radius: f32, rotation: Rotation) -> Vec<Vec<[f32; 2]>> {
    let mut rings = Vec::with_capacity(LONGITUDE_RINGS + LATITUDE_RINGS - 1);

    for i in 0..LONGITUDE_RINGS {
        let phi = i as f32 * PI / 3.0;
        let ring = (0..=RING_SAMPLES)
            .map(|j| {
                let theta = j as f32 * 2.0 * PI / RING_SAMPLES as f32;
                let p = Vec3::new(
                    radius * theta.cos() * phi.sin(),
                    radius * theta.sin(),
                    radius * theta.cos() * phi.cos(),
                );
                project_line_point(p, rotation)
            })
            .collect();
        rings.push(ring);
    }

    for i in 1..LATITUDE_RINGS {
        let theta = i as f32 * PI / LATITUDE_RINGS as f32;
        let r = radius * theta.sin();
        let y = radius * theta.cos();
        let ring = (0..=RING_SAMPLES)
            .map(|j| {
                let phi = j as f32 * 2.0 * PI / RING_SAMPLES as f32;
                project_line_point(Vec3::new(r * phi.cos(), y, r * phi.sin()), rotation)
            })
            .collect();
        rings.push(ring);
    }

    rings
}
