//! Skills placed on the sphere.

use egui::Color32;

use super::projection::{fibonacci_lattice, Vec3};

/// A skill as listed, before placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Icon identifier at the icon source (simple-icons slugs).
    pub slug: &'static str,
    pub color: Color32,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "React", slug: "react", color: Color32::from_rgb(0x61, 0xDA, 0xFB) },
    Skill { name: "Node.js", slug: "nodedotjs", color: Color32::from_rgb(0x33, 0x99, 0x33) },
    Skill { name: "Express", slug: "express", color: Color32::WHITE },
    Skill { name: "MongoDB", slug: "mongodb", color: Color32::from_rgb(0x47, 0xA2, 0x48) },
    Skill { name: "Git", slug: "git", color: Color32::from_rgb(0xF0, 0x50, 0x32) },
    Skill { name: "GitHub", slug: "github", color: Color32::WHITE },
    Skill { name: "Tailwind", slug: "tailwindcss", color: Color32::from_rgb(0x06, 0xB6, 0xD4) },
    Skill { name: "Vercel", slug: "vercel", color: Color32::WHITE },
    Skill { name: "JWT", slug: "jsonwebtokens", color: Color32::WHITE },
];

/// Substitute for white icons on a light background.
pub const LIGHT_MODE_INK: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1A);

/// A skill with its theme colour and base position on the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSkill {
    pub name: &'static str,
    pub slug: &'static str,
    pub color: Color32,
    pub position: Vec3,
}

pub fn theme_color(base: Color32, dark_mode: bool) -> Color32 {
    if !dark_mode && base == Color32::WHITE {
        LIGHT_MODE_INK
    } else {
        base
    }
}

/// Place `skills` on a sphere of `radius`.
pub fn layout_skills(skills: &[Skill], radius: f32, dark_mode: bool) -> Vec<SphereSkill> {
    fibonacci_lattice(skills.len(), radius)
        .into_iter()
        .zip(skills)
        .map(|(position, skill)| SphereSkill {
            name: skill.name,
            slug: skill.slug,
            color: theme_color(skill.color, dark_mode),
            position,
        })
        .collect()
}

/// Skill layout recomputed only when its inputs change.
#[derive(Debug, Default)]
pub struct SkillLayout {
    key: Option<(u32, bool)>,
    skills: Vec<SphereSkill>,
    recomputes: usize,
}

impl SkillLayout {
    pub fn get(&mut self, radius: f32, dark_mode: bool) -> &[SphereSkill] {
        let key = (radius.to_bits(), dark_mode);
        if self.key != Some(key) {
            self.skills = layout_skills(SKILLS, radius, dark_mode);
            self.key = Some(key);
            self.recomputes += 1;
        }
        &self.skills
    }

    /// How many times the layout has been rebuilt.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}
