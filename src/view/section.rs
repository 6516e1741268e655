//! The fixed, ordered set of top-level sections.

/// One of the six views a visitor can navigate to.
///
/// Declaration order is the sidebar order and the prev/next order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Introduction,
    AboutMe,
    Projects,
    SkillsAndTools,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Introduction,
        Section::AboutMe,
        Section::Projects,
        Section::SkillsAndTools,
        Section::Experience,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::AboutMe => "About Me",
            Section::Projects => "Projects",
            Section::SkillsAndTools => "Skills & Tools",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Display glyph for the sidebar and mobile menu.
    pub fn icon(self) -> &'static str {
        match self {
            Section::Introduction => "🏠",
            Section::AboutMe => "👤",
            Section::Projects => "💻",
            Section::SkillsAndTools => "🔧",
            Section::Experience => "💼",
            Section::Contact => "✉",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn prev(self) -> Option<Section> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn next(self) -> Option<Section> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_declaration_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn prev_next_bounds() {
        assert_eq!(Section::Introduction.prev(), None);
        assert_eq!(Section::Contact.next(), None);
        for pair in Section::ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].prev(), Some(pair[0]));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Section::default(), Section::Introduction);
        assert_eq!(Section::SkillsAndTools.to_string(), "Skills & Tools");
        assert_eq!(Section::AboutMe.label(), "About Me");
    }
}
