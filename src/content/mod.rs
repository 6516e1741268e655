//! Static content store.
//!
//! Everything the viewer shows is compiled in: the project showcase, the
//! work history, and the profile copy. Accessors return `'static` slices so
//! callers can borrow freely from any frame without cloning.

mod data;

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub category: &'static str,
    /// Image file name, resolved against the configured assets directory.
    pub image: Option<&'static str>,
    pub live_link: Option<&'static str>,
}

impl Project {
    /// Header text for the card's window chrome, e.g. `the_good_burger.exe`.
    pub fn window_title(&self) -> String {
        let words: Vec<String> = self
            .title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        format!("{}.exe", words.join("_"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Work,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: u32,
    pub company: &'static str,
    pub role: &'static str,
    /// Free text, e.g. "2024 – 2025".
    pub duration: &'static str,
    pub description: &'static [&'static str],
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// A paragraph made of plain and highlighted runs.
pub type Paragraph = &'static [(&'static str, bool)];

/// Owner profile copy shown across the sections.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub introduction: Paragraph,
    pub about_heading: &'static str,
    pub about_tagline: &'static str,
    pub about: &'static [Paragraph],
    pub projects_blurb: &'static str,
    pub skills_blurb: &'static str,
    pub experience_blurb: &'static str,
    pub contact_heading: &'static str,
    pub contact_blurb: &'static str,
    pub email: &'static str,
    pub availability: &'static str,
    pub socials: &'static [SocialLink],
    pub resume_download_name: &'static str,
    pub footer: &'static str,
}

/// All showcased projects, ordered by id.
pub fn list_projects() -> &'static [Project] {
    data::PROJECTS
}

/// The work history, most recent first.
pub fn list_experience() -> &'static [ExperienceEntry] {
    data::EXPERIENCE
}

pub fn profile() -> &'static Profile {
    &data::PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn projects_are_ordered_with_unique_ids() {
        let projects = list_projects();
        assert_eq!(projects.len(), 2);
        let ids: Vec<u32> = projects.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn experience_ids_are_unique() {
        let entries = list_experience();
        assert_eq!(entries.len(), 3);
        let ids: HashSet<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), entries.len());
        assert!(entries.iter().all(|e| e.kind == EntryKind::Work));
        assert!(entries.iter().all(|e| !e.description.is_empty()));
    }

    #[test]
    fn accessors_are_stable() {
        assert!(std::ptr::eq(list_projects(), list_projects()));
        assert!(std::ptr::eq(list_experience(), list_experience()));
    }

    #[test]
    fn window_title_collapses_whitespace() {
        let project = &list_projects()[1];
        assert_eq!(project.title, "The Good Burger");
        assert_eq!(project.window_title(), "the_good_burger.exe");
    }

    #[test]
    fn profile_links_are_absolute() {
        for link in profile().socials {
            assert!(url::Url::parse(link.url).is_ok(), "{}", link.url);
        }
        for project in list_projects() {
            if let Some(live) = project.live_link {
                assert!(url::Url::parse(live).is_ok(), "{}", live);
            }
        }
    }
}
