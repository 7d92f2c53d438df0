//! The fixed portfolio content.
//!
//! Every list here is a `static` slice: hosts borrow from it for the whole
//! process and only derive filtered or selected *views* of it.

pub mod contact;
pub mod gallery;
pub mod projects;
pub mod skills;

use folio_protocol::{NavItem, SectionId, Stat};

pub use contact::CONTACT_METHODS;
pub use gallery::GALLERY;
pub use projects::PROJECTS;
pub use skills::SKILLS;

pub const OWNER_NAME: &str = "Deva Narayan";

/// Wordmark shown at the left of the navigation bar.
pub const BRAND: &str = "Deva";

/// Monogram inside the hero avatar.
pub const MONOGRAM: &str = "D";

pub const HERO_TAGLINE: &str = "Transforming ideas into reality through code, data, and \
    innovative solutions. Ready to make an impact in the tech world.";

/// Phrases cycled by the hero typewriter.
pub static HERO_ROLES: [&str; 4] = [
    "Data Science Student",
    "Full-Stack Developer",
    "Problem Solver",
    "Innovation Enthusiast",
];

pub static HERO_STATS: [Stat; 3] = [
    Stat {
        value: "93%",
        label: "Class 10",
    },
    Stat {
        value: "85%",
        label: "Class 12",
    },
    Stat {
        value: "100%",
        label: "Dedication",
    },
];

/// (heading, paragraph) pairs in the about section.
pub static ABOUT_PARAGRAPHS: [(&str, &str); 2] = [
    (
        "Passionate Developer",
        "Currently pursuing B.Tech in Data Science, I combine analytical thinking with \
         creative problem-solving. My journey spans from frontend development to data \
         analysis, always seeking innovative solutions.",
    ),
    (
        "Continuous Learner",
        "With a foundation in Python, web development, and data visualization, \
         I'm constantly expanding my skillset to stay ahead in the rapidly \
         evolving tech landscape.",
    ),
];

pub static ABOUT_STATS: [Stat; 4] = [
    Stat {
        value: "15+",
        label: "Projects",
    },
    Stat {
        value: "6+",
        label: "Technologies",
    },
    Stat {
        value: "5+",
        label: "Certifications",
    },
    Stat {
        value: "2+ Years",
        label: "Experience",
    },
];

/// Navigation entries, in bar order. The gallery has no entry of its own.
pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: SectionId::Hero,
        label: "Home",
    },
    NavItem {
        id: SectionId::About,
        label: "About",
    },
    NavItem {
        id: SectionId::Skills,
        label: "Skills",
    },
    NavItem {
        id: SectionId::Projects,
        label: "Projects",
    },
    NavItem {
        id: SectionId::Contact,
        label: "Contact",
    },
];

/// Section ids the active-section tracker evaluates, in priority order.
pub fn tracked_sections() -> Vec<SectionId> {
    NAV_ITEMS.iter().map(|item| item.id).collect()
}

/// Section heading as displayed on the page.
pub fn section_title(id: SectionId) -> &'static str {
    match id {
        SectionId::Hero => OWNER_NAME,
        SectionId::About => "About Me",
        SectionId::Skills => "Skills & Expertise",
        SectionId::Projects => "Featured Projects",
        SectionId::Gallery => "Gallery",
        SectionId::Contact => "Let's Connect",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::{CategoryTag, ProjectCategory, SkillCategory};

    #[test]
    fn list_sizes_are_fixed() {
        assert_eq!(GALLERY.len(), 3);
        assert_eq!(PROJECTS.len(), 4);
        assert_eq!(SKILLS.len(), 8);
        assert_eq!(CONTACT_METHODS.len(), 3);
    }

    #[test]
    fn skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn every_skill_category_is_used() {
        for c in SkillCategory::ALL {
            assert!(SKILLS.iter().any(|s| s.category == *c), "{c} unused");
        }
    }

    #[test]
    fn project_ids_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
        assert!(PROJECTS.iter().any(|p| p.category == ProjectCategory::Ml));
    }

    #[test]
    fn tracker_order_starts_at_hero_and_skips_gallery() {
        let order = tracked_sections();
        assert_eq!(order.first(), Some(&SectionId::Hero));
        assert!(!order.contains(&SectionId::Gallery));
    }

    #[test]
    fn only_linkedin_opens_externally() {
        let external: Vec<_> = CONTACT_METHODS
            .iter()
            .filter(|m| m.opens_external)
            .map(|m| m.title)
            .collect();
        assert_eq!(external, vec!["LinkedIn"]);
    }
}
