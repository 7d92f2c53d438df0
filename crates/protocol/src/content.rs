//! Static portfolio content types.
//!
//! Every list built from these types is authored at compile time and lives
//! for the whole process; nothing here is ever created, mutated, or deleted
//! at runtime. Hosts only change *which* subset is shown.

use serde::Serialize;

use crate::types::Color;

/// One named, scrollable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Gallery,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Stable element id, as used for anchors (`#skills`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed set of category tags.
///
/// Each tag has a stable lowercase form (used for matching and in URLs/JSON)
/// and a human-readable label for filter buttons.
pub trait CategoryTag: Copy + Eq + std::fmt::Debug + 'static {
    /// Every tag, in the order filter buttons are shown.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn label(self) -> &'static str {
        self.as_str()
    }

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Active filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter<C> {
    All,
    Only(C),
}

// Manual impl: a derived `Default` would require `C: Default`.
impl<C> Default for Filter<C> {
    fn default() -> Self {
        Filter::All
    }
}

impl<C: CategoryTag> Filter<C> {
    /// The tag string for this filter; `"all"` for [`Filter::All`].
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(c) => c.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(c) => c.label(),
        }
    }

    /// Parse `"all"` or any category tag.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(Filter::All);
        }
        C::parse(s).map(Filter::Only)
    }

    /// `All` followed by every category, in button order.
    pub fn choices() -> Vec<Self> {
        std::iter::once(Filter::All)
            .chain(C::ALL.iter().copied().map(Filter::Only))
            .collect()
    }

    /// Whether an item with category `c` passes this filter.
    pub fn admits(self, c: C) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(want) => want == c,
        }
    }
}

impl<C: CategoryTag> Serialize for Filter<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

macro_rules! category_tag {
    (@label $tag:literal) => { $tag };
    (@label $tag:literal, $label:literal) => { $label };
    ($name:ident { $($variant:ident => $tag:literal $(as $label:literal)?),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl CategoryTag for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => category_tag!(@label $tag $(, $label)?)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

category_tag!(SkillCategory {
    Programming => "programming",
    Frontend => "frontend",
    Data => "data",
    Tools => "tools",
});

category_tag!(ProjectCategory {
    Web => "web",
    Data => "data",
    Ml => "ml" as "Machine Learning",
});

category_tag!(GalleryCategory {
    Portrait => "portrait",
    Artistic => "artistic",
    Automotive => "automotive",
});

/// Two-stop accent gradient used for icons and skill bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
}

impl Gradient {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub category: GalleryCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub image: &'static str,
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0–100.
    pub level: u8,
    pub category: SkillCategory,
    pub icon: &'static str,
    pub gradient: Gradient,
}

impl Skill {
    /// Proficiency as a fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub gradient: Gradient,
    /// Open in a new browsing context (external profile links).
    pub opens_external: bool,
}

/// Navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
}

/// Headline figure shown in the hero and about sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_roundtrip_through_str() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::parse(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::parse("footer"), None);
    }

    #[test]
    fn filter_parse_all_and_tags() {
        assert_eq!(Filter::<SkillCategory>::parse("all"), Some(Filter::All));
        assert_eq!(
            Filter::<SkillCategory>::parse("data"),
            Some(Filter::Only(SkillCategory::Data))
        );
        assert_eq!(Filter::<SkillCategory>::parse("ml"), None);
    }

    #[test]
    fn filter_choices_lead_with_all() {
        let choices = Filter::<ProjectCategory>::choices();
        let tags: Vec<_> = choices.iter().map(|f| f.as_str()).collect();
        assert_eq!(tags, vec!["all", "web", "data", "ml"]);
    }

    #[test]
    fn ml_has_long_label() {
        assert_eq!(ProjectCategory::Ml.label(), "Machine Learning");
        assert_eq!(ProjectCategory::Web.label(), "web");
        assert_eq!(Filter::Only(ProjectCategory::Ml).label(), "Machine Learning");
    }

    #[test]
    fn filter_admits() {
        assert!(Filter::<SkillCategory>::All.admits(SkillCategory::Tools));
        assert!(Filter::Only(SkillCategory::Data).admits(SkillCategory::Data));
        assert!(!Filter::Only(SkillCategory::Data).admits(SkillCategory::Tools));
    }

    #[test]
    fn skill_fraction_clamps() {
        let skill = Skill {
            name: "x",
            level: 250,
            category: SkillCategory::Tools,
            icon: "",
            gradient: Gradient::new(Color::rgb8(0, 0, 0), Color::rgb8(0, 0, 0)),
        };
        assert!((skill.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filter_serializes_as_tag() {
        let json = serde_json::to_string(&Filter::Only(GalleryCategory::Artistic))
            .unwrap_or_default();
        assert_eq!(json, "\"artistic\"");
    }
}
