use folio_protocol::{
    CategoryTag, Filter, GalleryCategory, GalleryImage, Project, ProjectCategory, Skill,
    SkillCategory,
};

/// Content that belongs to exactly one category.
pub trait Categorized {
    type Category: CategoryTag;

    fn category(&self) -> Self::Category;
}

impl Categorized for Skill {
    type Category = SkillCategory;

    fn category(&self) -> SkillCategory {
        self.category
    }
}

impl Categorized for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }
}

impl Categorized for GalleryImage {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

/// Holds the active filter tab and derives the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelector<C> {
    active: Filter<C>,
}

impl<C: CategoryTag> Default for FilterSelector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CategoryTag> FilterSelector<C> {
    pub fn new() -> Self {
        Self {
            active: Filter::All,
        }
    }

    pub fn active(&self) -> Filter<C> {
        self.active
    }

    pub fn is_active(&self, filter: Filter<C>) -> bool {
        self.active == filter
    }

    /// Returns `true` if the selection changed.
    pub fn select(&mut self, filter: Filter<C>) -> bool {
        if self.active == filter {
            return false;
        }
        tracing::debug!(filter = filter.as_str(), "filter selected");
        self.active = filter;
        true
    }

    /// Select by tag string (`"all"` or a category). Unknown tags are ignored
    /// and reported as `false`.
    pub fn select_tag(&mut self, tag: &str) -> bool {
        Filter::parse(tag).is_some_and(|f| self.select(f))
    }

    /// Tabs to offer: `All`, then each category in declaration order.
    pub fn categories(&self) -> Vec<Filter<C>> {
        Filter::choices()
    }

    /// Advance to the next tab, wrapping back to `All`.
    pub fn cycle(&mut self) -> Filter<C> {
        let choices = self.categories();
        let pos = choices.iter().position(|f| *f == self.active).unwrap_or(0);
        let next = choices[(pos + 1) % choices.len()];
        self.select(next);
        next
    }

    /// Items passing the active filter, in their original order.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        items
            .iter()
            .filter(|item| self.active.admits(item.category()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SKILLS};
    use proptest::prelude::*;

    #[test]
    fn all_returns_everything_in_order() {
        let selector = FilterSelector::<SkillCategory>::new();
        let names: Vec<_> = selector.apply(&SKILLS).iter().map(|s| s.name).collect();
        let expected: Vec<_> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn data_skills_are_three_in_source_order() {
        let mut selector = FilterSelector::new();
        assert!(selector.select_tag("data"));
        let names: Vec<_> = selector.apply(&SKILLS).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Power BI", "Data Analysis", "Machine Learning"]);
    }

    #[test]
    fn web_projects() {
        let mut selector = FilterSelector::new();
        selector.select(Filter::Only(ProjectCategory::Web));
        let ids: Vec<_> = selector.apply(&PROJECTS).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn unknown_tag_keeps_selection() {
        let mut selector = FilterSelector::<SkillCategory>::new();
        selector.select_tag("tools");
        assert!(!selector.select_tag("cooking"));
        assert_eq!(selector.active(), Filter::Only(SkillCategory::Tools));
    }

    #[test]
    fn empty_match_is_valid() {
        static NO_TOOLS: [Skill; 0] = [];
        let mut selector = FilterSelector::new();
        selector.select(Filter::Only(SkillCategory::Tools));
        assert!(selector.apply(&NO_TOOLS).is_empty());
    }

    #[test]
    fn reselecting_is_not_a_change() {
        let mut selector = FilterSelector::<ProjectCategory>::new();
        assert!(!selector.select(Filter::All));
        assert!(selector.select(Filter::Only(ProjectCategory::Ml)));
        assert!(!selector.select(Filter::Only(ProjectCategory::Ml)));
    }

    #[test]
    fn cycle_visits_every_tab() {
        let mut selector = FilterSelector::<ProjectCategory>::new();
        let seen: Vec<_> = (0..4).map(|_| selector.cycle().as_str()).collect();
        assert_eq!(seen, vec!["web", "data", "ml", "all"]);
    }

    proptest! {
        #[test]
        fn filter_matches_count_and_category(idx in 0usize..5) {
            let choices = Filter::<SkillCategory>::choices();
            let filter = choices[idx];
            let mut selector = FilterSelector::new();
            selector.select(filter);
            let out = selector.apply(&SKILLS);
            match filter {
                Filter::All => prop_assert_eq!(out.len(), SKILLS.len()),
                Filter::Only(c) => {
                    prop_assert!(out.iter().all(|s| s.category == c));
                    let expected = SKILLS.iter().filter(|s| s.category == c).count();
                    prop_assert_eq!(out.len(), expected);
                }
            }
        }
    }
}
