pub mod commands;
pub mod content;
pub mod theme;
pub mod types;

pub use commands::{Paint, RenderCommand};
pub use content::{
    CategoryTag, ContactMethod, Filter, GalleryCategory, GalleryImage, Gradient, NavItem, Project,
    ProjectCategory, SectionId, Skill, SkillCategory, Stat,
};
pub use theme::{ThemeMode, ThemeToken};
pub use types::{Bounds, Color, Point, Rect, ScrollFrame, Viewport};
