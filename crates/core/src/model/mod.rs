pub mod contact;
pub mod filter;
pub mod lightbox;
pub mod page;
pub mod theme;
pub mod tracker;
pub mod visibility;

pub use contact::{ContactError, ContactForm, Field, LogSink, Submission, SubmissionSink};
pub use filter::{Categorized, FilterSelector};
pub use lightbox::{Lightbox, LightboxError};
pub use page::{PageState, ScrollUpdate};
pub use theme::ThemeContext;
pub use tracker::{ActiveSectionTracker, ScrollThrottle};
pub use visibility::{Observation, SectionTriggers, VisibilityTrigger, intersection_ratio};
