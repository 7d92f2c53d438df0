use folio_protocol::{
    Bounds, GalleryImage, Point, Project, ProjectCategory, RenderCommand, ScrollFrame, SectionId,
    Skill, SkillCategory, ThemeMode, Viewport,
};

use super::contact::{ContactError, ContactForm, Submission, SubmissionSink};
use super::filter::FilterSelector;
use super::lightbox::Lightbox;
use super::theme::ThemeContext;
use super::tracker::{ActiveSectionTracker, ScrollThrottle};
use super::visibility::{Observation, SectionTriggers};
use crate::config::PageConfig;
use crate::content::{self, GALLERY, HERO_ROLES, PROJECTS, SKILLS};
use crate::error::FolioError;
use crate::views::entrance::entrance_progress;
use crate::views::hero::{Typewriter, render_glow};
use crate::views::particles::ParticleField;
use crate::views::progress::{render_progress, scroll_progress};
use crate::views::skills::render_skill_bars;

/// Longest animation step a single [`PageState::tick`] will take.
pub const MAX_TICK_MS: f64 = 1000.0;

/// What one scroll notification changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollUpdate {
    /// Set when the tracker ran and picked a different section.
    pub active_changed: Option<SectionId>,
    /// Sections revealed by this frame.
    pub revealed: Vec<SectionId>,
    /// `false` when the throttle deferred the active-section evaluation.
    pub evaluated: bool,
}

/// All view state of one rendered page.
///
/// Hosts feed it scroll frames, intersection ratios, pointer moves, and
/// clock ticks (in milliseconds, from their own clock) and read back
/// plain values and render commands.
#[derive(Debug)]
pub struct PageState {
    config: PageConfig,
    theme: ThemeContext,
    tracker: ActiveSectionTracker,
    throttle: ScrollThrottle,
    triggers: SectionTriggers,
    revealed_at: Vec<(SectionId, f64)>,
    skills_filter: FilterSelector<SkillCategory>,
    projects_filter: FilterSelector<ProjectCategory>,
    lightbox: Lightbox<'static, GalleryImage>,
    contact: ContactForm,
    typewriter: Typewriter,
    particles: ParticleField,
    pointer: Option<Point>,
    viewport: Viewport,
    progress: f64,
    scrolled: bool,
    /// Layout from the most recent scroll, replayed by the trailing flush.
    last_layout: Vec<(SectionId, Bounds)>,
    last_tick_ms: Option<f64>,
}

impl PageState {
    pub fn new(config: PageConfig, theme: ThemeContext) -> Result<Self, FolioError> {
        config.validate()?;
        let viewport = Viewport::new(0.0, 0.0);
        Ok(Self {
            tracker: ActiveSectionTracker::new(content::tracked_sections(), config.anchor_line),
            throttle: ScrollThrottle::new(config.scroll_throttle_ms),
            triggers: SectionTriggers::new(config.visibility_threshold),
            revealed_at: Vec::new(),
            skills_filter: FilterSelector::new(),
            projects_filter: FilterSelector::new(),
            lightbox: Lightbox::new(&GALLERY)?,
            contact: ContactForm::new(),
            typewriter: Typewriter::new(&HERO_ROLES),
            particles: ParticleField::new(config.particle_count, viewport),
            pointer: None,
            viewport,
            progress: 0.0,
            scrolled: false,
            last_layout: Vec::new(),
            last_tick_ms: None,
            theme,
            config,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // -- theme --

    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle()
    }

    // -- scrolling --

    /// Start observing `id`; the section stays observable while the guard
    /// lives.
    pub fn attach(&self, id: SectionId) -> Option<Observation> {
        self.triggers.attach(id)
    }

    pub fn attach_all(&self) -> Vec<Observation> {
        self.triggers.attach_all()
    }

    /// Handle one scroll event. `layout` holds each mounted section's box in
    /// viewport coordinates.
    pub fn on_scroll(
        &mut self,
        frame: &ScrollFrame,
        layout: &[(SectionId, Bounds)],
        now_ms: f64,
    ) -> ScrollUpdate {
        self.resize(frame.viewport);
        self.progress = scroll_progress(frame);
        self.scrolled = frame.scroll_y > self.config.scrolled_offset;

        let revealed = self.triggers.observe_layout(layout, frame.viewport.height);
        for &id in &revealed {
            self.revealed_at.push((id, now_ms));
        }

        self.last_layout.clear();
        self.last_layout.extend_from_slice(layout);

        let evaluated = self.throttle.admit(now_ms);
        let active_changed = if evaluated {
            self.tracker.on_scroll(layout)
        } else {
            None
        };
        ScrollUpdate {
            active_changed,
            revealed,
            evaluated,
        }
    }

    /// Trailing edge of the scroll throttle: evaluates the last deferred
    /// layout once the interval has passed. Call from the host's frame loop.
    pub fn flush(&mut self, now_ms: f64) -> Option<SectionId> {
        if self.throttle.flush(now_ms) {
            self.tracker.on_scroll(&self.last_layout)
        } else {
            None
        }
    }

    /// Feed a ratio computed by the host's own intersection observer.
    pub fn on_intersection(&mut self, id: SectionId, ratio: f64, now_ms: f64) -> bool {
        let flipped = self.triggers.observe(id, ratio);
        if flipped {
            self.revealed_at.push((id, now_ms));
        }
        flipped
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.triggers.is_visible(id)
    }

    /// Milliseconds since `id` was revealed, or `None` while hidden.
    pub fn since_reveal(&self, id: SectionId, now_ms: f64) -> Option<f64> {
        self.revealed_at
            .iter()
            .find(|(s, _)| *s == id)
            .map(|(_, at)| (now_ms - at).max(0.0))
    }

    /// Eased entrance progress of an element inside `id`.
    pub fn reveal_progress(
        &self,
        id: SectionId,
        delay_ms: f64,
        duration_ms: f64,
        now_ms: f64,
    ) -> f64 {
        entrance_progress(self.since_reveal(id, now_ms), delay_ms, duration_ms)
    }

    /// Scroll progress in percent.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the nav bar should use its solid style.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    // -- animation --

    /// Advance time-based animations to `now_ms`. Non-finite timestamps are
    /// ignored, and one call advances by at most [`MAX_TICK_MS`], so a clock
    /// jump skips ahead instead of replaying the gap.
    pub fn tick(&mut self, now_ms: f64) {
        if !now_ms.is_finite() {
            return;
        }
        let dt = self
            .last_tick_ms
            .map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_TICK_MS));
        self.last_tick_ms = Some(now_ms);
        self.typewriter.tick(dt);
        self.particles.step(dt / 1000.0);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.particles.resize(viewport);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn typed_role(&self) -> &'static str {
        self.typewriter.text()
    }

    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    // -- filters --

    pub fn skills_filter(&self) -> &FilterSelector<SkillCategory> {
        &self.skills_filter
    }

    pub fn skills_filter_mut(&mut self) -> &mut FilterSelector<SkillCategory> {
        &mut self.skills_filter
    }

    pub fn projects_filter(&self) -> &FilterSelector<ProjectCategory> {
        &self.projects_filter
    }

    pub fn projects_filter_mut(&mut self) -> &mut FilterSelector<ProjectCategory> {
        &mut self.projects_filter
    }

    pub fn visible_skills(&self) -> Vec<&'static Skill> {
        self.skills_filter.apply(&SKILLS)
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        self.projects_filter.apply(&PROJECTS)
    }

    // -- gallery --

    pub fn lightbox(&self) -> &Lightbox<'static, GalleryImage> {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox<'static, GalleryImage> {
        &mut self.lightbox
    }

    // -- contact --

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn submit_contact<S: SubmissionSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<Submission, ContactError> {
        self.contact.submit(sink)
    }

    // -- render layers --

    pub fn render_progress(&self) -> Vec<RenderCommand> {
        render_progress(self.progress, self.viewport.width)
    }

    pub fn render_particles(&self) -> Vec<RenderCommand> {
        self.particles.render(self.theme.mode())
    }

    /// Glow under the pointer; empty while the pointer is outside the hero.
    pub fn render_glow(&self) -> Vec<RenderCommand> {
        self.pointer
            .map(|p| render_glow(p, &self.viewport))
            .unwrap_or_default()
    }

    pub fn render_skill_bars(&self, width: f64, now_ms: f64) -> Vec<RenderCommand> {
        render_skill_bars(
            &self.visible_skills(),
            width,
            self.since_reveal(SectionId::Skills, now_ms),
        )
    }
}
