//! JavaScript bridge: one `PageState` per handle, with JSON in and out.

use std::sync::{Mutex, MutexGuard};

use folio_core::content::{self, CONTACT_METHODS, GALLERY, NAV_ITEMS, PROJECTS, SKILLS};
use folio_core::model::{Field, LogSink, Observation, PageState, ThemeContext};
use folio_core::{FolioError, PageConfig};
use folio_protocol::{
    Bounds, Filter, GalleryImage, Point, ProjectCategory, ScrollFrame, SectionId, SkillCategory,
    ThemeMode, Viewport,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// A live page plus the observation registrations of its mounted sections.
struct Page {
    state: PageState,
    _observations: Vec<Observation>,
}

static PAGES: Mutex<Vec<Option<Page>>> = Mutex::new(Vec::new());

#[derive(Debug, Error)]
enum BridgeError {
    #[error("invalid page handle {0}")]
    Handle(usize),
    #[error("page registry lock poisoned")]
    Poisoned,
    #[error("unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },
    #[error(transparent)]
    Folio(#[from] FolioError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<folio_core::ConfigError> for BridgeError {
    fn from(e: folio_core::ConfigError) -> Self {
        Self::Folio(e.into())
    }
}

fn pages() -> Result<MutexGuard<'static, Vec<Option<Page>>>, BridgeError> {
    PAGES.lock().map_err(|_| BridgeError::Poisoned)
}

fn with_page<R>(
    handle: usize,
    f: impl FnOnce(&mut PageState) -> Result<R, BridgeError>,
) -> Result<R, BridgeError> {
    let mut pages = pages()?;
    let page = pages
        .get_mut(handle)
        .and_then(Option::as_mut)
        .ok_or(BridgeError::Handle(handle))?;
    f(&mut page.state)
}

fn section(id: &str) -> Result<SectionId, BridgeError> {
    SectionId::parse(id).ok_or_else(|| BridgeError::Unknown {
        kind: "section",
        value: id.to_string(),
    })
}

/// One section box as measured by `getBoundingClientRect()`.
#[derive(Debug, Deserialize)]
struct SectionBox {
    id: String,
    top: f64,
    bottom: f64,
}

#[derive(Debug, Serialize)]
struct Snapshot {
    active: SectionId,
    revealed: Vec<SectionId>,
    progress: f64,
    scrolled: bool,
    theme: ThemeMode,
}

fn snapshot(page: &PageState, revealed: Vec<SectionId>) -> Snapshot {
    Snapshot {
        active: page.active_section(),
        revealed,
        progress: page.progress(),
        scrolled: page.is_scrolled(),
        theme: page.theme(),
    }
}

#[derive(Debug, Serialize)]
struct LightboxView {
    open: bool,
    index: usize,
    len: usize,
    image: Option<&'static GalleryImage>,
}

fn lightbox_view(page: &PageState) -> LightboxView {
    let lightbox = page.lightbox();
    LightboxView {
        open: lightbox.is_open(),
        index: lightbox.index(),
        len: lightbox.len(),
        image: lightbox.current(),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(value)?)
}

// ── bridge operations ──────────────────────────────────────────────────────

fn create(
    config_json: &str,
    persisted_theme: Option<&str>,
    prefers_dark: bool,
) -> Result<usize, BridgeError> {
    let config = if config_json.trim().is_empty() {
        PageConfig::default()
    } else {
        PageConfig::from_json_str(config_json)?
    };
    let theme = ThemeContext::initialize(persisted_theme.and_then(ThemeMode::parse), prefers_dark);
    let state = PageState::new(config, theme)?;
    let page = Page {
        _observations: state.attach_all(),
        state,
    };
    let mut pages = pages()?;
    // Released slots are reused; the caller stops using a handle once released.
    if let Some(handle) = pages.iter().position(Option::is_none) {
        pages[handle] = Some(page);
        return Ok(handle);
    }
    pages.push(Some(page));
    Ok(pages.len() - 1)
}

fn release(handle: usize) -> Result<(), BridgeError> {
    let mut pages = pages()?;
    let slot = pages.get_mut(handle).ok_or(BridgeError::Handle(handle))?;
    // Dropping the page detaches its observations.
    *slot = None;
    Ok(())
}

fn scroll(
    handle: usize,
    frame: ScrollFrame,
    layout_json: &str,
    now_ms: f64,
) -> Result<String, BridgeError> {
    let boxes: Vec<SectionBox> = serde_json::from_str(layout_json)?;
    let layout = boxes
        .iter()
        .map(|b| Ok((section(&b.id)?, Bounds::new(b.top, b.bottom))))
        .collect::<Result<Vec<_>, BridgeError>>()?;
    with_page(handle, |page| {
        let update = page.on_scroll(&frame, &layout, now_ms);
        to_json(&snapshot(page, update.revealed))
    })
}

fn select_filter<C>(
    handle: usize,
    tag: &str,
    pick: impl FnOnce(&mut PageState, Filter<C>) -> Result<String, BridgeError>,
) -> Result<String, BridgeError>
where
    C: folio_protocol::CategoryTag,
{
    let filter = Filter::<C>::parse(tag).ok_or_else(|| BridgeError::Unknown {
        kind: "filter",
        value: tag.to_string(),
    })?;
    with_page(handle, |page| pick(page, filter))
}

fn set_field(handle: usize, field: &str, value: &str) -> Result<(), BridgeError> {
    let field = Field::parse(field).ok_or_else(|| BridgeError::Unknown {
        kind: "field",
        value: field.to_string(),
    })?;
    with_page(handle, |page| {
        page.contact_mut().set(field, value);
        Ok(())
    })
}

fn submit(handle: usize) -> Result<String, BridgeError> {
    with_page(handle, |page| {
        let submission = page
            .submit_contact(&mut LogSink)
            .map_err(FolioError::from)?;
        to_json(&submission)
    })
}

#[derive(Serialize)]
struct ContentView {
    owner: &'static str,
    brand: &'static str,
    tagline: &'static str,
    roles: &'static [&'static str],
    nav: &'static [folio_protocol::NavItem],
    hero_stats: &'static [folio_protocol::Stat],
    about: &'static [(&'static str, &'static str)],
    about_stats: &'static [folio_protocol::Stat],
    skills: &'static [folio_protocol::Skill],
    skill_summary: &'static [(&'static str, &'static str)],
    projects: &'static [folio_protocol::Project],
    gallery: &'static [GalleryImage],
    highlights: &'static [(&'static str, &'static str)],
    contact_methods: &'static [folio_protocol::ContactMethod],
    contact_headline: &'static str,
    contact_blurb: &'static str,
    availability: &'static str,
    availability_detail: &'static str,
}

fn content() -> ContentView {
    ContentView {
        owner: content::OWNER_NAME,
        brand: content::BRAND,
        tagline: content::HERO_TAGLINE,
        roles: &content::HERO_ROLES,
        nav: &NAV_ITEMS,
        hero_stats: &content::HERO_STATS,
        about: &content::ABOUT_PARAGRAPHS,
        about_stats: &content::ABOUT_STATS,
        skills: &SKILLS,
        skill_summary: &content::skills::SKILL_SUMMARY,
        projects: &PROJECTS,
        gallery: &GALLERY,
        highlights: &content::gallery::HIGHLIGHTS,
        contact_methods: &CONTACT_METHODS,
        contact_headline: content::contact::CONTACT_HEADLINE,
        contact_blurb: content::contact::CONTACT_BLURB,
        availability: content::contact::AVAILABILITY,
        availability_detail: content::contact::AVAILABILITY_DETAIL,
    }
}

// ── wasm-bindgen surface ───────────────────────────────────────────────────

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Create a page. `config_json` may be empty for defaults. Returns a handle.
#[wasm_bindgen]
pub fn create_page(
    config_json: &str,
    persisted_theme: Option<String>,
    prefers_dark: bool,
) -> Result<usize, JsError> {
    Ok(create(config_json, persisted_theme.as_deref(), prefers_dark)?)
}

#[wasm_bindgen]
pub fn release_page(handle: usize) -> Result<(), JsError> {
    Ok(release(handle)?)
}

/// Feed one scroll event. `layout_json` is `[{ "id", "top", "bottom" }]`.
/// Returns a JSON snapshot of the page's scroll-driven state.
#[wasm_bindgen]
pub fn on_scroll(
    handle: usize,
    scroll_y: f64,
    scroll_height: f64,
    viewport_width: f64,
    viewport_height: f64,
    layout_json: &str,
    now_ms: f64,
) -> Result<String, JsError> {
    let frame = ScrollFrame {
        scroll_y,
        scroll_height,
        viewport: Viewport::new(viewport_width, viewport_height),
    };
    Ok(scroll(handle, frame, layout_json, now_ms)?)
}

/// Trailing edge of the scroll throttle; call once per animation frame.
#[wasm_bindgen]
pub fn flush(handle: usize, now_ms: f64) -> Result<String, JsError> {
    Ok(with_page(handle, |page| {
        page.flush(now_ms);
        to_json(&snapshot(page, Vec::new()))
    })?)
}

/// Report a ratio from an `IntersectionObserver`. Returns `true` when this
/// call revealed the section.
#[wasm_bindgen]
pub fn on_intersection(handle: usize, id: &str, ratio: f64, now_ms: f64) -> Result<bool, JsError> {
    let id = section(id)?;
    Ok(with_page(handle, |page| Ok(page.on_intersection(id, ratio, now_ms)))?)
}

/// Advance animations. Returns the typewriter text.
#[wasm_bindgen]
pub fn tick(handle: usize, now_ms: f64) -> Result<String, JsError> {
    Ok(with_page(handle, |page| {
        page.tick(now_ms);
        Ok(page.typed_role().to_string())
    })?)
}

/// Pointer position relative to the hero, or `None` once it leaves.
#[wasm_bindgen]
pub fn set_pointer(handle: usize, x: Option<f64>, y: Option<f64>) -> Result<(), JsError> {
    let pointer = x.zip(y).map(|(x, y)| Point::new(x, y));
    Ok(with_page(handle, |page| {
        page.set_pointer(pointer);
        Ok(())
    })?)
}

/// Select a skills tab (`"all"` or a category). Returns the visible skills.
#[wasm_bindgen]
pub fn select_skill_filter(handle: usize, tag: &str) -> Result<String, JsError> {
    Ok(select_filter::<SkillCategory>(handle, tag, |page, filter| {
        page.skills_filter_mut().select(filter);
        to_json(&page.visible_skills())
    })?)
}

/// Select a projects tab. Returns the visible projects.
#[wasm_bindgen]
pub fn select_project_filter(handle: usize, tag: &str) -> Result<String, JsError> {
    Ok(select_filter::<ProjectCategory>(handle, tag, |page, filter| {
        page.projects_filter_mut().select(filter);
        to_json(&page.visible_projects())
    })?)
}

#[wasm_bindgen]
pub fn lightbox_open(handle: usize, index: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| {
        page.lightbox_mut().open(index).map_err(FolioError::from)?;
        to_json(&lightbox_view(page))
    })?)
}

#[wasm_bindgen]
pub fn lightbox_next(handle: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| {
        page.lightbox_mut().next();
        to_json(&lightbox_view(page))
    })?)
}

#[wasm_bindgen]
pub fn lightbox_previous(handle: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| {
        page.lightbox_mut().previous();
        to_json(&lightbox_view(page))
    })?)
}

#[wasm_bindgen]
pub fn lightbox_close(handle: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| {
        page.lightbox_mut().close();
        to_json(&lightbox_view(page))
    })?)
}

#[wasm_bindgen]
pub fn set_contact_field(handle: usize, field: &str, value: &str) -> Result<(), JsError> {
    Ok(set_field(handle, field, value)?)
}

/// Validate and send the contact form. Errors name the first missing field.
#[wasm_bindgen]
pub fn submit_contact(handle: usize) -> Result<String, JsError> {
    Ok(submit(handle)?)
}

/// Flip light/dark. Returns the new mode for the host to persist.
#[wasm_bindgen]
pub fn toggle_theme(handle: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| Ok(page.toggle_theme().as_str().to_string()))?)
}

#[wasm_bindgen]
pub fn render_progress(handle: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| to_json(&page.render_progress()))?)
}

#[wasm_bindgen]
pub fn render_particles(handle: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| to_json(&page.render_particles()))?)
}

#[wasm_bindgen]
pub fn render_glow(handle: usize) -> Result<String, JsError> {
    Ok(with_page(handle, |page| to_json(&page.render_glow()))?)
}

#[wasm_bindgen]
pub fn render_skill_bars(handle: usize, width: f64, now_ms: f64) -> Result<String, JsError> {
    Ok(with_page(handle, |page| to_json(&page.render_skill_bars(width, now_ms)))?)
}

/// All static page content, for the host to lay out.
#[wasm_bindgen]
pub fn content_json() -> Result<String, JsError> {
    Ok(to_json(&content())?)
}
