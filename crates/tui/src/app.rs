use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use folio_core::content::NAV_ITEMS;
use folio_core::model::{Field, LogSink, Observation, PageState};
use folio_protocol::{Bounds, ScrollFrame, SectionId, Viewport};

/// Terminal rows are fed to the page core in these units, so that the
/// configured anchor line and offsets keep their on-screen proportions.
pub const ROW_PX: f64 = 20.0;

const PAGE_STEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    /// Typing into the contact form.
    Compose(Field),
}

/// Where each section landed in the rendered document, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub start: usize,
    pub end: usize,
}

pub struct TuiApp {
    pub page: PageState,
    _observations: Vec<Observation>,
    sink: LogSink,
    pub mode: InputMode,
    pub scroll_row: usize,
    /// Rows of the most recently rendered document.
    pub doc_rows: usize,
    /// Rows available for the document.
    pub view_rows: usize,
    pub spans: Vec<SectionSpan>,
    pub status: Option<String>,
}

impl TuiApp {
    pub fn new(page: PageState) -> Self {
        Self {
            _observations: page.attach_all(),
            page,
            sink: LogSink,
            mode: InputMode::Browse,
            scroll_row: 0,
            doc_rows: 0,
            view_rows: 0,
            spans: Vec::new(),
            status: None,
        }
    }

    fn max_scroll(&self) -> usize {
        self.doc_rows.saturating_sub(self.view_rows)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_row = self
            .scroll_row
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    fn jump_to(&mut self, id: SectionId) {
        if let Some(span) = self.spans.iter().find(|s| s.id == id) {
            self.scroll_row = span.start.min(self.max_scroll());
        }
    }

    /// Report the current scroll position and section layout to the page.
    pub fn sync_scroll(&mut self, width_cols: u16, now_ms: f64) {
        self.scroll_row = self.scroll_row.min(self.max_scroll());
        let scroll = self.scroll_row as f64;
        let layout: Vec<(SectionId, Bounds)> = self
            .spans
            .iter()
            .map(|s| {
                (
                    s.id,
                    Bounds::new(
                        (s.start as f64 - scroll) * ROW_PX,
                        (s.end as f64 - scroll) * ROW_PX,
                    ),
                )
            })
            .collect();
        let frame = ScrollFrame {
            scroll_y: scroll * ROW_PX,
            scroll_height: self.doc_rows as f64 * ROW_PX,
            viewport: Viewport::new(
                f64::from(width_cols) * ROW_PX,
                self.view_rows as f64 * ROW_PX,
            ),
        };
        self.page.on_scroll(&frame, &layout, now_ms);
    }

    pub fn handle_mouse(&mut self, kind: MouseEventKind) {
        match kind {
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            _ => {}
        }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.mode {
            InputMode::Compose(field) => {
                self.compose_key(field, key);
                false
            }
            InputMode::Browse if self.page.lightbox().is_open() => {
                self.lightbox_key(key);
                false
            }
            InputMode::Browse => self.browse_key(key),
        }
    }

    fn browse_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(PAGE_STEP as isize),
            KeyCode::PageUp => self.scroll_by(-(PAGE_STEP as isize)),
            KeyCode::Home => self.scroll_row = 0,
            KeyCode::End => self.scroll_row = self.max_scroll(),
            KeyCode::Char('t') => {
                self.page.toggle_theme();
            }
            KeyCode::Tab => {
                self.page.skills_filter_mut().cycle();
            }
            KeyCode::BackTab => {
                self.page.projects_filter_mut().cycle();
            }
            KeyCode::Char('g') => {
                if let Err(e) = self.page.lightbox_mut().open(0) {
                    self.status = Some(e.to_string());
                }
            }
            KeyCode::Char('c') => {
                self.jump_to(SectionId::Contact);
                self.mode = InputMode::Compose(Field::Name);
                self.status = None;
            }
            KeyCode::Char(d @ '1'..='9') => {
                let index = d as usize - '1' as usize;
                if let Some(item) = NAV_ITEMS.get(index) {
                    self.jump_to(item.id);
                }
            }
            _ => {}
        }
        false
    }

    fn lightbox_key(&mut self, key: KeyEvent) {
        let lightbox = self.page.lightbox_mut();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                lightbox.previous();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                lightbox.next();
            }
            KeyCode::Esc | KeyCode::Char('q') => lightbox.close(),
            _ => {}
        }
    }

    fn compose_key(&mut self, field: Field, key: KeyEvent) {
        let next_field = |f: Field| {
            let i = Field::ALL.iter().position(|x| *x == f).unwrap_or(0);
            Field::ALL[(i + 1) % Field::ALL.len()]
        };
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Browse,
            KeyCode::Tab => self.mode = InputMode::Compose(next_field(field)),
            KeyCode::Enter
                if field == Field::Message && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.page.contact_mut().field_mut(field).push('\n');
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.page.contact_mut().field_mut(field).pop();
            }
            KeyCode::Char(ch) => self.page.contact_mut().field_mut(field).push(ch),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.page.submit_contact(&mut self.sink) {
            Ok(_) => {
                self.status = Some("Message sent. Thank you!".to_string());
                self.mode = InputMode::Browse;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use folio_core::PageConfig;
    use folio_core::model::ThemeContext;
    use folio_protocol::{Filter, SkillCategory, ThemeMode};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn app() -> TuiApp {
        let page = PageState::new(PageConfig::default(), ThemeContext::default()).expect("page");
        let mut app = TuiApp::new(page);
        app.doc_rows = 200;
        app.view_rows = 40;
        app.spans = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| SectionSpan {
                id,
                start: i * 30,
                end: i * 30 + 30,
            })
            .collect();
        app
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.scroll_row, 0);
        app.handle_key(key(KeyCode::End));
        assert_eq!(app.scroll_row, 160);
        app.handle_key(key(KeyCode::PageDown));
        assert_eq!(app.scroll_row, 160);
    }

    #[test]
    fn number_keys_jump_to_nav_targets() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.scroll_row, 60);
        app.sync_scroll(80, 0.0);
        assert_eq!(app.page.active_section(), SectionId::Skills);
    }

    #[test]
    fn tab_cycles_skill_filter_and_t_toggles_theme() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert!(app.page.skills_filter().is_active(Filter::Only(SkillCategory::Programming)));
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.page.theme(), ThemeMode::Dark);
    }

    #[test]
    fn lightbox_keys_wrap_and_close() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('g')));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.page.lightbox().index(), 2);
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert!(!app.page.lightbox().is_open());
    }

    #[test]
    fn compose_and_submit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.mode, InputMode::Compose(Field::Name));
        for ch in "Ada".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.status.as_deref(), Some("email is required"));

        app.handle_key(key(KeyCode::Tab));
        for ch in "a@b.c".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('q')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page.contact().message, "q\n");

        let mut ctrl_enter = key(KeyCode::Enter);
        ctrl_enter.modifiers = KeyModifiers::CONTROL;
        app.handle_key(ctrl_enter);
        assert_eq!(app.mode, InputMode::Browse);
        assert!(app.page.contact().name.is_empty());
    }
}
