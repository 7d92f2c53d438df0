use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::content::{
    self, ABOUT_PARAGRAPHS, ABOUT_STATS, CONTACT_METHODS, GALLERY, HERO_STATS, NAV_ITEMS,
    contact::{AVAILABILITY, AVAILABILITY_DETAIL, CONTACT_BLURB, CONTACT_HEADLINE},
    gallery::HIGHLIGHTS,
    skills::SKILL_SUMMARY,
};
use folio_core::model::Field;
use folio_core::views::{progress, skills::bar_fill};
use folio_protocol::{
    CategoryTag, Filter, Paint, RenderCommand, SectionId, Stat, ThemeMode, ThemeToken,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{InputMode, SectionSpan, TuiApp};

const BAR_CELLS: usize = 24;

fn theme_to_color(token: ThemeToken, mode: ThemeMode) -> Color {
    match (mode, token) {
        (ThemeMode::Dark, ThemeToken::Background | ThemeToken::Surface) => Color::Black,
        (ThemeMode::Light, ThemeToken::Background | ThemeToken::Surface) => Color::White,
        (ThemeMode::Dark, ThemeToken::TextPrimary) => Color::White,
        (ThemeMode::Light, ThemeToken::TextPrimary) => Color::Black,
        (ThemeMode::Dark, ThemeToken::TextSecondary) => Color::Gray,
        (ThemeMode::Light, ThemeToken::TextSecondary) => Color::DarkGray,
        (_, ThemeToken::TextMuted | ThemeToken::Border) => Color::DarkGray,
        (_, ThemeToken::AccentPrimary | ThemeToken::NavActive | ThemeToken::ProgressFill) => {
            Color::LightBlue
        }
        (_, ThemeToken::AccentSecondary) => Color::LightMagenta,
        (ThemeMode::Dark, ThemeToken::NavBackground | ThemeToken::NavActiveBackground) => {
            Color::Rgb(30, 41, 59)
        }
        (ThemeMode::Light, ThemeToken::NavBackground | ThemeToken::NavActiveBackground) => {
            Color::Rgb(226, 232, 240)
        }
        (_, ThemeToken::ProgressTrack | ThemeToken::SkillTrack) => Color::DarkGray,
        (_, ThemeToken::Particle | ThemeToken::ParticleLink | ThemeToken::Glow) => Color::Blue,
        (_, ThemeToken::Overlay) => Color::Black,
    }
}

fn paint_to_color(paint: Paint, mode: ThemeMode) -> Color {
    match paint {
        Paint::Token(token) => theme_to_color(token, mode),
        Paint::Fixed(c) => {
            let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            Color::Rgb(channel(c.r), channel(c.g), channel(c.b))
        }
    }
}

/// Paint rect commands as block cells. One command unit is one column; the
/// vertical extent is collapsed onto `area`'s first row.
fn paint_commands(buf: &mut Buffer, area: Rect, commands: &[RenderCommand], mode: ThemeMode) {
    for cmd in commands {
        let (rect, color) = match cmd {
            RenderCommand::DrawRect { rect, color, .. } => (rect, theme_to_color(*color, mode)),
            // A terminal cell holds one color; take the leading stop.
            RenderCommand::DrawGradientRect { rect, from, .. } => {
                (rect, paint_to_color(*from, mode))
            }
            _ => continue,
        };
        let start = rect.x.max(0.0) as u16;
        let end = ((rect.x + rect.w).max(0.0) as u16).min(area.width);
        for col in start..end {
            buf[(area.x + col, area.y)].set_char('▀').set_fg(color);
        }
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Builds the scrolling document and records where each section lands.
struct Document {
    lines: Vec<Line<'static>>,
    spans: Vec<SectionSpan>,
    width: usize,
    mode: ThemeMode,
}

impl Document {
    fn new(width: u16, mode: ThemeMode) -> Self {
        Self {
            lines: Vec::new(),
            spans: Vec::new(),
            width: usize::from(width).saturating_sub(4),
            mode,
        }
    }

    fn style(&self, token: ThemeToken) -> Style {
        Style::default().fg(theme_to_color(token, self.mode))
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn text(&mut self, text: &str, token: ThemeToken) {
        for line in wrap(text, self.width) {
            self.lines.push(Line::styled(format!("  {line}"), self.style(token)));
        }
    }

    fn heading(&mut self, text: &str) {
        let style = self.style(ThemeToken::TextPrimary).add_modifier(Modifier::BOLD);
        self.lines.push(Line::styled(format!("  {text}"), style));
    }

    fn stats(&mut self, stats: &[Stat]) {
        let mut spans = vec![Span::raw("  ")];
        for stat in stats {
            spans.push(Span::styled(
                stat.value,
                self.style(ThemeToken::AccentPrimary).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}   ", stat.label),
                self.style(ThemeToken::TextMuted),
            ));
        }
        self.lines.push(Line::from(spans));
    }

    fn tabs<C: CategoryTag>(&mut self, choices: &[Filter<C>], active: Filter<C>, key: &str) {
        let mut spans = vec![Span::raw("  ")];
        for &choice in choices {
            let style = if choice == active {
                self.style(ThemeToken::NavActive).add_modifier(Modifier::REVERSED)
            } else {
                self.style(ThemeToken::TextSecondary)
            };
            spans.push(Span::styled(format!(" {} ", choice.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("({key})"), self.style(ThemeToken::TextMuted)));
        self.lines.push(Line::from(spans));
    }

    fn section(&mut self, id: SectionId, body: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        self.blank();
        if id != SectionId::Hero {
            let title = content::section_title(id);
            let style = self.style(ThemeToken::AccentSecondary).add_modifier(Modifier::BOLD);
            self.lines.push(Line::styled(format!("── {title} ──"), style));
            self.blank();
        }
        body(self);
        self.blank();
        self.spans.push(SectionSpan {
            id,
            start,
            end: self.lines.len(),
        });
    }
}

fn build_document(app: &TuiApp, width: u16, now_ms: f64) -> Document {
    let page = &app.page;
    let mut doc = Document::new(width, page.theme());

    doc.section(SectionId::Hero, |doc| {
        doc.blank();
        doc.heading(content::OWNER_NAME);
        let role = Line::styled(
            format!("  {}▌", page.typed_role()),
            doc.style(ThemeToken::AccentPrimary),
        );
        doc.lines.push(role);
        doc.blank();
        doc.text(content::HERO_TAGLINE, ThemeToken::TextSecondary);
        doc.blank();
        doc.stats(&HERO_STATS);
    });

    doc.section(SectionId::About, |doc| {
        for (title, body) in &ABOUT_PARAGRAPHS {
            doc.heading(title);
            doc.text(body, ThemeToken::TextSecondary);
            doc.blank();
        }
        doc.stats(&ABOUT_STATS);
    });

    doc.section(SectionId::Skills, |doc| {
        let filter = page.skills_filter();
        doc.tabs(&filter.categories(), filter.active(), "tab");
        doc.blank();
        let since = page.since_reveal(SectionId::Skills, now_ms);
        for (i, skill) in page.visible_skills().into_iter().enumerate() {
            let filled = (bar_fill(skill, i, since) * BAR_CELLS as f64).round() as usize;
            let fill_color = paint_to_color(Paint::Fixed(skill.gradient.from), doc.mode);
            let row = Line::from(vec![
                Span::styled(
                    format!("  {:<18}", skill.name),
                    doc.style(ThemeToken::TextPrimary),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(fill_color)),
                Span::styled(
                    "░".repeat(BAR_CELLS.saturating_sub(filled)),
                    doc.style(ThemeToken::SkillTrack),
                ),
                Span::styled(format!(" {:>3}%", skill.level), doc.style(ThemeToken::TextMuted)),
            ]);
            doc.lines.push(row);
        }
        doc.blank();
        for (title, text) in &SKILL_SUMMARY {
            doc.text(&format!("{title}: {text}"), ThemeToken::TextSecondary);
        }
    });

    doc.section(SectionId::Projects, |doc| {
        let filter = page.projects_filter();
        doc.tabs(&filter.categories(), filter.active(), "shift-tab");
        doc.blank();
        let projects = page.visible_projects();
        if projects.is_empty() {
            doc.text("No projects in this category yet.", ThemeToken::TextMuted);
        }
        for project in projects {
            doc.heading(&format!("{}  [{}]", project.title, project.category.label()));
            doc.text(project.description, ThemeToken::TextSecondary);
            doc.text(&project.technologies.join(" · "), ThemeToken::AccentPrimary);
            for link in [project.link, project.github].into_iter().flatten() {
                doc.text(link, ThemeToken::TextMuted);
            }
            doc.blank();
        }
    });

    doc.section(SectionId::Gallery, |doc| {
        for (i, image) in GALLERY.iter().enumerate() {
            doc.text(
                &format!("[{}] {} ({})", i + 1, image.alt, image.category.label()),
                ThemeToken::TextPrimary,
            );
        }
        doc.text("press g to open the lightbox", ThemeToken::TextMuted);
        doc.blank();
        for (title, text) in &HIGHLIGHTS {
            doc.heading(title);
            doc.text(text, ThemeToken::TextSecondary);
        }
    });

    doc.section(SectionId::Contact, |doc| {
        doc.heading(CONTACT_HEADLINE);
        doc.text(CONTACT_BLURB, ThemeToken::TextSecondary);
        doc.blank();
        for method in &CONTACT_METHODS {
            doc.text(
                &format!("{} {}: {}  <{}>", method.icon, method.title, method.value, method.link),
                ThemeToken::TextPrimary,
            );
        }
        doc.blank();
        doc.text(AVAILABILITY, ThemeToken::AccentPrimary);
        doc.text(AVAILABILITY_DETAIL, ThemeToken::TextMuted);
        doc.blank();
        for field in Field::ALL {
            let focused = app.mode == InputMode::Compose(field);
            let value = page.contact().get(field);
            let shown = if value.is_empty() && !focused {
                field.placeholder().to_string()
            } else {
                value.replace('\n', " ⏎ ")
            };
            let marker = if focused { "▸" } else { " " };
            let style = if focused {
                doc.style(ThemeToken::NavActive)
            } else {
                doc.style(ThemeToken::TextSecondary)
            };
            let row = Line::styled(format!(" {marker} {shown}"), style);
            doc.lines.push(row);
        }
        let hint = match app.mode {
            InputMode::Browse => "press c to write a message",
            InputMode::Compose(_) => "tab next field · ctrl-enter send · esc leave",
        };
        doc.text(hint, ThemeToken::TextMuted);
        if let Some(status) = &app.status {
            doc.text(status, ThemeToken::AccentSecondary);
        }
    });

    doc
}

fn draw_nav(frame: &mut Frame<'_>, area: Rect, app: &TuiApp) {
    let mode = app.page.theme();
    let bg = if app.page.is_scrolled() {
        theme_to_color(ThemeToken::NavBackground, mode)
    } else {
        theme_to_color(ThemeToken::Background, mode)
    };
    let active = app.page.active_section();
    let mut spans = vec![Span::styled(
        format!(" {} ", content::BRAND),
        Style::default()
            .fg(theme_to_color(ThemeToken::AccentPrimary, mode))
            .add_modifier(Modifier::BOLD),
    )];
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let style = if item.id == active {
            Style::default()
                .fg(theme_to_color(ThemeToken::NavActive, mode))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme_to_color(ThemeToken::TextSecondary, mode))
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, item.label), style));
    }
    spans.push(Span::styled(
        " · t theme · q quit",
        Style::default().fg(theme_to_color(ThemeToken::TextMuted, mode)),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn draw_lightbox(frame: &mut Frame<'_>, area: Rect, app: &TuiApp) {
    let lightbox = app.page.lightbox();
    let Some(image) = lightbox.current() else {
        return;
    };
    let mode = app.page.theme();
    let width = area.width.min(60);
    let height = 7u16.min(area.height);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let lines = vec![
        Line::styled(image.alt, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(image.src),
        Line::raw(format!("{} / {}", lightbox.index() + 1, lightbox.len())),
        Line::styled(
            "← previous · → next · esc close",
            Style::default().fg(theme_to_color(ThemeToken::TextMuted, mode)),
        ),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Gallery ")
                .style(
                    Style::default()
                        .fg(theme_to_color(ThemeToken::TextPrimary, mode))
                        .bg(theme_to_color(ThemeToken::Surface, mode)),
                ),
        ),
        popup,
    );
}

pub fn run(app: &mut TuiApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut TuiApp,
) -> Result<()> {
    let started = Instant::now();
    loop {
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        app.page.tick(now_ms);
        app.page.flush(now_ms);

        let size = terminal.size()?;
        let doc = build_document(app, size.width, now_ms);
        app.doc_rows = doc.lines.len();
        app.view_rows = usize::from(size.height.saturating_sub(2));
        app.spans = doc.spans;
        app.sync_scroll(size.width, now_ms);

        let mode = app.page.theme();
        let bar = progress::render_progress(app.page.progress(), f64::from(size.width));
        let scroll = u16::try_from(app.scroll_row).unwrap_or(u16::MAX);
        let lines = doc.lines;

        terminal.draw(|frame| {
            let area = frame.area();
            let bg = Style::default()
                .bg(theme_to_color(ThemeToken::Background, mode))
                .fg(theme_to_color(ThemeToken::TextPrimary, mode));

            let bar_area = Rect::new(0, 0, area.width, area.height.min(1));
            paint_commands(frame.buffer_mut(), bar_area, &bar, mode);

            let nav_rows = area.height.saturating_sub(1).min(1);
            let nav_area = Rect::new(0, area.height.min(1), area.width, nav_rows);
            draw_nav(frame, nav_area, app);

            let content_rows = area.height.saturating_sub(2);
            let content_area = Rect::new(0, area.height.min(2), area.width, content_rows);
            frame.render_widget(
                Paragraph::new(lines).style(bg).scroll((scroll, 0)),
                content_area,
            );

            draw_lightbox(frame, content_area, app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) {
                        break;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse.kind),
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PageConfig;
    use folio_core::model::{PageState, ThemeContext};

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five six", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "one two three four five six");
    }

    #[test]
    fn document_covers_every_section_in_order() {
        let page = PageState::new(PageConfig::default(), ThemeContext::default()).expect("page");
        let app = TuiApp::new(page);
        let doc = build_document(&app, 80, 0.0);
        let ids: Vec<_> = doc.spans.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        assert!(doc.spans.windows(2).all(|w| w[0].end == w[1].start));
        assert_eq!(doc.spans.last().map(|s| s.end), Some(doc.lines.len()));
    }

    #[test]
    fn progress_strip_fills_proportionally() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        let cmds = progress::render_progress(50.0, 20.0);
        paint_commands(&mut buf, Rect::new(0, 0, 20, 1), &cmds, ThemeMode::Dark);
        assert_eq!(buf[(0, 0)].fg, Color::LightBlue);
        assert_eq!(buf[(15, 0)].fg, Color::LightMagenta);
    }
}
