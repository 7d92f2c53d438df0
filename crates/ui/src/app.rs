use eframe::egui;
use folio_core::PageConfig;
use folio_core::content::{
    self, ABOUT_PARAGRAPHS, ABOUT_STATS, CONTACT_METHODS, GALLERY, HERO_STATS, NAV_ITEMS,
    contact::{AVAILABILITY, AVAILABILITY_DETAIL, CONTACT_BLURB, CONTACT_HEADLINE},
    gallery::HIGHLIGHTS,
    skills::SKILL_SUMMARY,
};
use folio_core::model::{Field, LogSink, Observation, PageState, ThemeContext};
use folio_core::views::entrance::{slide_offset, stagger_delay_ms};
use folio_core::views::skills::ROW_GAP;
use folio_protocol::{
    Bounds, CategoryTag, Point, ScrollFrame, SectionId, Stat, ThemeMode, ThemeToken, Viewport,
};

use crate::renderer;
use crate::theme;

/// eframe storage key for the chosen color scheme.
const THEME_KEY: &str = "folio.theme";

const ENTRANCE_MS: f64 = 700.0;
const SKILL_LABEL_WIDTH: f32 = 150.0;

/// Outcome of the last contact submission, shown under the form.
enum ContactStatus {
    Sent,
    Failed(String),
}

/// Main application state.
pub struct FolioApp {
    page: PageState,
    /// Every section is mounted for the life of the app.
    _observations: Vec<Observation>,
    sink: LogSink,
    /// Nav target waiting to be scrolled into view.
    scroll_to: Option<SectionId>,
    contact_status: Option<ContactStatus>,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let persisted = cc
            .storage
            .and_then(|s| s.get_string(THEME_KEY))
            .and_then(|s| ThemeMode::parse(&s));
        let prefers_dark = matches!(cc.egui_ctx.system_theme(), Some(egui::Theme::Dark));
        let page = PageState::new(
            PageConfig::default(),
            ThemeContext::initialize(persisted, prefers_dark),
        )?;

        cc.egui_ctx.set_visuals(theme::visuals(page.theme()));
        theme::apply_folio_typography(&cc.egui_ctx);

        Ok(Self {
            _observations: page.attach_all(),
            page,
            sink: LogSink,
            scroll_to: None,
            contact_status: None,
        })
    }

    fn color(&self, token: ThemeToken) -> egui::Color32 {
        theme::resolve(token, self.page.theme())
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        let mode = self.page.toggle_theme();
        ctx.set_visuals(theme::visuals(mode));
    }

    fn nav_bar(&mut self, ctx: &egui::Context) -> egui::Rect {
        let fill = if self.page.is_scrolled() {
            self.color(ThemeToken::NavBackground)
        } else {
            egui::Color32::TRANSPARENT
        };
        let panel = egui::TopBottomPanel::top("nav")
            .frame(egui::Frame::new().fill(fill).inner_margin(egui::Margin::symmetric(16, 10)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(content::BRAND)
                            .size(theme::FONT_EMPHASIS)
                            .strong()
                            .color(self.color(ThemeToken::AccentPrimary)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let icon = match self.page.theme() {
                            ThemeMode::Dark => "☀",
                            ThemeMode::Light => "🌙",
                        };
                        if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                            self.toggle_theme(ui.ctx());
                        }
                        let active = self.page.active_section();
                        for item in NAV_ITEMS.iter().rev() {
                            let selected = item.id == active;
                            let text = egui::RichText::new(item.label).color(if selected {
                                self.color(ThemeToken::NavActive)
                            } else {
                                self.color(ThemeToken::TextSecondary)
                            });
                            if ui.selectable_label(selected, text).clicked() {
                                self.scroll_to = Some(item.id);
                            }
                        }
                    });
                });
            });
        panel.response.rect
    }

    fn sections(&mut self, ui: &mut egui::Ui, now_ms: f64) -> Vec<(SectionId, egui::Rect)> {
        let mut rects = Vec::with_capacity(SectionId::ALL.len());
        for &id in &SectionId::ALL {
            let response = ui
                .scope(|ui| {
                    ui.add_space(48.0);
                    match id {
                        SectionId::Hero => self.hero(ui),
                        SectionId::About => self.about(ui, now_ms),
                        SectionId::Skills => self.skills(ui, now_ms),
                        SectionId::Projects => self.projects(ui, now_ms),
                        SectionId::Gallery => self.gallery(ui),
                        SectionId::Contact => self.contact(ui),
                    }
                    ui.add_space(48.0);
                })
                .response;
            if self.scroll_to == Some(id) {
                ui.scroll_to_rect(response.rect, Some(egui::Align::TOP));
                self.scroll_to = None;
            }
            rects.push((id, response.rect));
        }
        rects
    }

    fn heading(&self, ui: &mut egui::Ui, id: SectionId) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(content::section_title(id))
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(self.color(ThemeToken::TextPrimary)),
            );
        });
        ui.add_space(16.0);
    }

    /// Fade and slide an element in once its section has been revealed.
    fn entrance(&self, ui: &mut egui::Ui, id: SectionId, index: usize, now_ms: f64) {
        let delay = stagger_delay_ms(index, 100.0, 0.0);
        let progress = self.page.reveal_progress(id, delay, ENTRANCE_MS, now_ms);
        ui.set_opacity(progress as f32);
        ui.add_space(slide_offset(progress, 24.0) as f32);
    }

    fn stat_row(&self, ui: &mut egui::Ui, stats: &[Stat]) {
        ui.columns(stats.len().max(1), |cols| {
            for (col, stat) in cols.iter_mut().zip(stats) {
                col.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(stat.value)
                            .size(theme::FONT_EMPHASIS)
                            .strong()
                            .color(self.color(ThemeToken::AccentPrimary)),
                    );
                    ui.label(egui::RichText::new(stat.label).small());
                });
            }
        });
    }

    fn hero(&mut self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let pointer = ui
            .input(|i| i.pointer.hover_pos())
            .filter(|p| rect.contains(*p))
            .map(|p| Point::new((p.x - rect.left()) as f64, (p.y - rect.top()) as f64));
        self.page.set_pointer(pointer);
        renderer::render_commands(
            ui.painter(),
            &self.page.render_glow(),
            rect.min,
            self.page.theme(),
        );

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new(content::MONOGRAM)
                    .size(theme::FONT_DISPLAY)
                    .strong()
                    .color(self.color(ThemeToken::AccentSecondary)),
            );
            ui.label(
                egui::RichText::new(content::OWNER_NAME)
                    .size(theme::FONT_DISPLAY)
                    .strong()
                    .color(self.color(ThemeToken::TextPrimary)),
            );
            ui.label(
                egui::RichText::new(format!("{}|", self.page.typed_role()))
                    .size(theme::FONT_EMPHASIS)
                    .color(self.color(ThemeToken::AccentPrimary)),
            );
            ui.add_space(8.0);
            ui.label(content::HERO_TAGLINE);
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("View My Work").clicked() {
                    self.scroll_to = Some(SectionId::Projects);
                }
                if ui.button("Get In Touch").clicked() {
                    self.scroll_to = Some(SectionId::Contact);
                }
            });
            ui.add_space(16.0);
        });
        self.stat_row(ui, &HERO_STATS);
    }

    fn about(&self, ui: &mut egui::Ui, now_ms: f64) {
        self.heading(ui, SectionId::About);
        for (i, (title, body)) in ABOUT_PARAGRAPHS.iter().enumerate() {
            ui.scope(|ui| {
                self.entrance(ui, SectionId::About, i, now_ms);
                ui.label(egui::RichText::new(*title).strong().size(theme::FONT_EMPHASIS));
                ui.label(*body);
            });
            ui.add_space(12.0);
        }
        self.stat_row(ui, &ABOUT_STATS);
    }

    fn skills(&mut self, ui: &mut egui::Ui, now_ms: f64) {
        self.heading(ui, SectionId::Skills);
        ui.horizontal_wrapped(|ui| {
            let tabs = self.page.skills_filter().categories();
            for tab in tabs {
                let selected = self.page.skills_filter().is_active(tab);
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.page.skills_filter_mut().select(tab);
                }
            }
        });
        ui.add_space(12.0);

        let skills = self.page.visible_skills();
        let height = skills.len() as f32 * ROW_GAP as f32;
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        for (i, skill) in skills.iter().enumerate() {
            painter.text(
                egui::pos2(rect.left(), rect.top() + i as f32 * ROW_GAP as f32 + 4.0),
                egui::Align2::LEFT_CENTER,
                format!("{} {}  {}%", skill.icon, skill.name, skill.level),
                egui::FontId::proportional(theme::FONT_CAPTION),
                self.color(ThemeToken::TextSecondary),
            );
        }
        let bar_width = (rect.width() - SKILL_LABEL_WIDTH).max(0.0) as f64;
        renderer::render_commands(
            &painter,
            &self.page.render_skill_bars(bar_width, now_ms),
            rect.min + egui::vec2(SKILL_LABEL_WIDTH, 0.0),
            self.page.theme(),
        );

        ui.add_space(16.0);
        ui.columns(SKILL_SUMMARY.len(), |cols| {
            for (col, (title, text)) in cols.iter_mut().zip(SKILL_SUMMARY.iter()) {
                col.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(*title).strong());
                    ui.label(egui::RichText::new(*text).small());
                });
            }
        });
    }

    fn projects(&mut self, ui: &mut egui::Ui, now_ms: f64) {
        self.heading(ui, SectionId::Projects);
        ui.horizontal_wrapped(|ui| {
            for tab in self.page.projects_filter().categories() {
                let selected = self.page.projects_filter().is_active(tab);
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.page.projects_filter_mut().select(tab);
                }
            }
        });
        ui.add_space(12.0);

        let projects = self.page.visible_projects();
        if projects.is_empty() {
            ui.label("No projects in this category yet.");
            return;
        }
        for (i, project) in projects.iter().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                self.entrance(ui, SectionId::Projects, i, now_ms);
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(project.title)
                            .strong()
                            .size(theme::FONT_EMPHASIS),
                    );
                    ui.label(
                        egui::RichText::new(project.category.label())
                            .small()
                            .color(self.color(ThemeToken::AccentSecondary)),
                    );
                });
                ui.label(project.description);
                ui.horizontal_wrapped(|ui| {
                    for tech in project.technologies {
                        ui.label(egui::RichText::new(*tech).small().monospace());
                    }
                });
                ui.horizontal(|ui| {
                    if let Some(link) = project.link {
                        ui.hyperlink_to("Live demo", link);
                    }
                    if let Some(github) = project.github {
                        ui.hyperlink_to("Source", github);
                    }
                });
            });
            ui.add_space(8.0);
        }
    }

    fn gallery(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, SectionId::Gallery);
        ui.columns(GALLERY.len(), |cols| {
            for (i, (col, image)) in cols.iter_mut().zip(GALLERY.iter()).enumerate() {
                let (rect, response) = col.allocate_exact_size(
                    egui::vec2(col.available_width(), 180.0),
                    egui::Sense::click(),
                );
                col.painter().rect_filled(
                    rect,
                    egui::CornerRadius::same(12),
                    self.color(ThemeToken::Surface),
                );
                col.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    image.alt,
                    egui::FontId::proportional(theme::FONT_CAPTION),
                    self.color(ThemeToken::TextMuted),
                );
                if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    if let Err(e) = self.page.lightbox_mut().open(i) {
                        tracing::warn!(error = %e, "lightbox open failed");
                    }
                }
                col.label(egui::RichText::new(image.category.label()).small());
            }
        });
        ui.add_space(16.0);
        ui.columns(HIGHLIGHTS.len(), |cols| {
            for (col, (title, text)) in cols.iter_mut().zip(HIGHLIGHTS.iter()) {
                col.label(egui::RichText::new(*title).strong());
                col.label(*text);
            }
        });
    }

    fn contact(&mut self, ui: &mut egui::Ui) {
        self.heading(ui, SectionId::Contact);
        ui.label(egui::RichText::new(CONTACT_HEADLINE).strong().size(theme::FONT_EMPHASIS));
        ui.label(CONTACT_BLURB);
        ui.add_space(8.0);
        for method in &CONTACT_METHODS {
            ui.horizontal(|ui| {
                ui.label(format!("{} {}", method.icon, method.title));
                if method.opens_external {
                    ui.hyperlink_to(method.value, method.link).on_hover_text("Opens in a new tab");
                } else {
                    ui.hyperlink_to(method.value, method.link);
                }
            });
        }
        ui.add_space(8.0);
        ui.label(egui::RichText::new(AVAILABILITY).strong());
        ui.label(egui::RichText::new(AVAILABILITY_DETAIL).small());
        ui.add_space(16.0);

        for field in Field::ALL {
            let value = self.page.contact_mut().field_mut(field);
            let edit = match field {
                Field::Message => egui::TextEdit::multiline(value).desired_rows(5),
                Field::Name | Field::Email => egui::TextEdit::singleline(value),
            };
            ui.add(edit.hint_text(field.placeholder()).desired_width(f32::INFINITY));
        }
        if ui.button("Send Message").clicked() {
            self.contact_status = Some(match self.page.submit_contact(&mut self.sink) {
                Ok(_) => ContactStatus::Sent,
                Err(e) => ContactStatus::Failed(e.to_string()),
            });
        }
        match &self.contact_status {
            Some(ContactStatus::Sent) => {
                ui.colored_label(self.color(ThemeToken::AccentPrimary), "Message sent. Thank you!");
            }
            Some(ContactStatus::Failed(msg)) => {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
            None => {}
        }
    }

    fn lightbox(&mut self, ctx: &egui::Context, page_rect: egui::Rect) {
        let Some(image) = self.page.lightbox().current() else {
            return;
        };
        let (prev, next, close) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Escape),
            )
        });

        let overlay = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("lightbox_overlay"),
        ));
        overlay.rect_filled(page_rect, egui::CornerRadius::ZERO, self.color(ThemeToken::Overlay));

        let (mut step_prev, mut step_next, mut dismiss) = (prev, next, close);
        let position = format!(
            "{} / {}",
            self.page.lightbox().index() + 1,
            self.page.lightbox().len()
        );
        egui::Window::new("lightbox")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(image.alt).size(theme::FONT_EMPHASIS).strong());
                    ui.label(egui::RichText::new(image.src).small().monospace());
                    ui.label(position);
                    ui.horizontal(|ui| {
                        step_prev |= ui.button("‹").clicked();
                        step_next |= ui.button("›").clicked();
                        dismiss |= ui.button("✕").clicked();
                    });
                });
            });

        let lightbox = self.page.lightbox_mut();
        if dismiss {
            lightbox.close();
        } else if step_prev {
            lightbox.previous();
        } else if step_next {
            lightbox.next();
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = ctx.input(|i| i.time) * 1000.0;
        self.page.tick(now_ms);
        self.page.flush(now_ms);

        if ctx.input(|i| i.key_pressed(egui::Key::T)) && !ctx.wants_keyboard_input() {
            self.toggle_theme(ctx);
        }

        let nav_rect = self.nav_bar(ctx);

        let central = egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.max_rect();
            renderer::render_commands(
                &ctx.layer_painter(egui::LayerId::background()),
                &self.page.render_particles(),
                area.min,
                self.page.theme(),
            );

            let output = egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.sections(ui, now_ms));
            let top = output.inner_rect.top();
            let layout: Vec<(SectionId, Bounds)> = output
                .inner
                .iter()
                .map(|(id, r)| {
                    let bounds = Bounds::new((r.top() - top) as f64, (r.bottom() - top) as f64);
                    (*id, bounds)
                })
                .collect();
            let frame = ScrollFrame {
                scroll_y: output.state.offset.y as f64,
                scroll_height: output.content_size.y as f64,
                viewport: Viewport::new(
                    output.inner_rect.width() as f64,
                    output.inner_rect.height() as f64,
                ),
            };
            self.page.on_scroll(&frame, &layout, now_ms);
        });

        let progress_layer = egui::LayerId::new(egui::Order::Foreground, egui::Id::new("progress"));
        renderer::render_commands(
            &ctx.layer_painter(progress_layer),
            &self.page.render_progress(),
            nav_rect.left_top(),
            self.page.theme(),
        );

        self.lightbox(ctx, nav_rect.union(central.response.rect));

        // Particles and the typewriter animate continuously.
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.page.theme().as_str().to_string());
    }
}
