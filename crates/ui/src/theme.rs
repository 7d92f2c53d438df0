use folio_protocol::{Color, Paint, ThemeMode, ThemeToken};

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

/// Fixed content colors pass through; tokens follow the mode.
pub fn resolve_paint(paint: Paint, mode: ThemeMode) -> egui::Color32 {
    match paint {
        Paint::Token(token) => resolve(token, mode),
        Paint::Fixed(color) => to_color32(color),
    }
}

pub fn to_color32(c: Color) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(channel(c.r), channel(c.g), channel(c.b), channel(c.a))
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Slate/indigo night palette
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x0f, 0x17, 0x2a), // slate-900
        Surface => ResolvedColor::rgb(0x1e, 0x29, 0x3b),    // slate-800
        Border => ResolvedColor::rgb(0x33, 0x41, 0x55),     // slate-700

        TextPrimary => ResolvedColor::rgb(0xf1, 0xf5, 0xf9), // slate-100
        TextSecondary => ResolvedColor::rgb(0xcb, 0xd5, 0xe1), // slate-300
        TextMuted => ResolvedColor::rgb(0x94, 0xa3, 0xb8),   // slate-400

        AccentPrimary => ResolvedColor::rgb(0x60, 0xa5, 0xfa), // blue-400
        AccentSecondary => ResolvedColor::rgb(0xc0, 0x84, 0xfc), // purple-400

        NavBackground => ResolvedColor::rgba(0x0f, 0x17, 0x2a, 235),
        NavActive => ResolvedColor::rgb(0x60, 0xa5, 0xfa),
        NavActiveBackground => ResolvedColor::rgba(0x60, 0xa5, 0xfa, 40),

        ProgressTrack => ResolvedColor::rgba(0x33, 0x41, 0x55, 160),
        ProgressFill => ResolvedColor::rgb(0x60, 0xa5, 0xfa),

        Particle => ResolvedColor::rgb(0x93, 0xc5, 0xfd), // blue-300
        ParticleLink => ResolvedColor::rgb(0x81, 0x8c, 0xf8), // indigo-400

        Glow => ResolvedColor::rgb(0x81, 0x8c, 0xf8),

        SkillTrack => ResolvedColor::rgb(0x33, 0x41, 0x55),

        Overlay => ResolvedColor::rgba(0, 0, 0, 230),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0xf8, 0xfa, 0xfc), // slate-50
        Surface => ResolvedColor::rgb(255, 255, 255),
        Border => ResolvedColor::rgb(0xe2, 0xe8, 0xf0), // slate-200

        TextPrimary => ResolvedColor::rgb(0x0f, 0x17, 0x2a),
        TextSecondary => ResolvedColor::rgb(0x47, 0x55, 0x69), // slate-600
        TextMuted => ResolvedColor::rgb(0x64, 0x74, 0x8b),     // slate-500

        AccentPrimary => ResolvedColor::rgb(0x25, 0x63, 0xeb), // blue-600
        AccentSecondary => ResolvedColor::rgb(0x93, 0x33, 0xea), // purple-600

        NavBackground => ResolvedColor::rgba(255, 255, 255, 235),
        NavActive => ResolvedColor::rgb(0x25, 0x63, 0xeb),
        NavActiveBackground => ResolvedColor::rgba(0x25, 0x63, 0xeb, 25),

        ProgressTrack => ResolvedColor::rgba(0xe2, 0xe8, 0xf0, 200),
        ProgressFill => ResolvedColor::rgb(0x25, 0x63, 0xeb),

        Particle => ResolvedColor::rgb(0x3b, 0x82, 0xf6),
        ParticleLink => ResolvedColor::rgb(0x63, 0x66, 0xf1),

        Glow => ResolvedColor::rgb(0x60, 0xa5, 0xfa),

        SkillTrack => ResolvedColor::rgb(0xe2, 0xe8, 0xf0),

        Overlay => ResolvedColor::rgba(0, 0, 0, 230),
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 44.0;
pub const FONT_TITLE: f32 = 28.0;
pub const FONT_EMPHASIS: f32 = 18.0;
pub const FONT_BODY: f32 = 15.0;
pub const FONT_CAPTION: f32 = 12.0;

// ── egui visual presets ────────────────────────────────────────────────────

fn shared(v: &mut egui::Visuals, accent: egui::Color32) {
    v.window_corner_radius = egui::CornerRadius::same(12);
    v.menu_corner_radius = egui::CornerRadius::same(8);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(8);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(8);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(8);
    v.widgets.active.corner_radius = egui::CornerRadius::same(8);
    v.widgets.open.corner_radius = egui::CornerRadius::same(8);
    v.widgets.active.bg_fill = accent;
    v.selection.stroke = egui::Stroke::new(1.0, accent);
    v.hyperlink_color = accent;
}

pub fn folio_dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    let c = |t| resolve(t, ThemeMode::Dark);
    v.panel_fill = c(ThemeToken::Background);
    v.window_fill = c(ThemeToken::Surface);
    v.extreme_bg_color = c(ThemeToken::Surface);
    v.faint_bg_color = c(ThemeToken::Surface);
    v.widgets.noninteractive.bg_fill = c(ThemeToken::Surface);
    v.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, c(ThemeToken::TextSecondary));
    v.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, c(ThemeToken::Border));
    v.widgets.inactive.bg_fill = c(ThemeToken::Border);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, c(ThemeToken::Background));
    v.selection.bg_fill = c(ThemeToken::NavActiveBackground);
    shared(&mut v, c(ThemeToken::AccentPrimary));
    v
}

pub fn folio_light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    let c = |t| resolve(t, ThemeMode::Light);
    v.panel_fill = c(ThemeToken::Background);
    v.window_fill = c(ThemeToken::Surface);
    v.extreme_bg_color = c(ThemeToken::Surface);
    v.faint_bg_color = c(ThemeToken::Background);
    v.widgets.noninteractive.bg_fill = c(ThemeToken::Surface);
    v.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, c(ThemeToken::TextSecondary));
    v.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, c(ThemeToken::Border));
    v.widgets.inactive.bg_fill = c(ThemeToken::Border);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    v.selection.bg_fill = c(ThemeToken::NavActiveBackground);
    shared(&mut v, c(ThemeToken::AccentPrimary));
    v
}

pub fn visuals(mode: ThemeMode) -> egui::Visuals {
    match mode {
        ThemeMode::Dark => folio_dark_visuals(),
        ThemeMode::Light => folio_light_visuals(),
    }
}

/// Apply the page typography scale to egui styles.
pub fn apply_folio_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 6.0);
    style.spacing.interact_size.y = 30.0;
    ctx.set_style(style);
}
