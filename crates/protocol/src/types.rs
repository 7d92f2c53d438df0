use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }
}

/// Vertical extent of a section relative to the top of the viewport.
///
/// Mirrors a DOM bounding client rect: `top` goes negative once the section
/// has scrolled past the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether the horizontal line at `y` passes through this box (inclusive).
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Size of the visible area in host units (pixels, terminal rows, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything a host reports on a scroll notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollFrame {
    /// Current vertical scroll offset.
    pub scroll_y: f64,
    /// Total height of the scrollable document.
    pub scroll_height: f64,
    pub viewport: Viewport,
}

impl ScrollFrame {
    /// Largest reachable scroll offset; zero when the page fits the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport.height).max(0.0)
    }
}
