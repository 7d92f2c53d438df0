use egui::{Color32, CornerRadius, Mesh, Pos2, Rect, Shape, Stroke};
use folio_protocol::{RenderCommand, ThemeMode};

use crate::theme;

fn to_rect(rect: &folio_protocol::Rect, offset: Pos2) -> Rect {
    Rect::from_min_size(
        Pos2::new(rect.x as f32 + offset.x, rect.y as f32 + offset.y),
        egui::vec2(rect.w as f32, rect.h as f32),
    )
}

fn to_pos(p: &folio_protocol::Point, offset: Pos2) -> Pos2 {
    Pos2::new(p.x as f32 + offset.x, p.y as f32 + offset.y)
}

fn corner(radius: f64) -> CornerRadius {
    CornerRadius::same(radius.clamp(0.0, 255.0) as u8)
}

/// Left-to-right two-stop gradient as a quad mesh.
fn gradient_mesh(rect: Rect, from: Color32, to: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), from);
    mesh.colored_vertex(rect.right_top(), to);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), from);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) {
    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                corner_radius,
                opacity,
            } => {
                let r = to_rect(rect, offset);
                if r.width() < 0.5 || r.height() < 0.5 || !painter.clip_rect().intersects(r) {
                    continue;
                }
                let fill = theme::resolve(*color, mode).gamma_multiply(*opacity);
                painter.rect_filled(r, corner(*corner_radius), fill);
            }

            RenderCommand::DrawGradientRect {
                rect,
                from,
                to,
                corner_radius: _,
                opacity,
            } => {
                // Gradients are drawn square; the strips are thin enough
                // that rounding is not visible.
                let r = to_rect(rect, offset);
                if r.width() < 0.5 || r.height() < 0.5 || !painter.clip_rect().intersects(r) {
                    continue;
                }
                let from = theme::resolve_paint(*from, mode).gamma_multiply(*opacity);
                let to = theme::resolve_paint(*to, mode).gamma_multiply(*opacity);
                painter.add(Shape::mesh(gradient_mesh(r, from, to)));
            }

            RenderCommand::DrawCircle {
                center,
                radius,
                color,
                opacity,
            } => {
                let fill = theme::resolve(*color, mode).gamma_multiply(*opacity);
                painter.circle_filled(to_pos(center, offset), *radius as f32, fill);
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
                opacity,
            } => {
                let stroke_color = theme::resolve(*color, mode).gamma_multiply(*opacity);
                painter.line_segment(
                    [to_pos(from, offset), to_pos(to, offset)],
                    Stroke::new(*width as f32, stroke_color),
                );
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // No visual effect in egui.
            }
        }
    }
}
