use folio_protocol::{Paint, Rect, RenderCommand, ScrollFrame, ThemeToken};

/// Height of the progress strip pinned to the top of the viewport.
pub const BAR_HEIGHT: f64 = 4.0;

/// How far down the page the reader is, as a percentage in `[0, 100]`.
///
/// A page that fits entirely in the viewport reports `0`.
pub fn scroll_progress(frame: &ScrollFrame) -> f64 {
    let max = frame.max_scroll();
    if max <= 0.0 {
        return 0.0;
    }
    (frame.scroll_y / max * 100.0).clamp(0.0, 100.0)
}

/// Full-width track with a gradient fill proportional to `percent`.
pub fn render_progress(percent: f64, viewport_width: f64) -> Vec<RenderCommand> {
    let mut commands = vec![RenderCommand::DrawGradientRect {
        rect: Rect::new(0.0, 0.0, viewport_width, BAR_HEIGHT),
        from: Paint::Token(ThemeToken::AccentSecondary),
        to: Paint::Token(ThemeToken::ProgressTrack),
        corner_radius: 0.0,
        opacity: 1.0,
    }];

    let fill = viewport_width * percent.clamp(0.0, 100.0) / 100.0;
    if fill > 0.0 {
        commands.push(RenderCommand::DrawGradientRect {
            rect: Rect::new(0.0, 0.0, fill, BAR_HEIGHT),
            from: Paint::Token(ThemeToken::ProgressFill),
            to: Paint::Token(ThemeToken::AccentSecondary),
            corner_radius: 0.0,
            opacity: 1.0,
        });
    }

    RenderCommand::group("scroll-progress", commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::Viewport;

    fn frame(scroll_y: f64) -> ScrollFrame {
        ScrollFrame {
            scroll_y,
            scroll_height: 3000.0,
            viewport: Viewport::new(1200.0, 1000.0),
        }
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(scroll_progress(&frame(0.0)), 0.0);
        assert!((scroll_progress(&frame(1000.0)) - 50.0).abs() < 1e-9);
        assert_eq!(scroll_progress(&frame(2000.0)), 100.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(&frame(2600.0)), 100.0);
        assert_eq!(scroll_progress(&frame(-40.0)), 0.0);
    }

    #[test]
    fn non_scrolling_page_reports_zero() {
        let short = ScrollFrame {
            scroll_y: 0.0,
            scroll_height: 500.0,
            viewport: Viewport::new(1200.0, 1000.0),
        };
        assert_eq!(scroll_progress(&short), 0.0);
    }

    #[test]
    fn fill_width_tracks_percent() {
        let cmds = render_progress(25.0, 800.0);
        let widths: Vec<f64> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawGradientRect { rect, .. } => Some(rect.w),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![800.0, 200.0]);
    }

    #[test]
    fn empty_fill_omitted() {
        let cmds = render_progress(0.0, 800.0);
        // group begin + track + group end
        assert_eq!(cmds.len(), 3);
    }
}
