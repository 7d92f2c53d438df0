use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{Color, Point, Rect};

/// A fill source: a theme token (resolved per light/dark mode) or a fixed
/// content color such as a skill's accent gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Token(ThemeToken),
    Fixed(Color),
}

impl From<ThemeToken> for Paint {
    fn from(token: ThemeToken) -> Self {
        Paint::Token(token)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Fixed(color)
    }
}

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for each decorative layer (progress
/// bar, particle field, skill bars, hero glow). Renderers consume the list
/// sequentially; each command carries all the data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle with rounded corners. `opacity` multiplies
    /// the token's resolved alpha.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        corner_radius: f64,
        opacity: f32,
    },

    /// Fill a rectangle with a horizontal two-stop gradient.
    DrawGradientRect {
        rect: Rect,
        from: Paint,
        to: Paint,
        corner_radius: f64,
        opacity: f32,
    },

    /// Draw a filled circle.
    DrawCircle {
        center: Point,
        radius: f64,
        color: ThemeToken,
        opacity: f32,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
        opacity: f32,
    },

    /// Begin a logical group (e.g. a layer). Renderers may use this for
    /// batching, layer separation, or accessibility.
    BeginGroup { id: String },

    /// End the current group.
    EndGroup,
}

impl RenderCommand {
    /// Wrap `inner` in a named group.
    pub fn group(id: &str, inner: Vec<RenderCommand>) -> Vec<RenderCommand> {
        let mut out = Vec::with_capacity(inner.len() + 2);
        out.push(RenderCommand::BeginGroup { id: id.to_string() });
        out.extend(inner);
        out.push(RenderCommand::EndGroup);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_brackets_commands() {
        let cmds = RenderCommand::group(
            "particles",
            vec![RenderCommand::DrawCircle {
                center: Point::new(1.0, 2.0),
                radius: 3.0,
                color: ThemeToken::Particle,
                opacity: 0.5,
            }],
        );
        assert_eq!(cmds.len(), 3);
        assert!(matches!(&cmds[0], RenderCommand::BeginGroup { id } if id == "particles"));
        assert!(matches!(cmds[2], RenderCommand::EndGroup));
    }

    #[test]
    fn commands_serialize_externally_tagged() {
        let cmd = RenderCommand::EndGroup;
        let json = serde_json::to_string(&cmd).unwrap_or_default();
        assert_eq!(json, "\"EndGroup\"");
    }
}
