use folio_protocol::{Paint, Rect, RenderCommand, Skill, ThemeToken};

use super::entrance::{entrance_progress, stagger_delay_ms};

pub const BAR_HEIGHT: f64 = 8.0;
pub const ROW_GAP: f64 = 28.0;

/// Fill animation runs 1s, starting 800ms after reveal plus 100ms per card.
const FILL_DURATION_MS: f64 = 1000.0;
const FILL_BASE_MS: f64 = 800.0;
const FILL_STEP_MS: f64 = 100.0;

/// How full the `index`-th bar should be, as a fraction of the bar width.
pub fn bar_fill(skill: &Skill, index: usize, since_reveal_ms: Option<f64>) -> f64 {
    let delay = stagger_delay_ms(index, FILL_STEP_MS, FILL_BASE_MS);
    skill.fraction() * entrance_progress(since_reveal_ms, delay, FILL_DURATION_MS)
}

/// One proficiency bar per skill, stacked vertically.
///
/// `since_reveal_ms` is the time since the skills section was revealed;
/// until then every bar is empty.
pub fn render_skill_bars(
    skills: &[&Skill],
    width: f64,
    since_reveal_ms: Option<f64>,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(skills.len() * 2);
    for (i, skill) in skills.iter().enumerate() {
        let y = i as f64 * ROW_GAP;
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(0.0, y, width, BAR_HEIGHT),
            color: ThemeToken::SkillTrack,
            corner_radius: BAR_HEIGHT / 2.0,
            opacity: 1.0,
        });
        let fill = width * bar_fill(skill, i, since_reveal_ms);
        if fill > 0.0 {
            commands.push(RenderCommand::DrawGradientRect {
                rect: Rect::new(0.0, y, fill, BAR_HEIGHT),
                from: Paint::Fixed(skill.gradient.from),
                to: Paint::Fixed(skill.gradient.to),
                corner_radius: BAR_HEIGHT / 2.0,
                opacity: 1.0,
            });
        }
    }
    RenderCommand::group("skill-bars", commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    #[test]
    fn bars_empty_before_reveal() {
        let skills: Vec<&Skill> = SKILLS.iter().collect();
        let cmds = render_skill_bars(&skills, 300.0, None);
        assert!(
            !cmds
                .iter()
                .any(|c| matches!(c, RenderCommand::DrawGradientRect { .. }))
        );
    }

    #[test]
    fn settled_bars_match_levels() {
        let skills: Vec<&Skill> = SKILLS.iter().take(2).collect();
        let cmds = render_skill_bars(&skills, 200.0, Some(10_000.0));
        let fills: Vec<f64> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawGradientRect { rect, .. } => Some(rect.w),
                _ => None,
            })
            .collect();
        // Python 85%, JavaScript 80%.
        assert_eq!(fills.len(), 2);
        assert!((fills[0] - 170.0).abs() < 1e-9);
        assert!((fills[1] - 160.0).abs() < 1e-9);
    }

    #[test]
    fn later_bars_start_later() {
        let skill = &SKILLS[0];
        let early = bar_fill(skill, 0, Some(1000.0));
        let late = bar_fill(skill, 5, Some(1000.0));
        assert!(early > late);
        assert_eq!(late, 0.0);
    }
}
