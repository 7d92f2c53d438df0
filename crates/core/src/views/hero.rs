use folio_protocol::{Point, RenderCommand, ThemeToken, Viewport};

const TYPE_MS: f64 = 100.0;
const DELETE_MS: f64 = 50.0;
const HOLD_MS: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Hero subtitle that types a phrase, holds it, deletes it, and moves on to
/// the next phrase, wrapping around.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    /// Characters of the current phrase shown.
    shown: usize,
    phase: Phase,
    /// Time banked toward the next step.
    carry_ms: f64,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            carry_ms: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    fn step_cost(&self) -> f64 {
        match self.phase {
            Phase::Typing => TYPE_MS,
            Phase::Holding => HOLD_MS,
            Phase::Deleting => DELETE_MS,
        }
    }

    /// Advance by `dt_ms` of wall time.
    pub fn tick(&mut self, dt_ms: f64) {
        if self.phrases.is_empty() || !dt_ms.is_finite() {
            return;
        }
        self.carry_ms += dt_ms.max(0.0);
        while self.carry_ms >= self.step_cost() {
            self.carry_ms -= self.step_cost();
            self.step();
        }
    }

    fn step(&mut self) {
        let len = self.phrase().chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

/// Pointer-following radial glow behind the hero.
///
/// Approximated with concentric discs: strongest at the pointer, fading to
/// nothing at 70% of the viewport's larger side.
pub fn render_glow(pointer: Point, viewport: &Viewport) -> Vec<RenderCommand> {
    const RINGS: usize = 8;
    let outer = viewport.width.max(viewport.height) * 0.7;
    let commands = (0..RINGS)
        .map(|i| {
            // Outermost first so inner discs paint over them.
            let t = 1.0 - i as f64 / RINGS as f64;
            RenderCommand::DrawCircle {
                center: pointer,
                radius: outer * t,
                color: ThemeToken::Glow,
                opacity: (0.3 / RINGS as f64 * (1.0 + i as f64 * 0.25)) as f32,
            }
        })
        .collect();
    RenderCommand::group("hero-glow", commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    static PHRASES: [&str; 2] = ["Hi", "Yo!"];

    #[test]
    fn types_one_char_per_step() {
        let mut tw = Typewriter::new(&PHRASES);
        assert_eq!(tw.text(), "");
        tw.tick(100.0);
        assert_eq!(tw.text(), "H");
        tw.tick(100.0);
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn holds_then_deletes_then_advances() {
        let mut tw = Typewriter::new(&PHRASES);
        tw.tick(200.0);
        tw.tick(1999.0);
        assert_eq!(tw.phase(), Phase::Holding);
        tw.tick(1.0);
        assert_eq!(tw.phase(), Phase::Deleting);
        tw.tick(100.0);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut tw = Typewriter::new(&PHRASES);
        // "Hi": type 200 + hold 2000 + delete 100; "Yo!": 300 + 2000 + 150.
        tw.tick(200.0 + 2000.0 + 100.0 + 300.0 + 2000.0 + 150.0);
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn non_finite_dt_is_ignored() {
        let mut tw = Typewriter::new(&PHRASES);
        tw.tick(f64::INFINITY);
        tw.tick(f64::NAN);
        assert_eq!(tw.text(), "");
        tw.tick(100.0);
        assert_eq!(tw.text(), "H");
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        static EMOJI: [&str; 1] = ["é⚡x"];
        let mut tw = Typewriter::new(&EMOJI);
        tw.tick(200.0);
        assert_eq!(tw.text(), "é⚡");
    }

    #[test]
    fn no_phrases_is_inert() {
        static NONE: [&str; 0] = [];
        let mut tw = Typewriter::new(&NONE);
        tw.tick(10_000.0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn glow_is_centered_on_pointer() {
        let pointer = Point::new(120.0, 80.0);
        let cmds = render_glow(pointer, &Viewport::new(1000.0, 600.0));
        let mut radii = Vec::new();
        for cmd in &cmds {
            if let RenderCommand::DrawCircle { center, radius, .. } = cmd {
                assert_eq!(*center, pointer);
                radii.push(*radius);
            }
        }
        assert_eq!(radii.len(), 8);
        assert!((radii[0] - 700.0).abs() < 1e-9);
        assert!(radii.windows(2).all(|w| w[0] > w[1]));
    }
}
