use folio_protocol::{Point, RenderCommand, ThemeMode, ThemeToken, Viewport};

/// Golden-ratio conjugate; successive multiples give an even 1-D spread.
const PHI_FRAC: f64 = 0.618_033_988_749_894_9;
/// Golden angle in radians; spreads drift directions evenly.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

const BASE_SPEED: f64 = 8.0;
const LINK_DISTANCE: f64 = 120.0;
const LINK_WIDTH: f64 = 1.0;

/// `rem_euclid` can round up to exactly `extent` for tiny negative inputs.
fn wrap(v: f64, extent: f64) -> f64 {
    let r = v.rem_euclid(extent);
    if r >= extent { 0.0 } else { r }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// Units per second.
    pub velocity: Point,
    pub radius: f64,
    pub opacity: f32,
}

/// Slowly drifting particles behind the page content.
///
/// Placement is deterministic: particle `i` lands at a low-discrepancy
/// position derived from `i`, so two fields of the same size are identical
/// and tests don't need a seeded RNG.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
}

impl ParticleField {
    pub fn new(count: usize, viewport: Viewport) -> Self {
        let particles = (0..count)
            .map(|i| {
                let fi = i as f64;
                let x = (fi * PHI_FRAC).fract() * viewport.width;
                let y = (fi + 0.5) / count as f64 * viewport.height;
                let angle = fi * GOLDEN_ANGLE;
                let speed = BASE_SPEED + (i % 5) as f64 * 3.0;
                Particle {
                    position: Point::new(x, y),
                    velocity: Point::new(angle.cos() * speed, angle.sin() * speed),
                    radius: 1.0 + (i % 3) as f64,
                    opacity: 0.3 + 0.1 * (i % 4) as f32,
                }
            })
            .collect();
        Self {
            particles,
            viewport,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by `dt_secs`, wrapping at the viewport edges.
    pub fn step(&mut self, dt_secs: f64) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        if w <= 0.0 || h <= 0.0 || !dt_secs.is_finite() {
            return;
        }
        for p in &mut self.particles {
            p.position.x = wrap(p.position.x + p.velocity.x * dt_secs, w);
            p.position.y = wrap(p.position.y + p.velocity.y * dt_secs, h);
        }
    }

    /// Rescale positions into a new viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        let sx = if self.viewport.width > 0.0 {
            viewport.width / self.viewport.width
        } else {
            0.0
        };
        let sy = if self.viewport.height > 0.0 {
            viewport.height / self.viewport.height
        } else {
            0.0
        };
        for p in &mut self.particles {
            p.position.x *= sx;
            p.position.y *= sy;
        }
        self.viewport = viewport;
    }

    /// Links between nearby particles, then the particles themselves.
    /// Dark mode draws slightly brighter dots.
    pub fn render(&self, mode: ThemeMode) -> Vec<RenderCommand> {
        let boost = match mode {
            ThemeMode::Dark => 1.2,
            ThemeMode::Light => 1.0,
        };
        let mut commands = Vec::with_capacity(self.particles.len() * 2);

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.position.x - b.position.x;
                let dy = a.position.y - b.position.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < LINK_DISTANCE {
                    commands.push(RenderCommand::DrawLine {
                        from: a.position,
                        to: b.position,
                        color: ThemeToken::ParticleLink,
                        width: LINK_WIDTH,
                        opacity: (0.25 * (1.0 - dist / LINK_DISTANCE)) as f32,
                    });
                }
            }
        }

        for p in &self.particles {
            commands.push(RenderCommand::DrawCircle {
                center: p.position,
                radius: p.radius,
                color: ThemeToken::Particle,
                opacity: (p.opacity * boost).min(1.0),
            });
        }

        RenderCommand::group("particles", commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(field: &ParticleField, vp: Viewport) -> bool {
        field.particles().iter().all(|p| {
            (0.0..vp.width).contains(&p.position.x) && (0.0..vp.height).contains(&p.position.y)
        })
    }

    #[test]
    fn placement_is_deterministic_and_inside() {
        let vp = Viewport::new(800.0, 600.0);
        let a = ParticleField::new(48, vp);
        let b = ParticleField::new(48, vp);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.len(), 48);
        assert!(in_bounds(&a, vp));
    }

    #[test]
    fn drift_wraps_at_edges() {
        let vp = Viewport::new(200.0, 100.0);
        let mut field = ParticleField::new(16, vp);
        for _ in 0..500 {
            field.step(0.25);
        }
        assert!(in_bounds(&field, vp));
    }

    #[test]
    fn resize_rescales() {
        let mut field = ParticleField::new(8, Viewport::new(100.0, 100.0));
        let before = field.particles()[3].position;
        field.resize(Viewport::new(200.0, 50.0));
        let after = field.particles()[3].position;
        assert!((after.x - before.x * 2.0).abs() < 1e-9);
        assert!((after.y - before.y * 0.5).abs() < 1e-9);
    }

    #[test]
    fn render_emits_one_circle_per_particle() {
        let field = ParticleField::new(10, Viewport::new(400.0, 400.0));
        let circles = field
            .render(ThemeMode::Light)
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawCircle { .. }))
            .count();
        assert_eq!(circles, 10);
    }

    #[test]
    fn empty_field_renders_only_group() {
        let field = ParticleField::new(0, Viewport::new(400.0, 400.0));
        assert!(field.is_empty());
        assert_eq!(field.render(ThemeMode::Dark).len(), 2);
    }
}
