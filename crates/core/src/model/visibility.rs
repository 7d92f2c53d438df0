use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use folio_protocol::{Bounds, SectionId};

/// One-shot "has this section been seen" flag.
///
/// The flag flips from `false` to `true` the first time an observation
/// reports an intersection ratio at or above the threshold, and never
/// flips back. Observations only count while at least one [`Observation`]
/// registration is alive; a trigger that was never attached stays hidden
/// forever, which is how a host without viewport observation degrades.
#[derive(Debug)]
pub struct VisibilityTrigger {
    threshold: f64,
    visible: bool,
    registrations: Arc<AtomicUsize>,
}

/// Scoped observation registration. Dropping it detaches the trigger.
#[derive(Debug)]
#[must_use = "dropping the registration detaches the trigger immediately"]
pub struct Observation {
    registrations: Arc<AtomicUsize>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.registrations.fetch_sub(1, Ordering::Relaxed);
    }
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
            registrations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Start observing. Keep the returned guard alive for as long as the
    /// section is mounted.
    pub fn attach(&self) -> Observation {
        self.registrations.fetch_add(1, Ordering::Relaxed);
        Observation {
            registrations: Arc::clone(&self.registrations),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.registrations.load(Ordering::Relaxed) > 0
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one intersection notification. Returns `true` only for the call
    /// that flips the flag.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || !self.is_attached() {
            return false;
        }
        if ratio > 0.0 && ratio >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }
}

/// Fraction of `bounds` that lies inside a viewport of the given height.
///
/// Sections span the full page width, so the area ratio reduces to the
/// height ratio. Zero-height boxes never intersect.
pub fn intersection_ratio(bounds: Bounds, viewport_height: f64) -> f64 {
    let height = bounds.height();
    if height <= 0.0 {
        return 0.0;
    }
    let visible = bounds.bottom.min(viewport_height) - bounds.top.max(0.0);
    (visible.max(0.0) / height).clamp(0.0, 1.0)
}

/// One [`VisibilityTrigger`] per page section.
#[derive(Debug)]
pub struct SectionTriggers {
    triggers: Vec<(SectionId, VisibilityTrigger)>,
}

impl SectionTriggers {
    pub fn new(threshold: f64) -> Self {
        Self {
            triggers: SectionId::ALL
                .iter()
                .map(|&id| (id, VisibilityTrigger::new(threshold)))
                .collect(),
        }
    }

    pub fn get(&self, id: SectionId) -> Option<&VisibilityTrigger> {
        self.triggers.iter().find(|(s, _)| *s == id).map(|(_, t)| t)
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.get(id).is_some_and(VisibilityTrigger::is_visible)
    }

    /// Attach the trigger for `id`, as a section does when it mounts.
    pub fn attach(&self, id: SectionId) -> Option<Observation> {
        self.get(id).map(VisibilityTrigger::attach)
    }

    /// Attach every section at once.
    pub fn attach_all(&self) -> Vec<Observation> {
        self.triggers.iter().map(|(_, t)| t.attach()).collect()
    }

    /// Feed one ratio for one section. Returns `true` if it flipped.
    pub fn observe(&mut self, id: SectionId, ratio: f64) -> bool {
        let flipped = self
            .triggers
            .iter_mut()
            .find(|(s, _)| *s == id)
            .is_some_and(|(_, t)| t.observe(ratio));
        if flipped {
            tracing::debug!(section = %id, ratio, "section revealed");
        }
        flipped
    }

    /// Observe every laid-out section against the viewport; returns the
    /// sections revealed by this frame, in the order given.
    pub fn observe_layout(
        &mut self,
        sections: &[(SectionId, Bounds)],
        viewport_height: f64,
    ) -> Vec<SectionId> {
        sections
            .iter()
            .filter_map(|&(id, bounds)| {
                self.observe(id, intersection_ratio(bounds, viewport_height))
                    .then_some(id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_once_at_threshold() {
        let mut trigger = VisibilityTrigger::new(0.3);
        let _obs = trigger.attach();
        assert!(!trigger.observe(0.1));
        assert!(!trigger.is_visible());
        assert!(trigger.observe(0.3));
        assert!(trigger.is_visible());
        // Later qualifying events are no-ops.
        assert!(!trigger.observe(0.9));
    }

    #[test]
    fn never_reverts() {
        let mut trigger = VisibilityTrigger::new(0.3);
        let _obs = trigger.attach();
        trigger.observe(1.0);
        for ratio in [0.0, 0.05, 0.29, 0.5] {
            trigger.observe(ratio);
            assert!(trigger.is_visible());
        }
    }

    #[test]
    fn unattached_trigger_stays_hidden() {
        let mut trigger = VisibilityTrigger::new(0.3);
        assert!(!trigger.observe(1.0));
        assert!(!trigger.is_visible());
    }

    #[test]
    fn dropping_registration_detaches() {
        let mut trigger = VisibilityTrigger::new(0.3);
        let obs = trigger.attach();
        assert!(trigger.is_attached());
        drop(obs);
        assert!(!trigger.is_attached());
        assert!(!trigger.observe(1.0));
    }

    #[test]
    fn nested_registrations_count() {
        let trigger = VisibilityTrigger::new(0.3);
        let a = trigger.attach();
        let b = trigger.attach();
        drop(a);
        assert!(trigger.is_attached());
        drop(b);
        assert!(!trigger.is_attached());
    }

    #[test]
    fn ratio_for_partially_visible_section() {
        // 600px viewport, section from 450 to 950: 150 of 500 visible.
        let r = intersection_ratio(Bounds::new(450.0, 950.0), 600.0);
        assert!((r - 0.3).abs() < 1e-9);
        // Scrolled above the viewport.
        assert_eq!(intersection_ratio(Bounds::new(-900.0, -100.0), 600.0), 0.0);
        // Taller than the viewport, fully covering it.
        let r = intersection_ratio(Bounds::new(-200.0, 1000.0), 600.0);
        assert!((r - 0.5).abs() < 1e-9);
        assert_eq!(intersection_ratio(Bounds::new(10.0, 10.0), 600.0), 0.0);
    }

    #[test]
    fn layout_observation_reports_new_reveals_only() {
        let mut triggers = SectionTriggers::new(0.3);
        let _obs = triggers.attach_all();
        let layout = [
            (SectionId::Hero, Bounds::new(0.0, 600.0)),
            (SectionId::About, Bounds::new(600.0, 1200.0)),
        ];
        assert_eq!(triggers.observe_layout(&layout, 600.0), vec![SectionId::Hero]);
        assert_eq!(triggers.observe_layout(&layout, 600.0), Vec::<SectionId>::new());
        assert!(!triggers.is_visible(SectionId::About));
    }
}
