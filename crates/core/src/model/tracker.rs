use folio_protocol::{Bounds, SectionId};

/// Tracks which section sits under the navigation anchor line.
///
/// Sections are checked in the tracker's own order and the first whose box
/// straddles the anchor wins. When nothing straddles it (between sections,
/// or past either end of the page) the previous answer is kept.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    order: Vec<SectionId>,
    anchor_line: f64,
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(order: Vec<SectionId>, anchor_line: f64) -> Self {
        let active = order.first().copied().unwrap_or(SectionId::Hero);
        Self {
            order,
            anchor_line,
            active,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Evaluate one scroll notification. `layout` holds the current bounds of
    /// each mounted section; sections absent from it never match.
    ///
    /// Returns the new active section if it changed.
    pub fn on_scroll(&mut self, layout: &[(SectionId, Bounds)]) -> Option<SectionId> {
        let anchor = self.anchor_line;
        let hit = self.order.iter().copied().find(|id| {
            layout
                .iter()
                .find(|(s, _)| s == id)
                .is_some_and(|(_, b)| b.straddles(anchor))
        })?;
        if hit == self.active {
            return None;
        }
        tracing::debug!(from = %self.active, to = %hit, "active section changed");
        self.active = hit;
        Some(hit)
    }
}

/// Leading-edge throttle with a trailing flush.
///
/// Timestamps are supplied by the host in milliseconds (`performance.now()`,
/// egui's input time, ...), so the core never reads a clock itself.
#[derive(Debug, Clone)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last_run: Option<f64>,
    pending: bool,
}

impl ScrollThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_run: None,
            pending: false,
        }
    }

    fn elapsed(&self, now_ms: f64) -> bool {
        self.last_run
            .is_none_or(|last| now_ms - last >= self.interval_ms)
    }

    /// Whether an event arriving at `now_ms` should be evaluated. A rejected
    /// event is remembered so that [`ScrollThrottle::flush`] can replay it.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if self.interval_ms <= 0.0 || self.elapsed(now_ms) {
            self.last_run = Some(now_ms);
            self.pending = false;
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Trailing edge: `true` once the interval has passed since the last
    /// evaluation and an event was dropped in between.
    pub fn flush(&mut self, now_ms: f64) -> bool {
        if self.pending && self.elapsed(now_ms) {
            self.last_run = Some(now_ms);
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav_order() -> Vec<SectionId> {
        vec![
            SectionId::Hero,
            SectionId::About,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ]
    }

    /// Stacked 700px sections, scrolled by `y`.
    fn layout(y: f64) -> Vec<(SectionId, Bounds)> {
        nav_order()
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * 700.0 - y;
                (id, Bounds::new(top, top + 700.0))
            })
            .collect()
    }

    #[test]
    fn starts_at_first_section() {
        let tracker = ActiveSectionTracker::new(nav_order(), 100.0);
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn follows_scroll() {
        let mut tracker = ActiveSectionTracker::new(nav_order(), 100.0);
        assert_eq!(tracker.on_scroll(&layout(0.0)), None);
        assert_eq!(tracker.on_scroll(&layout(700.0)), Some(SectionId::About));
        assert_eq!(tracker.on_scroll(&layout(1500.0)), Some(SectionId::Skills));
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn anchor_boundaries_inclusive_and_first_match_wins() {
        let mut tracker = ActiveSectionTracker::new(nav_order(), 100.0);
        // Hero bottom and About top both sit exactly on the anchor line.
        let touching = vec![
            (SectionId::Hero, Bounds::new(-600.0, 100.0)),
            (SectionId::About, Bounds::new(100.0, 800.0)),
        ];
        assert_eq!(tracker.on_scroll(&touching), None);
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn no_match_retains_previous() {
        let mut tracker = ActiveSectionTracker::new(nav_order(), 100.0);
        tracker.on_scroll(&layout(1500.0));
        let before = tracker.active();
        // A gap around the anchor line: nothing straddles it.
        let gap = vec![
            (SectionId::Skills, Bounds::new(-500.0, 50.0)),
            (SectionId::Projects, Bounds::new(150.0, 800.0)),
        ];
        assert_eq!(tracker.on_scroll(&gap), None);
        assert_eq!(tracker.active(), before);
        assert_eq!(tracker.on_scroll(&[]), None);
        assert_eq!(tracker.active(), before);
    }

    #[test]
    fn untracked_sections_are_ignored() {
        let mut tracker = ActiveSectionTracker::new(nav_order(), 100.0);
        let only_gallery = vec![(SectionId::Gallery, Bounds::new(0.0, 700.0))];
        assert_eq!(tracker.on_scroll(&only_gallery), None);
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn throttle_admits_leading_edge_then_waits() {
        let mut t = ScrollThrottle::new(16.0);
        assert!(t.admit(0.0));
        assert!(!t.admit(5.0));
        assert!(t.is_pending());
        assert!(!t.flush(10.0));
        assert!(t.flush(16.0));
        assert!(!t.flush(40.0));
        assert!(t.admit(40.0));
    }

    #[test]
    fn zero_interval_admits_everything() {
        let mut t = ScrollThrottle::new(0.0);
        for now in [0.0, 0.0, 0.1, 0.2] {
            assert!(t.admit(now));
        }
        assert!(!t.flush(1.0));
    }
}
