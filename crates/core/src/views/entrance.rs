/// Transition delay for the `index`-th item of a revealed group.
pub fn stagger_delay_ms(index: usize, step_ms: f64, base_ms: f64) -> f64 {
    base_ms + index as f64 * step_ms
}

/// Progress of an entrance transition, `0.0` (resting, hidden) to `1.0`
/// (settled), with an ease-out cubic curve.
///
/// `elapsed_ms` is the time since the section was revealed; `None` means it
/// has not been revealed yet.
pub fn entrance_progress(elapsed_ms: Option<f64>, delay_ms: f64, duration_ms: f64) -> f64 {
    let Some(elapsed) = elapsed_ms else {
        return 0.0;
    };
    let t = elapsed - delay_ms;
    if t <= 0.0 {
        return 0.0;
    }
    if duration_ms <= 0.0 || t >= duration_ms {
        return 1.0;
    }
    ease_out_cubic(t / duration_ms)
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Vertical offset of an entering element: slides up from `distance` to 0.
pub fn slide_offset(progress: f64, distance: f64) -> f64 {
    distance * (1.0 - progress.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_matches_card_delays() {
        // Skill cards: 100ms apart after a 500ms base.
        assert_eq!(stagger_delay_ms(0, 100.0, 500.0), 500.0);
        assert_eq!(stagger_delay_ms(3, 100.0, 500.0), 800.0);
        // Gallery tiles: 200ms apart, no base.
        assert_eq!(stagger_delay_ms(2, 200.0, 0.0), 400.0);
    }

    #[test]
    fn hidden_until_revealed_and_delay_passes() {
        assert_eq!(entrance_progress(None, 0.0, 1000.0), 0.0);
        assert_eq!(entrance_progress(Some(100.0), 200.0, 1000.0), 0.0);
        assert_eq!(entrance_progress(Some(5000.0), 200.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_monotonic() {
        let mut last = 0.0;
        for ms in (0..=1200).step_by(50) {
            let p = entrance_progress(Some(f64::from(ms)), 100.0, 1000.0);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn zero_duration_snaps() {
        assert_eq!(entrance_progress(Some(1.0), 0.0, 0.0), 1.0);
    }

    #[test]
    fn slide_offset_settles_at_zero() {
        assert_eq!(slide_offset(0.0, 40.0), 40.0);
        assert_eq!(slide_offset(1.0, 40.0), 0.0);
    }
}
