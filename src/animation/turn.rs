//! Per-leaf turn timer.

use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Tracks when a leaf's `opened` flag last flipped.
#[derive(Debug, Clone)]
pub struct TurnTimer {
    turned_at: Option<Instant>,
    was_opened: bool,
    duration: Duration,
}

impl TurnTimer {
    /// Timer for a leaf currently `opened`, with no turn in flight.
    pub fn new(opened: bool, duration: Duration) -> Self {
        Self {
            turned_at: None,
            was_opened: opened,
            duration,
        }
    }

    /// Record the leaf's flag at `now`; a flip restarts the turn.
    /// Returns whether it flipped.
    pub fn observe(&mut self, opened: bool, now: Instant) -> bool {
        if opened == self.was_opened {
            return false;
        }
        self.was_opened = opened;
        self.turned_at = Some(now);
        true
    }

    /// Linear fraction of the turn elapsed at `now`, in `[0, 1]`.
    /// A leaf that never flipped reports a completed turn.
    pub fn raw_progress(&self, now: Instant) -> f32 {
        let Some(turned_at) = self.turned_at else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(turned_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Shaped turn progress: `curve` applied mid-turn, zero once the turn
    /// has completed.
    pub fn progress(&self, now: Instant, curve: EasingFunction) -> f32 {
        let raw = self.raw_progress(now);
        if raw >= 1.0 {
            0.0
        } else {
            curve.evaluate(raw)
        }
    }

    /// Whether a turn is in flight at `now`.
    pub fn is_turning(&self, now: Instant) -> bool {
        self.raw_progress(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURN: Duration = Duration::from_millis(400);

    #[test]
    fn test_idle_leaf_has_no_progress() {
        let timer = TurnTimer::new(false, TURN);
        let now = Instant::now();
        assert_eq!(timer.raw_progress(now), 1.0);
        assert_eq!(timer.progress(now, EasingFunction::SineArc), 0.0);
        assert!(!timer.is_turning(now));
    }

    #[test]
    fn test_flip_starts_sine_bulge() {
        let mut timer = TurnTimer::new(false, TURN);
        let t0 = Instant::now();
        assert!(timer.observe(true, t0));
        assert!(!timer.observe(true, t0 + Duration::from_millis(10)));

        let mid = timer.progress(t0 + TURN / 2, EasingFunction::SineArc);
        assert!((mid - 1.0).abs() < 1e-5);
        let quarter = timer.progress(t0 + TURN / 4, EasingFunction::SineArc);
        assert!((quarter - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
        assert_eq!(timer.progress(t0 + TURN, EasingFunction::SineArc), 0.0);
        assert_eq!(timer.progress(t0, EasingFunction::SineArc), 0.0);
    }

    #[test]
    fn test_flip_back_restarts_turn() {
        let mut timer = TurnTimer::new(false, TURN);
        let t0 = Instant::now();
        let _ = timer.observe(true, t0);
        let t1 = t0 + Duration::from_millis(300);
        assert!(timer.observe(false, t1));
        assert!(timer.raw_progress(t1) < 1e-6);
        assert!(timer.is_turning(t1 + Duration::from_millis(100)));
    }
}
