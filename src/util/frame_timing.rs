//! Wall-clock frame deltas for hosts that do not measure their own.

use web_time::{Duration, Instant};

/// Frame clock producing per-frame deltas for the book engine, with FPS
/// smoothing.
pub struct FrameClock {
    /// Previous frame timestamp (`None` until the first frame).
    last_frame: Option<Instant>,
    /// Deltas above this are clamped (stalled frames, backgrounded tabs).
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock that never reports a delta above `max_delta`.
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: None,
            max_delta,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Mark a frame at `now` and return the elapsed seconds since the
    /// previous one. The first frame reports zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(last);
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        if elapsed > self.max_delta {
            log::warn!(
                "stalled frame: {:.0} ms clamped to {:.0} ms",
                elapsed.as_secs_f64() * 1000.0,
                self.max_delta.as_secs_f64() * 1000.0
            );
            return self.max_delta.as_secs_f32();
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
