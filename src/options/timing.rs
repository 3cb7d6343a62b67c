use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Step scheduling and turn timing, in milliseconds.
pub struct TimingOptions {
    /// Delay before an ordinary leaf step.
    #[schemars(title = "Page Step", range(min = 0, max = 2000))]
    pub page_step_ms: u64,
    /// Delay before a step that swings a cover (0↔1 and the last pair).
    #[schemars(title = "Cover Step", range(min = 0, max = 2000))]
    pub cover_step_ms: u64,
    /// Faster leaf delay used while more than two slots from the target.
    /// Unset keeps every leaf step at `page_step_ms`.
    #[schemars(skip)]
    pub skip_ahead_step_ms: Option<u64>,
    /// Span of the turn curve after a leaf flips.
    #[schemars(title = "Turn Duration", range(min = 1, max = 5000))]
    pub turn_duration_ms: u64,
    /// Longest frame delta the logical clock and damped values accept.
    /// Must be at least 1.
    #[schemars(skip)]
    pub max_frame_delta_ms: u64,
}

impl TimingOptions {
    /// Delay before an ordinary leaf step.
    pub fn page_step(&self) -> Duration {
        Duration::from_millis(self.page_step_ms)
    }

    /// Delay before a cover step.
    pub fn cover_step(&self) -> Duration {
        Duration::from_millis(self.cover_step_ms)
    }

    /// Skip-ahead leaf delay, if enabled.
    pub fn skip_ahead_step(&self) -> Option<Duration> {
        self.skip_ahead_step_ms.map(Duration::from_millis)
    }

    /// Span of a single turn.
    pub fn turn_duration(&self) -> Duration {
        Duration::from_millis(self.turn_duration_ms)
    }

    /// Frame delta clamp.
    pub fn max_frame_delta(&self) -> Duration {
        Duration::from_millis(self.max_frame_delta_ms)
    }
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            page_step_ms: 150,
            cover_step_ms: 400,
            skip_ahead_step_ms: None,
            turn_duration_ms: 400,
            max_frame_delta_ms: 250,
        }
    }
}
