//! Exponential-decay approach toward a target value.
//!
//! Every animated quantity in the book (bone turn and fold angles, cover
//! rotation and translation, emissive highlight) moves through these
//! helpers, so motion stays continuous however often targets change.
//!
//! The blend factor for one step is `1 - exp(-λ·Δt)`. It lies in `[0, 1)`
//! for every finite `λ·Δt ≥ 0`, so a step never passes the target.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Longest frame delta (seconds) a single damping step will consume.
///
/// A stalled frame beyond this is treated as this long; the value still
/// converges, just over the following frames.
pub const MAX_DELTA_SECONDS: f32 = 1.0;

/// Values that can be blended linearly toward a target.
pub trait Approach: Copy {
    /// Move `self` toward `target` by `factor` of the remaining distance.
    fn approach(self, target: Self, factor: f32) -> Self;
}

impl Approach for f32 {
    #[inline]
    fn approach(self, target: Self, factor: f32) -> Self {
        self + (target - self) * factor
    }
}

impl Approach for Vec3 {
    #[inline]
    fn approach(self, target: Self, factor: f32) -> Self {
        self + (target - self) * factor
    }
}

/// Fraction of the remaining distance covered in `dt` seconds.
///
/// Zero, negative, or non-finite inputs yield `0.0` (no movement).
#[inline]
pub fn blend_factor(lambda: f32, dt: f32) -> f32 {
    if !(lambda > 0.0 && dt > 0.0) || !lambda.is_finite() {
        return 0.0;
    }
    let dt = if dt.is_finite() {
        dt.min(MAX_DELTA_SECONDS)
    } else {
        MAX_DELTA_SECONDS
    };
    1.0 - (-lambda * dt).exp()
}

/// Damp any [`Approach`] value toward `target` with responsiveness `lambda`.
#[inline]
pub fn damp<T: Approach>(current: T, target: T, lambda: f32, dt: f32) -> T {
    current.approach(target, blend_factor(lambda, dt))
}

/// Signed shortest rotation from `from` to `to`, in `[-π, π)`.
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    (to - from + PI).rem_euclid(TAU) - PI
}

/// Damp an angle (radians) toward `target` through the shortest arc.
///
/// The result is not re-wrapped, so a value driven across `±π` keeps
/// moving continuously instead of jumping by a full turn.
#[inline]
pub fn damp_angle(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    current + shortest_angle_delta(current, target) * blend_factor(lambda, dt)
}
