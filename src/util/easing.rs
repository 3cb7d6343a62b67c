//! Easing curves that shape a page's raw turn fraction.
//!
//! The bend model multiplies its traveling-bulge and crease terms by the
//! eased value, so the curve decides how the sheet's curvature grows and
//! relaxes over a single turn.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for turn-progress curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Half sine arc: `sin(t·π)`. Zero at both ends, one at the midpoint,
    /// so a bulge appears mid-turn and flattens out again.
    SineArc,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default turn curve.
    pub const DEFAULT: EasingFunction = EasingFunction::SineArc;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SineArc => {
                // Exact zero at the end rather than sin(π) ≈ -8.7e-8.
                if t >= 1.0 {
                    0.0
                } else {
                    (t * std::f32::consts::PI).sin()
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_sine_arc_bulges_mid_turn() {
        let arc = EasingFunction::SineArc;
        assert_eq!(arc.evaluate(0.0), 0.0);
        assert_eq!(arc.evaluate(1.0), 0.0);
        assert!((arc.evaluate(0.5) - 1.0).abs() < 1e-6);
        assert!((arc.evaluate(0.25) - arc.evaluate(0.75)).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let arc = EasingFunction::SineArc;
        assert_eq!(arc.evaluate(-0.5), 0.0);
        assert_eq!(arc.evaluate(1.5), 0.0);

        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_sine_arc() {
        assert_eq!(EasingFunction::default(), EasingFunction::SineArc);
    }
}
