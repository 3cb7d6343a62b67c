use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bend", inline)]
#[serde(default)]
/// Curvature profile of a turning leaf.
pub struct BendOptions {
    /// Concave curl near the spine.
    #[schemars(title = "Inside Curve", range(min = 0.0, max = 0.5), extend("step" = 0.001))]
    pub inside_curve_strength: f32,
    /// Convex curl near the free edge.
    #[schemars(title = "Outside Curve", range(min = 0.0, max = 0.5), extend("step" = 0.001))]
    pub outside_curve_strength: f32,
    /// Mid-turn traveling bulge.
    #[schemars(title = "Turning Curve", range(min = 0.0, max = 0.5), extend("step" = 0.001))]
    pub turning_curve_strength: f32,
    /// First bone of the outside-curve region. Bones before it curl
    /// inward; the crease starts just after it.
    #[schemars(skip)]
    pub curve_split_bone: u32,
    /// Peak crease angle in degrees.
    #[schemars(title = "Fold Angle", range(min = 0.0, max = 15.0), extend("step" = 0.1))]
    pub fold_angle_deg: f32,
    /// Extra open/close angle per slot so stacked leaves fan out.
    #[schemars(title = "Stacking Angle", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub stacking_angle_deg: f32,
    /// Curve applied to the raw turn fraction.
    #[schemars(skip)]
    pub turn_curve: EasingFunction,
}

impl Default for BendOptions {
    fn default() -> Self {
        Self {
            inside_curve_strength: 0.156,
            outside_curve_strength: 0.05,
            turning_curve_strength: 0.09,
            curve_split_bone: 8,
            fold_angle_deg: 2.0,
            stacking_angle_deg: 0.9,
            turn_curve: EasingFunction::SineArc,
        }
    }
}
