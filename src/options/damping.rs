use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Damping", inline)]
#[serde(default)]
/// Responsiveness (λ, per second) of each damped channel. Higher is
/// snappier.
pub struct DampingOptions {
    /// Leaf bend angles about the spine axis.
    #[schemars(title = "Page Turn", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub page_turn: f32,
    /// Leaf crease angles.
    #[schemars(title = "Page Fold", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub page_fold: f32,
    /// Cover hinge angle.
    #[schemars(title = "Cover Rotation", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub cover_rotation: f32,
    /// Back cover offset.
    #[schemars(title = "Cover Translation", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub cover_translation: f32,
    /// Emissive highlight fade.
    #[schemars(title = "Highlight", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub highlight: f32,
    /// Emissive level a highlighted leaf or cover settles at.
    #[schemars(title = "Highlight Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub highlight_intensity: f32,
}

impl Default for DampingOptions {
    fn default() -> Self {
        Self {
            page_turn: 4.0,
            page_fold: 6.5,
            cover_rotation: 6.5,
            cover_translation: 6.5,
            highlight: 6.0,
            highlight_intensity: 0.08,
        }
    }
}
