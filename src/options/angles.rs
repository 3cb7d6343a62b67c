use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Angles", inline)]
#[serde(default)]
/// Open and closed hinge angles, in degrees about the spine axis.
pub struct AngleOptions {
    /// Leaf angle once turned past.
    pub page_open_deg: f32,
    /// Leaf angle while still unturned.
    pub page_closed_deg: f32,
    /// Cover angle while the book is open.
    pub cover_open_deg: f32,
    /// Cover angle while the book is shut.
    pub cover_closed_deg: f32,
    /// Back cover angle once it is swung fully open.
    pub back_cover_flat_deg: f32,
}

impl Default for AngleOptions {
    fn default() -> Self {
        Self {
            page_open_deg: -87.0,
            page_closed_deg: 89.0,
            cover_open_deg: -85.0,
            cover_closed_deg: 90.0,
            back_cover_flat_deg: -85.0,
        }
    }
}
