use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Physical dimensions of the leaves and covers, in scene units.
pub struct GeometryOptions {
    /// Leaf width, spine to free edge.
    #[schemars(title = "Page Width", range(min = 0.1, max = 10.0))]
    pub page_width: f32,
    /// Leaf height.
    #[schemars(title = "Page Height", range(min = 0.1, max = 10.0))]
    pub page_height: f32,
    /// Leaf thickness; also the stacking pitch of closed leaves.
    #[schemars(title = "Page Depth", range(min = 0.001, max = 0.1))]
    pub page_depth: f32,
    /// Segments along the leaf width. A leaf chain has one more bone.
    #[schemars(title = "Page Segments", range(min = 1, max = 128))]
    pub page_segments: u32,
    /// Cover board thickness.
    #[schemars(title = "Cover Depth", range(min = 0.001, max = 0.5))]
    pub cover_depth: f32,
    /// How much larger a cover is than a leaf, as a fraction.
    #[schemars(skip)]
    pub cover_scale: f32,
}

impl GeometryOptions {
    /// Width of one leaf segment (rest offset between adjacent bones).
    pub fn segment_width(&self) -> f32 {
        self.page_width / self.page_segments.max(1) as f32
    }

    /// Bones in a leaf chain.
    pub fn page_bone_count(&self) -> usize {
        self.page_segments as usize + 1
    }

    /// Cover board width.
    pub fn cover_width(&self) -> f32 {
        self.page_width * (1.0 + self.cover_scale)
    }

    /// Cover board height.
    pub fn cover_height(&self) -> f32 {
        self.page_height * (1.0 + self.cover_scale)
    }
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            page_width: 1.28,
            page_height: 1.71,
            page_depth: 0.014,
            page_segments: 30,
            cover_depth: 0.05,
            cover_scale: 0.05,
        }
    }
}
