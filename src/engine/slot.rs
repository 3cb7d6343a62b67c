//! Per-leaf state owned by the engine, and the rest layout of the stack.

use crate::animation::bend::{BendInput, BendSolver};
use crate::animation::highlight::Highlight;
use crate::animation::skeleton::BoneChain;
use crate::animation::turn::TurnTimer;
use crate::options::GeometryOptions;

/// Rest offset of content slot `slot` along the thickness axis: leaves
/// stack downward from the underside of the front cover.
pub fn leaf_rest_z(slot: usize, geometry: &GeometryOptions) -> f32 {
    let below = slot.saturating_sub(1) as f32;
    -geometry.cover_depth / 2.0
        - geometry.page_depth / 2.0
        - below * geometry.page_depth
}

/// Rest offset of the back cover, flush under the last leaf.
pub fn back_cover_rest_z(
    number_of_pages: usize,
    geometry: &GeometryOptions,
) -> f32 {
    leaf_rest_z(number_of_pages + 1, geometry)
        - (geometry.cover_depth / 2.0 - geometry.page_depth / 2.0)
}

/// One content leaf: its chain (absent while retired), turn timer, and
/// hover state.
#[derive(Debug, Clone)]
pub(crate) struct LeafSlot {
    pub(crate) slot: usize,
    pub(crate) rest_z: f32,
    pub(crate) chain: Option<BoneChain>,
    pub(crate) turn: TurnTimer,
    pub(crate) highlight: Highlight,
}

impl LeafSlot {
    pub(crate) fn new(
        slot: usize,
        rest_z: f32,
        chain: BoneChain,
        turn: TurnTimer,
    ) -> Self {
        Self {
            slot,
            rest_z,
            chain: Some(chain),
            turn,
            highlight: Highlight::default(),
        }
    }

    /// Write the resting targets for `input` straight into the chain.
    pub(crate) fn snap(&mut self, solver: &BendSolver, input: &BendInput) {
        let Some(chain) = self.chain.as_mut() else {
            return;
        };
        let mut targets = Vec::with_capacity(chain.len());
        solver.chain_targets(chain.kind(), chain.len(), input, &mut targets);
        for (i, target) in targets.into_iter().enumerate() {
            if let Some(rotation) = chain.rotation_mut(i) {
                *rotation = target;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_stack_offsets() {
        let g = GeometryOptions::default();
        assert!((leaf_rest_z(1, &g) - (-0.025 - 0.007)).abs() < 1e-6);
        assert!((leaf_rest_z(3, &g) - (-0.025 - 0.007 - 0.028)).abs() < 1e-6);

        // The back cover's top face meets the bottom face of leaf n.
        let n = 4;
        let back = back_cover_rest_z(n, &g);
        let last_leaf_bottom = leaf_rest_z(n, &g) - g.page_depth / 2.0;
        let back_top = back + g.cover_depth / 2.0;
        assert!((last_leaf_bottom - back_top).abs() < 1e-6);
    }
}
