//! Front and back cover kinematics.
//!
//! A cover is a single rigid bone plus a whole-board offset. The front
//! cover swings between its closed and open angles; the back cover stays
//! under the stack until the book is turned all the way over, and slides
//! out by the stack's thickness while the book is open so it clears the
//! leaves.

use glam::Vec3;

use super::bend::{BendInput, BendSolver};
use super::highlight::Highlight;
use super::skeleton::{BoneChain, BoneRotation};
use super::transition::BookFlags;
use crate::options::{AngleOptions, DampingOptions, GeometryOptions};
use crate::util::damping::damp;

/// Which board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSide {
    /// Slot `0`.
    Front,
    /// Slot `n + 1`.
    Back,
}

/// Where a cover is heading this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverTarget {
    /// Hinge angle (radians).
    pub rotation: f32,
    /// Offset from the cover's rest position.
    pub translation: Vec3,
}

/// Hinge angles for both boards, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverAngles {
    open: f32,
    closed: f32,
    back_flat: f32,
}

impl CoverAngles {
    /// Convert the configured degrees.
    pub fn new(angles: &AngleOptions) -> Self {
        Self {
            open: angles.cover_open_deg.to_radians(),
            closed: angles.cover_closed_deg.to_radians(),
            back_flat: angles.back_cover_flat_deg.to_radians(),
        }
    }
}

/// Target hinge angle and offset for `side` given the book's flags.
pub fn cover_target(
    side: CoverSide,
    flags: &BookFlags,
    angles: &CoverAngles,
    geometry: &GeometryOptions,
) -> CoverTarget {
    match side {
        CoverSide::Front => {
            let open = !flags.book_closed || flags.back_cover_fully_open;
            CoverTarget {
                rotation: if open { angles.open } else { angles.closed },
                translation: Vec3::ZERO,
            }
        }
        CoverSide::Back => {
            let rotation = if flags.back_cover_fully_open {
                angles.back_flat
            } else {
                angles.closed
            };
            let translation = if flags.book_closed {
                Vec3::ZERO
            } else {
                let d = geometry.cover_depth / 2.0
                    + geometry.page_depth * flags.number_of_pages as f32;
                Vec3::new(d, 0.0, -d)
            };
            CoverTarget {
                rotation,
                translation,
            }
        }
    }
}

/// Animated state of one cover.
#[derive(Debug, Clone)]
pub struct Cover {
    side: CoverSide,
    chain: BoneChain,
    translation: Vec3,
    highlight: Highlight,
    rest_z: f32,
}

impl Cover {
    /// Cover at rest, shut.
    pub fn new(side: CoverSide, rest_z: f32) -> Self {
        Self {
            side,
            chain: BoneChain::cover(),
            translation: Vec3::ZERO,
            highlight: Highlight::default(),
            rest_z,
        }
    }

    /// Which board this is.
    pub fn side(&self) -> CoverSide {
        self.side
    }

    /// Current hinge angle.
    pub fn rotation(&self) -> f32 {
        self.chain.hinge().turn
    }

    /// Current offset from rest.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rest offset along the thickness axis.
    pub fn rest_z(&self) -> f32 {
        self.rest_z
    }

    /// The single-bone chain.
    pub fn chain(&self) -> &BoneChain {
        &self.chain
    }

    /// Hover state.
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Mutable hover state.
    pub fn highlight_mut(&mut self) -> &mut Highlight {
        &mut self.highlight
    }

    /// Place the cover exactly at `target` (construction only).
    pub fn snap_to(&mut self, target: &CoverTarget) {
        if let Some(rotation) = self.chain.rotation_mut(0) {
            *rotation = BoneRotation::turn(target.rotation);
        }
        self.translation = target.translation;
    }

    /// Damp rotation, offset, and highlight toward this frame's targets.
    pub fn update(
        &mut self,
        target: &CoverTarget,
        solver: &BendSolver,
        damping: &DampingOptions,
        dt: f32,
    ) {
        let input = BendInput {
            hinge_angle: target.rotation,
            turn_progress: 0.0,
            book_closed: false,
        };
        solver.step_chain(
            &mut self.chain,
            &input,
            damping.cover_rotation,
            damping.cover_rotation,
            dt,
        );
        self.translation = damp(
            self.translation,
            target.translation,
            damping.cover_translation,
            dt,
        );
        self.highlight.update(
            damping.highlight_intensity,
            damping.highlight,
            dt,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::transition::PageTransitionController;
    use crate::options::{BendOptions, TimingOptions};

    fn flags_at(pages: usize, page: usize) -> BookFlags {
        PageTransitionController::new(pages, &TimingOptions::default())
            .starting_at(page)
            .flags()
    }

    fn angles() -> CoverAngles {
        CoverAngles::new(&AngleOptions::default())
    }

    #[test]
    fn test_front_cover_angles() {
        let g = GeometryOptions::default();
        let a = angles();
        let shut = cover_target(CoverSide::Front, &flags_at(4, 0), &a, &g);
        assert_eq!(shut.rotation, 90.0_f32.to_radians());
        let open = cover_target(CoverSide::Front, &flags_at(4, 2), &a, &g);
        assert_eq!(open.rotation, (-85.0_f32).to_radians());
        let flipped = cover_target(CoverSide::Front, &flags_at(4, 6), &a, &g);
        assert_eq!(flipped.rotation, (-85.0_f32).to_radians());
        assert_eq!(open.translation, Vec3::ZERO);
    }

    #[test]
    fn test_back_cover_slides_out_while_open() {
        let g = GeometryOptions::default();
        let a = angles();
        let open = cover_target(CoverSide::Back, &flags_at(4, 3), &a, &g);
        let d = 0.05 / 2.0 + 0.014 * 4.0;
        assert!((open.translation - Vec3::new(d, 0.0, -d)).length() < 1e-6);
        assert_eq!(open.rotation, 90.0_f32.to_radians());

        let shut = cover_target(CoverSide::Back, &flags_at(4, 0), &a, &g);
        assert_eq!(shut.translation, Vec3::ZERO);

        let flat = cover_target(CoverSide::Back, &flags_at(4, 6), &a, &g);
        assert_eq!(flat.translation, Vec3::ZERO);
        assert_eq!(flat.rotation, (-85.0_f32).to_radians());
    }

    #[test]
    fn test_cover_update_converges() {
        let solver =
            BendSolver::new(&BendOptions::default(), &AngleOptions::default());
        let damping = DampingOptions::default();
        let mut cover = Cover::new(CoverSide::Back, -0.1);
        let target = CoverTarget {
            rotation: 1.0,
            translation: Vec3::new(0.1, 0.0, -0.1),
        };
        cover.highlight_mut().set_hovered(true);
        for _ in 0..600 {
            cover.update(&target, &solver, &damping, 1.0 / 60.0);
        }
        assert!((cover.rotation() - 1.0).abs() < 1e-3);
        assert!((cover.translation() - target.translation).length() < 1e-3);
        assert!((cover.highlight().intensity() - 0.08).abs() < 1e-3);
        assert_eq!(cover.side(), CoverSide::Back);
    }
}
