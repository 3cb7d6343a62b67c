//! Procedural bend model for a turning leaf.
//!
//! Each bone's target rotation comes from a small strategy table keyed by
//! `(chain kind, book closed, bone index)`. The curve strategies are built
//! from pure shaping functions of `(index, bones, turn progress)`, scaled by
//! the slot's overall hinge angle:
//!
//! - inside curve: `sin(i·0.2 + 0.25)` before the split bone, a concave
//!   curl at the spine
//! - outside curve: `cos(i·0.3 − 0.9)` from the split bone on, subtracted,
//!   a convex curl at the free edge
//! - turning bulge: `sin(π·i/(M−1)) · progress`, a hump that travels with
//!   the turn and vanishes at both chain ends
//! - crease: `sin(π·i/M − 0.5) · progress` about the width axis, only
//!   past the split bone
//!
//! Targets are never written to bones directly; [`BendSolver::step_chain`]
//! damps every bone toward them.

use std::f32::consts::PI;

use super::skeleton::{BoneChain, BoneRotation, ChainKind};
use crate::options::{AngleOptions, BendOptions};
use crate::util::{damping::damp_angle, easing::EasingFunction};

/// How one bone responds to its slot's hinge angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendStrategy {
    /// Takes the full hinge angle, no crease. Covers, and a closed book's
    /// hinge bone.
    Hinge,
    /// Held flat. Every non-hinge bone of a closed book.
    Rigid,
    /// Concave curl plus turning bulge.
    InsideCurve,
    /// Convex curl plus turning bulge and crease.
    OutsideCurve,
}

impl BendStrategy {
    /// Strategy for bone `index` of a chain.
    pub fn select(
        kind: ChainKind,
        book_closed: bool,
        index: usize,
        split: usize,
    ) -> Self {
        match (kind, book_closed, index) {
            (ChainKind::Cover, _, _) | (ChainKind::Leaf, true, 0) => {
                Self::Hinge
            }
            (ChainKind::Leaf, true, _) => Self::Rigid,
            (ChainKind::Leaf, false, i) if i < split => Self::InsideCurve,
            (ChainKind::Leaf, false, _) => Self::OutsideCurve,
        }
    }
}

/// Per-slot inputs to the bend model for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BendInput {
    /// Overall hinge angle for the slot (radians).
    pub hinge_angle: f32,
    /// Shaped turn progress, zero when no turn is in flight.
    pub turn_progress: f32,
    /// Whether the book is shut on either side.
    pub book_closed: bool,
}

/// Concave curl weight near the spine.
#[inline]
pub fn inside_curve(index: usize) -> f32 {
    (index as f32 * 0.2 + 0.25).sin()
}

/// Convex curl weight near the free edge.
#[inline]
pub fn outside_curve(index: usize) -> f32 {
    (index as f32 * 0.3 - 0.9).cos()
}

/// Normalized position of bone `index` along a `bones`-long chain.
#[inline]
fn chain_position(index: usize, bones: usize) -> f32 {
    if bones < 2 {
        0.0
    } else {
        index as f32 / (bones - 1) as f32
    }
}

/// Traveling bulge weight. Exactly zero at both chain ends and whenever
/// `progress` is zero.
#[inline]
pub fn turning_bulge(index: usize, bones: usize, progress: f32) -> f32 {
    if index == 0 || index + 1 >= bones {
        return 0.0;
    }
    (chain_position(index, bones) * PI).sin() * progress
}

/// Crease weight for bones past the split.
#[inline]
pub fn crease(index: usize, bones: usize, split: usize, progress: f32) -> f32 {
    if index <= split || bones == 0 {
        return 0.0;
    }
    (index as f32 * PI / bones as f32 - 0.5).sin() * progress
}

/// Computes and applies per-bone targets from [`BendOptions`].
#[derive(Debug, Clone)]
pub struct BendSolver {
    inside_strength: f32,
    outside_strength: f32,
    turning_strength: f32,
    split: usize,
    fold_angle: f32,
    stacking_angle: f32,
    page_open: f32,
    page_closed: f32,
    turn_curve: EasingFunction,
}

impl BendSolver {
    /// Solver with angles converted to radians.
    pub fn new(bend: &BendOptions, angles: &AngleOptions) -> Self {
        Self {
            inside_strength: bend.inside_curve_strength,
            outside_strength: bend.outside_curve_strength,
            turning_strength: bend.turning_curve_strength,
            split: bend.curve_split_bone as usize,
            fold_angle: bend.fold_angle_deg.to_radians(),
            stacking_angle: bend.stacking_angle_deg.to_radians(),
            page_open: angles.page_open_deg.to_radians(),
            page_closed: angles.page_closed_deg.to_radians(),
            turn_curve: bend.turn_curve,
        }
    }

    /// Curve applied to raw turn fractions.
    pub fn turn_curve(&self) -> EasingFunction {
        self.turn_curve
    }

    /// Hinge angle for content slot `slot`. While the book is open, each
    /// slot is offset by the stacking angle so the stack fans out.
    pub fn leaf_hinge_angle(
        &self,
        slot: usize,
        opened: bool,
        book_closed: bool,
    ) -> f32 {
        let base = if opened {
            self.page_open
        } else {
            self.page_closed
        };
        if book_closed {
            base
        } else {
            base + (slot as f32 - 1.0) * self.stacking_angle
        }
    }

    /// Target rotation of bone `index` in a `bones`-long chain.
    pub fn bone_target(
        &self,
        strategy: BendStrategy,
        index: usize,
        bones: usize,
        input: &BendInput,
    ) -> BoneRotation {
        let angle = input.hinge_angle;
        let progress = input.turn_progress;
        let bulge = turning_bulge(index, bones, progress) * self.turning_strength;

        let turn = match strategy {
            BendStrategy::Hinge => return BoneRotation::turn(angle),
            BendStrategy::Rigid => return BoneRotation::ZERO,
            BendStrategy::InsideCurve => {
                inside_curve(index) * self.inside_strength + bulge
            }
            BendStrategy::OutsideCurve => {
                bulge - outside_curve(index) * self.outside_strength
            }
        };
        let fold = self.fold_angle
            * angle.signum()
            * crease(index, bones, self.split, progress);

        BoneRotation {
            turn: turn * angle,
            fold,
        }
    }

    /// Write every bone's target into `out` (resized to the chain length).
    pub fn chain_targets(
        &self,
        kind: ChainKind,
        bones: usize,
        input: &BendInput,
        out: &mut Vec<BoneRotation>,
    ) {
        out.clear();
        out.extend((0..bones).map(|i| {
            let strategy =
                BendStrategy::select(kind, input.book_closed, i, self.split);
            self.bone_target(strategy, i, bones, input)
        }));
    }

    /// Damp every bone of `chain` toward its target for this frame.
    pub fn step_chain(
        &self,
        chain: &mut BoneChain,
        input: &BendInput,
        turn_lambda: f32,
        fold_lambda: f32,
        dt: f32,
    ) {
        let kind = chain.kind();
        let bones = chain.len();
        for i in 0..bones {
            let strategy =
                BendStrategy::select(kind, input.book_closed, i, self.split);
            let target = self.bone_target(strategy, i, bones, input);
            if let Some(rotation) = chain.rotation_mut(i) {
                rotation.turn =
                    damp_angle(rotation.turn, target.turn, turn_lambda, dt);
                rotation.fold =
                    damp_angle(rotation.fold, target.fold, fold_lambda, dt);
            }
        }
    }
}
