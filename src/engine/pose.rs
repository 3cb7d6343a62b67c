//! Per-frame output handed to the host's renderer.

use glam::{Vec2, Vec3};

use crate::animation::cover::{Cover, CoverSide};
use crate::animation::skeleton::{BoneChain, BoneRotation};
use crate::animation::transition::BookFlags;
use crate::options::GeometryOptions;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU-ready local rotation of one bone.
pub struct BonePose {
    /// Local rotation quaternion `(x, y, z, w)`: turn about Y, then fold
    /// about X.
    pub rotation: [f32; 4],
    /// Turn angle (radians).
    pub turn: f32,
    /// Fold angle (radians).
    pub fold: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Default for BonePose {
    fn default() -> Self {
        Self::from(BoneRotation::ZERO)
    }
}

impl From<BoneRotation> for BonePose {
    fn from(rotation: BoneRotation) -> Self {
        Self {
            rotation: rotation.to_quat().to_array(),
            turn: rotation.turn,
            fold: rotation.fold,
            _pad: [0.0; 2],
        }
    }
}

/// Append one [`BonePose`] per bone of `chain` to `out`.
pub fn write_chain(chain: &BoneChain, out: &mut Vec<BonePose>) {
    out.extend(chain.rotations().map(BonePose::from));
}

/// Pose of one content leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafPose {
    /// Slot index (`1..=n`).
    pub slot: usize,
    /// Rest offset along the stack's thickness axis.
    pub rest_z: f32,
    /// Hover emissive intensity.
    pub emissive: f32,
    /// Whether the leaf has been turned past.
    pub opened: bool,
    /// Bone rotations, hinge first. Empty while the slot is retired.
    pub bones: Vec<BonePose>,
}

/// Pose of one cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverPose {
    /// Which board.
    pub side: CoverSide,
    /// Hinge rotation.
    pub bone: BonePose,
    /// Whole-board offset from rest.
    pub translation: Vec3,
    /// Rest offset along the stack's thickness axis.
    pub rest_z: f32,
    /// Hover emissive intensity.
    pub emissive: f32,
    /// Board width and height, slightly larger than a leaf.
    pub size: Vec2,
}

impl CoverPose {
    /// Snapshot `cover`, sized from `geometry`.
    pub fn new(cover: &Cover, geometry: &GeometryOptions) -> Self {
        Self {
            side: cover.side(),
            bone: BonePose::from(cover.chain().hinge()),
            translation: cover.translation(),
            rest_z: cover.rest_z(),
            emissive: cover.highlight().intensity(),
            size: Vec2::new(geometry.cover_width(), geometry.cover_height()),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPose {
    /// Flags the frame was posed against.
    pub flags: BookFlags,
    /// Front board.
    pub front: CoverPose,
    /// Back board.
    pub back: CoverPose,
    /// Content leaves, slot order.
    pub leaves: Vec<LeafPose>,
}
