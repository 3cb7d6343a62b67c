//! Bone chains approximating a bendable leaf or a rigid cover board.
//!
//! A chain is an arena of [`Bone`] records linked by integer parent
//! indices. Bone 0 is the hinge at the spine and is owned by the slot's
//! root transform; bone `i` rotates relative to bone `i - 1`.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// Local rotation of one bone, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoneRotation {
    /// Rotation about the spine axis (+y). Drives the turn and the curl.
    pub turn: f32,
    /// Rotation about the leaf's width axis (+x). The traveling crease.
    pub fold: f32,
}

impl BoneRotation {
    /// No rotation on either axis.
    pub const ZERO: Self = Self {
        turn: 0.0,
        fold: 0.0,
    };

    /// Rotation about the spine axis only.
    pub fn turn(turn: f32) -> Self {
        Self { turn, fold: 0.0 }
    }

    /// Combined local rotation (turn applied after fold).
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_y(self.turn) * Quat::from_rotation_x(self.fold)
    }
}

/// One segment of a chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    /// Index of the owning bone; `None` for the hinge.
    pub parent: Option<usize>,
    /// Rest offset from the parent (from the slot origin for the hinge).
    pub rest_offset: Vec3,
    /// Current local rotation.
    pub rotation: BoneRotation,
}

/// Whether a chain bends or swings as one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainKind {
    /// A content leaf: `segments + 1` bones.
    Leaf,
    /// A cover: a single rigid bone.
    Cover,
}

/// Ordered parent-child chain of bones for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneChain {
    kind: ChainKind,
    bones: Vec<Bone>,
}

impl BoneChain {
    /// Leaf chain of `segments + 1` bones, each one `segment_width` along +x
    /// from its parent.
    pub fn leaf(segments: u32, segment_width: f32) -> Self {
        let bones = (0..=segments as usize)
            .map(|i| Bone {
                parent: i.checked_sub(1),
                rest_offset: if i == 0 {
                    Vec3::ZERO
                } else {
                    Vec3::new(segment_width, 0.0, 0.0)
                },
                rotation: BoneRotation::ZERO,
            })
            .collect();
        Self {
            kind: ChainKind::Leaf,
            bones,
        }
    }

    /// Single-bone cover chain.
    pub fn cover() -> Self {
        Self {
            kind: ChainKind::Cover,
            bones: vec![Bone {
                parent: None,
                rest_offset: Vec3::ZERO,
                rotation: BoneRotation::ZERO,
            }],
        }
    }

    /// Adopt host-supplied bones, checking that they form one chain rooted
    /// at bone 0 with every bone owned by its predecessor.
    pub fn from_bones(
        kind: ChainKind,
        bones: Vec<Bone>,
    ) -> Result<Self, FolioError> {
        if bones.is_empty() {
            return Err(FolioError::MalformedChain(
                "chain has no bones".to_owned(),
            ));
        }
        if kind == ChainKind::Cover && bones.len() != 1 {
            return Err(FolioError::BoneCountMismatch {
                expected: 1,
                actual: bones.len(),
            });
        }
        for (i, bone) in bones.iter().enumerate() {
            if bone.parent != i.checked_sub(1) {
                return Err(FolioError::MalformedChain(format!(
                    "bone {i} has parent {:?}, expected {:?}",
                    bone.parent,
                    i.checked_sub(1)
                )));
            }
        }
        Ok(Self { kind, bones })
    }

    /// Fail unless the chain has exactly `expected` bones.
    pub fn ensure_len(&self, expected: usize) -> Result<(), FolioError> {
        if self.bones.len() == expected {
            Ok(())
        } else {
            Err(FolioError::BoneCountMismatch {
                expected,
                actual: self.bones.len(),
            })
        }
    }

    /// Leaf or cover.
    pub fn kind(&self) -> ChainKind {
        self.kind
    }

    /// Number of bones.
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Never true for a constructed chain.
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// All bones, hinge first.
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Local rotations, hinge first.
    pub fn rotations(&self) -> impl Iterator<Item = BoneRotation> + '_ {
        self.bones.iter().map(|b| b.rotation)
    }

    /// Mutable access to bone `i`'s rotation.
    pub fn rotation_mut(&mut self, i: usize) -> Option<&mut BoneRotation> {
        self.bones.get_mut(i).map(|b| &mut b.rotation)
    }

    /// Rotation of the hinge bone (the whole slot's swing).
    pub fn hinge(&self) -> BoneRotation {
        self.bones
            .first()
            .map_or(BoneRotation::ZERO, |b| b.rotation)
    }

    /// Snap every bone back to rest.
    pub fn reset(&mut self) {
        for bone in &mut self.bones {
            bone.rotation = BoneRotation::ZERO;
        }
    }

    /// Joint positions in slot space, accumulated down the chain.
    pub fn joint_positions(&self) -> Vec<Vec3> {
        let mut positions = Vec::with_capacity(self.bones.len());
        let mut origin = Vec3::ZERO;
        let mut orientation = Quat::IDENTITY;
        for bone in &self.bones {
            origin += orientation * bone.rest_offset;
            orientation *= bone.rotation.to_quat();
            positions.push(origin);
        }
        positions
    }
}
