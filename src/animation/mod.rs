//! Page-turn animation core.
//!
//! - [`transition`]: the page-index state machine and its step timing
//! - [`skeleton`]: bone chains for leaves and covers
//! - [`bend`]: per-bone curvature targets for a turning leaf
//! - [`cover`]: cover rotation and offset
//! - [`turn`], [`highlight`]: per-slot turn timing and hover fade

pub mod bend;
pub mod cover;
pub mod highlight;
pub mod skeleton;
pub mod transition;
pub mod turn;

pub use bend::{BendInput, BendSolver, BendStrategy};
pub use cover::{Cover, CoverSide, CoverTarget};
pub use skeleton::{Bone, BoneChain, BoneRotation, ChainKind};
pub use transition::{BookFlags, PageTransitionController, StepEvent, StepKind};
pub use turn::TurnTimer;
