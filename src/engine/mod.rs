//! The book engine: owns the page state machine, every slot's bone
//! chain, and both covers, and steps them all once per frame.

mod accessors;
mod animation;
pub mod command;
mod input;
pub mod pose;
pub mod slot;

use web_time::{Duration, Instant};

pub use self::command::{BookCommand, SlotRole};
pub use self::pose::{BonePose, BookPose, CoverPose, LeafPose};
use self::slot::{back_cover_rest_z, leaf_rest_z, LeafSlot};
use crate::animation::bend::{BendInput, BendSolver};
use crate::animation::cover::{cover_target, Cover, CoverAngles, CoverSide};
use crate::animation::skeleton::BoneChain;
use crate::animation::transition::{PageTransitionController, StepEvent};
use crate::animation::turn::TurnTimer;
use crate::error::FolioError;
use crate::options::BookOptions;
use crate::util::frame_timing::FrameClock;

/// What happened during one [`BookEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// The page step that fired this frame, if any.
    pub step: Option<StepEvent>,
    /// Leaves whose turn is still in flight after this frame.
    pub turning: usize,
}

/// Animates a book of `n` content leaves between a front and a back
/// cover.
///
/// Slots are numbered `0` (front cover) through `n + 1` (back cover); the
/// page index runs `0..=n + 2`, where `0` and `n + 2` are the two closed
/// states.
///
/// # Frame loop
///
/// Call [`tick`](Self::tick) with the frame's delta (or
/// [`tick_at`](Self::tick_at) with a wall-clock instant), then read the
/// result with [`pose`](Self::pose) or the per-slot accessors. Page steps
/// fire inside `tick`, so the whole engine runs on the host's render
/// thread.
///
/// # Input
///
/// Navigation and pointer events go through
/// [`execute`](Self::execute) as [`BookCommand`]s.
pub struct BookEngine {
    options: BookOptions,
    controller: PageTransitionController,
    solver: BendSolver,
    cover_angles: CoverAngles,
    leaves: Vec<LeafSlot>,
    front: Cover,
    back: Cover,
    frame_clock: FrameClock,
    origin: Instant,
    elapsed: Duration,
    shut_down: bool,
}

impl BookEngine {
    /// Engine for `number_of_pages` content leaves, shut on the front
    /// cover, with generated leaf chains.
    pub fn new(
        number_of_pages: usize,
        options: BookOptions,
    ) -> Result<Self, FolioError> {
        let chains = (0..number_of_pages)
            .map(|_| {
                BoneChain::leaf(
                    options.geometry.page_segments,
                    options.geometry.segment_width(),
                )
            })
            .collect();
        Self::with_leaf_chains(number_of_pages, options, chains)
    }

    /// Engine driving host-supplied leaf chains, one per content slot in
    /// slot order. Each chain must have the configured bone count.
    pub fn with_leaf_chains(
        number_of_pages: usize,
        options: BookOptions,
        chains: Vec<BoneChain>,
    ) -> Result<Self, FolioError> {
        options.validate()?;
        if number_of_pages == 0 {
            return Err(FolioError::InvalidOptions(
                "a book needs at least one content page".to_owned(),
            ));
        }
        if chains.len() != number_of_pages {
            return Err(FolioError::MalformedChain(format!(
                "{} leaf chains supplied for {number_of_pages} pages",
                chains.len()
            )));
        }
        let bones = options.geometry.page_bone_count();
        for chain in &chains {
            chain.ensure_len(bones)?;
        }

        let controller =
            PageTransitionController::new(number_of_pages, &options.timing);
        let flags = controller.flags();
        let turn_duration = options.timing.turn_duration();
        let leaves = chains
            .into_iter()
            .enumerate()
            .map(|(i, chain)| {
                let slot = i + 1;
                LeafSlot::new(
                    slot,
                    leaf_rest_z(slot, &options.geometry),
                    chain,
                    TurnTimer::new(flags.opened(slot), turn_duration),
                )
            })
            .collect();

        log::info!(
            "book: {number_of_pages} pages, {bones} bones per leaf, \
             page step {:?}, cover step {:?}",
            options.timing.page_step(),
            options.timing.cover_step(),
        );

        let mut engine = Self {
            solver: BendSolver::new(&options.bend, &options.angles),
            cover_angles: CoverAngles::new(&options.angles),
            front: Cover::new(CoverSide::Front, 0.0),
            back: Cover::new(
                CoverSide::Back,
                back_cover_rest_z(number_of_pages, &options.geometry),
            ),
            frame_clock: FrameClock::new(options.timing.max_frame_delta()),
            leaves,
            controller,
            options,
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            shut_down: false,
        };
        engine.settle();
        Ok(engine)
    }

    /// Start already showing `page` (clamped), every slot placed at its
    /// resting pose for that page.
    #[must_use]
    pub fn starting_at(mut self, page: usize) -> Self {
        self.controller = self.controller.clone().starting_at(page);
        let flags = self.controller.flags();
        let turn_duration = self.options.timing.turn_duration();
        for leaf in &mut self.leaves {
            leaf.turn = TurnTimer::new(flags.opened(leaf.slot), turn_duration);
        }
        self.settle();
        self
    }

    /// Place every slot exactly on its resting target for the current
    /// flags.
    fn settle(&mut self) {
        let flags = self.controller.flags();
        for leaf in &mut self.leaves {
            let opened = flags.opened(leaf.slot);
            let input = BendInput {
                hinge_angle: self.solver.leaf_hinge_angle(
                    leaf.slot,
                    opened,
                    flags.book_closed,
                ),
                turn_progress: 0.0,
                book_closed: flags.book_closed,
            };
            leaf.snap(&self.solver, &input);
        }
        let geometry = &self.options.geometry;
        for cover in [&mut self.front, &mut self.back] {
            let target =
                cover_target(cover.side(), &flags, &self.cover_angles, geometry);
            cover.snap_to(&target);
        }
    }

    /// Current point on the engine's logical clock.
    pub fn now(&self) -> Instant {
        self.origin
            .checked_add(self.elapsed)
            .unwrap_or(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::skeleton::ChainKind;

    #[test]
    fn test_rejects_empty_book() {
        let err = BookEngine::new(0, BookOptions::default()).err();
        assert!(matches!(err, Some(FolioError::InvalidOptions(_))));
    }

    #[test]
    fn test_rejects_short_chain() {
        let options = BookOptions::default();
        let good = BoneChain::leaf(
            options.geometry.page_segments,
            options.geometry.segment_width(),
        );
        let short = BoneChain::leaf(4, 0.1);
        let err =
            BookEngine::with_leaf_chains(2, options, vec![good, short]).err();
        assert!(matches!(
            err,
            Some(FolioError::BoneCountMismatch {
                expected: 31,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_rejects_wrong_chain_count() {
        let options = BookOptions::default();
        let chain = BoneChain::leaf(
            options.geometry.page_segments,
            options.geometry.segment_width(),
        );
        let err = BookEngine::with_leaf_chains(3, options, vec![chain]).err();
        assert!(matches!(err, Some(FolioError::MalformedChain(_))));
    }

    #[test]
    fn test_rejects_invalid_options() {
        let mut options = BookOptions::default();
        options.geometry.page_segments = 0;
        assert!(BookEngine::new(2, options).is_err());
    }

    #[test]
    fn test_starting_mid_book_places_leaves() {
        let engine = BookEngine::new(4, BookOptions::default())
            .unwrap()
            .starting_at(3);
        let input = BendInput {
            hinge_angle: engine.solver.leaf_hinge_angle(1, true, false),
            turn_progress: 0.0,
            book_closed: false,
        };
        let mut targets = Vec::new();
        engine
            .solver
            .chain_targets(ChainKind::Leaf, 31, &input, &mut targets);
        let chain = engine.leaf_chain(1).unwrap();
        assert_eq!(chain.kind(), ChainKind::Leaf);
        for (rotation, target) in chain.rotations().zip(&targets) {
            assert_eq!(rotation, *target);
        }
        assert!((engine.front_cover().rotation()
            - (-85.0_f32).to_radians())
        .abs()
            < 1e-6);
        assert!(engine.back_cover().translation().x > 0.0);
    }
}
