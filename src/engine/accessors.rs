//! Queries, pose output, and slot lifecycle for BookEngine

use super::pose::{write_chain, BookPose, CoverPose, LeafPose};
use super::slot::LeafSlot;
use super::BookEngine;
use crate::animation::cover::Cover;
use crate::animation::skeleton::BoneChain;
use crate::animation::transition::{BookFlags, PageTransitionController};
use crate::animation::turn::TurnTimer;
use crate::error::FolioError;
use crate::options::BookOptions;

impl BookEngine {
    // ── Queries ──

    /// Content leaves between the covers.
    pub fn number_of_pages(&self) -> usize {
        self.leaves.len()
    }

    /// Options the engine was built with.
    pub fn options(&self) -> &BookOptions {
        &self.options
    }

    /// Flags derived from the current page.
    pub fn flags(&self) -> BookFlags {
        self.controller.flags()
    }

    /// The page-index state machine.
    pub fn controller(&self) -> &PageTransitionController {
        &self.controller
    }

    /// Whether the current page has reached the target and nothing is
    /// pending.
    pub fn is_settled(&self) -> bool {
        self.controller.is_settled()
    }

    /// Smoothed frame rate measured by [`tick_at`](Self::tick_at).
    pub fn fps(&self) -> f32 {
        self.frame_clock.fps()
    }

    /// `opened` for every content leaf, slot order.
    pub fn leaf_opened_flags(&self) -> Vec<bool> {
        let flags = self.flags();
        self.leaves.iter().map(|l| flags.opened(l.slot)).collect()
    }

    /// Bone chain of content slot `slot`, unless out of range or retired.
    pub fn leaf_chain(&self, slot: usize) -> Option<&BoneChain> {
        self.leaf(slot).and_then(|l| l.chain.as_ref())
    }

    /// Hover emissive intensity of content slot `slot`.
    pub fn leaf_emissive(&self, slot: usize) -> Option<f32> {
        self.leaf(slot).map(|l| l.highlight.intensity())
    }

    /// Front board.
    pub fn front_cover(&self) -> &Cover {
        &self.front
    }

    /// Back board.
    pub fn back_cover(&self) -> &Cover {
        &self.back
    }

    fn leaf(&self, slot: usize) -> Option<&LeafSlot> {
        slot.checked_sub(1).and_then(|i| self.leaves.get(i))
    }

    fn leaf_mut(&mut self, slot: usize) -> Result<&mut LeafSlot, FolioError> {
        let pages = self.leaves.len();
        slot.checked_sub(1)
            .and_then(|i| self.leaves.get_mut(i))
            .ok_or(FolioError::SlotOutOfRange { slot, pages })
    }

    // ── Pose output ──

    /// Snapshot of every slot for the renderer.
    pub fn pose(&self) -> BookPose {
        let flags = self.flags();
        let leaves = self
            .leaves
            .iter()
            .map(|leaf| {
                let mut bones = Vec::new();
                if let Some(chain) = &leaf.chain {
                    write_chain(chain, &mut bones);
                }
                LeafPose {
                    slot: leaf.slot,
                    rest_z: leaf.rest_z,
                    emissive: leaf.highlight.intensity(),
                    opened: flags.opened(leaf.slot),
                    bones,
                }
            })
            .collect();
        BookPose {
            flags,
            front: CoverPose::new(&self.front, &self.options.geometry),
            back: CoverPose::new(&self.back, &self.options.geometry),
            leaves,
        }
    }

    // ── Slot lifecycle ──

    /// Detach content slot `slot`'s chain. A retired slot keeps its flags
    /// and turn timer but is no longer animated.
    pub fn retire_slot(&mut self, slot: usize) -> Result<BoneChain, FolioError> {
        let leaf = self.leaf_mut(slot)?;
        let chain = leaf.chain.take().ok_or_else(|| {
            FolioError::MalformedChain(format!("slot {slot} is already retired"))
        })?;
        log::debug!("slot {slot} retired");
        Ok(chain)
    }

    /// Return content slot `slot` to a rest-pose chain with the configured
    /// bone count. A live chain is reset in place; a retired slot gets a
    /// fresh one. Animation resumes from rest.
    pub fn rebuild_slot(&mut self, slot: usize) -> Result<(), FolioError> {
        let flags = self.flags();
        let turn_duration = self.options.timing.turn_duration();
        let leaf = self.leaf_mut(slot)?;
        if let Some(chain) = leaf.chain.as_mut() {
            chain.reset();
            leaf.turn = TurnTimer::new(flags.opened(slot), turn_duration);
            log::debug!("slot {slot} reset to rest");
            return Ok(());
        }
        let geometry = &self.options.geometry;
        let chain =
            BoneChain::leaf(geometry.page_segments, geometry.segment_width());
        self.attach_slot(slot, chain)
    }

    /// Attach a host-supplied chain to content slot `slot`.
    pub fn attach_slot(
        &mut self,
        slot: usize,
        chain: BoneChain,
    ) -> Result<(), FolioError> {
        chain.ensure_len(self.options.geometry.page_bone_count())?;
        let flags = self.flags();
        let turn_duration = self.options.timing.turn_duration();
        let leaf = self.leaf_mut(slot)?;
        leaf.chain = Some(chain);
        leaf.turn = TurnTimer::new(flags.opened(slot), turn_duration);
        log::debug!("slot {slot} rebuilt");
        Ok(())
    }

    /// Cancel any pending page step and stop animating. Every later tick
    /// and command is a no-op.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.controller.shutdown();
        self.shut_down = true;
        log::info!("book shut down at page {}", self.flags().current_page);
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}
