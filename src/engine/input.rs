//! Command dispatch for BookEngine

use super::command::{BookCommand, SlotRole};
use super::BookEngine;
use crate::animation::highlight::Highlight;

impl BookEngine {
    /// Execute a command. Returns the clamped target page when the command
    /// changed it.
    pub fn execute(&mut self, command: BookCommand) -> Option<usize> {
        match command {
            BookCommand::SetTargetPage { page } => {
                Some(self.set_target_page(page))
            }
            BookCommand::PointerEnter { slot } => {
                self.set_hovered(slot, true);
                None
            }
            BookCommand::PointerLeave { slot } => {
                self.set_hovered(slot, false);
                None
            }
            BookCommand::Click { slot } => self.click(slot),
        }
    }

    /// Request `page`, clamped to `[0, n + 2]`. The page index then steps
    /// toward it one slot per due step. Returns the clamped target.
    pub fn set_target_page(&mut self, page: i64) -> usize {
        let now = self.now();
        self.controller.set_target_page(page, now)
    }

    /// Turn the clicked slot over (or back) and clear its hover. Returns
    /// the requested page, or `None` for an unknown slot.
    pub fn click(&mut self, slot: usize) -> Option<usize> {
        if self.shut_down {
            return None;
        }
        let Some(role) = SlotRole::of(slot, self.number_of_pages()) else {
            log::debug!("click on unknown slot {slot}");
            return None;
        };
        let target = role.click_target(&self.controller.flags());
        if let Some(highlight) = self.highlight_mut(role) {
            highlight.set_hovered(false);
        }
        let page = i64::try_from(target).unwrap_or(i64::MAX);
        Some(self.set_target_page(page))
    }

    fn set_hovered(&mut self, slot: usize, hovered: bool) {
        if self.shut_down {
            return;
        }
        let Some(role) = SlotRole::of(slot, self.number_of_pages()) else {
            log::debug!("pointer event on unknown slot {slot}");
            return;
        };
        if let Some(highlight) = self.highlight_mut(role) {
            highlight.set_hovered(hovered);
        }
    }

    fn highlight_mut(&mut self, role: SlotRole) -> Option<&mut Highlight> {
        match role {
            SlotRole::FrontCover => Some(self.front.highlight_mut()),
            SlotRole::BackCover => Some(self.back.highlight_mut()),
            SlotRole::Leaf(slot) => self
                .leaves
                .get_mut(slot - 1)
                .map(|leaf| &mut leaf.highlight),
        }
    }
}
