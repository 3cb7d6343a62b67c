//! The engine's complete interactive vocabulary.
//!
//! Every host-facing operation, whether it comes from a pointer ray, a
//! navigation button, or a programmatic call, is a `BookCommand`. Hosts
//! construct commands and pass them to
//! [`BookEngine::execute`](super::BookEngine::execute).

use crate::animation::transition::BookFlags;

// ── Commands ─────────────────────────────────────────────────────────────

/// A discrete operation the engine can perform.
///
/// ```ignore
/// engine.execute(BookCommand::SetTargetPage { page: 3 });
/// engine.execute(BookCommand::Click { slot: 0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookCommand {
    // Navigation
    /// Request a page; out-of-range values are clamped.
    SetTargetPage {
        /// Requested page index.
        page: i64,
    },

    // Pointer
    /// The pointer moved over a slot.
    PointerEnter {
        /// Slot index (`0` front cover, `n + 1` back cover).
        slot: usize,
    },
    /// The pointer left a slot.
    PointerLeave {
        /// Slot index.
        slot: usize,
    },
    /// A slot was clicked: turn it toward the reader or away.
    Click {
        /// Slot index.
        slot: usize,
    },
}

// ── Slot roles ───────────────────────────────────────────────────────────

/// What a slot index refers to in a book with `n` content leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    /// Slot `0`.
    FrontCover,
    /// Slots `1..=n`.
    Leaf(usize),
    /// Slot `n + 1`.
    BackCover,
}

impl SlotRole {
    /// Classify `slot`, or `None` past the back cover.
    pub fn of(slot: usize, number_of_pages: usize) -> Option<Self> {
        match slot {
            0 => Some(Self::FrontCover),
            s if s <= number_of_pages => Some(Self::Leaf(s)),
            s if s == number_of_pages + 1 => Some(Self::BackCover),
            _ => None,
        }
    }

    /// Page a click on this slot requests: a turned slot is turned back,
    /// an unturned one is turned over.
    pub fn click_target(self, flags: &BookFlags) -> usize {
        let current = flags.current_page;
        match self {
            Self::FrontCover => usize::from(current == 0),
            Self::Leaf(slot) => {
                if flags.opened(slot) {
                    slot
                } else {
                    slot + 1
                }
            }
            Self::BackCover => {
                let back = flags.number_of_pages + 1;
                if current == back {
                    back + 1
                } else {
                    back
                }
            }
        }
    }
}
