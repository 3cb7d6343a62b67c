//! Shared utilities for the animation engine.
//!
//! Helpers for exponential damping, turn-progress easing curves, and frame
//! timing.

pub mod damping;
pub mod easing;
pub mod frame_timing;
