//! Per-frame update for BookEngine

use web_time::{Duration, Instant};

use super::{BookEngine, FrameReport};
use crate::animation::bend::BendInput;
use crate::animation::cover::cover_target;

impl BookEngine {
    /// Advance the engine by `dt` seconds of logical time.
    ///
    /// Fires at most one due page step, then damps every leaf and cover
    /// toward its target for the new flags. Negative or non-finite deltas
    /// count as zero; longer deltas are clamped to the configured
    /// `max_frame_delta_ms`.
    pub fn tick(&mut self, dt: f32) -> FrameReport {
        if self.shut_down {
            return FrameReport::default();
        }
        let step = Duration::try_from_secs_f32(dt)
            .unwrap_or(Duration::ZERO)
            .min(self.options.timing.max_frame_delta());
        self.elapsed = self.elapsed.saturating_add(step);
        self.update(step.as_secs_f32())
    }

    /// Advance to the wall-clock instant `now`, measuring the delta since
    /// the previous call. The first call only starts the clock.
    pub fn tick_at(&mut self, now: Instant) -> FrameReport {
        let dt = self.frame_clock.tick(now);
        self.tick(dt)
    }

    fn update(&mut self, dt: f32) -> FrameReport {
        let now = self.now();
        let step = self.controller.advance(now);
        if let Some(event) = step {
            log::debug!(
                "page {} -> {} ({:?}, waited {:?})",
                event.from,
                event.to,
                event.kind,
                event.delay
            );
            if self.controller.is_settled() {
                log::debug!("reached page {}", event.to);
            }
        }

        let flags = self.controller.flags();
        let damping = &self.options.damping;
        let curve = self.solver.turn_curve();
        let mut turning = 0;

        for leaf in &mut self.leaves {
            let opened = flags.opened(leaf.slot);
            let _ = leaf.turn.observe(opened, now);
            if leaf.turn.is_turning(now) {
                turning += 1;
            }
            leaf.highlight.update(
                damping.highlight_intensity,
                damping.highlight,
                dt,
            );
            let Some(chain) = leaf.chain.as_mut() else {
                continue;
            };
            let input = BendInput {
                hinge_angle: self.solver.leaf_hinge_angle(
                    leaf.slot,
                    opened,
                    flags.book_closed,
                ),
                turn_progress: leaf.turn.progress(now, curve),
                book_closed: flags.book_closed,
            };
            self.solver.step_chain(
                chain,
                &input,
                damping.page_turn,
                damping.page_fold,
                dt,
            );
        }

        let geometry = &self.options.geometry;
        for cover in [&mut self.front, &mut self.back] {
            let target =
                cover_target(cover.side(), &flags, &self.cover_angles, geometry);
            cover.update(&target, &self.solver, damping, dt);
        }

        FrameReport { step, turning }
    }
}
