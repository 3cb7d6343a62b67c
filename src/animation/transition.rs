//! Page-index state machine: steps the displayed page toward the
//! requested one, one slot at a time.
//!
//! The controller owns `target_page` (written by the host) and
//! `current_page` (written only by [`PageTransitionController::advance`]).
//! At most one step is pending at any time; it is a plain value, so the
//! controller can be driven by a real timer (arm it for
//! [`next_due`](PageTransitionController::next_due)) or by a frame loop
//! that calls `advance` every tick.

use web_time::{Duration, Instant};

use crate::options::TimingOptions;

/// Which delay tier a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// An ordinary leaf turn.
    Page,
    /// A step that swings a cover: `0 <-> 1` or
    /// `n + 1 <-> n + 2` for `n` content pages.
    Cover,
}

/// One completed page step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    /// Page before the step.
    pub from: usize,
    /// Page after the step (`from ± 1`).
    pub to: usize,
    /// Delay tier used.
    pub kind: StepKind,
    /// Delay waited between arming and firing.
    pub delay: Duration,
    /// When the step fired.
    pub at: Instant,
}

/// Snapshot of the flags derived from `current_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookFlags {
    /// Page the book currently shows.
    pub current_page: usize,
    /// Content leaves between the covers.
    pub number_of_pages: usize,
    /// Shut on either side: `current_page` is `0` or `n + 2`.
    pub book_closed: bool,
    /// Back cover swung over: `current_page == n + 2`.
    pub back_cover_fully_open: bool,
}

impl BookFlags {
    fn derive(current_page: usize, number_of_pages: usize) -> Self {
        let last = number_of_pages + 2;
        Self {
            current_page,
            number_of_pages,
            book_closed: current_page == 0 || current_page == last,
            back_cover_fully_open: current_page == last,
        }
    }

    /// Whether slot `slot` has been turned past.
    pub fn opened(&self, slot: usize) -> bool {
        self.current_page > slot
    }

    /// Every content leaf has been turned; the back cover is showing.
    pub fn is_last_page_reached(&self) -> bool {
        self.current_page > self.number_of_pages
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingStep {
    armed_at: Instant,
    due: Instant,
}

/// Steps `current_page` toward `target_page` with two-tier timing.
#[derive(Debug, Clone)]
pub struct PageTransitionController {
    number_of_pages: usize,
    target_page: usize,
    current_page: usize,
    flags: BookFlags,
    pending: Option<PendingStep>,
    page_step: Duration,
    cover_step: Duration,
    skip_ahead_step: Option<Duration>,
    shut_down: bool,
}

impl PageTransitionController {
    /// Controller for a book with `number_of_pages` content leaves, shut on
    /// its front cover.
    pub fn new(number_of_pages: usize, timing: &TimingOptions) -> Self {
        Self {
            number_of_pages,
            target_page: 0,
            current_page: 0,
            flags: BookFlags::derive(0, number_of_pages),
            pending: None,
            page_step: timing.page_step(),
            cover_step: timing.cover_step(),
            skip_ahead_step: timing.skip_ahead_step(),
            shut_down: false,
        }
    }

    /// Start already showing `page` (clamped), with nothing pending.
    #[must_use]
    pub fn starting_at(mut self, page: usize) -> Self {
        let page = page.min(self.last_page());
        self.current_page = page;
        self.target_page = page;
        self.flags = BookFlags::derive(page, self.number_of_pages);
        self.pending = None;
        self
    }

    /// Highest valid page index (`n + 2`, back cover swung over).
    pub fn last_page(&self) -> usize {
        self.number_of_pages + 2
    }

    /// Content leaves between the covers.
    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    /// Last requested page.
    pub fn target_page(&self) -> usize {
        self.target_page
    }

    /// Page currently shown.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Flags derived from the current page.
    pub fn flags(&self) -> BookFlags {
        self.flags
    }

    /// When the pending step (if any) is due.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Whether the shown page matches the request and nothing is pending.
    pub fn is_settled(&self) -> bool {
        self.pending.is_none() && self.current_page == self.target_page
    }

    /// Request `page`, clamped to `[0, n + 2]`. Returns the clamped target.
    ///
    /// Arms a step if none is pending. A step already pending keeps its
    /// arming time and steers toward the new target when it fires; its
    /// due time moves to the delay tier of the step it has become.
    pub fn set_target_page(&mut self, page: i64, now: Instant) -> usize {
        if self.shut_down {
            return self.target_page;
        }
        let last = self.last_page();
        let clamped = usize::try_from(page).map_or(0, |p| p.min(last));
        if i64::try_from(clamped).ok() != Some(page) {
            log::warn!("target page {page} clamped to {clamped}");
        }
        self.target_page = clamped;
        if self.current_page == clamped {
            return clamped;
        }
        let armed_at = self.pending.map_or(now, |p| p.armed_at);
        self.arm(armed_at);
        clamped
    }

    /// Fire the pending step if it is due at `now`.
    ///
    /// Takes at most one step per call; a late call does not batch
    /// catch-up steps. The next step is armed from `now`.
    pub fn advance(&mut self, now: Instant) -> Option<StepEvent> {
        if self.shut_down {
            return None;
        }
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }

        if self.current_page == self.target_page {
            log::debug!("pending step superseded at page {}", self.current_page);
            self.pending = None;
            return None;
        }

        let from = self.current_page;
        let to = self.next_page();
        let (kind, delay) = self.delay_for(from, to);
        self.current_page = to;
        self.flags = BookFlags::derive(to, self.number_of_pages);
        self.pending = None;
        log::debug!("page step {from} -> {to} ({kind:?}, {delay:?})");

        if self.current_page != self.target_page {
            self.arm(now);
        }

        Some(StepEvent {
            from,
            to,
            kind,
            delay,
            at: now,
        })
    }

    /// Drop the pending step, leaving the current page where it is.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("pending page step cancelled");
        }
    }

    /// Cancel any pending step and ignore every later request.
    pub fn shutdown(&mut self) {
        self.cancel();
        self.shut_down = true;
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Whether the step `from -> to` swings a cover.
    pub fn is_cover_step(&self, from: usize, to: usize) -> bool {
        let (lo, hi) = if from < to { (from, to) } else { (to, from) };
        hi == lo + 1 && (lo == 0 || lo == self.number_of_pages + 1)
    }

    fn next_page(&self) -> usize {
        if self.target_page > self.current_page {
            self.current_page + 1
        } else {
            self.current_page.saturating_sub(1)
        }
    }

    fn delay_for(&self, from: usize, to: usize) -> (StepKind, Duration) {
        if self.is_cover_step(from, to) {
            return (StepKind::Cover, self.cover_step);
        }
        let remaining = self.target_page.abs_diff(from);
        match self.skip_ahead_step {
            Some(fast) if remaining > 2 => (StepKind::Page, fast),
            _ => (StepKind::Page, self.page_step),
        }
    }

    /// Schedule the next step from `armed_at` with the delay of the step
    /// it would take now.
    fn arm(&mut self, armed_at: Instant) {
        let (_, delay) = self.delay_for(self.current_page, self.next_page());
        self.pending = Some(PendingStep {
            armed_at,
            due: armed_at + delay,
        });
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    const PAGE: Duration = Duration::from_millis(150);
    const COVER: Duration = Duration::from_millis(400);

    fn controller(pages: usize) -> PageTransitionController {
        PageTransitionController::new(pages, &TimingOptions::default())
    }

    /// Advance in 10 ms ticks until settled, collecting every step.
    fn run_until_settled(
        c: &mut PageTransitionController,
        start: Instant,
    ) -> Vec<StepEvent> {
        let mut steps = Vec::new();
        let mut now = start;
        for _ in 0..10_000 {
            if c.is_settled() {
                break;
            }
            now += Duration::from_millis(10);
            if let Some(step) = c.advance(now) {
                steps.push(step);
            }
        }
        steps
    }

    #[test]
    fn test_open_to_page_three() {
        let mut c = controller(4);
        let t0 = Instant::now();
        assert_eq!(c.set_target_page(3, t0), 3);

        let steps = run_until_settled(&mut c, t0);
        let pairs: Vec<_> = steps.iter().map(|s| (s.from, s.to)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(steps[0].kind, StepKind::Cover);
        assert_eq!(steps[1].kind, StepKind::Page);
        assert_eq!(steps[2].kind, StepKind::Page);

        assert_eq!(steps[0].at.duration_since(t0), COVER);
        assert_eq!(steps[1].at.duration_since(steps[0].at), PAGE);
        assert_eq!(steps[2].at.duration_since(steps[1].at), PAGE);

        let flags = c.flags();
        assert!(!flags.book_closed);
        let leaves: Vec<bool> = (1..=4).map(|s| flags.opened(s)).collect();
        assert_eq!(leaves, vec![true, true, false, false]);
    }

    #[test]
    fn test_swing_back_cover_over() {
        let mut c = controller(4).starting_at(4);
        let t0 = Instant::now();
        let _ = c.set_target_page(6, t0);
        let steps = run_until_settled(&mut c, t0);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].kind, StepKind::Page);
        assert_eq!(steps[1].kind, StepKind::Cover);
        let flags = c.flags();
        assert!(flags.book_closed);
        assert!(flags.back_cover_fully_open);
        assert!(flags.is_last_page_reached());
    }

    #[test]
    fn test_cover_steps_always_use_long_delay() {
        let mut c = controller(3);
        let t0 = Instant::now();
        let _ = c.set_target_page(5, t0);
        let mut steps = run_until_settled(&mut c, t0);
        let _ = c.set_target_page(0, steps.last().unwrap().at);
        let back = run_until_settled(&mut c, steps.last().unwrap().at);
        steps.extend(back);

        assert_eq!(steps.len(), 10);
        for step in &steps {
            let cover = c.is_cover_step(step.from, step.to);
            assert_eq!(step.kind == StepKind::Cover, cover);
            let expected = if cover { COVER } else { PAGE };
            assert_eq!(step.delay, expected, "{} -> {}", step.from, step.to);
        }
    }

    #[test]
    fn test_book_closed_iff_at_either_end() {
        let pages = 5;
        for page in 0..=pages + 2 {
            let flags = controller(pages).starting_at(page).flags();
            let expected = page == 0 || page == pages + 2;
            assert_eq!(flags.book_closed, expected, "page {page}");
            assert_eq!(flags.back_cover_fully_open, page == pages + 2);
        }
    }

    #[test]
    fn test_out_of_range_targets_clamp() {
        let mut c = controller(4);
        let t0 = Instant::now();
        assert_eq!(c.set_target_page(-3, t0), 0);
        assert!(c.next_due().is_none());
        assert_eq!(c.set_target_page(99, t0), 6);
        assert_eq!(c.target_page(), 6);
    }

    #[test]
    fn test_single_pending_step_survives_retarget() {
        let mut c = controller(4).starting_at(2);
        let t0 = Instant::now();
        let _ = c.set_target_page(4, t0);
        let due = c.next_due().unwrap();

        // Retargeting does not spawn a competing step or move the schedule.
        let _ = c.set_target_page(0, t0 + Duration::from_millis(50));
        assert_eq!(c.next_due(), Some(due));

        let step = c.advance(due).unwrap();
        assert_eq!((step.from, step.to), (2, 1));
    }

    #[test]
    fn test_retarget_to_current_page_supersedes_pending() {
        let mut c = controller(4).starting_at(2);
        let t0 = Instant::now();
        let _ = c.set_target_page(3, t0);
        let _ = c.set_target_page(2, t0);
        assert!(c.advance(t0 + PAGE).is_none());
        assert!(c.is_settled());
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn test_retarget_into_cover_step_waits_cover_delay() {
        let mut c = controller(4).starting_at(1);
        let t0 = Instant::now();
        // Armed as the page step 1 -> 2 ...
        let _ = c.set_target_page(2, t0);
        assert_eq!(c.next_due(), Some(t0 + PAGE));

        // ... but by the time it fires it has become the cover step 1 -> 0.
        let _ = c.set_target_page(0, t0 + Duration::from_millis(20));
        assert_eq!(c.next_due(), Some(t0 + COVER));
        assert!(c.advance(t0 + PAGE).is_none());

        let step = c.advance(t0 + COVER).unwrap();
        assert_eq!((step.from, step.to), (1, 0));
        assert_eq!(step.kind, StepKind::Cover);
        assert_eq!(step.delay, COVER);
    }

    #[test]
    fn test_retarget_out_of_cover_step_uses_page_delay() {
        let mut c = controller(4).starting_at(1);
        let t0 = Instant::now();
        // Armed as the cover step 1 -> 0 ...
        let _ = c.set_target_page(0, t0);
        assert_eq!(c.next_due(), Some(t0 + COVER));

        // ... then turned around into the page step 1 -> 2.
        let _ = c.set_target_page(3, t0 + Duration::from_millis(10));
        assert_eq!(c.next_due(), Some(t0 + PAGE));

        let step = c.advance(t0 + PAGE).unwrap();
        assert_eq!((step.from, step.to), (1, 2));
        assert_eq!(step.kind, StepKind::Page);
        assert_eq!(step.delay, PAGE);
        assert_eq!(step.at.duration_since(t0), PAGE);
    }

    #[test]
    fn test_late_tick_takes_one_step() {
        let mut c = controller(4);
        let t0 = Instant::now();
        let _ = c.set_target_page(5, t0);
        let late = t0 + Duration::from_secs(10);
        assert!(c.advance(late).is_some());
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.next_due(), Some(late + PAGE));
    }

    #[test]
    fn test_skip_ahead_delay_when_far() {
        let timing = TimingOptions {
            skip_ahead_step_ms: Some(50),
            ..TimingOptions::default()
        };
        let mut c = PageTransitionController::new(8, &timing).starting_at(1);
        let t0 = Instant::now();
        let _ = c.set_target_page(6, t0);
        let steps = run_until_settled(&mut c, t0);
        let delays: Vec<u128> =
            steps.iter().map(|s| s.delay.as_millis()).collect();
        assert_eq!(delays, vec![50, 50, 50, 150, 150]);
    }

    #[test]
    fn test_shutdown_cancels_and_ignores() {
        let mut c = controller(4);
        let t0 = Instant::now();
        let _ = c.set_target_page(3, t0);
        c.shutdown();
        assert!(c.next_due().is_none());
        assert!(c.advance(t0 + Duration::from_secs(5)).is_none());
        let _ = c.set_target_page(1, t0);
        assert_eq!(c.current_page(), 0);
        assert!(c.is_shut_down());
    }

    #[test]
    fn test_random_targets_step_by_one_and_settle() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let pages = 6;
        let mut c = controller(pages);
        let mut now = Instant::now();
        let mut last_page = c.current_page();

        for _ in 0..200 {
            if rng.random_bool(0.1) {
                let target = rng.random_range(-2..=(pages as i64 + 4));
                let _ = c.set_target_page(target, now);
            }
            now += Duration::from_millis(rng.random_range(1..=60));
            if let Some(step) = c.advance(now) {
                assert_eq!(step.from, last_page);
                assert_eq!(step.from.abs_diff(step.to), 1);
                last_page = step.to;
            }
            assert_eq!(c.current_page(), last_page);
        }

        let final_target = c.target_page();
        for step in run_until_settled(&mut c, now) {
            assert_eq!(step.from.abs_diff(step.to), 1);
        }
        assert_eq!(c.current_page(), final_target);
    }
}
