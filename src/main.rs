//! Headless page-turn driver.
//!
//! Usage: `folio [PAGES] [TARGET] [PRESET.toml]`
//!
//! Builds a book, requests `TARGET`, and runs a fixed 60 Hz frame loop
//! until the book settles, logging every page step and the final pose.
//! Run with `RUST_LOG=info` (or `debug`) to see the output.

use std::path::Path;

use folio::engine::{BookCommand, BookEngine};
use folio::error::FolioError;
use folio::options::BookOptions;

const FRAME: f32 = 1.0 / 60.0;
const MAX_FRAMES: usize = 60 * 60;

fn run(
    pages: usize,
    target: i64,
    preset: Option<&str>,
) -> Result<(), FolioError> {
    let options = match preset {
        Some(path) => BookOptions::load(Path::new(path))?,
        None => BookOptions::default(),
    };
    let mut engine = BookEngine::new(pages, options)?;
    let _ = engine.execute(BookCommand::SetTargetPage { page: target });

    let mut frames = 0;
    let mut settled_for = 0;
    while frames < MAX_FRAMES {
        let report = engine.tick(FRAME);
        frames += 1;
        if let Some(step) = report.step {
            log::info!(
                "frame {frames}: page {} -> {} ({:?})",
                step.from,
                step.to,
                step.kind
            );
        }
        // Keep ticking a second after the last turn so the damping
        // visibly settles in the logged pose.
        if engine.is_settled() && report.turning == 0 {
            settled_for += 1;
            if settled_for >= 60 {
                break;
            }
        } else {
            settled_for = 0;
        }
    }

    let pose = engine.pose();
    log::info!(
        "settled on page {} after {frames} frames (closed: {}, back cover \
         open: {})",
        pose.flags.current_page,
        pose.flags.book_closed,
        pose.flags.back_cover_fully_open
    );
    log::info!(
        "front cover {:.1} deg, back cover {:.1} deg",
        pose.front.bone.turn.to_degrees(),
        pose.back.bone.turn.to_degrees()
    );
    for leaf in &pose.leaves {
        let swing: f32 = leaf.bones.iter().map(|b| b.turn).sum();
        log::info!(
            "leaf {}: opened {}, swing {:.1} deg",
            leaf.slot,
            leaf.opened,
            swing.to_degrees()
        );
    }
    engine.shutdown();
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let pages = args.next().and_then(|a| a.parse().ok()).unwrap_or(4);
    let target = args.next().and_then(|a| a.parse().ok()).unwrap_or(3);
    let preset = args.next();

    if let Err(e) = run(pages, target, preset.as_deref()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
