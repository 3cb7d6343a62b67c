// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! 3D page-turn animation for a book of bendable leaves.
//!
//! Folio drives a book made of two rigid covers and `n` content leaves,
//! each leaf a chain of bones. Every frame it steps the displayed page
//! toward the requested one, bends each leaf by damping its bones toward
//! a per-bone curvature target, and swings and slides the covers. Output
//! is a set of bone rotations ready for a skinned-mesh renderer.
//!
//! # Key entry points
//!
//! - [`engine::BookEngine`] - owns the book and runs the frame loop
//! - [`engine::BookCommand`] - navigation and pointer vocabulary
//! - [`options::BookOptions`] - geometry, bend, timing and damping
//!   configuration, loadable from TOML presets
//! - [`animation`] - the page state machine and bend/cover kinematics
//!
//! # Architecture
//!
//! [`animation::transition::PageTransitionController`] owns the page
//! index and fires at most one delayed step per tick. The engine derives
//! per-slot flags from it, feeds them through
//! [`animation::bend::BendSolver`] and [`animation::cover`], and damps
//! every rotation with [`util::damping`] so the result is
//! frame-rate independent.

pub mod animation;
pub mod engine;
pub mod error;
pub mod options;
pub mod util;
