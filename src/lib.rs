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
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive colored-cuboid viewer built on wgpu and winit.
//!
//! Cubeview draws a box with one solid color per face and lets the user
//! turn, move, scale and zoom it with the keyboard, control-drag it with
//! the mouse, or spin it with a timed animation.
//!
//! # Key entry points
//!
//! - [`engine::session::ViewSession`] - all viewer state, no GPU required
//! - [`engine::CubeEngine`] - the GPU owner that draws a session
//! - [`Viewer`] - a ready-made winit window (feature `viewer`)
//! - [`options::Options`] - TOML-backed configuration
//! - [`DemoKind`] - which inputs are live
//!
//! # Architecture
//!
//! Window events become [`InputEvent`]s, the input processor turns them
//! into [`engine::command::ViewCommand`]s, and each command produces a new
//! [`engine::state::ViewState`] value. The animation ticker runs on the
//! event-loop thread: the loop sleeps until the ticker's next deadline,
//! so there is no second thread and no locking.

pub mod animation;
pub mod camera;
pub mod demo;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use demo::DemoKind;
pub use engine::CubeEngine;
pub use error::CubeviewError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
