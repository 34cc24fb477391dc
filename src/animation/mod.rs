//! Timed animation driven cooperatively from the event loop.

/// Three-state ticker that advances a rotation angle at a fixed cadence.
pub mod ticker;

pub use ticker::{AnimationStatus, AnimationTicker};
