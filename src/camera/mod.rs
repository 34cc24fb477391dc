//! Camera system for 3D scene viewing.
//!
//! A fixed look-at camera aimed at the origin whose eye distance is driven
//! by the mouse wheel and dolly keys.

/// Eye-position rig with distance clamping.
pub mod controller;
/// Core camera struct and projection/view builders.
pub mod core;
