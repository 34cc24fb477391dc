//! Mesh generation and the flat-color draw pass.
//!
//! [`geometry`] builds CPU-side meshes (the cuboid and the axis overlay);
//! [`mesh`] uploads them and records draws.

pub mod geometry;
pub mod mesh;
pub(crate) mod pipeline_util;
