//! CPU-side mesh generators. Pure functions, no GPU access.

pub mod axes;
pub mod cuboid;

pub use axes::axes;
pub use cuboid::cuboid;
