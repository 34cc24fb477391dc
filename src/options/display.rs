use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// What gets drawn and how the frame is cleared.
pub struct DisplayOptions {
    /// Draw the X/Y/Z axis indicators at the origin.
    pub show_axes: bool,
    /// Cuboid half-extents along X, Y, Z.
    pub half_extents: [f32; 3],
    /// Frame clear color, sRGB-encoded and written to the surface as-is.
    pub clear_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_axes: false,
            half_extents: [1.0, 1.0, 1.0],
            clear_color: [0.502, 0.502, 0.502],
        }
    }
}
