use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera placement, projection, and zoom limits.
pub struct CameraOptions {
    /// Initial eye position. The camera always looks at the origin.
    pub position: [f32; 3],
    /// Closest allowed eye z coordinate.
    pub min_distance: f32,
    /// Farthest allowed eye z coordinate.
    pub max_distance: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// World units of eye movement per platform wheel unit.
    pub wheel_scale: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [4.0, 4.0, 4.0],
            min_distance: 1.0,
            max_distance: 30.0,
            fovy: 45.0,
            znear: 1.0,
            zfar: 100.0,
            wheel_scale: 0.01,
        }
    }
}
